use super::*;

/// Tests completing a pending battle.
///
/// Expected: true, with powers, winner and completion time stored
#[tokio::test]
async fn completes_pending_battle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((challenger, card_a), (defender, card_b)) =
        factory::helpers::create_two_agents_with_cards(db).await?;

    let repo = BattleRepository::new(db);
    let battle = repo.create(&challenger.id, &defender.id, &card_a.id).await?;
    assert_eq!(battle.status, BattleStatus::Pending);

    let completed = repo
        .complete(
            &battle.id,
            CompleteBattleParam {
                defender_card_id: card_b.id.clone(),
                challenger_power: 90,
                defender_power: 70,
                winner_id: Some(challenger.id.clone()),
            },
        )
        .await?;

    assert!(completed);
    let history = repo.get_completed_for_agent(&defender.id, 20).await?;
    assert_eq!(history.len(), 1);
    let stored = &history[0];
    assert_eq!(stored.status, BattleStatus::Completed);
    assert_eq!(stored.defender_card_id.as_deref(), Some(card_b.id.as_str()));
    assert_eq!(stored.challenger_power, Some(90));
    assert_eq!(stored.winner_id.as_deref(), Some(challenger.id.as_str()));
    assert!(stored.completed_at.is_some());

    Ok(())
}

/// Tests completing a battle that is no longer pending.
///
/// Expected: false on the second completion
#[tokio::test]
async fn does_not_complete_twice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((challenger, card_a), (defender, card_b)) =
        factory::helpers::create_two_agents_with_cards(db).await?;

    let repo = BattleRepository::new(db);
    let battle = repo.create(&challenger.id, &defender.id, &card_a.id).await?;
    let param = CompleteBattleParam {
        defender_card_id: card_b.id.clone(),
        challenger_power: 50,
        defender_power: 50,
        winner_id: None,
    };

    assert!(repo.complete(&battle.id, param.clone()).await?);
    assert!(!repo.complete(&battle.id, param).await?);

    Ok(())
}
