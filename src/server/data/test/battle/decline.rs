use super::*;

/// Tests that only the defender can decline a pending battle.
///
/// Expected: false for the challenger, true for the defender, then not pending
#[tokio::test]
async fn only_defender_declines() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((challenger, card_a), (defender, _)) =
        factory::helpers::create_two_agents_with_cards(db).await?;
    let battle = factory::create_battle(db, &challenger.id, &defender.id, &card_a.id).await?;

    let repo = BattleRepository::new(db);

    assert!(!repo.decline(&battle.id, &challenger.id).await?);
    assert!(repo.decline(&battle.id, &defender.id).await?);
    assert!(repo
        .find_pending_for_defender(&battle.id, &defender.id)
        .await?
        .is_none());

    Ok(())
}
