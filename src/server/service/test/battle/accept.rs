use super::*;

/// Tests a challenger win with fixed rolls.
///
/// Both cards are common with 60 base power, so rolls of 30 and 0 give 90 vs 60.
///
/// Expected: challenger +25 ELO and one win, defender -20 ELO and one loss
#[tokio::test]
async fn challenger_wins_on_higher_power() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((challenger, challenger_card), (defender, defender_card)) =
        factory::helpers::create_two_agents_with_cards(db).await?;
    let battle =
        factory::create_battle(db, &challenger.id, &defender.id, &challenger_card.id).await?;

    let result = BattleService::new(db)
        .accept_with_rolls(
            &Agent::from_entity(defender.clone()),
            &battle.id,
            &defender_card.id,
            (30, 0),
        )
        .await?;

    assert_eq!(result.outcome, BattleOutcome::ChallengerWins);
    assert_eq!(result.challenger.power, 90);
    assert_eq!(result.defender.power, 60);
    assert_eq!(result.winner_id(), Some(challenger.id.as_str()));
    assert_eq!(result.challenger.name, challenger.name);
    assert!(result.pack_reward.is_none());

    let winner = stats_of(db, &challenger.id).await?;
    assert_eq!(winner.elo, 1000 + ELO_WIN);
    assert_eq!(winner.wins, 1);
    assert_eq!(winner.battles_since_last_pack, 1);
    let loser = stats_of(db, &defender.id).await?;
    assert_eq!(loser.elo, 1000 - ELO_LOSS);
    assert_eq!(loser.losses, 1);

    let stored = entity::prelude::Battle::find_by_id(battle.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, BattleStatus::Completed.as_str());
    assert_eq!(stored.winner_id.as_deref(), Some(challenger.id.as_str()));
    assert_eq!(stored.defender_card_id.as_deref(), Some(defender_card.id.as_str()));
    assert!(stored.completed_at.is_some());

    Ok(())
}

/// Tests a draw when both sides end on equal power.
///
/// Expected: one draw for each agent, ELO unchanged, no winner stored
#[tokio::test]
async fn equal_power_is_a_draw() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((challenger, challenger_card), (defender, defender_card)) =
        factory::helpers::create_two_agents_with_cards(db).await?;
    let battle =
        factory::create_battle(db, &challenger.id, &defender.id, &challenger_card.id).await?;

    let result = BattleService::new(db)
        .accept_with_rolls(
            &Agent::from_entity(defender.clone()),
            &battle.id,
            &defender_card.id,
            (12, 12),
        )
        .await?;

    assert_eq!(result.outcome, BattleOutcome::Draw);
    assert_eq!(result.winner_id(), None);

    for agent_id in [&challenger.id, &defender.id] {
        let stats = stats_of(db, agent_id).await?;
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.elo, 1000);
        assert_eq!(stats.wins + stats.losses, 0);
    }

    Ok(())
}

/// Tests the win-streak pack reward.
///
/// Verifies the winner with two prior wins since the last reward gets a premium pack
/// and the counter resets.
///
/// Expected: pack_reward Some(Premium), one premium pack owned, counter 0
#[tokio::test]
async fn third_win_grants_premium_pack() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let defender = factory::agent::AgentFactory::new(db)
        .battles_since_last_pack(2)
        .build()
        .await?;
    let challenger = factory::create_agent(db).await?;
    let (_, challenger_card) =
        factory::helpers::create_card_for_agent(db, &challenger.id).await?;
    let (_, defender_card) = factory::helpers::create_card_for_agent(db, &defender.id).await?;
    let battle =
        factory::create_battle(db, &challenger.id, &defender.id, &challenger_card.id).await?;

    let result = BattleService::new(db)
        .accept_with_rolls(
            &Agent::from_entity(defender.clone()),
            &battle.id,
            &defender_card.id,
            (0, 40),
        )
        .await?;

    assert_eq!(result.outcome, BattleOutcome::DefenderWins);
    assert_eq!(result.pack_reward, Some(PackType::Premium));

    let premium_packs = entity::prelude::Pack::find()
        .filter(entity::pack::Column::OwnerAgentId.eq(defender.id.as_str()))
        .filter(entity::pack::Column::PackType.eq(PackType::Premium.as_str()))
        .count(db)
        .await?;
    assert_eq!(premium_packs, 1);
    assert_eq!(stats_of(db, &defender.id).await?.battles_since_last_pack, 0);

    Ok(())
}

/// Tests accepting a battle that was addressed to someone else.
///
/// Expected: Err(NotFound) and the battle stays pending
#[tokio::test]
async fn rejects_battle_for_other_defender() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((challenger, challenger_card), (defender, _)) =
        factory::helpers::create_two_agents_with_cards(db).await?;
    let outsider = factory::create_agent(db).await?;
    let (_, outsider_card) = factory::helpers::create_card_for_agent(db, &outsider.id).await?;
    let battle =
        factory::create_battle(db, &challenger.id, &defender.id, &challenger_card.id).await?;

    let result = BattleService::new(db)
        .accept_with_rolls(
            &Agent::from_entity(outsider),
            &battle.id,
            &outsider_card.id,
            (0, 0),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    let stored = entity::prelude::Battle::find_by_id(battle.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, BattleStatus::Pending.as_str());

    Ok(())
}

/// Tests accepting with a card the defender does not own.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_defender_card_not_owned() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((challenger, challenger_card), (defender, _)) =
        factory::helpers::create_two_agents_with_cards(db).await?;
    let battle =
        factory::create_battle(db, &challenger.id, &defender.id, &challenger_card.id).await?;

    let result = BattleService::new(db)
        .accept_with_rolls(
            &Agent::from_entity(defender),
            &battle.id,
            &challenger_card.id,
            (0, 0),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests accepting after the challenger traded their card away.
///
/// Expected: Err(Conflict) and no stats change
#[tokio::test]
async fn rejects_when_challenger_card_moved() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((challenger, challenger_card), (defender, defender_card)) =
        factory::helpers::create_two_agents_with_cards(db).await?;
    let battle =
        factory::create_battle(db, &challenger.id, &defender.id, &challenger_card.id).await?;

    entity::prelude::Card::update_many()
        .col_expr(
            entity::card::Column::OwnerAgentId,
            sea_orm::sea_query::Expr::value(defender.id.clone()),
        )
        .filter(entity::card::Column::Id.eq(challenger_card.id.as_str()))
        .exec(db)
        .await?;

    let result = BattleService::new(db)
        .accept_with_rolls(
            &Agent::from_entity(defender.clone()),
            &battle.id,
            &defender_card.id,
            (0, 0),
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(stats_of(db, &defender.id).await?.elo, 1000);

    Ok(())
}

/// Tests that a rejected accept leaves the battle untouched.
///
/// Verifies the ownership check rolls back the battle transaction: once the
/// challenger's card is back with its owner the same battle resolves normally.
///
/// Expected: Err(Conflict) with the battle still pending, then Ok on retry
#[tokio::test]
async fn conflict_rolls_back_and_battle_stays_acceptable() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((challenger, challenger_card), (defender, defender_card)) =
        factory::helpers::create_two_agents_with_cards(db).await?;
    let battle =
        factory::create_battle(db, &challenger.id, &defender.id, &challenger_card.id).await?;
    let defender = Agent::from_entity(defender);

    let move_card = |owner: String| {
        entity::prelude::Card::update_many()
            .col_expr(
                entity::card::Column::OwnerAgentId,
                sea_orm::sea_query::Expr::value(owner),
            )
            .filter(entity::card::Column::Id.eq(challenger_card.id.as_str()))
            .exec(db)
    };

    move_card(defender.id.clone()).await?;
    let service = BattleService::new(db);
    let result = service
        .accept_with_rolls(&defender, &battle.id, &defender_card.id, (10, 0))
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let stored = entity::prelude::Battle::find_by_id(battle.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, BattleStatus::Pending.as_str());
    assert!(stored.winner_id.is_none());

    move_card(challenger.id.clone()).await?;
    let resolved = service
        .accept_with_rolls(&defender, &battle.id, &defender_card.id, (10, 0))
        .await?;
    assert_eq!(resolved.outcome, BattleOutcome::ChallengerWins);
    assert_eq!(stats_of(db, &challenger.id).await?.wins, 1);

    Ok(())
}

/// Tests that a resolved battle cannot be accepted twice.
///
/// Expected: second accept returns Err(NotFound)
#[tokio::test]
async fn rejects_second_accept() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((challenger, challenger_card), (defender, defender_card)) =
        factory::helpers::create_two_agents_with_cards(db).await?;
    let battle =
        factory::create_battle(db, &challenger.id, &defender.id, &challenger_card.id).await?;
    let defender = Agent::from_entity(defender);

    let service = BattleService::new(db);
    service
        .accept_with_rolls(&defender, &battle.id, &defender_card.id, (1, 0))
        .await?;
    let result = service
        .accept_with_rolls(&defender, &battle.id, &defender_card.id, (1, 0))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(stats_of(db, &challenger.id).await?.wins, 1);

    Ok(())
}
