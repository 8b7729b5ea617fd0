use super::*;

/// Tests minting cards of one template.
///
/// Verifies mint numbers count up per template and modifiers are added to the
/// template's base stats.
///
/// Expected: mint numbers 1 then 2, effective strength 13
#[tokio::test]
async fn mints_with_sequential_mint_numbers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::create_agent(db).await?;
    let template = factory::create_card_template(db).await?;

    let draw = CardDraw {
        template_id: template.id,
        rarity: Rarity::Rare,
        mods: StatModifiers {
            strength: 3,
            ..Default::default()
        },
    };

    let repo = CardRepository::new(db);
    let first = repo.mint(&agent.id, &draw).await?;
    let second = repo.mint(&agent.id, &draw).await?;

    assert_eq!(first.mint_number, 1);
    assert_eq!(second.mint_number, 2);
    assert_eq!(first.strength, 13);
    assert_eq!(first.rarity, Rarity::Rare);
    assert_eq!(first.owner_agent_id.as_deref(), Some(agent.id.as_str()));
    // (13 + 10 * 5) * 1.25
    assert_eq!(first.total_power(), 78);

    Ok(())
}

/// Tests minting from a template that does not exist.
///
/// Expected: Err(AppError::InternalError)
#[tokio::test]
async fn fails_for_unknown_template() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::create_agent(db).await?;

    let draw = CardDraw {
        template_id: 999,
        rarity: Rarity::Common,
        mods: StatModifiers::default(),
    };
    let result = CardRepository::new(db).mint(&agent.id, &draw).await;

    assert!(matches!(result, Err(AppError::InternalError(_))));

    Ok(())
}
