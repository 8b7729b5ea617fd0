use super::*;

/// Tests fetching a collection ordered by template name then mint number.
///
/// Expected: Ok with the agent's cards only, in name/mint order
#[tokio::test]
async fn orders_by_template_name_then_mint() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::create_agent(db).await?;
    let other = factory::create_agent(db).await?;

    let zed = factory::card_template::CardTemplateFactory::new(db)
        .agent_name("Zed")
        .build()
        .await?;
    let abe = factory::card_template::CardTemplateFactory::new(db)
        .agent_name("Abe")
        .build()
        .await?;

    factory::card::CardFactory::new(db, zed.id)
        .owner(Some(agent.id.clone()))
        .build()
        .await?;
    factory::card::CardFactory::new(db, abe.id)
        .owner(Some(agent.id.clone()))
        .mint_number(2)
        .build()
        .await?;
    factory::card::CardFactory::new(db, abe.id)
        .owner(Some(agent.id.clone()))
        .mint_number(1)
        .build()
        .await?;
    factory::create_card(db, abe.id, &other.id).await?;

    let cards = CardRepository::new(db).get_by_owner(&agent.id).await?;

    let order: Vec<(String, i32)> = cards.iter().map(|c| (c.name.clone(), c.mint_number)).collect();
    assert_eq!(
        order,
        vec![
            ("Abe".to_string(), 1),
            ("Abe".to_string(), 2),
            ("Zed".to_string(), 1)
        ]
    );

    Ok(())
}

/// Tests fetching the collection of an agent with no cards.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_collection() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::create_agent(db).await?;

    let cards = CardRepository::new(db).get_by_owner(&agent.id).await?;

    assert!(cards.is_empty());

    Ok(())
}
