use super::*;

fn template_param(name: &str, strength: i32) -> CreateCardTemplateParam {
    CreateCardTemplateParam {
        agent_name: name.to_string(),
        class: "Autonomist".to_string(),
        element: "fire".to_string(),
        strength,
        intelligence: 50,
        charisma: 50,
        wisdom: 50,
        dexterity: 50,
        karma: 50,
        special_ability: None,
        ability_description: None,
    }
}

/// Tests seeding the default templates into an empty table.
///
/// Expected: 8 templates on the first run, 0 on the second
#[tokio::test]
async fn seeds_defaults_only_when_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CardService::new(db);
    let seeded = service.seed_default_templates().await?;

    assert_eq!(seeded, 8);
    assert_eq!(service.seed_default_templates().await?, 0);
    assert_eq!(service.get_templates().await?.len(), 8);

    Ok(())
}

/// Tests creating a custom template.
///
/// Expected: stored template listed alongside existing ones
#[tokio::test]
async fn creates_template() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CardService::new(db);
    let template = service
        .create_template(template_param("Byte Baron", 70))
        .await?;

    assert_eq!(template.agent_name, "Byte Baron");
    assert_eq!(template.strength, 70);
    assert_eq!(service.get_templates().await?.len(), 1);

    Ok(())
}

/// Tests template validation.
///
/// Expected: Err(BadRequest) for a blank name, a negative stat and a stat above the cap
#[tokio::test]
async fn rejects_invalid_template() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CardService::new(db);
    let blank = service.create_template(template_param("  ", 10)).await;
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    let negative = service.create_template(template_param("Glitch", -1)).await;
    assert!(matches!(negative, Err(AppError::BadRequest(_))));

    let oversized = service
        .create_template(template_param("Overflow", i32::MAX / 6 * 6))
        .await;
    assert!(matches!(oversized, Err(AppError::BadRequest(_))));

    assert!(service.get_templates().await?.is_empty());

    Ok(())
}
