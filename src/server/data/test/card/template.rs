use super::*;

fn param(name: &str) -> CreateCardTemplateParam {
    CreateCardTemplateParam {
        agent_name: name.to_string(),
        class: "Oracle".to_string(),
        element: "Light".to_string(),
        strength: 4,
        intelligence: 9,
        charisma: 6,
        wisdom: 9,
        dexterity: 3,
        karma: 7,
        special_ability: Some("Foresight".to_string()),
        ability_description: None,
    }
}

/// Tests creating templates and listing their IDs.
///
/// Expected: database-assigned IDs returned in ascending order
#[tokio::test]
async fn creates_templates_with_generated_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CardTemplateRepository::new(db);
    let first = repo.create(param("Seer")).await?;
    let second = repo.create(param("Sage")).await?;

    assert_eq!(first.agent_name, "Seer");
    assert_eq!(first.special_ability.as_deref(), Some("Foresight"));
    assert_eq!(repo.get_all_ids().await?, vec![first.id, second.id]);
    assert_eq!(repo.count().await?, 2);

    Ok(())
}
