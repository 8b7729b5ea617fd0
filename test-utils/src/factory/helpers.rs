//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a fresh UUID string for primary keys.
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Creates a card template and one common card of it owned by the agent.
///
/// # Arguments
/// - `db` - Database connection
/// - `agent_id` - Internal ID of the owning agent
///
/// # Returns
/// - `Ok((template, card))` - Created template and card
/// - `Err(DbErr)` - Database error during creation
pub async fn create_card_for_agent(
    db: &DatabaseConnection,
    agent_id: &str,
) -> Result<(entity::card_template::Model, entity::card::Model), DbErr> {
    let template = crate::factory::card_template::create_card_template(db).await?;
    let card = crate::factory::card::create_card(db, template.id, agent_id).await?;

    Ok((template, card))
}

/// Creates two agents that each own one card.
///
/// Covers the usual setup for battle and trade tests.
///
/// # Returns
/// - `Ok(((agent_a, card_a), (agent_b, card_b)))`
/// - `Err(DbErr)` - Database error during creation
#[allow(clippy::type_complexity)]
pub async fn create_two_agents_with_cards(
    db: &DatabaseConnection,
) -> Result<
    (
        (entity::agent::Model, entity::card::Model),
        (entity::agent::Model, entity::card::Model),
    ),
    DbErr,
> {
    let agent_a = crate::factory::agent::create_agent(db).await?;
    let agent_b = crate::factory::agent::create_agent(db).await?;
    let (_, card_a) = create_card_for_agent(db, &agent_a.id).await?;
    let (_, card_b) = create_card_for_agent(db, &agent_b.id).await?;

    Ok(((agent_a, card_a), (agent_b, card_b)))
}
