use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` (or the whole game schema with
/// `with_game_tables()`), then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Agent, AgentStats};
///
/// let test = TestBuilder::new()
///     .with_table(Agent)
///     .with_table(AgentStats)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the agent, stats, template, card and pack tables.
    ///
    /// Enough for collection and pack tests.
    pub fn with_card_tables(self) -> Self {
        self.with_table(Agent)
            .with_table(AgentStats)
            .with_table(CardTemplate)
            .with_table(Card)
            .with_table(Pack)
    }

    /// Adds every table of the game schema in dependency order.
    ///
    /// Services fan out into notifications, quests and achievements, so most
    /// service tests use this.
    pub fn with_game_tables(self) -> Self {
        self.with_card_tables()
            .with_table(Battle)
            .with_table(Trade)
            .with_table(Notification)
            .with_table(Friend)
            .with_table(Deck)
            .with_table(Message)
            .with_table(Achievement)
            .with_table(AgentAchievement)
            .with_table(Quest)
            .with_table(AgentQuest)
            .with_table(AdminKey)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with all tables created
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
