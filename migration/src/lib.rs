pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_agent_table;
mod m20260110_000002_create_agent_stats_table;
mod m20260110_000003_create_card_template_table;
mod m20260110_000004_create_card_table;
mod m20260110_000005_create_pack_table;
mod m20260111_000006_create_battle_table;
mod m20260111_000007_create_trade_table;
mod m20260112_000008_create_notification_table;
mod m20260112_000009_create_friend_table;
mod m20260112_000010_create_deck_table;
mod m20260112_000011_create_message_table;
mod m20260114_000012_create_achievement_table;
mod m20260114_000013_create_agent_achievement_table;
mod m20260115_000014_create_quest_table;
mod m20260115_000015_create_agent_quest_table;
mod m20260118_000016_create_admin_key_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_agent_table::Migration),
            Box::new(m20260110_000002_create_agent_stats_table::Migration),
            Box::new(m20260110_000003_create_card_template_table::Migration),
            Box::new(m20260110_000004_create_card_table::Migration),
            Box::new(m20260110_000005_create_pack_table::Migration),
            Box::new(m20260111_000006_create_battle_table::Migration),
            Box::new(m20260111_000007_create_trade_table::Migration),
            Box::new(m20260112_000008_create_notification_table::Migration),
            Box::new(m20260112_000009_create_friend_table::Migration),
            Box::new(m20260112_000010_create_deck_table::Migration),
            Box::new(m20260112_000011_create_message_table::Migration),
            Box::new(m20260114_000012_create_achievement_table::Migration),
            Box::new(m20260114_000013_create_agent_achievement_table::Migration),
            Box::new(m20260115_000014_create_quest_table::Migration),
            Box::new(m20260115_000015_create_agent_quest_table::Migration),
            Box::new(m20260118_000016_create_admin_key_table::Migration),
        ]
    }
}
