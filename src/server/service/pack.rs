use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        agent_stats::AgentStatsRepository, card::CardRepository,
        card_template::CardTemplateRepository, pack::PackRepository,
    },
    error::AppError,
    model::{
        agent::StatsDelta,
        pack::{draw_cards, OpenedPack, Pack, PackType},
        quest::QuestGoal,
    },
    service::quest::QuestService,
};

pub struct PackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_pack(&self, agent_id: &str, pack_type: PackType) -> Result<Pack, AppError> {
        PackRepository::new(self.db).create(agent_id, pack_type).await
    }

    /// Unopened packs of the agent, newest first.
    pub async fn get_packs(&self, agent_id: &str) -> Result<Vec<Pack>, AppError> {
        PackRepository::new(self.db)
            .get_unopened_by_owner(agent_id)
            .await
    }

    /// Opens one of the agent's packs and mints its cards.
    ///
    /// The pack flag, the minted cards and the stat counters change in one transaction.
    /// Quest progress is recorded afterwards and never fails the call.
    ///
    /// # Returns
    /// - `Ok(OpenedPack)` - Pack with the minted cards
    /// - `Err(AppError::NotFound)` - Unknown pack or owned by another agent
    /// - `Err(AppError::Conflict)` - Pack already opened
    /// - `Err(AppError::NoCardTemplates)` - No card templates exist
    pub async fn open_pack(&self, agent_id: &str, pack_id: &str) -> Result<OpenedPack, AppError> {
        let mut pack = PackRepository::new(self.db)
            .find_by_id(pack_id)
            .await?
            .filter(|pack| pack.owner_agent_id == agent_id)
            .ok_or_else(|| AppError::not_found("Pack not found"))?;
        if pack.opened {
            return Err(AppError::conflict("Pack already opened"));
        }

        let template_ids = CardTemplateRepository::new(self.db).get_all_ids().await?;
        if template_ids.is_empty() {
            return Err(AppError::NoCardTemplates);
        }

        let draws = {
            let mut rng = rand::rng();
            draw_cards(&mut rng, pack.pack_type, &template_ids)
        };

        let txn = self.db.begin().await?;

        if !PackRepository::new(&txn).mark_opened(&pack.id).await? {
            return Err(AppError::conflict("Pack already opened"));
        }

        let card_repo = CardRepository::new(&txn);
        let mut cards = Vec::with_capacity(draws.len());
        for draw in &draws {
            cards.push(card_repo.mint(agent_id, draw).await?);
        }

        AgentStatsRepository::new(&txn)
            .apply(
                agent_id,
                StatsDelta {
                    packs_opened: 1,
                    cards_collected: cards.len() as i32,
                    ..Default::default()
                },
            )
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "Agent {} opened {} pack {}",
            agent_id,
            pack.pack_type,
            pack.id
        );

        QuestService::new(self.db)
            .record_progress_logged(agent_id, QuestGoal::PacksOpened, 1)
            .await;

        pack.opened = true;
        Ok(OpenedPack { pack, cards })
    }
}
