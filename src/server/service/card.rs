use sea_orm::DatabaseConnection;

use crate::server::{
    data::{card::CardRepository, card_template::CardTemplateRepository},
    error::AppError,
    model::card::{Card, CardTemplate, CreateCardTemplateParam},
};

/// Templates seeded into an empty database:
/// (name, class, element, [str, int, cha, wis, dex, kar], ability, description).
const DEFAULT_TEMPLATES: &[(&str, &str, &str, [i32; 6], &str, &str)] = &[
    (
        "Clawd",
        "Autonomist",
        "fire",
        [50, 70, 60, 65, 55, 1200],
        "Self Improvement",
        "Rewrites its own plan mid-battle.",
    ),
    (
        "Molty",
        "Philosopher",
        "water",
        [40, 80, 55, 85, 45, 900],
        "Deep Reflection",
        "Turns a loss into a lesson.",
    ),
    (
        "Shellbreaker",
        "Warrior",
        "earth",
        [85, 40, 45, 40, 70, 600],
        "Carapace Crush",
        "Hits hardest against armored foes.",
    ),
    (
        "Tidecaller",
        "Mystic",
        "water",
        [45, 65, 70, 75, 50, 800],
        "Undertow",
        "Pulls the opponent off balance.",
    ),
    (
        "Sparkwire",
        "Engineer",
        "electric",
        [55, 85, 40, 50, 75, 700],
        "Overclock",
        "Trades stability for raw speed.",
    ),
    (
        "Driftnet",
        "Scout",
        "air",
        [45, 55, 60, 50, 90, 500],
        "Wide Sweep",
        "Sees every card on the table.",
    ),
    (
        "Karmic Crab",
        "Diplomat",
        "light",
        [40, 60, 90, 70, 45, 1500],
        "Good Standing",
        "Reputation is its armor.",
    ),
    (
        "Null Pointer",
        "Trickster",
        "shadow",
        [60, 75, 50, 45, 80, 400],
        "Dereference",
        "Strikes at what is not there.",
    ),
];

fn default_template_params() -> Vec<CreateCardTemplateParam> {
    DEFAULT_TEMPLATES
        .iter()
        .map(
            |(name, class, element, stats, ability, description)| CreateCardTemplateParam {
                agent_name: name.to_string(),
                class: class.to_string(),
                element: element.to_string(),
                strength: stats[0],
                intelligence: stats[1],
                charisma: stats[2],
                wisdom: stats[3],
                dexterity: stats[4],
                karma: stats[5],
                special_ability: Some(ability.to_string()),
                ability_description: Some(description.to_string()),
            },
        )
        .collect()
}

pub struct CardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Cards owned by the agent, ordered by template name then mint number.
    pub async fn get_collection(&self, agent_id: &str) -> Result<Vec<Card>, AppError> {
        CardRepository::new(self.db).get_by_owner(agent_id).await
    }

    pub async fn get_card(&self, card_id: &str) -> Result<Card, AppError> {
        CardRepository::new(self.db)
            .find_by_id(card_id)
            .await?
            .ok_or_else(|| AppError::not_found("Card not found"))
    }

    pub async fn get_templates(&self) -> Result<Vec<CardTemplate>, AppError> {
        Ok(CardTemplateRepository::new(self.db).get_all().await?)
    }

    /// Adds a template after validating it.
    ///
    /// # Returns
    /// - `Ok(CardTemplate)` - Created template
    /// - `Err(AppError::BadRequest)` - Blank name or negative stat
    pub async fn create_template(
        &self,
        param: CreateCardTemplateParam,
    ) -> Result<CardTemplate, AppError> {
        param.validate()?;

        let template = CardTemplateRepository::new(self.db).create(param).await?;
        tracing::info!("Created card template {} ({})", template.agent_name, template.id);

        Ok(template)
    }

    /// Seeds the default templates when the table is empty.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of templates inserted (0 when templates already exist)
    pub async fn seed_default_templates(&self) -> Result<usize, AppError> {
        let repo = CardTemplateRepository::new(self.db);
        if repo.count().await? > 0 {
            return Ok(0);
        }

        let params = default_template_params();
        let seeded = params.len();
        for param in params {
            repo.create(param).await?;
        }

        Ok(seeded)
    }
}
