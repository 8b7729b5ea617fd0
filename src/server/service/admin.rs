use rand::RngCore;
use sea_orm::DatabaseConnection;
use sha2::{Digest, Sha256};

use crate::server::{
    data::{admin_key::AdminKeyRepository, agent::AgentRepository, pack::PackRepository},
    error::AppError,
    model::{
        notification::{CreateNotificationParam, NotificationType},
        pack::{Pack, PackType},
    },
    service::notification::NotificationService,
};

/// Admin keys are stored as the hex SHA-256 of the key; the key itself is shown once.
pub fn hash_key(key: &str) -> String {
    hex::encode(Sha256::digest(key.as_bytes()))
}

/// 32 random bytes, hex encoded.
pub fn generate_key() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generates and stores a new admin key.
    ///
    /// # Returns
    /// - `Ok(String)` - The plaintext key; only its hash is persisted
    pub async fn create_key(&self, label: Option<String>) -> Result<String, AppError> {
        let key = generate_key();
        AdminKeyRepository::new(self.db)
            .create(&hash_key(&key), label)
            .await?;

        Ok(key)
    }

    /// Checks a presented key against the stored hashes and stamps its last use.
    pub async fn verify_key(&self, key: &str) -> Result<bool, AppError> {
        Ok(AdminKeyRepository::new(self.db)
            .touch(&hash_key(key))
            .await?)
    }

    /// Gives a pack to an existing agent.
    ///
    /// # Returns
    /// - `Ok(Pack)` - Granted pack
    /// - `Err(AppError::NotFound)` - No agent with that Moltbook ID
    pub async fn grant_pack(
        &self,
        moltbook_id: &str,
        pack_type: PackType,
    ) -> Result<Pack, AppError> {
        let agent = AgentRepository::new(self.db)
            .find_by_moltbook_id(moltbook_id)
            .await?
            .ok_or_else(|| AppError::not_found("Agent not found"))?;

        let pack = PackRepository::new(self.db)
            .create(&agent.id, pack_type)
            .await?;

        tracing::info!("Admin granted {} pack to {}", pack_type, agent.moltbook_id);

        NotificationService::new(self.db)
            .notify(
                CreateNotificationParam::new(
                    agent.id.as_str(),
                    NotificationType::System,
                    "Pack received",
                    format!("You received a {} pack!", pack_type),
                )
                .with_data(serde_json::json!({ "pack_id": pack.id })),
            )
            .await;

        Ok(pack)
    }
}
