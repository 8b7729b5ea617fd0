use crate::{
    model::achievement::RewardDto,
    server::{error::AppError, model::pack::PackType},
};

/// What an achievement or quest pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reward {
    Pack(PackType),
    Karma(i32),
}

impl Reward {
    /// Rebuilds a reward from its `reward_kind`, `reward_pack_type` and `reward_amount` columns.
    pub fn from_columns(
        kind: &str,
        pack_type: Option<&str>,
        amount: Option<i32>,
    ) -> Result<Self, AppError> {
        match (kind, pack_type, amount) {
            ("pack", Some(pack_type), _) => Ok(Reward::Pack(PackType::from_stored(pack_type)?)),
            ("karma", _, Some(amount)) => Ok(Reward::Karma(amount)),
            _ => Err(AppError::InternalError(format!(
                "Malformed reward columns: kind '{}'",
                kind
            ))),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Reward::Pack(_) => "pack",
            Reward::Karma(_) => "karma",
        }
    }

    pub fn pack_type(&self) -> Option<PackType> {
        match self {
            Reward::Pack(pack_type) => Some(*pack_type),
            Reward::Karma(_) => None,
        }
    }

    pub fn amount(&self) -> Option<i32> {
        match self {
            Reward::Pack(_) => None,
            Reward::Karma(amount) => Some(*amount),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Reward::Pack(pack_type) => format!("a {} pack", pack_type),
            Reward::Karma(amount) => format!("{} karma", amount),
        }
    }

    pub fn into_dto(self) -> RewardDto {
        RewardDto {
            kind: self.kind().to_string(),
            pack_type: self.pack_type().map(|p| p.as_str().to_string()),
            amount: self.amount(),
        }
    }
}
