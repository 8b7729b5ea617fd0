use chrono::{DateTime, Utc};

use crate::{
    model::friend::{FriendDto, FriendRequestDto},
    server::error::AppError,
};

string_enum! {
    pub enum FriendStatus {
        Pending => "pending",
        Accepted => "accepted",
        Declined => "declined",
    }
}

/// A friendship row; `agent_id` sent the request to `friend_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Friendship {
    pub id: String,
    pub agent_id: String,
    pub friend_id: String,
    pub status: FriendStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Friendship {
    pub fn from_entity(entity: entity::friend::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            agent_id: entity.agent_id,
            friend_id: entity.friend_id,
            status: FriendStatus::from_stored(&entity.status)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// The participant that is not `agent_id`.
    pub fn other_party(&self, agent_id: &str) -> &str {
        if self.agent_id == agent_id {
            &self.friend_id
        } else {
            &self.agent_id
        }
    }
}

/// An accepted friend as seen from one side.
#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    pub friendship_id: String,
    pub agent_id: String,
    pub name: String,
    pub since: DateTime<Utc>,
}

impl Friend {
    pub fn into_dto(self) -> FriendDto {
        FriendDto {
            friendship_id: self.friendship_id,
            agent_id: self.agent_id,
            name: self.name,
            since: self.since,
        }
    }
}

/// A pending request, naming the counterpart.
#[derive(Debug, Clone, PartialEq)]
pub struct FriendRequest {
    pub friendship_id: String,
    pub agent_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl FriendRequest {
    pub fn into_dto(self) -> FriendRequestDto {
        FriendRequestDto {
            friendship_id: self.friendship_id,
            agent_id: self.agent_id,
            name: self.name,
            created_at: self.created_at,
        }
    }
}
