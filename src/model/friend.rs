use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SendFriendRequestDto {
    /// Moltbook ID of the agent to befriend.
    pub friend_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FriendRequestCreatedDto {
    pub friendship_id: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FriendDto {
    pub friendship_id: String,
    pub agent_id: String,
    pub name: String,
    pub since: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FriendsDto {
    pub friends: Vec<FriendDto>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FriendRequestDto {
    pub friendship_id: String,
    /// The other agent: sender for incoming requests, recipient for outgoing ones.
    pub agent_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FriendRequestsDto {
    pub requests: Vec<FriendRequestDto>,
    pub count: usize,
}
