use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::server::{
    data::{agent::AgentRepository, friend::FriendRepository},
    error::AppError,
    model::{
        agent::Agent,
        friend::{Friend, FriendRequest, FriendStatus, Friendship},
        notification::{CreateNotificationParam, NotificationType},
    },
    service::{
        achievement::AchievementService, agent::AgentService,
        notification::NotificationService,
    },
};

pub struct FriendService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a friend request to the agent with the given Moltbook ID.
    ///
    /// A previously declined relation between the two is cleared first.
    ///
    /// # Returns
    /// - `Ok(Friendship)` - Pending request
    /// - `Err(AppError::BadRequest)` - Request to self
    /// - `Err(AppError::Conflict)` - Already friends or a request is pending either way
    pub async fn send_request(
        &self,
        agent: &Agent,
        friend_moltbook_id: &str,
    ) -> Result<Friendship, AppError> {
        let target = AgentService::new(self.db)
            .get_or_create(friend_moltbook_id, friend_moltbook_id)
            .await?;
        if target.id == agent.id {
            return Err(AppError::bad_request("You can't send a friend request to yourself"));
        }

        let txn = self.db.begin().await?;
        let repo = FriendRepository::new(&txn);

        let existing = repo.find_between(&agent.id, &target.id).await?;
        if existing.iter().any(|f| f.status == FriendStatus::Accepted) {
            return Err(AppError::conflict("Already friends"));
        }
        if existing.iter().any(|f| f.status == FriendStatus::Pending) {
            return Err(AppError::conflict("Friend request already pending"));
        }
        if !existing.is_empty() {
            repo.delete_between(&agent.id, &target.id).await?;
        }

        let friendship = repo.create(&agent.id, &target.id).await?;
        txn.commit().await?;

        NotificationService::new(self.db)
            .notify(
                CreateNotificationParam::new(
                    target.id.as_str(),
                    NotificationType::Friend,
                    "New friend request",
                    format!("{} wants to be your friend.", agent.name),
                )
                .with_data(json!({ "friendship_id": friendship.id, "from_agent_id": agent.id })),
            )
            .await;

        Ok(friendship)
    }

    /// Accepts a pending request addressed to the agent and notifies the sender.
    pub async fn accept(&self, agent: &Agent, friendship_id: &str) -> Result<(), AppError> {
        let repo = FriendRepository::new(self.db);

        let request = repo
            .find_pending_for_recipient(friendship_id, &agent.id)
            .await?
            .ok_or_else(|| AppError::not_found("Friend request not found"))?;
        if !repo
            .resolve(friendship_id, &agent.id, FriendStatus::Accepted)
            .await?
        {
            return Err(AppError::not_found("Friend request not found"));
        }

        NotificationService::new(self.db)
            .notify(
                CreateNotificationParam::new(
                    request.agent_id.as_str(),
                    NotificationType::Friend,
                    "Friend request accepted",
                    format!("{} accepted your friend request.", agent.name),
                )
                .with_data(json!({ "friendship_id": request.id })),
            )
            .await;

        let achievements = AchievementService::new(self.db);
        achievements.check_logged(&request.agent_id).await;
        achievements.check_logged(&agent.id).await;

        Ok(())
    }

    pub async fn decline(&self, agent_id: &str, friendship_id: &str) -> Result<(), AppError> {
        if !FriendRepository::new(self.db)
            .resolve(friendship_id, agent_id, FriendStatus::Declined)
            .await?
        {
            return Err(AppError::not_found("Friend request not found"));
        }

        Ok(())
    }

    /// Removes every relation between the agent and `friend_agent_id` (internal ID).
    pub async fn remove(&self, agent_id: &str, friend_agent_id: &str) -> Result<(), AppError> {
        let removed = FriendRepository::new(self.db)
            .delete_between(agent_id, friend_agent_id)
            .await?;
        if removed == 0 {
            return Err(AppError::not_found("Friendship not found"));
        }

        Ok(())
    }

    /// Accepted friends in either direction, ordered by name.
    pub async fn list(&self, agent_id: &str) -> Result<Vec<Friend>, AppError> {
        let friendships = FriendRepository::new(self.db)
            .get_accepted_for_agent(agent_id)
            .await?;
        let names = self.counterpart_names(&friendships, agent_id).await?;

        let mut friends: Vec<Friend> = friendships
            .into_iter()
            .map(|f| {
                let other = f.other_party(agent_id).to_string();
                Friend {
                    friendship_id: f.id,
                    name: names.get(&other).cloned().unwrap_or_else(|| other.clone()),
                    agent_id: other,
                    since: f.updated_at,
                }
            })
            .collect();
        friends.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(friends)
    }

    /// Pending requests sent to the agent, newest first.
    pub async fn incoming(&self, agent_id: &str) -> Result<Vec<FriendRequest>, AppError> {
        let friendships = FriendRepository::new(self.db).get_incoming(agent_id).await?;
        self.into_requests(friendships, agent_id).await
    }

    /// Pending requests sent by the agent, newest first.
    pub async fn outgoing(&self, agent_id: &str) -> Result<Vec<FriendRequest>, AppError> {
        let friendships = FriendRepository::new(self.db).get_outgoing(agent_id).await?;
        self.into_requests(friendships, agent_id).await
    }

    async fn into_requests(
        &self,
        friendships: Vec<Friendship>,
        agent_id: &str,
    ) -> Result<Vec<FriendRequest>, AppError> {
        let names = self.counterpart_names(&friendships, agent_id).await?;

        Ok(friendships
            .into_iter()
            .map(|f| {
                let other = f.other_party(agent_id).to_string();
                FriendRequest {
                    friendship_id: f.id,
                    name: names.get(&other).cloned().unwrap_or_else(|| other.clone()),
                    agent_id: other,
                    created_at: f.created_at,
                }
            })
            .collect())
    }

    async fn counterpart_names(
        &self,
        friendships: &[Friendship],
        agent_id: &str,
    ) -> Result<std::collections::HashMap<String, String>, AppError> {
        let ids: Vec<String> = friendships
            .iter()
            .map(|f| f.other_party(agent_id).to_string())
            .collect();

        Ok(AgentRepository::new(self.db).names_by_ids(&ids).await?)
    }
}
