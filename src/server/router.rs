use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::server::{
    controller::{
        achievement, admin, battle, card, deck, friend, health, leaderboard, message,
        notification, pack, profile, quest, trade,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        // Profile & collection
        .route("/api/profile", get(profile::get_profile))
        .route("/api/profile/battles", get(profile::get_battle_history))
        .route("/api/profile/trades", get(profile::get_trade_history))
        .route("/api/collection", get(card::get_collection))
        .route("/api/cards/{card_id}", get(card::get_card))
        .route("/api/packs", get(pack::get_packs))
        .route("/api/packs/{pack_id}/open", post(pack::open_pack))
        // Battles & trades
        .route("/api/battles", post(battle::challenge))
        .route("/api/battles/{battle_id}/accept", post(battle::accept))
        .route("/api/battles/{battle_id}/decline", post(battle::decline))
        .route("/api/trades", post(trade::request))
        .route("/api/trades/{trade_id}/accept", post(trade::accept))
        .route("/api/trades/{trade_id}/decline", post(trade::decline))
        .route("/api/leaderboard", get(leaderboard::get_leaderboard))
        // Social
        .route("/api/notifications", get(notification::list))
        .route(
            "/api/notifications/unread-count",
            get(notification::unread_count),
        )
        .route("/api/notifications/read-all", post(notification::mark_all_read))
        .route(
            "/api/notifications/{notification_id}",
            delete(notification::delete),
        )
        .route(
            "/api/notifications/{notification_id}/read",
            post(notification::mark_read),
        )
        .route(
            "/api/friends",
            get(friend::list).post(friend::send_request),
        )
        .route("/api/friends/{friend_agent_id}", delete(friend::remove))
        .route("/api/friends/requests/incoming", get(friend::incoming))
        .route("/api/friends/requests/outgoing", get(friend::outgoing))
        .route(
            "/api/friends/requests/{friendship_id}/accept",
            post(friend::accept),
        )
        .route(
            "/api/friends/requests/{friendship_id}/decline",
            post(friend::decline),
        )
        .route("/api/messages", post(message::send))
        .route(
            "/api/messages/conversations",
            get(message::recent_conversations),
        )
        .route(
            "/api/messages/conversations/{other_agent_id}",
            get(message::conversation),
        )
        .route("/api/messages/unread-count", get(message::unread_count))
        .route("/api/messages/{message_id}", delete(message::delete))
        .route("/api/messages/{message_id}/read", post(message::mark_read))
        // Decks
        .route("/api/decks", get(deck::list).post(deck::create))
        .route("/api/decks/active", get(deck::get_active))
        .route(
            "/api/decks/{deck_id}",
            get(deck::get).put(deck::update).delete(deck::delete),
        )
        .route("/api/decks/{deck_id}/activate", post(deck::set_active))
        // Progression
        .route("/api/achievements", get(achievement::all))
        .route("/api/achievements/earned", get(achievement::earned))
        .route("/api/achievements/available", get(achievement::available))
        .route("/api/achievements/check", post(achievement::check))
        .route("/api/quests", get(quest::all))
        .route("/api/quests/available", get(quest::available))
        .route("/api/quests/active", get(quest::active))
        .route("/api/quests/completed", get(quest::completed))
        .route("/api/quests/{quest_id}/start", post(quest::start))
        .route(
            "/api/agent-quests/{agent_quest_id}/complete",
            post(quest::complete),
        )
        // Admin
        .route("/api/admin/packs", post(admin::grant_pack))
        .route(
            "/api/admin/templates",
            get(admin::get_templates).post(admin::create_template),
        )
        .route(
            "/api/admin/leaderboard/weekly-rewards",
            post(admin::distribute_weekly_rewards),
        )
        .route("/api/admin/quests/reset", post(admin::reset_quests))
}
