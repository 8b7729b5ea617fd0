mod achievement;
mod agent;
mod battle;
mod card;
mod deck;
mod friend;
mod leaderboard;
mod message;
mod pack;
mod quest;
mod trade;
