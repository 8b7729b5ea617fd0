pub mod game_jobs;
