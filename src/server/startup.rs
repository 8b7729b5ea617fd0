use crate::server::{
    config::Config,
    error::AppError,
    service::{
        achievement::AchievementService, admin::AdminService, card::CardService,
        quest::QuestService,
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds the static game data: default card templates, achievements and quests.
///
/// Each step only inserts what is missing, so running it on every start is safe.
///
/// # Arguments
/// - `db` - Database connection with migrations applied
///
/// # Returns
/// - `Ok(())` - Game data present
/// - `Err(AppError::DbErr)` - Failed to read or insert seed rows
pub async fn seed_game_data(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    let templates = CardService::new(db).seed_default_templates().await?;
    if templates > 0 {
        tracing::info!("Seeded {} default card templates", templates);
    }

    let achievements = AchievementService::new(db).init().await?;
    let quests = QuestService::new(db).init().await?;
    tracing::info!(
        "Game data ready ({} achievements and {} quests added)",
        achievements,
        quests
    );

    Ok(())
}

/// Creates a new admin key and prints it to stdout.
///
/// Only the key's hash is stored, so this is the one time the key is visible.
pub async fn generate_admin_key(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    let key = AdminService::new(db)
        .create_key(Some("cli".to_string()))
        .await?;

    println!("New admin key (store it now, it will not be shown again):");
    println!("{}", key);

    Ok(())
}
