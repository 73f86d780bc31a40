use sea_orm::DatabaseConnection;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::AppError,
    service::{
        notification::{email::EmailSender, sms::SmsSender},
        user::UserService,
    },
};

/// Sessions expire after this many days without a request.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer, storing sessions in the application database.
///
/// The session store's table is created on first run.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer issuing an HTTP-only, same-site session cookie
/// - `Err(AppError::InternalError)` - Failed to migrate the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());

    store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    let layer = SessionManagerLayer::new(store)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            SESSION_INACTIVITY_DAYS,
        )));

    Ok(layer)
}

/// Builds the HTTP client used for outbound API calls.
///
/// Redirects are not followed.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))
}

/// Builds the email and SMS senders from configuration.
///
/// Missing provider settings are logged once here; the senders then simulate deliveries.
pub fn setup_senders(
    config: &Config,
    http_client: reqwest::Client,
) -> Result<(EmailSender, SmsSender), AppError> {
    if config.smtp.is_none() {
        tracing::warn!("SMTP_HOST not set, emails will be simulated");
    }
    if config.sms.is_none() {
        tracing::warn!("SMS credentials not set, text messages will be simulated");
    }

    let email_sender = EmailSender::new(config.smtp.as_ref())?;
    let sms_sender = SmsSender::new(
        http_client,
        config.sms.clone(),
        config.sms_api_base_url.clone(),
    );

    Ok((email_sender, sms_sender))
}

/// Creates the configured admin account if the database has no admin yet.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(seed) = &config.admin_seed else {
        return Ok(());
    };

    UserService::new(db).seed_admin(seed).await?;

    Ok(())
}
