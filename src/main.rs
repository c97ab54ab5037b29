pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::calculation;
pub use modules::history;

use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher};
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::{
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    delete_user::{DeleteUserUseCase, IDeleteUserUseCase},
    fetch_profile::{FetchUserProfileService, FetchUserProfileUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
};

use crate::calculation::adapter::outgoing::{
    CalculationQueryPostgres, CalculationRepositoryPostgres,
};
use crate::calculation::application::calculation_use_cases::CalculationUseCases;
use crate::calculation::application::service::{
    CreateCalculationService, DeleteCalculationService, GetCalculationsService,
    GetSingleCalculationService,
};

use crate::history::application::history_use_cases::HistoryUseCases;
use crate::history::application::service::{
    ClearHistoryService, GetHistoryService, GetStatisticsService,
};

use crate::api::openapi::ApiDoc;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::shared::config::{AppConfig, HasherConfig, HasherKind};

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub fetch_user_profile_use_case: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    pub delete_user_use_case: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    pub calculation: CalculationUseCases,
    pub history: HistoryUseCases,
}

impl AppState {
    /// Wires every use case over the Postgres adapters.
    pub fn build(
        db: Arc<DatabaseConnection>,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        let user_repo = UserRepositoryPostgres::new(Arc::clone(&db));
        let user_query = UserQueryPostgres::new(Arc::clone(&db));
        let calc_repo = CalculationRepositoryPostgres::new(Arc::clone(&db));
        let calc_query = CalculationQueryPostgres::new(Arc::clone(&db));

        let calculation = CalculationUseCases {
            create: Arc::new(CreateCalculationService::new(calc_repo.clone())),
            get_list: Arc::new(GetCalculationsService::new(calc_query.clone())),
            get_single: Arc::new(GetSingleCalculationService::new(calc_query.clone())),
            delete: Arc::new(DeleteCalculationService::new(calc_repo.clone())),
        };

        let history = HistoryUseCases {
            get_history: Arc::new(GetHistoryService::new(calc_query.clone())),
            get_statistics: Arc::new(GetStatisticsService::new(calc_query)),
            clear: Arc::new(ClearHistoryService::new(calc_repo)),
        };

        Self {
            register_user_use_case: Arc::new(CreateUserUseCase::new(
                user_query.clone(),
                user_repo.clone(),
                Arc::clone(&password_hasher),
            )),
            login_user_use_case: Arc::new(LoginUserUseCase::new(
                user_query.clone(),
                password_hasher,
                token_provider,
            )),
            fetch_user_profile_use_case: Arc::new(FetchUserProfileService::new(user_query)),
            delete_user_use_case: Arc::new(DeleteUserUseCase::new(user_repo)),
            calculation,
            history,
        }
    }
}

fn build_password_hasher(
    cfg: &HasherConfig,
) -> anyhow::Result<Arc<dyn PasswordHasher + Send + Sync>> {
    match cfg.kind {
        HasherKind::Argon2 => {
            let hasher = Argon2Hasher::with_params(
                cfg.argon2_memory_kib,
                cfg.argon2_iterations,
                cfg.argon2_parallelism,
            )
            .map_err(|e| anyhow::anyhow!("invalid argon2 parameters: {e}"))?;
            Ok(Arc::new(hasher))
        }
        HasherKind::Bcrypt => Ok(Arc::new(BcryptHasher::with_cost(cfg.bcrypt_cost))),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("invalid configuration")?;

    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    if config.database.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("failed to apply migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    let password_hasher = build_password_hasher(&config.hasher)?;
    info!(hasher = ?config.hasher.kind, "Password hasher selected");

    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));

    let state = AppState::build(
        Arc::clone(&db_arc),
        password_hasher,
        Arc::clone(&token_provider),
    );

    let server_url = format!("{}:{}", config.host, config.port);
    info!("Server run on: {}", server_url);

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    // Users
    cfg.service(crate::auth::adapter::incoming::web::routes::get_user_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::delete_user_handler);
    // Calculations
    cfg.service(crate::calculation::adapter::incoming::web::routes::create_calculation_handler);
    cfg.service(crate::calculation::adapter::incoming::web::routes::get_calculations_handler);
    cfg.service(
        crate::calculation::adapter::incoming::web::routes::get_single_calculation_handler,
    );
    cfg.service(crate::calculation::adapter::incoming::web::routes::delete_calculation_handler);
    // History
    cfg.service(crate::history::adapter::incoming::web::routes::get_history_handler);
    cfg.service(crate::history::adapter::incoming::web::routes::get_statistics_handler);
    cfg.service(crate::history::adapter::incoming::web::routes::clear_history_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
