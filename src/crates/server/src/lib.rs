pub mod consts;
pub mod countries;
pub mod error;
pub mod response;

use application::query::dao::{CountryDao, GoldMedalDao};
use application::query::shared::CountryNameNormalizer;
use infra::config::DatabaseConfig;
use infra::normalize::TitleCaseNormalizer;
use infra::repository::postgres::query::{country::CountryDaoImpl, gold_medal::GoldMedalDaoImpl};
use log::info;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Statement,
};
use std::sync::Arc;

pub struct AppState {
    pub country_dao: Arc<dyn CountryDao + Send + Sync>,
    pub gold_medal_dao: Arc<dyn GoldMedalDao + Send + Sync>,
    pub name_normalizer: Arc<dyn CountryNameNormalizer>,
}

impl AppState {
    pub async fn init_db(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
        let mut opt = ConnectOptions::new(cfg.url.clone());
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .connect_timeout(cfg.connect_timeout)
            .idle_timeout(cfg.idle_timeout)
            .sqlx_logging(cfg.sqlx_logging)
            .sqlx_logging_level(log::LevelFilter::Info);

        let db = Database::connect(opt).await?;

        let backend = DbBackend::Postgres;
        db.execute(Statement::from_string(backend, "SELECT 1".to_owned()))
            .await?;

        info!("Database connection pool initialized successfully");
        Ok(db)
    }

    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_daos(
            Arc::new(CountryDaoImpl::new(db.clone())),
            Arc::new(GoldMedalDaoImpl::new(db)),
        )
    }

    pub fn with_daos(
        country_dao: Arc<dyn CountryDao + Send + Sync>,
        gold_medal_dao: Arc<dyn GoldMedalDao + Send + Sync>,
    ) -> Self {
        Self {
            country_dao,
            gold_medal_dao,
            name_normalizer: Arc::new(TitleCaseNormalizer::new()),
        }
    }
}
