use super::db_data::gold_medal::{Column, Entity, Model};
use super::{map_db_error, order_of};
use application::query::dao::GoldMedalDao;
use application::query::sort::SortBy;
use application::query::QueryError;
use async_trait::async_trait;
use domain::{Gender, Season};
use model::gold_medal::GoldMedal;
use sea_orm::*;

/// 金牌列表支持的排序字段
const SORT_COLUMNS: &[(&str, Column)] = &[
    ("year", Column::Year),
    ("city", Column::City),
    ("season", Column::Season),
    ("name", Column::Name),
    ("country", Column::Country),
    ("gender", Column::Gender),
    ("sport", Column::Sport),
    ("discipline", Column::Discipline),
    ("event", Column::Event),
];

pub struct GoldMedalDaoImpl {
    db: DatabaseConnection,
}

impl GoldMedalDaoImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn count_where(&self, column: Column, value: &str) -> Result<u64, QueryError> {
        Entity::find()
            .filter(column.eq(value))
            .count(&self.db)
            .await
            .map_err(map_db_error)
    }
}

fn into_medals(rows: Vec<Model>) -> Result<Vec<GoldMedal>, QueryError> {
    rows.into_iter()
        .map(|row| GoldMedal::try_from(row).map_err(QueryError::from))
        .collect()
}

#[async_trait]
impl GoldMedalDao for GoldMedalDaoImpl {
    async fn count_by_country(&self, country: &str) -> Result<u64, QueryError> {
        self.count_where(Column::Country, country).await
    }

    async fn count_by_season(&self, season: Season) -> Result<u64, QueryError> {
        self.count_where(Column::Season, season.as_str()).await
    }

    async fn count_by_gender(&self, gender: Gender) -> Result<u64, QueryError> {
        self.count_where(Column::Gender, gender.as_str()).await
    }

    async fn list_by_country_and_season(
        &self,
        country: &str,
        season: Season,
    ) -> Result<Vec<GoldMedal>, QueryError> {
        let rows = Entity::find()
            .filter(Column::Country.eq(country))
            .filter(Column::Season.eq(season.as_str()))
            .order_by_asc(Column::Year)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_error)?;
        into_medals(rows)
    }

    async fn list_by_country(
        &self,
        country: &str,
        sort: &SortBy,
    ) -> Result<Vec<GoldMedal>, QueryError> {
        let column = sort.resolve(SORT_COLUMNS)?;
        let rows = Entity::find()
            .filter(Column::Country.eq(country))
            .order_by(column, order_of(sort))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_error)?;
        into_medals(rows)
    }
}
