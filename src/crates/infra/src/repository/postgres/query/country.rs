use super::db_data::country::{Column, Entity, Model};
use super::{map_db_error, order_of};
use application::query::dao::CountryDao;
use application::query::sort::SortBy;
use application::query::QueryError;
use async_trait::async_trait;
use model::country::Country;
use sea_orm::*;

/// 国家列表支持的排序字段
const SORT_COLUMNS: &[(&str, Column)] = &[
    ("name", Column::Name),
    ("code", Column::Code),
    ("gdp", Column::Gdp),
    ("population", Column::Population),
];

pub struct CountryDaoImpl {
    db: DatabaseConnection,
}

impl CountryDaoImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CountryDao for CountryDaoImpl {
    async fn find_by_name(&self, name: &str) -> Result<Option<Country>, QueryError> {
        let row: Option<Model> = Entity::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(map_db_error)?;
        Ok(row.map(Country::from))
    }

    async fn list_all(&self, sort: Option<&SortBy>) -> Result<Vec<Country>, QueryError> {
        let mut query = Entity::find();
        if let Some(sort) = sort {
            let column = sort.resolve(SORT_COLUMNS)?;
            query = query.order_by(column, order_of(sort));
        }
        // id 作为默认顺序，同时保证排序字段相同时结果稳定
        let rows: Vec<Model> = query
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_error)?;
        Ok(rows.into_iter().map(Country::from).collect())
    }
}
