use crate::query::dao::{CountryDao, GoldMedalDao};
use crate::query::sort::{sort_by_direction, SortBy};
use crate::query::QueryError;
use log::debug;
use model::country::{Country, CountrySummary};
use std::sync::Arc;

/// 按金牌数排序的虚拟字段，不是国家表中的列
pub const MEDALS_SORT_KEY: &str = "medals";

#[derive(Clone)]
pub struct GetCountries {
    country_dao: Arc<dyn CountryDao + Send + Sync>,
    gold_medal_dao: Arc<dyn GoldMedalDao + Send + Sync>,
}

impl GetCountries {
    pub fn new(
        country_dao: Arc<dyn CountryDao + Send + Sync>,
        gold_medal_dao: Arc<dyn GoldMedalDao + Send + Sync>,
    ) -> Self {
        Self {
            country_dao,
            gold_medal_dao,
        }
    }

    pub async fn handle(
        &self,
        sort_by: &str,
        ascending: bool,
    ) -> Result<Vec<CountrySummary>, QueryError> {
        let sort = SortBy::new(sort_by, ascending);
        let countries = self.list_countries(&sort).await?;

        let mut summaries = Vec::with_capacity(countries.len());
        for country in countries {
            let medals = self.gold_medal_dao.count_by_country(&country.name).await?;
            summaries.push(CountrySummary::new(country, medals));
        }

        // 金牌数只能在统计之后排序，覆盖存储层的顺序
        if sort.key == MEDALS_SORT_KEY {
            sort_by_direction(&mut summaries, sort.direction, |summary| summary.medals);
        }
        Ok(summaries)
    }

    /// 排序字段无效时回退到默认顺序，不向调用方报错
    async fn list_countries(&self, sort: &SortBy) -> Result<Vec<Country>, QueryError> {
        match self.country_dao.list_all(Some(sort)).await {
            Err(QueryError::InvalidSortKey(key)) => {
                debug!(
                    "sort key '{}' is not a country column, listing in default order",
                    key
                );
                self.country_dao.list_all(None).await
            }
            result => result,
        }
    }
}
