use crate::query::dao::GoldMedalDao;
use crate::query::sort::SortBy;
use crate::query::QueryError;
use log::debug;
use model::gold_medal::GoldMedal;
use std::sync::Arc;

pub const UNSUPPORTED_SORT_KEY: &str = "The sort_by parameter is not supported.";

#[derive(Clone)]
pub struct GetCountryMedals {
    gold_medal_dao: Arc<dyn GoldMedalDao + Send + Sync>,
}

impl GetCountryMedals {
    pub fn new(gold_medal_dao: Arc<dyn GoldMedalDao + Send + Sync>) -> Self {
        Self { gold_medal_dao }
    }

    /// 与国家列表不同，这里的无效排序字段直接作为参数错误返回
    pub async fn handle(
        &self,
        country_name: &str,
        sort_by: &str,
        ascending: bool,
    ) -> Result<Vec<GoldMedal>, QueryError> {
        let sort = SortBy::new(sort_by, ascending);
        self.gold_medal_dao
            .list_by_country(country_name, &sort)
            .await
            .map_err(|e| match e {
                QueryError::InvalidSortKey(key) => {
                    debug!("rejecting medal list sort key '{}'", key);
                    QueryError::InvalidArgument(UNSUPPORTED_SORT_KEY.to_string())
                }
                other => other,
            })
    }
}
