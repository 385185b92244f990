use crate::query::sort::SortBy;
use crate::query::QueryError;
use async_trait::async_trait;
use domain::{Gender, Season};
use model::country::Country;
use model::gold_medal::GoldMedal;

#[async_trait]
pub trait CountryDao {
    /// 按名称精确查找（大小写敏感），调用方负责先做名称规范化
    async fn find_by_name(&self, name: &str) -> Result<Option<Country>, QueryError>;
    /// `sort` 为 `None` 时按默认顺序返回；排序字段不是国家属性时返回 `InvalidSortKey`
    async fn list_all(&self, sort: Option<&SortBy>) -> Result<Vec<Country>, QueryError>;
}

#[async_trait]
pub trait GoldMedalDao {
    async fn count_by_country(&self, country: &str) -> Result<u64, QueryError>;
    async fn count_by_season(&self, season: Season) -> Result<u64, QueryError>;
    async fn count_by_gender(&self, gender: Gender) -> Result<u64, QueryError>;
    /// 按年份升序返回某国在某个季节获得的金牌
    async fn list_by_country_and_season(
        &self,
        country: &str,
        season: Season,
    ) -> Result<Vec<GoldMedal>, QueryError>;
    /// 排序字段不是金牌记录的属性时返回 `InvalidSortKey`
    async fn list_by_country(
        &self,
        country: &str,
        sort: &SortBy,
    ) -> Result<Vec<GoldMedal>, QueryError>;
}
