use crate::query::dao::{CountryDao, GoldMedalDao};
use crate::query::QueryError;
use domain::{Gender, Season};
use log::debug;
use model::country::CountryDetails;
use model::gold_medal::GoldMedal;
use std::sync::Arc;

/// 某个季节的夺冠统计，计数为零时所有字段均为 `None`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeasonStats {
    pub wins: Option<u64>,
    pub win_pct: Option<f32>,
    pub first_win_year: Option<i32>,
}

impl SeasonStats {
    /// `wins` 必须按年份升序排列；`season_total` 是所有国家在该季节的金牌总数
    pub fn compute(wins: &[GoldMedal], season_total: u64) -> Self {
        let Some(first) = wins.first() else {
            return Self::default();
        };
        let count = wins.len() as u64;
        let win_pct = (season_total != 0).then(|| count as f32 / season_total as f32);
        Self {
            wins: Some(count),
            win_pct,
            first_win_year: Some(first.year),
        }
    }
}

#[derive(Clone)]
pub struct GetCountryDetails {
    country_dao: Arc<dyn CountryDao + Send + Sync>,
    gold_medal_dao: Arc<dyn GoldMedalDao + Send + Sync>,
}

impl GetCountryDetails {
    pub fn new(
        country_dao: Arc<dyn CountryDao + Send + Sync>,
        gold_medal_dao: Arc<dyn GoldMedalDao + Send + Sync>,
    ) -> Self {
        Self {
            country_dao,
            gold_medal_dao,
        }
    }

    /// `country_name` 需已规范化为首字母大写形式
    pub async fn handle(&self, country_name: &str) -> Result<CountryDetails, QueryError> {
        let Some(country) = self.country_dao.find_by_name(country_name).await? else {
            debug!("country '{}' not found, returning empty details", country_name);
            return Ok(CountryDetails::unknown(country_name));
        };

        let total_medals = self.gold_medal_dao.count_by_country(country_name).await?;
        let summer = self.season_stats(country_name, Season::Summer).await?;
        let winter = self.season_stats(country_name, Season::Winter).await?;

        // FIXME: 性别统计没有按国家过滤，得到的是全部国家的总数。
        // 现有客户端依赖这个结果，修改前需要确认预期行为。
        let medals_won_by_female = self.gold_medal_dao.count_by_gender(Gender::Female).await?;
        let medals_won_by_male = self.gold_medal_dao.count_by_gender(Gender::Male).await?;

        Ok(CountryDetails {
            name: country_name.to_string(),
            gdp: country.gdp,
            population: country.population,
            total_medals: Some(total_medals),
            summer_wins: summer.wins,
            summer_win_pct: summer.win_pct,
            first_summer_win_year: summer.first_win_year,
            winter_wins: winter.wins,
            winter_win_pct: winter.win_pct,
            first_winter_win_year: winter.first_win_year,
            medals_won_by_female: Some(medals_won_by_female),
            medals_won_by_male: Some(medals_won_by_male),
        })
    }

    async fn season_stats(
        &self,
        country_name: &str,
        season: Season,
    ) -> Result<SeasonStats, QueryError> {
        let wins = self
            .gold_medal_dao
            .list_by_country_and_season(country_name, season)
            .await?;
        let season_total = self.gold_medal_dao.count_by_season(season).await?;
        Ok(SeasonStats::compute(&wins, season_total))
    }
}
