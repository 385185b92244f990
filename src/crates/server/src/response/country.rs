use serde::Serialize;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CountrySummary {
    pub name: String,
    pub code: String,
    pub gdp: Option<f64>,
    pub population: Option<i64>,
    pub medals: u64,
}

impl From<model::country::CountrySummary> for CountrySummary {
    fn from(summary: model::country::CountrySummary) -> Self {
        Self {
            name: summary.name,
            code: summary.code,
            gdp: summary.gdp,
            population: summary.population,
            medals: summary.medals,
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CountriesResponse {
    pub countries: Vec<CountrySummary>,
}

impl CountriesResponse {
    pub fn new(summaries: Vec<model::country::CountrySummary>) -> Self {
        Self {
            countries: summaries.into_iter().map(CountrySummary::from).collect(),
        }
    }
}

/// 国家统计详情，缺失的字段不输出
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CountryDetailsResponse {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gdp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_medals: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_summer_wins: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_total_summer_wins: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_first_summer_win: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_winter_wins: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_total_winter_wins: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_first_winter_win: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_events_won_by_female_athletes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_events_won_by_male_athletes: Option<u64>,
}

impl From<model::country::CountryDetails> for CountryDetailsResponse {
    fn from(details: model::country::CountryDetails) -> Self {
        Self {
            name: details.name,
            gdp: details.gdp,
            population: details.population,
            number_medals: details.total_medals,
            number_summer_wins: details.summer_wins,
            percentage_total_summer_wins: details.summer_win_pct,
            year_first_summer_win: details.first_summer_win_year,
            number_winter_wins: details.winter_wins,
            percentage_total_winter_wins: details.winter_win_pct,
            year_first_winter_win: details.first_winter_win_year,
            number_events_won_by_female_athletes: details.medals_won_by_female,
            number_events_won_by_male_athletes: details.medals_won_by_male,
        }
    }
}
