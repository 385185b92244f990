#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub gdp: Option<f64>,
    pub population: Option<i64>,
}

/// 国家列表条目，每次请求时重新计算
#[derive(Debug, Clone, PartialEq)]
pub struct CountrySummary {
    pub name: String,
    pub code: String,
    pub gdp: Option<f64>,
    pub population: Option<i64>,
    pub medals: u64,
}

impl CountrySummary {
    pub fn new(country: Country, medals: u64) -> Self {
        Self {
            name: country.name,
            code: country.code,
            gdp: country.gdp,
            population: country.population,
            medals,
        }
    }
}

/// 单个国家的金牌统计
///
/// 除 `name` 外所有字段都是可选的：国家不存在，或者对应的计数为零时为 `None`。
/// 百分比是 0 到 1 之间的比例值，乘以 100 属于展示层的工作。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryDetails {
    pub name: String,
    pub gdp: Option<f64>,
    pub population: Option<i64>,
    pub total_medals: Option<u64>,
    pub summer_wins: Option<u64>,
    pub summer_win_pct: Option<f32>,
    pub first_summer_win_year: Option<i32>,
    pub winter_wins: Option<u64>,
    pub winter_win_pct: Option<f32>,
    pub first_winter_win_year: Option<i32>,
    /// 全部国家的女子项目金牌总数，不按国家过滤
    pub medals_won_by_female: Option<u64>,
    /// 全部国家的男子项目金牌总数，不按国家过滤
    pub medals_won_by_male: Option<u64>,
}

impl CountryDetails {
    pub fn unknown(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}
