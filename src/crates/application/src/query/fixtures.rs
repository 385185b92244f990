use crate::query::dao::{CountryDao, GoldMedalDao};
use crate::query::sort::{sort_by_direction, SortBy};
use crate::query::QueryError;
use async_trait::async_trait;
use domain::{Gender, Season};
use model::country::Country;
use model::gold_medal::GoldMedal;
use std::cmp::Ordering;
use std::sync::Mutex;

pub fn country(id: i64, name: &str, gdp: Option<f64>, population: Option<i64>) -> Country {
    Country {
        id,
        name: name.to_string(),
        code: name.chars().take(3).collect::<String>().to_uppercase(),
        gdp,
        population,
    }
}

pub fn medal(id: i64, country: &str, season: Season, year: i32, gender: Gender) -> GoldMedal {
    GoldMedal {
        id,
        year,
        city: "Athens".to_string(),
        season,
        name: format!("Athlete {}", id),
        country: country.to_string(),
        gender,
        sport: "Athletics".to_string(),
        discipline: "Athletics".to_string(),
        event: format!("Event {}", id),
    }
}

#[derive(Debug, Clone, Copy)]
enum FakeColumn {
    Name,
    Code,
    Gdp,
    Population,
}

const COUNTRY_COLUMNS: &[(&str, FakeColumn)] = &[
    ("name", FakeColumn::Name),
    ("code", FakeColumn::Code),
    ("gdp", FakeColumn::Gdp),
    ("population", FakeColumn::Population),
];

// 与 PostgreSQL 一致：NULL 视为最大值
fn nulls_last<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

fn compare_countries(column: FakeColumn, a: &Country, b: &Country) -> Ordering {
    match column {
        FakeColumn::Name => a.name.cmp(&b.name),
        FakeColumn::Code => a.code.cmp(&b.code),
        FakeColumn::Gdp => nulls_last(a.gdp, b.gdp, f64::total_cmp),
        FakeColumn::Population => nulls_last(a.population, b.population, i64::cmp),
    }
}

/// 支持与内存存储相同排序字段的国家存储，记录每次 list_all 收到的排序字段
pub struct FakeCountryDao {
    countries: Vec<Country>,
    pub list_calls: Mutex<Vec<Option<String>>>,
}

impl FakeCountryDao {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries,
            list_calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CountryDao for FakeCountryDao {
    async fn find_by_name(&self, name: &str) -> Result<Option<Country>, QueryError> {
        Ok(self.countries.iter().find(|c| c.name == name).cloned())
    }

    async fn list_all(&self, sort: Option<&SortBy>) -> Result<Vec<Country>, QueryError> {
        self.list_calls
            .lock()
            .unwrap()
            .push(sort.map(|s| s.key.clone()));
        let mut countries = self.countries.clone();
        if let Some(sort) = sort {
            let column = sort.resolve(COUNTRY_COLUMNS)?;
            if sort.is_ascending() {
                countries.sort_by(|a, b| compare_countries(column, a, b));
            } else {
                countries.sort_by(|a, b| compare_countries(column, b, a));
            }
        }
        Ok(countries)
    }
}

pub struct FakeGoldMedalDao {
    medals: Vec<GoldMedal>,
}

impl FakeGoldMedalDao {
    pub fn new(medals: Vec<GoldMedal>) -> Self {
        Self { medals }
    }

    fn of_country<'a>(&'a self, country: &'a str) -> impl Iterator<Item = &'a GoldMedal> {
        self.medals.iter().filter(move |m| m.country == country)
    }
}

#[async_trait]
impl GoldMedalDao for FakeGoldMedalDao {
    async fn count_by_country(&self, country: &str) -> Result<u64, QueryError> {
        Ok(self.of_country(country).count() as u64)
    }

    async fn count_by_season(&self, season: Season) -> Result<u64, QueryError> {
        Ok(self.medals.iter().filter(|m| m.season == season).count() as u64)
    }

    async fn count_by_gender(&self, gender: Gender) -> Result<u64, QueryError> {
        Ok(self.medals.iter().filter(|m| m.gender == gender).count() as u64)
    }

    async fn list_by_country_and_season(
        &self,
        country: &str,
        season: Season,
    ) -> Result<Vec<GoldMedal>, QueryError> {
        let mut medals: Vec<GoldMedal> = self
            .of_country(country)
            .filter(|m| m.season == season)
            .cloned()
            .collect();
        medals.sort_by_key(|m| m.year);
        Ok(medals)
    }

    async fn list_by_country(
        &self,
        country: &str,
        sort: &SortBy,
    ) -> Result<Vec<GoldMedal>, QueryError> {
        sort.resolve(&[("year", ())])?;
        let mut medals: Vec<GoldMedal> = self.of_country(country).cloned().collect();
        sort_by_direction(&mut medals, sort.direction, |m| m.year);
        Ok(medals)
    }
}
