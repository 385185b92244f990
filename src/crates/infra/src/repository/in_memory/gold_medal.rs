use super::directed;
use application::query::dao::GoldMedalDao;
use application::query::sort::SortBy;
use application::query::QueryError;
use async_trait::async_trait;
use domain::{Gender, Season};
use model::gold_medal::GoldMedal;
use std::cmp::Ordering;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
enum MedalField {
    Year,
    City,
    Season,
    Name,
    Country,
    Gender,
    Sport,
    Discipline,
    Event,
}

const SORT_FIELDS: &[(&str, MedalField)] = &[
    ("year", MedalField::Year),
    ("city", MedalField::City),
    ("season", MedalField::Season),
    ("name", MedalField::Name),
    ("country", MedalField::Country),
    ("gender", MedalField::Gender),
    ("sport", MedalField::Sport),
    ("discipline", MedalField::Discipline),
    ("event", MedalField::Event),
];

impl MedalField {
    // 季节和性别按存储的文本比较
    fn compare(&self, a: &GoldMedal, b: &GoldMedal) -> Ordering {
        match self {
            Self::Year => a.year.cmp(&b.year),
            Self::City => a.city.cmp(&b.city),
            Self::Season => a.season.as_str().cmp(b.season.as_str()),
            Self::Name => a.name.cmp(&b.name),
            Self::Country => a.country.cmp(&b.country),
            Self::Gender => a.gender.as_str().cmp(b.gender.as_str()),
            Self::Sport => a.sport.cmp(&b.sport),
            Self::Discipline => a.discipline.cmp(&b.discipline),
            Self::Event => a.event.cmp(&b.event),
        }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryGoldMedalDao {
    medals: Arc<Vec<GoldMedal>>,
}

impl InMemoryGoldMedalDao {
    pub fn new(mut medals: Vec<GoldMedal>) -> Self {
        medals.sort_by_key(|m| m.id);
        Self {
            medals: Arc::new(medals),
        }
    }

    fn count_matching<P>(&self, predicate: P) -> u64
    where
        P: Fn(&GoldMedal) -> bool,
    {
        self.medals.iter().filter(|m| predicate(*m)).count() as u64
    }

    fn of_country(&self, country: &str) -> Vec<GoldMedal> {
        self.medals
            .iter()
            .filter(|m| m.country == country)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl GoldMedalDao for InMemoryGoldMedalDao {
    async fn count_by_country(&self, country: &str) -> Result<u64, QueryError> {
        Ok(self.count_matching(|m| m.country == country))
    }

    async fn count_by_season(&self, season: Season) -> Result<u64, QueryError> {
        Ok(self.count_matching(|m| m.season == season))
    }

    async fn count_by_gender(&self, gender: Gender) -> Result<u64, QueryError> {
        Ok(self.count_matching(|m| m.gender == gender))
    }

    async fn list_by_country_and_season(
        &self,
        country: &str,
        season: Season,
    ) -> Result<Vec<GoldMedal>, QueryError> {
        let mut medals = self.of_country(country);
        medals.retain(|m| m.season == season);
        medals.sort_by_key(|m| m.year);
        Ok(medals)
    }

    async fn list_by_country(
        &self,
        country: &str,
        sort: &SortBy,
    ) -> Result<Vec<GoldMedal>, QueryError> {
        let field = sort.resolve(SORT_FIELDS)?;
        let ascending = sort.is_ascending();
        let mut medals = self.of_country(country);
        medals.sort_by(|a, b| directed(field.compare(a, b), ascending));
        Ok(medals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medal(id: i64, country: &str, season: Season, year: i32, sport: &str) -> GoldMedal {
        GoldMedal {
            id,
            year,
            city: "Lillehammer".to_string(),
            season,
            name: format!("Athlete {}", id),
            country: country.to_string(),
            gender: if id % 2 == 0 { Gender::Female } else { Gender::Male },
            sport: sport.to_string(),
            discipline: sport.to_string(),
            event: format!("Event {}", id),
        }
    }

    fn dao() -> InMemoryGoldMedalDao {
        InMemoryGoldMedalDao::new(vec![
            medal(4, "Norway", Season::Winter, 1994, "Biathlon"),
            medal(1, "Norway", Season::Winter, 2002, "Skiing"),
            medal(2, "Norway", Season::Summer, 2000, "Rowing"),
            medal(3, "Sweden", Season::Winter, 1994, "Skiing"),
            medal(5, "Norway", Season::Winter, 1994, "Skiing"),
        ])
    }

    #[tokio::test]
    async fn test_counts() {
        let dao = dao();
        assert_eq!(dao.count_by_country("Norway").await.unwrap(), 4);
        assert_eq!(dao.count_by_country("norway").await.unwrap(), 0);
        assert_eq!(dao.count_by_season(Season::Winter).await.unwrap(), 4);
        assert_eq!(dao.count_by_gender(Gender::Female).await.unwrap(), 2);
        assert_eq!(dao.count_by_gender(Gender::Male).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_season_list_is_ordered_by_year() {
        let medals = dao()
            .list_by_country_and_season("Norway", Season::Winter)
            .await
            .unwrap();
        let ids: Vec<i64> = medals.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![4, 5, 1]);
    }

    #[tokio::test]
    async fn test_list_by_country_sorted_desc_keeps_id_order_on_ties() {
        let medals = dao()
            .list_by_country("Norway", &SortBy::new("sport", false))
            .await
            .unwrap();
        let ids: Vec<i64> = medals.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 5, 2, 4]);
    }

    #[tokio::test]
    async fn test_list_by_country_unknown_key() {
        let err = dao()
            .list_by_country("Norway", &SortBy::new("medals", true))
            .await
            .unwrap_err();
        assert_eq!(err, QueryError::InvalidSortKey("medals".to_string()));
    }
}
