use super::{cmp_nulls_last, directed};
use application::query::dao::CountryDao;
use application::query::sort::SortBy;
use application::query::QueryError;
use async_trait::async_trait;
use model::country::Country;
use std::cmp::Ordering;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
enum CountryField {
    Name,
    Code,
    Gdp,
    Population,
}

const SORT_FIELDS: &[(&str, CountryField)] = &[
    ("name", CountryField::Name),
    ("code", CountryField::Code),
    ("gdp", CountryField::Gdp),
    ("population", CountryField::Population),
];

impl CountryField {
    fn compare(&self, a: &Country, b: &Country) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Code => a.code.cmp(&b.code),
            Self::Gdp => cmp_nulls_last(&a.gdp, &b.gdp, |x, y| x.total_cmp(y)),
            Self::Population => cmp_nulls_last(&a.population, &b.population, Ord::cmp),
        }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryCountryDao {
    countries: Arc<Vec<Country>>,
}

impl InMemoryCountryDao {
    pub fn new(mut countries: Vec<Country>) -> Self {
        countries.sort_by_key(|c| c.id);
        Self {
            countries: Arc::new(countries),
        }
    }
}

#[async_trait]
impl CountryDao for InMemoryCountryDao {
    async fn find_by_name(&self, name: &str) -> Result<Option<Country>, QueryError> {
        Ok(self.countries.iter().find(|c| c.name == name).cloned())
    }

    async fn list_all(&self, sort: Option<&SortBy>) -> Result<Vec<Country>, QueryError> {
        let mut countries = self.countries.as_ref().clone();
        if let Some(sort) = sort {
            let field = sort.resolve(SORT_FIELDS)?;
            let ascending = sort.is_ascending();
            countries.sort_by(|a, b| directed(field.compare(a, b), ascending));
        }
        Ok(countries)
    }
}
