use crate::consts;
use crate::error::ApiError;
use crate::response::{CountriesResponse, CountryDetailsResponse, CountryMedalsListResponse};
use crate::AppState;
use actix_web::{web, web::Json, web::Path, web::Query};
use application::query::get_countries::GetCountries;
use application::query::get_country_details::GetCountryDetails;
use application::query::get_country_medals::GetCountryMedals;
use log::info;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct ListQuery {
    pub sort_by: String,
    /// "y" 表示升序，其他任何值都是降序
    pub ascending: String,
}

impl ListQuery {
    pub fn ascending_order(&self) -> bool {
        self.ascending.eq_ignore_ascii_case("y")
    }
}

pub async fn get_countries(
    state: web::Data<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<CountriesResponse>, ApiError> {
    let usecase = GetCountries::new(state.country_dao.clone(), state.gold_medal_dao.clone());
    let summaries = usecase
        .handle(&query.sort_by, query.ascending_order())
        .await?;
    info!(
        "listed {} countries (sort_by={}, ascending={})",
        summaries.len(),
        query.sort_by,
        query.ascending
    );
    Ok(Json(CountriesResponse::new(summaries)))
}

pub async fn get_country_details(
    state: web::Data<AppState>,
    path: Path<String>,
) -> Result<Json<CountryDetailsResponse>, ApiError> {
    let country_name = state.name_normalizer.normalize(&path.into_inner());
    let usecase =
        GetCountryDetails::new(state.country_dao.clone(), state.gold_medal_dao.clone());
    let details = usecase.handle(&country_name).await?;
    Ok(Json(details.into()))
}

pub async fn get_country_medals(
    state: web::Data<AppState>,
    path: Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Json<CountryMedalsListResponse>, ApiError> {
    let country_name = state.name_normalizer.normalize(&path.into_inner());
    let usecase = GetCountryMedals::new(state.gold_medal_dao.clone());
    let medals = usecase
        .handle(&country_name, &query.sort_by, query.ascending_order())
        .await?;
    Ok(Json(CountryMedalsListResponse::new(medals)))
}

pub fn configure_service(svc: &mut web::ServiceConfig) {
    info!("http config for {}", consts::URL_PATH_COUNTRIES);
    svc.service(
        web::scope(consts::URL_PATH_COUNTRIES)
            .route("", web::get().to(get_countries))
            .route("/{country}", web::get().to(get_country_details))
            .route("/{country}/medals", web::get().to(get_country_medals)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(ascending: &str) -> ListQuery {
        ListQuery {
            sort_by: "name".to_string(),
            ascending: ascending.to_string(),
        }
    }

    #[test]
    fn test_ascending_flag() {
        assert!(query("y").ascending_order());
        assert!(query("Y").ascending_order());
        assert!(!query("n").ascending_order());
        assert!(!query("yes").ascending_order());
        assert!(!query("").ascending_order());
    }
}
