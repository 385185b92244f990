pub mod country;
pub mod medal;

pub use country::{CountriesResponse, CountryDetailsResponse};
pub use medal::CountryMedalsListResponse;
