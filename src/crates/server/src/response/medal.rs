use serde::Serialize;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GoldMedal {
    pub id: i64,
    pub year: i32,
    pub city: String,
    pub season: &'static str,
    pub name: String,
    pub country: String,
    pub gender: &'static str,
    pub sport: String,
    pub discipline: String,
    pub event: String,
}

impl From<model::gold_medal::GoldMedal> for GoldMedal {
    fn from(medal: model::gold_medal::GoldMedal) -> Self {
        Self {
            id: medal.id,
            year: medal.year,
            city: medal.city,
            season: medal.season.as_str(),
            name: medal.name,
            country: medal.country,
            gender: medal.gender.as_str(),
            sport: medal.sport,
            discipline: medal.discipline,
            event: medal.event,
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CountryMedalsListResponse {
    pub medals: Vec<GoldMedal>,
}

impl CountryMedalsListResponse {
    pub fn new(medals: Vec<model::gold_medal::GoldMedal>) -> Self {
        Self {
            medals: medals.into_iter().map(GoldMedal::from).collect(),
        }
    }
}
