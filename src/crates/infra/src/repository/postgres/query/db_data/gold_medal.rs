use model::gold_medal::GoldMedal;
use model::ModelError;
use sea_orm::entity::prelude::*;

/// `season` 与 `gender` 以原始数据集中的文本存储（"Summer"/"Winter"、"male"/"female"）
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "gold_medal")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub year: i32,
    pub city: String,
    pub season: String,
    pub name: String,
    pub country: String,
    pub gender: String,
    pub sport: String,
    pub discipline: String,
    pub event: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for GoldMedal {
    type Error = ModelError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            year: model.year,
            city: model.city,
            season: model.season.parse()?,
            name: model.name,
            country: model.country,
            gender: model.gender.parse()?,
            sport: model.sport,
            discipline: model.discipline,
            event: model.event,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Gender, Season};

    fn row(season: &str, gender: &str) -> Model {
        Model {
            id: 7,
            year: 1996,
            city: "Atlanta".to_string(),
            season: season.to_string(),
            name: "JOHNSON, Michael".to_string(),
            country: "United States".to_string(),
            gender: gender.to_string(),
            sport: "Athletics".to_string(),
            discipline: "Athletics".to_string(),
            event: "200M".to_string(),
        }
    }

    #[test]
    fn test_convert_row() {
        let medal = GoldMedal::try_from(row("Summer", "male")).unwrap();
        assert_eq!(medal.season, Season::Summer);
        assert_eq!(medal.gender, Gender::Male);
        assert_eq!(medal.year, 1996);
    }

    #[test]
    fn test_convert_row_with_unknown_season() {
        let err = GoldMedal::try_from(row("Autumn", "male")).unwrap_err();
        assert!(matches!(err, ModelError::InvalidValue(_)));
    }
}
