use domain::{Gender, Season};

/// 一条记录代表某国在某个项目中获得的一枚金牌
#[derive(Debug, Clone, PartialEq)]
pub struct GoldMedal {
    pub id: i64,
    pub year: i32,
    pub city: String,
    pub season: Season,
    /// 运动员姓名
    pub name: String,
    pub country: String,
    pub gender: Gender,
    pub sport: String,
    pub discipline: String,
    pub event: String,
}
