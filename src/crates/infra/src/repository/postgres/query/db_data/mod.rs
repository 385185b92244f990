pub mod country;
pub mod gold_medal;
