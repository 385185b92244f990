use application::query::sort::SortBy;
use application::query::QueryError;
use log::error;
use sea_orm::{DbErr, Order};

pub mod country;
pub mod db_data;
pub mod gold_medal;

// Helper function to map database errors
#[inline]
fn map_db_error(e: DbErr) -> QueryError {
    error!("database query failed: {}", e);
    QueryError::DbError(e.to_string())
}

fn order_of(sort: &SortBy) -> Order {
    if sort.is_ascending() {
        Order::Asc
    } else {
        Order::Desc
    }
}
