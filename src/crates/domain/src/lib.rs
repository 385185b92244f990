pub mod value;

pub use value::{Gender, Season, SortDirection, ValueError};
