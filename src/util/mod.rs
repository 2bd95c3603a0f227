pub mod date;

pub use date::month_year;
