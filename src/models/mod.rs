pub mod calweek;

pub use calweek::*;
