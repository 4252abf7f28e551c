pub mod types;

pub use types::{sort_and_dedup, Bar, Ticker};
