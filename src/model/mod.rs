pub mod configs;
pub mod sale;
