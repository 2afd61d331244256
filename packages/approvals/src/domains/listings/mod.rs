pub mod effects;
pub mod models;
