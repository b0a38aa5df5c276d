pub mod answer;
pub mod handlers;
pub mod score;
pub mod store;
