use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A licensure category owning an independent question pool.
/// Created by seeding; immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profession {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}
