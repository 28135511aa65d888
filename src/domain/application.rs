// Application domain model
use chrono::NaiveDateTime;

/// A monitored system identified by a short code.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub enabled: bool,
    pub created_date: Option<NaiveDateTime>,
}

impl Application {
    pub fn new(
        id: i64,
        code: String,
        name: String,
        enabled: bool,
        created_date: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id,
            code,
            name,
            enabled,
            created_date,
        }
    }
}
