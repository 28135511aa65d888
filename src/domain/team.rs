// Team domain model

/// Organizational owner of one or more applications.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub enabled: bool,
}

impl Team {
    pub fn new(id: i64, name: String, description: String, enabled: bool) -> Self {
        Self {
            id,
            name,
            description,
            enabled,
        }
    }
}
