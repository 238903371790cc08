use serde::{Deserialize, Serialize};

/// A doctor as served by the clinic API. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specialty: String,
}

impl Doctor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            specialty: specialty.into(),
        }
    }

    /// Label used when offering the doctor in a booking form.
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.name, self.specialty)
    }
}
