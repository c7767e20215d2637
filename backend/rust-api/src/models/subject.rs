use serde::{Deserialize, Serialize};

/// A quiz subject. Three of these are seeded at startup; the rest are
/// append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}
