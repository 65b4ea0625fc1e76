use serde::{Deserialize, Serialize};

/// Event record as served by the events API
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub mazemap_link: String,
    pub summary: String,
    pub description: String,
    pub slides: String,
    pub organizer: String,
    pub difficulty: String,
    pub image: String,
    pub unix_start_time: i64,
    pub unix_end_time: i64,
    pub hidden: bool,
}
