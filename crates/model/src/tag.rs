use crate::{bilingual::Bilingual, ids::TagId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How many tags a gym or trainer may carry.
pub const MAX_TAGS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: TagId,
    pub slug: String,
    pub name: Bilingual,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_is_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagPayload {
    pub slug: String,
    pub name: Bilingual,
    pub is_active: bool,
}

impl From<&Tag> for TagPayload {
    fn from(tag: &Tag) -> Self {
        TagPayload {
            slug: tag.slug.clone(),
            name: tag.name.clone(),
            is_active: tag.is_active,
        }
    }
}
