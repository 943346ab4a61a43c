use crate::{
    bilingual::Bilingual,
    ids::{GymId, ProvinceId, TrainerId},
    tag::Tag,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gym {
    pub id: GymId,
    pub name: Bilingual,
    #[serde(default)]
    pub description: Bilingual,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub line_id: String,
    #[serde(default)]
    pub facebook_url: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub google_maps_url: String,
    #[serde(default)]
    pub province_id: Option<ProvinceId>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub trainer_ids: Vec<TrainerId>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_is_active() -> bool {
    true
}

/// Create/update body for `/api/gyms`. Updates are full PUTs: untouched
/// fields ride along with their current (or default) values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GymPayload {
    pub name: Bilingual,
    pub description: Bilingual,
    pub phone: String,
    pub email: String,
    pub line_id: String,
    pub facebook_url: String,
    pub website_url: String,
    pub google_maps_url: String,
    pub province_id: Option<ProvinceId>,
    pub images: Vec<String>,
    pub tags: Vec<Tag>,
    pub is_active: bool,
}

impl From<&Gym> for GymPayload {
    fn from(gym: &Gym) -> Self {
        GymPayload {
            name: gym.name.clone(),
            description: gym.description.clone(),
            phone: gym.phone.clone(),
            email: gym.email.clone(),
            line_id: gym.line_id.clone(),
            facebook_url: gym.facebook_url.clone(),
            website_url: gym.website_url.clone(),
            google_maps_url: gym.google_maps_url.clone(),
            province_id: gym.province_id.clone(),
            images: gym.images.clone(),
            tags: gym.tags.clone(),
            is_active: gym.is_active,
        }
    }
}
