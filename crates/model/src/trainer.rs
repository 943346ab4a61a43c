use crate::{
    bilingual::Bilingual,
    ids::{GymId, ProvinceId, TrainerId},
    tag::Tag,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How many classes a single trainer may offer.
pub const MAX_CLASSES: usize = 3;

/// Class duration upper bound, minutes.
pub const MAX_CLASS_DURATION: u32 = 1440;

/// Student capacity bounds per class.
pub const MIN_CLASS_STUDENTS: u32 = 1;
pub const MAX_CLASS_STUDENTS: u32 = 99;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    pub id: TrainerId,
    pub name: Bilingual,
    #[serde(default)]
    pub bio: Bilingual,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub line_id: String,
    #[serde(default)]
    pub province_id: Option<ProvinceId>,
    #[serde(default)]
    pub gym_id: Option<GymId>,
    #[serde(default)]
    pub is_freelance: bool,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub classes: Vec<TrainerClass>,
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

/// Backend shape of a class. Price is stored in satang; the admin forms
/// collect whole baht and convert on submit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerClass {
    pub name: Bilingual,
    #[serde(default)]
    pub description: Bilingual,
    pub duration: u32,
    pub price: i64,
    pub max_students: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerPayload {
    pub name: Bilingual,
    pub bio: Bilingual,
    pub phone: String,
    pub email: String,
    pub line_id: String,
    pub province_id: Option<ProvinceId>,
    pub gym_id: Option<GymId>,
    pub is_freelance: bool,
    pub images: Vec<String>,
    pub tags: Vec<Tag>,
    pub classes: Vec<TrainerClass>,
    pub is_active: bool,
}

impl From<&Trainer> for TrainerPayload {
    fn from(trainer: &Trainer) -> Self {
        TrainerPayload {
            name: trainer.name.clone(),
            bio: trainer.bio.clone(),
            phone: trainer.phone.clone(),
            email: trainer.email.clone(),
            line_id: trainer.line_id.clone(),
            province_id: trainer.province_id.clone(),
            gym_id: trainer.gym_id.clone(),
            is_freelance: trainer.is_freelance,
            images: trainer.images.clone(),
            tags: trainer.tags.clone(),
            classes: trainer.classes.clone(),
            is_active: trainer.is_active,
        }
    }
}
