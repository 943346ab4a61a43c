use crate::{bilingual::Bilingual, ids::ProvinceId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Province {
    pub id: ProvinceId,
    pub name: Bilingual,
    #[serde(default)]
    pub region: String,
}
