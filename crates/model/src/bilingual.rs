use serde::{Deserialize, Serialize};

/// A Thai/English string pair. The Thai variant is the canonical one: a
/// bilingual field counts as filled only when `th` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    #[serde(default)]
    pub th: String,
    #[serde(default)]
    pub en: String,
}

impl Bilingual {
    pub fn new(th: impl Into<String>, en: impl Into<String>) -> Self {
        Bilingual {
            th: th.into(),
            en: en.into(),
        }
    }

    pub fn th_only(th: impl Into<String>) -> Self {
        Bilingual {
            th: th.into(),
            en: String::new(),
        }
    }

    pub fn has_th(&self) -> bool {
        !self.th.trim().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.th.trim().is_empty() && self.en.trim().is_empty()
    }
}
