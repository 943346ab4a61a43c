use admin_core::rules::{Constraint, FieldError, FieldValue, RuleSet};
use model::{bilingual::Bilingual, gym::Gym, ids::ProvinceId};

/// Step 1 of the gym dialog: scalar identity, contact and description
/// fields. Pure field state; saving and step transitions live in the wizard.
#[derive(Debug, Default, Clone)]
pub struct GymStepOne {
    pub name: Bilingual,
    pub description: Bilingual,
    pub phone: String,
    pub email: String,
    pub line_id: String,
    pub facebook_url: String,
    pub website_url: String,
    pub google_maps_url: String,
    pub province_id: Option<ProvinceId>,
    pub is_active: bool,
    pub errors: Vec<FieldError>,
}

impl GymStepOne {
    pub fn new() -> Self {
        GymStepOne {
            is_active: true,
            ..GymStepOne::default()
        }
    }

    pub fn from_gym(gym: &Gym) -> Self {
        GymStepOne {
            name: gym.name.clone(),
            description: gym.description.clone(),
            phone: gym.phone.clone(),
            email: gym.email.clone(),
            line_id: gym.line_id.clone(),
            facebook_url: gym.facebook_url.clone(),
            website_url: gym.website_url.clone(),
            google_maps_url: gym.google_maps_url.clone(),
            province_id: gym.province_id.clone(),
            is_active: gym.is_active,
            errors: Vec::new(),
        }
    }

    fn rules() -> RuleSet {
        RuleSet::new()
            .rule("name", Constraint::RequiredTh)
            .rule("phone", Constraint::Phone)
            .rule("email", Constraint::Email)
            .rule("facebookUrl", Constraint::AbsoluteUrl)
            .rule("websiteUrl", Constraint::AbsoluteUrl)
            .rule("googleMapsUrl", Constraint::AbsoluteUrl)
    }

    /// Full validation; stores the inline errors and reports overall success.
    pub fn validate(&mut self) -> bool {
        let result = Self::rules().validate(|field| match field {
            "name" => FieldValue::Pair(&self.name),
            "phone" => FieldValue::Text(&self.phone),
            "email" => FieldValue::Text(&self.email),
            "facebookUrl" => FieldValue::Text(&self.facebook_url),
            "websiteUrl" => FieldValue::Text(&self.website_url),
            "googleMapsUrl" => FieldValue::Text(&self.google_maps_url),
            _ => FieldValue::Text(""),
        });
        match result {
            Ok(()) => {
                self.errors.clear();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    /// At least one required field is filled, the auto-save precondition.
    pub fn has_content(&self) -> bool {
        self.name.has_th()
    }
}
