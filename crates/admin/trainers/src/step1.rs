use admin_core::rules::{Constraint, FieldError, FieldValue, RuleSet};
use model::{
    bilingual::Bilingual,
    ids::{GymId, ProvinceId},
    trainer::Trainer,
};

/// Step 1 of the trainer dialog: identity, contact and bio fields.
#[derive(Debug, Default, Clone)]
pub struct TrainerStepOne {
    pub name: Bilingual,
    pub bio: Bilingual,
    pub phone: String,
    pub email: String,
    pub line_id: String,
    pub province_id: Option<ProvinceId>,
    pub gym_id: Option<GymId>,
    pub is_freelance: bool,
    pub is_active: bool,
    pub errors: Vec<FieldError>,
}

impl TrainerStepOne {
    pub fn new() -> Self {
        TrainerStepOne {
            is_active: true,
            ..TrainerStepOne::default()
        }
    }

    pub fn from_trainer(trainer: &Trainer) -> Self {
        TrainerStepOne {
            name: trainer.name.clone(),
            bio: trainer.bio.clone(),
            phone: trainer.phone.clone(),
            email: trainer.email.clone(),
            line_id: trainer.line_id.clone(),
            province_id: trainer.province_id.clone(),
            gym_id: trainer.gym_id.clone(),
            is_freelance: trainer.is_freelance,
            is_active: trainer.is_active,
            errors: Vec::new(),
        }
    }

    fn rules() -> RuleSet {
        RuleSet::new()
            .rule("name", Constraint::RequiredTh)
            .rule("phone", Constraint::Phone)
            .rule("email", Constraint::Email)
    }

    pub fn validate(&mut self) -> bool {
        let result = Self::rules().validate(|field| match field {
            "name" => FieldValue::Pair(&self.name),
            "phone" => FieldValue::Text(&self.phone),
            "email" => FieldValue::Text(&self.email),
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

    pub fn has_content(&self) -> bool {
        self.name.has_th()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shares_rule_table_semantics() {
        let mut step = TrainerStepOne::new();
        step.name = Bilingual::th_only("ครูมวย");
        step.phone = "+66 81 234 5678".to_owned();
        step.email = "kru@example.com".to_owned();
        assert!(step.validate());

        step.email = "broken@".to_owned();
        assert!(!step.validate());
        assert_eq!(step.errors[0].field, "email");
    }
}
