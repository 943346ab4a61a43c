use admin_core::{input::NumericField, rules::FieldError};
use model::{bilingual::Bilingual, trainer::TrainerClass};

/// Sub-form for one class a trainer offers. The numeric fields keep their
/// own digits-only input state; conversion to the backend shape happens at
/// submit time (price entered in whole baht, stored in satang).
#[derive(Debug, Clone)]
pub struct ClassForm {
    pub name: Bilingual,
    pub description: Bilingual,
    pub duration: NumericField,
    pub price: NumericField,
    pub max_students: NumericField,
}

impl Default for ClassForm {
    fn default() -> Self {
        ClassForm::new()
    }
}

impl ClassForm {
    pub fn new() -> Self {
        ClassForm {
            name: Bilingual::default(),
            description: Bilingual::default(),
            duration: NumericField::duration(),
            price: NumericField::price(),
            max_students: NumericField::max_students(),
        }
    }

    pub fn from_class(class: &TrainerClass) -> Self {
        let mut form = ClassForm::new();
        form.name = class.name.clone();
        form.description = class.description.clone();
        form.duration.set(&class.duration.to_string());
        form.price.set(&(class.price / 100).to_string());
        form.max_students.set(&class.max_students.to_string());
        form
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if !self.name.has_th() {
            errors.push(FieldError {
                field: "className",
                message: "required",
            });
        }
        if self.duration.parsed().is_none() {
            errors.push(FieldError {
                field: "duration",
                message: "required",
            });
        }
        if self.price.parsed().is_none() {
            errors.push(FieldError {
                field: "price",
                message: "required",
            });
        }
        if self.max_students.parsed().is_none() {
            errors.push(FieldError {
                field: "maxStudents",
                message: "must be between 1 and 99",
            });
        }
        errors
    }

    /// Backend shape, `None` while the form is incomplete.
    pub fn to_class(&self) -> Option<TrainerClass> {
        if !self.name.has_th() {
            return None;
        }
        Some(TrainerClass {
            name: self.name.clone(),
            description: self.description.clone(),
            duration: self.duration.parsed()? as u32,
            price: self.price.parsed()? as i64 * 100,
            max_students: self.max_students.parsed()? as u32,
        })
    }
}
