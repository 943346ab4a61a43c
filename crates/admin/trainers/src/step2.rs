use crate::classes::ClassForm;
use admin_core::rules::FieldError;
use api::{backend::ImageStore, error::ApiError};
use model::{
    tag::MAX_TAGS,
    trainer::{Trainer, TrainerClass, MAX_CLASSES},
};

/// An image slot, CDN URL or bytes pending upload.
#[derive(Debug, Clone)]
pub enum ImageRef {
    Url(String),
    Pending { bytes: Vec<u8>, extension: String },
}

/// Step 2 of the trainer dialog: images, tag selection and the bounded list
/// of classes the trainer offers. Classes are embedded in the trainer
/// payload, so unlike gym trainers there is no per-relation reconciliation.
#[derive(Debug, Default)]
pub struct TrainerStepTwo {
    pub images: Vec<ImageRef>,
    tags: Vec<String>,
    pub classes: Vec<ClassForm>,
}

impl TrainerStepTwo {
    pub fn new() -> Self {
        TrainerStepTwo::default()
    }

    pub fn from_trainer(trainer: &Trainer) -> Self {
        TrainerStepTwo {
            images: trainer.images.iter().cloned().map(ImageRef::Url).collect(),
            tags: trainer.tags.iter().map(|t| t.slug.clone()).collect(),
            classes: trainer.classes.iter().map(ClassForm::from_class).collect(),
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn toggle_tag(&mut self, slug: &str) -> bool {
        if let Some(pos) = self.tags.iter().position(|s| s == slug) {
            self.tags.remove(pos);
            return true;
        }
        if self.tags.len() >= MAX_TAGS {
            return false;
        }
        self.tags.push(slug.to_owned());
        true
    }

    /// Adding a fourth class is a no-op.
    pub fn add_class(&mut self) -> bool {
        if self.classes.len() >= MAX_CLASSES {
            return false;
        }
        self.classes.push(ClassForm::new());
        true
    }

    pub fn remove_class(&mut self, index: usize) {
        if index < self.classes.len() {
            self.classes.remove(index);
        }
    }

    /// Validates every class form; errors carry the class index.
    pub fn validate_classes(&self) -> Vec<(usize, Vec<FieldError>)> {
        self.classes
            .iter()
            .enumerate()
            .filter_map(|(index, class)| {
                let errors = class.validate();
                (!errors.is_empty()).then_some((index, errors))
            })
            .collect()
    }

    /// Backend-shaped classes; call only after `validate_classes` passes.
    pub fn classes_payload(&self) -> Vec<TrainerClass> {
        self.classes.iter().filter_map(ClassForm::to_class).collect()
    }

    pub fn add_image_url(&mut self, url: impl Into<String>) {
        self.images.push(ImageRef::Url(url.into()));
    }

    pub fn queue_image(&mut self, bytes: Vec<u8>, extension: impl Into<String>) {
        self.images.push(ImageRef::Pending {
            bytes,
            extension: extension.into(),
        });
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    pub async fn upload_pending(&mut self, store: &dyn ImageStore) -> Result<Vec<String>, ApiError> {
        let mut urls = Vec::with_capacity(self.images.len());
        for slot in self.images.iter_mut() {
            if let ImageRef::Pending { bytes, extension } = slot {
                let url = store.upload(bytes.clone(), extension).await?;
                *slot = ImageRef::Url(url);
            }
            if let ImageRef::Url(url) = slot {
                urls.push(url.clone());
            }
        }
        Ok(urls)
    }
}
