use admin_core::reconcile::{reconcile, Reconciliation};
use api::{backend::ImageStore, error::ApiError};
use model::{gym::Gym, ids::TrainerId, tag::MAX_TAGS, trainer::Trainer};

/// An image slot: either already on the CDN or still raw bytes waiting for
/// upload at submit time.
#[derive(Debug, Clone)]
pub enum ImageRef {
    Url(String),
    Pending { bytes: Vec<u8>, extension: String },
}

/// Step 2 of the gym dialog: images, tag selection and the gym↔trainer
/// association. Tags are held as slugs until submission resolves them to
/// full tag objects. The trainer list captured at load time stays untouched;
/// the selector edits a separate complete list and the diff between the two
/// is what gets persisted.
#[derive(Debug, Default)]
pub struct GymStepTwo {
    pub images: Vec<ImageRef>,
    tags: Vec<String>,
    original_trainers: Vec<Trainer>,
    selected_trainers: Vec<Trainer>,
}

impl GymStepTwo {
    pub fn new() -> Self {
        GymStepTwo::default()
    }

    pub fn from_gym(gym: &Gym, trainers: Vec<Trainer>) -> Self {
        GymStepTwo {
            images: gym.images.iter().cloned().map(ImageRef::Url).collect(),
            tags: gym.tags.iter().map(|t| t.slug.clone()).collect(),
            original_trainers: trainers.clone(),
            selected_trainers: trainers,
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn can_select_more_tags(&self) -> bool {
        self.tags.len() < MAX_TAGS
    }

    /// Select or deselect a tag slug. Selecting past the cap is a no-op.
    pub fn toggle_tag(&mut self, slug: &str) -> bool {
        if let Some(pos) = self.tags.iter().position(|s| s == slug) {
            self.tags.remove(pos);
            return true;
        }
        if !self.can_select_more_tags() {
            return false;
        }
        self.tags.push(slug.to_owned());
        true
    }

    pub fn selected_trainers(&self) -> &[Trainer] {
        &self.selected_trainers
    }

    pub fn add_trainer(&mut self, trainer: Trainer) {
        if self.selected_trainers.iter().any(|t| t.id == trainer.id) {
            return;
        }
        self.selected_trainers.push(trainer);
    }

    pub fn remove_trainer(&mut self, id: &TrainerId) {
        self.selected_trainers.retain(|t| &t.id != id);
    }

    /// The add/remove plan against the snapshot captured at load time.
    pub fn trainer_plan(&self) -> Reconciliation<Trainer> {
        reconcile(&self.original_trainers, &self.selected_trainers, |t| {
            t.id.clone()
        })
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

    /// Uploads every pending slot in order and returns the full URL list.
    /// Slots are replaced in place, so a retry after a failed submit does
    /// not re-upload what already made it to the CDN.
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

#[cfg(test)]
mod tests {
    use super::*;
    use model::{bilingual::Bilingual, ids::TrainerId};

    fn trainer(id: &str) -> Trainer {
        Trainer {
            id: TrainerId::new(id),
            name: Bilingual::th_only(id),
            bio: Bilingual::default(),
            phone: String::new(),
            email: String::new(),
            line_id: String::new(),
            province_id: None,
            gym_id: None,
            is_freelance: false,
            images: vec![],
            tags: vec![],
            classes: vec![],
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_sixth_tag_is_noop() {
        let mut step = GymStepTwo::new();
        for slug in ["a", "b", "c", "d", "e"] {
            assert!(step.toggle_tag(slug));
        }
        assert!(!step.can_select_more_tags());
        assert!(!step.toggle_tag("f"));
        assert_eq!(step.tags().len(), 5);
        // deselecting still works at the cap
        assert!(step.toggle_tag("a"));
        assert_eq!(step.tags().len(), 4);
    }

    #[test]
    fn test_toggle_many_times_is_net_change() {
        let mut step = GymStepTwo::new();
        step.add_trainer(trainer("A"));
        step.remove_trainer(&TrainerId::new("A"));
        step.add_trainer(trainer("A"));
        let plan = step.trainer_plan();
        assert_eq!(plan.to_add.len(), 1);
        assert!(plan.to_remove.is_empty());
    }

    #[test]
    fn test_duplicate_add_ignored() {
        let mut step = GymStepTwo::new();
        step.add_trainer(trainer("A"));
        step.add_trainer(trainer("A"));
        assert_eq!(step.selected_trainers().len(), 1);
    }
}
