use crate::{step1::TrainerStepOne, step2::TrainerStepTwo};
use admin_core::{
    debounce::{Debouncer, AUTOSAVE_DELAY},
    notify::Notify,
    wizard::{Nav, Step, StepFlow},
};
use api::backend::{AdminBackend, ImageStore};
use eyre::{bail, Result};
use log::warn;
use model::{
    ids::TrainerId,
    trainer::{Trainer, TrainerPayload},
};
use std::{sync::Arc, time::Instant};

type Callback = Box<dyn Fn() + Send + Sync>;

/// Step controller for the trainer dialog. Same shape as the gym wizard:
/// step 1 collects scalars with edit-mode auto-save, step 2 manages images,
/// tags and classes and performs the final submission.
pub struct TrainerWizard {
    flow: StepFlow<TrainerId>,
    pub step_one: TrainerStepOne,
    pub step_two: TrainerStepTwo,
    base: TrainerPayload,
    backend: Arc<dyn AdminBackend>,
    images: Arc<dyn ImageStore>,
    notify: Arc<dyn Notify>,
    autosave: Debouncer,
    on_complete: Option<Callback>,
    on_submit: Option<Callback>,
}

impl TrainerWizard {
    pub fn create(
        backend: Arc<dyn AdminBackend>,
        images: Arc<dyn ImageStore>,
        notify: Arc<dyn Notify>,
    ) -> Self {
        TrainerWizard {
            flow: StepFlow::create(),
            step_one: TrainerStepOne::new(),
            step_two: TrainerStepTwo::new(),
            base: TrainerPayload {
                is_active: true,
                ..TrainerPayload::default()
            },
            backend,
            images,
            notify,
            autosave: Debouncer::new(AUTOSAVE_DELAY),
            on_complete: None,
            on_submit: None,
        }
    }

    pub fn edit(
        backend: Arc<dyn AdminBackend>,
        images: Arc<dyn ImageStore>,
        notify: Arc<dyn Notify>,
        trainer: &Trainer,
    ) -> Self {
        TrainerWizard {
            flow: StepFlow::edit(trainer.id.clone()),
            step_one: TrainerStepOne::from_trainer(trainer),
            step_two: TrainerStepTwo::from_trainer(trainer),
            base: TrainerPayload::from(trainer),
            backend,
            images,
            notify,
            autosave: Debouncer::new(AUTOSAVE_DELAY),
            on_complete: None,
            on_submit: None,
        }
    }

    pub fn on_complete(&mut self, callback: impl Fn() + Send + Sync + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    pub fn on_submit(&mut self, callback: impl Fn() + Send + Sync + 'static) {
        self.on_submit = Some(Box::new(callback));
    }

    pub fn step(&self) -> Step {
        self.flow.step()
    }

    pub fn trainer_id(&self) -> Option<&TrainerId> {
        self.flow.entity_id()
    }

    pub fn is_saving(&self) -> bool {
        self.flow.is_saving()
    }

    /// Re-target guard, same policy as the gym dialog.
    pub fn sync_target(&mut self, incoming: Option<&Trainer>) {
        if !self.flow.should_reset(incoming.map(|t| &t.id)) {
            return;
        }
        match incoming {
            Some(trainer) => {
                self.flow = StepFlow::edit(trainer.id.clone());
                self.step_one = TrainerStepOne::from_trainer(trainer);
                self.step_two = TrainerStepTwo::from_trainer(trainer);
                self.base = TrainerPayload::from(trainer);
            }
            None => {
                self.flow = StepFlow::create();
                self.step_one = TrainerStepOne::new();
                self.step_two = TrainerStepTwo::new();
                self.base = TrainerPayload {
                    is_active: true,
                    ..TrainerPayload::default()
                };
            }
        }
        self.autosave.cancel();
    }

    pub fn note_input(&mut self) {
        self.note_input_at(Instant::now());
    }

    pub fn note_input_at(&mut self, now: Instant) {
        if self.flow.step() == Step::One {
            self.autosave.poke_at(now);
        }
    }

    pub async fn tick(&mut self) {
        self.tick_at(Instant::now()).await;
    }

    pub async fn tick_at(&mut self, now: Instant) {
        if !self.autosave.fire_at(now) {
            return;
        }
        let Some(id) = self.flow.entity_id().cloned() else {
            return;
        };
        if !self.step_one.has_content() {
            return;
        }
        if !self.flow.begin_save() {
            self.autosave.poke_at(now);
            return;
        }
        let payload = self.step1_payload();
        if let Err(err) = self.backend.update_trainer(&id, &payload).await {
            warn!("trainer auto-save failed for {id}: {err}");
        }
        self.flow.end_save();
    }

    pub async fn next(&mut self) -> Result<Nav> {
        if self.flow.step() == Step::Two {
            return Ok(Nav::Stay);
        }
        if !self.step_one.validate() {
            return Ok(Nav::Stay);
        }
        if !self.flow.begin_save() {
            return Ok(Nav::Stay);
        }
        let result = self.persist_step_one().await;
        self.flow.end_save();
        match result {
            Ok(id) => {
                self.autosave.cancel();
                self.flow.advance(id);
                Ok(Nav::Forward)
            }
            Err(err) => {
                self.notify.error(&format!("failed to save trainer: {err}"));
                Err(err)
            }
        }
    }

    async fn persist_step_one(&mut self) -> Result<TrainerId> {
        let payload = self.step1_payload();
        match self.flow.entity_id().cloned() {
            Some(id) => {
                self.backend.update_trainer(&id, &payload).await?;
                Ok(id)
            }
            None => {
                let created = self.backend.create_trainer(&payload).await?;
                if created.id.is_empty() {
                    bail!("trainer create returned no id");
                }
                Ok(created.id)
            }
        }
    }

    pub fn back(&mut self) -> Nav {
        if self.flow.step() == Step::Two {
            self.flow.back();
        }
        Nav::Back
    }

    pub async fn submit(&mut self) -> Result<Nav> {
        if self.flow.step() != Step::Two {
            return Ok(Nav::Stay);
        }
        let Some(id) = self.flow.entity_id().cloned() else {
            return Ok(Nav::Stay);
        };
        if !self.step_two.validate_classes().is_empty() {
            return Ok(Nav::Stay);
        }
        if !self.flow.begin_save() {
            return Ok(Nav::Stay);
        }
        let result = self.submit_inner(&id).await;
        self.flow.end_save();
        match result {
            Ok(()) => {
                self.notify.success("trainer saved");
                let callback = if self.flow.is_create() {
                    &self.on_submit
                } else {
                    &self.on_complete
                };
                if let Some(callback) = callback {
                    callback();
                }
                Ok(Nav::Close)
            }
            Err(err) => {
                self.notify.error(&format!("failed to save trainer: {err}"));
                Err(err)
            }
        }
    }

    async fn submit_inner(&mut self, id: &TrainerId) -> Result<()> {
        let store = self.images.clone();
        let images = self.step_two.upload_pending(store.as_ref()).await?;

        let mut tags = Vec::new();
        for slug in self.step_two.tags() {
            match self.backend.find_tag(slug).await? {
                Some(tag) => tags.push(tag),
                None => warn!("tag {slug} no longer exists, dropping from trainer {id}"),
            }
        }

        let mut payload = self.step1_payload();
        payload.images = images;
        payload.tags = tags;
        payload.classes = self.step_two.classes_payload();
        self.backend.update_trainer(id, &payload).await?;
        Ok(())
    }

    pub fn cancel(&mut self) -> Nav {
        self.autosave.cancel();
        Nav::Close
    }

    fn step1_payload(&self) -> TrainerPayload {
        let mut payload = self.base.clone();
        payload.name = self.step_one.name.clone();
        payload.bio = self.step_one.bio.clone();
        payload.phone = self.step_one.phone.clone();
        payload.email = self.step_one.email.clone();
        payload.line_id = self.step_one.line_id.clone();
        payload.province_id = self.step_one.province_id.clone();
        payload.gym_id = self.step_one.gym_id.clone();
        payload.is_freelance = self.step_one.is_freelance;
        payload.is_active = self.step_one.is_active;
        payload
    }
}
