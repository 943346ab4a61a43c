use crate::{step1::GymStepOne, step2::GymStepTwo};
use admin_core::{
    debounce::{Debouncer, AUTOSAVE_DELAY},
    notify::Notify,
    wizard::{Nav, Step, StepFlow},
};
use api::backend::{AdminBackend, ImageStore};
use eyre::{bail, Result};
use log::warn;
use model::{
    gym::{Gym, GymPayload},
    ids::GymId,
    trainer::{Trainer, TrainerPayload},
};
use std::{sync::Arc, time::Instant};

type Callback = Box<dyn Fn() + Send + Sync>;

/// Step controller for the gym dialog. Owns the accumulated draft across
/// both steps, decides when to create vs. update, and bridges the backend
/// collaborator. Any failed call is toasted and returned to the caller;
/// the draft stays intact either way.
pub struct GymWizard {
    flow: StepFlow<GymId>,
    pub step_one: GymStepOne,
    pub step_two: GymStepTwo,
    /// Hydrated payload defaults; untouched fields ride along on every save.
    base: GymPayload,
    backend: Arc<dyn AdminBackend>,
    images: Arc<dyn ImageStore>,
    notify: Arc<dyn Notify>,
    autosave: Debouncer,
    /// Edit-mode completion: close the dialog, refetch the list.
    on_complete: Option<Callback>,
    /// Create-mode finalization; dialog closing is the caller's concern.
    on_submit: Option<Callback>,
}

impl GymWizard {
    pub fn create(
        backend: Arc<dyn AdminBackend>,
        images: Arc<dyn ImageStore>,
        notify: Arc<dyn Notify>,
    ) -> Self {
        GymWizard {
            flow: StepFlow::create(),
            step_one: GymStepOne::new(),
            step_two: GymStepTwo::new(),
            base: GymPayload {
                is_active: true,
                ..GymPayload::default()
            },
            backend,
            images,
            notify,
            autosave: Debouncer::new(AUTOSAVE_DELAY),
            on_complete: None,
            on_submit: None,
        }
    }

    /// Opens the dialog over an existing gym, capturing the original trainer
    /// association list for later reconciliation.
    pub async fn open_edit(
        backend: Arc<dyn AdminBackend>,
        images: Arc<dyn ImageStore>,
        notify: Arc<dyn Notify>,
        gym: &Gym,
    ) -> Result<Self> {
        let trainers = backend.gym_trainers(&gym.id).await?;
        Ok(GymWizard {
            flow: StepFlow::edit(gym.id.clone()),
            step_one: GymStepOne::from_gym(gym),
            step_two: GymStepTwo::from_gym(gym, trainers),
            base: GymPayload::from(gym),
            backend,
            images,
            notify,
            autosave: Debouncer::new(AUTOSAVE_DELAY),
            on_complete: None,
            on_submit: None,
        })
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

    pub fn is_create(&self) -> bool {
        self.flow.is_create()
    }

    pub fn gym_id(&self) -> Option<&GymId> {
        self.flow.entity_id()
    }

    pub fn is_saving(&self) -> bool {
        self.flow.is_saving()
    }

    /// Re-target check on re-render: the draft resets only when the dialog
    /// now points at a different gym, and never on step 2 or mid-save.
    pub async fn sync_target(&mut self, incoming: Option<&Gym>) -> Result<()> {
        if !self.flow.should_reset(incoming.map(|g| &g.id)) {
            return Ok(());
        }
        match incoming {
            Some(gym) => {
                let trainers = self.backend.gym_trainers(&gym.id).await?;
                self.flow = StepFlow::edit(gym.id.clone());
                self.step_one = GymStepOne::from_gym(gym);
                self.step_two = GymStepTwo::from_gym(gym, trainers);
                self.base = GymPayload::from(gym);
            }
            None => {
                self.flow = StepFlow::create();
                self.step_one = GymStepOne::new();
                self.step_two = GymStepTwo::new();
                self.base = GymPayload {
                    is_active: true,
                    ..GymPayload::default()
                };
            }
        }
        self.autosave.cancel();
        Ok(())
    }

    /// Called after every step-1 keystroke; (re)arms the auto-save window.
    pub fn note_input(&mut self) {
        self.note_input_at(Instant::now());
    }

    pub fn note_input_at(&mut self, now: Instant) {
        if self.flow.step() == Step::One {
            self.autosave.poke_at(now);
        }
    }

    /// Drives the auto-save debounce. Fires at most once per idle window,
    /// only with a persisted identity and a non-empty name, and never while
    /// another save is in flight. Failures are logged, not surfaced.
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
            // a save is in flight; try again after the next idle window
            self.autosave.poke_at(now);
            return;
        }
        let payload = self.step1_payload();
        if let Err(err) = self.backend.update_gym(&id, &payload).await {
            warn!("gym auto-save failed for {id}: {err}");
        }
        self.flow.end_save();
    }

    /// "Next" on step 1. Runs full validation, persists (create or explicit
    /// save depending on mode) and advances. In create mode the backend must
    /// return an identity, otherwise the dialog stays on step 1.
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
                self.notify.error(&format!("failed to save gym: {err}"));
                Err(err)
            }
        }
    }

    async fn persist_step_one(&mut self) -> Result<GymId> {
        let payload = self.step1_payload();
        match self.flow.entity_id().cloned() {
            Some(id) => {
                self.backend.update_gym(&id, &payload).await?;
                Ok(id)
            }
            None => {
                let created = self.backend.create_gym(&payload).await?;
                if created.id.is_empty() {
                    bail!("gym create returned no id");
                }
                Ok(created.id)
            }
        }
    }

    /// Back to step 1; the collected data stays.
    pub fn back(&mut self) -> Nav {
        if self.flow.step() == Step::Two {
            self.flow.back();
        }
        Nav::Back
    }

    /// Final submission from step 2: uploads pending images, resolves tag
    /// slugs to tag objects, persists the merged draft and reconciles the
    /// trainer association diff with one call per changed trainer.
    pub async fn submit(&mut self) -> Result<Nav> {
        if self.flow.step() != Step::Two {
            return Ok(Nav::Stay);
        }
        let Some(id) = self.flow.entity_id().cloned() else {
            return Ok(Nav::Stay);
        };
        if !self.flow.begin_save() {
            return Ok(Nav::Stay);
        }
        let result = self.submit_inner(&id).await;
        self.flow.end_save();
        match result {
            Ok(()) => {
                self.notify.success("gym saved");
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
                self.notify.error(&format!("failed to save gym: {err}"));
                Err(err)
            }
        }
    }

    async fn submit_inner(&mut self, id: &GymId) -> Result<()> {
        let store = self.images.clone();
        let images = self.step_two.upload_pending(store.as_ref()).await?;

        // the submission contract wants tag objects, not slugs
        let mut tags = Vec::new();
        for slug in self.step_two.tags() {
            match self.backend.find_tag(slug).await? {
                Some(tag) => tags.push(tag),
                None => warn!("tag {slug} no longer exists, dropping from gym {id}"),
            }
        }

        let mut payload = self.step1_payload();
        payload.images = images;
        payload.tags = tags;
        self.backend.update_gym(id, &payload).await?;

        // primary save succeeded; association failures degrade to a warning
        let plan = self.step_two.trainer_plan();
        let mut failures = Vec::new();
        for trainer in &plan.to_add {
            if let Err(err) = self.assign_gym(trainer, Some(id.clone())).await {
                warn!("failed to attach trainer {} to gym {id}: {err}", trainer.id);
                failures.push(trainer.id.clone());
            }
        }
        for trainer in &plan.to_remove {
            if let Err(err) = self.assign_gym(trainer, None).await {
                warn!("failed to detach trainer {} from gym {id}: {err}", trainer.id);
                failures.push(trainer.id.clone());
            }
        }
        if !failures.is_empty() {
            self.notify
                .warning(&format!("{} trainer updates failed", failures.len()));
        }
        Ok(())
    }

    async fn assign_gym(&self, trainer: &Trainer, gym_id: Option<GymId>) -> Result<()> {
        let mut payload = TrainerPayload::from(trainer);
        payload.gym_id = gym_id;
        self.backend.update_trainer(&trainer.id, &payload).await?;
        Ok(())
    }

    /// Cancel discards the draft; the caller drops the wizard.
    pub fn cancel(&mut self) -> Nav {
        self.autosave.cancel();
        Nav::Close
    }

    fn step1_payload(&self) -> GymPayload {
        let mut payload = self.base.clone();
        payload.name = self.step_one.name.clone();
        payload.description = self.step_one.description.clone();
        payload.phone = self.step_one.phone.clone();
        payload.email = self.step_one.email.clone();
        payload.line_id = self.step_one.line_id.clone();
        payload.facebook_url = self.step_one.facebook_url.clone();
        payload.website_url = self.step_one.website_url.clone();
        payload.google_maps_url = self.step_one.google_maps_url.clone();
        payload.province_id = self.step_one.province_id.clone();
        payload.is_active = self.step_one.is_active;
        payload
    }
}
