/// Two-step dialog flow shared by the gym and trainer wizards. The flow
/// tracks which step is showing, the entity identity once one exists, and
/// whether a save is in flight.
///
/// ```text
/// [Closed] --open(new)--> [Step1:Create]
/// [Closed] --open(existing)--> [Step1:Edit]
/// [Step1:Create] --Next(created)--> [Step2:Create]
/// [Step1:Edit] --Next(saved)--> [Step2:Edit]
/// [Step2:*] --Back--> [Step1:*]        draft retained
/// [Step2:*] --Submit(success)--> [Closed]
/// [*] --Cancel--> [Closed]             draft discarded
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    One,
    Two,
}

/// Navigation outcome of a step action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    /// Invalid input or a failed call: the step stays up, fields populated.
    Stay,
    Forward,
    Back,
    Close,
}

#[derive(Debug)]
pub struct StepFlow<Id> {
    step: Step,
    entity_id: Option<Id>,
    created_here: bool,
    saving: bool,
}

impl<Id: PartialEq + Clone> StepFlow<Id> {
    pub fn create() -> Self {
        StepFlow {
            step: Step::One,
            entity_id: None,
            created_here: true,
            saving: false,
        }
    }

    pub fn edit(id: Id) -> Self {
        StepFlow {
            step: Step::One,
            entity_id: Some(id),
            created_here: false,
            saving: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_create(&self) -> bool {
        self.created_here
    }

    pub fn entity_id(&self) -> Option<&Id> {
        self.entity_id.as_ref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Marks a save in flight. Returns false (and changes nothing) when one
    /// already is, so overlapping saves cannot start.
    pub fn begin_save(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        true
    }

    pub fn end_save(&mut self) {
        self.saving = false;
    }

    /// Step 1 → Step 2 after a create call returned an identity, or after an
    /// edit-mode save. Step 2 is unreachable without one.
    pub fn advance(&mut self, id: Id) {
        self.entity_id = Some(id);
        self.step = Step::Two;
    }

    pub fn back(&mut self) {
        self.step = Step::One;
    }

    /// Guarded reset policy: the accumulated draft may only be thrown away
    /// when the dialog is re-targeted at a *different* identity, and never
    /// while step 2 is showing or a save is in flight. Otherwise a re-render
    /// racing an async save completion would silently drop the draft.
    ///
    /// A create-mode dialog sees `None` on every re-render, so once its
    /// create call has stored an identity that `None` still means "same
    /// dialog" — only an edit dialog handed `None` is a re-target.
    pub fn should_reset(&self, incoming: Option<&Id>) -> bool {
        if self.step == Step::Two || self.saving {
            return false;
        }
        match (incoming, self.entity_id.as_ref()) {
            (Some(new), Some(current)) => new != current,
            (Some(_), None) => true,
            (None, Some(_)) => !self.created_here,
            (None, None) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_flow_has_no_identity_until_advance() {
        let mut flow: StepFlow<String> = StepFlow::create();
        assert!(flow.is_create());
        assert_eq!(flow.step(), Step::One);
        assert!(flow.entity_id().is_none());

        flow.advance("g-1".to_owned());
        assert_eq!(flow.step(), Step::Two);
        assert_eq!(flow.entity_id().map(String::as_str), Some("g-1"));
        // still a create-mode dialog after gaining an identity
        assert!(flow.is_create());
    }

    #[test]
    fn test_back_keeps_identity() {
        let mut flow = StepFlow::edit("g-1".to_owned());
        flow.advance("g-1".to_owned());
        flow.back();
        assert_eq!(flow.step(), Step::One);
        assert_eq!(flow.entity_id().map(String::as_str), Some("g-1"));
    }

    #[test]
    fn test_no_overlapping_saves() {
        let mut flow = StepFlow::edit("g-1".to_owned());
        assert!(flow.begin_save());
        assert!(!flow.begin_save());
        flow.end_save();
        assert!(flow.begin_save());
    }

    #[test]
    fn test_reset_only_for_different_identity() {
        let flow = StepFlow::edit("g-1".to_owned());
        assert!(!flow.should_reset(Some(&"g-1".to_owned())));
        assert!(flow.should_reset(Some(&"g-2".to_owned())));
        assert!(flow.should_reset(None));
    }

    #[test]
    fn test_created_identity_survives_back() {
        let mut flow: StepFlow<String> = StepFlow::create();
        assert!(!flow.should_reset(None));

        flow.advance("g-100".to_owned());
        flow.back();
        // re-renders keep handing the create dialog None; the freshly
        // created identity and the draft must survive them
        assert!(!flow.should_reset(None));
        // re-targeting at an existing entity still resets
        assert!(flow.should_reset(Some(&"g-2".to_owned())));
    }

    #[test]
    fn test_no_reset_on_step_two_or_mid_save() {
        let mut flow = StepFlow::edit("g-1".to_owned());
        flow.begin_save();
        assert!(!flow.should_reset(Some(&"g-2".to_owned())));
        flow.end_save();

        flow.advance("g-1".to_owned());
        assert!(!flow.should_reset(Some(&"g-2".to_owned())));
    }
}
