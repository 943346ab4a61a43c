//! Admin account management: the paged [`list::UserList`] table and a
//! single-page editor. Unlike gyms and trainers the editor is not a stepped
//! dialog: one form, explicit save, no auto-save.

pub mod list;

pub use list::UserList;

use admin_core::{
    notify::Notify,
    rules::{Constraint, FieldError, FieldValue, RuleSet},
};
use api::backend::UserBackend;
use eyre::Result;
use model::{
    admin_user::{AdminUser, AdminUserPayload, Role},
    ids::AdminUserId,
};
use std::sync::Arc;

pub struct UserForm {
    user_id: Option<AdminUserId>,
    pub email: String,
    pub display_name: String,
    /// Empty in edit mode means "keep the current password".
    pub password: String,
    pub role: Role,
    pub is_active: bool,
    pub errors: Vec<FieldError>,
    backend: Arc<dyn UserBackend>,
    notify: Arc<dyn Notify>,
}

impl UserForm {
    pub fn create(backend: Arc<dyn UserBackend>, notify: Arc<dyn Notify>) -> Self {
        UserForm {
            user_id: None,
            email: String::new(),
            display_name: String::new(),
            password: String::new(),
            role: Role::Editor,
            is_active: true,
            errors: Vec::new(),
            backend,
            notify,
        }
    }

    pub fn edit(backend: Arc<dyn UserBackend>, notify: Arc<dyn Notify>, user: &AdminUser) -> Self {
        UserForm {
            user_id: Some(user.id.clone()),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            password: String::new(),
            role: user.role,
            is_active: user.is_active,
            errors: Vec::new(),
            backend,
            notify,
        }
    }

    pub fn is_create(&self) -> bool {
        self.user_id.is_none()
    }

    fn rules(&self) -> RuleSet {
        let mut rules = RuleSet::new()
            .rule("email", Constraint::RequiredText)
            .rule("email", Constraint::Email)
            .rule("displayName", Constraint::RequiredText)
            .rule("password", Constraint::Password);
        // A new account cannot be created without a password.
        if self.is_create() {
            rules = rules.rule("password", Constraint::RequiredText);
        }
        rules
    }

    pub fn validate(&mut self) -> bool {
        let result = self.rules().validate(|field| match field {
            "email" => FieldValue::Text(&self.email),
            "displayName" => FieldValue::Text(&self.display_name),
            _ => FieldValue::Text(&self.password),
        });
        self.errors = result.err().unwrap_or_default();
        self.errors.is_empty()
    }

    fn payload(&self) -> AdminUserPayload {
        AdminUserPayload {
            email: self.email.trim().to_owned(),
            display_name: self.display_name.trim().to_owned(),
            password: if self.password.is_empty() {
                None
            } else {
                Some(self.password.clone())
            },
            role: self.role,
            is_active: self.is_active,
        }
    }

    /// Validates and persists. Returns `Ok(true)` when the form was saved
    /// and the dialog should close.
    pub async fn save(&mut self) -> Result<bool> {
        if !self.validate() {
            return Ok(false);
        }
        let payload = self.payload();
        let result = match &self.user_id {
            Some(id) => self.backend.update_user(id, &payload).await,
            None => self.backend.create_user(&payload).await,
        };
        match result {
            Ok(saved) => {
                self.user_id = Some(saved.id);
                self.password.clear();
                self.notify.success("admin user saved");
                Ok(true)
            }
            Err(err) => {
                self.notify.error(&format!("failed to save admin user: {err}"));
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_core::notify::LogNotify;
    use api::error::ApiError;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Backend {
        create_calls: Mutex<Vec<AdminUserPayload>>,
        update_calls: Mutex<Vec<(AdminUserId, AdminUserPayload)>>,
    }

    #[async_trait]
    impl UserBackend for Backend {
        async fn create_user(&self, payload: &AdminUserPayload) -> Result<AdminUser, ApiError> {
            self.create_calls.lock().push(payload.clone());
            Ok(user("u-1", payload))
        }

        async fn update_user(
            &self,
            id: &AdminUserId,
            payload: &AdminUserPayload,
        ) -> Result<AdminUser, ApiError> {
            self.update_calls.lock().push((id.clone(), payload.clone()));
            Ok(user(id.as_str(), payload))
        }
    }

    fn user(id: &str, payload: &AdminUserPayload) -> AdminUser {
        AdminUser {
            id: AdminUserId::new(id),
            email: payload.email.clone(),
            display_name: payload.display_name.clone(),
            role: payload.role,
            is_active: payload.is_active,
            created_at: None,
        }
    }

    fn form(backend: Arc<Backend>) -> UserForm {
        UserForm::create(backend, Arc::new(LogNotify))
    }

    #[tokio::test]
    async fn test_create_requires_password() {
        let backend = Arc::new(Backend::default());
        let mut form = form(backend.clone());
        form.email = "staff@example.com".to_owned();
        form.display_name = "Staff".to_owned();

        assert!(!form.save().await.unwrap());
        assert!(form.errors.iter().any(|e| e.field == "password"));
        assert!(backend.create_calls.lock().is_empty());

        form.password = "correcthorse".to_owned();
        assert!(form.save().await.unwrap());
        assert_eq!(backend.create_calls.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_short_password_rejected() {
        let backend = Arc::new(Backend::default());
        let mut form = form(backend);
        form.email = "staff@example.com".to_owned();
        form.display_name = "Staff".to_owned();
        form.password = "short".to_owned();

        assert!(!form.save().await.unwrap());
        assert!(form.errors.iter().any(|e| e.field == "password"));
    }

    #[tokio::test]
    async fn test_edit_omits_untouched_password() {
        let backend = Arc::new(Backend::default());
        let existing = user(
            "u-42",
            &AdminUserPayload {
                email: "staff@example.com".to_owned(),
                display_name: "Staff".to_owned(),
                password: None,
                role: Role::Admin,
                is_active: true,
            },
        );
        let mut form = UserForm::edit(backend.clone(), Arc::new(LogNotify), &existing);
        form.display_name = "Head Staff".to_owned();

        assert!(form.save().await.unwrap());
        let updates = backend.update_calls.lock();
        assert_eq!(updates[0].0.as_str(), "u-42");
        assert_eq!(updates[0].1.password, None);
        assert_eq!(updates[0].1.display_name, "Head Staff");
    }

    #[tokio::test]
    async fn test_invalid_email_blocks_save() {
        let backend = Arc::new(Backend::default());
        let mut form = form(backend.clone());
        form.email = "not-an-email".to_owned();
        form.display_name = "Staff".to_owned();
        form.password = "correcthorse".to_owned();

        assert!(!form.save().await.unwrap());
        assert!(form.errors.iter().any(|e| e.field == "email"));
        assert!(backend.create_calls.lock().is_empty());
    }
}
