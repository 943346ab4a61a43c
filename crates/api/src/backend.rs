use crate::{cdn::Cdn, error::ApiError, Api};
use async_trait::async_trait;
use model::{
    admin_user::{AdminUser, AdminUserPayload},
    gym::{Gym, GymPayload},
    ids::{AdminUserId, GymId, TrainerId},
    page::{ListQuery, Paged},
    tag::Tag,
    trainer::{Trainer, TrainerPayload},
};

/// Collaborator seams the wizards are written against. The HTTP [`Api`]
/// implements them in production; tests substitute recorders.
#[async_trait]
pub trait GymBackend: Send + Sync {
    async fn create_gym(&self, payload: &GymPayload) -> Result<Gym, ApiError>;
    async fn update_gym(&self, id: &GymId, payload: &GymPayload) -> Result<Gym, ApiError>;
    async fn gym_trainers(&self, id: &GymId) -> Result<Vec<Trainer>, ApiError>;
}

#[async_trait]
pub trait TrainerBackend: Send + Sync {
    async fn create_trainer(&self, payload: &TrainerPayload) -> Result<Trainer, ApiError>;
    async fn update_trainer(
        &self,
        id: &TrainerId,
        payload: &TrainerPayload,
    ) -> Result<Trainer, ApiError>;
}

#[async_trait]
pub trait TagLookup: Send + Sync {
    async fn find_tag(&self, slug: &str) -> Result<Option<Tag>, ApiError>;
}

#[async_trait]
pub trait UserBackend: Send + Sync {
    async fn create_user(&self, payload: &AdminUserPayload) -> Result<AdminUser, ApiError>;
    async fn update_user(
        &self,
        id: &AdminUserId,
        payload: &AdminUserPayload,
    ) -> Result<AdminUser, ApiError>;
}

pub trait AdminBackend: GymBackend + TrainerBackend + TagLookup {}

impl<T: GymBackend + TrainerBackend + TagLookup> AdminBackend for T {}

/// Paged listing seams for the table screens. Separate from the wizard
/// backends: a list screen needs nothing but its fetch.
#[async_trait]
pub trait GymDirectory: Send + Sync {
    async fn list_gyms(&self, query: &ListQuery) -> Result<Paged<Gym>, ApiError>;
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn list_users(&self, query: &ListQuery) -> Result<Paged<AdminUser>, ApiError>;
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn upload(&self, bytes: Vec<u8>, extension: &str) -> Result<String, ApiError>;
}

#[async_trait]
impl GymBackend for Api {
    async fn create_gym(&self, payload: &GymPayload) -> Result<Gym, ApiError> {
        self.gyms.create(payload).await
    }

    async fn update_gym(&self, id: &GymId, payload: &GymPayload) -> Result<Gym, ApiError> {
        self.gyms.update(id, payload).await
    }

    async fn gym_trainers(&self, id: &GymId) -> Result<Vec<Trainer>, ApiError> {
        self.trainers.list_by_gym(id).await
    }
}

#[async_trait]
impl TrainerBackend for Api {
    async fn create_trainer(&self, payload: &TrainerPayload) -> Result<Trainer, ApiError> {
        self.trainers.create(payload).await
    }

    async fn update_trainer(
        &self,
        id: &TrainerId,
        payload: &TrainerPayload,
    ) -> Result<Trainer, ApiError> {
        self.trainers.update(id, payload).await
    }
}

#[async_trait]
impl TagLookup for Api {
    async fn find_tag(&self, slug: &str) -> Result<Option<Tag>, ApiError> {
        self.tags.find_by_slug(slug).await
    }
}

#[async_trait]
impl GymDirectory for Api {
    async fn list_gyms(&self, query: &ListQuery) -> Result<Paged<Gym>, ApiError> {
        self.gyms.list(query).await
    }
}

#[async_trait]
impl UserDirectory for Api {
    async fn list_users(&self, query: &ListQuery) -> Result<Paged<AdminUser>, ApiError> {
        self.admin_users.list(query).await
    }
}

#[async_trait]
impl UserBackend for Api {
    async fn create_user(&self, payload: &AdminUserPayload) -> Result<AdminUser, ApiError> {
        self.admin_users.create(payload).await
    }

    async fn update_user(
        &self,
        id: &AdminUserId,
        payload: &AdminUserPayload,
    ) -> Result<AdminUser, ApiError> {
        self.admin_users.update(id, payload).await
    }
}

#[async_trait]
impl ImageStore for Cdn {
    async fn upload(&self, bytes: Vec<u8>, extension: &str) -> Result<String, ApiError> {
        Cdn::upload(self, bytes, extension).await
    }
}
