use admin_core::list::{Applied, ListController};
use api::{backend::UserDirectory, error::ApiError};
use model::admin_user::AdminUser;
use std::{sync::Arc, time::Instant};

/// The admin accounts table. Same controller discipline as the gym list:
/// stamped fetches, clamped paging, debounced search.
pub struct UserList {
    controller: ListController,
    directory: Arc<dyn UserDirectory>,
    items: Vec<AdminUser>,
}

impl UserList {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        UserList {
            controller: ListController::new(),
            directory,
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[AdminUser] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.controller.query().page
    }

    pub fn total(&self) -> u64 {
        self.controller.total()
    }

    pub async fn go_to_page(&mut self, page: u32) -> Result<(), ApiError> {
        self.controller.set_page(page);
        self.refresh().await
    }

    pub async fn set_include_inactive(&mut self, include: bool) -> Result<(), ApiError> {
        self.controller.set_include_inactive(include);
        self.refresh().await
    }

    pub fn search_at(&mut self, term: impl Into<String>, now: Instant) {
        self.controller.search_at(term, now);
    }

    pub async fn poll_search(&mut self, now: Instant) -> Result<bool, ApiError> {
        if !self.controller.search_due(now) {
            return Ok(false);
        }
        self.refresh().await?;
        Ok(true)
    }

    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        loop {
            let generation = self.controller.begin_fetch();
            let page = self.directory.list_users(self.controller.query()).await?;
            match self.controller.apply_page(generation, &page) {
                Applied::Stale => return Ok(()),
                Applied::Ok => {
                    self.items = page.items;
                    return Ok(());
                }
                Applied::Refetch => continue,
            }
        }
    }

    pub fn teardown(&mut self) {
        self.controller.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use model::{
        admin_user::Role,
        ids::AdminUserId,
        page::{ListQuery, Paged},
    };
    use parking_lot::Mutex;

    struct Directory {
        total: u64,
        queries: Mutex<Vec<ListQuery>>,
    }

    fn account(id: u64) -> AdminUser {
        AdminUser {
            id: AdminUserId::new(format!("u-{id}")),
            email: format!("staff{id}@example.com"),
            display_name: format!("Staff {id}"),
            role: Role::Editor,
            is_active: true,
            created_at: None,
        }
    }

    #[async_trait]
    impl UserDirectory for Directory {
        async fn list_users(&self, query: &ListQuery) -> Result<Paged<AdminUser>, ApiError> {
            self.queries.lock().push(query.clone());
            let start = (query.page as u64 - 1) * query.page_size as u64;
            let end = (start + query.page_size as u64).min(self.total);
            Ok(Paged {
                items: (start..end).map(account).collect(),
                page: query.page,
                page_size: query.page_size,
                total: self.total,
            })
        }
    }

    #[tokio::test]
    async fn test_refresh_and_paging() {
        let directory = Arc::new(Directory {
            total: 12,
            queries: Mutex::new(Vec::new()),
        });
        let mut list = UserList::new(directory.clone());
        list.refresh().await.unwrap();
        assert_eq!(list.items().len(), 10);

        list.go_to_page(2).await.unwrap();
        assert_eq!(list.items().len(), 2);
        assert_eq!(list.items()[0].email, "staff10@example.com");
    }

    #[tokio::test]
    async fn test_deleted_rows_clamp_current_page() {
        let directory = Arc::new(Directory {
            total: 5,
            queries: Mutex::new(Vec::new()),
        });
        let mut list = UserList::new(directory.clone());
        // screen was left on page 3 before most rows were deactivated
        list.go_to_page(3).await.unwrap();
        assert_eq!(list.page(), 1);
        assert_eq!(list.items().len(), 5);
        assert_eq!(directory.queries.lock().len(), 2);
    }
}
