use admin_core::list::{Applied, ListController};
use api::{backend::GymDirectory, error::ApiError};
use model::{gym::Gym, page::SortOrder};
use std::{sync::Arc, time::Instant};

/// The gym table screen: pagination/filter state plus the rows of the
/// current page. Every mutation goes through the controller and ends in
/// `refresh`, so stamped fetches and the clamp policy cover every path.
pub struct GymList {
    controller: ListController,
    directory: Arc<dyn GymDirectory>,
    items: Vec<Gym>,
}

impl GymList {
    pub fn new(directory: Arc<dyn GymDirectory>) -> Self {
        GymList {
            controller: ListController::new(),
            directory,
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[Gym] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.controller.query().page
    }

    pub fn total(&self) -> u64 {
        self.controller.total()
    }

    pub fn total_pages(&self) -> u32 {
        self.controller.total_pages()
    }

    pub async fn go_to_page(&mut self, page: u32) -> Result<(), ApiError> {
        self.controller.set_page(page);
        self.refresh().await
    }

    pub async fn set_include_inactive(&mut self, include: bool) -> Result<(), ApiError> {
        self.controller.set_include_inactive(include);
        self.refresh().await
    }

    pub async fn set_sort(
        &mut self,
        field: impl Into<String>,
        order: SortOrder,
    ) -> Result<(), ApiError> {
        self.controller.set_sort(field, order);
        self.refresh().await
    }

    /// Search keystroke: arms the debounce window, no fetch yet.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.controller.set_search(term);
    }

    pub fn search_at(&mut self, term: impl Into<String>, now: Instant) {
        self.controller.search_at(term, now);
    }

    /// Fetches once per elapsed search window. Returns whether a fetch ran.
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
            let page = self.directory.list_gyms(self.controller.query()).await?;
            match self.controller.apply_page(generation, &page) {
                Applied::Stale => return Ok(()),
                Applied::Ok => {
                    self.items = page.items;
                    return Ok(());
                }
                // page fell past the end; the controller clamped, go again
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
    use model::{bilingual::Bilingual, ids::GymId, page::ListQuery, page::Paged};
    use parking_lot::Mutex;
    use std::time::Duration;

    struct Directory {
        total: Mutex<u64>,
        queries: Mutex<Vec<ListQuery>>,
    }

    impl Directory {
        fn with_total(total: u64) -> Arc<Self> {
            Arc::new(Directory {
                total: Mutex::new(total),
                queries: Mutex::new(Vec::new()),
            })
        }
    }

    fn gym(id: u64) -> Gym {
        Gym {
            id: GymId::new(format!("g-{id}")),
            name: Bilingual::th_only(format!("ยิม {id}")),
            description: Bilingual::default(),
            phone: String::new(),
            email: String::new(),
            line_id: String::new(),
            facebook_url: String::new(),
            website_url: String::new(),
            google_maps_url: String::new(),
            province_id: None,
            images: vec![],
            tags: vec![],
            trainer_ids: vec![],
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[async_trait]
    impl GymDirectory for Directory {
        async fn list_gyms(&self, query: &ListQuery) -> Result<Paged<Gym>, ApiError> {
            self.queries.lock().push(query.clone());
            let total = *self.total.lock();
            let start = (query.page as u64 - 1) * query.page_size as u64;
            let end = (start + query.page_size as u64).min(total);
            Ok(Paged {
                items: (start..end).map(gym).collect(),
                page: query.page,
                page_size: query.page_size,
                total,
            })
        }
    }

    #[tokio::test]
    async fn test_refresh_fills_current_page() {
        let directory = Directory::with_total(25);
        let mut list = GymList::new(directory.clone());
        list.refresh().await.unwrap();
        assert_eq!(list.items().len(), 10);
        assert_eq!(list.total(), 25);
        assert_eq!(list.total_pages(), 3);
    }

    #[tokio::test]
    async fn test_page_past_end_clamps_with_one_refetch() {
        let directory = Directory::with_total(31);
        let mut list = GymList::new(directory.clone());
        list.go_to_page(5).await.unwrap();

        assert_eq!(list.page(), 4);
        assert_eq!(list.items().len(), 1);
        let queries = directory.queries.lock();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].page, 5);
        assert_eq!(queries[1].page, 4);
    }

    #[tokio::test]
    async fn test_search_fetches_once_after_idle_window() {
        let directory = Directory::with_total(25);
        let mut list = GymList::new(directory.clone());
        let start = Instant::now();

        list.search_at("muay", start);
        list.search_at("muay thai", start + Duration::from_millis(200));
        assert!(!list
            .poll_search(start + Duration::from_millis(400))
            .await
            .unwrap());
        assert!(list
            .poll_search(start + Duration::from_millis(500))
            .await
            .unwrap());
        assert!(!list
            .poll_search(start + Duration::from_millis(600))
            .await
            .unwrap());

        let queries = directory.queries.lock();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].search_term, "muay thai");
        assert_eq!(queries[0].page, 1);
    }

    #[tokio::test]
    async fn test_filter_change_resets_to_first_page() {
        let directory = Directory::with_total(31);
        let mut list = GymList::new(directory.clone());
        list.go_to_page(3).await.unwrap();
        list.set_include_inactive(true).await.unwrap();
        assert_eq!(list.page(), 1);
        assert!(directory.queries.lock().last().unwrap().include_inactive);
    }
}
