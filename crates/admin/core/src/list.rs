use crate::debounce::{Debouncer, SEARCH_DELAY};
use model::page::{ListQuery, Paged, SortOrder};
use std::time::Instant;

/// What to do with a fetched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// A newer fetch superseded this response; drop it.
    Stale,
    Ok,
    /// The current page fell past the end of the data (e.g. after deletes);
    /// the page number was clamped and exactly one corrective refetch is due.
    Refetch,
}

/// Pagination/filter state behind every list screen. Each fetch carries a
/// generation stamp; a response is applied only while its stamp is still the
/// newest, so a slow response cannot overwrite a fresher one.
#[derive(Debug)]
pub struct ListController {
    query: ListQuery,
    total: u64,
    generation: u64,
    search: Debouncer,
}

impl Default for ListController {
    fn default() -> Self {
        ListController::new()
    }
}

impl ListController {
    pub fn new() -> Self {
        ListController {
            query: ListQuery::default(),
            total: 0,
            generation: 0,
            search: Debouncer::new(SEARCH_DELAY),
        }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u32 {
        if self.query.page_size == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(self.query.page_size as u64) as u32;
        pages.max(1)
    }

    pub fn set_page(&mut self, page: u32) {
        self.query.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.query.page_size = page_size.max(1);
        self.query.page = 1;
    }

    pub fn set_sort(&mut self, field: impl Into<String>, order: SortOrder) {
        self.query.sort_field = Some(field.into());
        self.query.sort_by = order;
    }

    pub fn set_include_inactive(&mut self, include: bool) {
        self.query.include_inactive = include;
        self.query.page = 1;
    }

    /// Search input keystroke: resets to page 1 and (re)arms the debounce
    /// window instead of fetching immediately.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_at(term, Instant::now());
    }

    pub fn search_at(&mut self, term: impl Into<String>, now: Instant) {
        self.query.search_term = term.into();
        self.query.page = 1;
        self.search.poke_at(now);
    }

    /// True once per idle search window; the caller then issues a fetch.
    pub fn search_due(&mut self, now: Instant) -> bool {
        self.search.fire_at(now)
    }

    /// Stamps a new fetch and invalidates every response still in flight.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn apply_page<T>(&mut self, generation: u64, page: &Paged<T>) -> Applied {
        if generation != self.generation {
            return Applied::Stale;
        }
        self.total = page.total;
        let total_pages = page.total_pages();
        if self.query.page > total_pages {
            self.query.page = total_pages;
            return Applied::Refetch;
        }
        Applied::Ok
    }

    pub fn teardown(&mut self) {
        self.search.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn page_of(total: u64, page: u32) -> Paged<u8> {
        Paged {
            items: vec![],
            page,
            page_size: 10,
            total,
        }
    }

    #[test]
    fn test_stale_response_dropped() {
        let mut list = ListController::new();
        let old = list.begin_fetch();
        let new = list.begin_fetch();
        assert_eq!(list.apply_page(old, &page_of(100, 1)), Applied::Stale);
        assert_eq!(list.apply_page(new, &page_of(50, 1)), Applied::Ok);
        assert_eq!(list.total(), 50);
    }

    #[test]
    fn test_page_clamp_triggers_one_refetch() {
        let mut list = ListController::new();
        list.set_page(5);
        // only 31 rows remain: page 5 no longer exists
        let gen = list.begin_fetch();
        assert_eq!(list.apply_page(gen, &page_of(31, 5)), Applied::Refetch);
        assert_eq!(list.query().page, 4);

        // the corrective refetch settles without another clamp
        let gen = list.begin_fetch();
        assert_eq!(list.apply_page(gen, &page_of(31, 4)), Applied::Ok);
    }

    #[test]
    fn test_clamp_to_page_one_when_empty() {
        let mut list = ListController::new();
        list.set_page(3);
        let gen = list.begin_fetch();
        assert_eq!(list.apply_page(gen, &page_of(0, 3)), Applied::Refetch);
        assert_eq!(list.query().page, 1);
    }

    #[test]
    fn test_search_debounce_and_page_reset() {
        let mut list = ListController::new();
        list.set_page(7);
        let start = Instant::now();
        list.search_at("muay", start);
        assert_eq!(list.query().page, 1);
        assert_eq!(list.query().search_term, "muay");

        assert!(!list.search_due(start + Duration::from_millis(200)));
        list.search_at("muay thai", start + Duration::from_millis(200));
        assert!(!list.search_due(start + Duration::from_millis(400)));
        assert!(list.search_due(start + Duration::from_millis(500)));
        // fires once
        assert!(!list.search_due(start + Duration::from_millis(600)));
    }

    #[test]
    fn test_filters_reset_page() {
        let mut list = ListController::new();
        list.set_page(4);
        list.set_include_inactive(true);
        assert_eq!(list.query().page, 1);
        assert!(list.query().include_inactive);
    }
}
