//! Read-mostly screen models: the dashboard stats panel and the province
//! reference list. Both sit behind [`cache::Cache`] so repeated screen
//! visits within the staleness window cost no round trip.

use api::{error::ApiError, Api};
use async_trait::async_trait;
use cache::Cache;
use chrono::Duration;
use log::warn;
use model::{dashboard::DashboardStats, province::Province};
use std::sync::Arc;

const STATS_KEY: &str = "dashboard.stats";
const PROVINCES_KEY: &str = "provinces";

#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn stats(&self) -> Result<DashboardStats, ApiError>;
}

#[async_trait]
pub trait ProvinceSource: Send + Sync {
    async fn provinces(&self) -> Result<Vec<Province>, ApiError>;
}

#[async_trait]
impl StatsSource for Api {
    async fn stats(&self) -> Result<DashboardStats, ApiError> {
        self.dashboard.stats().await
    }
}

#[async_trait]
impl ProvinceSource for Api {
    async fn provinces(&self) -> Result<Vec<Province>, ApiError> {
        self.provinces.list().await
    }
}

pub struct DashboardScreen {
    source: Arc<dyn StatsSource>,
    cache: Cache<DashboardStats>,
}

impl DashboardScreen {
    pub fn new(source: Arc<dyn StatsSource>) -> Self {
        DashboardScreen {
            source,
            cache: Cache::new(Duration::seconds(60), Duration::minutes(15)),
        }
    }

    /// Serves from cache while fresh. A stale entry triggers a refetch, but
    /// a refetch failure falls back to the stale copy instead of blanking
    /// the screen.
    pub async fn stats(&self) -> Result<DashboardStats, ApiError> {
        let cached = self.cache.get(STATS_KEY);
        if let Some(hit) = &cached {
            if !hit.is_stale {
                return Ok(hit.value.clone());
            }
        }
        match self.source.stats().await {
            Ok(stats) => {
                self.cache.set(STATS_KEY, stats.clone());
                Ok(stats)
            }
            Err(err) => match cached {
                Some(hit) => {
                    warn!("dashboard refresh failed, serving stale stats: {err}");
                    Ok(hit.value)
                }
                None => Err(err),
            },
        }
    }

    /// Forces the next `stats` call to refetch. Used after mutations that
    /// change the counts, e.g. creating a gym.
    pub fn refresh(&self) {
        self.cache.invalidate(STATS_KEY);
    }
}

/// Province names change roughly never, so the list is cached for the whole
/// session and only refetched after an hour.
pub struct ProvinceDirectory {
    source: Arc<dyn ProvinceSource>,
    cache: Cache<Vec<Province>>,
}

impl ProvinceDirectory {
    pub fn new(source: Arc<dyn ProvinceSource>) -> Self {
        ProvinceDirectory {
            source,
            cache: Cache::new(Duration::minutes(60), Duration::minutes(60)),
        }
    }

    pub async fn list(&self) -> Result<Vec<Province>, ApiError> {
        if let Some(hit) = self.cache.get(PROVINCES_KEY) {
            return Ok(hit.value);
        }
        let provinces = self.source.provinces().await?;
        self.cache.set(PROVINCES_KEY, provinces.clone());
        Ok(provinces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{bilingual::Bilingual, dashboard::DashboardSummary, ids::ProvinceId};
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Source {
        calls: AtomicUsize,
        fail: Mutex<bool>,
        total_gyms: Mutex<u64>,
    }

    #[async_trait]
    impl StatsSource for Source {
        async fn stats(&self) -> Result<DashboardStats, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if *self.fail.lock() {
                return Err(ApiError::Backend("boom".to_owned()));
            }
            Ok(DashboardStats {
                summary: DashboardSummary {
                    total_gyms: *self.total_gyms.lock(),
                    ..DashboardSummary::default()
                },
                ..DashboardStats::default()
            })
        }
    }

    #[async_trait]
    impl ProvinceSource for Source {
        async fn provinces(&self) -> Result<Vec<Province>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Province {
                id: ProvinceId::new("p-10"),
                name: Bilingual::new("กรุงเทพมหานคร", "Bangkok"),
                region: "central".to_owned(),
            }])
        }
    }

    #[tokio::test]
    async fn test_stats_served_from_cache() {
        let source = Arc::new(Source::default());
        let screen = DashboardScreen::new(source.clone());
        screen.stats().await.unwrap();
        screen.stats().await.unwrap();
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_refresh_forces_refetch() {
        let source = Arc::new(Source::default());
        let screen = DashboardScreen::new(source.clone());
        screen.stats().await.unwrap();
        *source.total_gyms.lock() = 5;
        screen.refresh();
        let stats = screen.stats().await.unwrap();
        assert_eq!(stats.summary.total_gyms, 5);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_first_load_failure_propagates() {
        let source = Arc::new(Source::default());
        *source.fail.lock() = true;
        let screen = DashboardScreen::new(source.clone());
        assert!(screen.stats().await.is_err());
    }

    #[tokio::test]
    async fn test_provinces_fetched_once() {
        let source = Arc::new(Source::default());
        let directory = ProvinceDirectory::new(source.clone());
        let first = directory.list().await.unwrap();
        let second = directory.list().await.unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(second[0].name.en, "Bangkok");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }
}
