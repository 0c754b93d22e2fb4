//! Read-through in-memory cache for static reference data.

use std::{any::Any, fmt, future::Future, sync::Arc};

use parking_lot::RwLock;
use tracing::{debug, trace};

/// Static data collections kept by [`StaticDataCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Seasons,
    Queues,
    Maps,
    GameModes,
    GameTypes,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Seasons,
        Category::Queues,
        Category::Maps,
        Category::GameModes,
        Category::GameTypes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Seasons => "seasons",
            Category::Queues => "queues",
            Category::Maps => "maps",
            Category::GameModes => "gameModes",
            Category::GameTypes => "gameTypes",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Entry = Arc<dyn Any + Send + Sync>;
type Slot = tokio::sync::RwLock<Option<Entry>>;

/// One full set of slots. [`StaticDataCache::clear`] retires a generation wholesale.
struct Generation {
    slots: [Slot; Category::ALL.len()],
}

impl Generation {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            slots: std::array::from_fn(|_| Slot::new(None)),
        })
    }
}

/// Per-category read-through cache.
///
/// Every category has its own lock, so a fetch of one category never blocks readers of
/// another. Concurrent misses on the same category are not collapsed: they may both fetch,
/// and the last one to finish is what stays cached. A reader queued behind the writer's lock
/// sees the fresh value instead.
///
/// Hits hand out a clone of the cached value, so callers are free to mutate what they get.
pub struct StaticDataCache {
    current: RwLock<Arc<Generation>>,
}

impl StaticDataCache {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Generation::new()),
        }
    }

    /// Return the cached value for `category`, or run `fetch` and cache its result.
    ///
    /// A failed fetch leaves the slot empty.
    pub async fn get_or_fetch<T, E, F, Fut>(&self, category: Category, fetch: F) -> Result<T, E>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let generation = self.current.read().clone();
        let slot = &generation.slots[category.index()];

        {
            let cached = slot.read().await;
            if let Some(value) = cached.as_ref().and_then(|entry| entry.downcast_ref::<T>()) {
                trace!("static data cache hit for {}", category);
                return Ok(value.clone());
            }
        }

        let mut cached = slot.write().await;
        debug!("static data cache miss for {}, fetching", category);
        let value = fetch().await?;
        *cached = Some(Arc::new(value.clone()));

        Ok(value)
    }

    /// Drop every cached category at once.
    ///
    /// Takes no slot lock: a fetch already in flight finishes into the retired generation and
    /// the next read fetches again.
    pub fn clear(&self) {
        debug!("clearing static data caches");
        *self.current.write() = Generation::new();
    }

    /// Whether `category` currently holds a value. Returns `false` while the slot is being written.
    pub fn is_cached(&self, category: Category) -> bool {
        let generation = self.current.read().clone();
        generation.slots[category.index()]
            .try_read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }
}

impl Default for StaticDataCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StaticDataCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cached: Vec<_> = Category::ALL
            .into_iter()
            .filter(|c| self.is_cached(*c))
            .collect();
        f.debug_struct("StaticDataCache")
            .field("cached", &cached)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::sync::oneshot;

    use super::*;

    fn seasons() -> Vec<String> {
        vec!["PRESEASON 3".to_string(), "SEASON 3".to_string()]
    }

    async fn counted_get(
        cache: &StaticDataCache,
        fetches: &AtomicUsize,
    ) -> Result<Vec<String>, String> {
        cache
            .get_or_fetch(Category::Seasons, || async {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok(seasons())
            })
            .await
    }

    #[tokio::test]
    async fn first_get_fetches_then_hits() {
        let cache = StaticDataCache::new();
        let fetches = AtomicUsize::new(0);

        let first = counted_get(&cache, &fetches).await.unwrap();
        assert_eq!(fetches.load(Ordering::SeqCst), 1);

        let second = counted_get(&cache, &fetches).await.unwrap();
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert_eq!(first, second);
        assert!(cache.is_cached(Category::Seasons));
        assert!(!cache.is_cached(Category::Maps));
    }

    #[tokio::test]
    async fn concurrent_misses_fetch_at_most_once_each() {
        let cache = StaticDataCache::new();
        let fetches = AtomicUsize::new(0);

        let (a, b) = tokio::join!(
            counted_get(&cache, &fetches),
            counted_get(&cache, &fetches)
        );

        assert_eq!(a.unwrap(), b.unwrap());
        assert!((1..=2).contains(&fetches.load(Ordering::SeqCst)));
        assert!(cache.is_cached(Category::Seasons));
    }

    #[tokio::test]
    async fn hits_return_independent_copies() {
        let cache = StaticDataCache::new();
        let fetches = AtomicUsize::new(0);
        counted_get(&cache, &fetches).await.unwrap();

        let mut second = counted_get(&cache, &fetches).await.unwrap();
        second.clear();
        second.push("tampered".to_string());

        let third = counted_get(&cache, &fetches).await.unwrap();
        assert_eq!(third, seasons());
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn clear_triggers_exactly_one_new_fetch() {
        let cache = StaticDataCache::new();
        let fetches = AtomicUsize::new(0);
        counted_get(&cache, &fetches).await.unwrap();

        cache.clear();
        assert!(!cache.is_cached(Category::Seasons));

        counted_get(&cache, &fetches).await.unwrap();
        counted_get(&cache, &fetches).await.unwrap();
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn categories_are_independent() {
        let cache = StaticDataCache::new();

        let maps: Result<Vec<u32>, String> = cache
            .get_or_fetch(Category::Maps, || async { Ok(vec![11, 12]) })
            .await;
        assert_eq!(maps.unwrap(), vec![11, 12]);

        let fetches = AtomicUsize::new(0);
        counted_get(&cache, &fetches).await.unwrap();
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_fetch_is_not_cached() {
        let cache = StaticDataCache::new();

        let res: Result<Vec<String>, String> = cache
            .get_or_fetch(Category::Queues, || async { Err("boom".to_string()) })
            .await;
        assert_eq!(res.unwrap_err(), "boom");
        assert!(!cache.is_cached(Category::Queues));

        let res: Result<Vec<String>, String> = cache
            .get_or_fetch(Category::Queues, || async { Ok(vec!["ARAM".to_string()]) })
            .await;
        assert_eq!(res.unwrap(), vec!["ARAM".to_string()]);
    }

    #[tokio::test]
    async fn fetch_in_flight_during_clear_lands_in_retired_generation() {
        let cache = Arc::new(StaticDataCache::new());
        let (release, wait) = oneshot::channel::<()>();
        let (started_tx, started) = oneshot::channel::<()>();

        let in_flight = {
            let cache = cache.clone();
            tokio::spawn(async move {
                cache
                    .get_or_fetch(Category::GameModes, || async move {
                        let _ = started_tx.send(());
                        let _ = wait.await;
                        Ok::<_, String>(vec!["CLASSIC".to_string()])
                    })
                    .await
            })
        };

        started.await.unwrap();
        cache.clear();
        release.send(()).unwrap();

        let value = in_flight.await.unwrap().unwrap();
        assert_eq!(value, vec!["CLASSIC".to_string()]);
        assert!(!cache.is_cached(Category::GameModes));
    }
}
