use std::cell::Cell;
use std::sync::Arc;

use scorecard_core::models::dataset::ScorecardDataset;
use scorecard_core::models::entity::{Entity, EntityKind};
use scorecard_report::cache::{DatasetCache, SourceKey};

fn load(calls: &Cell<u32>, name: &str) -> Result<ScorecardDataset, String> {
    calls.set(calls.get() + 1);
    Ok(ScorecardDataset::new(
        vec![Entity::new("p1", name, EntityKind::Provider)],
        vec![],
    ))
}

#[test]
fn hit_returns_the_same_value_without_reloading() {
    let cache = DatasetCache::new();
    let calls = Cell::new(0);
    let key = SourceKey::new("provider_scorecard_main", "2025-01-05");

    let first = cache.get_or_load(&key, || load(&calls, "Dr. Chen")).unwrap();
    let second = cache.get_or_load(&key, || load(&calls, "Dr. Other")).unwrap();

    assert_eq!(calls.get(), 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.entities[0].display_name, "Dr. Chen");
    assert_eq!(cache.len(), 1);
}

#[test]
fn new_version_replaces_entry() {
    let cache = DatasetCache::new();
    let calls = Cell::new(0);

    let old = SourceKey::new("provider_trends", "v1");
    let new = SourceKey::new("provider_trends", "v2");
    cache.get_or_load(&old, || load(&calls, "old")).unwrap();
    let fresh = cache.get_or_load(&new, || load(&calls, "new")).unwrap();

    assert_eq!(calls.get(), 2);
    assert_eq!(fresh.entities[0].display_name, "new");
    assert_eq!(cache.len(), 1);
    assert!(cache.get(&old).is_none());
    assert!(cache.get(&new).is_some());
}

#[test]
fn invalidate_forces_reload() {
    let cache = DatasetCache::new();
    let calls = Cell::new(0);
    let key = SourceKey::new("scorecard_metrics", "v1");

    cache.get_or_load(&key, || load(&calls, "a")).unwrap();
    assert!(cache.invalidate("scorecard_metrics"));
    assert!(!cache.invalidate("scorecard_metrics"));
    assert!(cache.is_empty());

    cache.get_or_load(&key, || load(&calls, "b")).unwrap();
    assert_eq!(calls.get(), 2);

    cache.clear();
    assert!(cache.get(&key).is_none());
}

#[test]
fn slow_load_does_not_overwrite_newer_entry() {
    let cache = DatasetCache::new();
    let old = SourceKey::new("provider_trends", "v1");
    let new = SourceKey::new("provider_trends", "v2");

    let stale = cache
        .get_or_load(&old, || {
            cache.get_or_load(&new, || Ok::<_, ()>("refreshed")).unwrap();
            Ok::<_, ()>("stale")
        })
        .unwrap();

    assert_eq!(*stale, "stale");
    assert!(cache.get(&old).is_none());
    assert_eq!(*cache.get(&new).unwrap(), "refreshed");
    assert_eq!(cache.len(), 1);
}

#[test]
fn concurrent_load_of_same_version_shares_one_value() {
    let cache = DatasetCache::new();
    let key = SourceKey::new("scorecard_metrics", "v1");

    let mut inner = None;
    let outer = cache
        .get_or_load(&key, || {
            inner = Some(cache.get_or_load(&key, || Ok::<_, ()>(1)).unwrap());
            Ok::<_, ()>(2)
        })
        .unwrap();

    assert_eq!(*outer, 1);
    assert!(Arc::ptr_eq(&outer, &inner.unwrap()));
}

#[test]
fn loader_errors_are_not_cached() {
    let cache: DatasetCache<ScorecardDataset> = DatasetCache::new();
    let key = SourceKey::new("hedis_care_gaps", "v1");

    let err = cache
        .get_or_load(&key, || Err::<ScorecardDataset, _>("extract missing".to_string()))
        .unwrap_err();
    assert_eq!(err, "extract missing");
    assert!(cache.is_empty());
}

#[test]
fn cache_is_shareable_across_threads() {
    let cache = Arc::new(DatasetCache::<u32>::new());
    let key = SourceKey::new("monthly_trends", "v1");
    cache.get_or_load(&key, || Ok::<_, ()>(7)).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let key = key.clone();
            std::thread::spawn(move || *cache.get(&key).unwrap())
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), 7);
    }
}
