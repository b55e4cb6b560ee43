//! In-process snapshot cache for composed public pages.
//!
//! Keyed by slug. Writes to a page evict its snapshot (and the home
//! snapshot when the home page is affected); the next public read
//! recomposes and re-caches. Eviction is fire-and-forget: a miss is logged
//! at debug level and never surfaces as an error.

use contracts::shared::navigation::HOME_SLUG;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;

struct CachedSnapshot {
    body: serde_json::Value,
    stored_at: chrono::DateTime<chrono::Utc>,
}

static SNAPSHOTS: Lazy<RwLock<HashMap<String, CachedSnapshot>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Cached snapshot for a slug, if one is warm
pub fn get(slug: &str) -> Option<serde_json::Value> {
    let store = SNAPSHOTS.read().ok()?;
    store.get(slug).map(|s| s.body.clone())
}

/// Store a freshly composed snapshot
pub fn put(slug: &str, body: serde_json::Value) {
    if let Ok(mut store) = SNAPSHOTS.write() {
        store.insert(
            slug.to_string(),
            CachedSnapshot {
                body,
                stored_at: chrono::Utc::now(),
            },
        );
    }
}

/// Evict a single slug. Silent when no entry exists.
pub fn invalidate(slug: &str) {
    match SNAPSHOTS.write() {
        Ok(mut store) => {
            if let Some(evicted) = store.remove(slug) {
                tracing::debug!(
                    slug,
                    age_secs = (chrono::Utc::now() - evicted.stored_at).num_seconds(),
                    "evicted page snapshot"
                );
            } else {
                tracing::debug!(slug, "no snapshot to evict");
            }
        }
        Err(poisoned) => {
            // a poisoned lock must not fail the surrounding mutation
            tracing::warn!(slug, "snapshot store lock poisoned, clearing");
            poisoned.into_inner().clear();
        }
    }
}

/// Evict all snapshots affected by a page mutation: the page's slug, its
/// new slug when renamed, and the home snapshot when the home page itself
/// was touched.
pub fn invalidate_for_mutation(old_slug: &str, new_slug: Option<&str>) {
    invalidate(old_slug);
    if let Some(new_slug) = new_slug {
        if new_slug != old_slug {
            invalidate(new_slug);
        }
    }
    let touches_home = old_slug == HOME_SLUG || new_slug == Some(HOME_SLUG);
    if touches_home && old_slug != HOME_SLUG {
        invalidate(HOME_SLUG);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // the store is process-global, so tests use distinct slugs

    #[test]
    fn test_put_get_invalidate() {
        put("cache-test-a", json!({"slug": "cache-test-a"}));
        assert!(get("cache-test-a").is_some());

        invalidate("cache-test-a");
        assert!(get("cache-test-a").is_none());
    }

    #[test]
    fn test_invalidate_missing_is_silent() {
        invalidate("cache-test-never-stored");
    }

    #[test]
    fn test_rename_evicts_both_slugs() {
        put("cache-test-old", json!({"v": 1}));
        put("cache-test-new", json!({"v": 2}));

        invalidate_for_mutation("cache-test-old", Some("cache-test-new"));
        assert!(get("cache-test-old").is_none());
        assert!(get("cache-test-new").is_none());
    }

    #[test]
    fn test_home_mutation_evicts_home_snapshot() {
        put(HOME_SLUG, json!({"home": true}));
        invalidate_for_mutation(HOME_SLUG, None);
        assert!(get(HOME_SLUG).is_none());
    }
}
