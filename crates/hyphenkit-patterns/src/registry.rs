//! Process-wide cache of loaded pattern tables.
//!
//! Reads are lock-free snapshots of an [`ArcSwap`]-held map; inserts copy
//! the map and publish it with `rcu`. Two threads missing the same key at
//! the same time may both load the table. The first published copy wins and
//! the other is dropped, so the result is the same either way.

use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::Result;
use crate::key::LanguageKey;
use crate::source::PatternSource;
use crate::table::PatternTable;

type TableMap = FxHashMap<LanguageKey, Arc<PatternTable>>;

/// Shared cache of [`PatternTable`]s keyed by [`LanguageKey`].
#[derive(Debug)]
pub struct PatternRegistry {
    tables: ArcSwap<TableMap>,
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: ArcSwap::from_pointee(TableMap::default()),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static PatternRegistry {
        static GLOBAL: OnceLock<PatternRegistry> = OnceLock::new();
        GLOBAL.get_or_init(PatternRegistry::new)
    }

    /// Cached table for exactly `key`.
    #[must_use]
    pub fn get(&self, key: &LanguageKey) -> Option<Arc<PatternTable>> {
        self.tables.load().get(key).cloned()
    }

    /// Caches `table` under its own key and returns the cached copy.
    pub fn insert(&self, table: PatternTable) -> Arc<PatternTable> {
        let key = table.key().clone();
        self.insert_as(key, Arc::new(table))
    }

    /// Caches `table` under `key` unless a table is already there, and
    /// returns whichever table ends up cached.
    fn insert_as(&self, key: LanguageKey, table: Arc<PatternTable>) -> Arc<PatternTable> {
        self.tables.rcu(|current| {
            let mut next = TableMap::clone(current);
            next.entry(key.clone()).or_insert_with(|| Arc::clone(&table));
            next
        });
        self.get(&key).unwrap_or(table)
    }

    /// Looks up `key`, loading it from `source` on a miss.
    ///
    /// A regional key that neither the cache nor the source knows falls back
    /// to the language default, which is then cached under both keys.
    /// Returns `Ok(None)` when no table exists at all. Load failures are
    /// returned and nothing is cached.
    pub fn get_or_load(
        &self,
        key: &LanguageKey,
        source: &dyn PatternSource,
    ) -> Result<Option<Arc<PatternTable>>> {
        if let Some(table) = self.get(key) {
            return Ok(Some(table));
        }
        if let Some(table) = source.load(key)? {
            debug!(language = %key, "pattern table cached");
            return Ok(Some(self.insert_as(key.clone(), Arc::new(table))));
        }
        if key.is_language_default() {
            return Ok(None);
        }

        let fallback = key.language_default();
        let table = match self.get(&fallback) {
            Some(table) => table,
            None => match source.load(&fallback)? {
                Some(table) => self.insert_as(fallback.clone(), Arc::new(table)),
                None => return Ok(None),
            },
        };
        debug!(language = %key, fallback = %fallback, "using language default table");
        Ok(Some(self.insert_as(key.clone(), table)))
    }

    /// Keys currently cached, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<LanguageKey> {
        let mut keys: Vec<_> = self.tables.load().keys().cloned().collect();
        keys.sort();
        keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.load().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached table. Tables already handed out stay alive.
    pub fn clear(&self) {
        self.tables.store(Arc::new(TableMap::default()));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::PatternError;
    use crate::source::BuiltinSource;
    use tracing_test::traced_test;

    struct CountingSource {
        loads: AtomicUsize,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                loads: AtomicUsize::new(0),
            }
        }

        fn loads(&self) -> usize {
            self.loads.load(Ordering::SeqCst)
        }
    }

    impl PatternSource for CountingSource {
        fn load(&self, key: &LanguageKey) -> Result<Option<PatternTable>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            BuiltinSource.load(key)
        }
    }

    fn en() -> LanguageKey {
        LanguageKey::language_only("en")
    }

    #[test]
    fn loads_once_then_hits_cache() {
        let registry = PatternRegistry::new();
        let source = CountingSource::new();
        let first = registry.get_or_load(&en(), &source).unwrap().unwrap();
        let second = registry.get_or_load(&en(), &source).unwrap().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.loads(), 1);
    }

    #[test]
    fn regional_key_falls_back_to_language() {
        let registry = PatternRegistry::new();
        let source = CountingSource::new();
        let us = LanguageKey::new("en", Some("US"));
        let table = registry.get_or_load(&us, &source).unwrap().unwrap();
        assert_eq!(table.key(), &en());
        assert_eq!(registry.languages(), vec![en(), us.clone()]);

        // Both keys now resolve from the cache.
        let again = registry.get_or_load(&us, &source).unwrap().unwrap();
        assert!(Arc::ptr_eq(&table, &again));
        assert_eq!(source.loads(), 2);
    }

    #[test]
    fn unknown_language_is_none_and_not_cached() {
        let registry = PatternRegistry::new();
        let key = LanguageKey::new("zz", Some("ZZ"));
        assert!(registry.get_or_load(&key, &BuiltinSource).unwrap().is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn failed_load_is_not_cached() {
        let registry = PatternRegistry::new();
        let broken = |_: &LanguageKey| -> Result<Option<PatternTable>> {
            Err(PatternError::EmptyPattern)
        };
        assert_eq!(
            registry.get_or_load(&en(), &broken).unwrap_err(),
            PatternError::EmptyPattern
        );
        assert!(registry.get(&en()).is_none());
    }

    #[test]
    fn first_insert_wins() {
        let registry = PatternRegistry::new();
        let a = registry.insert(PatternTable::from_tex(en(), &["a1b"], &[]).unwrap());
        let b = registry.insert(PatternTable::from_tex(en(), &["c1d"], &[]).unwrap());
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn clear_empties_cache() {
        let registry = PatternRegistry::new();
        let held = registry.get_or_load(&en(), &BuiltinSource).unwrap().unwrap();
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(held.pattern_count(), 9);
    }

    #[test]
    fn concurrent_loads_agree() {
        let registry = Arc::new(PatternRegistry::new());
        let source = Arc::new(CountingSource::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let source = Arc::clone(&source);
                std::thread::spawn(move || {
                    registry
                        .get_or_load(&en(), source.as_ref())
                        .unwrap()
                        .unwrap()
                })
            })
            .collect();
        let tables: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let cached = registry.get(&en()).unwrap();
        assert!(tables.iter().all(|t| Arc::ptr_eq(t, &cached)));
        assert!(source.loads() >= 1);
    }

    #[test]
    fn global_is_shared() {
        assert!(std::ptr::eq(PatternRegistry::global(), PatternRegistry::global()));
    }

    #[test]
    #[traced_test]
    fn fallback_is_logged() {
        let registry = PatternRegistry::new();
        let _ = registry.get_or_load(&LanguageKey::new("en", Some("GB")), &BuiltinSource);
        assert!(logs_contain("using language default table"));
        assert!(logs_contain("fallback=en"));
    }
}
