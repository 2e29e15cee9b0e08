use crate::error::RegistryError;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use tracing::debug;

/// A record a [`Registry`] can hold.
pub trait Entry: Clone + Send + Sync + 'static {
    type Id: Clone + Eq + Hash + Ord + Display + Send + Sync;

    /// Entity name used in errors and logs.
    const ENTITY: &'static str;

    fn id(&self) -> &Self::Id;

    /// Name or title: listing order and the first thing search looks at.
    fn label(&self) -> &str;

    /// Extra text matched by [`Registry::search`].
    fn search_terms(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// Thread-safe in-memory map of entries keyed by id.
pub struct Registry<T: Entry> {
    entries: RwLock<FxHashMap<T::Id, T>>,
}

impl<T: Entry> Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").field("entity", &T::ENTITY).field("len", &self.len()).finish()
    }
}

impl<T: Entry> Default for Registry<T> {
    fn default() -> Self {
        Self { entries: RwLock::new(FxHashMap::default()) }
    }
}

impl<T: Entry> Registry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces by id. Returns the replaced entry.
    ///
    /// # Errors
    /// [`RegistryError::InvalidEntry`] if the label is blank.
    pub fn upsert(&self, entry: T) -> Result<Option<T>, RegistryError> {
        if entry.label().trim().is_empty() {
            return Err(RegistryError::InvalidEntry {
                entity: T::ENTITY,
                message: "name must not be blank".into(),
                context: Some(format!("id {}", entry.id()).into()),
            });
        }

        let id = entry.id().clone();
        let previous = self.entries.write().insert(id.clone(), entry);
        debug!(entity = T::ENTITY, %id, replaced = previous.is_some(), "Registry upsert");
        Ok(previous)
    }

    #[must_use]
    pub fn get(&self, id: &T::Id) -> Option<T> {
        self.entries.read().get(id).cloned()
    }

    #[must_use]
    pub fn contains(&self, id: &T::Id) -> bool {
        self.entries.read().contains_key(id)
    }

    /// # Errors
    /// [`RegistryError::NotFound`] if nothing is stored under `id`.
    pub fn remove(&self, id: &T::Id) -> Result<T, RegistryError> {
        let removed = self.entries.write().remove(id);
        removed.ok_or_else(|| RegistryError::NotFound {
            entity: T::ENTITY,
            id: id.to_string(),
            context: None,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// All entries ordered by label (case-insensitive), then id.
    #[must_use]
    pub fn list(&self) -> Vec<T> {
        let mut all: Vec<T> = self.entries.read().values().cloned().collect();
        sort_by_label(&mut all);
        all
    }

    /// Entries whose label or search terms contain `query`, case-insensitively.
    ///
    /// A blank query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<T> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.list();
        }

        let mut found: Vec<T> = self
            .entries
            .read()
            .values()
            .filter(|entry| {
                std::iter::once(entry.label())
                    .chain(entry.search_terms())
                    .any(|text| text.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        sort_by_label(&mut found);
        found
    }
}

fn sort_by_label<T: Entry>(entries: &mut [T]) {
    entries.sort_by_cached_key(|e| (e.label().to_lowercase(), e.id().clone()));
}
