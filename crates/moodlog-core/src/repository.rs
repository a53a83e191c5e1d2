//! The entry repository: the single source of truth for which entries exist.
//!
//! The repository owns the store and an in-memory snapshot of every entry.
//! Each mutation writes through the store and then re-reads the whole table;
//! the snapshot is never patched in place. Observers are called with the new
//! snapshot after every publish.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use tracing::{debug, warn};

use crate::date;
use crate::error::{JournalError, Result};
use crate::storage::{EntryOrder, EntryStore, JournalEntry, SqliteStore, SCHEMA_VERSION};

type Observer = Arc<dyn Fn(&[JournalEntry]) + Send + Sync>;

/// Handle returned by [`EntryRepository::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Observers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Observer)>,
}

/// Observable, always-reconciled list of journal entries.
///
/// Mutations hold the store lock for the whole write + reload + publish
/// sequence, so concurrent callers are serialized. Observers run while that
/// lock is held: they may read, subscribe or unsubscribe, but must not call
/// mutating methods.
pub struct EntryRepository<S: EntryStore> {
    store: Mutex<S>,
    snapshot: RwLock<Arc<Vec<JournalEntry>>>,
    observers: Mutex<Observers>,
}

impl EntryRepository<SqliteStore> {
    /// Open the SQLite database at `path` and load it.
    pub fn open(path: &Path) -> Result<Self> {
        Self::new(SqliteStore::open(path, SCHEMA_VERSION)?)
    }

    /// Repository over a fresh in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::new(SqliteStore::open_in_memory(SCHEMA_VERSION)?)
    }
}

impl<S: EntryStore> EntryRepository<S> {
    /// Wrap `store`, blocking until the initial load has been published.
    pub fn new(store: S) -> Result<Self> {
        let initial = store.read_all(EntryOrder::CreatedDateDesc)?;
        debug!(count = initial.len(), "loaded journal entries");
        Ok(Self {
            store: Mutex::new(store),
            snapshot: RwLock::new(Arc::new(initial)),
            observers: Mutex::new(Observers {
                next_id: 0,
                callbacks: Vec::new(),
            }),
        })
    }

    fn lock_store(&self) -> Result<MutexGuard<'_, S>> {
        self.store
            .lock()
            .map_err(|_| JournalError::Storage("entry store lock poisoned".to_string()))
    }

    /// Current entries, newest `created_date` first.
    pub fn entries(&self) -> Vec<JournalEntry> {
        (*self.current()).clone()
    }

    /// Shared handle to the current snapshot, without copying it.
    pub fn current(&self) -> Arc<Vec<JournalEntry>> {
        match self.snapshot.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    pub fn len(&self) -> usize {
        self.current().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current().is_empty()
    }

    /// Look up an entry in the snapshot.
    pub fn get(&self, id: i64) -> Option<JournalEntry> {
        self.current().iter().find(|entry| entry.id == id).cloned()
    }

    /// Register a callback invoked with the new snapshot after every publish.
    ///
    /// A callback registered from inside a notification first fires on the
    /// next publish.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&[JournalEntry]) + Send + Sync + 'static,
    {
        let mut observers = match self.observers.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let id = SubscriptionId(observers.next_id);
        observers.next_id += 1;
        observers.callbacks.push((id, Arc::new(observer)));
        id
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = match self.observers.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let before = observers.callbacks.len();
        observers.callbacks.retain(|(existing, _)| *existing != id);
        observers.callbacks.len() != before
    }

    /// Add an entry dated today.
    pub fn add_entry(&self, text: &str, rating: i32) -> Result<i64> {
        self.add_entry_dated(text, rating, &date::today())
    }

    /// Add an entry with an explicit creation date, then reload.
    ///
    /// If the insert fails nothing is reloaded and the snapshot is unchanged.
    ///
    /// # Returns
    ///
    /// Returns the id storage assigned to the new entry.
    pub fn add_entry_dated(&self, text: &str, rating: i32, created_date: &str) -> Result<i64> {
        let mut store = self.lock_store()?;
        let id = store.insert(text, rating, created_date)?;
        self.reload(&store)?;
        Ok(id)
    }

    /// Delete an entry by id, then reload.
    ///
    /// A missing id is not an error; the reload still happens.
    pub fn delete_entry(&self, id: i64) -> Result<()> {
        let mut store = self.lock_store()?;
        store.delete_by_id(id)?;
        self.reload(&store)
    }

    /// Re-read storage and publish, without writing anything.
    pub fn refresh(&self) -> Result<()> {
        let store = self.lock_store()?;
        self.reload(&store)
    }

    fn reload(&self, store: &S) -> Result<()> {
        let entries = match store.read_all(EntryOrder::CreatedDateDesc) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "reload failed; keeping previous entries");
                return Err(err);
            }
        };
        debug!(count = entries.len(), "reloaded journal entries");
        self.publish(Arc::new(entries));
        Ok(())
    }

    fn publish(&self, entries: Arc<Vec<JournalEntry>>) {
        match self.snapshot.write() {
            Ok(mut guard) => *guard = Arc::clone(&entries),
            Err(poisoned) => *poisoned.into_inner() = Arc::clone(&entries),
        }

        let callbacks: Vec<Observer> = {
            let observers = match self.observers.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            observers
                .callbacks
                .iter()
                .map(|(_, observer)| Arc::clone(observer))
                .collect()
        };
        for observer in callbacks {
            observer(entries.as_slice());
        }
    }
}
