//! Ordered child collections of a profile (experience, education).
//!
//! Entries are kept newest-first: insertion always happens at the head and
//! removal is by identifier, a no-op when nothing matches.

use uuid::Uuid;

/// An element of a profile subcollection
pub trait Entry {
    fn id(&self) -> Uuid;
}

/// Insert at index 0, shifting existing entries back
pub fn insert_head<T: Entry>(entries: &mut Vec<T>, entry: T) -> Uuid {
    let id = entry.id();
    entries.insert(0, entry);
    id
}

/// Remove the entry with the given identifier. Returns whether one was removed.
pub fn remove_by_id<T: Entry>(entries: &mut Vec<T>, id: Uuid) -> bool {
    match entries.iter().position(|e| e.id() == id) {
        Some(index) => {
            entries.remove(index);
            true
        }
        None => false,
    }
}
