//! Centralized application state: the user roster and the theme.
//!
//! The store is the sole owner of mutable state. Every dispatch builds a
//! complete new snapshot (structural replacement, never in-place mutation),
//! swaps it in, and notifies subscribers. Consumers detect change by
//! comparing snapshot references.
//!
//! The store is an explicit, injectable container constructed in `main` and
//! only ever touched from the event loop. No global instance exists.

use std::sync::Arc;

use crate::types::{Theme, UserId, UserRecord};

/// First id handed out by an empty store.
const FIRST_USER_ID: u64 = 1;

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Immutable full-state value produced by each dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    users: Vec<UserRecord>,
    theme: Theme,
    next_id: u64,
}

impl Snapshot {
    fn empty(theme: Theme) -> Self {
        Snapshot {
            users: Vec::new(),
            theme,
            next_id: FIRST_USER_ID,
        }
    }

    /// Records in insertion order.
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Current color scheme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Id for the next draft: one past the highest id ever added.
    pub fn next_user_id(&self) -> UserId {
        UserId(self.next_id)
    }

    /// Apply one operation, producing the successor snapshot.
    fn apply(&self, op: StoreOp) -> Snapshot {
        let mut next = self.clone();
        match op {
            StoreOp::AddUser(record) => {
                next.next_id = next.next_id.max(record.id.value().saturating_add(1));
                next.users.push(record);
            }
            StoreOp::RemoveUser(id) => {
                if let Some(pos) = next.users.iter().position(|u| u.id == id) {
                    next.users.remove(pos);
                }
            }
            StoreOp::EditUser(record) => {
                if let Some(slot) = next.users.iter_mut().find(|u| u.id == record.id) {
                    *slot = record;
                }
            }
            StoreOp::SetTheme(theme) => {
                next.theme = theme;
            }
        }
        next
    }
}

// ============================================================================
// OPERATIONS
// ============================================================================

/// A mutation request. Dispatch order is the total order of effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    /// Append a record. No uniqueness check beyond the caller-supplied id.
    AddUser(UserRecord),
    /// Remove the record with this id. No-op when absent.
    RemoveUser(UserId),
    /// Replace the record sharing this record's id, keeping its position.
    /// No-op when absent.
    EditUser(UserRecord),
    /// Replace the theme unconditionally.
    SetTheme(Theme),
}

// ============================================================================
// STORE
// ============================================================================

type Subscriber = Box<dyn FnMut(&Arc<Snapshot>)>;

/// The state container.
pub struct Store {
    snapshot: Arc<Snapshot>,
    subscribers: Vec<Subscriber>,
}

impl Store {
    /// Create an empty store with the given starting theme.
    pub fn new(theme: Theme) -> Self {
        Store {
            snapshot: Arc::new(Snapshot::empty(theme)),
            subscribers: Vec::new(),
        }
    }

    /// Cheap handle to the current state.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Register a callback run after every dispatch with the new snapshot.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&Arc<Snapshot>) + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    /// Apply one operation synchronously and notify subscribers.
    pub fn dispatch(&mut self, op: StoreOp) {
        let next = Arc::new(self.snapshot.apply(op));
        self.snapshot = Arc::clone(&next);
        for subscriber in &mut self.subscribers {
            subscriber(&next);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn record(id: u64, username: &str) -> UserRecord {
        UserRecord {
            id: UserId(id),
            username: username.to_string(),
            email: format!("{}@example.com", username),
            age: "30".to_string(),
        }
    }

    #[test]
    fn new_store_is_empty_with_given_theme() {
        let store = Store::new(Theme::Dark);
        let snap = store.snapshot();
        assert!(snap.users().is_empty());
        assert_eq!(snap.theme(), Theme::Dark);
        assert_eq!(snap.next_user_id(), UserId(FIRST_USER_ID));
    }

    #[test]
    fn add_then_read_back_yields_identical_fields() {
        let mut store = Store::new(Theme::Light);
        let bob = record(1, "bob");
        store.dispatch(StoreOp::AddUser(bob.clone()));

        let snap = store.snapshot();
        assert_eq!(snap.users(), &[bob]);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = Store::new(Theme::Light);
        store.dispatch(StoreOp::AddUser(record(1, "bob")));
        store.dispatch(StoreOp::AddUser(record(2, "alice")));
        store.dispatch(StoreOp::AddUser(record(3, "carol")));

        let snapshot = store.snapshot();
        let names: Vec<&str> = snapshot
            .users()
            .iter()
            .map(|u| u.username.as_str())
            .collect();
        assert_eq!(names, vec!["bob", "alice", "carol"]);
    }

    #[test]
    fn next_user_id_tracks_highest_added_id() {
        let mut store = Store::new(Theme::Light);
        assert_eq!(store.snapshot().next_user_id(), UserId(1));

        store.dispatch(StoreOp::AddUser(record(7, "bob")));
        assert_eq!(store.snapshot().next_user_id(), UserId(8));

        // Lower ids never move the watermark backwards
        store.dispatch(StoreOp::AddUser(record(2, "alice")));
        assert_eq!(store.snapshot().next_user_id(), UserId(8));
    }

    #[test]
    fn remove_drops_only_the_matching_record() {
        let mut store = Store::new(Theme::Light);
        store.dispatch(StoreOp::AddUser(record(1, "bob")));
        store.dispatch(StoreOp::AddUser(record(2, "alice")));
        store.dispatch(StoreOp::AddUser(record(3, "carol")));

        store.dispatch(StoreOp::RemoveUser(UserId(2)));

        let snapshot = store.snapshot();
        let names: Vec<&str> = snapshot
            .users()
            .iter()
            .map(|u| u.username.as_str())
            .collect();
        assert_eq!(names, vec!["bob", "carol"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = Store::new(Theme::Light);
        store.dispatch(StoreOp::AddUser(record(1, "bob")));
        store.dispatch(StoreOp::RemoveUser(UserId(1)));

        let after_first = store.snapshot();
        store.dispatch(StoreOp::RemoveUser(UserId(1)));
        let after_second = store.snapshot();

        assert_eq!(*after_first, *after_second);
    }

    #[test]
    fn remove_absent_id_is_a_noop() {
        let mut store = Store::new(Theme::Light);
        store.dispatch(StoreOp::AddUser(record(1, "bob")));

        store.dispatch(StoreOp::RemoveUser(UserId(99)));
        assert_eq!(store.snapshot().users().len(), 1);
    }

    #[test]
    fn edit_preserves_position_and_neighbors() {
        let mut store = Store::new(Theme::Light);
        store.dispatch(StoreOp::AddUser(record(1, "bob")));
        store.dispatch(StoreOp::AddUser(record(2, "alice")));
        store.dispatch(StoreOp::AddUser(record(3, "carol")));

        let mut edited = record(2, "alice");
        edited.email = "alice@work.org".to_string();
        store.dispatch(StoreOp::EditUser(edited.clone()));

        let snap = store.snapshot();
        assert_eq!(snap.users()[0], record(1, "bob"));
        assert_eq!(snap.users()[1], edited);
        assert_eq!(snap.users()[2], record(3, "carol"));
    }

    #[test]
    fn edit_absent_id_is_a_noop() {
        let mut store = Store::new(Theme::Light);
        store.dispatch(StoreOp::AddUser(record(1, "bob")));

        store.dispatch(StoreOp::EditUser(record(99, "ghost")));

        let snap = store.snapshot();
        assert_eq!(snap.users(), &[record(1, "bob")]);
    }

    #[test]
    fn set_theme_round_trips_without_touching_users() {
        let mut store = Store::new(Theme::Light);
        store.dispatch(StoreOp::AddUser(record(1, "bob")));

        store.dispatch(StoreOp::SetTheme(Theme::Dark));

        let snap = store.snapshot();
        assert_eq!(snap.theme(), Theme::Dark);
        assert_eq!(snap.users(), &[record(1, "bob")]);
    }

    #[test]
    fn dispatch_replaces_the_snapshot_reference() {
        let mut store = Store::new(Theme::Light);
        let before = store.snapshot();

        store.dispatch(StoreOp::AddUser(record(1, "bob")));
        let after = store.snapshot();

        assert!(!Arc::ptr_eq(&before, &after));
        // The old snapshot is untouched
        assert!(before.users().is_empty());
        assert_eq!(after.users().len(), 1);
    }

    #[test]
    fn subscribers_are_notified_once_per_dispatch() {
        let mut store = Store::new(Theme::Light);
        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |snap| sink.borrow_mut().push(snap.users().len()));

        store.dispatch(StoreOp::AddUser(record(1, "bob")));
        store.dispatch(StoreOp::AddUser(record(2, "alice")));
        store.dispatch(StoreOp::RemoveUser(UserId(1)));

        assert_eq!(*seen.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn ids_stay_unique_across_add_remove_sequences() {
        let mut store = Store::new(Theme::Light);
        for _ in 0..3 {
            let id = store.snapshot().next_user_id();
            store.dispatch(StoreOp::AddUser(UserRecord::template(id)));
        }
        store.dispatch(StoreOp::RemoveUser(UserId(2)));
        let id = store.snapshot().next_user_id();
        store.dispatch(StoreOp::AddUser(UserRecord::template(id)));

        let snap = store.snapshot();
        let mut ids: Vec<u64> = snap.users().iter().map(|u| u.id.value()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), snap.users().len());
    }
}
