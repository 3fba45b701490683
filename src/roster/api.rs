//! # API Facade
//!
//! [`RosterApi`] is the application state: the record store plus the
//! notification queue. It is a plain struct owned by whoever drives the
//! application (the CLI context, a [`Session`](crate::flow::session::Session),
//! a test) and is passed around by reference. There is no ambient global.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the command layer
//! - **Queues notifications**: every successful add/update/delete pushes
//!   exactly one `success` notification
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! A failed store write propagates as an error and queues nothing.
//!
//! ## Generic Over DataStore
//!
//! `RosterApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RosterApi<LocalStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use crate::commands;
use crate::commands::{ADDED_MESSAGE, DELETED_MESSAGE, UPDATED_MESSAGE};
use crate::error::Result;
use crate::index::{DisplayRecord, RowSelector};
use crate::model::{Notification, NotificationKind, Record};
use crate::notifications::NotificationQueue;
use crate::store::DataStore;
use chrono::{DateTime, Utc};

pub struct RosterApi<S: DataStore> {
    store: S,
    notifications: NotificationQueue,
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(store: S) -> Self {
        Self::with_notifications(store, NotificationQueue::default())
    }

    pub fn with_notifications(store: S, notifications: NotificationQueue) -> Self {
        Self {
            store,
            notifications,
        }
    }

    /// Read snapshot of the collection.
    pub fn data(&self) -> Vec<Record> {
        self.store.get_data()
    }

    pub fn list(&self) -> commands::CmdResult {
        commands::list::run(&self.store)
    }

    pub fn find(&self, selector: &RowSelector) -> Result<DisplayRecord> {
        commands::helpers::resolve_selector(&self.store, selector)
    }

    pub fn add_data(&mut self, record: Record) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.store, record)?;
        self.add_notification(ADDED_MESSAGE, NotificationKind::Success);
        Ok(result)
    }

    pub fn update_data(&mut self, record: Record) -> Result<commands::CmdResult> {
        let result = commands::update::run(&mut self.store, record)?;
        self.add_notification(UPDATED_MESSAGE, NotificationKind::Success);
        Ok(result)
    }

    pub fn delete_data(&mut self, id: &str) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.store, id)?;
        self.add_notification(DELETED_MESSAGE, NotificationKind::Success);
        Ok(result)
    }

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.list()
    }

    pub fn add_notification(&mut self, message: impl Into<String>, kind: NotificationKind) -> i64 {
        self.notifications.add(message, kind)
    }

    pub fn remove_notification(&mut self, id: i64) {
        self.notifications.remove(id);
    }

    /// Closes every notification past its ttl and returns them.
    pub fn expire_notifications(&mut self, now: DateTime<Utc>) -> Vec<Notification> {
        self.notifications.expire(now)
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::sample_record;
    use crate::store::InMemoryStore;

    fn api() -> RosterApi<InMemoryStore> {
        RosterApi::new(InMemoryStore::in_memory())
    }

    fn ann_lee() -> Record {
        Record {
            id: String::new(),
            name: "Ann Lee".into(),
            phone: "1234567890".into(),
            email: "a@b.com".into(),
            dob: "1990-01-01".into(),
            age: 33,
            country: "USA".into(),
            state: "California".into(),
            city: "Los Angeles".into(),
            zip: "12345".into(),
            town: "Palo Alto".into(),
        }
    }

    #[test]
    fn adding_ann_lee_queues_a_success_notification() {
        let mut api = api();
        let record = ann_lee().with_new_id();
        api.add_data(record.clone()).unwrap();

        let data = api.data();
        assert_eq!(data.len(), 1);
        assert!(!data[0].id.is_empty());
        assert_eq!(data[0], record);

        let notes = api.notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].message, "Data added successfully");
        assert_eq!(notes[0].kind, NotificationKind::Success);
    }

    #[test]
    fn each_mutation_queues_exactly_one_notification() {
        let mut api = api();
        api.add_data(sample_record("1", "Ann Lee")).unwrap();
        api.update_data(sample_record("1", "Ann Leigh")).unwrap();
        api.delete_data("1").unwrap();

        let messages: Vec<_> = api.notifications().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Data added successfully",
                "Data updated successfully",
                "Data deleted successfully"
            ]
        );
        assert!(api.data().is_empty());
    }

    #[test]
    fn failed_writes_queue_nothing() {
        let mut api = api();
        api.store().backend().set_simulate_write_error(true);
        assert!(api.add_data(sample_record("1", "Ann Lee")).is_err());
        assert!(api.notifications().is_empty());
    }

    #[test]
    fn notification_round_trip() {
        let mut api = api();
        let before = api.notifications().to_vec();
        let id = api.add_notification("hello", NotificationKind::Error);
        api.remove_notification(id);
        assert_eq!(api.notifications(), before.as_slice());
    }

    #[test]
    fn find_by_row() {
        let mut api = api();
        api.add_data(sample_record("1", "Ann Lee")).unwrap();
        api.add_data(sample_record("2", "Bob Roe")).unwrap();
        let found = api.find(&RowSelector::Row(2)).unwrap();
        assert_eq!(found.record.name, "Bob Roe");
    }
}
