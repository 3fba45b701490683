//! # Session
//!
//! A [`Session`] is one user's view of the application: the [`RosterApi`],
//! the contact form, the delete gate, and the weather slot for the town
//! being typed.
//!
//! ## Weather
//!
//! Setting the town, or loading a record for editing, starts a lookup on a
//! worker thread. The result comes
//! back over a channel and is held until the next [`Session::submit`], which
//! returns it alongside the command result. Nothing waits for the worker
//! unless the caller asks to with [`Session::await_weather`]. A newer town
//! replaces the pending lookup; the older worker's answer is dropped.

use super::confirm::DeleteConfirmation;
use super::form::{FormState, Submission};
use super::table::{self, TableRow};
use crate::api::RosterApi;
use crate::commands::CmdResult;
use crate::error::{Result, RosterError};
use crate::index::RowSelector;
use crate::store::DataStore;
use crate::validation::Field;
use crate::weather::{fetch_quietly, WeatherLookup, WeatherReport, MIN_TOWN_LEN};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::debug;

pub type SharedLookup = Arc<dyn WeatherLookup + Send + Sync>;

/// What a successful submit produced.
#[derive(Debug)]
pub struct SubmitOutcome {
    pub result: CmdResult,
    pub weather: Option<WeatherReport>,
}

pub struct Session<S: DataStore> {
    api: RosterApi<S>,
    form: FormState,
    confirm: DeleteConfirmation,
    lookup: Option<SharedLookup>,
    pending: Option<Receiver<Option<WeatherReport>>>,
    weather: Option<WeatherReport>,
}

impl<S: DataStore> Session<S> {
    pub fn new(api: RosterApi<S>) -> Self {
        Self {
            api,
            form: FormState::new(),
            confirm: DeleteConfirmation::new(),
            lookup: None,
            pending: None,
            weather: None,
        }
    }

    pub fn with_weather(mut self, lookup: SharedLookup) -> Self {
        self.lookup = Some(lookup);
        self
    }

    pub fn api(&self) -> &RosterApi<S> {
        &self.api
    }

    pub fn api_mut(&mut self) -> &mut RosterApi<S> {
        &mut self.api
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn confirmation(&self) -> &DeleteConfirmation {
        &self.confirm
    }

    pub fn table(&self) -> Vec<TableRow> {
        table::rows(&self.api.list().listed_records)
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> Result<()> {
        self.form.set_field(field, value)?;
        if field == Field::Town {
            self.start_weather(value);
        }
        Ok(())
    }

    fn start_weather(&mut self, town: &str) {
        let Some(lookup) = self.lookup.clone() else {
            return;
        };
        if town.trim().chars().count() < MIN_TOWN_LEN {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let town = town.to_string();
        debug!(town = %town, "starting weather lookup");
        thread::spawn(move || {
            // The receiver may be gone by now; that is fine.
            let _ = tx.send(fetch_quietly(lookup.as_ref(), &town));
        });
        self.pending = Some(rx);
    }

    fn poll_weather(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        match rx.try_recv() {
            Ok(report) => {
                self.hold(report);
                self.pending = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => self.pending = None,
        }
    }

    fn hold(&mut self, report: Option<WeatherReport>) {
        if report.is_some() {
            self.weather = report;
        }
    }

    /// Blocks up to `timeout` for the pending lookup. Returns the held report.
    pub fn await_weather(&mut self, timeout: Duration) -> Option<&WeatherReport> {
        if let Some(rx) = self.pending.take() {
            match rx.recv_timeout(timeout) {
                Ok(report) => self.hold(report),
                Err(RecvTimeoutError::Timeout) => self.pending = Some(rx),
                Err(RecvTimeoutError::Disconnected) => {}
            }
        }
        self.weather.as_ref()
    }

    pub fn weather(&self) -> Option<&WeatherReport> {
        self.weather.as_ref()
    }

    /// Loads the record at `selector` into the form for editing and starts a
    /// weather lookup for its town.
    pub fn edit_row(&mut self, selector: &RowSelector) -> Result<()> {
        let found = self.api.find(selector)?;
        let town = found.record.town.clone();
        self.form.begin_edit(found.record);
        self.start_weather(&town);
        Ok(())
    }

    /// Validates the form and dispatches to add or update.
    ///
    /// On success the form is reset and the held weather report, if any, is
    /// handed over. Validation failures leave the form as it was.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        self.poll_weather();
        let submission = self.form.submit().map_err(RosterError::Validation)?;
        let result = match submission {
            Submission::Create(record) => self.api.add_data(record)?,
            Submission::Update(record) => self.api.update_data(record)?,
        };
        Ok(SubmitOutcome {
            result,
            weather: self.weather.take(),
        })
    }

    pub fn request_delete(&mut self, selector: &RowSelector) -> Result<()> {
        let found = self.api.find(selector)?;
        self.confirm.open(found.record.id);
        Ok(())
    }

    pub fn type_confirmation(&mut self, text: &str) {
        self.confirm.type_text(text);
    }

    /// Deletes the pending record if the gate is unlocked.
    /// `Ok(None)` means nothing was deleted.
    pub fn confirm_delete(&mut self) -> Result<Option<CmdResult>> {
        match self.confirm.confirm() {
            Some(id) => Ok(Some(self.api.delete_data(&id)?)),
            None => Ok(None),
        }
    }

    pub fn cancel_delete(&mut self) {
        self.confirm.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::form::FormMode;
    use crate::store::fixtures::{sample_record, StoreFixture};
    use crate::store::InMemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedWeather {
        calls: AtomicUsize,
    }

    impl WeatherLookup for FixedWeather {
        fn lookup(&self, town: &str) -> Result<Option<WeatherReport>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(WeatherReport {
                name: town.to_string(),
                temperature: 21.0,
                description: "few clouds".into(),
                wind_speed: 2.5,
            }))
        }
    }

    fn session_with(count: usize) -> Session<InMemoryStore> {
        let store = StoreFixture::new().with_records(count).store;
        Session::new(RosterApi::new(store))
    }

    fn fill(session: &mut Session<InMemoryStore>) {
        for (field, value) in [
            (Field::Name, "Ann Lee"),
            (Field::Phone, "1234567890"),
            (Field::Email, "a@b.com"),
            (Field::Age, "33"),
            (Field::Country, "USA"),
            (Field::State, "California"),
            (Field::City, "Los Angeles"),
            (Field::Zip, "12345"),
            (Field::Town, "Palo Alto"),
        ] {
            session.set_field(field, value).unwrap();
        }
    }

    #[test]
    fn submit_in_create_mode_adds_a_record() {
        let mut session = session_with(0);
        fill(&mut session);
        let outcome = session.submit().unwrap();

        assert_eq!(outcome.result.affected_records.len(), 1);
        assert!(outcome.weather.is_none());
        let data = session.api().data();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].name, "Ann Lee");
        assert_eq!(session.api().notifications()[0].message, "Data added successfully");
        assert_eq!(session.table()[0].cells[0], "Ann Lee");
    }

    #[test]
    fn invalid_form_is_not_submitted() {
        let mut session = session_with(0);
        fill(&mut session);
        session.set_field(Field::Phone, "123").unwrap();

        let err = session.submit().unwrap_err();
        assert!(matches!(err, RosterError::Validation(ref e) if e.get(Field::Phone).is_some()));
        assert!(session.api().data().is_empty());
        assert!(session.api().notifications().is_empty());
        assert_eq!(session.form().values().name, "Ann Lee");
    }

    #[test]
    fn edit_row_hands_the_record_to_the_form() {
        let mut session = session_with(2);
        session.edit_row(&RowSelector::Row(2)).unwrap();
        assert_eq!(session.form().mode(), &FormMode::Edit { id: "2".into() });

        session.set_field(Field::Name, "Renamed").unwrap();
        session.submit().unwrap();

        let data = session.api().data();
        assert_eq!(data.len(), 2);
        assert_eq!(data[1].id, "2");
        assert_eq!(data[1].name, "Renamed");
        assert_eq!(data[0], sample_record("1", "Person 1"));
        assert_eq!(session.api().notifications()[0].message, "Data updated successfully");
        assert!(!session.form().is_edit_mode());
    }

    #[test]
    fn edit_row_out_of_range_is_an_error() {
        let mut session = session_with(1);
        assert!(session.edit_row(&RowSelector::Row(5)).is_err());
        assert!(!session.form().is_edit_mode());
    }

    #[test]
    fn delete_needs_the_typed_word() {
        let mut session = session_with(2);
        session.request_delete(&RowSelector::Row(1)).unwrap();

        session.type_confirmation("delet");
        assert!(session.confirm_delete().unwrap().is_none());
        assert_eq!(session.api().data().len(), 2);

        session.type_confirmation("DELETE");
        let result = session.confirm_delete().unwrap().unwrap();
        assert_eq!(result.affected_records[0].id, "1");
        assert_eq!(session.api().data().len(), 1);
        assert_eq!(session.api().notifications().len(), 1);
    }

    #[test]
    fn cancelled_delete_changes_nothing() {
        let mut session = session_with(1);
        session.request_delete(&RowSelector::Row(1)).unwrap();
        session.type_confirmation("delete");
        session.cancel_delete();
        assert!(session.confirm_delete().unwrap().is_none());
        assert_eq!(session.api().data().len(), 1);
        assert!(session.api().notifications().is_empty());
    }

    #[test]
    fn weather_is_handed_over_on_submit() {
        let lookup = Arc::new(FixedWeather {
            calls: AtomicUsize::new(0),
        });
        let mut session = session_with(0).with_weather(lookup.clone());
        fill(&mut session);

        let held = session.await_weather(Duration::from_secs(5)).cloned();
        assert_eq!(held.map(|w| w.name), Some("Palo Alto".to_string()));

        let outcome = session.submit().unwrap();
        assert_eq!(outcome.weather.map(|w| w.description), Some("few clouds".to_string()));
        assert!(session.weather().is_none());
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn editing_looks_up_the_stored_town() {
        let lookup = Arc::new(FixedWeather {
            calls: AtomicUsize::new(0),
        });
        let mut session = session_with(1).with_weather(lookup.clone());
        session.edit_row(&RowSelector::Row(1)).unwrap();

        let held = session.await_weather(Duration::from_secs(5)).cloned();
        assert_eq!(held.map(|w| w.name), Some("Palo Alto".to_string()));
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);

        let outcome = session.submit().unwrap();
        assert!(outcome.weather.is_some());
    }

    #[test]
    fn short_towns_start_no_lookup() {
        let lookup = Arc::new(FixedWeather {
            calls: AtomicUsize::new(0),
        });
        let mut session = session_with(0).with_weather(lookup.clone());
        session.set_field(Field::Town, "LA").unwrap();
        assert!(session.await_weather(Duration::from_millis(50)).is_none());
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
    }
}
