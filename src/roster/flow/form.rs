use super::FlowError;
use crate::locations;
use crate::model::{age_from_dob, Record, RecordId};
use crate::validation::{validate_field, validate_record, Field, FieldErrors};
use chrono::{NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: RecordId },
}

/// What a successful submit asks the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(Record),
    Update(Record),
}

/// The contact form.
///
/// Fields are re-validated one at a time as they change. `submit` runs every
/// rule and refuses to produce a [`Submission`] while any of them fails.
#[derive(Debug, Clone)]
pub struct FormState {
    draft: Record,
    mode: FormMode,
    errors: FieldErrors,
    age_set: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            draft: Record::default(),
            mode: FormMode::Create,
            errors: FieldErrors::default(),
            age_set: false,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn values(&self) -> &Record {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// States offered for the currently chosen country.
    pub fn state_options(&self) -> &'static [&'static str] {
        locations::states_for(&self.draft.country)
    }

    /// Cities offered for the currently chosen state.
    pub fn city_options(&self) -> &'static [&'static str] {
        locations::cities_for(&self.draft.state)
    }

    /// Sets one field and re-validates it.
    ///
    /// Country, state and city behave as cascading selects: a value must be
    /// one of the options of its parent, and changing a parent clears any
    /// child that is no longer offered.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), FlowError> {
        match field {
            Field::Country => {
                if !value.is_empty() && !locations::countries().contains(&value) {
                    return Err(not_an_option(field, value));
                }
                self.draft.country = value.to_string();
                if !locations::is_state_of(&self.draft.country, &self.draft.state) {
                    self.clear_select(Field::State);
                    self.clear_select(Field::City);
                }
            }
            Field::State => {
                if !value.is_empty() && !locations::is_state_of(&self.draft.country, value) {
                    return Err(not_an_option(field, value));
                }
                self.draft.state = value.to_string();
                if !locations::is_city_of(&self.draft.state, &self.draft.city) {
                    self.clear_select(Field::City);
                }
            }
            Field::City => {
                if !value.is_empty() && !locations::is_city_of(&self.draft.state, value) {
                    return Err(not_an_option(field, value));
                }
                self.draft.city = value.to_string();
            }
            Field::Age => {
                self.draft.age = value
                    .trim()
                    .parse()
                    .map_err(|_| FlowError::InvalidAge(value.to_string()))?;
                self.age_set = true;
            }
            Field::Name => self.draft.name = value.to_string(),
            Field::Phone => self.draft.phone = value.to_string(),
            Field::Email => self.draft.email = value.to_string(),
            Field::Dob => self.draft.dob = value.to_string(),
            Field::Zip => self.draft.zip = value.to_string(),
            Field::Town => self.draft.town = value.to_string(),
        }
        self.errors.set(field, validate_field(field, value));
        Ok(())
    }

    fn clear_select(&mut self, field: Field) {
        match field {
            Field::State => self.draft.state.clear(),
            Field::City => self.draft.city.clear(),
            _ => {}
        }
        self.errors.set(field, None);
    }

    /// Loads a stored record into the form and switches to edit mode.
    pub fn begin_edit(&mut self, record: Record) {
        self.mode = FormMode::Edit {
            id: record.id.clone(),
        };
        self.draft = record;
        self.errors.clear();
        self.age_set = true;
    }

    /// Validates everything and, on success, resets the form.
    pub fn submit(&mut self) -> Result<Submission, FieldErrors> {
        self.submit_on(Utc::now().date_naive())
    }

    pub fn submit_on(&mut self, today: NaiveDate) -> Result<Submission, FieldErrors> {
        let errors = validate_record(&self.draft);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }

        let mut record = self.draft.clone();
        if !self.age_set {
            record.age = age_from_dob(&record.dob, today);
        }

        let submission = match &self.mode {
            FormMode::Edit { id } => {
                record.id = id.clone();
                Submission::Update(record)
            }
            FormMode::Create => Submission::Create(record.with_new_id()),
        };
        self.reset();
        Ok(submission)
    }

    /// Back to create mode with every field cleared.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

fn not_an_option(field: Field, value: &str) -> FlowError {
    FlowError::NotAnOption {
        field,
        value: value.to_string(),
    }
}
