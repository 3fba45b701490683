//! The delete gate: a pending target plus whatever the user has typed.
//! Only the word "delete", in any letter case, unlocks it.

use crate::model::RecordId;

pub const CONFIRM_WORD: &str = "delete";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteConfirmation {
    target: Option<RecordId>,
    input: String,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts confirming the deletion of `id`. Any previous input is discarded.
    pub fn open(&mut self, id: impl Into<RecordId>) {
        self.target = Some(id.into());
        self.input.clear();
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn type_text(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn can_confirm(&self) -> bool {
        self.is_open() && self.input.to_lowercase() == CONFIRM_WORD
    }

    /// Hands back the target if the typed text unlocks the gate, and closes it.
    /// Returns `None` and stays open otherwise.
    pub fn confirm(&mut self) -> Option<RecordId> {
        if !self.can_confirm() {
            return None;
        }
        self.input.clear();
        self.target.take()
    }

    pub fn cancel(&mut self) {
        self.target = None;
        self.input.clear();
    }
}
