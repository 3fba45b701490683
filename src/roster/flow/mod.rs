//! # Interaction Flow
//!
//! The state machines that sit between a user interface and the
//! [`RosterApi`](crate::api::RosterApi):
//!
//! - [`form`]: the contact form, in create or edit mode
//! - [`confirm`]: the typed "delete" confirmation gate
//! - [`table`]: row projection of the collection
//! - [`session`]: wires the three together; the table hands records to the
//!   form by direct call
//!
//! Nothing here renders anything. A client reads the state and draws it.

use crate::validation::Field;
use thiserror::Error;

pub mod confirm;
pub mod form;
pub mod session;
pub mod table;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("{value:?} is not an available {field}")]
    NotAnOption { field: Field, value: String },

    #[error("Age must be a whole number, got {0:?}")]
    InvalidAge(String),
}
