use super::backend::KeyValueBackend;
use crate::error::{Result, RosterError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory key-value backend for testing.
///
/// Uses `RefCell` for interior mutability since the store is single-threaded,
/// letting the `KeyValueBackend` trait take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    items: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl KeyValueBackend for MemBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(RosterError::Store("Simulated write error".to_string()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
