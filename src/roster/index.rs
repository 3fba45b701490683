//! # Row Indexing
//!
//! Record ids are millisecond timestamps: stable, but unpleasant to type.
//! Clients instead address rows by their 1-based position in the table, which
//! follows insertion order.
//!
//! A [`RowSelector`] accepts either form:
//! - `3` → the third row
//! - anything else → a literal record id
//!
//! Row numbers are only meaningful against the snapshot they were shown
//! from; deleting row 1 shifts every later row up by one.

use crate::model::Record;
use std::fmt;
use std::str::FromStr;

/// Pads a record with its display row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub row: usize,
    pub record: Record,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSelector {
    Row(usize),
    Id(String),
}

impl fmt::Display for RowSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowSelector::Row(n) => write!(f, "{}", n),
            RowSelector::Id(id) => write!(f, "id {}", id),
        }
    }
}

impl FromStr for RowSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty row selector".to_string());
        }
        // Minted ids are 13-digit timestamps; short numbers are rows.
        match s.parse::<usize>() {
            Ok(0) => Err("Rows are numbered from 1".to_string()),
            Ok(n) if s.len() < 10 => Ok(RowSelector::Row(n)),
            _ => Ok(RowSelector::Id(s.to_string())),
        }
    }
}

pub fn index_records(records: Vec<Record>) -> Vec<DisplayRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord { row: i + 1, record })
        .collect()
}
