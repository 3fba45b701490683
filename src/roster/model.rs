use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

/// Records are keyed by the decimal millisecond timestamp of their creation.
pub type RecordId = String;

static LAST_MINTED: AtomicI64 = AtomicI64::new(0);

/// Returns a millisecond timestamp that is strictly greater than any value
/// previously returned in this process.
///
/// Two calls inside the same millisecond would otherwise collide, and both
/// record ids and notification ids must be unique.
pub fn mint_timestamp(now: DateTime<Utc>) -> i64 {
    let candidate = now.timestamp_millis();
    let mut last = LAST_MINTED.load(Ordering::Relaxed);
    loop {
        let next = candidate.max(last + 1);
        match LAST_MINTED.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(observed) => last = observed,
        }
    }
}

pub fn mint_record_id() -> RecordId {
    mint_timestamp(Utc::now()).to_string()
}

/// A single contact entry.
///
/// Field order matches the persisted JSON layout. Entries written by older
/// clients may lack `dob` and `age`, or carry any JSON number as the age.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default, deserialize_with = "lenient_age")]
    pub age: u32,
    pub country: String,
    pub state: String,
    pub city: String,
    pub zip: String,
    pub town: String,
}

impl Record {
    /// Replaces the id with a freshly minted one.
    pub fn with_new_id(mut self) -> Self {
        self.id = mint_record_id();
        self
    }
}

/// Accepts any JSON number; fractions truncate, negatives and `null` read as 0.
fn lenient_age<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let age = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    Ok(if age.is_finite() && age > 0.0 {
        age.min(u32::MAX as f64) as u32
    } else {
        0
    })
}

/// Whole years between `dob` (`YYYY-MM-DD`) and `today`. Unparseable or
/// future dates give 0.
pub fn age_from_dob(dob: &str, today: NaiveDate) -> u32 {
    let Ok(born) = NaiveDate::parse_from_str(dob.trim(), "%Y-%m-%d") else {
        return 0;
    };
    if born > today {
        return 0;
    }
    let mut years = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: i64,
    pub message: String,
    pub kind: NotificationKind,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, now: DateTime<Utc>) -> Self {
        Self {
            id: mint_timestamp(now),
            message: message.into(),
            kind,
            created_at: now,
        }
    }
}
