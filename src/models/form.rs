//! Transient input buffer for a record being composed.

use super::record::Record;
use super::shift::Shift;
use crate::errors::AppResult;
use crate::store::{KeyValueStorage, RecordStore};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::fmt;

/// Largest accepted quantity for one record.
pub const MAX_TOTAL: u64 = u32::MAX as u64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub date: String,
    pub model: String,
    pub color: String,
    pub shift: Shift,
    pub total: String,
}

/// Fields of a form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidForm {
    pub date: String,
    pub model: String,
    pub color: String,
    pub shift: Shift,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormRejection {
    MissingField(&'static str),
    InvalidDate(String),
    InvalidTotal(String),
}

impl fmt::Display for FormRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormRejection::MissingField(name) => write!(f, "missing field '{name}'"),
            FormRejection::InvalidDate(d) => write!(f, "'{d}' is not a YYYY-MM-DD date"),
            FormRejection::InvalidTotal(t) => write!(f, "'{t}' is not an integer between 0 and {MAX_TOTAL}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted(Record),
    Rejected(FormRejection),
}

impl FormState {
    pub fn new(
        date: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
        shift: Shift,
        total: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            model: model.into(),
            color: color.into(),
            shift,
            total: total.into(),
        }
    }

    /// Emptiness check, not a falsy one: `total = "0"` is accepted.
    pub fn validate(&self) -> Result<ValidForm, FormRejection> {
        let date = required("date", &self.date)?;
        let model = required("model", &self.model)?;
        let color = required("color", &self.color)?;
        let total_raw = required("total", &self.total)?;

        // stored zero-padded, so "2024-1-5" and "2024-01-05" are one date
        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| FormRejection::InvalidDate(date.to_string()))?;

        let total = total_raw
            .parse::<u64>()
            .ok()
            .filter(|t| *t <= MAX_TOTAL)
            .ok_or_else(|| FormRejection::InvalidTotal(total_raw.to_string()))?;

        Ok(ValidForm {
            date: parsed.format("%Y-%m-%d").to_string(),
            model: model.to_string(),
            color: color.to_string(),
            shift: self.shift,
            total,
        })
    }

    /// Validate, commit to the store and reset.
    ///
    /// A rejected form leaves both the form and the store untouched; only
    /// storage failures surface as `Err`.
    pub fn submit<S, Tz>(
        &mut self,
        store: &mut RecordStore<S>,
        now: DateTime<Tz>,
    ) -> AppResult<Submission>
    where
        S: KeyValueStorage,
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let valid = match self.validate() {
            Ok(v) => v,
            Err(reason) => return Ok(Submission::Rejected(reason)),
        };

        let record = Record {
            id: store.next_id(now.timestamp_millis()),
            date: valid.date,
            time: now.format("%H:%M:%S").to_string(),
            model: valid.model,
            color: valid.color,
            shift: valid.shift,
            total: valid.total,
        };

        store.add(record.clone())?;
        self.reset();

        Ok(Submission::Accepted(record))
    }

    /// Same as [`FormState::submit`] with the local wall clock.
    pub fn submit_now<S: KeyValueStorage>(
        &mut self,
        store: &mut RecordStore<S>,
    ) -> AppResult<Submission> {
        self.submit(store, Local::now())
    }

    pub fn reset(&mut self) {
        *self = FormState::default();
    }
}

fn required<'a>(name: &'static str, value: &'a str) -> Result<&'a str, FormRejection> {
    let v = value.trim();
    if v.is_empty() {
        Err(FormRejection::MissingField(name))
    } else {
        Ok(v)
    }
}
