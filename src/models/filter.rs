use super::record::Record;

/// Single-date equality filter. `None` means every record is in scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFilter {
    date: Option<String>,
}

impl DateFilter {
    pub fn none() -> Self {
        Self { date: None }
    }

    pub fn on(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
        }
    }

    /// Build from an optional CLI value; an empty string behaves like no filter.
    pub fn from_option(date: Option<&str>) -> Self {
        match date.map(str::trim) {
            Some(d) if !d.is_empty() => Self::on(d),
            _ => Self::none(),
        }
    }

    pub fn describe(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn matches(&self, record: &Record) -> bool {
        match &self.date {
            Some(d) => record.date == *d,
            None => true,
        }
    }

    /// Filtered view over `records`, insertion order preserved.
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
