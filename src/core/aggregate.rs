//! Derived totals over a (filtered) record set.

use crate::models::record::Record;
use serde::Serialize;
use std::collections::HashMap;

/// Total for one distinct date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateTotal {
    pub date: String,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub grand_total: u64,
    pub by_date: Vec<DateTotal>,
}

impl Summary {
    pub fn from_records(records: &[&Record]) -> Self {
        Self {
            count: records.len(),
            grand_total: grand_total(records),
            by_date: group_by_date(records),
        }
    }

    /// Largest per-date total, used to scale the chart.
    pub fn peak(&self) -> u64 {
        self.by_date.iter().map(|d| d.total).max().unwrap_or(0)
    }
}

/// Saturates at `u64::MAX`; totals loaded from storage are not range-checked.
pub fn grand_total(records: &[&Record]) -> u64 {
    records.iter().fold(0u64, |acc, r| acc.saturating_add(r.total))
}

/// Group by `date` and sum `total`. Output order is first appearance.
pub fn group_by_date(records: &[&Record]) -> Vec<DateTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<DateTotal> = Vec::new();

    for r in records {
        match index.get(r.date.as_str()) {
            Some(&i) => out[i].total = out[i].total.saturating_add(r.total),
            None => {
                index.insert(r.date.as_str(), out.len());
                out.push(DateTotal {
                    date: r.date.clone(),
                    total: r.total,
                });
            }
        }
    }

    out
}
