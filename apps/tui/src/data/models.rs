use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{CaseStatus, Category};

/// A single synthetic crime report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub status: CaseStatus,
    pub category: Category,
}

/// One bar of the monthly trend chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub name: &'static str,
    pub value: u32,
}

/// Summary figures derived once from the generated cases
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStats {
    pub total_cases: usize,
    pub open_cases: usize,
    pub solved_cases: usize,
    pub critical_cases: usize,
    pub unsolved_cases: usize,
    pub category_counts: BTreeMap<Category, usize>,
    pub monthly_counts: Vec<MonthlyCount>,
}
