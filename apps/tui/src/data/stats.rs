use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;
use tracing::debug;

use crate::data::catalog::{MONTH_ABBREVIATIONS, TREND_MAX, TREND_MIN, TREND_MONTHS};
use crate::data::models::{CaseRecord, CaseStats, MonthlyCount};
use crate::{CaseStatus, Category};

/// Derives the dashboard summary from the generated cases.
///
/// `monthly_counts` is decorative: its values are drawn from `rng` and do not
/// reflect the dates of `records`.
pub fn aggregate<R: Rng + ?Sized>(
    records: &[CaseRecord],
    now: DateTime<Utc>,
    rng: &mut R,
) -> CaseStats {
    let count_status =
        |status: CaseStatus| records.iter().filter(|case| case.status == status).count();

    let mut category_counts = BTreeMap::new();
    for case in records {
        *category_counts.entry(case.category).or_insert(0) += 1;
    }

    let stats = CaseStats {
        total_cases: records.len(),
        open_cases: count_status(CaseStatus::Open),
        solved_cases: count_status(CaseStatus::Closed),
        critical_cases: count_status(CaseStatus::Critical),
        unsolved_cases: count_status(CaseStatus::Unsolved),
        category_counts,
        monthly_counts: monthly_trend(now, rng),
    };

    debug!(
        total = stats.total_cases,
        critical = stats.critical_cases,
        "aggregated case statistics"
    );
    stats
}

/// Six months ending with the month of `now`, oldest first.
fn monthly_trend<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Vec<MonthlyCount> {
    let current = now.month0() as usize;

    (0..TREND_MONTHS)
        .rev()
        .map(|months_back| MonthlyCount {
            name: MONTH_ABBREVIATIONS[(current + 12 - months_back) % 12],
            value: rng.random_range(TREND_MIN..TREND_MAX),
        })
        .collect()
}

impl CaseStats {
    pub const fn status_count(&self, status: CaseStatus) -> usize {
        match status {
            CaseStatus::Open => self.open_cases,
            CaseStatus::Closed => self.solved_cases,
            CaseStatus::Unsolved => self.unsolved_cases,
            CaseStatus::Critical => self.critical_cases,
        }
    }

    /// Percentage of closed cases, rounded half up; 0 with no cases.
    pub const fn solve_rate(&self) -> usize {
        if self.total_cases == 0 {
            return 0;
        }
        (self.solved_cases * 200 + self.total_cases) / (self.total_cases * 2)
    }

    /// Categories by descending count; ties keep catalog order.
    pub fn top_categories(&self, limit: usize) -> Vec<(Category, usize)> {
        let mut counts: Vec<(Category, usize)> = self
            .category_counts
            .iter()
            .map(|(category, count)| (*category, *count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(limit);
        counts
    }

    pub fn most_common_category(&self) -> Option<(Category, usize)> {
        self.top_categories(1).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate;
    use crate::data::test_support::{fixed_now, ZeroRng};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample(seed: u64, count: usize) -> (Vec<CaseRecord>, CaseStats) {
        let mut rng = StdRng::seed_from_u64(seed);
        let cases = generate(count, fixed_now(), &mut rng);
        let stats = aggregate(&cases, fixed_now(), &mut rng);
        (cases, stats)
    }

    #[test]
    fn empty_input_gives_zero_counts() {
        let stats = aggregate(&[], fixed_now(), &mut StdRng::seed_from_u64(3));
        assert_eq!(stats.total_cases, 0);
        assert_eq!(stats.open_cases, 0);
        assert_eq!(stats.solved_cases, 0);
        assert_eq!(stats.critical_cases, 0);
        assert!(stats.category_counts.is_empty());
        assert_eq!(stats.monthly_counts.len(), 6);
        assert_eq!(stats.solve_rate(), 0);
        assert_eq!(stats.most_common_category(), None);
    }

    #[test]
    fn counts_are_consistent_with_records() {
        for seed in 0..20 {
            let (cases, stats) = sample(seed, 30);
            assert_eq!(stats.total_cases, cases.len());

            let known = stats.open_cases + stats.solved_cases + stats.critical_cases;
            assert!(known <= stats.total_cases);
            assert_eq!(known + stats.unsolved_cases, stats.total_cases);
            assert_eq!(known == stats.total_cases, stats.unsolved_cases == 0);

            let category_total: usize = stats.category_counts.values().sum();
            assert_eq!(category_total, stats.total_cases);
            assert!(stats.category_counts.values().all(|count| *count > 0));
        }
    }

    #[test]
    fn critical_filter_matches_critical_count() {
        let (cases, stats) = sample(11, 30);
        let critical = cases
            .iter()
            .filter(|case| case.status == CaseStatus::Critical)
            .count();
        assert_eq!(critical, stats.critical_cases);
    }

    #[test]
    fn monthly_trend_covers_six_months_ending_now() {
        // fixed_now() is in March
        let (_, stats) = sample(8, 10);
        let names: Vec<&str> = stats.monthly_counts.iter().map(|month| month.name).collect();
        assert_eq!(names, ["Oct", "Nov", "Dec", "Jan", "Feb", "Mar"]);
        assert!(stats
            .monthly_counts
            .iter()
            .all(|month| (TREND_MIN..TREND_MAX).contains(&month.value)));
    }

    #[test]
    fn monthly_trend_ignores_record_dates() {
        let (cases, _) = sample(21, 30);
        let with_cases = aggregate(&cases, fixed_now(), &mut StdRng::seed_from_u64(4));
        let without = aggregate(&[], fixed_now(), &mut StdRng::seed_from_u64(4));
        assert_eq!(with_cases.monthly_counts, without.monthly_counts);
    }

    #[test]
    fn constant_source_gives_minimum_trend() {
        let stats = aggregate(&[], fixed_now(), &mut ZeroRng);
        assert!(stats.monthly_counts.iter().all(|month| month.value == TREND_MIN));
    }

    #[test]
    fn solve_rate_rounds_half_up() {
        let mut stats = aggregate(&[], fixed_now(), &mut ZeroRng);
        stats.total_cases = 8;
        stats.solved_cases = 1;
        assert_eq!(stats.solve_rate(), 13);
        stats.total_cases = 3;
        assert_eq!(stats.solve_rate(), 33);
        stats.solved_cases = 3;
        assert_eq!(stats.solve_rate(), 100);
    }

    #[test]
    fn top_categories_sorted_with_catalog_tiebreak() {
        let mut stats = aggregate(&[], fixed_now(), &mut ZeroRng);
        stats.category_counts = BTreeMap::from([
            (Category::Fraud, 2),
            (Category::Theft, 2),
            (Category::CyberCrime, 5),
            (Category::Assault, 1),
        ]);

        assert_eq!(
            stats.top_categories(3),
            vec![
                (Category::CyberCrime, 5),
                (Category::Theft, 2),
                (Category::Fraud, 2)
            ]
        );
        assert_eq!(stats.most_common_category(), Some((Category::CyberCrime, 5)));
        assert_eq!(stats.top_categories(10).len(), 4);
    }
}
