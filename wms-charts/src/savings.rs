//! Before/after cost comparison for the savings widget.

use serde::Serialize;

/// Collection cost for one period, before and after route optimization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsPair {
    pub period: &'static str,
    pub before: f64,
    pub after: f64,
}

impl SavingsPair {
    /// Amount saved in this period.
    pub fn saving(&self) -> f64 {
        self.before - self.after
    }
}

/// Quarterly figures shown on the overview page.
pub const SAMPLE_QUARTERS: [SavingsPair; 4] = [
    SavingsPair {
        period: "Q1",
        before: 4000.0,
        after: 2400.0,
    },
    SavingsPair {
        period: "Q2",
        before: 3000.0,
        after: 1398.0,
    },
    SavingsPair {
        period: "Q3",
        before: 2000.0,
        after: 980.0,
    },
    SavingsPair {
        period: "Q4",
        before: 2780.0,
        after: 1208.0,
    },
];

/// Total savings across all periods.
pub fn total_savings(pairs: &[SavingsPair]) -> f64 {
    pairs.iter().map(SavingsPair::saving).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_quarters_save_6194() {
        assert_eq!(total_savings(&SAMPLE_QUARTERS), 6194.0);
    }

    #[test]
    fn per_period_saving() {
        assert_eq!(SAMPLE_QUARTERS[0].saving(), 1600.0);
        assert_eq!(total_savings(&[]), 0.0);
    }
}
