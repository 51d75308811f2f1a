//! Insurance policy entity

use chrono::NaiveDate;
use core_kernel::{CarId, DateRange, PolicyId};
use serde::{Deserialize, Serialize};

/// An insurance policy covering one car over a closed date interval
///
/// A car may carry several policies (renewals, switches of provider); their
/// intervals may overlap and the domain does not assume otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsurancePolicy {
    /// Unique identifier
    pub id: PolicyId,
    /// The covered car
    pub car_id: CarId,
    /// Provider name, if known
    pub provider: Option<String>,
    /// Active window: start ≤ date ≤ end, both ends inclusive
    pub period: DateRange,
}

impl InsurancePolicy {
    pub fn new(car_id: CarId, provider: Option<String>, period: DateRange) -> Self {
        Self {
            id: PolicyId::new_v7(),
            car_id,
            provider,
            period,
        }
    }

    /// Returns true if the policy is active on the given date
    ///
    /// Boundary dates count as active: a policy ending today is still valid
    /// today.
    pub fn active_on(&self, date: NaiveDate) -> bool {
        self.period.contains(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn policy(start: NaiveDate, end: NaiveDate) -> InsurancePolicy {
        InsurancePolicy::new(
            CarId::new_v7(),
            Some("Allianz".to_string()),
            DateRange::new(start, end).unwrap(),
        )
    }

    #[test]
    fn test_active_on_boundaries() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let p = policy(start, end);

        assert!(p.active_on(start));
        assert!(p.active_on(end));
        assert!(!p.active_on(start - Days::new(1)));
        assert!(!p.active_on(end + Days::new(1)));
    }
}
