//! Scheduled policy-expiry logging
//!
//! Once per day, shortly after UTC midnight, the logger reports every policy
//! whose coverage ended the previous day. Pure observation; nothing is
//! written back.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Days, NaiveTime, Utc};
use tracing::{info, warn};

use core_kernel::{Clock, StoreError};
use domain_insurance::PolicyStore;

pub struct PolicyExpiryLogger {
    policies: Arc<dyn PolicyStore>,
    clock: Arc<dyn Clock>,
}

impl PolicyExpiryLogger {
    pub fn new(policies: Arc<dyn PolicyStore>, clock: Arc<dyn Clock>) -> Self {
        Self { policies, clock }
    }

    /// Runs forever, reporting once per UTC day
    pub async fn run(self) {
        loop {
            tokio::time::sleep(until_next_utc_midnight()).await;
            if let Err(e) = self.log_expired_yesterday().await {
                warn!(error = %e, "Policy expiry check failed");
            }
        }
    }

    /// Logs every policy whose end date was yesterday, returning the count
    pub async fn log_expired_yesterday(&self) -> Result<usize, StoreError> {
        let today = self.clock.today();
        let Some(yesterday) = today.pred_opt() else {
            return Ok(0);
        };

        let expired = self.policies.find_expired_on(yesterday).await?;
        for policy in &expired {
            info!(
                policy_id = %policy.id,
                car_id = %policy.car_id,
                end_date = %policy.period.end,
                "Insurance policy expired yesterday"
            );
        }

        Ok(expired.len())
    }
}

fn until_next_utc_midnight() -> Duration {
    let now = Utc::now();
    let next = (now.date_naive() + Days::new(1))
        .and_time(NaiveTime::MIN)
        .and_utc();
    // Falls back to a minute if the clock jumps backwards mid-computation
    (next - now).to_std().unwrap_or(Duration::from_secs(60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{CarId, DateRange, FixedClock};
    use domain_insurance::ports::mock::MockPolicyStore;
    use domain_insurance::InsurancePolicy;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn policy_ending(end: NaiveDate) -> InsurancePolicy {
        InsurancePolicy::new(
            CarId::new_v7(),
            Some("Allianz".to_string()),
            DateRange::new(date(2020, 1, 1), end).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_reports_policies_that_ended_yesterday() {
        let policies = Arc::new(
            MockPolicyStore::with_policies(vec![
                policy_ending(date(2025, 6, 14)),
                policy_ending(date(2025, 6, 14)),
                policy_ending(date(2025, 6, 15)),
            ])
            .await,
        );
        let clock = Arc::new(FixedClock::at(date(2025, 6, 15)));

        let logger = PolicyExpiryLogger::new(policies, clock);
        assert_eq!(logger.log_expired_yesterday().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_quiet_day_reports_nothing() {
        let policies = Arc::new(MockPolicyStore::new());
        let clock = Arc::new(FixedClock::at(date(2025, 6, 15)));

        let logger = PolicyExpiryLogger::new(policies, clock);
        assert_eq!(logger.log_expired_yesterday().await.unwrap(), 0);
    }

    #[test]
    fn test_sleep_is_at_most_a_day() {
        assert!(until_next_utc_midnight() <= Duration::from_secs(24 * 60 * 60));
    }
}
