//! Startup state

use serde::{Deserialize, Serialize};

use super::{LegalForm, Metric, Stage};
use crate::config::GameConfig;

/// The company being simulated
///
/// `cash` may go negative; nothing in the engine floors it. The three
/// percentage metrics stay within `[0, 100]`, and `month` only ever grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Startup {
    pub name: String,
    pub legal_form: Option<LegalForm>,
    pub stage: Stage,
    pub cash: i64,
    pub monthly_burn: i64,
    pub monthly_revenue: i64,
    pub customers: i64,
    pub employees: i64,
    pub product_development: i64,
    pub market_validation: i64,
    pub brand_awareness: i64,
    pub month: u32,
    pub location: String,
    pub industry: String,
}

impl Startup {
    /// Create a freshly founded startup in the idea stage
    pub fn new(name: impl Into<String>, industry: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            name: name.into(),
            legal_form: None,
            stage: Stage::Idea,
            cash: config.initial_cash,
            monthly_burn: config.initial_monthly_burn,
            monthly_revenue: 0,
            customers: 0,
            employees: 0,
            product_development: 0,
            market_validation: 0,
            brand_awareness: 0,
            month: 1,
            location: config.location.clone(),
            industry: industry.into(),
        }
    }

    /// Read a metric by name
    #[inline]
    pub fn metric(&self, metric: Metric) -> i64 {
        match metric {
            Metric::Cash => self.cash,
            Metric::MonthlyBurn => self.monthly_burn,
            Metric::MonthlyRevenue => self.monthly_revenue,
            Metric::Customers => self.customers,
            Metric::Employees => self.employees,
            Metric::ProductDevelopment => self.product_development,
            Metric::MarketValidation => self.market_validation,
            Metric::BrandAwareness => self.brand_awareness,
            Metric::Month => i64::from(self.month),
        }
    }

    /// Net cash change of one month at current rates
    #[inline]
    pub fn monthly_net(&self) -> i64 {
        self.monthly_revenue.saturating_sub(self.monthly_burn)
    }

    /// Whole months the current cash lasts at the current burn
    ///
    /// `None` when nothing is being burned, i.e. the runway is unbounded.
    pub fn runway_months(&self) -> Option<i64> {
        if self.monthly_burn > 0 {
            Some(self.cash.div_euclid(self.monthly_burn))
        } else {
            None
        }
    }

    /// Runway is known and shorter than `threshold_months`
    pub fn is_low_on_cash(&self, threshold_months: i64) -> bool {
        self.runway_months()
            .map(|months| months < threshold_months)
            .unwrap_or(false)
    }

    /// Rounded mean of product development, market validation and brand
    /// awareness
    pub fn overall_progress(&self) -> i64 {
        let sum = self.product_development + self.market_validation + self.brand_awareness;
        (sum + 1).div_euclid(3)
    }
}
