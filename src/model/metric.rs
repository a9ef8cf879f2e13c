//! Numeric startup metrics addressable by name

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric field of [`Startup`](super::Startup) that conditions and
/// milestone requirements can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Cash,
    MonthlyBurn,
    MonthlyRevenue,
    Customers,
    Employees,
    ProductDevelopment,
    MarketValidation,
    BrandAwareness,
    Month,
}

impl Metric {
    pub const ALL: [Metric; 9] = [
        Metric::Cash,
        Metric::MonthlyBurn,
        Metric::MonthlyRevenue,
        Metric::Customers,
        Metric::Employees,
        Metric::ProductDevelopment,
        Metric::MarketValidation,
        Metric::BrandAwareness,
        Metric::Month,
    ];

    /// Key used in content files and condition strings
    pub fn key(self) -> &'static str {
        match self {
            Metric::Cash => "cash",
            Metric::MonthlyBurn => "monthlyBurn",
            Metric::MonthlyRevenue => "monthlyRevenue",
            Metric::Customers => "customers",
            Metric::Employees => "employees",
            Metric::ProductDevelopment => "productDevelopment",
            Metric::MarketValidation => "marketValidation",
            Metric::BrandAwareness => "brandAwareness",
            Metric::Month => "month",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_lookup() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_key(metric.key()), Some(metric));
        }
        assert_eq!(Metric::from_key("CASH"), None);
        assert_eq!(Metric::from_key("energy"), None);
    }

    #[test]
    fn test_serde_keys_match() {
        for metric in Metric::ALL {
            let json = serde_json::to_string(&metric).unwrap();
            assert_eq!(json, format!("\"{}\"", metric.key()));
        }
    }
}
