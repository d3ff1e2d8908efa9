//! Currency model and conversion quotes

use super::money::Money;

/// A supported currency with its rate against USD
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Currency {
    /// ISO code (e.g., "CAD")
    pub code: &'static str,
    pub name: &'static str,
    /// Units of this currency per 1 USD
    pub rate: f64,
    pub symbol: &'static str,
}

impl Currency {
    /// Convert `amount` of this currency into `target`
    pub fn convert(&self, amount: f64, target: &Currency) -> Money {
        Money::from_major(amount * (target.rate / self.rate))
    }

    /// Rate of `target` units per one unit of this currency
    pub fn cross_rate(&self, target: &Currency) -> f64 {
        target.rate / self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USD: Currency = Currency {
        code: "USD",
        name: "US Dollar",
        rate: 1.0,
        symbol: "$",
    };
    const CAD: Currency = Currency {
        code: "CAD",
        name: "Canadian Dollar",
        rate: 1.36,
        symbol: "C$",
    };

    #[test]
    fn test_convert() {
        assert_eq!(USD.convert(100.0, &CAD), Money::from_cents(13600));
        assert_eq!(CAD.convert(136.0, &USD), Money::from_cents(10000));
    }

    #[test]
    fn test_cross_rate() {
        assert!((USD.cross_rate(&CAD) - 1.36).abs() < 1e-9);
    }
}
