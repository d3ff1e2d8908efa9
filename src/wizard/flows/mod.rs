//! The concrete money-movement and card flows

pub mod add;
pub mod convert;
pub mod create_card;
pub mod send;

use crate::models::is_positive_amount;

use super::FieldMap;

/// Field shared by every flow that moves money
pub const AMOUNT: &str = "amount";

/// Guard for amount steps: non-empty and parsing to a value above zero
pub fn amount_is_positive(fields: &FieldMap) -> bool {
    fields.get(AMOUNT).is_some_and(|a| is_positive_amount(a))
}

/// Read a field, treating an absent one as empty
pub(crate) fn field_or_empty<'a>(fields: &'a FieldMap, name: &str) -> &'a str {
    fields.get(name).map(String::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_amount(value: &str) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert(AMOUNT.into(), value.into());
        fields
    }

    #[test]
    fn test_amount_guard() {
        assert!(!amount_is_positive(&FieldMap::new()));
        for rejected in ["", "0", "-5", "0.00", "abc", "1e300"] {
            assert!(!amount_is_positive(&with_amount(rejected)), "{rejected}");
        }
        // The leading-prefix parse accepts trailing garbage
        for accepted in ["5", "5.00", "5x", "12.5x"] {
            assert!(amount_is_positive(&with_amount(accepted)), "{accepted}");
        }
    }
}
