use std::str::FromStr;

use rust_decimal::Decimal;

use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod brand;
pub mod item_category;
pub mod master_material;
pub mod price_revision;
pub mod site;
pub mod supplier;
pub mod supplier_price;

/// Decimal amounts are stored as text to keep them exact in SQLite.
pub(crate) fn parse_amount(column: &str, value: &str) -> RepositoryResult<Decimal> {
    Decimal::from_str(value)
        .map_err(|err| RepositoryError::Corrupted(format!("{column} `{value}`: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_keeps_scale() {
        let amount = parse_amount("price", "100.2500").expect("valid amount");

        assert_eq!(amount.to_string(), "100.2500");
    }

    #[test]
    fn parse_amount_reports_column() {
        let err = parse_amount("new_price", "abc").expect_err("invalid amount");

        match err {
            RepositoryError::Corrupted(message) => assert!(message.contains("new_price")),
            other => panic!("expected corrupted error, got {other:?}"),
        }
    }
}
