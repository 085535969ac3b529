//! Company identifier derivation.

/// Two-letter prefix of every company id.
pub const COMPANY_ID_PREFIX: &str = "GB";

/// Number of zero-padded digits after the prefix (room for 1B+ records).
pub const COMPANY_ID_WIDTH: usize = 12;

/// Derive the company id for a sequence index.
///
/// The numeric part is `index + 1`, so index 0 maps to `GB000000000001`.
/// No randomness is involved: distinct indices always give distinct ids.
pub fn company_id(index: u64) -> String {
    format!(
        "{COMPANY_ID_PREFIX}{:0width$}",
        index + 1,
        width = COMPANY_ID_WIDTH
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_company_id_format() {
        assert_eq!(company_id(0), "GB000000000001");
        assert_eq!(company_id(61), "GB000000000062");
        assert_eq!(company_id(999_999_999_998), "GB999999999999");
    }

    #[test]
    fn test_company_id_fixed_width() {
        for index in [0, 9, 10, 12_345, 98_765_432] {
            let id = company_id(index);
            assert_eq!(id.len(), COMPANY_ID_PREFIX.len() + COMPANY_ID_WIDTH);
            assert!(id.starts_with(COMPANY_ID_PREFIX));
        }
    }

    #[test]
    fn test_company_id_unique_and_recoverable() {
        let ids: HashSet<String> = (0..10_000).map(company_id).collect();
        assert_eq!(ids.len(), 10_000);

        for index in [0u64, 1, 249, 9_999] {
            let id = company_id(index);
            let number: u64 = id[COMPANY_ID_PREFIX.len()..].parse().unwrap();
            assert_eq!(number, index + 1);
        }
    }
}
