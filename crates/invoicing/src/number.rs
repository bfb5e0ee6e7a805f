//! Invoice number generation.
//!
//! Numbers look like `INV-7QX2/BNN/03/2025`. The token is random and nothing
//! is persisted, so two sessions can produce the same number.

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

const TOKEN_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const TOKEN_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceNumberFormat {
    pub prefix: String,
    /// Fixed segment between the token and the month.
    pub office_code: String,
}

impl Default for InvoiceNumberFormat {
    fn default() -> Self {
        Self {
            prefix: "INV".to_string(),
            office_code: "BNN".to_string(),
        }
    }
}

impl InvoiceNumberFormat {
    pub fn new(prefix: impl Into<String>, office_code: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            office_code: office_code.into(),
        }
    }

    /// `{prefix}-{TOKEN}/{office_code}/{MM}/{YYYY}` for the month of `date`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, date: NaiveDate) -> String {
        let token: String = (0..TOKEN_LEN)
            .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
            .collect();
        format!(
            "{}-{}/{}/{:02}/{}",
            self.prefix,
            token,
            self.office_code,
            date.month(),
            date.year()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn march_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    #[test]
    fn number_follows_pattern() {
        let mut rng = StdRng::seed_from_u64(7);
        let number = InvoiceNumberFormat::default().generate(&mut rng, march_2025());

        let (head, tail) = number.split_once('/').unwrap();
        assert_eq!(tail, "BNN/03/2025");
        let token = head.strip_prefix("INV-").unwrap();
        assert_eq!(token.len(), 4);
        assert!(token.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn same_seed_same_number() {
        let format = InvoiceNumberFormat::new("FKT", "JKT");
        let a = format.generate(&mut StdRng::seed_from_u64(42), march_2025());
        let b = format.generate(&mut StdRng::seed_from_u64(42), march_2025());
        assert_eq!(a, b);
        assert!(a.starts_with("FKT-"));
        assert!(a.ends_with("/JKT/03/2025"));
    }
}
