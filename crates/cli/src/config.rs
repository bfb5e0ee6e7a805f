//! Runtime configuration from environment variables.

use faktur_invoicing::{InvoiceNumberFormat, Layout, TaxPolicy};
use faktur_observability::LogFormat;

pub const ENV_LAYOUT: &str = "FAKTUR_LAYOUT";
pub const ENV_POLICY: &str = "FAKTUR_POLICY";
pub const ENV_INVOICE_PREFIX: &str = "FAKTUR_INVOICE_PREFIX";
pub const ENV_OFFICE_CODE: &str = "FAKTUR_OFFICE_CODE";
pub const ENV_LOG_FORMAT: &str = "FAKTUR_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub layout: Layout,
    /// Used when the input document does not name a policy.
    pub policy: TaxPolicy,
    pub number_format: InvoiceNumberFormat,
    pub log_format: LogFormat,
    /// Problems found while reading the environment, reported once logging
    /// is up. Each one fell back to the default.
    pub warnings: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(raw) = lookup(ENV_LAYOUT) {
            match raw.parse() {
                Ok(layout) => config.layout = layout,
                Err(e) => config.warnings.push(format!("{ENV_LAYOUT}: {e}")),
            }
        }
        if let Some(raw) = lookup(ENV_POLICY) {
            match raw.parse() {
                Ok(policy) => config.policy = policy,
                Err(e) => config.warnings.push(format!("{ENV_POLICY}: {e}")),
            }
        }
        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            match raw.parse() {
                Ok(format) => config.log_format = format,
                Err(e) => config.warnings.push(format!("{ENV_LOG_FORMAT}: {e}")),
            }
        }
        if let Some(prefix) = lookup(ENV_INVOICE_PREFIX).filter(|v| !v.trim().is_empty()) {
            config.number_format.prefix = prefix.trim().to_string();
        }
        if let Some(code) = lookup(ENV_OFFICE_CODE).filter(|v| !v.trim().is_empty()) {
            config.number_format.office_code = code.trim().to_string();
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config(&[]);
        assert_eq!(config.layout, Layout::Compact);
        assert_eq!(config.policy, TaxPolicy::DownPaymentFirst);
        assert_eq!(config.number_format, InvoiceNumberFormat::default());
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn reads_every_variable() {
        let config = config(&[
            (ENV_LAYOUT, "letterhead"),
            (ENV_POLICY, "withholding-first"),
            (ENV_INVOICE_PREFIX, "FKT"),
            (ENV_OFFICE_CODE, " SBY "),
            (ENV_LOG_FORMAT, "pretty"),
        ]);
        assert_eq!(config.layout, Layout::Letterhead);
        assert_eq!(config.policy, TaxPolicy::WithholdingFirst);
        assert_eq!(config.number_format, InvoiceNumberFormat::new("FKT", "SBY"));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn bad_values_fall_back_with_a_warning() {
        let config = config(&[(ENV_LAYOUT, "poster"), (ENV_POLICY, "?"), (ENV_OFFICE_CODE, "  ")]);
        assert_eq!(config.layout, Layout::Compact);
        assert_eq!(config.policy, TaxPolicy::DownPaymentFirst);
        assert_eq!(config.number_format.office_code, "BNN");
        assert_eq!(config.warnings.len(), 2);
        assert!(config.warnings[0].starts_with(ENV_LAYOUT));
    }
}
