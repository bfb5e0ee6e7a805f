use serde::{Deserialize, Serialize};

use faktur_core::{Percent, Rupiah, ValueObject};

/// Order in which the down payment and the two Indonesian taxes are stacked.
///
/// The two policies are not interchangeable: for the same items and rates
/// they produce different totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxPolicy {
    /// Subtract the down payment, then add PPN and PPH, both computed on the
    /// post-deposit amount.
    #[default]
    DownPaymentFirst,
    /// Withhold PPH from the subtotal, then add PPN computed on what is left.
    /// The down payment is not used.
    WithholdingFirst,
}

impl TaxPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxPolicy::DownPaymentFirst => "down-payment-first",
            TaxPolicy::WithholdingFirst => "withholding-first",
        }
    }
}

impl core::str::FromStr for TaxPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "down-payment-first" | "dp-first" | "a" => Ok(TaxPolicy::DownPaymentFirst),
            "withholding-first" | "pph-first" | "b" => Ok(TaxPolicy::WithholdingFirst),
            other => Err(format!(
                "unknown tax policy '{other}' (expected down-payment-first or withholding-first)"
            )),
        }
    }
}

/// Tax and deposit settings for one invoice.
///
/// Rates are clamped to 0..=100 by [`Percent`] and the down payment is never
/// negative, however the config was built or deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TaxConfigRecord")]
pub struct TaxConfig {
    ppn_rate: Percent,
    pph_rate: Percent,
    down_payment: Rupiah,
    policy: TaxPolicy,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TaxConfigRecord {
    ppn_rate: Percent,
    pph_rate: Percent,
    down_payment: Rupiah,
    policy: TaxPolicy,
}

impl From<TaxConfigRecord> for TaxConfig {
    fn from(record: TaxConfigRecord) -> Self {
        TaxConfig::new(record.ppn_rate, record.pph_rate, record.down_payment, record.policy)
    }
}

impl ValueObject for TaxConfig {}

impl TaxConfig {
    pub fn new(ppn_rate: Percent, pph_rate: Percent, down_payment: Rupiah, policy: TaxPolicy) -> Self {
        Self {
            ppn_rate,
            pph_rate,
            down_payment: down_payment.non_negative(),
            policy,
        }
    }

    /// PPN, value-added tax.
    pub fn ppn_rate(&self) -> Percent {
        self.ppn_rate
    }

    /// PPH, withholding tax.
    pub fn pph_rate(&self) -> Percent {
        self.pph_rate
    }

    /// Pre-paid amount; zero when none.
    pub fn down_payment(&self) -> Rupiah {
        self.down_payment
    }

    pub fn policy(&self) -> TaxPolicy {
        self.policy
    }

    pub fn set_ppn_rate(&mut self, rate: Percent) {
        self.ppn_rate = rate;
    }

    pub fn set_pph_rate(&mut self, rate: Percent) {
        self.pph_rate = rate;
    }

    pub fn set_down_payment(&mut self, amount: Rupiah) {
        self.down_payment = amount.non_negative();
    }

    pub fn set_policy(&mut self, policy: TaxPolicy) {
        self.policy = policy;
    }

    /// The same settings under another policy.
    pub fn with_policy(mut self, policy: TaxPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Whether the down payment takes part in the totals under this policy.
    pub fn uses_down_payment(&self) -> bool {
        self.policy == TaxPolicy::DownPaymentFirst && self.down_payment.is_positive()
    }
}
