//! Totals calculation.
//!
//! `calculate` is the only place totals are produced. It is a pure function of
//! the line items and the tax configuration, so callers recompute after every
//! edit instead of patching a stored `Totals`.

use serde::{Deserialize, Serialize};

use faktur_core::{Percent, Rupiah};

use crate::line_item::LineItem;
use crate::tax::{TaxConfig, TaxPolicy};

/// Derived amounts for one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub policy: TaxPolicy,
    /// Exact sum of the line totals.
    pub subtotal: Rupiah,
    /// Amount PPN is computed on: the post-deposit amount under
    /// `DownPaymentFirst`, the amount net of PPH under `WithholdingFirst`.
    /// Never negative.
    pub taxable_base: Rupiah,
    pub ppn_amount: Rupiah,
    pub pph_amount: Rupiah,
    pub total: Rupiah,
}

impl Totals {
    /// Totals of an empty invoice.
    pub fn zero(policy: TaxPolicy) -> Self {
        Self {
            policy,
            subtotal: Rupiah::ZERO,
            taxable_base: Rupiah::ZERO,
            ppn_amount: Rupiah::ZERO,
            pph_amount: Rupiah::ZERO,
            total: Rupiah::ZERO,
        }
    }

    /// The rows of the summary block, in display order.
    ///
    /// Tax rows appear only for non-zero rates and the down payment row only
    /// when it took part in the computation.
    pub fn summary(&self, tax: &TaxConfig) -> Vec<SummaryLine> {
        let mut lines = vec![SummaryLine::new(SummaryKind::Subtotal, self.subtotal, Effect::Neutral)];

        match self.policy {
            TaxPolicy::DownPaymentFirst => {
                if tax.uses_down_payment() {
                    lines.push(SummaryLine::new(
                        SummaryKind::DownPayment,
                        tax.down_payment(),
                        Effect::Deduction,
                    ));
                }
                if !tax.ppn_rate().is_zero() {
                    lines.push(SummaryLine::new(
                        SummaryKind::Ppn(tax.ppn_rate()),
                        self.ppn_amount,
                        Effect::Addition,
                    ));
                }
                if !tax.pph_rate().is_zero() {
                    lines.push(SummaryLine::new(
                        SummaryKind::Pph(tax.pph_rate()),
                        self.pph_amount,
                        Effect::Addition,
                    ));
                }
            }
            TaxPolicy::WithholdingFirst => {
                if !tax.pph_rate().is_zero() {
                    lines.push(SummaryLine::new(
                        SummaryKind::Pph(tax.pph_rate()),
                        self.pph_amount,
                        Effect::Deduction,
                    ));
                }
                if !tax.ppn_rate().is_zero() {
                    lines.push(SummaryLine::new(
                        SummaryKind::Ppn(tax.ppn_rate()),
                        self.ppn_amount,
                        Effect::Addition,
                    ));
                }
            }
        }

        lines.push(SummaryLine::new(SummaryKind::Total, self.total, Effect::Neutral));
        lines
    }
}

/// What a summary row stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    Subtotal,
    DownPayment,
    Ppn(Percent),
    Pph(Percent),
    Total,
}

/// How a summary row moves the running amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Neutral,
    Addition,
    Deduction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLine {
    pub kind: SummaryKind,
    pub amount: Rupiah,
    pub effect: Effect,
}

impl SummaryLine {
    fn new(kind: SummaryKind, amount: Rupiah, effect: Effect) -> Self {
        Self { kind, amount, effect }
    }
}

/// Compute the totals for `items` under `tax`.
pub fn calculate(items: &[LineItem], tax: &TaxConfig) -> Totals {
    let subtotal: Rupiah = items.iter().map(LineItem::line_total).sum::<Rupiah>().non_negative();

    match tax.policy() {
        TaxPolicy::DownPaymentFirst => {
            let after_down_payment = subtotal.saturating_sub(tax.down_payment());
            let ppn_amount = tax.ppn_rate().of(after_down_payment);
            let pph_amount = tax.pph_rate().of(after_down_payment);
            Totals {
                policy: tax.policy(),
                subtotal,
                taxable_base: after_down_payment,
                ppn_amount,
                pph_amount,
                total: after_down_payment + ppn_amount + pph_amount,
            }
        }
        TaxPolicy::WithholdingFirst => {
            let pph_amount = tax.pph_rate().of(subtotal);
            let base_after_withholding = subtotal.saturating_sub(pph_amount);
            let ppn_amount = tax.ppn_rate().of(base_after_withholding);
            Totals {
                policy: tax.policy(),
                subtotal,
                taxable_base: base_after_withholding,
                ppn_amount,
                pph_amount,
                total: base_after_withholding + ppn_amount,
            }
        }
    }
}
