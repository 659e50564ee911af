use serde::{Deserialize, Serialize};

use super::{LocalizedText, Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// `value` is a percentage of the subtotal.
    Percentage,
    /// `value` is a flat amount in rupees.
    Fixed,
}

/// A named discount rule with a minimum order threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voucher {
    pub id: String,
    pub code: String,
    pub title: LocalizedText,
    pub kind: DiscountKind,
    pub value: Money,
    pub min_order: Money,
}

impl Voucher {
    pub fn percentage(code: impl Into<String>, percent: Money, min_order: Money) -> Self {
        Self::build(code.into(), DiscountKind::Percentage, percent, min_order)
    }

    pub fn fixed(code: impl Into<String>, amount: Money, min_order: Money) -> Self {
        Self::build(code.into(), DiscountKind::Fixed, amount, min_order)
    }

    fn build(code: String, kind: DiscountKind, value: Money, min_order: Money) -> Self {
        let title = match kind {
            DiscountKind::Percentage => LocalizedText::new(format!("{value}% Off"), format!("{value}% چھوٹ")),
            DiscountKind::Fixed => LocalizedText::new(format!("Rs. {value} Off"), format!("{value} روپے چھوٹ")),
        };
        Self {
            id: code.to_lowercase(),
            code,
            title,
            kind,
            value,
            min_order,
        }
    }

    pub fn with_title(mut self, title: LocalizedText) -> Self {
        self.title = title;
        self
    }

    pub fn is_eligible(&self, subtotal: Money) -> bool {
        subtotal >= self.min_order
    }

    /// Discount this voucher grants on `subtotal`, clamped to `0..=subtotal`.
    ///
    /// The minimum order is only checked when the voucher is applied.
    pub fn discount_on(&self, subtotal: Money) -> Money {
        let raw = match self.kind {
            DiscountKind::Percentage => subtotal * self.value / Money::ONE_HUNDRED,
            DiscountKind::Fixed => self.value,
        };
        raw.max(Money::ZERO).min(subtotal)
    }
}
