use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::{Money, Product, Voucher};
use crate::app_system::CartError;

/// A product in the cart together with how many units were picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product: Product,
    /// Always at least 1; an entry is removed rather than dropped to 0.
    pub quantity: u32,
}

impl CartEntry {
    pub fn line_total(&self) -> Money {
        self.product.price * Money::from(self.quantity)
    }
}

/// Requested delivery slot, shown as `10:30 AM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeliveryTime(NaiveTime);

impl Default for DeliveryTime {
    fn default() -> Self {
        Self(NaiveTime::from_hms_opt(10, 30, 0).unwrap_or(NaiveTime::MIN))
    }
}

impl fmt::Display for DeliveryTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%-I:%M %p"))
    }
}

impl FromStr for DeliveryTime {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%I:%M %p")
            .map(Self)
            .map_err(|_| CartError::InvalidDeliveryTime(s.to_string()))
    }
}

/// One priced line of a [`CartSummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

/// Consistent snapshot of the cart's pricing, recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub item_count: u32,
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub discount: Money,
    pub total: Money,
    pub voucher_code: Option<String>,
    /// False while an applied voucher's minimum order is not met. Informational
    /// only: the discount keeps applying once the voucher was accepted.
    pub voucher_eligible: bool,
    pub delivery_time: DeliveryTime,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The cart ledger: line items plus at most one applied voucher.
///
/// Every mutation either succeeds completely or returns an error and leaves
/// the cart exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: String,
    entries: Vec<CartEntry>,
    voucher: Option<Voucher>,
    delivery_fee: Money,
    max_line_quantity: Option<u32>,
    delivery_time: DeliveryTime,
}

impl Cart {
    pub fn new(id: impl Into<String>, delivery_fee: Money, max_line_quantity: Option<u32>) -> Self {
        Self {
            id: id.into(),
            entries: Vec::new(),
            voucher: None,
            delivery_fee,
            max_line_quantity,
            delivery_time: DeliveryTime::default(),
        }
    }

    #[allow(dead_code)]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    #[allow(dead_code)]
    pub fn entry(&self, product_id: &str) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product.id == product_id)
    }

    #[allow(dead_code)]
    pub fn voucher(&self) -> Option<&Voucher> {
        self.voucher.as_ref()
    }

    #[allow(dead_code)]
    pub fn delivery_time(&self) -> DeliveryTime {
        self.delivery_time
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_limit(&self, quantity: u32) -> Result<(), CartError> {
        match self.max_line_quantity {
            Some(max) if quantity > max => Err(CartError::QuantityLimit { requested: quantity, max }),
            _ => Ok(()),
        }
    }

    /// Adds `quantity` units, merging into an existing line for the same product.
    ///
    /// Returns the line's new quantity.
    pub fn add_item(&mut self, product: Product, quantity: u32) -> Result<u32, CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        match self.entries.iter_mut().find(|e| e.product.id == product.id) {
            Some(entry) => {
                let merged = entry
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CartError::InvalidQuantity(quantity))?;
                if let Some(max) = self.max_line_quantity {
                    if merged > max {
                        return Err(CartError::QuantityLimit { requested: merged, max });
                    }
                }
                entry.quantity = merged;
                Ok(merged)
            }
            None => {
                self.check_limit(quantity)?;
                self.entries.push(CartEntry { product, quantity });
                Ok(quantity)
            }
        }
    }

    /// Sets a line's quantity exactly. Quantities below 1 are rejected.
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) -> Result<(), CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        self.check_limit(quantity)?;
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.product.id == product_id)
            .ok_or_else(|| CartError::NotInCart(product_id.to_string()))?;
        entry.quantity = quantity;
        Ok(())
    }

    /// Deletes the line for `product_id`. Returns whether anything was removed.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.product.id != product_id);
        self.entries.len() != before
    }

    /// Applies `voucher`, replacing any previous one, if the subtotal qualifies.
    pub fn apply_voucher(&mut self, voucher: Voucher) -> Result<(), CartError> {
        let subtotal = self.subtotal();
        if !voucher.is_eligible(subtotal) {
            return Err(CartError::BelowMinimumOrder {
                code: voucher.code,
                min_order: voucher.min_order,
                subtotal,
            });
        }
        self.voucher = Some(voucher);
        Ok(())
    }

    pub fn remove_voucher(&mut self) -> Option<Voucher> {
        self.voucher.take()
    }

    pub fn set_delivery_time(&mut self, time: DeliveryTime) {
        self.delivery_time = time;
    }

    /// Empties the cart and drops the voucher. Delivery slot is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.voucher = None;
    }

    /// Takes an ordered snapshot out of the cart: each line loses the quantity
    /// that was ordered and the ordered voucher is dropped. Anything added after
    /// the snapshot was taken stays.
    pub fn settle(&mut self, ordered: &CartSummary) {
        for line in &ordered.lines {
            if let Some(entry) = self.entries.iter_mut().find(|e| e.product.id == line.product_id) {
                entry.quantity = entry.quantity.saturating_sub(line.quantity);
            }
        }
        self.entries.retain(|e| e.quantity > 0);
        let ordered_voucher = ordered.voucher_code.as_deref();
        if self.voucher.as_ref().map(|v| v.code.as_str()) == ordered_voucher {
            self.voucher = None;
        }
    }

    pub fn item_count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    pub fn subtotal(&self) -> Money {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    pub fn delivery_fee(&self) -> Money {
        self.delivery_fee
    }

    pub fn discount(&self) -> Money {
        self.voucher
            .as_ref()
            .map_or(Money::ZERO, |v| v.discount_on(self.subtotal()))
    }

    pub fn total(&self) -> Money {
        self.subtotal() + self.delivery_fee - self.discount()
    }

    pub fn summary(&self) -> CartSummary {
        let subtotal = self.subtotal();
        let discount = self.discount();
        CartSummary {
            lines: self
                .entries
                .iter()
                .map(|e| CartLine {
                    product_id: e.product.id.clone(),
                    name: e.product.name.en.clone(),
                    quantity: e.quantity,
                    unit_price: e.product.price,
                    line_total: e.line_total(),
                })
                .collect(),
            item_count: self.item_count(),
            subtotal,
            delivery_fee: self.delivery_fee,
            discount,
            total: subtotal + self.delivery_fee - discount,
            voucher_code: self.voucher.as_ref().map(|v| v.code.clone()),
            voucher_eligible: self.voucher.as_ref().map_or(true, |v| v.is_eligible(subtotal)),
            delivery_time: self.delivery_time,
        }
    }
}
