use crate::domain::{CartSummary, DeliveryTime, Product, Voucher};

/// Custom actions for Cart entities.
///
/// A rejected action leaves the cart exactly as it was.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds units of a product, merging with an existing line.
    AddItem { product: Product, quantity: u32 },
    /// Sets a line's quantity exactly. Rejected below 1.
    #[allow(dead_code)]
    UpdateQuantity { product_id: String, quantity: u32 },
    /// Deletes a line. Succeeds even if the product is absent.
    #[allow(dead_code)]
    RemoveItem { product_id: String },
    /// Replaces the applied voucher if the subtotal meets its minimum.
    ApplyVoucher(Voucher),
    #[allow(dead_code)]
    RemoveVoucher,
    SetDeliveryTime(DeliveryTime),
    /// Read-only pricing snapshot.
    Summary,
    /// Empties the cart, returning the summary it had just before.
    #[allow(dead_code)]
    Clear,
    /// Removes an ordered snapshot from the cart, returning what is left.
    Settle(CartSummary),
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone)]
pub enum CartActionResult {
    AddItem { quantity: u32 },
    UpdateQuantity,
    RemoveItem { removed: bool },
    ApplyVoucher,
    RemoveVoucher(Option<Voucher>),
    SetDeliveryTime,
    Summary(CartSummary),
    Clear(CartSummary),
    Settle(CartSummary),
}
