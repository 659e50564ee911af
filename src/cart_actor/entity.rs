use tracing::{debug, info};

use super::actions::{CartAction, CartActionResult};
use crate::actor_framework::Entity;
use crate::app_system::CartError;
use crate::domain::{Cart, Money};

/// Payload for opening a new cart.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub delivery_fee: Money,
    pub max_line_quantity: Option<u32>,
}

impl Entity for Cart {
    type Id = String;
    type CreateParams = CartCreate;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Error = CartError;

    fn from_create_params(id: String, params: CartCreate) -> Result<Self, CartError> {
        Ok(Cart::new(id, params.delivery_fee, params.max_line_quantity))
    }

    fn on_create(&mut self) -> Result<(), CartError> {
        debug!(cart_id = %self.id, "Cart opened");
        Ok(())
    }

    fn on_delete(&self) -> Result<(), CartError> {
        debug!(cart_id = %self.id, items = self.item_count(), "Cart closed");
        Ok(())
    }


    /// Dispatches a ledger operation.
    ///
    /// # Errors
    /// Propagates the ledger's rejection; the cart is unchanged in that case.
    fn handle_action(&mut self, action: CartAction) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::AddItem { product, quantity } => {
                let product_id = product.id.clone();
                let quantity = self.add_item(product, quantity)?;
                info!(cart_id = %self.id, %product_id, quantity, "Item added");
                Ok(CartActionResult::AddItem { quantity })
            }
            CartAction::UpdateQuantity { product_id, quantity } => {
                self.update_quantity(&product_id, quantity)?;
                info!(cart_id = %self.id, %product_id, quantity, "Quantity updated");
                Ok(CartActionResult::UpdateQuantity)
            }
            CartAction::RemoveItem { product_id } => {
                let removed = self.remove_item(&product_id);
                info!(cart_id = %self.id, %product_id, removed, "Item removed");
                Ok(CartActionResult::RemoveItem { removed })
            }
            CartAction::ApplyVoucher(voucher) => {
                let code = voucher.code.clone();
                self.apply_voucher(voucher)?;
                info!(cart_id = %self.id, %code, "Voucher applied");
                Ok(CartActionResult::ApplyVoucher)
            }
            CartAction::RemoveVoucher => Ok(CartActionResult::RemoveVoucher(self.remove_voucher())),
            CartAction::SetDeliveryTime(time) => {
                self.set_delivery_time(time);
                info!(cart_id = %self.id, delivery_time = %time, "Delivery time set");
                Ok(CartActionResult::SetDeliveryTime)
            }
            CartAction::Summary => Ok(CartActionResult::Summary(self.summary())),
            CartAction::Clear => {
                let summary = self.summary();
                self.clear();
                Ok(CartActionResult::Clear(summary))
            }
            CartAction::Settle(ordered) => {
                self.settle(&ordered);
                info!(cart_id = %self.id, remaining = self.item_count(), "Ordered items settled");
                Ok(CartActionResult::Settle(self.summary()))
            }
        }
    }
}
