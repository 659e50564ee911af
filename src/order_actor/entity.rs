use tracing::info;

use super::actions::{OrderAction, OrderActionResult};
use crate::actor_framework::Entity;
use crate::app_system::OrderError;
use crate::domain::{Order, OrderCreate};

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Error = OrderError;

    /// Creates a new Order from a cart snapshot.
    ///
    /// # Notes
    /// The order starts at `FindingRider` with the full ETA remaining.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, OrderError> {
        if params.summary.is_empty() {
            return Err(OrderError::EmptyCart(id));
        }
        if params.address.trim().is_empty() {
            return Err(OrderError::MissingAddress);
        }
        Ok(Order::from_summary(id, params))
    }


    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Advance => {
                let stage = self
                    .advance()
                    .ok_or_else(|| OrderError::AlreadyDelivered(self.id.clone()))?;
                info!(order_id = %self.id, %stage, "Order advanced");
                Ok(OrderActionResult::Advance(self.progress()))
            }
            OrderAction::Tick => {
                let before = self.stage();
                let after = self.tick();
                if after != before {
                    info!(order_id = %self.id, from = %before, to = %after, "Order stage changed");
                }
                Ok(OrderActionResult::Tick(self.progress()))
            }
            OrderAction::Progress => Ok(OrderActionResult::Progress(self.progress())),
        }
    }
}
