use std::time::Duration;

use chrono::Local;
use tracing::{error, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::app_system::OrderError;
use crate::clients::CartClient;
use crate::domain::{Order, OrderCreate, OrderProgress, PaymentMethod};
use crate::order_actor::{EtaTicker, OrderAction};

/// What the shopper enters on the checkout screen.
#[derive(Debug, Clone)]
pub struct CheckoutDetails {
    pub address: String,
    pub payment: PaymentMethod,
}

/// Client for interacting with the Order actor.
///
/// Checkout is orchestrated here: the cart is read, turned into an order and
/// the ordered lines are then settled out of it.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    cart_client: CartClient,
    eta_minutes: u32,
    tick_interval: Duration,
}

impl_client_methods!(OrderClient, Order, OrderError, order);

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, cart_client: CartClient, eta_minutes: u32, tick_interval: Duration) -> Self {
        Self {
            inner,
            cart_client,
            eta_minutes,
            tick_interval,
        }
    }

    /// Places an order from the cart's current contents. Returns the order id.
    ///
    /// Once the order exists the ordered lines are taken out of the cart in a
    /// single cart action; items added in the meantime stay in the cart.
    ///
    /// # Errors
    /// `OrderError::EmptyCart` if there is nothing to order. Failing to settle
    /// the cart afterwards is logged, not returned: the order stands.
    #[instrument(skip(self, details), fields(payment = ?details.payment))]
    pub async fn checkout(&self, cart_id: String, details: CheckoutDetails) -> Result<String, OrderError> {
        info!("Processing checkout request (Client Side)");

        let summary = self.cart_client.summary(cart_id.clone()).await.map_err(|e| {
            error!(error = %e, "Cart lookup failed");
            e
        })?;
        if summary.is_empty() {
            return Err(OrderError::EmptyCart(cart_id));
        }
        info!(items = summary.item_count, total = %summary.total, "Cart snapshot taken");

        let payload = OrderCreate {
            created_on: Local::now().date_naive(),
            summary: summary.clone(),
            address: details.address,
            payment: details.payment,
            eta_minutes: self.eta_minutes,
        };
        let order_id = self.inner.create(payload).await?;

        if let Err(e) = self.cart_client.settle(cart_id, summary).await {
            error!(error = %e, %order_id, "Order placed but cart could not be settled");
        }

        info!(%order_id, "Order placed");
        Ok(order_id)
    }

    /// Loads past orders under their own ids.
    #[instrument(skip_all, fields(count = orders.len()))]
    pub async fn seed(&self, orders: Vec<Order>) -> Result<(), OrderError> {
        for order in orders {
            self.inner.insert(order.id.clone(), order).await?;
        }
        Ok(())
    }

    /// Order history, newest first.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.inner.list().await?;
        orders.sort_by(|a, b| b.created_on.cmp(&a.created_on).then_with(|| b.id.cmp(&a.id)));
        Ok(orders)
    }

    #[instrument(skip(self))]
    pub async fn progress(&self, order_id: String) -> Result<OrderProgress, OrderError> {
        Ok(self.inner.perform_action(order_id, OrderAction::Progress).await?.into_progress())
    }

    /// Moves the order one stage forward.
    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn advance(&self, order_id: String) -> Result<OrderProgress, OrderError> {
        Ok(self.inner.perform_action(order_id, OrderAction::Advance).await?.into_progress())
    }

    /// Starts the countdown for an order. Dropping the ticker stops it.
    #[instrument(skip(self))]
    pub fn start_tracking(&self, order_id: String) -> EtaTicker {
        info!(period = ?self.tick_interval, "Tracking order");
        EtaTicker::spawn(self.inner.clone(), order_id, self.tick_interval)
    }
}
