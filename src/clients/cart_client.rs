use std::sync::Arc;

use tracing::{debug, error, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::app_system::CartError;
use crate::cart_actor::{CartAction, CartActionResult, CartCreate};
use crate::clients::CatalogClient;
use crate::domain::{Cart, CartSummary, DeliveryTime, Voucher};
use crate::vouchers::VoucherBook;

/// Client for interacting with the cart actor.
///
/// Product and voucher lookups happen here, before the cart sees the request,
/// so a cart only ever holds products that existed and were in stock when added.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
    catalog: CatalogClient,
    vouchers: Arc<VoucherBook>,
    defaults: CartCreate,
}

impl_client_methods!(CartClient, Cart, CartError, cart);

impl CartClient {
    pub fn new(
        inner: ResourceClient<Cart>,
        catalog: CatalogClient,
        vouchers: Arc<VoucherBook>,
        defaults: CartCreate,
    ) -> Self {
        Self {
            inner,
            catalog,
            vouchers,
            defaults,
        }
    }

    #[instrument(skip(self))]
    pub async fn open_cart(&self) -> Result<String, CartError> {
        debug!("Sending request");
        Ok(self.inner.create(self.defaults.clone()).await?)
    }

    /// Discards the cart once the shopping session is over.
    #[instrument(skip(self))]
    pub async fn close_cart(&self, cart_id: String) -> Result<(), CartError> {
        debug!("Sending request");
        Ok(self.inner.delete(cart_id).await?)
    }

    async fn act(&self, cart_id: String, action: CartAction) -> Result<CartActionResult, CartError> {
        Ok(self.inner.perform_action(cart_id, action).await?)
    }

    /// Adds a catalog product to the cart. Returns the line's new quantity.
    #[instrument(skip(self))]
    pub async fn add_product(&self, cart_id: String, product_id: String, quantity: u32) -> Result<u32, CartError> {
        let product = match self.catalog.get_product(product_id.clone()).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                error!("Product not found");
                return Err(CartError::ProductNotFound(product_id));
            }
            Err(e) => {
                error!(error = %e, "Product lookup failed");
                return Err(CartError::ActorCommunicationError(e.to_string()));
            }
        };
        if !product.in_stock {
            info!("Product is out of stock");
            return Err(CartError::OutOfStock(product_id));
        }

        match self.act(cart_id, CartAction::AddItem { product, quantity }).await? {
            CartActionResult::AddItem { quantity } => Ok(quantity),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn update_quantity(&self, cart_id: String, product_id: String, quantity: u32) -> Result<(), CartError> {
        debug!("Sending request");
        self.act(cart_id, CartAction::UpdateQuantity { product_id, quantity })
            .await
            .map(|_| ())
    }

    /// Returns whether a line was removed.
    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn remove_item(&self, cart_id: String, product_id: String) -> Result<bool, CartError> {
        debug!("Sending request");
        match self.act(cart_id, CartAction::RemoveItem { product_id }).await? {
            CartActionResult::RemoveItem { removed } => Ok(removed),
            other => Err(unexpected(other)),
        }
    }

    /// Resolves `code` in the voucher book and applies it.
    #[instrument(skip(self))]
    pub async fn apply_voucher_code(&self, cart_id: String, code: &str) -> Result<Voucher, CartError> {
        let voucher = self
            .vouchers
            .find(code)
            .cloned()
            .ok_or_else(|| CartError::UnknownVoucher(code.trim().to_string()))?;
        self.act(cart_id, CartAction::ApplyVoucher(voucher.clone())).await?;
        Ok(voucher)
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn remove_voucher(&self, cart_id: String) -> Result<Option<Voucher>, CartError> {
        debug!("Sending request");
        match self.act(cart_id, CartAction::RemoveVoucher).await? {
            CartActionResult::RemoveVoucher(voucher) => Ok(voucher),
            other => Err(unexpected(other)),
        }
    }

    /// Accepts a slot such as `"2:30 PM"`.
    #[instrument(skip(self))]
    pub async fn set_delivery_time(&self, cart_id: String, slot: &str) -> Result<DeliveryTime, CartError> {
        let time: DeliveryTime = slot.parse()?;
        self.act(cart_id, CartAction::SetDeliveryTime(time)).await?;
        Ok(time)
    }

    #[instrument(skip(self))]
    pub async fn summary(&self, cart_id: String) -> Result<CartSummary, CartError> {
        debug!("Sending request");
        match self.act(cart_id, CartAction::Summary).await? {
            CartActionResult::Summary(summary) => Ok(summary),
            other => Err(unexpected(other)),
        }
    }

    /// Empties the cart and returns what it held.
    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn clear(&self, cart_id: String) -> Result<CartSummary, CartError> {
        debug!("Sending request");
        match self.act(cart_id, CartAction::Clear).await? {
            CartActionResult::Clear(summary) => Ok(summary),
            other => Err(unexpected(other)),
        }
    }

    /// Removes an ordered snapshot from the cart and returns what remains.
    #[instrument(skip(self, ordered))]
    pub async fn settle(&self, cart_id: String, ordered: CartSummary) -> Result<CartSummary, CartError> {
        debug!("Sending request");
        match self.act(cart_id, CartAction::Settle(ordered)).await? {
            CartActionResult::Settle(remaining) => Ok(remaining),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: CartActionResult) -> CartError {
    CartError::ActorCommunicationError(format!("Unexpected result: {result:?}"))
}
