use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::Money;
use crate::speech::SpeechError;

/// Errors that can occur during cart operations.
///
/// Every variant describes a rejected mutation: the cart is left unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Cart not found: {0}")]
    CartNotFound(String),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Maximum {max} items per product, requested {requested}")]
    QuantityLimit { requested: u32, max: u32 },
    #[error("Product not in cart: {0}")]
    NotInCart(String),
    #[error("Product not found: {0}")]
    ProductNotFound(String),
    #[error("Out of stock: {0}")]
    OutOfStock(String),
    #[error("Unknown voucher: {0}")]
    UnknownVoucher(String),
    #[error("Minimum order of Rs. {min_order} required for {code} (subtotal Rs. {subtotal})")]
    BelowMinimumOrder {
        code: String,
        min_order: Money,
        subtotal: Money,
    },
    #[error("Invalid delivery time: {0}")]
    InvalidDeliveryTime(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<CartError>> for CartError {
    fn from(err: FrameworkError<CartError>) -> Self {
        match err {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => CartError::CartNotFound(id),
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

/// Errors that can occur while browsing the catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Voice search unavailable: {0}")]
    Speech(#[from] SpeechError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<CatalogError>> for CatalogError {
    fn from(err: FrameworkError<CatalogError>) -> Self {
        match err {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Cart is empty: {0}")]
    EmptyCart(String),
    #[error("Delivery address required")]
    MissingAddress,
    #[error("Order already delivered: {0}")]
    AlreadyDelivered(String),
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<OrderError>> for OrderError {
    fn from(err: FrameworkError<OrderError>) -> Self {
        match err {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

/// Errors raised while editing the shopper's profile.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    #[error("Please fill all fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Errors raised while editing saved addresses.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AddressError {
    #[error("Please fill all fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Address not found: {0}")]
    NotFound(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_errors_map_onto_domain_errors() {
        let missing: CartError = FrameworkError::NotFound("cart_9".into()).into();
        assert_eq!(missing, CartError::CartNotFound("cart_9".into()));

        let passthrough: CartError = FrameworkError::Entity(CartError::InvalidQuantity(0)).into();
        assert_eq!(passthrough, CartError::InvalidQuantity(0));

        let closed: OrderError = FrameworkError::<OrderError>::ActorClosed.into();
        assert_eq!(closed, OrderError::ActorCommunicationError("Actor closed".into()));
    }

    #[test]
    fn minimum_order_message_names_the_threshold() {
        let err = CartError::BelowMinimumOrder {
            code: "SAVE20".into(),
            min_order: Money::from(500),
            subtotal: Money::from(480),
        };
        assert_eq!(
            err.to_string(),
            "Minimum order of Rs. 500 required for SAVE20 (subtotal Rs. 480)"
        );
    }

    #[test]
    fn missing_fields_are_listed() {
        let err = ProfileError::MissingFields(vec!["phone", "address"]);
        assert_eq!(err.to_string(), "Please fill all fields: phone, address");
    }
}
