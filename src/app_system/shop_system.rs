use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::actor_framework::ResourceActor;
use crate::cart_actor::CartCreate;
use crate::clients::{CartClient, CatalogClient, OrderClient};
use crate::config::ShopConfig;
use crate::domain::{Cart, Order, Product};
use crate::fixtures::SeedSource;
use crate::vouchers::VoucherBook;

/// The running shop: one actor per collection, wired together.
pub struct ShopSystem {
    pub catalog_client: CatalogClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    pub vouchers: Arc<VoucherBook>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

fn id_sequence(start: u64, format: fn(u64) -> String) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(start));
    move || format(counter.fetch_add(1, Ordering::SeqCst))
}

impl ShopSystem {
    /// Starts every actor. Must be called inside a tokio runtime.
    pub fn new(config: &ShopConfig, seed: &dyn SeedSource) -> Self {
        let buffer = config.actor_buffer;

        let (product_actor, product_inner) =
            ResourceActor::<Product>::new(buffer, id_sequence(1, |id| format!("product_{id}")));
        let catalog_client = CatalogClient::new(product_inner);
        let product_handle = tokio::spawn(product_actor.run());

        let vouchers = Arc::new(VoucherBook::new(seed.vouchers()));

        let (cart_actor, cart_inner) = ResourceActor::<Cart>::new(buffer, id_sequence(1, |id| format!("cart_{id}")));
        let cart_client = CartClient::new(
            cart_inner,
            catalog_client.clone(),
            vouchers.clone(),
            CartCreate {
                delivery_fee: config.delivery_fee,
                max_line_quantity: config.max_line_quantity,
            },
        );
        let cart_handle = tokio::spawn(cart_actor.run());

        let (order_actor, order_inner) =
            ResourceActor::<Order>::new(buffer, id_sequence(1001, |id| format!("ORD-{id}")));
        let order_client = OrderClient::new(order_inner, cart_client.clone(), config.eta_minutes, config.tick_interval);
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            catalog_client,
            cart_client,
            order_client,
            vouchers,
            handles: vec![product_handle, cart_handle, order_handle],
        }
    }

    /// Starts the actors and loads the catalog and order history.
    #[instrument(name = "shop_startup", skip_all)]
    pub async fn start(config: &ShopConfig, seed: &dyn SeedSource) -> Result<Self, String> {
        let system = Self::new(config, seed);
        system
            .catalog_client
            .seed(seed.products())
            .await
            .map_err(|e| e.to_string())?;
        system
            .order_client
            .seed(seed.orders())
            .await
            .map_err(|e| e.to_string())?;
        info!(vouchers = system.vouchers.all().len(), "Shop ready");
        Ok(system)
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // Actors stop once every client (and clone) is gone.
        drop(self.order_client);
        drop(self.cart_client);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
