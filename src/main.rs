mod actor_framework;
mod app_system;
mod cart_actor;
mod clients;
mod config;
mod domain;
mod fixtures;
mod order_actor;
mod preferences;
mod product_actor;
mod speech;
mod vouchers;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;

use std::sync::Arc;

use tracing::{error, info, warn, Instrument};

use crate::app_system::{setup_tracing, ShopSystem};
use crate::clients::CheckoutDetails;
use crate::domain::{PaymentMethod, UserProfile};
use crate::fixtures::MockSeed;
use crate::preferences::{FileStore, Preferences};
use crate::speech::{SpeechSynthesizer, TracingSynthesizer};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = config::load_config().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_level);

    info!(storage_dir = %config.storage_dir.display(), "Starting krave-mart");

    let synthesizer: Arc<dyn SpeechSynthesizer> = Arc::new(TracingSynthesizer);
    let mut prefs = Preferences::load(Arc::new(FileStore::new(config.storage_dir.clone())), Some(synthesizer));
    if !prefs.profile().is_complete() {
        let profile = UserProfile::new("Ayesha Khan", "0300 1234567", "House 21, Street 5, F-7/2, Islamabad");
        if let Err(e) = prefs.sign_up(profile) {
            warn!(error = %e, "Sign-up rejected");
        }
    }
    if prefs.addresses().is_empty() && prefs.profile().is_complete() {
        let address = prefs.profile().address.clone();
        if let Err(e) = prefs.add_address("Home", &address) {
            warn!(error = %e, "Could not save the sign-up address");
        }
    }
    if prefs.favorites().is_empty() {
        prefs.toggle_favorite("p3");
    }
    info!(
        language = %prefs.language(),
        rtl = prefs.is_rtl(),
        text_size = ?prefs.accessibility().text_size,
        saved_addresses = prefs.addresses().all().len(),
        "Preferences ready"
    );

    let system = ShopSystem::start(&config, &MockSeed).await?;

    let span = tracing::info_span!("shopping");
    let cart_id = async {
        let cart_id = system.cart_client.open_cart().await.map_err(|e| e.to_string())?;
        for (product_id, quantity) in [("p1", 1), ("p5", 3)] {
            system
                .cart_client
                .add_product(cart_id.clone(), product_id.to_string(), quantity)
                .await
                .map_err(|e| e.to_string())?;
        }
        for product_id in prefs.favorites().product_ids() {
            if let Err(e) = system.cart_client.add_product(cart_id.clone(), product_id.clone(), 1).await {
                warn!(%product_id, error = %e, "Favorite not added");
            }
        }
        let slot = system
            .cart_client
            .set_delivery_time(cart_id.clone(), "6:00 PM")
            .await
            .map_err(|e| e.to_string())?;
        info!(%slot, "Delivery slot chosen");
        match system.cart_client.apply_voucher_code(cart_id.clone(), "SAVE20").await {
            Ok(voucher) => prefs.speak(&format!("{} {}", voucher.code, prefs.t("applied"))),
            Err(e) => warn!(error = %e, "Voucher rejected"),
        }
        let summary = system.cart_client.summary(cart_id.clone()).await.map_err(|e| e.to_string())?;
        info!(
            subtotal = %summary.subtotal,
            discount = %summary.discount,
            total = %summary.total,
            "Cart ready"
        );
        Ok::<_, String>(cart_id)
    }
    .instrument(span)
    .await?;

    let details = CheckoutDetails {
        address: prefs.delivery_address().to_string(),
        payment: PaymentMethod::CashOnDelivery,
    };
    let span = tracing::info_span!("order_processing");
    let order_result = async {
        info!("Placing order");
        system.order_client.checkout(cart_id.clone(), details).await
    }
    .instrument(span)
    .await;
    if let Err(e) = system.cart_client.close_cart(cart_id).await {
        warn!(error = %e, "Cart could not be closed");
    }

    match order_result {
        Ok(order_id) => {
            prefs.speak(prefs.t("orderPlaced"));
            let ticker = system.order_client.start_tracking(order_id.clone());
            tokio::select! {
                _ = ticker.join() => info!(%order_id, "Order delivered"),
                _ = tokio::signal::ctrl_c() => info!("Tracking interrupted"),
            }
            match system.order_client.progress(order_id).await {
                Ok(progress) => info!(
                    stage = %progress.stage.label(prefs.language()),
                    percent = progress.progress_percentage(),
                    eta_minutes = progress.eta_minutes,
                    "Tracking finished"
                ),
                Err(e) => warn!(error = %e, "Could not read order progress"),
            }
        }
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    match system.order_client.list_orders().await {
        Ok(orders) => {
            for order in orders {
                info!(
                    order_id = %order.id,
                    date = %order.created_on,
                    items = order.item_count(),
                    total = %order.total,
                    eta_minutes = order.eta_minutes(),
                    stage = %order.stage().label(prefs.language()),
                    "Order history"
                );
            }
        }
        Err(e) => error!(error = %e, "Could not load order history"),
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
