#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::actor_framework::ResourceActor;
    use crate::app_system::{CartError, OrderError, ShopSystem};
    use crate::cart_actor::CartCreate;
    use crate::clients::{CartClient, CatalogClient, CheckoutDetails, OrderClient};
    use crate::config::ShopConfig;
    use crate::domain::{Cart, Language, Money, Order, OrderStage, PaymentMethod, Product, UserProfile};
    use crate::fixtures::{MockSeed, SeedSource};
    use crate::mock_framework::{create_mock_client, expect_create};
    use crate::preferences::{MemoryStore, Preferences};
    use crate::speech::testing::RecordingSynthesizer;
    use crate::speech::SpeechSynthesizer;
    use crate::vouchers::VoucherBook;

    async fn shop() -> ShopSystem {
        ShopSystem::start(&ShopConfig::default(), &MockSeed).await.unwrap()
    }

    fn rs(amount: i64) -> Money {
        Money::from(amount)
    }

    #[tokio::test]
    async fn test_voucher_walkthrough() {
        let system = shop().await;
        let carts = &system.cart_client;
        let cart = carts.open_cart().await.unwrap();

        // Tomatoes at 120, bread at 180.
        carts.add_product(cart.clone(), "p1".into(), 1).await.unwrap();
        carts.add_product(cart.clone(), "p5".into(), 2).await.unwrap();
        assert_eq!(carts.summary(cart.clone()).await.unwrap().subtotal, rs(480));

        let err = carts.apply_voucher_code(cart.clone(), "SAVE20").await.unwrap_err();
        assert!(matches!(err, CartError::BelowMinimumOrder { .. }));
        assert_eq!(carts.summary(cart.clone()).await.unwrap().discount, rs(0));

        assert_eq!(carts.add_product(cart.clone(), "p5".into(), 1).await, Ok(3));
        carts.apply_voucher_code(cart.clone(), "save20").await.unwrap();
        let summary = carts.summary(cart.clone()).await.unwrap();
        assert_eq!(summary.subtotal, rs(660));
        assert_eq!(summary.discount, rs(132));
        assert_eq!(summary.total, rs(578));

        carts.apply_voucher_code(cart.clone(), "FLAT50").await.unwrap();
        let summary = carts.summary(cart.clone()).await.unwrap();
        assert_eq!(summary.voucher_code.as_deref(), Some("FLAT50"));
        assert_eq!(summary.discount, rs(50));
        assert_eq!(summary.total, rs(660));

        assert_eq!(
            carts.update_quantity(cart.clone(), "p1".into(), 0).await,
            Err(CartError::InvalidQuantity(0))
        );
        let after = carts.summary(cart).await.unwrap();
        let p1 = after.lines.iter().find(|l| l.product_id == "p1").unwrap();
        assert_eq!(p1.quantity, 1);
        assert_eq!(after.total, after.subtotal + after.delivery_fee - after.discount);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_catalog_guards_the_cart() {
        let system = shop().await;
        let carts = &system.cart_client;
        let cart = carts.open_cart().await.unwrap();

        assert_eq!(
            carts.add_product(cart.clone(), "p8".into(), 1).await,
            Err(CartError::OutOfStock("p8".into()))
        );
        assert_eq!(
            carts.add_product(cart.clone(), "p404".into(), 1).await,
            Err(CartError::ProductNotFound("p404".into()))
        );
        assert_eq!(
            carts.add_product(cart.clone(), "p1".into(), 11).await,
            Err(CartError::QuantityLimit { requested: 11, max: 10 })
        );
        assert_eq!(
            carts.add_product("cart_404".into(), "p1".into(), 1).await,
            Err(CartError::CartNotFound("cart_404".into()))
        );
        assert!(carts.summary(cart).await.unwrap().is_empty());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_checkout_places_order_and_empties_cart() {
        let system = shop().await;
        let cart = system.cart_client.open_cart().await.unwrap();
        system.cart_client.add_product(cart.clone(), "p3".into(), 2).await.unwrap();
        system.cart_client.set_delivery_time(cart.clone(), "6:00 PM").await.unwrap();

        let details = CheckoutDetails {
            address: "Flat 4, Bahadurabad".into(),
            payment: PaymentMethod::CashOnDelivery,
        };
        let order_id = system.order_client.checkout(cart.clone(), details.clone()).await.unwrap();
        assert_eq!(order_id, "ORD-1001");

        let order = system.order_client.get_order(order_id.clone()).await.unwrap().unwrap();
        assert_eq!(order.total, rs(450));
        assert_eq!(order.stage(), OrderStage::FindingRider);
        assert_eq!(order.eta_minutes(), 28);
        assert_eq!(order.delivery_time.to_string(), "6:00 PM");
        assert!(system.cart_client.summary(cart.clone()).await.unwrap().is_empty());

        assert_eq!(
            system.order_client.checkout(cart, details).await,
            Err(OrderError::EmptyCart("cart_1".into()))
        );

        let history = system.order_client.list_orders().await.unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].id, order_id);
        assert_eq!(history[1].id, "ORD-2024-001");

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_items_added_during_checkout_stay_in_the_cart() {
        let (product_actor, product_inner) = ResourceActor::<Product>::new(8, || "product_x".to_string());
        tokio::spawn(product_actor.run());
        let catalog = CatalogClient::new(product_inner);
        catalog.seed(MockSeed.products()).await.unwrap();

        let (cart_actor, cart_inner) = ResourceActor::<Cart>::new(8, || "cart_1".to_string());
        tokio::spawn(cart_actor.run());
        let carts = CartClient::new(
            cart_inner,
            catalog,
            Arc::new(VoucherBook::new(MockSeed.vouchers())),
            CartCreate {
                delivery_fee: rs(50),
                max_line_quantity: Some(10),
            },
        );
        let (order_inner, mut order_requests) = create_mock_client::<Order>(4);
        let orders = OrderClient::new(order_inner, carts.clone(), 28, Duration::from_secs(60));

        let cart = carts.open_cart().await.unwrap();
        carts.add_product(cart.clone(), "p1".into(), 1).await.unwrap();

        let checkout = tokio::spawn({
            let cart = cart.clone();
            async move {
                let details = CheckoutDetails {
                    address: "Gulberg III, Lahore".into(),
                    payment: PaymentMethod::Card,
                };
                orders.checkout(cart, details).await
            }
        });

        let (payload, responder) = expect_create(&mut order_requests).await.expect("Expected Create request");
        // The shopper keeps adding while the order is being created.
        carts.add_product(cart.clone(), "p5".into(), 2).await.unwrap();
        responder.send(Ok("ORD-1001".to_string())).unwrap();

        assert_eq!(checkout.await.unwrap(), Ok("ORD-1001".to_string()));
        let ordered: Vec<&str> = payload.summary.lines.iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ordered, ["p1"]);

        let left = carts.summary(cart).await.unwrap();
        let remaining: Vec<(&str, u32)> = left.lines.iter().map(|l| (l.product_id.as_str(), l.quantity)).collect();
        assert_eq!(remaining, [("p5", 2)]);
        assert_eq!(left.subtotal, rs(360));
    }

    #[tokio::test]
    async fn test_favorites_go_through_the_catalog_into_the_cart() {
        let system = shop().await;
        let mut prefs = Preferences::load(Arc::new(MemoryStore::new()), None);
        prefs.toggle_favorite("p3");
        prefs.toggle_favorite("p8");

        let cart = system.cart_client.open_cart().await.unwrap();
        let mut rejected = Vec::new();
        for product_id in prefs.favorites().product_ids() {
            if let Err(e) = system.cart_client.add_product(cart.clone(), product_id.clone(), 1).await {
                rejected.push(e);
            }
        }
        assert_eq!(rejected, [CartError::OutOfStock("p8".into())]);
        let summary = system.cart_client.summary(cart.clone()).await.unwrap();
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].product_id, "p3");

        system.cart_client.close_cart(cart.clone()).await.unwrap();
        assert_eq!(
            system.cart_client.summary(cart.clone()).await,
            Err(CartError::CartNotFound(cart))
        );

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_seeded_order_progress() {
        let system = shop().await;
        let progress = system.order_client.progress("ORD-2024-001".into()).await.unwrap();
        assert_eq!(progress.stage, OrderStage::Preparing);
        assert!((progress.progress_percentage() - 100.0 / 3.0).abs() < 1e-9);
        assert!(progress.is_stage_complete(OrderStage::FindingRider));
        assert!(progress.is_stage_current(OrderStage::Preparing));

        let delivered = system.order_client.progress("ORD-2024-002".into()).await.unwrap();
        assert_eq!(delivered.progress_percentage(), 100.0);
        assert_eq!(
            system.order_client.advance("ORD-2024-002".into()).await,
            Err(OrderError::AlreadyDelivered("ORD-2024-002".into()))
        );

        system.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_tracking_moves_a_new_order_to_delivery() {
        let config = ShopConfig {
            eta_minutes: 4,
            ..ShopConfig::default()
        };
        let system = ShopSystem::start(&config, &MockSeed).await.unwrap();
        let cart = system.cart_client.open_cart().await.unwrap();
        system.cart_client.add_product(cart.clone(), "p7".into(), 1).await.unwrap();
        let order_id = system
            .order_client
            .checkout(
                cart,
                CheckoutDetails {
                    address: "Model Town, Lahore".into(),
                    payment: PaymentMethod::Easypaisa,
                },
            )
            .await
            .unwrap();

        let ticker = system.order_client.start_tracking(order_id.clone());
        let mut seen = Vec::new();
        for _ in 0..4 {
            tokio::time::sleep(Duration::from_secs(60)).await;
            seen.push(system.order_client.progress(order_id.clone()).await.unwrap().current_stage_index());
        }
        ticker.join().await;

        assert!(seen.windows(2).all(|w| w[0] <= w[1]), "stages regressed: {seen:?}");
        let done = system.order_client.progress(order_id).await.unwrap();
        assert_eq!(done.stage, OrderStage::Delivered);
        assert_eq!(done.eta_minutes, 0);

        system.shutdown().await.unwrap();
    }

    #[test]
    fn test_preferences_session() {
        let store = Arc::new(MemoryStore::new());
        let synth = Arc::new(RecordingSynthesizer::default());
        let mut prefs = Preferences::load(store.clone(), Some(synth.clone() as Arc<dyn SpeechSynthesizer>));

        prefs.set_language(Language::Ur);
        prefs
            .sign_up(UserProfile::new("Hamza", "0321 7654321", "G-11, Islamabad"))
            .unwrap();
        assert_eq!(synth.calls().last().map(String::as_str), Some(Language::Ur.translate("startShopping")));

        let reloaded = Preferences::load(store, None);
        assert!(reloaded.is_rtl());
        assert!(reloaded.profile().is_complete());
    }
}
