//! Seed data standing in for a backend.
//!
//! The shop only talks to [`SeedSource`], so a real data source can replace
//! [`MockSeed`] without touching cart or order logic.

use chrono::NaiveDate;

use crate::domain::{LocalizedText, Money, Order, OrderLine, OrderStage, Product, Voucher};

pub trait SeedSource: Send + Sync {
    fn products(&self) -> Vec<Product>;
    fn vouchers(&self) -> Vec<Voucher>;
    /// Past orders, shown in the order history.
    fn orders(&self) -> Vec<Order>;
}

/// Mock catalog, vouchers and order history.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSeed;

fn rs(amount: i64) -> Money {
    Money::from(amount)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

impl SeedSource for MockSeed {
    fn products(&self) -> Vec<Product> {
        vec![
            Product::new("p1", LocalizedText::new("Fresh Tomatoes", "تازہ ٹماٹر"), rs(120)).in_category("Vegetables"),
            Product::new("p2", LocalizedText::new("Potatoes 1kg", "آلو 1 کلو"), rs(90)).in_category("Vegetables"),
            Product::new("p3", LocalizedText::new("Whole Milk 1L", "دودھ 1 لیٹر"), rs(200)).in_category("Dairy"),
            Product::new("p4", LocalizedText::new("Farm Eggs (12)", "انڈے (12)"), rs(360)).in_category("Dairy"),
            Product::new("p5", LocalizedText::new("Whole Wheat Bread", "گندم کی روٹی"), rs(180)).in_category("Bakery"),
            Product::new("p6", LocalizedText::new("Chicken Breast", "مرغی کا سینہ"), rs(340)).in_category("Meat"),
            Product::new("p7", LocalizedText::new("Basmati Rice 5kg", "باسمتی چاول 5 کلو"), rs(1450)).in_category("Groceries"),
            Product::new("p8", LocalizedText::new("Dish Soap", "برتن دھونے کا صابن"), rs(250))
                .in_category("Household")
                .out_of_stock(),
        ]
    }

    fn vouchers(&self) -> Vec<Voucher> {
        vec![
            Voucher::percentage("SAVE20", rs(20), rs(500)),
            Voucher::fixed("FLAT50", rs(50), rs(300)),
            Voucher::fixed("FIRST100", rs(100), rs(200))
                .with_title(LocalizedText::new("Rs. 100 Off", "100 روپے چھوٹ")),
        ]
    }

    fn orders(&self) -> Vec<Order> {
        vec![
            Order::historical(
                "ORD-2024-001",
                date(2024, 11, 30),
                vec![
                    OrderLine::new("Fresh Tomatoes", 2, rs(120)),
                    OrderLine::new("Whole Milk 1L", 1, rs(200)),
                ],
                OrderStage::Preparing,
            )
            .with_charges(rs(50), rs(104))
            .with_eta(28),
            Order::historical(
                "ORD-2024-002",
                date(2024, 11, 28),
                vec![OrderLine::new("Fresh Bread", 3, rs(140))],
                OrderStage::Delivered,
            )
            .with_charges(rs(50), Money::ZERO),
            Order::historical(
                "ORD-2024-003",
                date(2024, 11, 25),
                vec![OrderLine::new("Chicken Breast", 2, rs(340))],
                OrderStage::Delivered,
            ),
        ]
    }
}
