use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CartSummary, DeliveryTime, Language, Money};

/// Position of an order in the delivery pipeline. Variants are declared in
/// pipeline order, so `Ord` follows the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStage {
    #[default]
    FindingRider,
    Preparing,
    PickedUp,
    Delivered,
}

impl OrderStage {
    pub const ALL: [OrderStage; 4] = [
        OrderStage::FindingRider,
        OrderStage::Preparing,
        OrderStage::PickedUp,
        OrderStage::Delivered,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The following stage, or `None` once delivered.
    pub fn next(self) -> Option<OrderStage> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn is_terminal(self) -> bool {
        self == OrderStage::Delivered
    }

    /// Translation key for the stage's short label.
    pub fn label_key(self) -> &'static str {
        match self {
            OrderStage::FindingRider => "findingRider",
            OrderStage::Preparing => "preparing",
            OrderStage::PickedUp => "pickedUp",
            OrderStage::Delivered => "delivered",
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        language.translate(self.label_key())
    }
}

impl fmt::Display for OrderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Language::En))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    JazzCash,
    Easypaisa,
    CashOnDelivery,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
}

impl OrderLine {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: Money) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    pub fn line_total(&self) -> Money {
        self.unit_price * Money::from(self.quantity)
    }
}

/// Represents a placed order and where it is in the delivery pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub created_on: NaiveDate,
    pub lines: Vec<OrderLine>,
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub discount: Money,
    pub total: Money,
    pub voucher_code: Option<String>,
    pub delivery_time: DeliveryTime,
    pub address: String,
    pub payment: PaymentMethod,
    stage: OrderStage,
    initial_eta_minutes: u32,
    eta_minutes: u32,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub created_on: NaiveDate,
    pub summary: CartSummary,
    pub address: String,
    pub payment: PaymentMethod,
    pub eta_minutes: u32,
}

impl Order {
    pub fn from_summary(id: impl Into<String>, params: OrderCreate) -> Self {
        let OrderCreate {
            created_on,
            summary,
            address,
            payment,
            eta_minutes,
        } = params;
        Self {
            id: id.into(),
            created_on,
            lines: summary
                .lines
                .into_iter()
                .map(|l| OrderLine::new(l.name, l.quantity, l.unit_price))
                .collect(),
            subtotal: summary.subtotal,
            delivery_fee: summary.delivery_fee,
            discount: summary.discount,
            total: summary.total,
            voucher_code: summary.voucher_code,
            delivery_time: summary.delivery_time,
            address,
            payment,
            stage: OrderStage::FindingRider,
            initial_eta_minutes: eta_minutes,
            eta_minutes,
        }
    }

    /// Historical or mock order with a fixed stage, priced from its lines.
    pub fn historical(
        id: impl Into<String>,
        created_on: NaiveDate,
        lines: Vec<OrderLine>,
        stage: OrderStage,
    ) -> Self {
        let subtotal: Money = lines.iter().map(OrderLine::line_total).sum();
        Self {
            id: id.into(),
            created_on,
            lines,
            subtotal,
            delivery_fee: Money::ZERO,
            discount: Money::ZERO,
            total: subtotal,
            voucher_code: None,
            delivery_time: DeliveryTime::default(),
            address: String::new(),
            payment: PaymentMethod::default(),
            stage,
            initial_eta_minutes: 0,
            eta_minutes: 0,
        }
    }

    pub fn with_eta(mut self, minutes: u32) -> Self {
        self.initial_eta_minutes = minutes;
        self.eta_minutes = minutes;
        self
    }

    pub fn with_charges(mut self, delivery_fee: Money, discount: Money) -> Self {
        self.delivery_fee = delivery_fee;
        self.discount = discount;
        self.total = self.subtotal + delivery_fee - discount;
        self
    }

    pub fn stage(&self) -> OrderStage {
        self.stage
    }

    pub fn eta_minutes(&self) -> u32 {
        self.eta_minutes
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Moves exactly one stage forward. `None` if already delivered.
    pub fn advance(&mut self) -> Option<OrderStage> {
        let next = self.stage.next()?;
        self.stage = next;
        if next.is_terminal() {
            self.eta_minutes = 0;
        }
        Some(next)
    }

    /// One minute of the countdown has passed.
    ///
    /// Decrements the ETA and moves the stage forward to the one implied by the
    /// elapsed time; the stage never moves backward.
    pub fn tick(&mut self) -> OrderStage {
        if self.stage.is_terminal() {
            return self.stage;
        }
        self.eta_minutes = self.eta_minutes.saturating_sub(1);
        self.stage = self.stage.max(self.stage_for_eta());
        self.stage
    }

    fn stage_for_eta(&self) -> OrderStage {
        if self.eta_minutes == 0 {
            OrderStage::Delivered
        } else if u64::from(self.eta_minutes) * 2 <= u64::from(self.initial_eta_minutes) {
            OrderStage::PickedUp
        } else if self.eta_minutes < self.initial_eta_minutes {
            OrderStage::Preparing
        } else {
            OrderStage::FindingRider
        }
    }

    pub fn progress(&self) -> OrderProgress {
        OrderProgress {
            order_id: self.id.clone(),
            stage: self.stage,
            eta_minutes: self.eta_minutes,
        }
    }
}

/// Read-only view of an order's position, used to render the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderProgress {
    pub order_id: String,
    pub stage: OrderStage,
    pub eta_minutes: u32,
}

impl OrderProgress {
    pub fn current_stage_index(&self) -> usize {
        self.stage.index()
    }

    /// 0 at the first stage, 100 at the terminal one.
    pub fn progress_percentage(&self) -> f64 {
        let last = (OrderStage::ALL.len() - 1) as f64;
        self.current_stage_index() as f64 / last * 100.0
    }

    #[allow(dead_code)]
    pub fn is_stage_complete(&self, stage: OrderStage) -> bool {
        stage.index() < self.current_stage_index()
    }

    #[allow(dead_code)]
    pub fn is_stage_current(&self, stage: OrderStage) -> bool {
        stage.index() == self.current_stage_index()
    }
}
