use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn, Instrument};

use super::actions::OrderAction;
use crate::actor_framework::ResourceClient;
use crate::domain::Order;

/// Background countdown for one order.
///
/// Sends [`OrderAction::Tick`] once per period until the order is delivered.
/// Dropping the ticker aborts the task, which is how a tracking view that
/// goes away stops its countdown.
pub struct EtaTicker {
    handle: Option<JoinHandle<()>>,
}

impl EtaTicker {
    pub fn spawn(orders: ResourceClient<Order>, order_id: String, period: Duration) -> Self {
        let span = tracing::info_span!("eta_ticker", %order_id);
        let handle = tokio::spawn(run(orders, order_id, period).instrument(span));
        Self { handle: Some(handle) }
    }

    /// Waits for the countdown to reach delivery (or fail). If this future is
    /// dropped first, the countdown is aborted with it.
    pub async fn join(mut self) {
        if let Some(handle) = self.handle.as_mut() {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    warn!(error = %e, "Ticker task failed");
                }
            }
        }
        self.handle = None;
    }
}

impl Drop for EtaTicker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

async fn run(orders: ResourceClient<Order>, order_id: String, period: Duration) {
    let mut interval = tokio::time::interval(period);
    // The first tick completes immediately; the countdown starts one period in.
    interval.tick().await;

    loop {
        interval.tick().await;
        match orders.perform_action(order_id.clone(), OrderAction::Tick).await {
            Ok(result) => {
                let progress = result.into_progress();
                debug!(stage = %progress.stage, eta_minutes = progress.eta_minutes, "Tick");
                if progress.stage.is_terminal() {
                    info!("Order delivered, countdown finished");
                    break;
                }
            }
            Err(e) => {
                warn!(error = %e, "Countdown stopped");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::actor_framework::ResourceActor;
    use crate::domain::{OrderLine, OrderStage};
    use crate::order_actor::OrderActionResult;

    async fn orders_with(order: Order) -> ResourceClient<Order> {
        let (actor, client) = ResourceActor::<Order>::new(8, || "unused".to_string());
        tokio::spawn(actor.run());
        client.insert(order.id.clone(), order).await.unwrap();
        client
    }

    fn order(eta: u32) -> Order {
        let date = NaiveDate::from_ymd_opt(2024, 11, 30).unwrap();
        Order::historical("ORD-2024-001", date, vec![OrderLine::new("Milk", 1, 200.into())], OrderStage::FindingRider)
            .with_eta(eta)
    }

    async fn progress(client: &ResourceClient<Order>) -> crate::domain::OrderProgress {
        match client.perform_action("ORD-2024-001".into(), OrderAction::Progress).await.unwrap() {
            OrderActionResult::Progress(p) => p,
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_runs_until_delivered() {
        let client = orders_with(order(4)).await;
        let ticker = EtaTicker::spawn(client.clone(), "ORD-2024-001".into(), Duration::from_secs(60));

        tokio::time::sleep(Duration::from_secs(61)).await;
        let after_one = progress(&client).await;
        assert_eq!(after_one.eta_minutes, 3);
        assert_eq!(after_one.stage, OrderStage::Preparing);

        ticker.join().await;
        let done = progress(&client).await;
        assert_eq!(done.stage, OrderStage::Delivered);
        assert_eq!(done.eta_minutes, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_ticker_stops_the_countdown() {
        let client = orders_with(order(10)).await;
        let ticker = EtaTicker::spawn(client.clone(), "ORD-2024-001".into(), Duration::from_secs(60));

        tokio::time::sleep(Duration::from_secs(121)).await;
        drop(ticker);
        tokio::time::sleep(Duration::from_secs(600)).await;

        assert_eq!(progress(&client).await.eta_minutes, 8);
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_order_ends_the_task() {
        let (actor, client) = ResourceActor::<Order>::new(8, || "unused".to_string());
        tokio::spawn(actor.run());
        let ticker = EtaTicker::spawn(client, "missing".into(), Duration::from_secs(1));
        ticker.join().await;
    }
}
