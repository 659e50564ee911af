use crate::domain::OrderProgress;

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order exactly one stage forward.
    ///
    /// # Errors
    /// Fails once the order is delivered.
    #[allow(dead_code)]
    Advance,
    /// One countdown period elapsed.
    Tick,
    /// Reads the current position without changing it.
    Progress,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    Advance(OrderProgress),
    Tick(OrderProgress),
    Progress(OrderProgress),
}

impl OrderActionResult {
    pub fn into_progress(self) -> OrderProgress {
        match self {
            OrderActionResult::Advance(p) | OrderActionResult::Tick(p) | OrderActionResult::Progress(p) => p,
        }
    }
}
