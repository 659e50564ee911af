use serde::{Deserialize, Serialize};

/// Product ids the shopper marked as favorite, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    product_ids: Vec<String>,
}

impl Favorites {
    pub fn product_ids(&self) -> &[String] {
        &self.product_ids
    }

    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }

    /// Adds the product if absent, removes it otherwise. Returns whether it is
    /// a favorite afterwards.
    pub fn toggle(&mut self, product_id: &str) -> bool {
        if self.remove(product_id) {
            false
        } else {
            self.product_ids.push(product_id.to_string());
            true
        }
    }

    /// Returns `false` if the product was not a favorite.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.product_ids.len();
        self.product_ids.retain(|id| id != product_id);
        self.product_ids.len() != before
    }
}
