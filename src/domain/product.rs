use serde::{Deserialize, Serialize};

use super::{Language, Money};

/// Text carried in both supported languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub ur: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ur: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ur: ur.into(),
        }
    }

    pub fn in_language(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ur => &self.ur,
        }
    }

    /// Case-insensitive substring match against either language.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self.en.to_lowercase().contains(&needle)
            || self.ur.to_lowercase().contains(&needle)
    }
}

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: LocalizedText,
    pub price: Money,
    pub category: String,
    pub image: String,
    pub in_stock: bool,
}

impl Product {
    pub fn new(id: impl Into<String>, name: LocalizedText, price: Money) -> Self {
        Self {
            id: id.into(),
            name,
            price,
            category: String::new(),
            image: String::new(),
            in_stock: true,
        }
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }
}
