//! Catalog types shared between the storefront UI and the concierge engine.

use serde::{Deserialize, Serialize};

/// Storefront category. Display names are the Japanese labels shown in the
/// shop UI and interpolated into the concierge prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    All,
    Set,
    Fashion,
    Food,
    Kitchen,
    Interior,
    Coffee,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "すべて",
            Category::Set => "空間提案セット",
            Category::Fashion => "ファッション・雑貨",
            Category::Food => "食品・飲料",
            Category::Kitchen => "キッチン用品",
            Category::Interior => "インテリア",
            Category::Coffee => "ベトナムコーヒー",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog entry. Prices are in yen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub price: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stock_count: u32,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        price: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            price,
            description: String::new(),
            stock_count: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_stock_count(mut self, stock_count: u32) -> Self {
        self.stock_count = stock_count;
        self
    }
}
