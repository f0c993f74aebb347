use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;

use crate::json_store::Record;

/// On-disk shape of a product inside `products.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntity {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    pub thumbnail: String,
    pub stock: u32,
}

impl ProductEntity {
    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            description: product.description.clone(),
            code: product.code.clone(),
            price: product.price,
            thumbnail: product.thumbnail.clone(),
            stock: product.stock,
        }
    }

    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            title: self.title,
            description: self.description,
            code: self.code,
            price: self.price,
            thumbnail: self.thumbnail,
            stock: self.stock,
        }
    }
}

impl Record for ProductEntity {
    fn id(&self) -> u64 {
        self.id
    }
}
