use serde::{Deserialize, Serialize};

use business::domain::cart::model::{Cart, CartLine};

use crate::json_store::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineEntity {
    pub product: u64,
    pub quantity: u32,
}

/// On-disk shape of a cart inside `carts.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntity {
    pub id: u64,
    pub products: Vec<CartLineEntity>,
}

impl CartEntity {
    pub fn from_domain(cart: &Cart) -> Self {
        Self {
            id: cart.id,
            products: cart
                .products
                .iter()
                .map(|l| CartLineEntity {
                    product: l.product,
                    quantity: l.quantity,
                })
                .collect(),
        }
    }

    pub fn into_domain(self) -> Cart {
        Cart {
            id: self.id,
            products: self
                .products
                .into_iter()
                .map(|l| CartLine {
                    product: l.product,
                    quantity: l.quantity,
                })
                .collect(),
        }
    }
}

impl Record for CartEntity {
    fn id(&self) -> u64 {
        self.id
    }
}
