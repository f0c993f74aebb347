use poem_openapi::Object;
use serde_json::Value;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::{Cart, CartLine};

use crate::api::envelope::envelope;
use crate::api::params::coerce_integer;

/// Body of `POST /carts/:cid/product/:pid`. The body itself is optional;
/// without it one unit is added.
#[derive(Debug, Clone, Object)]
pub struct AddProductToCartRequest {
    /// Units to add (default 1). Whole number or numeric string
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<Value>,
}

impl AddProductToCartRequest {
    pub fn quantity(self) -> Result<Option<i64>, CartError> {
        quantity_of(self.quantity)
    }
}

/// Body of `PUT /carts/:cid/product/:pid`.
#[derive(Debug, Clone, Object)]
pub struct UpdateQuantityRequest {
    /// New quantity; zero or less removes the line
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<Value>,
}

impl UpdateQuantityRequest {
    pub fn quantity(self) -> Result<Option<i64>, CartError> {
        quantity_of(self.quantity)
    }
}

fn quantity_of(raw: Option<Value>) -> Result<Option<i64>, CartError> {
    coerce_integer(raw).map_err(|_| CartError::InvalidQuantity)
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    /// Referenced product id
    pub product: u64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub id: u64,
    pub products: Vec<CartLineResponse>,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            product: line.product,
            quantity: line.quantity,
        }
    }
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id,
            products: cart.products.into_iter().map(CartLineResponse::from).collect(),
        }
    }
}

envelope!(CartEnvelope, CartResponse);
envelope!(CartListEnvelope, Vec<CartResponse>);
