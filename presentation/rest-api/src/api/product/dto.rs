use poem_openapi::Object;
use serde_json::Value;

use business::domain::product::errors::ProductError;
use business::domain::product::model::{Product, ProductPatch};
use business::domain::product::use_cases::create::CreateProductParams;

use crate::api::envelope::envelope;
use crate::api::params::{coerce_integer, coerce_number};

/// Body of `POST /products`. Every field is required by the domain; they are
/// optional here so that a missing field is reported as a validation error.
#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unique product code
    #[oai(skip_serializing_if_is_none)]
    pub code: Option<String>,
    /// Number or numeric string
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<Value>,
    #[oai(skip_serializing_if_is_none)]
    pub thumbnail: Option<String>,
    /// Whole number or numeric string
    #[oai(skip_serializing_if_is_none)]
    pub stock: Option<Value>,
}

impl TryFrom<CreateProductRequest> for CreateProductParams {
    type Error = ProductError;

    fn try_from(req: CreateProductRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: req.title,
            description: req.description,
            code: req.code,
            price: price_of(req.price)?,
            thumbnail: req.thumbnail,
            stock: stock_of(req.stock)?,
        })
    }
}

/// Body of `PUT /products/:pid`. Absent fields are left unchanged; an `id`
/// field, if sent, is ignored.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub code: Option<String>,
    /// Number or numeric string
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<Value>,
    #[oai(skip_serializing_if_is_none)]
    pub thumbnail: Option<String>,
    /// Whole number or numeric string
    #[oai(skip_serializing_if_is_none)]
    pub stock: Option<Value>,
}

impl TryFrom<UpdateProductRequest> for ProductPatch {
    type Error = ProductError;

    fn try_from(req: UpdateProductRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: req.title,
            description: req.description,
            code: req.code,
            price: price_of(req.price)?,
            thumbnail: req.thumbnail,
            stock: stock_of(req.stock)?,
        })
    }
}

fn price_of(raw: Option<Value>) -> Result<Option<f64>, ProductError> {
    coerce_number(raw).map_err(|_| ProductError::InvalidField("price"))
}

fn stock_of(raw: Option<Value>) -> Result<Option<i64>, ProductError> {
    coerce_integer(raw).map_err(|_| ProductError::InvalidField("stock"))
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Sequential product identifier
    pub id: u64,
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    pub thumbnail: String,
    pub stock: u32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            code: product.code,
            price: product.price,
            thumbnail: product.thumbnail,
            stock: product.stock,
        }
    }
}

envelope!(ProductEnvelope, ProductResponse);
envelope!(ProductListEnvelope, Vec<ProductResponse>);
envelope!(
    /// `data` is `null` when no product has the requested id.
    ProductLookupEnvelope,
    Option<ProductResponse>
);
