use super::errors::ProductError;

pub type ProductId = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    pub thumbnail: String,
    pub stock: u32,
}

/// Raw product fields as received from a client. Any of them may be missing.
#[derive(Debug, Clone, Default)]
pub struct NewProductProps {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub price: Option<f64>,
    pub thumbnail: Option<String>,
    pub stock: Option<i64>,
}

/// A validated product that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    pub thumbnail: String,
    pub stock: u32,
}

/// Partial update of a product. The id is never part of a patch.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub price: Option<f64>,
    pub thumbnail: Option<String>,
    pub stock: Option<i64>,
}

impl NewProduct {
    /// Every field is required. Blank text, a zero price or a zero stock
    /// count as missing.
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let (Some(title), Some(description), Some(code), Some(price), Some(thumbnail), Some(stock)) = (
            non_blank(props.title),
            non_blank(props.description),
            non_blank(props.code),
            props.price.filter(|p| *p != 0.0),
            non_blank(props.thumbnail),
            props.stock.filter(|s| *s != 0),
        ) else {
            return Err(ProductError::MissingFields);
        };

        Ok(Self {
            title,
            description,
            code,
            price: valid_price(price)?,
            thumbnail,
            stock: valid_stock(stock)?,
        })
    }

    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            code: self.code,
            price: self.price,
            thumbnail: self.thumbnail,
            stock: self.stock,
        }
    }
}

impl Product {
    /// Merges the patch over this product. The id is left untouched.
    pub fn apply(mut self, patch: ProductPatch) -> Result<Self, ProductError> {
        if let Some(title) = patch.title {
            self.title = required_text(title, "title")?;
        }
        if let Some(description) = patch.description {
            self.description = required_text(description, "description")?;
        }
        if let Some(code) = patch.code {
            self.code = required_text(code, "code")?;
        }
        if let Some(price) = patch.price {
            self.price = valid_price(price)?;
        }
        if let Some(thumbnail) = patch.thumbnail {
            self.thumbnail = required_text(thumbnail, "thumbnail")?;
        }
        if let Some(stock) = patch.stock {
            self.stock = valid_stock(stock)?;
        }
        Ok(self)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required_text(value: String, field: &'static str) -> Result<String, ProductError> {
    if value.trim().is_empty() {
        return Err(ProductError::InvalidField(field));
    }
    Ok(value)
}

fn valid_price(price: f64) -> Result<f64, ProductError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ProductError::InvalidField("price"));
    }
    Ok(price)
}

fn valid_stock(stock: i64) -> Result<u32, ProductError> {
    u32::try_from(stock)
        .ok()
        .filter(|s| *s > 0)
        .ok_or(ProductError::InvalidField("stock"))
}
