use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::errors::CartError;
use business::domain::cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use business::domain::cart::use_cases::create::CreateCartUseCase;
use business::domain::cart::use_cases::delete::{DeleteCartParams, DeleteCartUseCase};
use business::domain::cart::use_cases::get_all::GetAllCartsUseCase;
use business::domain::cart::use_cases::get_by_id::{GetCartByIdParams, GetCartByIdUseCase};
use business::domain::cart::use_cases::remove_product::{
    RemoveProductFromCartParams, RemoveProductFromCartUseCase,
};
use business::domain::cart::use_cases::update_quantity::{
    UpdateProductQuantityParams, UpdateProductQuantityUseCase,
};

use crate::api::cart::dto::{
    AddProductToCartRequest, CartEnvelope, CartListEnvelope, CartResponse, UpdateQuantityRequest,
};
use crate::api::error::{ErrorKind, ErrorResponse, IntoErrorResponse};
use crate::api::params::parse_id;
use crate::api::payload::OptionalJson;
use crate::api::tags::ApiTags;

pub struct CartApi {
    create_use_case: Arc<dyn CreateCartUseCase>,
    get_all_use_case: Arc<dyn GetAllCartsUseCase>,
    get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
    add_product_use_case: Arc<dyn AddProductToCartUseCase>,
    update_quantity_use_case: Arc<dyn UpdateProductQuantityUseCase>,
    remove_product_use_case: Arc<dyn RemoveProductFromCartUseCase>,
    delete_use_case: Arc<dyn DeleteCartUseCase>,
}

impl CartApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCartUseCase>,
        get_all_use_case: Arc<dyn GetAllCartsUseCase>,
        get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
        add_product_use_case: Arc<dyn AddProductToCartUseCase>,
        update_quantity_use_case: Arc<dyn UpdateProductQuantityUseCase>,
        remove_product_use_case: Arc<dyn RemoveProductFromCartUseCase>,
        delete_use_case: Arc<dyn DeleteCartUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            add_product_use_case,
            update_quantity_use_case,
            remove_product_use_case,
            delete_use_case,
        }
    }
}

/// Resolves both path ids of a cart line route. A non-numeric cart id is an
/// unknown cart; a non-numeric product id is an unknown line.
fn line_ids(cid: &str, pid: &str) -> Result<(u64, u64), CartError> {
    let cart_id = parse_id(cid).ok_or(CartError::NotFound)?;
    let product_id = parse_id(pid).ok_or(CartError::LineNotFound)?;
    Ok((cart_id, product_id))
}

/// Shopping cart API
#[OpenApi]
impl CartApi {
    /// Create an empty cart
    #[oai(path = "/carts", method = "post", tag = "ApiTags::Carts")]
    async fn create_cart(&self) -> CartMutationResponse {
        match self.create_use_case.execute().await {
            Ok(cart) => CartMutationResponse::ok(cart.into(), "Carrito creado exitosamente"),
            Err(err) => CartMutationResponse::from_error(err),
        }
    }

    /// List all carts
    #[oai(path = "/carts", method = "get", tag = "ApiTags::Carts")]
    async fn get_all_carts(&self) -> GetAllCartsResponse {
        match self.get_all_use_case.execute().await {
            Ok(carts) => {
                let data: Vec<CartResponse> = carts.into_iter().map(CartResponse::from).collect();
                GetAllCartsResponse::Ok(Json(CartListEnvelope::new(data, None)))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllCartsResponse::InternalError(json)
            }
        }
    }

    /// Get a cart by ID
    #[oai(path = "/carts/:cid", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart_by_id(&self, cid: Path<String>) -> CartMutationResponse {
        let Some(id) = parse_id(&cid.0) else {
            return CartMutationResponse::from_error(CartError::NotFound);
        };

        match self
            .get_by_id_use_case
            .execute(GetCartByIdParams { id })
            .await
        {
            Ok(cart) => CartMutationResponse::Ok(Json(CartEnvelope::new(cart.into(), None))),
            Err(err) => CartMutationResponse::from_error(err),
        }
    }

    /// Add a product to a cart
    ///
    /// Accumulates onto the existing line for the same product. The body may
    /// be omitted to add a single unit.
    #[oai(path = "/carts/:cid/product/:pid", method = "post", tag = "ApiTags::Carts")]
    async fn add_product(
        &self,
        cid: Path<String>,
        pid: Path<String>,
        body: OptionalJson<AddProductToCartRequest>,
    ) -> CartMutationResponse {
        let Some(cart_id) = parse_id(&cid.0) else {
            return CartMutationResponse::from_error(CartError::NotFound);
        };
        let Some(product_id) = parse_id(&pid.0) else {
            let (_status, json) =
                ErrorKind::Validation.response("Identificador de producto inválido");
            return CartMutationResponse::BadRequest(json);
        };

        let quantity = match body.0.map(AddProductToCartRequest::quantity).transpose() {
            Ok(quantity) => quantity.flatten(),
            Err(err) => return CartMutationResponse::from_error(err),
        };

        let params = AddProductToCartParams {
            cart_id,
            product_id,
            quantity,
        };

        match self.add_product_use_case.execute(params).await {
            Ok(cart) => CartMutationResponse::ok(
                cart.into(),
                "Producto agregado al carrito exitosamente",
            ),
            Err(err) => CartMutationResponse::from_error(err),
        }
    }

    /// Set the quantity of a cart line
    ///
    /// `quantity` is required, as a number or numeric string; zero or less
    /// removes the line.
    #[oai(path = "/carts/:cid/product/:pid", method = "put", tag = "ApiTags::Carts")]
    async fn update_quantity(
        &self,
        cid: Path<String>,
        pid: Path<String>,
        body: OptionalJson<UpdateQuantityRequest>,
    ) -> CartMutationResponse {
        let quantity = match body.0.map(UpdateQuantityRequest::quantity).transpose() {
            Ok(Some(Some(quantity))) => quantity,
            Ok(_) => return CartMutationResponse::from_error(CartError::QuantityRequired),
            Err(err) => return CartMutationResponse::from_error(err),
        };
        let (cart_id, product_id) = match line_ids(&cid.0, &pid.0) {
            Ok(ids) => ids,
            Err(err) => return CartMutationResponse::from_error(err),
        };

        let params = UpdateProductQuantityParams {
            cart_id,
            product_id,
            quantity: Some(quantity),
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(cart) => {
                CartMutationResponse::ok(cart.into(), "Cantidad actualizada exitosamente")
            }
            Err(err) => CartMutationResponse::from_error(err),
        }
    }

    /// Remove a product line from a cart
    #[oai(path = "/carts/:cid/product/:pid", method = "delete", tag = "ApiTags::Carts")]
    async fn remove_product(&self, cid: Path<String>, pid: Path<String>) -> CartMutationResponse {
        let (cart_id, product_id) = match line_ids(&cid.0, &pid.0) {
            Ok(ids) => ids,
            Err(err) => return CartMutationResponse::from_error(err),
        };

        match self
            .remove_product_use_case
            .execute(RemoveProductFromCartParams {
                cart_id,
                product_id,
            })
            .await
        {
            Ok(cart) => CartMutationResponse::ok(
                cart.into(),
                "Producto eliminado del carrito exitosamente",
            ),
            Err(err) => CartMutationResponse::from_error(err),
        }
    }

    /// Delete a cart
    ///
    /// Returns the removed cart.
    #[oai(path = "/carts/:cid", method = "delete", tag = "ApiTags::Carts")]
    async fn delete_cart(&self, cid: Path<String>) -> CartMutationResponse {
        let Some(id) = parse_id(&cid.0) else {
            return CartMutationResponse::from_error(CartError::NotFound);
        };

        match self.delete_use_case.execute(DeleteCartParams { id }).await {
            Ok(cart) => CartMutationResponse::ok(cart.into(), "Carrito eliminado exitosamente"),
            Err(err) => CartMutationResponse::from_error(err),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllCartsResponse {
    #[oai(status = 200)]
    Ok(Json<CartListEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Response of every route that answers with a single cart.
#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    #[oai(status = 200)]
    Ok(Json<CartEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartMutationResponse {
    fn ok(cart: CartResponse, message: &str) -> Self {
        CartMutationResponse::Ok(Json(CartEnvelope::new(cart, Some(message))))
    }

    fn from_error(err: CartError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => CartMutationResponse::BadRequest(json),
            404 => CartMutationResponse::NotFound(json),
            _ => CartMutationResponse::InternalError(json),
        }
    }
}
