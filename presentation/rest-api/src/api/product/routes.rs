use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::errors::ProductError;
use business::domain::product::model::ProductPatch;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::params::parse_id;
use crate::api::product::dto::{
    CreateProductRequest, ProductEnvelope, ProductListEnvelope, ProductLookupEnvelope,
    ProductResponse, UpdateProductRequest,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product catalogue API
#[OpenApi]
impl ProductApi {
    /// List all products
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let data: Vec<ProductResponse> =
                    products.into_iter().map(ProductResponse::from).collect();
                GetAllProductsResponse::Ok(Json(ProductListEnvelope::new(data, None)))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    ///
    /// Answers 200 with `data: null` when the product does not exist.
    #[oai(path = "/products/:pid", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, pid: Path<String>) -> GetProductByIdResponse {
        let Some(id) = parse_id(&pid.0) else {
            return GetProductByIdResponse::Ok(Json(ProductLookupEnvelope::new(None, None)));
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(ProductLookupEnvelope::new(
                product.map(|p| p.into()),
                None,
            ))),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductByIdResponse::InternalError(json)
            }
        }
    }

    /// Create a product
    ///
    /// All fields are required and `code` must be unique.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = match CreateProductParams::try_from(body.0) {
            Ok(params) => params,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return CreateProductResponse::BadRequest(json);
            }
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Ok(Json(ProductEnvelope::new(
                product.into(),
                Some("Producto creado exitosamente"),
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Merges the given fields over the stored product. The id never changes.
    #[oai(path = "/products/:pid", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        pid: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let Some(id) = parse_id(&pid.0) else {
            let (_status, json) = ProductError::NotFound.into_error_response();
            return UpdateProductResponse::NotFound(json);
        };

        let patch = match ProductPatch::try_from(body.0) {
            Ok(patch) => patch,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return UpdateProductResponse::BadRequest(json);
            }
        };
        let params = UpdateProductParams { id, patch };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(ProductEnvelope::new(
                product.into(),
                Some("Producto actualizado exitosamente"),
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Returns the removed product.
    #[oai(path = "/products/:pid", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, pid: Path<String>) -> DeleteProductResponse {
        let Some(id) = parse_id(&pid.0) else {
            let (_status, json) = ProductError::NotFound.into_error_response();
            return DeleteProductResponse::NotFound(json);
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(product) => DeleteProductResponse::Ok(Json(ProductEnvelope::new(
                product.into(),
                Some("Producto eliminado exitosamente"),
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductLookupEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductEnvelope>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
