use std::sync::Arc;

use anyhow::Context;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryJson;
use persistence::product::repository::ProductRepositoryJson;

use business::application::cart::add_product::AddProductToCartUseCaseImpl;
use business::application::cart::create::CreateCartUseCaseImpl;
use business::application::cart::delete::DeleteCartUseCaseImpl;
use business::application::cart::get_all::GetAllCartsUseCaseImpl;
use business::application::cart::get_by_id::GetCartByIdUseCaseImpl;
use business::application::cart::remove_product::RemoveProductFromCartUseCaseImpl;
use business::application::cart::update_quantity::UpdateProductQuantityUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::config::storage_config::StorageConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    /// Loads both collections from the data directory and wires one use case
    /// set per collection. Fails if either file holds invalid JSON.
    pub async fn new(storage: &StorageConfig) -> anyhow::Result<Self> {
        let health_api = crate::api::health::routes::Api::new(storage.data_dir.clone());

        // Infrastructure adapters
        let products_file = storage.products_file();
        let product_repository = Arc::new(
            ProductRepositoryJson::open(&products_file)
                .await
                .with_context(|| format!("loading {}", products_file.display()))?,
        );
        let carts_file = storage.carts_file();
        let cart_repository = Arc::new(
            CartRepositoryJson::open(&carts_file)
                .await
                .with_context(|| format!("loading {}", carts_file.display()))?,
        );

        let product_logger = Arc::new(TracingLogger::new("products"));
        let cart_logger = Arc::new(TracingLogger::new("carts"));

        // Product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger: product_logger,
        });

        // Cart use cases
        let create_cart_use_case = Arc::new(CreateCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let get_all_carts_use_case = Arc::new(GetAllCartsUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let get_cart_by_id_use_case = Arc::new(GetCartByIdUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let add_product_use_case = Arc::new(AddProductToCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateProductQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let remove_product_use_case = Arc::new(RemoveProductFromCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let delete_cart_use_case = Arc::new(DeleteCartUseCaseImpl {
            repository: cart_repository,
            logger: cart_logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_product_use_case,
            get_all_products_use_case,
            get_product_by_id_use_case,
            update_product_use_case,
            delete_product_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            create_cart_use_case,
            get_all_carts_use_case,
            get_cart_by_id_use_case,
            add_product_use_case,
            update_quantity_use_case,
            remove_product_use_case,
            delete_cart_use_case,
        );

        Ok(Self {
            health_api,
            product_api,
            cart_api,
        })
    }
}
