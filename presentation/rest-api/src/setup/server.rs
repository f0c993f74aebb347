use std::any::Any;

use poem::http::StatusCode;
use poem::middleware::{CatchPanic, Cors, NormalizePath, Tracing, TrailingSlash};
use poem::web::Json;
use poem::{
    Endpoint, EndpointExt, IntoResponse, Response, Route, Server as PoemServer, get,
    listener::TcpListener,
};
use poem_openapi::OpenApiService;
use serde_json::json;

use crate::api::root::index;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

const ROUTE_NOT_FOUND: &str = "Ruta no encontrada";
const INTERNAL_ERROR: &str = "Error interno del servidor";

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(container, config.cors, &addr);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Products API at http://{}/api/products", addr);
        tracing::info!("Carts API at http://{}/api/carts", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);

        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    /// Builds the full HTTP application: API under `/api`, description at
    /// `/`, docs, and the envelope for framework-level failures.
    pub fn app(container: DependencyContainer, cors: Cors, addr: &str) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.product_api,
                container.cart_api,
            ),
            "E-commerce API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}/api", addr));
        let ui = api_service.swagger_ui();
        let openapi_json = api_service.spec_endpoint();

        Route::new()
            .at("/", get(index))
            .nest("/api", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", openapi_json)
            .catch_all_error(error_envelope)
            .with(NormalizePath::new(TrailingSlash::Trim))
            .with(cors)
            .with(Tracing)
            .with(CatchPanic::new().with_handler(panic_envelope))
    }
}

/// Wraps errors raised outside the handlers (unknown route, unreadable body,
/// wrong method) in the `{success: false, error}` envelope. A known path
/// with an unsupported method counts as an unknown route.
async fn error_envelope(err: poem::Error) -> Response {
    let status = err.status();
    if status == StatusCode::NOT_FOUND || status == StatusCode::METHOD_NOT_ALLOWED {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": ROUTE_NOT_FOUND })),
        )
            .into_response();
    }

    let message = if status.is_server_error() {
        tracing::error!(error = %err, "Unhandled error");
        INTERNAL_ERROR.to_string()
    } else {
        err.to_string()
    };

    (status, Json(json!({ "success": false, "error": message }))).into_response()
}

fn panic_envelope(_: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "error": INTERNAL_ERROR })),
    )
        .into_response()
}
