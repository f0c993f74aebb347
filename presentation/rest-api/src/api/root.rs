use poem::{handler, web::Json};
use serde_json::{Value, json};

/// `GET /`: plain description of the API and its endpoints.
#[handler]
pub fn index() -> Json<Value> {
    Json(json!({
        "message": "API de E-commerce - Gestión de Productos y Carritos",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "products": {
                "GET /api/products": "Listar todos los productos",
                "GET /api/products/:pid": "Obtener producto por ID",
                "POST /api/products": "Crear nuevo producto",
                "PUT /api/products/:pid": "Actualizar producto",
                "DELETE /api/products/:pid": "Eliminar producto"
            },
            "carts": {
                "GET /api/carts": "Listar todos los carritos",
                "GET /api/carts/:cid": "Obtener carrito por ID",
                "POST /api/carts": "Crear nuevo carrito",
                "POST /api/carts/:cid/product/:pid": "Agregar producto al carrito",
                "PUT /api/carts/:cid/product/:pid": "Actualizar cantidad de producto",
                "DELETE /api/carts/:cid": "Eliminar carrito",
                "DELETE /api/carts/:cid/product/:pid": "Eliminar producto del carrito"
            }
        },
        "docs": "/docs"
    }))
}
