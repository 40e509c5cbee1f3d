use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod carrinho;
pub mod clientes;
pub mod doc;
pub mod enderecos;
pub mod feedbacks;
pub mod health;
pub mod ingredientes;
pub mod params;
pub mod pedidos;

// Build the API router without binding state; it will be provided at the top level.
// The paths are flat to preserve the wire contract consumed by the storefront.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(clientes::router())
        .merge(ingredientes::router())
        .merge(carrinho::router())
        .merge(pedidos::router())
        .merge(admin::router())
        .merge(enderecos::router())
        .merge(feedbacks::router())
}
