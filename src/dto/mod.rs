pub mod admin;
pub mod carrinho;
pub mod clientes;
pub mod enderecos;
pub mod feedbacks;
pub mod ingredientes;
pub mod pedidos;

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct Mensagem {
    pub mensagem: String,
}

impl Mensagem {
    pub fn new(texto: &str) -> Self {
        Self {
            mensagem: texto.to_string(),
        }
    }
}
