use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Ingrediente;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdicionarAoCarrinhoRequest {
    pub id_cliente: Option<i64>,
    pub ingredientes: Option<Vec<i64>>,
    pub quantidade: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CarrinhoAdicionado {
    pub mensagem: String,
    pub id_pedido: i64,
}

/// Linha do carrinho com os ingredientes do cupcake configurado.
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemCarrinho {
    pub id_pedido_carrinho: i64,
    pub quantidade: i32,
    pub valor_total: f64,
    pub data_criacao: DateTime<Utc>,
    pub ingredientes: Vec<Ingrediente>,
}
