use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Cupcake reconstruído a partir das linhas de `pedido_ingredientes` de um
/// mesmo `id_cupcake`. Papéis ausentes aparecem como "Não especificado".
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Cupcake {
    pub tamanho: String,
    pub recheio: String,
    pub cobertura: String,
    pub cor_cobertura: String,
    pub quantidade: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PedidoAdmin {
    pub id_pedido: i64,
    pub data_criacao: String,
    pub id_cliente: i64,
    pub nome_completo: String,
    pub email_cliente: String,
    pub valor_total: f64,
    pub forma_pagamento: Option<String>,
    pub status: String,
    pub rua: Option<String>,
    pub numero: Option<String>,
    pub bairro: Option<String>,
    pub cep: Option<String>,
    pub complemento: Option<String>,
    pub cupcakes: Vec<Cupcake>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AtualizarStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct TotalPorStatus {
    pub status: String,
    pub total_pedidos: i64,
    pub valor_total: f64,
}

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct TotalPorFormaPagamento {
    pub forma_pagamento: String,
    pub total_pedidos: i64,
    pub valor_total: f64,
}

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct IngredienteMaisPedido {
    pub nome: String,
    pub tipo: String,
    pub total_pedido: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RelatorioPedidos {
    pub por_status: Vec<TotalPorStatus>,
    pub por_forma_pagamento: Vec<TotalPorFormaPagamento>,
    pub ingredientes_mais_pedidos: Vec<IngredienteMaisPedido>,
}
