use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Resumo calculado ao vivo sobre o carrinho e os pedidos aguardando pagamento.
#[derive(Debug, Serialize, ToSchema)]
pub struct ResumoPedido {
    pub quantidade: i64,
    pub subtotal: f64,
    #[serde(rename = "taxaServico")]
    pub taxa_servico: f64,
    #[serde(rename = "taxaEntrega")]
    pub taxa_entrega: f64,
    pub total: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegistrarResumoRequest {
    pub id_cliente: Option<i64>,
    pub forma_pagamento: Option<String>,
    pub quantidade: Option<i32>,
    pub total: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResumoRegistrado {
    pub mensagem: String,
    pub id_pedido: i64,
    pub valor_total: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FazerPedidoRequest {
    pub id_cliente: Option<i64>,
    pub forma_pagamento: Option<String>,
    pub total: Option<f64>,
    pub quantidade: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PedidosConfirmados {
    pub mensagem: String,
    pub pedidos: Vec<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FinalizarPedidoRequest {
    pub id_cliente: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PedidoFinalizado {
    pub id_pedido: i64,
    pub valor_total: f64,
    pub quantidade: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PedidosFinalizados {
    pub mensagem: String,
    pub pedidos: Vec<PedidoFinalizado>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PedidoDiretoRequest {
    pub id_cliente: Option<i64>,
    pub ingredientes: Option<Vec<i64>>,
    pub quantidade: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PedidoDiretoCriado {
    pub mensagem: String,
    pub id_pedido: i64,
    pub valor_total: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AguardandoExcluidos {
    pub mensagem: String,
    pub excluidos: u64,
}
