use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Registro completo do cliente. Carrega o hash da senha, portanto nunca é
/// serializado em resposta; o formato público é `ClientePublico`.
#[derive(Debug, Clone, FromRow)]
pub struct Cliente {
    pub id_cliente: i64,
    pub nome_completo: String,
    pub email: String,
    pub senha: String,
    pub cpf: String,
    pub data_criacao: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClientePublico {
    pub id_cliente: i64,
    pub nome_completo: String,
    pub email: String,
    pub cpf: String,
    pub data_criacao: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Ingrediente {
    pub id_ingrediente: i64,
    pub nome: String,
    pub tipo: String,
    pub valor: f64,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PedidoCarrinho {
    pub id_pedido_carrinho: i64,
    pub id_cliente: i64,
    pub valor_total: f64,
    pub quantidade: i32,
    pub data_criacao: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Pedido {
    pub id_pedido: i64,
    pub id_cliente: i64,
    pub valor_total: f64,
    pub quantidade: Option<i32>,
    pub forma_pagamento: Option<String>,
    pub status: String,
    pub data_criacao: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Endereco {
    pub id_endereco: i64,
    pub id_cliente: i64,
    pub rua: String,
    pub numero: String,
    pub cep: String,
    pub bairro: String,
    pub complemento: Option<String>,
    pub data_criacao: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Feedback {
    pub id_feedback: i64,
    pub id_cliente: i64,
    pub estrelas: i32,
    pub comentario: String,
    pub foto: Option<String>,
    pub data_criacao: DateTime<Utc>,
}

/// Papéis de um ingrediente na montagem do cupcake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TipoIngrediente {
    Tamanho,
    Recheio,
    Cobertura,
    CorCobertura,
}

impl TipoIngrediente {
    pub fn parse(valor: &str) -> Option<Self> {
        match valor {
            "tamanho" => Some(Self::Tamanho),
            "recheio" => Some(Self::Recheio),
            "cobertura" => Some(Self::Cobertura),
            "cor_cobertura" => Some(Self::CorCobertura),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tamanho => "tamanho",
            Self::Recheio => "recheio",
            Self::Cobertura => "cobertura",
            Self::CorCobertura => "cor_cobertura",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FormaPagamento {
    Pix,
    Dinheiro,
    Cartao,
    Maquina,
}

impl FormaPagamento {
    pub fn parse(valor: &str) -> Option<Self> {
        match valor {
            "pix" => Some(Self::Pix),
            "dinheiro" => Some(Self::Dinheiro),
            "cartao" => Some(Self::Cartao),
            "maquina" => Some(Self::Maquina),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pix => "pix",
            Self::Dinheiro => "dinheiro",
            Self::Cartao => "cartao",
            Self::Maquina => "maquina",
        }
    }
}

pub const STATUS_VALIDOS: [&str; 4] = ["aguardando", "pendente", "concluido", "cancelado"];
