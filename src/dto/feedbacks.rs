use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct NovoFeedbackRequest {
    pub id_cliente: Option<i64>,
    pub estrelas: Option<i32>,
    pub comentario: Option<String>,
    pub foto: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeedbackCriado {
    pub id: i64,
    pub mensagem: String,
}

/// Feedback com os dados do cliente que o publicou.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct FeedbackComCliente {
    pub id_feedback: i64,
    pub id_cliente: i64,
    pub estrelas: i32,
    pub comentario: String,
    pub foto: Option<String>,
    pub data_criacao: DateTime<Utc>,
    pub nome_cliente: String,
    pub email_cliente: String,
}
