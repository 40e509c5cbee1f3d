use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("falha na transação ao {context}")]
    Transaction {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("erro de banco de dados")]
    Db(#[from] sqlx::Error),

    #[error("erro interno")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Wraps a driver error with the transaction step it interrupted.
    pub fn transacao(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Transaction { context, source }
    }
}

#[derive(Serialize)]
struct ErroBody {
    erro: String,
}

const ERRO_INTERNO: &str = "Erro interno no servidor.";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, erro) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Transaction { context, source } => {
                tracing::error!(error = %source, "falha na transação ao {context}");
                (StatusCode::INTERNAL_SERVER_ERROR, ERRO_INTERNO.to_string())
            }
            AppError::Db(err) => {
                tracing::error!(error = %err, "erro de banco de dados");
                (StatusCode::INTERNAL_SERVER_ERROR, ERRO_INTERNO.to_string())
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "erro interno");
                (StatusCode::INTERNAL_SERVER_ERROR, ERRO_INTERNO.to_string())
            }
        };

        (status, axum::Json(ErroBody { erro })).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
