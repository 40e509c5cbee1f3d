use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};

use crate::{
    dto::Mensagem,
    dto::feedbacks::{FeedbackComCliente, FeedbackCriado, NovoFeedbackRequest},
    error::{AppError, AppResult},
    extract::Json,
    routes::params::{parse_id, validar_id},
    services::feedback_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/feedbacks", get(listar_feedbacks).post(adicionar_feedback))
        .route("/feedbacks/{id}", delete(excluir_feedback))
}

#[utoipa::path(
    get,
    path = "/feedbacks",
    responses(
        (status = 200, description = "Feedbacks com dados do cliente", body = [FeedbackComCliente]),
    ),
    tag = "Feedbacks"
)]
pub async fn listar_feedbacks(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<FeedbackComCliente>>> {
    let feedbacks = feedback_service::listar_feedbacks(&state.pool).await?;
    Ok(Json(feedbacks))
}

#[utoipa::path(
    post,
    path = "/feedbacks",
    request_body = NovoFeedbackRequest,
    responses(
        (status = 201, description = "Feedback registrado", body = FeedbackCriado),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Cliente não encontrado"),
    ),
    tag = "Feedbacks"
)]
pub async fn adicionar_feedback(
    State(state): State<AppState>,
    Json(payload): Json<NovoFeedbackRequest>,
) -> AppResult<(StatusCode, Json<FeedbackCriado>)> {
    let (id_cliente, estrelas, comentario) = match (
        payload.id_cliente,
        payload.estrelas,
        payload.comentario,
    ) {
        (Some(id), Some(estrelas), Some(comentario)) if !comentario.is_empty() => {
            (id, estrelas, comentario)
        }
        _ => {
            return Err(AppError::Validation(
                "Informe id_cliente, estrelas e comentario.".to_string(),
            ));
        }
    };
    let id_cliente = validar_id(id_cliente, "cliente")?;

    let resposta = feedback_service::adicionar_feedback(
        &state.pool,
        id_cliente,
        estrelas,
        &comentario,
        payload.foto.as_deref(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(resposta)))
}

#[utoipa::path(
    delete,
    path = "/feedbacks/{id}",
    params(
        ("id" = i64, Path, description = "ID do feedback")
    ),
    responses(
        (status = 200, description = "Feedback excluído", body = Mensagem),
        (status = 404, description = "Feedback não encontrado"),
    ),
    tag = "Feedbacks"
)]
pub async fn excluir_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Mensagem>> {
    let id = parse_id(&id, "feedback")?;
    let mensagem = feedback_service::excluir_feedback(&state.pool, id).await?;
    Ok(Json(mensagem))
}
