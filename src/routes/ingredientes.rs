use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::Mensagem,
    dto::ingredientes::NovoIngredienteRequest,
    error::{AppError, AppResult},
    extract::Json,
    models::Ingrediente,
    routes::params::parse_id,
    services::ingrediente_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/buscarIngredientes", get(buscar_ingredientes))
        .route("/ingredientes", post(adicionar_ingrediente))
        // O mesmo segmento serve de tipo no GET e de id no DELETE.
        .route(
            "/ingredientes/{valor}",
            get(listar_ingredientes_por_tipo).delete(excluir_ingrediente),
        )
}

#[utoipa::path(
    get,
    path = "/buscarIngredientes",
    responses(
        (status = 200, description = "Catálogo completo de ingredientes", body = [Ingrediente]),
    ),
    tag = "Ingredientes"
)]
pub async fn buscar_ingredientes(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Ingrediente>>> {
    let ingredientes = ingrediente_service::listar_ingredientes(&state.pool).await?;
    Ok(Json(ingredientes))
}

#[utoipa::path(
    get,
    path = "/ingredientes/{tipo}",
    params(
        ("tipo" = String, Path, description = "tamanho, recheio, cobertura ou cor_cobertura")
    ),
    responses(
        (status = 200, description = "Ingredientes do tipo", body = [Ingrediente]),
        (status = 400, description = "Tipo inválido"),
    ),
    tag = "Ingredientes"
)]
pub async fn listar_ingredientes_por_tipo(
    State(state): State<AppState>,
    Path(tipo): Path<String>,
) -> AppResult<Json<Vec<Ingrediente>>> {
    let ingredientes = ingrediente_service::listar_por_tipo(&state.pool, &tipo).await?;
    Ok(Json(ingredientes))
}

#[utoipa::path(
    post,
    path = "/ingredientes",
    request_body = NovoIngredienteRequest,
    responses(
        (status = 201, description = "Ingrediente criado", body = Ingrediente),
        (status = 400, description = "Dados inválidos"),
    ),
    tag = "Ingredientes"
)]
pub async fn adicionar_ingrediente(
    State(state): State<AppState>,
    Json(payload): Json<NovoIngredienteRequest>,
) -> AppResult<(StatusCode, Json<Ingrediente>)> {
    let (nome, tipo, valor) = match (payload.nome, payload.tipo, payload.valor) {
        (Some(n), Some(t), Some(v)) if !n.is_empty() && !t.is_empty() => (n, t, v),
        _ => {
            return Err(AppError::Validation(
                "Informe nome, tipo e valor do ingrediente.".to_string(),
            ));
        }
    };

    let ingrediente =
        ingrediente_service::adicionar_ingrediente(&state.pool, &nome, &tipo, valor).await?;
    Ok((StatusCode::CREATED, Json(ingrediente)))
}

#[utoipa::path(
    delete,
    path = "/ingredientes/{id}",
    params(
        ("id" = i64, Path, description = "ID do ingrediente")
    ),
    responses(
        (status = 200, description = "Ingrediente excluído", body = Mensagem),
        (status = 404, description = "Ingrediente não encontrado"),
    ),
    tag = "Ingredientes"
)]
pub async fn excluir_ingrediente(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Mensagem>> {
    let id = parse_id(&id, "ingrediente")?;
    let mensagem = ingrediente_service::excluir_ingrediente(&state.pool, id).await?;
    Ok(Json(mensagem))
}
