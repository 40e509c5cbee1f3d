use axum::{
    Router,
    extract::{Path, Query, State},
    routing::{get, put},
};

use crate::{
    dto::Mensagem,
    dto::admin::{AtualizarStatusRequest, PedidoAdmin, RelatorioPedidos},
    error::{AppError, AppResult},
    extract::Json,
    routes::params::{FiltroPedidos, parse_id},
    services::admin_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/pedidos", get(listar_pedidos_admin))
        .route("/admin/pedidos/{id}", put(atualizar_status_pedido))
        .route("/relatorio", get(relatorio_pedidos))
}

#[utoipa::path(
    get,
    path = "/admin/pedidos",
    params(
        ("filtro" = Option<String>, Query, description = "Status dos pedidos, padrão aguardando")
    ),
    responses(
        (status = 200, description = "Pedidos com cupcakes reconstruídos", body = [PedidoAdmin]),
    ),
    tag = "Admin"
)]
pub async fn listar_pedidos_admin(
    State(state): State<AppState>,
    Query(query): Query<FiltroPedidos>,
) -> AppResult<Json<Vec<PedidoAdmin>>> {
    let filtro = query.filtro.unwrap_or_else(|| "aguardando".to_string());
    let pedidos = admin_service::listar_pedidos_admin(&state.pool, &filtro).await?;
    Ok(Json(pedidos))
}

#[utoipa::path(
    put,
    path = "/admin/pedidos/{id}",
    params(
        ("id" = i64, Path, description = "ID do pedido")
    ),
    request_body = AtualizarStatusRequest,
    responses(
        (status = 200, description = "Status atualizado", body = Mensagem),
        (status = 400, description = "Status inválido"),
        (status = 404, description = "Pedido não encontrado"),
    ),
    tag = "Admin"
)]
pub async fn atualizar_status_pedido(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AtualizarStatusRequest>,
) -> AppResult<Json<Mensagem>> {
    let id = parse_id(&id, "pedido")?;
    let status = payload
        .status
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("Status é obrigatório.".to_string()))?;

    let mensagem = admin_service::atualizar_status_pedido(&state.pool, id, &status).await?;
    Ok(Json(mensagem))
}

#[utoipa::path(
    get,
    path = "/relatorio",
    responses(
        (status = 200, description = "Totais por status e forma de pagamento", body = RelatorioPedidos),
    ),
    tag = "Admin"
)]
pub async fn relatorio_pedidos(
    State(state): State<AppState>,
) -> AppResult<Json<RelatorioPedidos>> {
    let relatorio = admin_service::relatorio_pedidos(&state.pool).await?;
    Ok(Json(relatorio))
}
