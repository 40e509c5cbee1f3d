use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};

use crate::{
    dto::pedidos::{
        AguardandoExcluidos, FazerPedidoRequest, FinalizarPedidoRequest, PedidoDiretoCriado,
        PedidoDiretoRequest, PedidosConfirmados, PedidosFinalizados, RegistrarResumoRequest,
        ResumoPedido, ResumoRegistrado,
    },
    error::{AppError, AppResult},
    extract::Json,
    routes::params::{parse_id, validar_id},
    services::{pedido_service, resumo_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/resumo/{id_cliente}", get(resumo_do_pedido))
        .route("/resumo", post(registrar_resumo))
        .route("/fazerPedido", post(fazer_pedido))
        .route("/finalizarPedido", post(finalizar_pedido))
        .route("/fazerPedidoDireto", post(fazer_pedido_direto))
        .route(
            "/pedidos/aguardando/{id_cliente}",
            delete(apagar_pedidos_aguardando),
        )
}

#[utoipa::path(
    get,
    path = "/resumo/{id_cliente}",
    params(
        ("id_cliente" = i64, Path, description = "ID do cliente")
    ),
    responses(
        (status = 200, description = "Resumo do que o cliente tem a pagar", body = ResumoPedido),
        (status = 400, description = "ID inválido"),
        (status = 404, description = "Cliente não encontrado"),
    ),
    tag = "Pedidos"
)]
pub async fn resumo_do_pedido(
    State(state): State<AppState>,
    Path(id_cliente): Path<String>,
) -> AppResult<Json<ResumoPedido>> {
    let id_cliente = parse_id(&id_cliente, "cliente")?;
    let resumo = resumo_service::resumo_do_pedido(&state.pool, id_cliente).await?;
    Ok(Json(resumo))
}

#[utoipa::path(
    post,
    path = "/resumo",
    request_body = RegistrarResumoRequest,
    responses(
        (status = 201, description = "Carrinho fechado em um pedido aguardando pagamento", body = ResumoRegistrado),
        (status = 400, description = "Dados incompletos ou carrinho vazio"),
        (status = 404, description = "Cliente não encontrado"),
    ),
    tag = "Pedidos"
)]
pub async fn registrar_resumo(
    State(state): State<AppState>,
    Json(payload): Json<RegistrarResumoRequest>,
) -> AppResult<(StatusCode, Json<ResumoRegistrado>)> {
    let (id_cliente, forma_pagamento, quantidade) = match (
        payload.id_cliente,
        payload.forma_pagamento,
        payload.quantidade,
    ) {
        (Some(id), Some(forma), Some(qtd)) if !forma.is_empty() => (id, forma, qtd),
        _ => {
            return Err(AppError::Validation(
                "Dados incompletos. Verifique os campos enviados.".to_string(),
            ));
        }
    };
    let id_cliente = validar_id(id_cliente, "cliente")?;

    let resposta =
        resumo_service::registrar_resumo(&state.pool, id_cliente, &forma_pagamento, quantidade)
            .await?;
    Ok((StatusCode::CREATED, Json(resposta)))
}

#[utoipa::path(
    post,
    path = "/fazerPedido",
    request_body = FazerPedidoRequest,
    responses(
        (status = 200, description = "Pedidos aguardando confirmados para pagamento", body = PedidosConfirmados),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Nenhum pedido aguardando pagamento"),
    ),
    tag = "Pedidos"
)]
pub async fn fazer_pedido(
    State(state): State<AppState>,
    Json(payload): Json<FazerPedidoRequest>,
) -> AppResult<Json<PedidosConfirmados>> {
    let (id_cliente, forma_pagamento, total, quantidade) = match (
        payload.id_cliente,
        payload.forma_pagamento,
        payload.total,
        payload.quantidade,
    ) {
        (Some(id), Some(forma), Some(total), Some(qtd)) if !forma.is_empty() => {
            (id, forma, total, qtd)
        }
        _ => {
            return Err(AppError::Validation(
                "Dados inválidos para fazer o pedido.".to_string(),
            ));
        }
    };
    let id_cliente = validar_id(id_cliente, "cliente")?;

    let resposta =
        resumo_service::fazer_pedido(&state.pool, id_cliente, &forma_pagamento, total, quantidade)
            .await?;
    Ok(Json(resposta))
}

#[utoipa::path(
    post,
    path = "/finalizarPedido",
    request_body = FinalizarPedidoRequest,
    responses(
        (status = 200, description = "Cada linha do carrinho virou um pedido aguardando", body = PedidosFinalizados),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Cliente não encontrado"),
    ),
    tag = "Pedidos"
)]
pub async fn finalizar_pedido(
    State(state): State<AppState>,
    Json(payload): Json<FinalizarPedidoRequest>,
) -> AppResult<Json<PedidosFinalizados>> {
    let id_cliente = payload.id_cliente.ok_or_else(|| {
        AppError::Validation("Informe o id_cliente.".to_string())
    })?;
    let id_cliente = validar_id(id_cliente, "cliente")?;

    let resposta = pedido_service::finalizar_pedido(&state.pool, id_cliente).await?;
    Ok(Json(resposta))
}

#[utoipa::path(
    post,
    path = "/fazerPedidoDireto",
    request_body = PedidoDiretoRequest,
    responses(
        (status = 201, description = "Pedido criado direto dos ingredientes", body = PedidoDiretoCriado),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Cliente não encontrado"),
    ),
    tag = "Pedidos"
)]
pub async fn fazer_pedido_direto(
    State(state): State<AppState>,
    Json(payload): Json<PedidoDiretoRequest>,
) -> AppResult<(StatusCode, Json<PedidoDiretoCriado>)> {
    let (id_cliente, ingredientes, quantidade) = match (
        payload.id_cliente,
        payload.ingredientes,
        payload.quantidade,
    ) {
        (Some(id), Some(ing), Some(qtd)) => (id, ing, qtd),
        _ => {
            return Err(AppError::Validation(
                "Informe id_cliente, ingredientes e quantidade.".to_string(),
            ));
        }
    };
    let id_cliente = validar_id(id_cliente, "cliente")?;

    let resposta =
        pedido_service::fazer_pedido_direto(&state.pool, id_cliente, &ingredientes, quantidade)
            .await?;
    Ok((StatusCode::CREATED, Json(resposta)))
}

#[utoipa::path(
    delete,
    path = "/pedidos/aguardando/{id_cliente}",
    params(
        ("id_cliente" = i64, Path, description = "ID do cliente")
    ),
    responses(
        (status = 200, description = "Pedidos aguardando excluídos", body = AguardandoExcluidos),
        (status = 400, description = "ID inválido"),
    ),
    tag = "Pedidos"
)]
pub async fn apagar_pedidos_aguardando(
    State(state): State<AppState>,
    Path(id_cliente): Path<String>,
) -> AppResult<Json<AguardandoExcluidos>> {
    let id_cliente = parse_id(&id_cliente, "cliente")?;
    let resposta = resumo_service::apagar_pedidos_aguardando(&state.pool, id_cliente).await?;
    Ok(Json(resposta))
}
