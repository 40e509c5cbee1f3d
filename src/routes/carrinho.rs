use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};

use crate::{
    dto::Mensagem,
    dto::carrinho::{AdicionarAoCarrinhoRequest, CarrinhoAdicionado, ItemCarrinho},
    error::{AppError, AppResult},
    extract::Json,
    routes::params::{parse_id, validar_id},
    services::carrinho_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/adicionarAoCarrinho", post(adicionar_ao_carrinho))
        .route("/carrinho/{id_cliente}", get(listar_carrinho))
        .route("/excluirPedidoCarrinho/{id}", delete(excluir_pedido_carrinho))
}

#[utoipa::path(
    post,
    path = "/adicionarAoCarrinho",
    request_body = AdicionarAoCarrinhoRequest,
    responses(
        (status = 201, description = "Cupcake adicionado ao carrinho", body = CarrinhoAdicionado),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Cliente não encontrado"),
    ),
    tag = "Carrinho"
)]
pub async fn adicionar_ao_carrinho(
    State(state): State<AppState>,
    Json(payload): Json<AdicionarAoCarrinhoRequest>,
) -> AppResult<(StatusCode, Json<CarrinhoAdicionado>)> {
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
        carrinho_service::adicionar_ao_carrinho(&state.pool, id_cliente, &ingredientes, quantidade)
            .await?;
    Ok((StatusCode::CREATED, Json(resposta)))
}

#[utoipa::path(
    get,
    path = "/carrinho/{id_cliente}",
    params(
        ("id_cliente" = i64, Path, description = "ID do cliente")
    ),
    responses(
        (status = 200, description = "Linhas do carrinho do cliente", body = [ItemCarrinho]),
        (status = 400, description = "ID inválido"),
    ),
    tag = "Carrinho"
)]
pub async fn listar_carrinho(
    State(state): State<AppState>,
    Path(id_cliente): Path<String>,
) -> AppResult<Json<Vec<ItemCarrinho>>> {
    let id_cliente = parse_id(&id_cliente, "cliente")?;
    let itens = carrinho_service::listar_carrinho(&state.pool, id_cliente).await?;
    Ok(Json(itens))
}

#[utoipa::path(
    delete,
    path = "/excluirPedidoCarrinho/{id}",
    params(
        ("id" = i64, Path, description = "ID da linha do carrinho")
    ),
    responses(
        (status = 200, description = "Linha removida", body = Mensagem),
        (status = 404, description = "Linha não encontrada"),
    ),
    tag = "Carrinho"
)]
pub async fn excluir_pedido_carrinho(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Mensagem>> {
    let id = parse_id(&id, "pedido do carrinho")?;
    let mensagem = carrinho_service::excluir_pedido_carrinho(&state.pool, id).await?;
    Ok(Json(mensagem))
}
