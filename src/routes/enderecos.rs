use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::enderecos::{EnderecoCriado, NovoEnderecoRequest},
    error::{AppError, AppResult},
    extract::Json,
    models::Endereco,
    routes::params::validar_id,
    services::endereco_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/endereco", post(adicionar_endereco))
        .route("/enderecos", get(listar_enderecos))
}

#[utoipa::path(
    post,
    path = "/endereco",
    request_body = NovoEnderecoRequest,
    responses(
        (status = 201, description = "Endereço cadastrado", body = EnderecoCriado),
        (status = 400, description = "Campos obrigatórios faltando"),
        (status = 404, description = "Cliente não encontrado"),
    ),
    tag = "Enderecos"
)]
pub async fn adicionar_endereco(
    State(state): State<AppState>,
    Json(payload): Json<NovoEnderecoRequest>,
) -> AppResult<(StatusCode, Json<EnderecoCriado>)> {
    let (id_cliente, rua, numero, cep, bairro) = match (
        payload.id_cliente,
        payload.rua,
        payload.numero,
        payload.cep,
        payload.bairro,
    ) {
        (Some(id), Some(rua), Some(numero), Some(cep), Some(bairro))
            if !rua.is_empty() && !numero.is_empty() && !cep.is_empty() && !bairro.is_empty() =>
        {
            (id, rua, numero, cep, bairro)
        }
        _ => {
            return Err(AppError::Validation(
                "Campos obrigatórios estão faltando.".to_string(),
            ));
        }
    };
    let id_cliente = validar_id(id_cliente, "cliente")?;

    let resposta = endereco_service::adicionar_endereco(
        &state.pool,
        id_cliente,
        &rua,
        &numero,
        &cep,
        &bairro,
        payload.complemento.as_deref(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(resposta)))
}

#[utoipa::path(
    get,
    path = "/enderecos",
    responses(
        (status = 200, description = "Endereços cadastrados", body = [Endereco]),
    ),
    tag = "Enderecos"
)]
pub async fn listar_enderecos(State(state): State<AppState>) -> AppResult<Json<Vec<Endereco>>> {
    let enderecos = endereco_service::listar_enderecos(&state.pool).await?;
    Ok(Json(enderecos))
}
