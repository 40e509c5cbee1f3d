use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::Mensagem,
    dto::clientes::{CadastrarClienteRequest, LoginRequest, LoginResponse},
    error::{AppError, AppResult},
    extract::Json,
    models::ClientePublico,
    services::cliente_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cadastrarCliente", post(cadastrar_cliente))
        .route("/login", post(login_cliente))
        .route("/clientes", get(listar_clientes))
}

#[utoipa::path(
    post,
    path = "/cadastrarCliente",
    request_body = CadastrarClienteRequest,
    responses(
        (status = 201, description = "Conta criada", body = Mensagem),
        (status = 400, description = "Dados inválidos ou já cadastrados"),
    ),
    tag = "Clientes"
)]
pub async fn cadastrar_cliente(
    State(state): State<AppState>,
    Json(payload): Json<CadastrarClienteRequest>,
) -> AppResult<(StatusCode, Json<Mensagem>)> {
    let (nome_completo, email, senha, cpf) = match (
        payload.nome_completo,
        payload.email,
        payload.senha,
        payload.cpf,
    ) {
        (Some(n), Some(e), Some(s), Some(c))
            if !n.is_empty() && !e.is_empty() && !s.is_empty() && !c.is_empty() =>
        {
            (n, e, s, c)
        }
        _ => {
            return Err(AppError::Validation(
                "Preencha todos os campos obrigatórios!".to_string(),
            ));
        }
    };

    let mensagem =
        cliente_service::cadastrar_cliente(&state.pool, &nome_completo, &email, &senha, &cpf)
            .await?;
    Ok((StatusCode::CREATED, Json(mensagem)))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login realizado", body = LoginResponse),
        (status = 401, description = "Credenciais inválidas"),
    ),
    tag = "Clientes"
)]
pub async fn login_cliente(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (email, senha) = match (payload.email, payload.senha) {
        (Some(e), Some(s)) if !e.is_empty() && !s.is_empty() => (e, s),
        _ => {
            return Err(AppError::Validation(
                "Informe e-mail e senha.".to_string(),
            ));
        }
    };

    let resposta =
        cliente_service::login_cliente(&state.pool, &state.config.jwt_secret, &email, &senha)
            .await?;
    Ok(Json(resposta))
}

#[utoipa::path(
    get,
    path = "/clientes",
    responses(
        (status = 200, description = "Clientes cadastrados", body = [ClientePublico]),
    ),
    tag = "Clientes"
)]
pub async fn listar_clientes(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ClientePublico>>> {
    let clientes = cliente_service::listar_clientes(&state.pool).await?;
    Ok(Json(clientes))
}
