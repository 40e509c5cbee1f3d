use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::ClientePublico;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CadastrarClienteRequest {
    pub nome_completo: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
    pub cpf: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub senha: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub exp: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub mensagem: String,
    pub token: String,
    pub cliente: ClientePublico,
}
