use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct NovoEnderecoRequest {
    pub id_cliente: Option<i64>,
    pub rua: Option<String>,
    pub numero: Option<String>,
    pub cep: Option<String>,
    pub bairro: Option<String>,
    pub complemento: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EnderecoCriado {
    pub id: i64,
    pub mensagem: String,
}
