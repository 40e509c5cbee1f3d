use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct NovoIngredienteRequest {
    pub nome: Option<String>,
    pub tipo: Option<String>,
    pub valor: Option<f64>,
}
