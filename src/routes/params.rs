use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Valida um identificador vindo de path ou corpo: inteiro maior que zero.
pub fn validar_id(id: i64, campo: &str) -> AppResult<i64> {
    if id > 0 {
        Ok(id)
    } else {
        Err(AppError::Validation(format!(
            "ID de {campo} inválido. Deve ser um número maior que 0."
        )))
    }
}

/// Converte um parâmetro de rota em identificador, com a mesma regra.
pub fn parse_id(valor: &str, campo: &str) -> AppResult<i64> {
    match valor.trim().parse::<i64>() {
        Ok(id) => validar_id(id, campo),
        Err(_) => Err(AppError::Validation(format!(
            "ID de {campo} inválido. Deve ser um número maior que 0."
        ))),
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FiltroPedidos {
    pub filtro: Option<String>,
}
