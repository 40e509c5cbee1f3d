use std::collections::HashMap;

use crate::{
    db::DbPool,
    dto::Mensagem,
    error::{AppError, AppResult},
    models::{Ingrediente, TipoIngrediente},
};

pub async fn listar_ingredientes(pool: &DbPool) -> AppResult<Vec<Ingrediente>> {
    let ingredientes = sqlx::query_as::<_, Ingrediente>(
        "SELECT id_ingrediente, nome, tipo, valor FROM ingredientes ORDER BY tipo, nome",
    )
    .fetch_all(pool)
    .await?;
    Ok(ingredientes)
}

pub async fn listar_por_tipo(pool: &DbPool, tipo: &str) -> AppResult<Vec<Ingrediente>> {
    let tipo = TipoIngrediente::parse(tipo).ok_or_else(|| {
        AppError::Validation(
            "Tipo inválido. Use tamanho, recheio, cobertura ou cor_cobertura.".to_string(),
        )
    })?;

    let ingredientes = sqlx::query_as::<_, Ingrediente>(
        "SELECT id_ingrediente, nome, tipo, valor FROM ingredientes WHERE tipo = $1 ORDER BY nome",
    )
    .bind(tipo.as_str())
    .fetch_all(pool)
    .await?;
    Ok(ingredientes)
}

pub async fn adicionar_ingrediente(
    pool: &DbPool,
    nome: &str,
    tipo: &str,
    valor: f64,
) -> AppResult<Ingrediente> {
    let tipo = TipoIngrediente::parse(tipo).ok_or_else(|| {
        AppError::Validation(
            "Tipo inválido. Use tamanho, recheio, cobertura ou cor_cobertura.".to_string(),
        )
    })?;
    if valor < 0.0 {
        return Err(AppError::Validation(
            "O valor do ingrediente não pode ser negativo.".to_string(),
        ));
    }

    let existente: Option<(i64,)> =
        sqlx::query_as("SELECT id_ingrediente FROM ingredientes WHERE nome = $1 AND tipo = $2")
            .bind(nome)
            .bind(tipo.as_str())
            .fetch_optional(pool)
            .await?;
    if existente.is_some() {
        return Err(AppError::Conflict(
            "Esse ingrediente já está cadastrado.".to_string(),
        ));
    }

    let ingrediente = sqlx::query_as::<_, Ingrediente>(
        "INSERT INTO ingredientes (nome, tipo, valor) VALUES ($1, $2, $3)
         RETURNING id_ingrediente, nome, tipo, valor",
    )
    .bind(nome)
    .bind(tipo.as_str())
    .bind(valor)
    .fetch_one(pool)
    .await?;
    Ok(ingrediente)
}

pub async fn excluir_ingrediente(pool: &DbPool, id_ingrediente: i64) -> AppResult<Mensagem> {
    let result = sqlx::query("DELETE FROM ingredientes WHERE id_ingrediente = $1")
        .bind(id_ingrediente)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Ingrediente não encontrado".to_string()));
    }
    Ok(Mensagem::new("Ingrediente excluído com sucesso"))
}

/// Soma o valor unitário dos ingredientes pedidos, respeitando repetições,
/// e falha se algum id não existir no catálogo.
pub(crate) async fn somar_valores(pool: &DbPool, ids: &[i64]) -> AppResult<f64> {
    let precos: Vec<(i64, f64)> = sqlx::query_as(
        "SELECT id_ingrediente, valor FROM ingredientes WHERE id_ingrediente = ANY($1)",
    )
    .bind(ids)
    .fetch_all(pool)
    .await?;

    let por_id: HashMap<i64, f64> = precos.into_iter().collect();
    let mut soma = 0.0;
    for id in ids {
        match por_id.get(id) {
            Some(valor) => soma += valor,
            None => {
                return Err(AppError::Validation(
                    "Um ou mais ingredientes informados não existem.".to_string(),
                ));
            }
        }
    }
    Ok(soma)
}
