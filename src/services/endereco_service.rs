use crate::{
    db::DbPool,
    dto::enderecos::EnderecoCriado,
    error::{AppError, AppResult},
    models::Endereco,
};

pub async fn adicionar_endereco(
    pool: &DbPool,
    id_cliente: i64,
    rua: &str,
    numero: &str,
    cep: &str,
    bairro: &str,
    complemento: Option<&str>,
) -> AppResult<EnderecoCriado> {
    let cliente: Option<(i64,)> =
        sqlx::query_as("SELECT id_cliente FROM clientes WHERE id_cliente = $1")
            .bind(id_cliente)
            .fetch_optional(pool)
            .await?;
    if cliente.is_none() {
        return Err(AppError::NotFound("Cliente não encontrado.".to_string()));
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO enderecos (id_cliente, rua, numero, cep, bairro, complemento)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING id_endereco",
    )
    .bind(id_cliente)
    .bind(rua)
    .bind(numero)
    .bind(cep)
    .bind(bairro)
    .bind(complemento)
    .fetch_one(pool)
    .await?;

    Ok(EnderecoCriado {
        id,
        mensagem: "Endereço adicionado com sucesso!".to_string(),
    })
}

pub async fn listar_enderecos(pool: &DbPool) -> AppResult<Vec<Endereco>> {
    let enderecos =
        sqlx::query_as::<_, Endereco>("SELECT * FROM enderecos ORDER BY id_endereco")
            .fetch_all(pool)
            .await?;
    Ok(enderecos)
}
