use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::{
    db::DbPool,
    dto::Mensagem,
    dto::carrinho::{CarrinhoAdicionado, ItemCarrinho},
    error::{AppError, AppResult},
    models::Ingrediente,
    services::ingrediente_service,
};

pub async fn adicionar_ao_carrinho(
    pool: &DbPool,
    id_cliente: i64,
    ingredientes: &[i64],
    quantidade: i32,
) -> AppResult<CarrinhoAdicionado> {
    if quantidade <= 0 {
        return Err(AppError::Validation(
            "A quantidade deve ser maior que zero.".to_string(),
        ));
    }
    if ingredientes.is_empty() {
        return Err(AppError::Validation(
            "Informe ao menos um ingrediente.".to_string(),
        ));
    }

    let cliente: Option<(i64,)> =
        sqlx::query_as("SELECT id_cliente FROM clientes WHERE id_cliente = $1")
            .bind(id_cliente)
            .fetch_optional(pool)
            .await?;
    if cliente.is_none() {
        return Err(AppError::NotFound("Cliente não encontrado.".to_string()));
    }

    let valor_unitario = ingrediente_service::somar_valores(pool, ingredientes).await?;
    let valor_total = super::resumo_service::round2(valor_unitario * f64::from(quantidade));

    let mut tx = pool
        .begin()
        .await
        .map_err(AppError::transacao("abrir transação"))?;

    let (id_pedido,): (i64,) = sqlx::query_as(
        "INSERT INTO pedidos_carrinho (id_cliente, valor_total, quantidade)
         VALUES ($1, $2, $3) RETURNING id_pedido_carrinho",
    )
    .bind(id_cliente)
    .bind(valor_total)
    .bind(quantidade)
    .fetch_one(&mut *tx)
    .await
    .map_err(AppError::transacao("criar linha do carrinho"))?;

    for id_ingrediente in ingredientes {
        sqlx::query(
            "INSERT INTO pedidos_carrinho_ingredientes (id_pedido_carrinho, id_ingrediente)
             VALUES ($1, $2)",
        )
        .bind(id_pedido)
        .bind(id_ingrediente)
        .execute(&mut *tx)
        .await
        .map_err(AppError::transacao("vincular ingredientes ao carrinho"))?;
    }

    tx.commit()
        .await
        .map_err(AppError::transacao("confirmar transação"))?;

    Ok(CarrinhoAdicionado {
        mensagem: "Pedido adicionado ao carrinho!".to_string(),
        id_pedido,
    })
}

#[derive(FromRow)]
struct LinhaCarrinhoRow {
    id_pedido_carrinho: i64,
    quantidade: i32,
    valor_total: f64,
    data_criacao: DateTime<Utc>,
    id_ingrediente: Option<i64>,
    nome: Option<String>,
    tipo: Option<String>,
    valor: Option<f64>,
}

pub async fn listar_carrinho(pool: &DbPool, id_cliente: i64) -> AppResult<Vec<ItemCarrinho>> {
    let rows = sqlx::query_as::<_, LinhaCarrinhoRow>(
        r#"
        SELECT pc.id_pedido_carrinho, pc.quantidade, pc.valor_total, pc.data_criacao,
               i.id_ingrediente, i.nome, i.tipo, i.valor
        FROM pedidos_carrinho pc
        LEFT JOIN pedidos_carrinho_ingredientes pci
               ON pci.id_pedido_carrinho = pc.id_pedido_carrinho
        LEFT JOIN ingredientes i ON i.id_ingrediente = pci.id_ingrediente
        WHERE pc.id_cliente = $1
        ORDER BY pc.id_pedido_carrinho, i.tipo
        "#,
    )
    .bind(id_cliente)
    .fetch_all(pool)
    .await?;

    let mut itens: BTreeMap<i64, ItemCarrinho> = BTreeMap::new();
    for row in rows {
        let item = itens
            .entry(row.id_pedido_carrinho)
            .or_insert_with(|| ItemCarrinho {
                id_pedido_carrinho: row.id_pedido_carrinho,
                quantidade: row.quantidade,
                valor_total: row.valor_total,
                data_criacao: row.data_criacao,
                ingredientes: Vec::new(),
            });
        if let (Some(id), Some(nome), Some(tipo), Some(valor)) =
            (row.id_ingrediente, row.nome, row.tipo, row.valor)
        {
            item.ingredientes.push(Ingrediente {
                id_ingrediente: id,
                nome,
                tipo,
                valor,
            });
        }
    }

    Ok(itens.into_values().collect())
}

pub async fn excluir_pedido_carrinho(pool: &DbPool, id_pedido_carrinho: i64) -> AppResult<Mensagem> {
    let mut tx = pool
        .begin()
        .await
        .map_err(AppError::transacao("abrir transação"))?;

    sqlx::query("DELETE FROM pedidos_carrinho_ingredientes WHERE id_pedido_carrinho = $1")
        .bind(id_pedido_carrinho)
        .execute(&mut *tx)
        .await
        .map_err(AppError::transacao("remover ingredientes da linha"))?;

    let result = sqlx::query("DELETE FROM pedidos_carrinho WHERE id_pedido_carrinho = $1")
        .bind(id_pedido_carrinho)
        .execute(&mut *tx)
        .await
        .map_err(AppError::transacao("remover linha do carrinho"))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(
            "Pedido do carrinho não encontrado.".to_string(),
        ));
    }

    tx.commit()
        .await
        .map_err(AppError::transacao("confirmar transação"))?;

    Ok(Mensagem::new("Pedido removido do carrinho."))
}
