use crate::{
    db::DbPool,
    dto::pedidos::{PedidoDiretoCriado, PedidoFinalizado, PedidosFinalizados},
    error::{AppError, AppResult},
    models::PedidoCarrinho,
    services::ingrediente_service,
    services::resumo_service::round2,
};

/// Converte cada linha do carrinho em um pedido `aguardando` próprio, ainda
/// sem forma de pagamento. O registro do resumo reaproveita ou funde esses
/// pedidos depois.
pub async fn finalizar_pedido(pool: &DbPool, id_cliente: i64) -> AppResult<PedidosFinalizados> {
    let mut tx = pool
        .begin()
        .await
        .map_err(AppError::transacao("abrir transação"))?;

    let cliente: Option<(i64,)> =
        sqlx::query_as("SELECT id_cliente FROM clientes WHERE id_cliente = $1 FOR UPDATE")
            .bind(id_cliente)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::transacao("travar cliente"))?;
    if cliente.is_none() {
        return Err(AppError::NotFound("Cliente não encontrado.".to_string()));
    }

    let linhas = sqlx::query_as::<_, PedidoCarrinho>(
        "SELECT * FROM pedidos_carrinho WHERE id_cliente = $1 ORDER BY id_pedido_carrinho",
    )
    .bind(id_cliente)
    .fetch_all(&mut *tx)
    .await
    .map_err(AppError::transacao("ler carrinho"))?;

    let mut pedidos = Vec::with_capacity(linhas.len());
    for linha in linhas {
        let id_pedido: i64 = sqlx::query_scalar(
            "INSERT INTO pedidos (id_cliente, valor_total, quantidade, status)
             VALUES ($1, $2, $3, 'aguardando') RETURNING id_pedido",
        )
        .bind(id_cliente)
        .bind(linha.valor_total)
        .bind(linha.quantidade)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::transacao("criar pedido"))?;

        let grupo: i64 = sqlx::query_scalar("SELECT nextval('grupo_cupcake_seq')")
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::transacao("gerar chave de cupcake"))?;

        sqlx::query(
            "INSERT INTO pedido_ingredientes (id_pedido, id_ingrediente, quantidade, id_cupcake)
             SELECT $1, pci.id_ingrediente, $2, $3
             FROM pedidos_carrinho_ingredientes pci
             WHERE pci.id_pedido_carrinho = $4",
        )
        .bind(id_pedido)
        .bind(linha.quantidade)
        .bind(grupo)
        .bind(linha.id_pedido_carrinho)
        .execute(&mut *tx)
        .await
        .map_err(AppError::transacao("copiar ingredientes do carrinho"))?;

        sqlx::query("DELETE FROM pedidos_carrinho_ingredientes WHERE id_pedido_carrinho = $1")
            .bind(linha.id_pedido_carrinho)
            .execute(&mut *tx)
            .await
            .map_err(AppError::transacao("limpar ingredientes da linha"))?;

        sqlx::query("DELETE FROM pedidos_carrinho WHERE id_pedido_carrinho = $1")
            .bind(linha.id_pedido_carrinho)
            .execute(&mut *tx)
            .await
            .map_err(AppError::transacao("limpar linha do carrinho"))?;

        pedidos.push(PedidoFinalizado {
            id_pedido,
            valor_total: linha.valor_total,
            quantidade: linha.quantidade,
        });
    }

    tx.commit()
        .await
        .map_err(AppError::transacao("confirmar transação"))?;

    Ok(PedidosFinalizados {
        mensagem: "Pedidos enviados para pagamento!".to_string(),
        pedidos,
    })
}

/// Cria um pedido `aguardando` direto dos ingredientes, sem passar pelo
/// carrinho. O total ainda não inclui as taxas; elas entram no resumo.
pub async fn fazer_pedido_direto(
    pool: &DbPool,
    id_cliente: i64,
    ingredientes: &[i64],
    quantidade: i32,
) -> AppResult<PedidoDiretoCriado> {
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

    let valor_unitario = ingrediente_service::somar_valores(pool, ingredientes).await?;
    let valor_total = round2(valor_unitario * f64::from(quantidade));

    let mut tx = pool
        .begin()
        .await
        .map_err(AppError::transacao("abrir transação"))?;

    let cliente: Option<(i64,)> =
        sqlx::query_as("SELECT id_cliente FROM clientes WHERE id_cliente = $1 FOR UPDATE")
            .bind(id_cliente)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::transacao("travar cliente"))?;
    if cliente.is_none() {
        return Err(AppError::NotFound("Cliente não encontrado.".to_string()));
    }

    let id_pedido: i64 = sqlx::query_scalar(
        "INSERT INTO pedidos (id_cliente, valor_total, quantidade, status)
         VALUES ($1, $2, $3, 'aguardando') RETURNING id_pedido",
    )
    .bind(id_cliente)
    .bind(valor_total)
    .bind(quantidade)
    .fetch_one(&mut *tx)
    .await
    .map_err(AppError::transacao("criar pedido"))?;

    let grupo: i64 = sqlx::query_scalar("SELECT nextval('grupo_cupcake_seq')")
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::transacao("gerar chave de cupcake"))?;

    for id_ingrediente in ingredientes {
        sqlx::query(
            "INSERT INTO pedido_ingredientes (id_pedido, id_ingrediente, quantidade, id_cupcake)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(id_pedido)
        .bind(id_ingrediente)
        .bind(quantidade)
        .bind(grupo)
        .execute(&mut *tx)
        .await
        .map_err(AppError::transacao("gravar ingredientes do pedido"))?;
    }

    tx.commit()
        .await
        .map_err(AppError::transacao("confirmar transação"))?;

    Ok(PedidoDiretoCriado {
        mensagem: "Pedido enviado para pagamento.".to_string(),
        id_pedido,
        valor_total,
    })
}
