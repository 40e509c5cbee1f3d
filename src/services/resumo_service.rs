use crate::{
    db::DbPool,
    dto::pedidos::{AguardandoExcluidos, PedidosConfirmados, ResumoPedido, ResumoRegistrado},
    error::{AppError, AppResult},
    models::FormaPagamento,
};

pub const TAXA_SERVICO: f64 = 2.50;
pub const TAXA_ENTREGA: f64 = 5.00;

/// Arredonda para duas casas decimais, como os valores monetários da API.
pub fn round2(valor: f64) -> f64 {
    (valor * 100.0).round() / 100.0
}

/// Resumo ao vivo do que o cliente tem a pagar: linhas do carrinho mais
/// pedidos ainda aguardando pagamento, ambos precificados pelo catálogo
/// atual. `quantidade` conta cupcakes, um por ingrediente do tipo tamanho.
pub async fn resumo_do_pedido(pool: &DbPool, id_cliente: i64) -> AppResult<ResumoPedido> {
    let cliente: Option<(i64,)> =
        sqlx::query_as("SELECT id_cliente FROM clientes WHERE id_cliente = $1")
            .bind(id_cliente)
            .fetch_optional(pool)
            .await?;
    if cliente.is_none() {
        return Err(AppError::NotFound("Cliente não encontrado.".to_string()));
    }

    let (subtotal_carrinho, qtd_carrinho): (f64, i64) = sqlx::query_as(
        r#"
        SELECT COALESCE(SUM(i.valor * pc.quantidade), 0)::double precision,
               COALESCE(SUM(CASE WHEN i.tipo = 'tamanho' THEN pc.quantidade ELSE 0 END), 0)::bigint
        FROM pedidos_carrinho pc
        JOIN pedidos_carrinho_ingredientes pci
          ON pci.id_pedido_carrinho = pc.id_pedido_carrinho
        JOIN ingredientes i ON i.id_ingrediente = pci.id_ingrediente
        WHERE pc.id_cliente = $1
        "#,
    )
    .bind(id_cliente)
    .fetch_one(pool)
    .await?;

    let (subtotal_pedidos, qtd_pedidos): (f64, i64) = sqlx::query_as(
        r#"
        SELECT COALESCE(SUM(i.valor * pi.quantidade), 0)::double precision,
               COALESCE(SUM(CASE WHEN i.tipo = 'tamanho' THEN pi.quantidade ELSE 0 END), 0)::bigint
        FROM pedidos p
        JOIN pedido_ingredientes pi ON pi.id_pedido = p.id_pedido
        JOIN ingredientes i ON i.id_ingrediente = pi.id_ingrediente
        WHERE p.id_cliente = $1 AND p.status = 'aguardando'
        "#,
    )
    .bind(id_cliente)
    .fetch_one(pool)
    .await?;

    let quantidade = qtd_carrinho + qtd_pedidos;
    let subtotal = round2(subtotal_carrinho + subtotal_pedidos);
    if quantidade == 0 && subtotal == 0.0 {
        return Ok(ResumoPedido {
            quantidade: 0,
            subtotal: 0.0,
            taxa_servico: TAXA_SERVICO,
            taxa_entrega: TAXA_ENTREGA,
            total: 0.0,
        });
    }

    Ok(ResumoPedido {
        quantidade,
        subtotal,
        taxa_servico: TAXA_SERVICO,
        taxa_entrega: TAXA_ENTREGA,
        total: round2(subtotal + TAXA_SERVICO + TAXA_ENTREGA),
    })
}

/// Fecha o carrinho do cliente em um único pedido `aguardando`.
///
/// Tudo acontece em uma transação: trava a linha do cliente para serializar
/// checkouts simultâneos, reaproveita um pedido aguardando sem forma de
/// pagamento se houver, copia as linhas do carrinho para
/// `pedido_ingredientes` com uma chave de cupcake por linha, funde pedidos
/// aguardando antigos no pedido atual, esvazia o carrinho e grava o total
/// recalculado a partir das próprias linhas do pedido. Qualquer falha
/// desfaz o passo a passo inteiro.
pub async fn registrar_resumo(
    pool: &DbPool,
    id_cliente: i64,
    forma_pagamento: &str,
    quantidade: i32,
) -> AppResult<ResumoRegistrado> {
    let forma = FormaPagamento::parse(forma_pagamento).ok_or_else(|| {
        AppError::Validation("Forma de pagamento inválida. Use pix, dinheiro, cartao ou maquina.".to_string())
    })?;
    if quantidade <= 0 {
        return Err(AppError::Validation(
            "A quantidade deve ser maior que zero.".to_string(),
        ));
    }

    let mut tx = pool
        .begin()
        .await
        .map_err(AppError::transacao("abrir transação"))?;

    // Serializa checkouts concorrentes do mesmo cliente.
    let cliente: Option<(i64,)> =
        sqlx::query_as("SELECT id_cliente FROM clientes WHERE id_cliente = $1 FOR UPDATE")
            .bind(id_cliente)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::transacao("travar cliente"))?;
    if cliente.is_none() {
        return Err(AppError::NotFound("Cliente não encontrado.".to_string()));
    }

    // Reaproveita um pedido aguardando ainda sem forma de pagamento (artefato
    // de um finalizarPedido anterior); senão abre um cabeçalho novo.
    let reutilizavel: Option<(i64,)> = sqlx::query_as(
        "SELECT id_pedido FROM pedidos
         WHERE id_cliente = $1 AND status = 'aguardando' AND forma_pagamento IS NULL
         ORDER BY id_pedido LIMIT 1",
    )
    .bind(id_cliente)
    .fetch_optional(&mut *tx)
    .await
    .map_err(AppError::transacao("buscar pedido reutilizável"))?;

    let id_pedido = match reutilizavel {
        Some((id,)) => id,
        None => {
            sqlx::query_scalar::<_, i64>(
                "INSERT INTO pedidos (id_cliente, valor_total, status)
                 VALUES ($1, 0, 'aguardando') RETURNING id_pedido",
            )
            .bind(id_cliente)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::transacao("criar pedido"))?
        }
    };

    // Cada linha do carrinho vira um grupo de cupcake no pedido.
    let linhas: Vec<(i64, i32)> = sqlx::query_as(
        "SELECT id_pedido_carrinho, quantidade FROM pedidos_carrinho
         WHERE id_cliente = $1 ORDER BY id_pedido_carrinho",
    )
    .bind(id_cliente)
    .fetch_all(&mut *tx)
    .await
    .map_err(AppError::transacao("ler carrinho"))?;

    for (id_linha, qtd_linha) in &linhas {
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
        .bind(qtd_linha)
        .bind(grupo)
        .bind(id_linha)
        .execute(&mut *tx)
        .await
        .map_err(AppError::transacao("copiar ingredientes do carrinho"))?;
    }

    // Pedidos aguardando antigos são fundidos no pedido atual, para que o
    // checkout convirja para um único pedido por sessão.
    sqlx::query(
        "UPDATE pedido_ingredientes SET id_pedido = $1
         WHERE id_pedido IN (
             SELECT id_pedido FROM pedidos
             WHERE id_cliente = $2 AND status = 'aguardando' AND id_pedido <> $1
         )",
    )
    .bind(id_pedido)
    .bind(id_cliente)
    .execute(&mut *tx)
    .await
    .map_err(AppError::transacao("fundir pedidos antigos"))?;

    sqlx::query(
        "DELETE FROM pedidos
         WHERE id_cliente = $2 AND status = 'aguardando' AND id_pedido <> $1",
    )
    .bind(id_pedido)
    .bind(id_cliente)
    .execute(&mut *tx)
    .await
    .map_err(AppError::transacao("remover pedidos antigos"))?;

    sqlx::query(
        "DELETE FROM pedidos_carrinho_ingredientes
         WHERE id_pedido_carrinho IN (
             SELECT id_pedido_carrinho FROM pedidos_carrinho WHERE id_cliente = $1
         )",
    )
    .bind(id_cliente)
    .execute(&mut *tx)
    .await
    .map_err(AppError::transacao("limpar ingredientes do carrinho"))?;

    sqlx::query("DELETE FROM pedidos_carrinho WHERE id_cliente = $1")
        .bind(id_cliente)
        .execute(&mut *tx)
        .await
        .map_err(AppError::transacao("limpar carrinho"))?;

    // O total sai das linhas do próprio pedido, nunca do valor enviado pelo
    // cliente. SUM sobre zero linhas é NULL: nada a fechar.
    let subtotal: Option<f64> = sqlx::query_scalar(
        "SELECT SUM(i.valor * pi.quantidade)
         FROM pedido_ingredientes pi
         JOIN ingredientes i ON i.id_ingrediente = pi.id_ingrediente
         WHERE pi.id_pedido = $1",
    )
    .bind(id_pedido)
    .fetch_one(&mut *tx)
    .await
    .map_err(AppError::transacao("calcular subtotal"))?;

    let subtotal = match subtotal {
        Some(s) => s,
        None => {
            return Err(AppError::Validation(
                "Carrinho vazio: nada para finalizar.".to_string(),
            ));
        }
    };
    let valor_total = round2(subtotal + TAXA_SERVICO + TAXA_ENTREGA);

    sqlx::query("UPDATE pedidos SET valor_total = $2, forma_pagamento = $3 WHERE id_pedido = $1")
        .bind(id_pedido)
        .bind(valor_total)
        .bind(forma.as_str())
        .execute(&mut *tx)
        .await
        .map_err(AppError::transacao("gravar total do pedido"))?;

    tx.commit()
        .await
        .map_err(AppError::transacao("confirmar transação"))?;

    Ok(ResumoRegistrado {
        mensagem: "Resumo do pedido registrado com sucesso.".to_string(),
        id_pedido,
        valor_total,
    })
}

/// Remove os pedidos aguardando pagamento do cliente. Idempotente.
pub async fn apagar_pedidos_aguardando(
    pool: &DbPool,
    id_cliente: i64,
) -> AppResult<AguardandoExcluidos> {
    let mut tx = pool
        .begin()
        .await
        .map_err(AppError::transacao("abrir transação"))?;

    sqlx::query(
        "DELETE FROM pedido_ingredientes
         WHERE id_pedido IN (
             SELECT id_pedido FROM pedidos WHERE id_cliente = $1 AND status = 'aguardando'
         )",
    )
    .bind(id_cliente)
    .execute(&mut *tx)
    .await
    .map_err(AppError::transacao("remover ingredientes dos pedidos"))?;

    let result = sqlx::query("DELETE FROM pedidos WHERE id_cliente = $1 AND status = 'aguardando'")
        .bind(id_cliente)
        .execute(&mut *tx)
        .await
        .map_err(AppError::transacao("remover pedidos aguardando"))?;

    tx.commit()
        .await
        .map_err(AppError::transacao("confirmar transação"))?;

    Ok(AguardandoExcluidos {
        mensagem: "Pedidos aguardando pagamento excluídos.".to_string(),
        excluidos: result.rows_affected(),
    })
}

/// Confirma o pagamento: todos os pedidos aguardando do cliente passam a
/// `pendente`, carimbados com forma de pagamento, total e quantidade. Usa a
/// mesma trava de cliente do fechamento do carrinho, então uma confirmação
/// nunca corre por dentro de um checkout em andamento.
pub async fn fazer_pedido(
    pool: &DbPool,
    id_cliente: i64,
    forma_pagamento: &str,
    total: f64,
    quantidade: i32,
) -> AppResult<PedidosConfirmados> {
    let forma = FormaPagamento::parse(forma_pagamento).ok_or_else(|| {
        AppError::Validation("Forma de pagamento inválida. Use pix, dinheiro, cartao ou maquina.".to_string())
    })?;
    if total <= 0.0 || quantidade <= 0 {
        return Err(AppError::Validation(
            "Dados inválidos para fazer o pedido.".to_string(),
        ));
    }

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

    let ids: Vec<(i64,)> = sqlx::query_as(
        "UPDATE pedidos
         SET status = 'pendente', forma_pagamento = $2, valor_total = $3, quantidade = $4
         WHERE id_cliente = $1 AND status = 'aguardando'
         RETURNING id_pedido",
    )
    .bind(id_cliente)
    .bind(forma.as_str())
    .bind(total)
    .bind(quantidade)
    .fetch_all(&mut *tx)
    .await
    .map_err(AppError::transacao("confirmar pedidos"))?;

    if ids.is_empty() {
        return Err(AppError::NotFound(
            "Nenhum pedido aguardando pagamento encontrado.".to_string(),
        ));
    }

    tx.commit()
        .await
        .map_err(AppError::transacao("confirmar transação"))?;

    Ok(PedidosConfirmados {
        mensagem: "Pedido confirmado para pagamento.".to_string(),
        pedidos: ids.into_iter().map(|(id,)| id).collect(),
    })
}
