use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::{
    db::DbPool,
    dto::Mensagem,
    dto::admin::{
        Cupcake, IngredienteMaisPedido, PedidoAdmin, RelatorioPedidos, TotalPorFormaPagamento,
        TotalPorStatus,
    },
    error::{AppError, AppResult},
    models::STATUS_VALIDOS,
};

pub const NAO_ESPECIFICADO: &str = "Não especificado";

/// Linha de `pedido_ingredientes` pronta para o agrupamento por cupcake.
#[derive(Debug, Clone)]
pub struct ItemCupcake {
    pub id_cupcake: i64,
    pub tipo: String,
    pub nome: String,
    pub quantidade: Option<i32>,
}

#[derive(Default)]
struct CupcakeParcial {
    tamanho: Option<String>,
    recheio: Option<String>,
    cobertura: Option<String>,
    cor_cobertura: Option<String>,
    quantidade: Option<i32>,
}

/// Agrupa linhas de ingredientes em cupcakes pela chave `id_cupcake`.
///
/// Papéis sem linha viram "Não especificado" em vez de descartar o cupcake,
/// e a quantidade cai para 1 quando nenhuma linha a informa. A saída é
/// ordenada pela chave de grupo, portanto determinística.
pub fn agrupar_cupcakes(itens: Vec<ItemCupcake>) -> Vec<Cupcake> {
    let mut grupos: BTreeMap<i64, CupcakeParcial> = BTreeMap::new();

    for item in itens {
        let grupo = grupos.entry(item.id_cupcake).or_default();
        let destino = match item.tipo.as_str() {
            "tamanho" => &mut grupo.tamanho,
            "recheio" => &mut grupo.recheio,
            "cobertura" => &mut grupo.cobertura,
            "cor_cobertura" => &mut grupo.cor_cobertura,
            _ => continue,
        };
        destino.get_or_insert(item.nome);
        if grupo.quantidade.is_none() {
            grupo.quantidade = item.quantidade;
        }
    }

    grupos
        .into_values()
        .map(|parcial| Cupcake {
            tamanho: parcial.tamanho.unwrap_or_else(|| NAO_ESPECIFICADO.to_string()),
            recheio: parcial.recheio.unwrap_or_else(|| NAO_ESPECIFICADO.to_string()),
            cobertura: parcial
                .cobertura
                .unwrap_or_else(|| NAO_ESPECIFICADO.to_string()),
            cor_cobertura: parcial
                .cor_cobertura
                .unwrap_or_else(|| NAO_ESPECIFICADO.to_string()),
            quantidade: parcial.quantidade.unwrap_or(1),
        })
        .collect()
}

#[derive(FromRow)]
struct LinhaPedidoAdmin {
    id_pedido: i64,
    data_criacao: DateTime<Utc>,
    id_cliente: i64,
    email_cliente: String,
    nome_completo: String,
    valor_total: f64,
    forma_pagamento: Option<String>,
    status: String,
    rua: Option<String>,
    numero: Option<String>,
    bairro: Option<String>,
    cep: Option<String>,
    complemento: Option<String>,
    nome_ingrediente: Option<String>,
    tipo: Option<String>,
    quantidade_ingrediente: Option<i32>,
    id_cupcake: Option<i64>,
}

struct PedidoParcial {
    pedido: PedidoAdmin,
    itens: Vec<ItemCupcake>,
}

/// Lista pedidos por status com cliente, endereço mais recente e os cupcakes
/// reconstruídos de cada pedido.
pub async fn listar_pedidos_admin(pool: &DbPool, filtro: &str) -> AppResult<Vec<PedidoAdmin>> {
    let rows = sqlx::query_as::<_, LinhaPedidoAdmin>(
        r#"
        SELECT
            p.id_pedido,
            p.data_criacao,
            c.id_cliente,
            c.email AS email_cliente,
            c.nome_completo,
            p.valor_total,
            p.forma_pagamento,
            p.status,
            e.rua,
            e.numero,
            e.bairro,
            e.cep,
            e.complemento,
            i.nome AS nome_ingrediente,
            i.tipo,
            pi.quantidade AS quantidade_ingrediente,
            pi.id_cupcake
        FROM pedidos p
        JOIN clientes c ON c.id_cliente = p.id_cliente
        LEFT JOIN pedido_ingredientes pi ON pi.id_pedido = p.id_pedido
        LEFT JOIN ingredientes i ON i.id_ingrediente = pi.id_ingrediente
        LEFT JOIN (
            SELECT DISTINCT ON (id_cliente)
                   id_cliente, rua, numero, bairro, cep, complemento
            FROM enderecos
            ORDER BY id_cliente, id_endereco DESC
        ) e ON e.id_cliente = p.id_cliente
        WHERE p.status = $1
        ORDER BY p.id_pedido, pi.id_cupcake, pi.id
        "#,
    )
    .bind(filtro)
    .fetch_all(pool)
    .await?;

    let mut pedidos: BTreeMap<i64, PedidoParcial> = BTreeMap::new();
    for row in rows {
        let parcial = pedidos.entry(row.id_pedido).or_insert_with(|| PedidoParcial {
            pedido: PedidoAdmin {
                id_pedido: row.id_pedido,
                data_criacao: row.data_criacao.format("%d/%m/%Y %H:%M").to_string(),
                id_cliente: row.id_cliente,
                nome_completo: row.nome_completo.clone(),
                email_cliente: row.email_cliente.clone(),
                valor_total: row.valor_total,
                forma_pagamento: row.forma_pagamento.clone(),
                status: row.status.clone(),
                rua: row.rua.clone(),
                numero: row.numero.clone(),
                bairro: row.bairro.clone(),
                cep: row.cep.clone(),
                complemento: row.complemento.clone(),
                cupcakes: Vec::new(),
            },
            itens: Vec::new(),
        });

        if let (Some(id_cupcake), Some(tipo), Some(nome)) =
            (row.id_cupcake, row.tipo, row.nome_ingrediente)
        {
            parcial.itens.push(ItemCupcake {
                id_cupcake,
                tipo,
                nome,
                quantidade: row.quantidade_ingrediente,
            });
        }
    }

    Ok(pedidos
        .into_values()
        .map(|parcial| {
            let mut pedido = parcial.pedido;
            pedido.cupcakes = agrupar_cupcakes(parcial.itens);
            pedido
        })
        .collect())
}

pub async fn atualizar_status_pedido(
    pool: &DbPool,
    id_pedido: i64,
    status: &str,
) -> AppResult<Mensagem> {
    if !STATUS_VALIDOS.contains(&status) {
        return Err(AppError::Validation("Status inválido.".to_string()));
    }

    let result = sqlx::query("UPDATE pedidos SET status = $2 WHERE id_pedido = $1")
        .bind(id_pedido)
        .bind(status)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Pedido não encontrado.".to_string()));
    }
    Ok(Mensagem::new("Status do pedido atualizado com sucesso."))
}

/// Consolida os pedidos por status e forma de pagamento, mais os cinco
/// ingredientes mais pedidos.
pub async fn relatorio_pedidos(pool: &DbPool) -> AppResult<RelatorioPedidos> {
    let por_status = sqlx::query_as::<_, TotalPorStatus>(
        "SELECT status,
                COUNT(*)::bigint AS total_pedidos,
                COALESCE(SUM(valor_total), 0)::double precision AS valor_total
         FROM pedidos
         GROUP BY status
         ORDER BY status",
    )
    .fetch_all(pool)
    .await?;

    let por_forma_pagamento = sqlx::query_as::<_, TotalPorFormaPagamento>(
        "SELECT forma_pagamento,
                COUNT(*)::bigint AS total_pedidos,
                COALESCE(SUM(valor_total), 0)::double precision AS valor_total
         FROM pedidos
         WHERE forma_pagamento IS NOT NULL
         GROUP BY forma_pagamento
         ORDER BY forma_pagamento",
    )
    .fetch_all(pool)
    .await?;

    let ingredientes_mais_pedidos = sqlx::query_as::<_, IngredienteMaisPedido>(
        "SELECT i.nome,
                i.tipo,
                COALESCE(SUM(pi.quantidade), 0)::bigint AS total_pedido
         FROM pedido_ingredientes pi
         JOIN ingredientes i ON i.id_ingrediente = pi.id_ingrediente
         GROUP BY i.id_ingrediente, i.nome, i.tipo
         ORDER BY total_pedido DESC, i.nome
         LIMIT 5",
    )
    .fetch_all(pool)
    .await?;

    Ok(RelatorioPedidos {
        por_status,
        por_forma_pagamento,
        ingredientes_mais_pedidos,
    })
}
