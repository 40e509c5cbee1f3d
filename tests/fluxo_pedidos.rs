use cupcakeria_api::{
    db::create_pool,
    error::AppError,
    services::{
        admin_service::{self, NAO_ESPECIFICADO},
        carrinho_service, cliente_service, endereco_service, feedback_service,
        ingrediente_service, resumo_service,
    },
};

// Fluxo de ponta a ponta: cadastro, carrinho, resumo, checkout, confirmação
// de pagamento, visão administrativa, endereço e feedback.
#[tokio::test]
async fn fluxo_completo_do_pedido() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let pool = setup_pool(&database_url).await?;

    // Cadastro e as colisões de e-mail e CPF.
    cliente_service::cadastrar_cliente(
        &pool,
        "Ana Souza",
        "ana@example.com",
        "senha123",
        "123.456.789-09",
    )
    .await?;

    let erro = cliente_service::cadastrar_cliente(
        &pool,
        "Outra Ana",
        "ana@example.com",
        "outra",
        "987.654.321-00",
    )
    .await
    .unwrap_err();
    assert!(matches!(erro, AppError::Conflict(_)));

    let erro = cliente_service::cadastrar_cliente(
        &pool,
        "Bia Lima",
        "bia@example.com",
        "senha123",
        "123.456.789-09",
    )
    .await
    .unwrap_err();
    assert!(matches!(erro, AppError::Conflict(_)));

    let erro = cliente_service::cadastrar_cliente(
        &pool,
        "Caio Nunes",
        "caio@example.com",
        "senha123",
        "111.222.333-4",
    )
    .await
    .unwrap_err();
    assert!(matches!(erro, AppError::Validation(_)));

    // O cadastro recusado não grava nada.
    let clientes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clientes")
        .fetch_one(&pool)
        .await?;
    assert_eq!(clientes, 1);

    // Login.
    let login =
        cliente_service::login_cliente(&pool, "segredo-de-teste", "ana@example.com", "senha123")
            .await?;
    assert!(!login.token.is_empty());
    assert_eq!(login.cliente.email, "ana@example.com");
    let id_cliente = login.cliente.id_cliente;

    let erro =
        cliente_service::login_cliente(&pool, "segredo-de-teste", "ana@example.com", "errada")
            .await
            .unwrap_err();
    assert!(matches!(erro, AppError::Unauthorized(_)));

    // Catálogo de ingredientes.
    let tamanho = criar_ingrediente(&pool, "Médio", "tamanho", 8.00).await?;
    let recheio = criar_ingrediente(&pool, "Brigadeiro", "recheio", 2.00).await?;
    let cobertura = criar_ingrediente(&pool, "Chantilly", "cobertura", 3.00).await?;

    let erro = ingrediente_service::adicionar_ingrediente(&pool, "Médio", "tamanho", 8.00)
        .await
        .unwrap_err();
    assert!(matches!(erro, AppError::Conflict(_)));

    let tamanhos = ingrediente_service::listar_por_tipo(&pool, "tamanho").await?;
    assert_eq!(tamanhos.len(), 1);
    assert_eq!(tamanhos[0].nome, "Médio");

    let erro = ingrediente_service::listar_por_tipo(&pool, "sabor")
        .await
        .unwrap_err();
    assert!(matches!(erro, AppError::Validation(_)));

    let descartavel = criar_ingrediente(&pool, "Teste", "cobertura", 1.00).await?;
    ingrediente_service::excluir_ingrediente(&pool, descartavel).await?;
    let erro = ingrediente_service::excluir_ingrediente(&pool, descartavel)
        .await
        .unwrap_err();
    assert!(matches!(erro, AppError::NotFound(_)));

    // Carrinho: dois cupcakes configurados, um parcial e um completo sem cor.
    let erro = carrinho_service::adicionar_ao_carrinho(&pool, id_cliente, &[tamanho], 0)
        .await
        .unwrap_err();
    assert!(matches!(erro, AppError::Validation(_)));

    let erro = carrinho_service::adicionar_ao_carrinho(&pool, 999_999, &[tamanho], 1)
        .await
        .unwrap_err();
    assert!(matches!(erro, AppError::NotFound(_)));

    let erro = carrinho_service::adicionar_ao_carrinho(&pool, id_cliente, &[999_999], 1)
        .await
        .unwrap_err();
    assert!(matches!(erro, AppError::Validation(_)));

    carrinho_service::adicionar_ao_carrinho(&pool, id_cliente, &[tamanho, recheio], 1).await?;
    carrinho_service::adicionar_ao_carrinho(&pool, id_cliente, &[tamanho, recheio, cobertura], 1)
        .await?;

    // Uma linha extra entra e sai sem afetar o resto.
    let extra =
        carrinho_service::adicionar_ao_carrinho(&pool, id_cliente, &[cobertura], 1).await?;
    carrinho_service::excluir_pedido_carrinho(&pool, extra.id_pedido).await?;
    let erro = carrinho_service::excluir_pedido_carrinho(&pool, extra.id_pedido)
        .await
        .unwrap_err();
    assert!(matches!(erro, AppError::NotFound(_)));

    let itens = carrinho_service::listar_carrinho(&pool, id_cliente).await?;
    assert_eq!(itens.len(), 2);
    assert_eq!(itens[0].valor_total, 10.0);
    assert_eq!(itens[0].ingredientes.len(), 2);
    assert_eq!(itens[1].valor_total, 13.0);
    assert_eq!(itens[1].ingredientes.len(), 3);

    // Resumo ao vivo antes do checkout.
    let resumo = resumo_service::resumo_do_pedido(&pool, id_cliente).await?;
    assert_eq!(resumo.quantidade, 2);
    assert_eq!(resumo.subtotal, 23.0);
    assert_eq!(resumo.taxa_servico, 2.5);
    assert_eq!(resumo.taxa_entrega, 5.0);
    assert_eq!(resumo.total, 30.5);

    let erro = resumo_service::resumo_do_pedido(&pool, 999_999)
        .await
        .unwrap_err();
    assert!(matches!(erro, AppError::NotFound(_)));

    // Checkout: o carrinho vira um único pedido aguardando pagamento.
    let erro = resumo_service::registrar_resumo(&pool, id_cliente, "cheque", 2)
        .await
        .unwrap_err();
    assert!(matches!(erro, AppError::Validation(_)));

    let registrado = resumo_service::registrar_resumo(&pool, id_cliente, "pix", 2).await?;
    assert_eq!(registrado.valor_total, 30.5);
    let id_pedido = registrado.id_pedido;

    let itens = carrinho_service::listar_carrinho(&pool, id_cliente).await?;
    assert!(itens.is_empty());

    let (status, forma, valor_total): (String, Option<String>, f64) = sqlx::query_as(
        "SELECT status, forma_pagamento, valor_total FROM pedidos WHERE id_pedido = $1",
    )
    .bind(id_pedido)
    .fetch_one(&pool)
    .await?;
    assert_eq!(status, "aguardando");
    assert_eq!(forma.as_deref(), Some("pix"));
    assert_eq!(valor_total, 30.5);

    // O resumo continua valendo enquanto o pedido aguarda pagamento.
    let resumo = resumo_service::resumo_do_pedido(&pool, id_cliente).await?;
    assert_eq!(resumo.quantidade, 2);
    assert_eq!(resumo.subtotal, 23.0);
    assert_eq!(resumo.total, 30.5);

    // Visão administrativa com os cupcakes reconstruídos.
    let pedidos = admin_service::listar_pedidos_admin(&pool, "aguardando").await?;
    assert_eq!(pedidos.len(), 1);
    let pedido = &pedidos[0];
    assert_eq!(pedido.id_pedido, id_pedido);
    assert_eq!(pedido.nome_completo, "Ana Souza");
    assert_eq!(pedido.email_cliente, "ana@example.com");
    assert_eq!(pedido.forma_pagamento.as_deref(), Some("pix"));
    assert_eq!(pedido.valor_total, 30.5);
    assert!(pedido.rua.is_none());
    assert_eq!(pedido.data_criacao.len(), 16);
    assert!(pedido.data_criacao.contains('/'));

    assert_eq!(pedido.cupcakes.len(), 2);
    assert_eq!(pedido.cupcakes[0].tamanho, "Médio");
    assert_eq!(pedido.cupcakes[0].recheio, "Brigadeiro");
    assert_eq!(pedido.cupcakes[0].cobertura, NAO_ESPECIFICADO);
    assert_eq!(pedido.cupcakes[0].cor_cobertura, NAO_ESPECIFICADO);
    assert_eq!(pedido.cupcakes[0].quantidade, 1);
    assert_eq!(pedido.cupcakes[1].cobertura, "Chantilly");
    assert_eq!(pedido.cupcakes[1].cor_cobertura, NAO_ESPECIFICADO);

    // Endereço entra e aparece na listagem admin.
    let erro = endereco_service::adicionar_endereco(
        &pool,
        999_999,
        "Rua das Flores",
        "100",
        "01000-000",
        "Centro",
        None,
    )
    .await
    .unwrap_err();
    assert!(matches!(erro, AppError::NotFound(_)));

    endereco_service::adicionar_endereco(
        &pool,
        id_cliente,
        "Rua das Flores",
        "100",
        "01000-000",
        "Centro",
        Some("Apto 12"),
    )
    .await?;
    let enderecos = endereco_service::listar_enderecos(&pool).await?;
    assert_eq!(enderecos.len(), 1);

    let pedidos = admin_service::listar_pedidos_admin(&pool, "aguardando").await?;
    assert_eq!(pedidos[0].rua.as_deref(), Some("Rua das Flores"));
    assert_eq!(pedidos[0].complemento.as_deref(), Some("Apto 12"));

    // Desistência: os pedidos aguardando somem e o resumo zera.
    let excluidos = resumo_service::apagar_pedidos_aguardando(&pool, id_cliente).await?;
    assert_eq!(excluidos.excluidos, 1);

    let linhas: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pedido_ingredientes")
        .fetch_one(&pool)
        .await?;
    assert_eq!(linhas, 0);

    let resumo = resumo_service::resumo_do_pedido(&pool, id_cliente).await?;
    assert_eq!(resumo.quantidade, 0);
    assert_eq!(resumo.subtotal, 0.0);
    assert_eq!(resumo.taxa_servico, 2.5);
    assert_eq!(resumo.taxa_entrega, 5.0);
    assert_eq!(resumo.total, 0.0);

    // Novo checkout e confirmação de pagamento.
    carrinho_service::adicionar_ao_carrinho(&pool, id_cliente, &[tamanho], 2).await?;
    let registrado = resumo_service::registrar_resumo(&pool, id_cliente, "dinheiro", 2).await?;
    assert_eq!(registrado.valor_total, 23.5);

    let erro = resumo_service::fazer_pedido(&pool, id_cliente, "dinheiro", 0.0, 2)
        .await
        .unwrap_err();
    assert!(matches!(erro, AppError::Validation(_)));

    let confirmados =
        resumo_service::fazer_pedido(&pool, id_cliente, "dinheiro", 23.5, 2).await?;
    assert_eq!(confirmados.pedidos, vec![registrado.id_pedido]);

    let status: String = sqlx::query_scalar("SELECT status FROM pedidos WHERE id_pedido = $1")
        .bind(registrado.id_pedido)
        .fetch_one(&pool)
        .await?;
    assert_eq!(status, "pendente");

    // Sem pedidos aguardando, confirmar de novo não encontra nada.
    let erro = resumo_service::fazer_pedido(&pool, id_cliente, "pix", 23.5, 2)
        .await
        .unwrap_err();
    assert!(matches!(erro, AppError::NotFound(_)));

    // Pedido pendente não conta mais no resumo.
    let resumo = resumo_service::resumo_do_pedido(&pool, id_cliente).await?;
    assert_eq!(resumo.quantidade, 0);
    assert_eq!(resumo.total, 0.0);

    // Admin fecha o ciclo do pedido.
    let erro = admin_service::atualizar_status_pedido(&pool, registrado.id_pedido, "pago")
        .await
        .unwrap_err();
    assert!(matches!(erro, AppError::Validation(_)));

    let erro = admin_service::atualizar_status_pedido(&pool, 999_999, "concluido")
        .await
        .unwrap_err();
    assert!(matches!(erro, AppError::NotFound(_)));

    admin_service::atualizar_status_pedido(&pool, registrado.id_pedido, "concluido").await?;

    let pedidos = admin_service::listar_pedidos_admin(&pool, "concluido").await?;
    assert_eq!(pedidos.len(), 1);
    assert_eq!(pedidos[0].cupcakes.len(), 1);
    assert_eq!(pedidos[0].cupcakes[0].tamanho, "Médio");
    assert_eq!(pedidos[0].cupcakes[0].quantidade, 2);

    // Relatório consolidado.
    let relatorio = admin_service::relatorio_pedidos(&pool).await?;
    let concluidos = relatorio
        .por_status
        .iter()
        .find(|linha| linha.status == "concluido")
        .expect("linha de concluidos no relatório");
    assert_eq!(concluidos.total_pedidos, 1);
    assert_eq!(concluidos.valor_total, 23.5);

    let dinheiro = relatorio
        .por_forma_pagamento
        .iter()
        .find(|linha| linha.forma_pagamento == "dinheiro")
        .expect("linha de dinheiro no relatório");
    assert_eq!(dinheiro.total_pedidos, 1);

    let campeao = relatorio
        .ingredientes_mais_pedidos
        .first()
        .expect("ingrediente mais pedido");
    assert_eq!(campeao.nome, "Médio");
    assert_eq!(campeao.tipo, "tamanho");
    assert_eq!(campeao.total_pedido, 2);

    // Feedback do cliente.
    let erro = feedback_service::adicionar_feedback(&pool, id_cliente, 6, "Bom demais", None)
        .await
        .unwrap_err();
    assert!(matches!(erro, AppError::Validation(_)));

    let criado =
        feedback_service::adicionar_feedback(&pool, id_cliente, 5, "Muito bom!", None).await?;
    let feedbacks = feedback_service::listar_feedbacks(&pool).await?;
    assert_eq!(feedbacks.len(), 1);
    assert_eq!(feedbacks[0].nome_cliente, "Ana Souza");
    assert_eq!(feedbacks[0].estrelas, 5);

    feedback_service::excluir_feedback(&pool, criado.id).await?;
    let erro = feedback_service::excluir_feedback(&pool, criado.id)
        .await
        .unwrap_err();
    assert!(matches!(erro, AppError::NotFound(_)));

    Ok(())
}

async fn setup_pool(database_url: &str) -> anyhow::Result<sqlx::PgPool> {
    let pool = create_pool(database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Clean tables between runs
    sqlx::query(
        "TRUNCATE TABLE pedido_ingredientes, pedidos, pedidos_carrinho_ingredientes, \
         pedidos_carrinho, feedbacks, enderecos, ingredientes, clientes RESTART IDENTITY CASCADE",
    )
    .execute(&pool)
    .await?;

    Ok(pool)
}

async fn criar_ingrediente(
    pool: &sqlx::PgPool,
    nome: &str,
    tipo: &str,
    valor: f64,
) -> anyhow::Result<i64> {
    let ingrediente = ingrediente_service::adicionar_ingrediente(pool, nome, tipo, valor).await?;
    Ok(ingrediente.id_ingrediente)
}
