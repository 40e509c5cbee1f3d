use cupcakeria_api::{config::AppConfig, db::create_pool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    seed_ingredientes(&pool).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_ingredientes(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let ingredientes = vec![
        ("Pequeno", "tamanho", 6.00),
        ("Médio", "tamanho", 8.00),
        ("Grande", "tamanho", 10.00),
        ("Brigadeiro", "recheio", 2.00),
        ("Doce de Leite", "recheio", 2.00),
        ("Ninho", "recheio", 2.50),
        ("Morango", "recheio", 2.00),
        ("Chantilly", "cobertura", 3.00),
        ("Buttercream", "cobertura", 3.50),
        ("Ganache", "cobertura", 4.00),
        ("Rosa", "cor_cobertura", 0.50),
        ("Azul", "cor_cobertura", 0.50),
        ("Branco", "cor_cobertura", 0.00),
    ];

    for (nome, tipo, valor) in ingredientes {
        sqlx::query(
            r#"
            INSERT INTO ingredientes (nome, tipo, valor)
            VALUES ($1, $2, $3)
            ON CONFLICT (nome, tipo) DO NOTHING
            "#,
        )
        .bind(nome)
        .bind(tipo)
        .bind(valor)
        .execute(pool)
        .await?;
    }

    println!("Seeded ingredientes");
    Ok(())
}
