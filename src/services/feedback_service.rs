use crate::{
    db::DbPool,
    dto::Mensagem,
    dto::feedbacks::{FeedbackComCliente, FeedbackCriado},
    error::{AppError, AppResult},
};

pub async fn listar_feedbacks(pool: &DbPool) -> AppResult<Vec<FeedbackComCliente>> {
    let feedbacks = sqlx::query_as::<_, FeedbackComCliente>(
        r#"
        SELECT f.id_feedback, f.id_cliente, f.estrelas, f.comentario, f.foto,
               f.data_criacao,
               c.nome_completo AS nome_cliente,
               c.email AS email_cliente
        FROM feedbacks f
        JOIN clientes c ON c.id_cliente = f.id_cliente
        ORDER BY f.data_criacao DESC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(feedbacks)
}

pub async fn adicionar_feedback(
    pool: &DbPool,
    id_cliente: i64,
    estrelas: i32,
    comentario: &str,
    foto: Option<&str>,
) -> AppResult<FeedbackCriado> {
    if !(1..=5).contains(&estrelas) {
        return Err(AppError::Validation(
            "A avaliação deve ser entre 1 e 5 estrelas.".to_string(),
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

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO feedbacks (id_cliente, estrelas, comentario, foto)
         VALUES ($1, $2, $3, $4) RETURNING id_feedback",
    )
    .bind(id_cliente)
    .bind(estrelas)
    .bind(comentario)
    .bind(foto)
    .fetch_one(pool)
    .await?;

    Ok(FeedbackCriado {
        id,
        mensagem: "Feedback adicionado com sucesso".to_string(),
    })
}

pub async fn excluir_feedback(pool: &DbPool, id_feedback: i64) -> AppResult<Mensagem> {
    let result = sqlx::query("DELETE FROM feedbacks WHERE id_feedback = $1")
        .bind(id_feedback)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Feedback não encontrado".to_string()));
    }
    Ok(Mensagem::new("Feedback excluído com sucesso"))
}
