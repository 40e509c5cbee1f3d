use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use password_hash::rand_core::OsRng;

use crate::{
    db::DbPool,
    dto::Mensagem,
    dto::clientes::{Claims, LoginResponse},
    error::{AppError, AppResult},
    models::{Cliente, ClientePublico},
};

/// Valida o formato fixo XXX.XXX.XXX-XX (somente forma, sem dígito verificador).
pub fn cpf_valido(cpf: &str) -> bool {
    let bytes = cpf.as_bytes();
    if bytes.len() != 14 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        3 | 7 => *b == b'.',
        11 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

pub async fn cadastrar_cliente(
    pool: &DbPool,
    nome_completo: &str,
    email: &str,
    senha: &str,
    cpf: &str,
) -> AppResult<Mensagem> {
    if !cpf_valido(cpf) {
        return Err(AppError::Validation(
            "Formato de CPF inválido. Use XXX.XXX.XXX-XX".to_string(),
        ));
    }

    let email_existente: Option<(i64,)> =
        sqlx::query_as("SELECT id_cliente FROM clientes WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;
    if email_existente.is_some() {
        return Err(AppError::Conflict(
            "Esse e-mail já foi cadastrado, tente outro ou faça o login!".to_string(),
        ));
    }

    let cpf_existente: Option<(i64,)> =
        sqlx::query_as("SELECT id_cliente FROM clientes WHERE cpf = $1")
            .bind(cpf)
            .fetch_optional(pool)
            .await?;
    if cpf_existente.is_some() {
        return Err(AppError::Conflict(
            "Esse CPF já foi cadastrado, tente outro!".to_string(),
        ));
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let senha_hash = argon2
        .hash_password(senha.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();

    sqlx::query("INSERT INTO clientes (nome_completo, email, senha, cpf) VALUES ($1, $2, $3, $4)")
        .bind(nome_completo)
        .bind(email)
        .bind(senha_hash)
        .bind(cpf)
        .execute(pool)
        .await?;

    Ok(Mensagem::new("Conta criada com sucesso!"))
}

pub async fn login_cliente(
    pool: &DbPool,
    jwt_secret: &str,
    email: &str,
    senha: &str,
) -> AppResult<LoginResponse> {
    let cliente: Option<Cliente> = sqlx::query_as("SELECT * FROM clientes WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    let cliente = match cliente {
        Some(c) => c,
        None => {
            return Err(AppError::Unauthorized(
                "E-mail ou senha inválidos.".to_string(),
            ));
        }
    };

    let hash = PasswordHash::new(&cliente.senha)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("hash de senha inválido")))?;

    let argon2 = Argon2::default();
    if argon2.verify_password(senha.as_bytes(), &hash).is_err() {
        return Err(AppError::Unauthorized(
            "E-mail ou senha inválidos.".to_string(),
        ));
    }

    let expiracao = Utc::now()
        .checked_add_signed(Duration::hours(24))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("falha ao calcular expiração")))?;

    let claims = Claims {
        sub: cliente.id_cliente.to_string(),
        email: cliente.email.clone(),
        exp: expiracao.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;

    Ok(LoginResponse {
        mensagem: "Login realizado com sucesso!".to_string(),
        token,
        cliente: ClientePublico {
            id_cliente: cliente.id_cliente,
            nome_completo: cliente.nome_completo,
            email: cliente.email,
            cpf: cliente.cpf,
            data_criacao: cliente.data_criacao,
        },
    })
}

pub async fn listar_clientes(pool: &DbPool) -> AppResult<Vec<ClientePublico>> {
    let clientes = sqlx::query_as::<_, ClientePublico>(
        "SELECT id_cliente, nome_completo, email, cpf, data_criacao
         FROM clientes ORDER BY id_cliente",
    )
    .fetch_all(pool)
    .await?;
    Ok(clientes)
}
