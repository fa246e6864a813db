// src/config.rs

use crate::db::ClienteRepository;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::{env, time::Duration};

// O estado compartilhado: um pool aberto uma vez no boot e reutilizado por
// todas as operações.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub cliente_repo: ClienteRepository,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // Mesmo arquivo usado pelo seed quando a variável não é definida
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://clientes.sqlite?mode=rwc".to_string());

        let db_pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        let cliente_repo = ClienteRepository::new(db_pool.clone());

        Ok(Self {
            db_pool,
            cliente_repo,
        })
    }
}
