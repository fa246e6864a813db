#![allow(dead_code)]

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

// Banco em memória com uma única conexão: mais de uma conexão em
// "sqlite::memory:" criaria bancos separados.
pub async fn pool_de_teste() -> SqlitePool {
    let pool = pool_sem_tabela().await;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("falha ao rodar as migrações");

    pool
}

// Pool sem a tabela `clientes`: qualquer consulta do repositório falha com
// "no such table". Útil para provar que uma chamada não tocou o banco.
pub async fn pool_sem_tabela() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("falha ao abrir o banco em memória")
}

pub async fn inserir_cliente(
    pool: &SqlitePool,
    nome: &str,
    email: &str,
    ativo: bool,
    origem: Option<&str>,
    data_criacao: &str,
) {
    sqlx::query(
        "INSERT INTO clientes (nome, email, ativo, origem, bairro, cidade, estado, cep, data_criacao, data_atualizacao) \
         VALUES (?, ?, ?, ?, 'Centro', 'São Paulo', 'SP', '01000-000', ?, ?)",
    )
    .bind(nome)
    .bind(email)
    .bind(ativo)
    .bind(origem)
    .bind(data_criacao)
    .bind(data_criacao)
    .execute(pool)
    .await
    .expect("falha ao inserir cliente de teste");
}
