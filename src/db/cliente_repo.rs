// src/db/cliente_repo.rs

use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    models::cliente::{Cliente, MetricasClientes, NovosClientesMes, OrigemContagem},
};

// O repositório de clientes, responsável por todas as leituras da tabela 'clientes'.
// Nenhum método escreve no banco e nenhum loga: falhas viram AppError e quem
// chamou decide o que registrar.
#[derive(Clone)]
pub struct ClienteRepository {
    pool: SqlitePool,
}

impl ClienteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Lista todos os clientes, do mais recente para o mais antigo.
    /// Banco vazio retorna lista vazia, nunca erro.
    pub async fn listar_clientes(&self) -> Result<Vec<Cliente>, AppError> {
        let clientes = sqlx::query_as::<_, Cliente>(
            "SELECT id, nome, email, bairro, cidade, estado, cep, ativo, origem, data_criacao, data_atualizacao \
             FROM clientes \
             ORDER BY data_criacao DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clientes)
    }

    /// Busca um cliente pelo id. `None` não é erro, é "não encontrado".
    pub async fn buscar_cliente_por_id(&self, id: i64) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(
            "SELECT id, nome, email, bairro, cidade, estado, cep, ativo, origem, data_criacao, data_atualizacao \
             FROM clientes \
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cliente)
    }

    /// Quantidade total de clientes cadastrados.
    pub async fn quantidade_clientes(&self) -> Result<i64, AppError> {
        // COUNT(*) sempre devolve uma linha; o 0 cobre o caso impossível
        let quantidade = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clientes")
            .fetch_optional(&self.pool)
            .await?
            .unwrap_or(0);

        Ok(quantidade)
    }

    /// Clientes ativos de uma origem, em ordem alfabética de nome.
    /// A comparação de origem é exata (case-sensitive).
    pub async fn buscar_clientes_por_origem(
        &self,
        origem: &str,
    ) -> Result<Vec<Cliente>, AppError> {
        let clientes = sqlx::query_as::<_, Cliente>(
            "SELECT id, nome, email, bairro, cidade, estado, cep, ativo, origem, data_criacao, data_atualizacao \
             FROM clientes \
             WHERE origem = ? AND ativo = 1 \
             ORDER BY nome ASC",
        )
        .bind(origem)
        .fetch_all(&self.pool)
        .await?;

        Ok(clientes)
    }

    /// Quantidade de clientes ativos de uma origem.
    pub async fn quantidade_clientes_ativos_por_origem(
        &self,
        origem: &str,
    ) -> Result<i64, AppError> {
        let quantidade = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM clientes WHERE origem = ? AND ativo = 1",
        )
        .bind(origem)
        .fetch_optional(&self.pool)
        .await?
        .unwrap_or(0);

        Ok(quantidade)
    }

    /// Monta o snapshot de métricas a partir de quatro consultas independentes,
    /// disparadas em paralelo. Se qualquer uma falhar o snapshot inteiro falha;
    /// nunca devolvemos métricas parciais.
    pub async fn obter_metricas(&self) -> Result<MetricasClientes, AppError> {
        let (total_clientes, clientes_ativos, clientes_por_origem, novos_clientes_por_mes) =
            tokio::try_join!(
                self.quantidade_clientes(),
                self.quantidade_clientes_ativos(),
                self.contar_por_origem(),
                self.novos_clientes_por_mes(),
            )?;

        Ok(MetricasClientes {
            total_clientes,
            clientes_ativos,
            clientes_por_origem,
            novos_clientes_por_mes,
        })
    }

    async fn quantidade_clientes_ativos(&self) -> Result<i64, AppError> {
        let quantidade =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clientes WHERE ativo = 1")
                .fetch_optional(&self.pool)
                .await?
                .unwrap_or(0);

        Ok(quantidade)
    }

    // Uma entrada por valor distinto de origem; linhas sem origem ficam de fora.
    async fn contar_por_origem(&self) -> Result<Vec<OrigemContagem>, AppError> {
        let contagens = sqlx::query_as::<_, OrigemContagem>(
            "SELECT origem, COUNT(*) AS quantidade \
             FROM clientes \
             WHERE origem IS NOT NULL \
             GROUP BY origem",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(contagens)
    }

    // Série mensal de novos clientes: no máximo os 12 meses mais recentes que
    // tiveram pelo menos um cadastro, do mais novo para o mais antigo.
    async fn novos_clientes_por_mes(&self) -> Result<Vec<NovosClientesMes>, AppError> {
        let serie = sqlx::query_as::<_, NovosClientesMes>(
            "SELECT strftime('%Y-%m', data_criacao) AS mes, COUNT(*) AS quantidade \
             FROM clientes \
             WHERE data_criacao IS NOT NULL \
             GROUP BY mes \
             ORDER BY mes DESC \
             LIMIT 12",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(serie)
    }
}
