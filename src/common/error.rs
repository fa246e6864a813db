use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
//
// Taxonomia: Validacao é capturado antes de qualquer acesso ao banco;
// DatabaseError envolve qualquer falha do sqlx; ClienteNaoEncontrado é o
// resultado "não encontrado" da busca por id (no repositório isso é um
// Option, a variante só existe para a borda HTTP responder 404).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Parâmetros inválidos: {0}")]
    Validacao(String),

    #[error("Cliente não encontrado")]
    ClienteNaoEncontrado,

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro ao consultar o banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validacao(msg) => {
                let body = Json(json!({ "error": msg }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::ClienteNaoEncontrado => (StatusCode::NOT_FOUND, "Cliente não encontrado."),

            // DatabaseError e InternalServerError viram 500.
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
