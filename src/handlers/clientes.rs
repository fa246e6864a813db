// src/handlers/clientes.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{common::error::AppError, config::AppState};

// GET /api/clientes/{id}
// Busca direta por id, fora do registro de ferramentas: "não encontrado"
// no repositório é um Option, aqui vira 404.
pub async fn buscar_cliente_por_id(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let cliente = app_state
        .cliente_repo
        .buscar_cliente_por_id(id)
        .await?
        .ok_or(AppError::ClienteNaoEncontrado)?;

    Ok(Json(cliente))
}
