// src/handlers/ferramentas.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{config::AppState, dispatch};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChamadaFerramenta {
    // Argumentos nomeados da ferramenta; ausente equivale a nenhum argumento
    #[serde(default)]
    pub argumentos: Map<String, Value>,
}

// GET /api/ferramentas
// Catálogo consultável antes da invocação: nome, descrição e parâmetros.
pub async fn listar_ferramentas() -> impl IntoResponse {
    Json(dispatch::FERRAMENTAS)
}

// POST /api/ferramentas/{nome}
// Sempre responde 200 com um Envelope; falha vira bloco de erro dentro dele.
pub async fn chamar_ferramenta(
    State(app_state): State<AppState>,
    Path(nome): Path<String>,
    Json(payload): Json<ChamadaFerramenta>,
) -> impl IntoResponse {
    let envelope = dispatch::despachar(&app_state.cliente_repo, &nome, &payload.argumentos).await;
    Json(envelope)
}
