// src/models/cliente.rs

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

// --- CLIENTE (a linha da tabela) ---

// Espelho tipado da tabela `clientes`. A conversão linha -> struct acontece
// uma única vez, no `query_as` do repositório.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: i64,

    pub nome: String,
    pub email: String, // UNIQUE no banco

    // Endereço (todos opcionais)
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub cep: Option<String>,

    pub ativo: bool,

    // Canal de aquisição (texto livre, ex: "facebook")
    pub origem: Option<String>,

    // Atribuídos pelo banco na inserção. Nenhuma operação deste núcleo
    // atualiza data_atualizacao depois disso.
    pub data_criacao: NaiveDateTime,
    pub data_atualizacao: NaiveDateTime,
}

// --- MÉTRICAS (agregado derivado, nunca persistido) ---

#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrigemContagem {
    pub origem: String,
    pub quantidade: i64,
}

// Um ponto da série mensal, com o mês no formato "YYYY-MM".
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NovosClientesMes {
    pub mes: String,
    pub quantidade: i64,
}

// Snapshot montado a partir de quatro consultas independentes.
// Recalculado a cada chamada e descartado em seguida.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricasClientes {
    pub total_clientes: i64,
    pub clientes_ativos: i64,
    pub clientes_por_origem: Vec<OrigemContagem>,
    // Até 12 meses com pelo menos um cliente criado, do mais recente ao mais antigo
    pub novos_clientes_por_mes: Vec<NovosClientesMes>,
}
