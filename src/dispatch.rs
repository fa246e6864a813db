// src/dispatch.rs
//
// Registro de ferramentas: cada operação do repositório vira uma ferramenta
// nomeada, com descrição e esquema de parâmetros consultáveis antes da
// chamada. Toda invocação devolve um Envelope bem formado; erro de validação
// ou de banco vira um bloco de texto de erro, nunca um panic ou um erro que
// vaza para o transporte.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{common::error::AppError, db::ClienteRepository, models::cliente::Cliente};

pub const LISTAR_CLIENTES: &str = "listar-clientes";
pub const QUANTIDADE_CLIENTES: &str = "quantidade-clientes";
pub const BUSCAR_CLIENTES_POR_ORIGEM: &str = "buscar-clientes-por-origem";
pub const QUANTIDADE_CLIENTES_ATIVOS_POR_ORIGEM: &str = "quantidade-clientes-ativos-por-origem";
pub const OBTER_METRICAS_CLIENTES: &str = "obter-metricas-clientes";

// --- ESQUEMA DAS FERRAMENTAS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoParametro {
    String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parametro {
    pub nome: &'static str,
    pub tipo: TipoParametro,
    pub obrigatorio: bool,
    pub descricao: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ferramenta {
    pub nome: &'static str,
    pub descricao: &'static str,
    pub parametros: &'static [Parametro],
}

const PARAM_ORIGEM: Parametro = Parametro {
    nome: "origem",
    tipo: TipoParametro::String,
    obrigatorio: true,
    descricao: "Origem dos clientes",
};

pub const FERRAMENTAS: &[Ferramenta] = &[
    Ferramenta {
        nome: LISTAR_CLIENTES,
        descricao: "Lista todos os clientes cadastrados no sistema",
        parametros: &[],
    },
    Ferramenta {
        nome: QUANTIDADE_CLIENTES,
        descricao: "Retorna a quantidade total de clientes cadastrados",
        parametros: &[],
    },
    Ferramenta {
        nome: BUSCAR_CLIENTES_POR_ORIGEM,
        descricao: "Busca clientes ativos por origem",
        parametros: &[PARAM_ORIGEM],
    },
    Ferramenta {
        nome: QUANTIDADE_CLIENTES_ATIVOS_POR_ORIGEM,
        descricao: "Retorna a quantidade total de clientes ativos cadastrados por origem",
        parametros: &[PARAM_ORIGEM],
    },
    Ferramenta {
        nome: OBTER_METRICAS_CLIENTES,
        descricao: "Obtém métricas de clientes",
        parametros: &[],
    },
];

pub fn buscar_ferramenta(nome: &str) -> Option<&'static Ferramenta> {
    FERRAMENTAS.iter().find(|f| f.nome == nome)
}

// --- ENVELOPE DE RESPOSTA ---

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Conteudo {
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub content: Vec<Conteudo>,
    pub is_error: bool,
}

impl Envelope {
    pub fn texto(text: impl Into<String>) -> Self {
        Self {
            content: vec![Conteudo::Text { text: text.into() }],
            is_error: false,
        }
    }

    pub fn erro(mensagem: impl std::fmt::Display) -> Self {
        Self {
            content: vec![Conteudo::Text {
                text: format!("❌ {mensagem}"),
            }],
            is_error: true,
        }
    }
}

// --- DESPACHO ---

/// Valida, executa e renderiza uma ferramenta. A validação acontece antes de
/// qualquer acesso ao banco: parâmetro obrigatório ausente ou de tipo errado
/// rejeita a chamada sem tocar o repositório.
pub async fn despachar(
    repo: &ClienteRepository,
    nome: &str,
    argumentos: &Map<String, Value>,
) -> Envelope {
    let Some(ferramenta) = buscar_ferramenta(nome) else {
        return Envelope::erro(format!("Ferramenta desconhecida: {nome}"));
    };

    if let Err(err) = validar_parametros(ferramenta, argumentos) {
        return Envelope::erro(err);
    }

    // Único parâmetro do sistema; garantido como string pela validação
    let origem = argumentos
        .get("origem")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let resultado = match ferramenta.nome {
        LISTAR_CLIENTES => listar_clientes(repo).await,
        QUANTIDADE_CLIENTES => quantidade_clientes(repo).await,
        BUSCAR_CLIENTES_POR_ORIGEM => buscar_clientes_por_origem(repo, origem).await,
        QUANTIDADE_CLIENTES_ATIVOS_POR_ORIGEM => {
            quantidade_clientes_ativos_por_origem(repo, origem).await
        }
        OBTER_METRICAS_CLIENTES => obter_metricas_clientes(repo).await,
        outro => Err(AppError::Validacao(format!(
            "Ferramenta desconhecida: {outro}"
        ))),
    };

    resultado.unwrap_or_else(|err| Envelope::erro(err))
}

fn validar_parametros(
    ferramenta: &Ferramenta,
    argumentos: &Map<String, Value>,
) -> Result<(), AppError> {
    for parametro in ferramenta.parametros {
        let valor = argumentos.get(parametro.nome).filter(|v| !v.is_null());

        match valor {
            None if parametro.obrigatorio => {
                return Err(AppError::Validacao(format!(
                    "O parâmetro obrigatório '{}' não foi informado",
                    parametro.nome
                )));
            }
            None => {}
            Some(valor) => {
                let tipo_ok = match parametro.tipo {
                    TipoParametro::String => valor.is_string(),
                };
                if !tipo_ok {
                    return Err(AppError::Validacao(format!(
                        "O parâmetro '{}' deve ser do tipo string",
                        parametro.nome
                    )));
                }
            }
        }
    }

    Ok(())
}

// --- EXECUÇÃO E RENDERIZAÇÃO ---

async fn listar_clientes(repo: &ClienteRepository) -> Result<Envelope, AppError> {
    let clientes = repo.listar_clientes().await?;

    if clientes.is_empty() {
        return Ok(Envelope::texto("Nenhum cliente encontrado no sistema."));
    }

    Ok(Envelope::texto(format!(
        "📋 **Lista de Clientes ({} encontrados)**\n\n{}",
        clientes.len(),
        formatar_lista(&clientes)
    )))
}

async fn quantidade_clientes(repo: &ClienteRepository) -> Result<Envelope, AppError> {
    let quantidade = repo.quantidade_clientes().await?;

    Ok(Envelope::texto(format!(
        "📊 Quantidade total de clientes: {quantidade}"
    )))
}

async fn buscar_clientes_por_origem(
    repo: &ClienteRepository,
    origem: &str,
) -> Result<Envelope, AppError> {
    let clientes = repo.buscar_clientes_por_origem(origem).await?;

    if clientes.is_empty() {
        return Ok(Envelope::texto(format!(
            "Nenhum cliente encontrado com a origem {origem}."
        )));
    }

    Ok(Envelope::texto(format!(
        "📋 **Clientes encontrados ({})**\n\n{}",
        clientes.len(),
        formatar_lista(&clientes)
    )))
}

async fn quantidade_clientes_ativos_por_origem(
    repo: &ClienteRepository,
    origem: &str,
) -> Result<Envelope, AppError> {
    let quantidade = repo.quantidade_clientes_ativos_por_origem(origem).await?;

    Ok(Envelope::texto(format!(
        "📊 Quantidade total de clientes ativos ({origem}): {quantidade}"
    )))
}

async fn obter_metricas_clientes(repo: &ClienteRepository) -> Result<Envelope, AppError> {
    let metricas = repo.obter_metricas().await?;
    let json = serde_json::to_string(&metricas).map_err(anyhow::Error::from)?;

    Ok(Envelope::texto(format!("📊 Métricas de clientes: {json}")))
}

// Blocos na mesma ordem em que o repositório devolveu as linhas.
fn formatar_lista(clientes: &[Cliente]) -> String {
    clientes
        .iter()
        .enumerate()
        .map(|(indice, cliente)| formatar_cliente(indice + 1, cliente))
        .collect::<Vec<_>>()
        .join("\n")
}

fn formatar_cliente(posicao: usize, cliente: &Cliente) -> String {
    format!(
        "{}. **{}**\n   \
         📧 Email: {}\n   \
         📍 Endereço: {}, {} - {}\n   \
         📮 CEP: {}\n   \
         ✅ Ativo: {}\n   \
         🏢 Origem: {}\n   \
         📅 Criado em: {}\n   \
         📅 Atualizado em: {}\n",
        posicao,
        cliente.nome,
        cliente.email,
        cliente.bairro.as_deref().unwrap_or("-"),
        cliente.cidade.as_deref().unwrap_or("-"),
        cliente.estado.as_deref().unwrap_or("-"),
        cliente.cep.as_deref().unwrap_or("-"),
        if cliente.ativo { "Sim" } else { "Não" },
        cliente.origem.as_deref().unwrap_or("-"),
        cliente.data_criacao,
        cliente.data_atualizacao,
    )
}
