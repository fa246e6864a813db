mod common;

use common::{inserir_cliente, pool_de_teste, pool_sem_tabela};
use mcp_clientes::db::ClienteRepository;
use mcp_clientes::dispatch::{self, Conteudo, Envelope};
use serde_json::{Map, Value, json};

fn argumentos(valor: Value) -> Map<String, Value> {
    valor.as_object().cloned().unwrap_or_default()
}

fn texto(envelope: &Envelope) -> &str {
    let Conteudo::Text { text } = &envelope.content[0];
    text
}

#[test]
fn catalogo_declara_as_cinco_ferramentas() {
    let nomes: Vec<&str> = dispatch::FERRAMENTAS.iter().map(|f| f.nome).collect();

    assert_eq!(
        nomes,
        vec![
            "listar-clientes",
            "quantidade-clientes",
            "buscar-clientes-por-origem",
            "quantidade-clientes-ativos-por-origem",
            "obter-metricas-clientes",
        ]
    );

    // Só as duas ferramentas de origem têm parâmetro, e ele é obrigatório
    for ferramenta in dispatch::FERRAMENTAS {
        match ferramenta.nome {
            "buscar-clientes-por-origem" | "quantidade-clientes-ativos-por-origem" => {
                assert_eq!(ferramenta.parametros.len(), 1);
                assert_eq!(ferramenta.parametros[0].nome, "origem");
                assert!(ferramenta.parametros[0].obrigatorio);
            }
            _ => assert!(ferramenta.parametros.is_empty()),
        }
    }
}

#[tokio::test]
async fn ferramenta_desconhecida_vira_envelope_de_erro() {
    let repo = ClienteRepository::new(pool_sem_tabela().await);

    let envelope = dispatch::despachar(&repo, "apagar-clientes", &Map::new()).await;

    assert!(envelope.is_error);
    assert!(texto(&envelope).contains("Ferramenta desconhecida"));
}

#[tokio::test]
async fn parametro_ausente_rejeita_sem_tocar_o_banco() {
    // Sem tabela: se o repositório fosse chamado o erro seria "no such table"
    let repo = ClienteRepository::new(pool_sem_tabela().await);

    let envelope = dispatch::despachar(&repo, "buscar-clientes-por-origem", &Map::new()).await;

    assert!(envelope.is_error);
    assert!(texto(&envelope).contains("obrigatório"));
    assert!(!texto(&envelope).contains("no such table"));
}

#[tokio::test]
async fn parametro_de_tipo_errado_rejeita_sem_tocar_o_banco() {
    let repo = ClienteRepository::new(pool_sem_tabela().await);
    let argumentos = argumentos(json!({ "origem": 42 }));

    let envelope = dispatch::despachar(&repo, "buscar-clientes-por-origem", &argumentos).await;

    assert!(envelope.is_error);
    assert!(texto(&envelope).contains("tipo string"));
    assert!(!texto(&envelope).contains("no such table"));
}

#[tokio::test]
async fn falha_de_banco_vira_envelope_de_erro() {
    let repo = ClienteRepository::new(pool_sem_tabela().await);

    let envelope = dispatch::despachar(&repo, "listar-clientes", &Map::new()).await;

    assert!(envelope.is_error);
    assert!(texto(&envelope).starts_with("❌"));
}

#[tokio::test]
async fn listar_clientes_em_banco_vazio_avisa_que_nao_ha_resultados() {
    let repo = ClienteRepository::new(pool_de_teste().await);

    let envelope = dispatch::despachar(&repo, "listar-clientes", &Map::new()).await;

    assert!(!envelope.is_error);
    assert_eq!(envelope.content.len(), 1);
    assert_eq!(texto(&envelope), "Nenhum cliente encontrado no sistema.");
}

#[tokio::test]
async fn listar_clientes_renderiza_na_ordem_do_repositorio() {
    let pool = pool_de_teste().await;
    let repo = ClienteRepository::new(pool.clone());

    inserir_cliente(&pool, "Antiga", "antiga@x.com", true, None, "2024-01-01 08:00:00").await;
    inserir_cliente(&pool, "Recente", "recente@x.com", true, None, "2024-02-01 08:00:00").await;

    let envelope = dispatch::despachar(&repo, "listar-clientes", &Map::new()).await;
    let texto = texto(&envelope);

    assert!(!envelope.is_error);
    assert!(texto.contains("Lista de Clientes (2 encontrados)"));
    assert!(texto.contains("recente@x.com"));
    assert!(texto.contains("antiga@x.com"));

    // A mais recente vem primeiro
    let pos_recente = texto.find("Recente").unwrap();
    let pos_antiga = texto.find("Antiga").unwrap();
    assert!(pos_recente < pos_antiga);
}

#[tokio::test]
async fn quantidade_clientes_renderiza_a_contagem() {
    let pool = pool_de_teste().await;
    let repo = ClienteRepository::new(pool.clone());

    inserir_cliente(&pool, "Ana", "ana@x.com", true, None, "2024-01-01 08:00:00").await;
    inserir_cliente(&pool, "Bia", "bia@x.com", false, None, "2024-01-02 08:00:00").await;

    let envelope = dispatch::despachar(&repo, "quantidade-clientes", &Map::new()).await;

    assert!(!envelope.is_error);
    assert_eq!(texto(&envelope), "📊 Quantidade total de clientes: 2");
}

#[tokio::test]
async fn buscar_por_origem_renderiza_somente_os_ativos() {
    let pool = pool_de_teste().await;
    let repo = ClienteRepository::new(pool.clone());

    inserir_cliente(&pool, "Carla", "carla@x.com", true, Some("facebook"), "2024-01-01 08:00:00").await;
    inserir_cliente(&pool, "Bruna", "bruna@x.com", false, Some("facebook"), "2024-01-02 08:00:00").await;
    inserir_cliente(&pool, "Diego", "diego@x.com", true, Some("instagram"), "2024-01-03 08:00:00").await;

    let argumentos = argumentos(json!({ "origem": "facebook" }));
    let envelope = dispatch::despachar(&repo, "buscar-clientes-por-origem", &argumentos).await;
    let texto = texto(&envelope);

    assert!(!envelope.is_error);
    assert!(texto.contains("Clientes encontrados (1)"));
    assert!(texto.contains("Carla"));
    assert!(!texto.contains("Bruna"));
    assert!(!texto.contains("Diego"));
}

#[tokio::test]
async fn buscar_por_origem_sem_resultados_avisa_a_origem() {
    let repo = ClienteRepository::new(pool_de_teste().await);
    let argumentos = argumentos(json!({ "origem": "tiktok" }));

    let envelope = dispatch::despachar(&repo, "buscar-clientes-por-origem", &argumentos).await;

    assert!(!envelope.is_error);
    assert_eq!(
        texto(&envelope),
        "Nenhum cliente encontrado com a origem tiktok."
    );
}

#[tokio::test]
async fn quantidade_ativos_por_origem_renderiza_a_contagem() {
    let pool = pool_de_teste().await;
    let repo = ClienteRepository::new(pool.clone());

    inserir_cliente(&pool, "Carla", "carla@x.com", true, Some("facebook"), "2024-01-01 08:00:00").await;
    inserir_cliente(&pool, "Bruna", "bruna@x.com", false, Some("facebook"), "2024-01-02 08:00:00").await;

    let argumentos = argumentos(json!({ "origem": "facebook" }));
    let envelope =
        dispatch::despachar(&repo, "quantidade-clientes-ativos-por-origem", &argumentos).await;

    assert!(!envelope.is_error);
    assert_eq!(
        texto(&envelope),
        "📊 Quantidade total de clientes ativos (facebook): 1"
    );
}

#[tokio::test]
async fn metricas_renderizam_o_snapshot_em_json() {
    let pool = pool_de_teste().await;
    let repo = ClienteRepository::new(pool.clone());

    inserir_cliente(&pool, "Ana", "ana@x.com", true, Some("facebook"), "2024-01-01 08:00:00").await;
    inserir_cliente(&pool, "Bia", "bia@x.com", false, Some("facebook"), "2024-01-02 08:00:00").await;

    let envelope = dispatch::despachar(&repo, "obter-metricas-clientes", &Map::new()).await;
    let texto = texto(&envelope);

    assert!(!envelope.is_error);
    assert!(texto.starts_with("📊 Métricas de clientes: "));
    assert!(texto.contains("\"totalClientes\":2"));
    assert!(texto.contains("\"clientesAtivos\":1"));
    assert!(texto.contains("\"clientesPorOrigem\""));
    assert!(texto.contains("\"novosClientesPorMes\""));
}
