// src/bin/seed.rs
//
// Popula a tabela `clientes` com dados de exemplo. Cada inserção é
// independente (id e datas vêm do banco), então todas são disparadas de uma
// vez e aguardadas no final.

use mcp_clientes::config::AppState;
use rand::Rng;
use tokio::task::JoinSet;

const NOMES: &[&str] = &[
    "Ana", "Bruno", "Camila", "Diego", "Elisa", "Felipe", "Gabriela", "Heitor", "Isabela",
    "Joao", "Larissa", "Marcos", "Natalia", "Otavio", "Paula", "Rafael", "Sofia", "Thiago",
    "Vitoria", "Wesley",
];
const SOBRENOMES: &[&str] = &[
    "Silva", "Santos", "Oliveira", "Souza", "Pereira", "Costa", "Rodrigues", "Almeida",
    "Nascimento", "Lima",
];
const BAIRROS: &[&str] = &[
    "Centro", "Jardim Paulista", "Copacabana", "Savassi", "Asa Norte", "Moema", "Botafogo",
    "Funcionários",
];
const CIDADES: &[(&str, &str)] = &[
    ("São Paulo", "SP"),
    ("Rio de Janeiro", "RJ"),
    ("Belo Horizonte", "MG"),
    ("Brasília", "DF"),
];
const ORIGENS: &[&str] = &["facebook", "instagram", "tiktok"];

const TOTAL_CLIENTES: usize = 50;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).compact().init();

    let app_state = AppState::new().await?;

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await?;

    tracing::info!("Inserindo {} clientes de exemplo...", TOTAL_CLIENTES);

    let mut tarefas = JoinSet::new();
    {
        let mut rng = rand::thread_rng();

        for i in 0..TOTAL_CLIENTES {
            let nome_proprio = NOMES[rng.gen_range(0..NOMES.len())];
            let sobrenome = SOBRENOMES[rng.gen_range(0..SOBRENOMES.len())];
            let nome = format!("{nome_proprio} {sobrenome}");

            // O índice garante e-mails únicos mesmo com nomes repetidos
            let email = format!(
                "{}.{}.{}@exemplo.com",
                nome_proprio.to_lowercase(),
                sobrenome.to_lowercase(),
                i
            );

            let ativo = rng.gen_bool(0.5);
            let bairro = BAIRROS[rng.gen_range(0..BAIRROS.len())].to_string();
            let (cidade, estado) = CIDADES[rng.gen_range(0..CIDADES.len())];
            let cep = format!("{:05}-{:03}", rng.gen_range(1000..100000), rng.gen_range(0..1000));
            let origem = ORIGENS[rng.gen_range(0..ORIGENS.len())];

            let pool = app_state.db_pool.clone();
            tarefas.spawn(async move {
                sqlx::query(
                    "INSERT INTO clientes (nome, email, ativo, bairro, cidade, estado, cep, origem) \
                     VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
                )
                .bind(nome)
                .bind(email)
                .bind(ativo)
                .bind(bairro)
                .bind(cidade)
                .bind(estado)
                .bind(cep)
                .bind(origem)
                .execute(&pool)
                .await
            });
        }
    }

    let mut inseridos = 0usize;
    while let Some(resultado) = tarefas.join_next().await {
        resultado??;
        inseridos += 1;
    }

    tracing::info!("✅ {} clientes inseridos com sucesso!", inseridos);
    Ok(())
}
