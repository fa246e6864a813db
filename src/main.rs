//src/main.rs

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;

use mcp_clientes::config::AppState;
use mcp_clientes::handlers;

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Garante a tabela `clientes` na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Catálogo e invocação de ferramentas
    let ferramenta_routes = Router::new()
        .route("/", get(handlers::ferramentas::listar_ferramentas))
        .route("/{nome}", post(handlers::ferramentas::chamar_ferramenta));

    // Busca direta por id
    let cliente_routes = Router::new().route("/{id}", get(handlers::clientes::buscar_cliente_por_id));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/ferramentas", ferramenta_routes)
        .nest("/api/clientes", cliente_routes)
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
