use mintbank_api::{create_app, AppState, ServerConfig};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();
    let state = AppState::new();
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .unwrap();

    println!("mintbank API server running on http://{}", config.addr());

    axum::serve(listener, app).await.unwrap();
}
