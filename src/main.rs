use chat2maas::server::build_router;
use chat2maas::util::{env_bind_addr, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let addr = env_bind_addr();
    tracing::info!("Chat2MaaS listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, build_router()).await?;
    Ok(())
}
