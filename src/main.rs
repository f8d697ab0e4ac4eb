#[tokio::main]
async fn main() -> anyhow::Result<()> {
    qr_web::telemetry::init();
    let cfg = qr_web::config::Config::load()?;

    let (app, port) = qr_web::build_app(cfg).await?;

    use tracing::info;
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "qr code generator starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
