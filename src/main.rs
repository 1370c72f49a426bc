use event_gateway::ingest::handlers::router;
use event_gateway::transform::queue::EventQueue;
use event_gateway::transform::worker::TransformWorker;
use std::net::SocketAddr;
use std::sync::Arc;

/// Default listen address. The port matches the original deployment.
const DEFAULT_BIND: &str = "0.0.0.0:8081";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = DEFAULT_BIND.parse()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Hand-off queue: capacity 1 keeps producers waiting until the worker
    //    is ready, so accepted throughput is throttled by consumption.
    let (queue, rx) = EventQueue::new(1);

    // 2. Transform worker (single consumer for the process lifetime):
    let worker = TransformWorker::new(rx);
    worker.start();

    // 3. HTTP router:
    let app = router(Arc::new(queue));

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("HTTP server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
