//! Shared relay serve entrypoint, used by the CLI and the tests.

use crate::{Relay, RelayConfig, router};
use anyhow::Result;
use llm::{Client, HttpProvider, Model};
use tokio::sync::oneshot;

/// Handle returned by [`serve`], holding the bound port and shutdown trigger.
pub struct ServeHandle {
    /// The port the relay is listening on.
    pub port: u16,
    /// Send a value to trigger graceful shutdown.
    shutdown_tx: Option<oneshot::Sender<()>>,
    /// Join handle for the server task.
    join: Option<tokio::task::JoinHandle<Result<(), std::io::Error>>>,
}

impl ServeHandle {
    /// Base URL of the running relay, on the loopback interface.
    pub fn local_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Trigger graceful shutdown and wait for the server to stop.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(join) = self.join.take() {
            join.await??;
        }
        Ok(())
    }
}

/// Validate config, build the upstream provider, bind and start serving.
///
/// The server runs in a spawned task; call `handle.shutdown()` to stop it.
pub async fn serve(config: &RelayConfig) -> Result<ServeHandle> {
    config.validate()?;
    let provider = HttpProvider::bearer(
        Client::new(),
        &config.upstream.api_key,
        &config.upstream.endpoint(),
    )?;
    tracing::info!(
        "relaying to {} with model {}",
        provider.endpoint(),
        config.upstream.model
    );
    serve_relay(Relay::new(provider, config.upstream.model.as_str()), &config.server.bind).await
}

/// Serve an already-built relay on `bind`.
pub async fn serve_relay<M: Model>(relay: Relay<M>, bind: &str) -> Result<ServeHandle> {
    let model = relay.model_id().to_owned();
    let app = router(relay);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    let port = listener.local_addr()?.port();
    tracing::info!(%model, "relay listening on {bind} (port {port})");

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                tracing::info!("received shutdown signal");
            })
            .await
    });

    Ok(ServeHandle {
        port,
        shutdown_tx: Some(shutdown_tx),
        join: Some(join),
    })
}
