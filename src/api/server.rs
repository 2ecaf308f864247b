//! Web server lifecycle.

use std::future::Future;
use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use super::handlers::AppState;
use super::routes::create_router;

/// A bound, not yet running web server.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    router: Router,
}

/// Open the listener and build the router.
pub async fn bind(addr: SocketAddr, state: AppState) -> io::Result<Server> {
    let listener = TcpListener::bind(addr).await?;
    Ok(Server {
        listener,
        router: create_router(state),
    })
}

impl Server {
    /// Address actually bound (resolves port 0).
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve requests until `shutdown` resolves, then drain in-flight requests.
    pub async fn run<F>(self, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        info!("HTTP server listening on {}", addr);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}
