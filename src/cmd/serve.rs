//! HTTP API server command — `issueforge serve`.

use anyhow::Result;

use issueforge::server::{ServerConfig, start_server};

pub async fn cmd_serve(port: u16, dev: bool) -> Result<()> {
    start_server(ServerConfig {
        port,
        dev_mode: dev,
    })
    .await
}
