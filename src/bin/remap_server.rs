//! Excel Remap API Server binary
//!
//! HTTP API for remapping spreadsheet columns onto standard headers.

use std::time::Duration;

use clap::Parser;
use excel_remap::api::{run_api_server, server::DEFAULT_MAX_BODY_BYTES, ApiConfig};

#[derive(Parser, Debug)]
#[command(name = "remap-server")]
#[command(version)]
#[command(about = "Excel Remap API Server - remap spreadsheet columns over HTTP")]
#[command(long_about = r#"
Excel Remap API Server

Endpoints:
  - POST /api/remap_excel  - Remap a base64 encoded workbook
  - GET  /health           - Health check
  - GET  /version          - Server version info
  - GET  /                 - API documentation

Model credentials are supplied per request in the OpenAI-APIKey,
OpenAI-Host, OpenAI-Version and OpenAI-Deployment headers. The server
stores none.

Example usage:
  remap-server                           # Start on localhost:8080
  remap-server --host 0.0.0.0 --port 3000

  curl -X POST http://localhost:8080/api/remap_excel \
    -H "Content-Type: application/json" \
    -H "OpenAI-APIKey: $KEY" -H "OpenAI-Host: my-resource.openai.azure.com" \
    -H "OpenAI-Version: 2024-02-01" -H "OpenAI-Deployment: gpt-4o" \
    -d '{"standardColumns": "Number,Question,Response", "excelFile": "<base64>"}'
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "REMAP_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "REMAP_PORT")]
    port: u16,

    /// Maximum request body size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES, env = "REMAP_MAX_BODY_BYTES")]
    max_body_bytes: usize,

    /// Timeout for each model call in seconds (unset = no timeout)
    #[arg(long, env = "REMAP_MODEL_TIMEOUT_SECS")]
    model_timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        max_body_bytes: args.max_body_bytes,
        model_timeout: args.model_timeout_secs.map(Duration::from_secs),
    };

    run_api_server(config).await
}
