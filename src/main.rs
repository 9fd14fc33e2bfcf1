use anyhow::{Context, Result};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value, json};
use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

mod client;
mod input;
mod mcp;
mod models;
mod params;
mod tools;

use client::PdfcoClient;

#[derive(Parser)]
#[command(name = "mcp-pdfco")]
#[command(
    version,
    about = "CLI utilities for the PDF.co API and MCP integration"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct ClientArgs {
    /// Override the PDF.co API base URL
    #[arg(long)]
    base_url: Option<String>,
    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[derive(Args, Clone)]
struct ServeArgs {
    /// Serve MCP over stdio (NDJSON)
    #[arg(long)]
    stdio: bool,
    /// Serve MCP over HTTP on this address
    #[arg(long, value_name = "ADDR")]
    http: Option<SocketAddr>,
    #[command(flatten)]
    client: ClientArgs,
}

#[derive(Args, Clone)]
struct PdfToTextArgs {
    #[command(flatten)]
    client: ClientArgs,
    /// URL or base64 encoded PDF
    #[arg(long)]
    url: String,
    /// Page range (e.g., "1-3" or "1,3,5")
    #[arg(long)]
    pages: Option<String>,
    /// Process asynchronously
    #[arg(long)]
    async_mode: bool,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
struct PdfInfoArgs {
    #[command(flatten)]
    client: ClientArgs,
    /// URL or base64 encoded PDF
    #[arg(long)]
    url: String,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
#[command(
    group(
        clap::ArgGroup::new("input")
            .required(true)
            .multiple(false)
            .args(["path", "base64"])
    )
)]
struct FileUploadArgs {
    #[command(flatten)]
    client: ClientArgs,
    /// Path to the file to upload
    #[arg(long)]
    path: Option<String>,
    /// Base64-encoded file bytes
    #[arg(long)]
    base64: Option<String>,
    /// Filename to store the upload under
    #[arg(long)]
    name: Option<String>,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the MCP server
    Serve(ServeArgs),
    /// Extract text from a PDF
    PdfToText(PdfToTextArgs),
    /// Get PDF metadata
    PdfInfo(PdfInfoArgs),
    /// Upload local or inline file content
    FileUpload(FileUploadArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => run_serve(args).await,
        Commands::PdfToText(args) => run_pdf_to_text(args).await,
        Commands::PdfInfo(args) => run_pdf_info(args).await,
        Commands::FileUpload(args) => run_file_upload(args).await,
    }
}

fn build_client(args: &ClientArgs) -> PdfcoClient {
    let mut client = PdfcoClient::new(None);
    if let Some(base_url) = &args.base_url {
        client = client.with_base_url(base_url);
    }
    if let Some(timeout_secs) = args.timeout_secs {
        client = client.with_timeout(Duration::from_secs(timeout_secs));
    }
    if !client.has_api_key() {
        warn!(
            "{} is not set - API calls will fail. Get your API key from https://app.pdf.co/dashboard",
            client::API_KEY_ENV
        );
    }
    client
}

async fn run_serve(args: ServeArgs) -> Result<()> {
    let client = Arc::new(build_client(&args.client));
    client.open().await.context("failed to open API session")?;

    if args.stdio {
        run_stdio_server(client).await
    } else if let Some(addr) = args.http {
        run_http_server(client, addr).await
    } else {
        anyhow::bail!("either --stdio or --http <addr> is required")
    }
}

async fn run_pdf_to_text(args: PdfToTextArgs) -> Result<()> {
    let mut client = build_client(&args.client);
    let mut map = Map::new();
    map.insert("url".to_string(), json!(args.url));
    if let Some(pages) = &args.pages {
        map.insert("pages".to_string(), json!(pages));
    }
    if args.async_mode {
        map.insert("async_mode".to_string(), json!(true));
    }
    let result = tools::pdf_to_text::call(&client, &Value::Object(map)).await;
    client.close();
    print_tool_result(result, args.json)
}

async fn run_pdf_info(args: PdfInfoArgs) -> Result<()> {
    let mut client = build_client(&args.client);
    let mut map = Map::new();
    map.insert("url".to_string(), json!(args.url));
    let result = tools::pdf_info::call(&client, &Value::Object(map)).await;
    client.close();
    print_tool_result(result, args.json)
}

async fn run_file_upload(args: FileUploadArgs) -> Result<()> {
    let mut client = build_client(&args.client);
    let mut map = Map::new();
    if let Some(path) = &args.path {
        map.insert("path".to_string(), json!(path));
    }
    if let Some(base64) = &args.base64 {
        map.insert("base64".to_string(), json!(base64));
    }
    if let Some(name) = &args.name {
        map.insert("name".to_string(), json!(name));
    }
    let result = tools::file_upload::call(&client, &Value::Object(map)).await;
    client.close();
    print_tool_result(result, args.json)
}

fn print_tool_result(result: Value, json_output: bool) -> Result<()> {
    let is_error = result
        .get("isError")
        .and_then(|value| value.as_bool())
        .unwrap_or(false);

    if is_error {
        let message = result
            .get("structuredContent")
            .and_then(|value| value.get("error"))
            .and_then(|value| value.get("message"))
            .and_then(|value| value.as_str())
            .unwrap_or("tool error");
        eprintln!("{message}");
        process::exit(1);
    }

    if json_output {
        let structured = result
            .get("structuredContent")
            .cloned()
            .unwrap_or_else(|| json!({}));
        let output = serde_json::to_string_pretty(&structured)?;
        println!("{output}");
        return Ok(());
    }

    let text = result
        .get("content")
        .and_then(|value| value.as_array())
        .and_then(|arr| arr.first())
        .and_then(|value| value.get("text"))
        .and_then(|value| value.as_str())
        .unwrap_or("");
    println!("{text}");
    Ok(())
}

async fn run_stdio_server(client: Arc<PdfcoClient>) -> Result<()> {
    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }

        let request: Value = match serde_json::from_str(&line) {
            Ok(value) => value,
            Err(_) => continue,
        };

        if let Some(response) = handle_request(&client, &request).await {
            let serialized =
                serde_json::to_string(&response).context("failed to serialize response")?;
            stdout
                .write_all(serialized.as_bytes())
                .await
                .context("failed to write response")?;
            stdout
                .write_all(b"\n")
                .await
                .context("failed to write response")?;
            stdout.flush().await.context("failed to flush response")?;
        }
    }

    Ok(())
}

async fn run_http_server(client: Arc<PdfcoClient>, addr: SocketAddr) -> Result<()> {
    let app = Router::new()
        .route("/health", get(health))
        .route("/mcp", post(mcp_endpoint))
        .with_state(client);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(
        "serving MCP over HTTP on {}",
        listener.local_addr().context("local addr")?
    );
    axum::serve(listener, app).await.context("HTTP server failed")
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy", "service": "mcp-pdfco"}))
}

async fn mcp_endpoint(
    State(client): State<Arc<PdfcoClient>>,
    Json(request): Json<Value>,
) -> Json<Value> {
    match handle_request(&client, &request).await {
        Some(response) => Json(response),
        None => Json(Value::Null),
    }
}

async fn handle_request(client: &PdfcoClient, request: &Value) -> Option<Value> {
    let method = request.get("method").and_then(|value| value.as_str());
    let id = request.get("id").cloned();

    match (method, id) {
        (Some("initialize"), Some(id)) => Some(json!({
            "jsonrpc": "2.0",
            "id": id,
            "result": {
                "protocolVersion": "2025-11-25",
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION")
                }
            }
        })),
        (Some("tools/list"), Some(id)) => Some(json!({
            "jsonrpc": "2.0",
            "id": id,
            "result": {
                "tools": mcp::tool_definitions()
            }
        })),
        (Some("tools/call"), Some(id)) => {
            let result = handle_tool_call(client, request).await;
            Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": result
            }))
        }
        _ => None,
    }
}

async fn handle_tool_call(client: &PdfcoClient, request: &Value) -> Value {
    let params = request.get("params");
    let Some(params) = params.and_then(|value| value.as_object()) else {
        return tools::error_result(mcp::errors::INVALID_INPUT, "params must be an object", None);
    };

    let name = params.get("name").and_then(|value| value.as_str());
    let Some(name) = name else {
        return tools::error_result(
            mcp::errors::INVALID_INPUT,
            "params.name must be a string",
            None,
        );
    };

    let args = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| json!({}));

    match name {
        mcp::contracts::TOOL_PDF_TO_TEXT => tools::pdf_to_text::call(client, &args).await,
        mcp::contracts::TOOL_PDF_TO_JSON => tools::pdf_to_json::call(client, &args).await,
        mcp::contracts::TOOL_PDF_TO_HTML => tools::pdf_to_html::call(client, &args).await,
        mcp::contracts::TOOL_PDF_TO_CSV => tools::pdf_to_csv::call(client, &args).await,
        mcp::contracts::TOOL_PDF_MERGE => tools::pdf_merge::call(client, &args).await,
        mcp::contracts::TOOL_PDF_SPLIT => tools::pdf_split::call(client, &args).await,
        mcp::contracts::TOOL_PDF_INFO => tools::pdf_info::call(client, &args).await,
        mcp::contracts::TOOL_HTML_TO_PDF => tools::html_to_pdf::call(client, &args).await,
        mcp::contracts::TOOL_URL_TO_PDF => tools::url_to_pdf::call(client, &args).await,
        mcp::contracts::TOOL_IMAGE_TO_PDF => tools::image_to_pdf::call(client, &args).await,
        mcp::contracts::TOOL_PDF_ADD_WATERMARK => {
            tools::pdf_add_watermark::call(client, &args).await
        }
        mcp::contracts::TOOL_PDF_ROTATE => tools::pdf_rotate::call(client, &args).await,
        mcp::contracts::TOOL_PDF_COMPRESS => tools::pdf_compress::call(client, &args).await,
        mcp::contracts::TOOL_PDF_PROTECT => tools::pdf_protect::call(client, &args).await,
        mcp::contracts::TOOL_PDF_UNLOCK => tools::pdf_unlock::call(client, &args).await,
        mcp::contracts::TOOL_BARCODE_GENERATE => {
            tools::barcode_generate::call(client, &args).await
        }
        mcp::contracts::TOOL_BARCODE_READ => tools::barcode_read::call(client, &args).await,
        mcp::contracts::TOOL_OCR_PDF => tools::ocr_pdf::call(client, &args).await,
        mcp::contracts::TOOL_FILE_UPLOAD => tools::file_upload::call(client, &args).await,
        _ => tools::error_result(
            mcp::errors::INVALID_INPUT,
            format!("tool not implemented: {name}"),
            None,
        ),
    }
}
