//! `docboard` is the terminal companion for the document kanban board.
//!
//! Fetches flows and configs over the backend's REST API, prints the board
//! and per-status counts, and plans and submits status moves with the same
//! rules the browser enforces on drag-and-drop.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use kanban::{
    BackendStatus, BoardStats, ConfigListResponse, DocumentFilter, Flow, FlowListResponse, FlowQuery, KanbanStatus,
    MoveError, StatusOverrides, StatusUpdate, UnifiedDocument, build_columns, build_documents, plan_move,
};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

mod render;
mod state_file;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("state file {path}: {source}")]
    StateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown backend status code {0}")]
    UnknownStatusCode(i64),
    #[error(transparent)]
    Move(#[from] MoveError),
}

#[derive(Parser, Debug)]
#[command(name = "docboard", about = "Document kanban board CLI")]
struct Cli {
    #[arg(long, env = "DOCBOARD_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// JSON file holding locally recorded review statuses.
    #[arg(long, env = "DOCBOARD_STATE_FILE")]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    api_base: String,
    state_file: Option<PathBuf>,
    client: reqwest::Client,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check backend health.
    Ping,
    /// List flows with their backend and board status.
    Flows(FlowsArgs),
    /// List document configs.
    Configs {
        /// Include archived configs.
        #[arg(long, default_value_t = false)]
        all: bool,
    },
    /// Print the six board columns.
    Board(BoardArgs),
    /// Print per-status counts.
    Stats(BoardArgs),
    /// Move a flow to another board column.
    Move(MoveArgs),
}

#[derive(Args, Debug)]
struct FlowsArgs {
    #[arg(long)]
    config_id: Option<i64>,
    /// Backend status code (0 pending, 1 in progress, 2 completed, 3 failed).
    #[arg(long)]
    status: Option<i64>,
    /// Page size (1-100).
    #[arg(long, default_value_t = kanban::DEFAULT_FLOW_LIMIT, value_parser = limit_parser())]
    limit: u32,
    #[arg(long, default_value_t = 0)]
    offset: u32,
    /// Print the raw JSON response.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct BoardArgs {
    #[arg(long)]
    config_id: Option<i64>,
    /// Case-insensitive match on title, subtitle, or preview.
    #[arg(long, default_value = "")]
    search: String,
    /// Earliest creation date (YYYY-MM-DD), requires --to.
    #[arg(long, requires = "to")]
    from: Option<String>,
    /// Latest creation date (YYYY-MM-DD), requires --from.
    #[arg(long, requires = "from")]
    to: Option<String>,
    /// Page size (1-100).
    #[arg(long, default_value_t = kanban::DEFAULT_FLOW_LIMIT, value_parser = limit_parser())]
    limit: u32,
}

fn limit_parser() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..=i64::from(kanban::MAX_FLOW_LIMIT))
}

impl BoardArgs {
    fn filter(&self) -> DocumentFilter {
        DocumentFilter {
            config_id: self.config_id,
            search_text: self.search.clone(),
            date_range: self.from.clone().zip(self.to.clone()),
        }
    }

    fn query(&self) -> FlowQuery {
        FlowQuery { limit: self.limit, offset: 0, config_id: self.config_id, status: None }
    }
}

#[derive(Args, Debug)]
struct MoveArgs {
    flow_id: i64,
    /// Target column: pending, processing, completed, reviewing, confirmed, failed.
    to: KanbanStatus,
    /// Validate and print the plan without applying it.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    init_tracing();
    let cli = Cli::parse();
    let ctx = CliContext {
        api_base: api_base(&cli.base_url),
        state_file: cli.state_file,
        client: reqwest::Client::new(),
    };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Flows(args) => run_flows(&ctx, args).await,
        Command::Configs { all } => run_configs(&ctx, all).await,
        Command::Board(args) => run_board(&ctx, args).await,
        Command::Stats(args) => run_stats(&ctx, args).await,
        Command::Move(args) => run_move(&ctx, args).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn api_base(base_url: &str) -> String {
    format!("{}/api", base_url.trim_end_matches('/'))
}

async fn run_ping(ctx: &CliContext) -> Result<(), CliError> {
    let health: serde_json::Value = get_json(ctx, &kanban::health_path(&ctx.api_base)).await?;
    let status = health.get("status").and_then(serde_json::Value::as_str).unwrap_or("unknown");
    let database = health.get("database").and_then(serde_json::Value::as_str).unwrap_or("unknown");
    println!("{status} (database: {database})");
    Ok(())
}

async fn run_flows(ctx: &CliContext, args: FlowsArgs) -> Result<(), CliError> {
    let status = args
        .status
        .map(|code| BackendStatus::from_code(code).ok_or(CliError::UnknownStatusCode(code)))
        .transpose()?;
    let query = FlowQuery { limit: args.limit, offset: args.offset, config_id: args.config_id, status };
    let url = kanban::flows_path(&ctx.api_base, &query);
    if args.json {
        let value: serde_json::Value = get_json(ctx, &url).await?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }
    let flows: FlowListResponse = get_json(ctx, &url).await?;
    let configs = fetch_configs(ctx, false).await?;
    let total = flows.total;
    let documents = build_documents(flows.items, &configs.items);
    print!("{}", render::render_flows(&documents, total));
    Ok(())
}

async fn run_configs(ctx: &CliContext, all: bool) -> Result<(), CliError> {
    let configs = fetch_configs(ctx, all).await?;
    print!("{}", render::render_configs(&configs.items));
    Ok(())
}

async fn run_board(ctx: &CliContext, args: BoardArgs) -> Result<(), CliError> {
    let documents = load_documents(ctx, &args).await?;
    let columns = build_columns(args.filter().apply(&documents));
    print!("{}", render::render_board(&columns));
    Ok(())
}

async fn run_stats(ctx: &CliContext, args: BoardArgs) -> Result<(), CliError> {
    let documents = load_documents(ctx, &args).await?;
    let stats = BoardStats::from_documents(&args.filter().apply(&documents));
    print!("{}", render::render_stats(&stats));
    Ok(())
}

async fn run_move(ctx: &CliContext, args: MoveArgs) -> Result<(), CliError> {
    let mut overrides = load_overrides(ctx)?;
    let flow: Flow = get_json(ctx, &kanban::flow_path(&ctx.api_base, args.flow_id)).await?;
    let mut document = UnifiedDocument::from_flow(flow, None);
    overrides.reconcile(std::slice::from_mut(&mut document));

    let plan = plan_move(&document, args.to)?;
    if args.dry_run {
        println!("{}", render::render_plan(&plan, true));
        return Ok(());
    }

    if plan.backend_changed {
        let url = kanban::flow_path(&ctx.api_base, plan.document_id);
        let body = StatusUpdate { main_status: plan.backend };
        let response = ctx.client.patch(&url).json(&body).send().await?;
        ensure_success(response).await?;
        tracing::info!(flow_id = plan.document_id, backend = %plan.backend, "backend status updated");
    } else if ctx.state_file.is_none() {
        tracing::warn!("no state file configured; the {} status will not survive this run", plan.to);
    }

    overrides.record(&plan);
    save_overrides(ctx, &overrides)?;
    println!("{}", render::render_plan(&plan, false));
    Ok(())
}

/// Configs (for subtitles) and flows, rebuilt into cards with local review
/// statuses re-applied.
async fn load_documents(ctx: &CliContext, args: &BoardArgs) -> Result<Vec<UnifiedDocument>, CliError> {
    let configs = fetch_configs(ctx, false).await?;
    let flows: FlowListResponse = get_json(ctx, &kanban::flows_path(&ctx.api_base, &args.query())).await?;
    tracing::debug!(fetched = flows.items.len(), total = flows.total, "flows loaded");

    let mut documents = build_documents(flows.items, &configs.items);
    let mut overrides = load_overrides(ctx)?;
    let before = overrides.clone();
    let applied = overrides.reconcile(&mut documents);
    tracing::debug!(applied, "review overrides applied");
    if overrides != before {
        save_overrides(ctx, &overrides)?;
    }
    Ok(documents)
}

async fn fetch_configs(ctx: &CliContext, all: bool) -> Result<ConfigListResponse, CliError> {
    let url = if all {
        kanban::configs_path(&ctx.api_base, None)
    } else {
        kanban::active_configs_path(&ctx.api_base)
    };
    get_json(ctx, &url).await
}

async fn get_json<T: DeserializeOwned>(ctx: &CliContext, url: &str) -> Result<T, CliError> {
    tracing::debug!(%url, "GET");
    let response = ctx.client.get(url).send().await?;
    let response = ensure_success(response).await?;
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CliError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(CliError::ServerError { status: status.as_u16(), message })
}

fn load_overrides(ctx: &CliContext) -> Result<StatusOverrides, CliError> {
    match &ctx.state_file {
        Some(path) => state_file::load(path),
        None => Ok(StatusOverrides::default()),
    }
}

fn save_overrides(ctx: &CliContext, overrides: &StatusOverrides) -> Result<(), CliError> {
    match &ctx.state_file {
        Some(path) => state_file::save(path, overrides),
        None => Ok(()),
    }
}
