use ad_analyzer::config::AppConfig;
use ad_analyzer::llm::{AdReviewer, OpenAiReviewer};
use ad_analyzer::{server, verdict, AdAnalyzer, AdRequest, AnalysisResult, ImageSignals};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ad-analyzer", about = "Score ad copy against a marketing goal")]
struct Cli {
    /// TOML config file (defaults to ANALYZER_CONFIG_PATH or config/analyzer.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Analyze(AnalyzeArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct AnalyzeArgs {
    /// Ad copy; read from stdin when omitted
    #[arg(long)]
    text: Option<String>,
    /// clicks, conversions or awareness
    #[arg(long)]
    goal: String,
    #[arg(long)]
    has_person: bool,
    #[arg(long)]
    has_product: bool,
    #[arg(long)]
    has_offer_text: bool,
    /// Ask the LLM for a summary and rewrite
    #[arg(long)]
    ai: bool,
    #[arg(long)]
    ai_model: Option<String>,
    /// Print the HTTP response body instead of a report
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone, Default)]
struct ServeArgs {
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
    #[arg(long)]
    web_root: Option<String>,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let (config, config_path) = AppConfig::load(cli.config).map_err(|err| err.to_string())?;
    if let Some(path) = config_path.filter(|path| path.exists()) {
        tracing::info!(path = %path.display(), "loaded config");
    }

    let command = cli.command.unwrap_or(Command::Serve(ServeArgs::default()));
    match command {
        Command::Analyze(args) => run_analyze(args, config).await,
        Command::Serve(args) => run_serve(args, config).await,
    }
}

async fn run_serve(args: ServeArgs, mut config: AppConfig) -> Result<(), String> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(web_root) = args.web_root {
        config.server.web_root = web_root;
    }

    let reviewer = OpenAiReviewer::from_env(&config.llm, None).map_err(|err| err.to_string())?;
    match reviewer.as_ref() {
        Some(reviewer) => tracing::info!(model = reviewer.model(), "AI review enabled"),
        None => tracing::warn!("OPENAI_API_KEY is not set; AI summaries will use placeholders"),
    }

    let analyzer = AdAnalyzer::new(
        reviewer.map(|reviewer| Arc::new(reviewer) as Arc<dyn AdReviewer>),
        config.llm.timeout(),
    );
    server::serve(&config.server, analyzer).await
}

async fn run_analyze(args: AnalyzeArgs, config: AppConfig) -> Result<(), String> {
    let text = read_text(args.text)?;
    let signals = if args.has_person || args.has_product || args.has_offer_text {
        Some(ImageSignals {
            has_person: Some(args.has_person),
            has_product: Some(args.has_product),
            has_offer_text: Some(args.has_offer_text),
        })
    } else {
        None
    };
    let request =
        AdRequest::new(Some(text), Some(args.goal), signals).map_err(|err| err.to_string())?;

    let reviewer = if args.ai {
        let reviewer = OpenAiReviewer::from_env(&config.llm, args.ai_model)
            .map_err(|err| err.to_string())?
            .ok_or_else(|| "OPENAI_API_KEY is not set".to_string())?;
        Some(Arc::new(reviewer) as Arc<dyn AdReviewer>)
    } else {
        None
    };

    let analyzer = AdAnalyzer::new(reviewer, config.llm.timeout());
    let result = analyzer.analyze(&request).await;

    if args.json {
        let payload = serde_json::to_string_pretty(&result)
            .map_err(|err| format!("failed to serialize result: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    print_report(&result, args.ai);
    Ok(())
}

fn print_report(result: &AnalysisResult, show_ai: bool) {
    let Some(score) = result.score else {
        println!("Goal: {}", result.goal_analyzed);
        if let Some(message) = result.message.as_deref() {
            println!("{}", message);
        }
        return;
    };

    println!("Goal: {}", result.goal_analyzed);
    println!("Score: {} / 100 ({})", score, verdict(score));
    if let Some(breakdown) = result.breakdown.as_ref() {
        println!("\nBreakdown:");
        for (label, value) in breakdown.iter() {
            println!("  {}: {}", label, value);
        }
    }

    if !result.suggestions.is_empty() {
        println!("\nSuggestions:");
        for suggestion in &result.suggestions {
            println!("- {}", suggestion);
        }
    }

    if let Some(advice) = result.image_advice.as_deref() {
        println!("\nImage: {}", advice);
    }

    if show_ai {
        if let Some(summary) = result.ai_summary.as_deref() {
            println!("\nAI summary:\n{}", summary);
        }
        if let Some(rewrite) = result.rewrite.as_deref().filter(|rewrite| !rewrite.is_empty()) {
            println!("\nRewrite:\n{}", rewrite);
        }
    }
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing ad text: pass --text or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
