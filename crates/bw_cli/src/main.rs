use std::sync::Arc;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;

use bw_core::{PipelineConfig, Result, VoiceProfile};
use bw_generation::create_generator;
use bw_pipeline::{JsonFileStore, NullStore, PipelineOrchestrator, ResultsStore};
use bw_research::{FeedSource, NewsTriage, RssFeedSource};

#[derive(Parser, Debug)]
#[command(author, version, about = "Brand-voice AI content pipeline", long_about = None)]
struct Cli {
    /// Generator backend. Available backends: openai (default), dummy
    #[arg(long, default_value = "openai")]
    model: String,
    /// Seed for the prompt and fallback randomness (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the research → generation → quality → routing pipeline once
    Run {
        /// Skip persistence and automation outputs
        #[arg(long)]
        dry_run: bool,
    },
    /// Fetch and triage the configured feeds, print articles and topics
    Research {
        /// Look-back window in hours
        #[arg(long, default_value_t = 24)]
        hours: i64,
    },
    /// Serve the read-only demo API
    Serve {
        #[arg(long, default_value_t = 8787)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut config = PipelineConfig::from_env();
    config.seed = cli.seed;

    match cli.command {
        Commands::Run { dry_run } => run_pipeline(config, &cli.model, dry_run).await,
        Commands::Research { hours } => run_research(config, hours).await,
        Commands::Serve { port } => serve(config, port).await,
    }
}

async fn run_pipeline(mut config: PipelineConfig, backend: &str, dry_run: bool) -> Result<()> {
    if dry_run {
        config.outputs_path = None;
    }

    let voice = VoiceProfile::load(&config.voice_profile_path)?;
    info!("🎭 Voice profile loaded ({})", voice.tone);

    let generator = create_generator(backend, &config, voice)?;
    info!("🧠 Generator initialized ({})", generator.name());

    let feed_source = Arc::new(RssFeedSource::new(config.feeds.clone()));
    let store: Arc<dyn ResultsStore> = if dry_run {
        Arc::new(NullStore)
    } else {
        Arc::new(JsonFileStore::new(config.results_dir.clone()))
    };

    let mut pipeline = PipelineOrchestrator::new(config, feed_source, generator, store);
    let outcome = pipeline.run().await;

    println!(
        "Pipeline {}",
        if outcome.success { "SUCCESS" } else { "FAILED" }
    );
    println!("Quality score: {:.2}", outcome.quality_score);
    println!("Action: {}", outcome.action.as_str());
    println!("Content: {}", outcome.content);
    if !outcome.issues.is_empty() {
        println!("Issues:");
        for issue in &outcome.issues {
            println!("  - {}", issue);
        }
    }
    println!("Duration: {:.1}s", outcome.duration_seconds);
    Ok(())
}

async fn run_research(config: PipelineConfig, hours: i64) -> Result<()> {
    info!("🔍 Researching AI news from {} feeds", config.feeds.len());
    let source = RssFeedSource::new(config.feeds.clone());
    let entries = source.fetch_entries().await?;

    let triage = NewsTriage::new(hours);
    let articles = triage.triage(&entries, Utc::now());

    println!("Found {} relevant articles:", articles.len());
    for (i, article) in articles.iter().take(3).enumerate() {
        println!("\n{}. {}", i + 1, article.title);
        println!("   Relevance: {:.1}", article.relevance_score);
        println!("   Source: {}", article.source);
        if !article.summary.is_empty() {
            let preview: String = article.summary.chars().take(100).collect();
            println!("   Summary: {}...", preview);
        }
    }

    let trending = triage.trending_topics(&articles);
    println!("\nTrending topics: {}", trending.join(", "));
    Ok(())
}

async fn serve(config: PipelineConfig, port: u16) -> Result<()> {
    let state = bw_web::AppState {
        service: "brandwire demo API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        generator_configured: config.api_key.is_some(),
    };
    let app = bw_web::create_app(state).await;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("🌐 Demo API listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
