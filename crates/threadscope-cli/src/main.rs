mod analyze;
mod synthesize;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "threadscope")]
#[command(about = "Score community posts and synthesize trend reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a JSON array of posts and print the analyses
    Analyze {
        /// JSON file holding an array of posts
        #[arg(long)]
        posts: PathBuf,
        /// Company description to score against
        #[arg(long, conflicts_with = "description_file")]
        description: Option<String>,
        /// Read the company description from a file
        #[arg(long)]
        description_file: Option<PathBuf>,
        /// YAML vocabulary replacing the built-in tables
        #[arg(long)]
        vocabulary: Option<PathBuf>,
    },
    /// Build a trend report from previously printed analyses
    Synthesize {
        /// JSON file holding an array of analyses
        #[arg(long)]
        analyses: PathBuf,
        /// Label for the report
        #[arg(long)]
        query: String,
        /// Minimum relevance score (defaults to `THREADSCOPE_MIN_RELEVANCE`)
        #[arg(long)]
        min_relevance: Option<f64>,
        /// Minimum relevant analyses required (defaults to `THREADSCOPE_MIN_TREND_POSTS`)
        #[arg(long)]
        min_posts: Option<usize>,
    },
    /// Print the theme table
    Themes {
        #[arg(long)]
        vocabulary: Option<PathBuf>,
    },
    /// Print the profile extracted from a company description
    Profile {
        #[arg(
            long,
            conflicts_with = "description_file",
            required_unless_present = "description_file"
        )]
        description: Option<String>,
        #[arg(long)]
        description_file: Option<PathBuf>,
        #[arg(long)]
        vocabulary: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = threadscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = match cli.command {
        Commands::Analyze {
            posts,
            description,
            description_file,
            vocabulary,
        } => {
            let engine = analyze::load_engine(vocabulary.as_deref(), &config)?;
            let description =
                analyze::read_description(description, description_file.as_deref())?;
            let analyses = analyze::run_analyze(&engine, &posts, description.as_deref())?;
            serde_json::to_string_pretty(&analyses)?
        }
        Commands::Synthesize {
            analyses,
            query,
            min_relevance,
            min_posts,
        } => {
            let report = synthesize::run_synthesize(
                &analyses,
                &query,
                min_relevance.unwrap_or(config.min_relevance),
                min_posts.unwrap_or(config.min_trend_posts),
            )?;
            serde_json::to_string_pretty(&report)?
        }
        Commands::Themes { vocabulary } => {
            let engine = analyze::load_engine(vocabulary.as_deref(), &config)?;
            serde_json::to_string_pretty(&analyze::theme_table(engine.vocabulary()))?
        }
        Commands::Profile {
            description,
            description_file,
            vocabulary,
        } => {
            let engine = analyze::load_engine(vocabulary.as_deref(), &config)?;
            let description =
                analyze::read_description(description, description_file.as_deref())?
                    .unwrap_or_default();
            serde_json::to_string_pretty(&engine.profile(&description))?
        }
    };

    println!("{output}");
    Ok(())
}
