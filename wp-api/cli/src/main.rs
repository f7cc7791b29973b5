//! wp-api CLI - discover REST resource classes from a route schema

mod error;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wp_api_lib::{
    ApiSettings, HttpSchemaSource, Orchestrator, Registries, SchemaSource, StaticSchemaSource,
};

use crate::error::CliError;
use crate::report::Report;

#[derive(Parser)]
#[command(name = "wp-api")]
#[command(version, about = "Discover model and collection classes from a REST route schema", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(flatten)]
    api: ApiArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ApiArgs {
    /// Base URL of the REST API
    #[arg(long, global = true, env = "WP_API_ROOT", value_name = "URL")]
    root: Option<String>,

    /// Versioned namespace appended to the root
    #[arg(long, global = true, env = "WP_API_VERSION", value_name = "VERSION")]
    api_version: Option<String>,

    /// Read the schema from a JSON file instead of the network
    #[arg(long, global = true, value_name = "FILE")]
    schema_file: Option<PathBuf>,

    /// HTTP timeout in seconds for the schema request
    #[arg(long, global = true, value_name = "SECS")]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the model and collection classes the schema produces
    Discover {
        /// Output as JSON instead of terminal format
        #[arg(long)]
        json: bool,
    },

    /// Print the URL an instance of a generated class would use
    Url {
        /// Generated class name (e.g. "PostsRevisions")
        #[arg(value_name = "CLASS")]
        class: String,

        /// Value of the instance's `id` attribute
        #[arg(long)]
        id: Option<String>,

        /// Value of the instance's `parent` attribute
        #[arg(long)]
        parent: Option<String>,

        /// Look the name up among collections instead of models
        #[arg(long)]
        collection: bool,
    },
}

impl ApiArgs {
    fn settings(&self) -> Result<ApiSettings, CliError> {
        let defaults = ApiSettings::default();
        let mut builder = ApiSettings::builder()
            .api_root(self.root.as_deref().unwrap_or(defaults.api_root()))
            .version_string(
                self.api_version
                    .as_deref()
                    .unwrap_or(defaults.version_string()),
            );
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder.build()?)
    }
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,wp_api_lib=info".to_string(),
            2 => "info,wp_api_lib=debug".to_string(),
            _ => "debug,wp_api_lib=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

/// Parses a flag value as JSON when it is a number, leaving everything else a string.
fn attribute_value(raw: &str) -> Value {
    raw.parse::<i64>()
        .map(Value::from)
        .unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn print_url(
    registries: &Registries,
    class: &str,
    id: Option<&str>,
    parent: Option<&str>,
    collection: bool,
) -> Result<(), CliError> {
    let unknown = || CliError::UnknownClass {
        name: class.to_string(),
    };

    let model = if collection {
        None
    } else {
        registries.model(class)
    };

    if let Some(model) = model {
        let mut attributes = Map::new();
        if let Some(id) = id {
            attributes.insert("id".to_string(), attribute_value(id));
        }
        if let Some(parent) = parent {
            attributes.insert("parent".to_string(), attribute_value(parent));
        }
        println!("{}", model.create(attributes).url());
        return Ok(());
    }

    let class = registries.collection(class).ok_or_else(unknown)?;
    let mut instance = class.create();
    if let Some(parent) = parent {
        instance.set_parent(attribute_value(parent));
    }
    println!("{}", instance.url());
    Ok(())
}

async fn run<S: SchemaSource>(
    settings: ApiSettings,
    source: S,
    command: Commands,
) -> Result<(), CliError> {
    let orchestrator = Orchestrator::new(settings, source);
    let registries = orchestrator.try_init().await?;

    match command {
        Commands::Discover { json } => {
            let report = Report::new(orchestrator.settings().prefix(), &registries);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.to_text());
            }
        }
        Commands::Url {
            class,
            id,
            parent,
            collection,
        } => print_url(
            &registries,
            &class,
            id.as_deref(),
            parent.as_deref(),
            collection,
        )?,
    }

    Ok(())
}

async fn try_main(cli: Cli) -> Result<(), CliError> {
    let settings = cli.api.settings()?;
    tracing::debug!(prefix = %settings.prefix(), "resolved API settings");

    match &cli.api.schema_file {
        Some(path) => {
            let source = StaticSchemaSource::from_file(path)?;
            run(settings, source, cli.command).await
        }
        None => {
            let source = HttpSchemaSource::new(&settings)?;
            run(settings, source, cli.command).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.log_json);

    match try_main(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
