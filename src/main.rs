use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use colourlovers_rs::colourlovers::create_tools;
use colourlovers_rs::config::Config;
use colourlovers_rs::server;
use colourlovers_rs::ToolRegistry;
use dotenv::dotenv;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every tool definition as JSON
    List,
    /// Call a single tool and print the result
    Call {
        /// Tool name, e.g. get_color_info
        tool: String,

        /// Arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },
    /// Serve the tools over HTTP
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).context("failed to load configuration")?;

    let registry = ToolRegistry::new();
    for tool in create_tools(&config).context("failed to create tools")? {
        log::info!("Registered tool: {}", tool.name());
        registry.register(tool).await;
    }

    match args.command {
        Commands::List => {
            let defs = Value::Array(registry.definitions().await);
            println!("{}", serde_json::to_string_pretty(&defs)?);
        }
        Commands::Call { tool, args } => {
            let input: Value =
                serde_json::from_str(&args).context("--args must be a JSON object")?;
            if registry.get(&tool).await.is_none() {
                bail!(
                    "unknown tool '{}', available: {}",
                    tool,
                    registry.names().await.join(", ")
                );
            }
            let result = registry.call(&tool, input).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Serve { port } => {
            server::serve(registry, port.unwrap_or(config.port)).await?;
        }
    }

    Ok(())
}
