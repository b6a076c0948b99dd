use std::path::Path;

use clap::{Parser, Subcommand};

use adtgate_config::AdtGateConfig;
use adtgate_policy::{ToolGate, catalog, presets};
use adtgate_types::PolicySource;

#[derive(Parser)]
#[command(name = "adtgate", about = "Capability gate for ADT tool servers")]
struct Cli {
    /// Config file path (defaults to ~/.adtgate/config.json5)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the operations the active policy exposes
    Tools {
        /// Restrict the listing to one functional area
        #[arg(short, long)]
        area: Option<String>,

        /// Show every operation, marking disabled ones
        #[arg(long)]
        all: bool,
    },
    /// List the built-in presets
    Presets,
    /// Show the active policy source and its disabled set
    Show,
    /// Check one operation; exits non-zero if it is disabled
    Check {
        /// Operation name, e.g. "deleteObject"
        name: String,
    },
    /// Create a default config file if none exists
    Init,
}

fn load(config_path: Option<&str>) -> anyhow::Result<AdtGateConfig> {
    let config = match config_path {
        Some(path) => adtgate_config::load_config_from(Path::new(path))?,
        None => adtgate_config::load_config()?,
    };
    tracing::debug!(policy = ?config.policy, "Configuration loaded");
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tools { area, all } => {
            let config = load(cli.config.as_deref())?;
            let gate = ToolGate::from_source(&config.policy)?;

            let areas: Vec<(&str, &[catalog::ToolEntry])> = match area.as_deref() {
                Some(name) => {
                    let tools = catalog::area_tools(name)
                        .ok_or_else(|| anyhow::anyhow!("unknown area: {name}"))?;
                    vec![(name, tools)]
                }
                None => catalog::AREAS.to_vec(),
            };

            for (area_name, tools) in areas {
                if all {
                    println!("{area_name}:");
                    for tool in tools {
                        let marker = if gate.is_enabled(tool.name) { ' ' } else { '-' };
                        println!(
                            "  {marker} {:9} {:26} {}",
                            tool.access.tag(),
                            tool.name,
                            tool.summary
                        );
                    }
                } else {
                    let enabled = gate.filter_enabled(tools.to_vec());
                    if enabled.is_empty() {
                        continue;
                    }
                    println!("{area_name}:");
                    for tool in enabled {
                        println!("  {:9} {:26} {}", tool.access.tag(), tool.name, tool.summary);
                    }
                }
            }
        }
        Commands::Presets => {
            for name in presets::preset_names() {
                let bundle = presets::preset(name)?;
                println!("{name}: {} operations disabled", bundle.len());
            }
        }
        Commands::Show => {
            let config = load(cli.config.as_deref())?;
            let gate = ToolGate::from_source(&config.policy)?;

            match &config.policy {
                PolicySource::Default => println!("policy source: default"),
                PolicySource::Preset { name } => println!("policy source: preset \"{name}\""),
                PolicySource::Explicit { .. } => println!("policy source: explicit list"),
            }
            let disabled = gate.disabled();
            println!("disabled operations: {}", disabled.len());
            for name in disabled {
                println!("  {name}");
            }
        }
        Commands::Check { name } => {
            let config = load(cli.config.as_deref())?;
            let gate = ToolGate::from_source(&config.policy)?;

            if gate.is_enabled(&name) {
                println!("{name} is enabled");
            } else {
                println!("{name} is disabled");
                std::process::exit(1);
            }
        }
        Commands::Init => {
            let path = adtgate_config::config_file_path()?;
            if path.exists() {
                println!("config already exists at {}", path.display());
            } else {
                adtgate_config::save_config(&AdtGateConfig::default())?;
                println!("wrote default config to {}", path.display());
            }
        }
    }

    Ok(())
}
