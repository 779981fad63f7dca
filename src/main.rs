//! civic-routes
//!
//! Inspect the compiled route table and resolve resources to their paths.
//!
//! # Architecture Overview
//!
//! ```text
//!     Resource (JSON)             ┌────────────────────────────────────────────┐
//!     ────────────────────────────┼─▶ resource ──▶ resolver ──▶ table         │
//!                                 │   (owners)     (chain)      (scope,shape) │
//!                                 │                                  │         │
//!     Path / URL                  │                                  ▼         │
//!     ◀───────────────────────────┼── polymorphic ◀────────────── template     │
//!                                 │                                            │
//!                                 │   config (TOML + built-in table)           │
//!                                 │   observability (tracing)                  │
//!                                 └────────────────────────────────────────────┘
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use civic_routes::config::{load_config, ConfigError, RoutesConfig};
use civic_routes::observability::init_logging;
use civic_routes::{PathOptions, PolymorphicRoutes, Resource, RouteTable, Scope};

#[derive(Parser)]
#[command(name = "civic-routes")]
#[command(about = "Inspect and resolve polymorphic resource routes", long_about = None)]
struct Cli {
    /// Routes configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the compiled route table
    Routes {
        /// Only list routes in this scope
        #[arg(long, value_enum)]
        scope: Option<ScopeArg>,
    },
    /// Validate a routes configuration file
    Check { file: PathBuf },
    /// Resolve a JSON-encoded resource to its path
    Resolve {
        /// Use the admin helpers
        #[arg(long)]
        admin: bool,

        /// Member action (e.g. edit)
        #[arg(long)]
        action: Option<String>,

        /// Format extension (e.g. json)
        #[arg(long)]
        format: Option<String>,

        /// Print an absolute URL instead of a path
        #[arg(long)]
        url: bool,

        /// Resource JSON, or "-" to read it from stdin
        resource: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ScopeArg {
    Public,
    Admin,
}

impl From<ScopeArg> for Scope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Public => Scope::Public,
            ScopeArg::Admin => Scope::Admin,
        }
    }
}

/// Configuration from `path`, or the defaults when none is given.
fn load(path: Option<&Path>) -> Result<RoutesConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(RoutesConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load(cli.config.as_deref())?;
    init_logging(&config.observability)?;
    tracing::info!(
        source = %cli
            .config
            .as_deref()
            .map_or_else(|| "built-in".to_string(), |path| path.display().to_string()),
        routes = config.routes.len(),
        default_routes = config.default_routes,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Routes { scope } => {
            let table = RouteTable::from_config(&config)?;
            let scope = scope.map(Scope::from);
            for route in table.iter().filter(|r| scope.map_or(true, |s| r.scope() == s)) {
                let actions = if route.actions().is_empty() {
                    String::new()
                } else {
                    format!("[{}]", route.actions().join(", "))
                };
                println!(
                    "{:<48} {:<7} {} {}",
                    route.name(),
                    route.scope(),
                    route.template(),
                    actions
                );
            }
        }
        Commands::Check { file } => match load_config(&file) {
            Ok(checked) => {
                let table = RouteTable::from_config(&checked)?;
                println!("{}: OK ({} routes)", file.display(), table.len());
            }
            Err(ConfigError::Validation(errors)) => {
                eprintln!("{}: {} problem(s)", file.display(), errors.len());
                for error in &errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(1);
            }
            Err(e) => return Err(e.into()),
        },
        Commands::Resolve {
            admin,
            action,
            format,
            url,
            resource,
        } => {
            let json = if resource == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                resource
            };
            let resource: Resource = serde_json::from_str(&json)?;

            let routes = PolymorphicRoutes::from_config(&config)?;
            let scope = if admin { Scope::Admin } else { Scope::Public };
            let options = PathOptions {
                action,
                format,
                ..PathOptions::default()
            };

            let resolved = routes.resolve(scope, &resource, options.action.as_deref())?;
            tracing::info!(
                route = %resolved.name(),
                params = ?resolved.params,
                "Resolved"
            );

            if url {
                println!("{}", routes.url_in(scope, &resource, &options)?);
            } else {
                println!("{}", routes.path_in(scope, &resource, &options)?);
            }
        }
    }

    Ok(())
}
