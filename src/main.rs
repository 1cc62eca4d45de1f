//! `view-router` command line tool.
//!
//! Checks, lists and resolves route manifests without a browser. Views are
//! bound to placeholder factories, so only component names are reported.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use view_router::config::{load_manifest, LogFormat, ManifestWatcher, RouteManifest};
use view_router::observability::logging::init_logging;
use view_router::routing::{ResolveError, Resolution, RouteTable, RouteTarget};
use view_router::view::{load_view, ViewRegistry};

#[derive(Parser)]
#[command(name = "view-router")]
#[command(about = "Inspect and validate client-side route manifests", long_about = None)]
struct Cli {
    /// Log filter, overriding the manifest's `[logging] level`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a manifest and build its route table
    Check { manifest: PathBuf },
    /// Print the routes in match order
    List { manifest: PathBuf },
    /// Resolve one or more paths against a manifest
    Resolve {
        manifest: PathBuf,
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Re-check a manifest whenever it changes
    Watch { manifest: PathBuf },
}

impl Commands {
    fn manifest(&self) -> &Path {
        match self {
            Commands::Check { manifest }
            | Commands::List { manifest }
            | Commands::Resolve { manifest, .. }
            | Commands::Watch { manifest } => manifest.as_path(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let manifest = match load_manifest(cli.command.manifest()) {
        Ok(manifest) => manifest,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut logging = manifest.logging.clone();
    if let Some(level) = &cli.log_level {
        logging.level = level.clone();
    }
    if cli.json_logs {
        logging.format = LogFormat::Json;
    }
    if let Err(e) = init_logging(&logging) {
        eprintln!("warning: logging not initialized: {}", e);
    }

    match run(cli.command, manifest).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, manifest: RouteManifest) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Check { manifest: path } => {
            let table = build_table(&manifest)?;
            println!("{}: ok ({} routes)", path.display(), table.len());
        }
        Commands::List { .. } => {
            let table = build_table(&manifest)?;
            for (index, record) in table.iter().enumerate() {
                let descriptor = &record.descriptor;
                let target = match &descriptor.target {
                    RouteTarget::View(view) => view.component().to_string(),
                    RouteTarget::Redirect(to) => format!("-> {}", to),
                };
                println!(
                    "{:>3}  {:<20} {:<12} {:<20} title={:?} requiresAuth={}",
                    index,
                    descriptor.path,
                    descriptor.name.as_deref().unwrap_or("-"),
                    target,
                    descriptor.meta.title().unwrap_or(""),
                    descriptor.meta.requires_auth(),
                );
            }
        }
        Commands::Resolve { paths, .. } => {
            let table = build_table(&manifest)?;
            for path in &paths {
                resolve_and_print(&table, path).await;
            }
        }
        Commands::Watch { manifest: path } => {
            let table = build_table(&manifest)?;
            tracing::info!(routes = table.len(), "Initial manifest ok");

            let (watcher, mut updates) = ManifestWatcher::new(&path);
            let _handle = watcher.run()?;

            loop {
                tokio::select! {
                    update = updates.recv() => {
                        let Some(manifest) = update else { break };
                        match build_table(&manifest) {
                            Ok(table) => tracing::info!(routes = table.len(), "Manifest reloaded"),
                            Err(e) => tracing::error!(error = %e, "Reloaded manifest rejected"),
                        }
                    }
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Stopping watcher");
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

fn build_table(manifest: &RouteManifest) -> Result<RouteTable, Box<dyn std::error::Error>> {
    let registry = ViewRegistry::placeholders(manifest.components());
    Ok(RouteTable::from_manifest(manifest, &registry)?)
}

async fn resolve_and_print(table: &RouteTable, path: &str) {
    match table.resolve(path) {
        Ok(Resolution::Matched(route)) => {
            let via = if route.redirected_from.is_empty() {
                String::new()
            } else {
                format!(" (via {})", route.redirected_from.join(" -> "))
            };
            let component = match load_view(&route).await {
                Ok(view) => view.component().to_string(),
                Err(e) => format!("<{}>", e),
            };
            println!(
                "{} => {} [{}]{} title={:?} requiresAuth={}",
                path,
                route.full_path(),
                component,
                via,
                route.title().unwrap_or(""),
                route.requires_auth(),
            );
        }
        Ok(Resolution::NotFound(not_found)) => {
            println!("{} => not found ({})", path, not_found.location.path);
        }
        Err(ResolveError::RedirectLoop { hops, chain, .. }) => {
            println!("{} => redirect loop after {} hops: {}", path, hops, chain.join(" -> "));
        }
    }
}
