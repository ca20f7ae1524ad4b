use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use planarity::api::{analyze, circular_dependencies_with, create_embedding, CycleCfg, GraphError};

mod input;
mod output;
mod provenance;

use output::{CheckOut, EmbeddingOut};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Planarity testing and planar embedding runner")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Test every connected component for planarity; prints a JSON report
    Check {
        #[arg(long)]
        input: PathBuf,
    },
    /// Embed a connected graph and write rotations and faces as JSON
    Embed {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// List simple directed cycles through one node
    Cycles {
        #[arg(long)]
        input: PathBuf,
        /// Name of the start node
        #[arg(long)]
        start: String,
        #[arg(long, default_value_t = 10_000)]
        max_cycles: usize,
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Check { input } => check(&input, cmd.tag),
        Action::Embed { input, out } => embed(&input, &out, cmd.tag),
        Action::Cycles {
            input,
            start,
            max_cycles,
            max_depth,
        } => cycles(&input, &start, max_cycles, max_depth, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn check(input: &Path, tag: Option<String>) -> Result<()> {
    let g = input::load_graph(input)?;
    let report = analyze(&g)?;
    tracing::info!(
        input = %input.display(),
        tag = ?tag,
        nodes = g.node_count(),
        edges = g.edge_count(),
        components = report.components.len(),
        planar = report.planar,
        "check"
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&CheckOut::new(&g, &report))?
    );
    Ok(())
}

fn embed(input: &Path, out: &Path, tag: Option<String>) -> Result<()> {
    let g = input::load_graph(input)?;
    let emb = match create_embedding(&g) {
        Ok(emb) => emb,
        Err(GraphError::Disconnected { components }) => anyhow::bail!(
            "{} has {components} connected components; embed them one at a time",
            input.display()
        ),
        Err(e) => return Err(e.into()),
    };
    let doc = match &emb {
        Some(emb) => EmbeddingOut::new(emb),
        None => EmbeddingOut::non_planar(),
    };
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        tag = ?tag,
        planar = doc.planar,
        faces = emb.as_ref().map_or(0, |e| e.faces().len()),
        "embed"
    );

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(
        "embed",
        json!({
            "input": input.display().to_string(),
            "nodes": g.node_count(),
            "edges": g.edge_count(),
        }),
        tag,
    );
    let sidecar = provenance::write_sidecar(out, &payload)?;
    tracing::debug!(sidecar = %sidecar.display(), "provenance written");
    Ok(())
}

fn cycles(
    input: &Path,
    start: &str,
    max_cycles: usize,
    max_depth: Option<usize>,
    tag: Option<String>,
) -> Result<()> {
    let g = input::load_graph(input)?;
    let v = g
        .node_id(start)
        .with_context(|| format!("no node named `{start}` in {}", input.display()))?;
    let cfg = CycleCfg {
        max_cycles,
        max_depth: max_depth.unwrap_or(usize::MAX),
    };
    let found = circular_dependencies_with(&g, v, cfg)?;
    tracing::info!(start, tag = ?tag, cycles = found.len(), "cycles");
    println!(
        "{}",
        serde_json::to_string_pretty(&output::cycle_names(&g, &found))?
    );
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let block = provenance::block(&Payload::new("report", json!({}), tag));
    println!("{}", serde_json::to_string_pretty(&block)?);
    Ok(())
}
