//! Graph loading for the CLI: JSON descriptions and tabular edge lists.
//!
//! - `.json`: `{"nodes": ["a", ...], "edges": [["a", "b"], ...]}`; `nodes` is
//!   optional and only needed for isolated nodes.
//! - `.csv` / `.parquet`: one arc per row in columns `source` and `target`;
//!   numeric ids are cast to strings.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use planarity::api::Graph;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GraphFile {
    #[serde(default)]
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
}

impl GraphFile {
    pub fn into_graph(self) -> planarity::Result<Graph> {
        let mut g = Graph::new();
        for name in &self.nodes {
            g.ensure_node(name);
        }
        for (s, d) in &self.edges {
            let s = g.ensure_node(s);
            let d = g.ensure_node(d);
            g.add_edge(s, d)?;
        }
        Ok(g)
    }
}

pub fn load_graph(path: &Path) -> Result<Graph> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let file = match ext.as_str() {
        "json" => read_json(path)?,
        "csv" => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("opening {}", path.display()))?;
            read_edge_table(lf).with_context(|| format!("reading {}", path.display()))?
        }
        "parquet" => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("opening {}", path.display()))?;
            read_edge_table(lf).with_context(|| format!("reading {}", path.display()))?
        }
        other => bail!(
            "unsupported input format `{other}` for {} (expected json, csv or parquet)",
            path.display()
        ),
    };
    tracing::debug!(
        nodes = file.nodes.len(),
        edges = file.edges.len(),
        "input parsed"
    );
    file.into_graph()
        .with_context(|| format!("building graph from {}", path.display()))
}

fn read_json(path: &Path) -> Result<GraphFile> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

fn read_edge_table(lf: LazyFrame) -> Result<GraphFile> {
    let df = lf
        .select([
            col("source").cast(DataType::String),
            col("target").cast(DataType::String),
        ])
        .collect()?;
    let sources = df.column("source")?.str()?;
    let targets = df.column("target")?.str()?;
    let mut edges = Vec::with_capacity(df.height());
    for (row, (s, d)) in sources.into_iter().zip(targets.into_iter()).enumerate() {
        match (s, d) {
            (Some(s), Some(d)) => edges.push((s.to_string(), d.to_string())),
            _ => bail!("row {row}: missing source or target"),
        }
    }
    Ok(GraphFile {
        nodes: Vec::new(),
        edges,
    })
}
