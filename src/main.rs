use clap::Parser;
use serde::Serialize;
use thiserror::Error;
use tinygraph::{Graph, GraphConfig};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Build a small graph and query shortest paths
#[derive(Parser, Debug)]
#[command(name = "tinygraph")]
#[command(about = "Build a small graph and query shortest paths", long_about = None)]
struct Args {
    /// Graph name, used in DOT output
    #[arg(long, default_value = "graph")]
    name: String,

    /// Create a directed graph instead of an undirected one
    #[arg(long)]
    directed: bool,

    /// Vertex to insert (repeatable)
    #[arg(long = "vertex", value_name = "V")]
    vertices: Vec<String>,

    /// Edge to insert (repeatable); missing endpoints are added first
    #[arg(long = "edge", value_name = "FROM,TO", value_parser = parse_pair)]
    edges: Vec<(String, String)>,

    /// Path query (repeatable); FROM == TO asks for a cycle
    #[arg(long = "path", value_name = "FROM,TO", value_parser = parse_pair)]
    paths: Vec<(String, String)>,

    /// Print the graph in DOT format
    #[arg(long)]
    dot: bool,

    /// Print path answers as JSON lines
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Error, Debug)]
#[error("expected FROM,TO but got {0:?}")]
struct PairParseError(String);

fn parse_pair(raw: &str) -> Result<(String, String), PairParseError> {
    match raw.split_once(',') {
        Some((from, to)) if !from.is_empty() && !to.is_empty() => {
            Ok((from.to_string(), to.to_string()))
        }
        _ => Err(PairParseError(raw.to_string())),
    }
}

#[derive(Serialize)]
struct PathReport<'a> {
    from: &'a str,
    to: &'a str,
    path: Option<Vec<String>>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut graph = Graph::new(GraphConfig {
        name: args.name.clone(),
        directed: args.directed,
    });

    for vertex in &args.vertices {
        graph.add_vertex(vertex.clone())?;
    }

    for (from, to) in &args.edges {
        for endpoint in [from, to] {
            if !graph.contains_vertex(endpoint) {
                graph.add_vertex(endpoint.clone())?;
            }
        }
        graph.add_edge(from, to)?;
    }

    info!(
        "Graph {} ready: {} vertices, {} edges ({})",
        graph.name(),
        graph.vertex_count(),
        graph.edge_count(),
        if graph.is_directed() { "directed" } else { "undirected" }
    );

    if args.dot {
        println!("{}", graph);
    }

    for (from, to) in &args.paths {
        let path = match graph.get_path(from, to) {
            Ok(path) => path,
            Err(e) => {
                warn!("Skipping query {} -> {}: {}", from, to, e);
                continue;
            }
        };

        if args.json {
            let report = PathReport {
                from,
                to,
                path: path.map(|p| p.into_vec()),
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            match path {
                Some(path) => println!("{}", path),
                None => println!("Empty path"),
            }
        }
    }

    let stats = graph.cache_stats();
    info!("Search cache: {} hits, {} misses", stats.hits, stats.misses);

    Ok(())
}
