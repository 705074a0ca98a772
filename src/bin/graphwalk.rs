//! Graphwalk CLI — animate graph traversals on the console.
//!
//! Usage:
//!   graphwalk run <bfs|dfs|dijkstra> [--start N] [--delay-ms MS] [--config path]
//!   graphwalk order <bfs|dfs|dijkstra>
//!   graphwalk distances
//!   graphwalk graph

use clap::{Parser, Subcommand};
use graphwalk::{Algorithm, AnimationConfig, ConsoleSurface, Graph, NodeId, Visualizer};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "graphwalk",
    version,
    about = "Graph traversal visualizer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// YAML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Start node (overrides the settings file)
    #[arg(long, global = true)]
    start: Option<NodeId>,
    /// Milliseconds between highlights (overrides the settings file)
    #[arg(long, global = true)]
    delay_ms: Option<u64>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate an algorithm's visitation order on the console
    Run {
        #[arg(value_enum)]
        algorithm: Algorithm,
        /// Reset every node to the default colour once the animation ends
        #[arg(long)]
        reset_after: bool,
    },
    /// Print an algorithm's visitation order as JSON
    Order {
        #[arg(value_enum)]
        algorithm: Algorithm,
    },
    /// Print shortest hop counts from the start node as JSON
    Distances,
    /// Print the graph's nodes and edges as JSON
    Graph,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<AnimationConfig, String> {
    let mut config = match &cli.config {
        Some(path) => AnimationConfig::load(path)
            .map_err(|e| format!("Failed to load '{}': {}", path.display(), e))?,
        None => AnimationConfig::default(),
    };
    if let Some(start) = cli.start {
        config.start = start;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.step_delay_ms = delay_ms;
    }
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

#[derive(Serialize)]
struct GraphView {
    nodes: Vec<NodeId>,
    edges: Vec<graphwalk::Edge>,
}

async fn cmd_run(
    viz: &Visualizer<ConsoleSurface>,
    algorithm: Algorithm,
    reset_after: bool,
) -> i32 {
    // Initial draw: every node starts in the default colour.
    viz.reset();
    let animation = match viz.run(algorithm) {
        Ok(animation) => animation,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    println!("{} from node {}: {} steps", algorithm, viz.start(), animation.len());
    animation.finished().await;
    if reset_after {
        viz.reset();
    }
    0
}

fn cmd_order(viz: &Visualizer<ConsoleSurface>, algorithm: Algorithm) -> i32 {
    match viz.order(algorithm) {
        Ok(order) => print_json(&order),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_distances(viz: &Visualizer<ConsoleSurface>) -> i32 {
    match viz.distances() {
        Ok(table) => print_json(&table),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_graph(graph: &Graph) -> i32 {
    let view = GraphView {
        nodes: graph.node_ids().collect(),
        edges: graph.edges().collect(),
    };
    print_json(&view)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let graph = match Graph::sample() {
        Ok(graph) => Arc::new(graph),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let viz = Visualizer::new(Arc::clone(&graph), Arc::new(ConsoleSurface::new()), &config);
    if let Err(e) = viz.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let code = match cli.command {
        Commands::Run {
            algorithm,
            reset_after,
        } => cmd_run(&viz, algorithm, reset_after).await,
        Commands::Order { algorithm } => cmd_order(&viz, algorithm),
        Commands::Distances => cmd_distances(&viz),
        Commands::Graph => cmd_graph(&graph),
    };
    std::process::exit(code);
}
