use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use itertools::Itertools;

use prim_mst_visualizer::graph::algorithms;
use prim_mst_visualizer::mst;
use prim_mst_visualizer::storage;
use prim_mst_visualizer::viz::{DisplayMode, ThemeName};
use prim_mst_visualizer::{AnimationStatus, Config, Session};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Theme {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    #[value(name = "2d")]
    TwoD,
    #[value(name = "3d")]
    ThreeD,
}

#[derive(Parser, Debug)]
#[clap(
    name = "prim-mst-visualizer",
    about = "Generate or load a graph and compute its minimum spanning tree with Prim's algorithm"
)]
struct Cli {
    /// Adjacency matrix file (comma- or whitespace-separated rows); GV is used when absent
    #[clap(long)]
    adjacency: Option<PathBuf>,

    /// Weight matrix file matching the adjacency matrix
    #[clap(long)]
    weights: Option<PathBuf>,

    /// GV name
    #[clap(long, default_value = "Zaitsev Evgeny Alexandrovich")]
    name: String,

    /// GV vertex count
    #[clap(long, default_value = "7")]
    size: String,

    /// GV dividers, space separated
    #[clap(long, default_value = "2 3")]
    dividers: String,

    /// Fall back to defaults for unparsable GV fields
    #[clap(long)]
    lenient: bool,

    /// Keep the raw GV rule output even if it is disconnected
    #[clap(long)]
    no_connect: bool,

    /// Play the MST step by step
    #[clap(long)]
    animate: bool,

    /// Pause between animation steps in milliseconds
    #[clap(long, default_value = "500")]
    interval_ms: u64,

    /// Color theme
    #[clap(long, value_enum, default_value = "dark")]
    theme: Theme,

    /// Display mode passed to the renderer
    #[clap(long, value_enum, default_value = "3d")]
    mode: Mode,

    /// Output directory for results
    #[clap(long, default_value = "mst_results")]
    output_dir: PathBuf,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let mut config = Config::new(
        args.name.clone(),
        args.size.clone(),
        args.dividers.clone(),
        Duration::from_millis(args.interval_ms),
    );
    config.lenient_gv_input = args.lenient;
    config.generator.connect_components = !args.no_connect;
    config.theme = match args.theme {
        Theme::Dark => ThemeName::Dark,
        Theme::Light => ThemeName::Light,
    };
    config.mode = match args.mode {
        Mode::TwoD => DisplayMode::TwoD,
        Mode::ThreeD => DisplayMode::ThreeD,
    };

    let mut session = Session::new(config);

    // 1. Load the graph
    match &args.adjacency {
        Some(path) => {
            log::info!("Reading adjacency matrix from {}", path.display());
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            session.load_adjacency_from_text(&text)?;
        }
        None => session.load_graph_from_gv()?,
    }

    if let Some(path) = &args.weights {
        log::info!("Reading weight matrix from {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        session.load_weights_from_text(&text)?;
    }

    if !algorithms::is_connected(session.adjacency()) {
        log::warn!("Graph is disconnected; the tree will only span the component of vertex 1");
    }

    // 2. Compute the tree
    let tree = if args.animate {
        run_animation(&mut session, &args.output_dir)?
    } else {
        session.calculate_mst()?
    };

    let summary = mst::summarize(&tree, session.adjacency(), session.weights())?;
    log::info!(
        "MST: {} edges, total weight {}, spanning: {}",
        summary.edge_count,
        summary.total_weight,
        summary.spanning
    );
    log::info!(
        "Tree edges: {}",
        tree.iter().map(|(a, b)| format!("{}-{}", a + 1, b + 1)).join(" ")
    );

    // 3. Save results
    storage::save_results(&session, &tree, &args.output_dir)?;

    log::info!("Done. Results saved to {}", args.output_dir.display());
    Ok(())
}

/// Drive the step iterator, pausing between steps and saving each frame
fn run_animation(session: &mut Session, output_dir: &std::path::Path) -> Result<mst::MstEdgeList> {
    let interval = session.config().animation_interval;
    let mut animation = session.start_animation()?;
    let mut tree = mst::MstEdgeList::new();

    while let AnimationStatus::Applied(step) = session.advance_animation(&mut animation) {
        let scene = session.scene();
        log::info!("Step {}: {}", animation.applied(), scene.describe_highlight());
        storage::save_frame(&scene, output_dir, animation.applied())?;
        tree = step;
        std::thread::sleep(interval);
    }

    Ok(tree)
}
