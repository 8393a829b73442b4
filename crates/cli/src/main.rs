use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use polyrel::geom2::GeomCfg;
use polyrel::pairwise::{relate_pairs, PairRelation};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod input;
mod output;

use input::{load_shapes, ShapeId};
use output::Format;

/// Used when no shapes file is given.
const DEFAULT_INPUT: &str = "default.json";

#[derive(Parser)]
#[command(name = "polyrel")]
#[command(about = "Relate every ordered pair of convex polygons (separate, intersects, surrounds, is inside)")]
#[command(args_conflicts_with_subcommands = true)]
struct Cmd {
    #[command(flatten)]
    compare: CompareArgs,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Shapes file (.json, or .csv with id,x,y columns)
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Absolute slack for interval comparisons, in input units (0 = exact)
    #[arg(long, default_value_t = GeomCfg::default().eps)]
    eps: f64,
    /// Stdout format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
    /// Also write the result table (.csv, .parquet, else JSON)
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Action {
    /// Compare all ordered pairs (the default)
    Compare(CompareArgs),
    /// List the loaded shapes and their points
    Shapes {
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        None => compare(cmd.compare),
        Some(Action::Compare(args)) => compare(args),
        Some(Action::Shapes { input }) => shapes(input),
    }
}

fn compare(args: CompareArgs) -> Result<()> {
    tracing::info!(input = %args.input.display(), eps = args.eps, format = ?args.format, "compare");
    let cfg = GeomCfg { eps: args.eps };
    let shapes = load_shapes(&args.input)?;
    let pairs: Vec<PairRelation<'_, ShapeId>> = relate_pairs(&shapes, cfg)
        .inspect(|p| tracing::debug!(a = %p.a, b = %p.b, relation = p.relation.as_str(), "pair"))
        .collect();
    tracing::info!(shapes = shapes.len(), pairs = pairs.len(), "compared");

    let stdout = std::io::stdout();
    let mut w = BufWriter::new(stdout.lock());
    output::write_results(&mut w, &pairs, args.format)?;
    w.flush()?;

    if let Some(out) = &args.out {
        output::write_table(out, &pairs)?;
    }
    Ok(())
}

fn shapes(input: PathBuf) -> Result<()> {
    let shapes = load_shapes(&input)?;
    let stdout = std::io::stdout();
    let mut w = BufWriter::new(stdout.lock());
    output::write_shapes(&mut w, &shapes)?;
    w.flush()?;
    Ok(())
}
