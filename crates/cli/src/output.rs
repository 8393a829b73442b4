//! Result rendering: text lines, JSON, and CSV/Parquet tables via polars.

use anyhow::{Context, Result};
use clap::ValueEnum;
use polars::prelude::*;
use polyrel::pairwise::{PairRelation, Shape};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::input::ShapeId;

/// Stdout format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `shape <A> <relation> shape <B>` lines
    Text,
    /// JSON array of `{a, relation, b}` records
    Json,
}

#[derive(Serialize)]
struct PairRecord<'a> {
    a: &'a ShapeId,
    relation: &'static str,
    b: &'a ShapeId,
}

fn records<'a>(pairs: &'a [PairRelation<'a, ShapeId>]) -> Vec<PairRecord<'a>> {
    pairs
        .iter()
        .map(|p| PairRecord {
            a: p.a,
            relation: p.relation.as_str(),
            b: p.b,
        })
        .collect()
}

/// One result line: `shape <idA> <relation-phrase> shape <idB>`.
pub fn line(p: &PairRelation<'_, ShapeId>) -> String {
    format!("shape {} {} shape {}", p.a, p.relation, p.b)
}

pub fn write_results<W: Write>(
    w: &mut W,
    pairs: &[PairRelation<'_, ShapeId>],
    format: Format,
) -> Result<()> {
    match format {
        Format::Text => {
            for p in pairs {
                writeln!(w, "{}", line(p))?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *w, &records(pairs))?;
            writeln!(w)?;
        }
    }
    Ok(())
}

/// Shape listing used by the `shapes` subcommand.
pub fn write_shapes<W: Write>(w: &mut W, shapes: &[Shape<ShapeId>]) -> Result<()> {
    writeln!(w, "List of shapes and their points:")?;
    for s in shapes {
        let pts: Vec<String> = s
            .polygon
            .vertices()
            .iter()
            .map(|p| format!("({}, {})", p.x, p.y))
            .collect();
        writeln!(w, "{}: [{}]", s.id, pts.join(", "))?;
    }
    Ok(())
}

/// Result table with columns `shape_a, relation, shape_b`.
pub fn results_frame(pairs: &[PairRelation<'_, ShapeId>]) -> PolarsResult<DataFrame> {
    let a: Vec<String> = pairs.iter().map(|p| p.a.to_string()).collect();
    let rel: Vec<&str> = pairs.iter().map(|p| p.relation.as_str()).collect();
    let b: Vec<String> = pairs.iter().map(|p| p.b.to_string()).collect();
    df!(
        "shape_a" => a,
        "relation" => rel,
        "shape_b" => b
    )
}

/// Write results to `path`: `.csv`/`.parquet` as a table, anything else as JSON.
pub fn write_table(path: &Path, pairs: &[PairRelation<'_, ShapeId>]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match ext.as_deref() {
        Some("csv") => {
            let mut df = results_frame(pairs)?;
            CsvWriter::new(&mut file).finish(&mut df)?;
        }
        Some("parquet") => {
            let mut df = results_frame(pairs)?;
            ParquetWriter::new(file).finish(&mut df)?;
        }
        _ => write_results(&mut file, pairs, Format::Json)?,
    }
    tracing::info!(path = %path.display(), rows = pairs.len(), "wrote results");
    Ok(())
}
