//! Shape loaders: JSON (`{"shapes": [{"id", "points"}]}`) and CSV (`id,x,y` rows).

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use polyrel::geom2::Polygon;
use polyrel::pairwise::Shape;
use polyrel::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Opaque shape id, kept verbatim from the input (JSON number or string).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapeId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ShapesFile {
    shapes: Vec<ShapeDef>,
}

#[derive(Debug, Deserialize)]
struct ShapeDef {
    id: ShapeId,
    points: Vec<[f64; 2]>,
}

/// Load shapes from `path`; `.csv` goes through polars, anything else is JSON.
pub fn load_shapes(path: &Path) -> Result<Vec<Shape<ShapeId>>> {
    let is_csv = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    let shapes = if is_csv {
        load_csv(path)
    } else {
        load_json(path)
    }
    .with_context(|| format!("loading shapes from {}", path.display()))?;
    tracing::info!(path = %path.display(), shapes = shapes.len(), "loaded");
    Ok(shapes)
}

fn load_json(path: &Path) -> Result<Vec<Shape<ShapeId>>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    parse_json(&bytes)
}

/// Parse the JSON shapes document.
pub fn parse_json(bytes: &[u8]) -> Result<Vec<Shape<ShapeId>>> {
    let doc: ShapesFile = serde_json::from_slice(bytes).context("parsing shapes JSON")?;
    doc.shapes
        .into_iter()
        .map(|def| {
            let verts = def.points.iter().map(|&[x, y]| Vec2::new(x, y)).collect();
            to_shape(def.id, verts)
        })
        .collect()
}

fn to_shape(id: ShapeId, verts: Vec<Vec2<f64>>) -> Result<Shape<ShapeId>> {
    let polygon = Polygon::new(verts).with_context(|| format!("shape {id}"))?;
    Ok(Shape::new(id, polygon))
}

fn load_csv(path: &Path) -> Result<Vec<Shape<ShapeId>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");
    shapes_from_frame(&df)
}

/// Group `id,x,y` rows into shapes; rows of one shape must be contiguous.
pub fn shapes_from_frame(df: &DataFrame) -> Result<Vec<Shape<ShapeId>>> {
    let ids = df.column("id")?.cast(&DataType::String)?;
    let xs = df.column("x")?.cast(&DataType::Float64)?;
    let ys = df.column("y")?.cast(&DataType::Float64)?;

    let mut groups: Vec<(String, Vec<Vec2<f64>>)> = Vec::new();
    for (row, ((id, x), y)) in ids
        .str()?
        .into_iter()
        .zip(xs.f64()?.into_iter())
        .zip(ys.f64()?.into_iter())
        .enumerate()
    {
        let (Some(id), Some(x), Some(y)) = (id, x, y) else {
            bail!("row {row}: missing or non-numeric id/x/y");
        };
        match groups.last_mut() {
            Some((last, verts)) if *last == id => verts.push(Vec2::new(x, y)),
            _ => groups.push((id.to_string(), vec![Vec2::new(x, y)])),
        }
    }
    groups
        .into_iter()
        .map(|(id, verts)| to_shape(ShapeId::Text(id), verts))
        .collect()
}
