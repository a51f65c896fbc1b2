//! Constellation records
//!
//! A record joins one constellation's boundary geometry with its bundled
//! properties row and serialized line figure. Records are what the dataset
//! stores and what chart plotting consumes.

use std::path::Path;

use geo::{LineString, MultiPolygon, Polygon};
use log::debug;
use serde::Serialize;

use crate::borders::{border_file_stems, read_border_file};
use crate::data::{line_figure, properties_for, ConstellationProperties, PROPERTIES};
use crate::{Result, SkyatlasError};

/// Boundary geometry for one constellation: a single ring, or one ring per
/// region for the split boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum Boundary {
    Single(Polygon<f64>),
    Split(MultiPolygon<f64>),
}

impl Boundary {
    /// Number of constituent rings.
    pub fn ring_count(&self) -> usize {
        match self {
            Boundary::Single(_) => 1,
            Boundary::Split(multi) => multi.0.len(),
        }
    }

    /// Exterior rings, in file order.
    pub fn rings(&self) -> Vec<&LineString<f64>> {
        match self {
            Boundary::Single(polygon) => vec![polygon.exterior()],
            Boundary::Split(multi) => multi.0.iter().map(|polygon| polygon.exterior()).collect(),
        }
    }
}

/// One row of the output dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstellationRecord {
    /// Lowercase three-letter identifier; the dataset index.
    pub id: String,
    /// Same identifier, kept as an explicit column for consumers.
    pub iau_id: String,
    /// Full constellation name.
    pub name: String,
    /// Center right ascension, in degrees.
    pub center_ra: f64,
    /// Center declination, in degrees.
    pub center_dec: f64,
    /// Line-figure HIP ids: dash-joined within a polyline, comma-joined
    /// between polylines.
    pub lines_hip_ids: String,
    /// Boundary polygon(s); stored as geometry, not as a column.
    #[serde(skip)]
    pub boundary: Boundary,
}

/// Serialize HIP polylines into the dataset's string form.
fn serialize_line_figure(groups: &[&[u32]]) -> String {
    groups
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|hip| hip.to_string())
                .collect::<Vec<_>>()
                .join("-")
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Build one constellation record from its properties row and the border
/// files under `borders_dir`.
pub fn build_record<P: AsRef<Path>>(
    props: &ConstellationProperties,
    borders_dir: P,
) -> Result<ConstellationRecord> {
    let borders_dir = borders_dir.as_ref();
    let id = props.iau_id.to_lowercase();

    let groups =
        line_figure(&id).ok_or_else(|| SkyatlasError::MissingLineFigure(id.clone()))?;

    let stems = border_file_stems(&id);
    let boundary = if let [stem] = stems.as_slice() {
        let coords = read_border_file(borders_dir.join(format!("{}.txt", stem)))?;
        Boundary::Single(Polygon::new(LineString::from(coords), vec![]))
    } else {
        let mut rings = Vec::with_capacity(stems.len());
        for stem in &stems {
            let coords = read_border_file(borders_dir.join(format!("{}.txt", stem)))?;
            rings.push(Polygon::new(LineString::from(coords), vec![]));
        }
        Boundary::Split(MultiPolygon(rings))
    };

    debug!("built {} with {} boundary ring(s)", id, boundary.ring_count());

    Ok(ConstellationRecord {
        id: id.clone(),
        iau_id: id,
        name: props.name.to_string(),
        center_ra: props.center_ra_hours * 15.0,
        center_dec: props.center_dec,
        lines_hip_ids: serialize_line_figure(groups),
        boundary,
    })
}

/// Build records for every constellation in the bundled properties table.
///
/// Any missing border file or malformed vertex aborts the whole build; the
/// output dataset is all-or-nothing.
pub fn build_all<P: AsRef<Path>>(borders_dir: P) -> Result<Vec<ConstellationRecord>> {
    let borders_dir = borders_dir.as_ref();
    PROPERTIES
        .iter()
        .map(|props| build_record(props, borders_dir))
        .collect()
}

/// Build the record for a single IAU id (any case).
pub fn build_one<P: AsRef<Path>>(iau_id: &str, borders_dir: P) -> Result<ConstellationRecord> {
    let props = properties_for(iau_id)
        .ok_or_else(|| SkyatlasError::DataError(format!("unknown constellation {:?}", iau_id)))?;
    build_record(props, borders_dir)
}
