//! Constellation dataset assembly and GeoJSON encoding
//!
//! The dataset is one GeoJSON FeatureCollection: a feature per
//! constellation, its boundary as the geometry, its scalar columns as
//! properties, and its lowercase id as the feature id. The collection
//! carries the spherical CRS and a generation date as foreign members.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use chrono::Local;
use geo::{LineString, MultiPolygon, Polygon};
use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};
use log::info;
use serde_json::{json, Map};

use crate::constellations::{Boundary, ConstellationRecord};
use crate::{Result, SkyatlasError};

/// Projection string treating right ascension and declination as longitude
/// and latitude on a sphere of Earth equatorial radius, west-positive axis
/// order, no flattening.
pub const SPHERICAL_CRS: &str =
    "+ellps=sphere +f=0 +proj=latlong +axis=wnu +a=6378137 +no_defs";

/// The assembled constellation dataset, indexed by lowercase id.
#[derive(Debug, Clone)]
pub struct ConstellationDataset {
    records: Vec<ConstellationRecord>,
    crs: String,
}

impl ConstellationDataset {
    /// Assemble a dataset from built records under the spherical CRS.
    pub fn from_records(records: Vec<ConstellationRecord>) -> Self {
        Self {
            records,
            crs: SPHERICAL_CRS.to_string(),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The coordinate reference system attached to the geometry.
    pub fn crs(&self) -> &str {
        &self.crs
    }

    /// All records, in table order.
    pub fn records(&self) -> &[ConstellationRecord] {
        &self.records
    }

    /// Look up one record by its lowercase id.
    pub fn get(&self, id: &str) -> Option<&ConstellationRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Record ids, in table order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.id.as_str())
    }

    /// Write the dataset as a GeoJSON FeatureCollection, replacing any
    /// existing file at `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let features = self
            .records
            .iter()
            .map(feature_from_record)
            .collect::<Result<Vec<_>>>()?;

        let mut foreign = Map::new();
        foreign.insert(
            "crs".to_string(),
            json!({
                "type": "name",
                "properties": { "name": self.crs },
            }),
        );
        foreign.insert(
            "generated".to_string(),
            json!(Local::now().format("%Y-%m-%d").to_string()),
        );

        let collection = FeatureCollection {
            bbox: None,
            features,
            foreign_members: Some(foreign),
        };

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &collection)
            .map_err(|e| SkyatlasError::DataError(format!("failed to encode dataset: {}", e)))?;
        writer.flush()?;

        info!("wrote {} constellation features", self.records.len());
        Ok(())
    }

    /// Read a dataset previously written by [`ConstellationDataset::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let geojson = GeoJson::from_reader(BufReader::new(file))
            .map_err(|e| SkyatlasError::DataError(format!("failed to parse dataset: {}", e)))?;

        let collection = match geojson {
            GeoJson::FeatureCollection(collection) => collection,
            _ => {
                return Err(SkyatlasError::DataError(
                    "dataset file is not a FeatureCollection".to_string(),
                ))
            }
        };

        let crs = collection
            .foreign_members
            .as_ref()
            .and_then(|members| members.get("crs"))
            .and_then(|crs| crs.pointer("/properties/name"))
            .and_then(|name| name.as_str())
            .ok_or_else(|| {
                SkyatlasError::DataError("dataset file carries no CRS".to_string())
            })?
            .to_string();

        let mut records = Vec::with_capacity(collection.features.len());
        for feature in collection.features {
            records.push(record_from_feature(feature)?);
        }

        Ok(Self { records, crs })
    }
}

fn feature_from_record(record: &ConstellationRecord) -> Result<Feature> {
    let mut properties = match serde_json::to_value(record) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => {
            return Err(SkyatlasError::DataError(format!(
                "record {} did not serialize to an object",
                record.id
            )))
        }
    };
    // The id is the feature index, not a column.
    properties.remove("id");

    let geometry = match &record.boundary {
        Boundary::Single(polygon) => Geometry::new(Value::from(polygon)),
        Boundary::Split(multi) => Geometry::new(Value::from(multi)),
    };

    Ok(Feature {
        bbox: None,
        geometry: Some(geometry),
        id: Some(Id::String(record.id.clone())),
        properties: Some(properties),
        foreign_members: None,
    })
}

fn record_from_feature(feature: Feature) -> Result<ConstellationRecord> {
    let id = match feature.id {
        Some(Id::String(id)) => id,
        _ => {
            return Err(SkyatlasError::DataError(
                "feature without a string id".to_string(),
            ))
        }
    };

    let properties = feature.properties.ok_or_else(|| {
        SkyatlasError::DataError(format!("feature {} has no properties", id))
    })?;

    let iau_id = string_property(&properties, &id, "iau_id")?;
    let name = string_property(&properties, &id, "name")?;
    let center_ra = float_property(&properties, &id, "center_ra")?;
    let center_dec = float_property(&properties, &id, "center_dec")?;
    let lines_hip_ids = string_property(&properties, &id, "lines_hip_ids")?;

    let geometry = feature
        .geometry
        .ok_or_else(|| SkyatlasError::DataError(format!("feature {} has no geometry", id)))?;
    let boundary = boundary_from_geometry(&id, geometry)?;

    Ok(ConstellationRecord {
        id,
        iau_id,
        name,
        center_ra,
        center_dec,
        lines_hip_ids,
        boundary,
    })
}

fn string_property(
    properties: &Map<String, serde_json::Value>,
    id: &str,
    key: &str,
) -> Result<String> {
    properties
        .get(key)
        .and_then(|value| value.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            SkyatlasError::DataError(format!("feature {} is missing {:?}", id, key))
        })
}

fn float_property(
    properties: &Map<String, serde_json::Value>,
    id: &str,
    key: &str,
) -> Result<f64> {
    properties
        .get(key)
        .and_then(|value| value.as_f64())
        .ok_or_else(|| {
            SkyatlasError::DataError(format!("feature {} is missing {:?}", id, key))
        })
}

fn boundary_from_geometry(id: &str, geometry: Geometry) -> Result<Boundary> {
    match geometry.value {
        Value::Polygon(rings) => Ok(Boundary::Single(polygon_from_rings(id, rings)?)),
        Value::MultiPolygon(polygons) => {
            let rings = polygons
                .into_iter()
                .map(|rings| polygon_from_rings(id, rings))
                .collect::<Result<Vec<_>>>()?;
            Ok(Boundary::Split(MultiPolygon(rings)))
        }
        _ => Err(SkyatlasError::DataError(format!(
            "feature {} does not carry polygon geometry",
            id
        ))),
    }
}

fn polygon_from_rings(id: &str, rings: Vec<Vec<Vec<f64>>>) -> Result<Polygon<f64>> {
    let mut rings = rings.into_iter();
    let exterior = match rings.next() {
        Some(ring) => ring_to_line_string(id, ring)?,
        None => {
            return Err(SkyatlasError::DataError(format!(
                "feature {} has an empty polygon",
                id
            )))
        }
    };
    let interiors = rings
        .map(|ring| ring_to_line_string(id, ring))
        .collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

fn ring_to_line_string(id: &str, ring: Vec<Vec<f64>>) -> Result<LineString<f64>> {
    let mut coords = Vec::with_capacity(ring.len());
    for position in ring {
        match position.as_slice() {
            [x, y, ..] => coords.push((*x, *y)),
            _ => {
                return Err(SkyatlasError::DataError(format!(
                    "feature {} has a malformed coordinate position",
                    id
                )))
            }
        }
    }
    Ok(LineString::from(coords))
}
