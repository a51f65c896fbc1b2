//! IAU border file reading
//!
//! Each constellation boundary is distributed as a text file of
//! `RA|Dec|label` lines, one vertex per line, in ring order. Lines without
//! the separator are headers and are skipped. Serpens is the one boundary
//! split across two files, one per disjoint region.

use std::fs;
use std::path::Path;

use log::debug;

use crate::coordinates::{parse_dec, parse_ra};
use crate::{Result, SkyatlasError};

pub mod synthetic;

/// Field separator in border files; lines without it carry no vertex.
const FIELD_SEPARATOR: char = '|';

/// Border file stems for constellations whose boundary spans several
/// disjoint regions. Everything else maps to its own id.
const SPLIT_BOUNDARIES: &[(&str, &[&str])] = &[("ser", &["ser1", "ser2"])];

/// Border file stems (without extension) for a lowercase constellation id.
///
/// Most constellations read a single `<id>.txt`; split boundaries read one
/// file per region.
pub fn border_file_stems(id: &str) -> Vec<String> {
    SPLIT_BOUNDARIES
        .iter()
        .find(|(split_id, _)| *split_id == id)
        .map(|(_, stems)| stems.iter().map(|stem| stem.to_string()).collect())
        .unwrap_or_else(|| vec![id.to_string()])
}

/// Parse border-file lines into an ordered list of `(ra, dec)` degree pairs.
///
/// Every separator-carrying line must hold exactly three fields; the third
/// (a source label) is ignored. Vertex order and any duplicate vertices are
/// preserved exactly as read.
pub fn parse_borders<I, S>(lines: I) -> Result<Vec<(f64, f64)>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut coords = Vec::new();
    for line in lines {
        let line = line.as_ref();
        if !line.contains(FIELD_SEPARATOR) {
            continue;
        }

        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() != 3 {
            return Err(SkyatlasError::CoordinateError(format!(
                "expected `RA|Dec|label` border line, got {:?}",
                line
            )));
        }

        let ra = parse_ra(fields[0])?;
        let dec = parse_dec(fields[1])?;
        coords.push((ra, dec));
    }
    Ok(coords)
}

/// Read one border file into its ordered vertex list.
pub fn read_border_file<P: AsRef<Path>>(path: P) -> Result<Vec<(f64, f64)>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| SkyatlasError::BorderFileError {
        path: path.to_path_buf(),
        source,
    })?;

    let coords = parse_borders(contents.lines())?;
    debug!("read {} border vertices from {}", coords.len(), path.display());
    Ok(coords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_vertex_lines_in_order() {
        let lines = ["00 00 00.0|0.00|x", "01 00 00.0|10.00|y", "00 30 00.0|5.00|z"];
        let coords = parse_borders(lines).unwrap();
        assert_eq!(coords, vec![(0.0, 0.0), (15.0, 10.0), (7.5, 5.0)]);
    }

    #[test]
    fn skips_lines_without_separator() {
        let lines = [
            "Ursa Major boundary",
            "",
            "11 00 00.0|28.00|UMA",
            "revised 1987",
            "12 00 00.0|28.00|UMA",
        ];
        let coords = parse_borders(lines).unwrap();
        assert_eq!(coords.len(), 2);
        assert_relative_eq!(coords[0].0, 165.0);
        assert_relative_eq!(coords[1].0, 180.0);
    }

    #[test]
    fn preserves_duplicate_vertices() {
        let lines = ["06 00 00.0|1.00|A", "06 00 00.0|1.00|A"];
        let coords = parse_borders(lines).unwrap();
        assert_eq!(coords, vec![(90.0, 1.0), (90.0, 1.0)]);
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = parse_borders(["00 00 00.0|0.00"]).unwrap_err();
        assert!(matches!(err, SkyatlasError::CoordinateError(_)));

        let err = parse_borders(["00 00 00.0|0.00|x|extra"]).unwrap_err();
        assert!(matches!(err, SkyatlasError::CoordinateError(_)));
    }

    #[test]
    fn rejects_bad_coordinates_in_vertex_line() {
        let err = parse_borders(["zz zz zz|0.00|x"]).unwrap_err();
        assert!(matches!(err, SkyatlasError::CoordinateError(_)));
    }

    #[test]
    fn reads_border_file_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ori.txt");
        fs::write(&path, "Orion boundary\n05 00 00.0|0.00|ORI\n06 00 00.0|10.00|ORI\n").unwrap();

        let coords = read_border_file(&path).unwrap();
        assert_eq!(coords, vec![(75.0, 0.0), (90.0, 10.0)]);
    }

    #[test]
    fn missing_border_file_reports_its_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        match read_border_file(&path) {
            Err(SkyatlasError::BorderFileError { path: reported, .. }) => {
                assert_eq!(reported, path);
            }
            other => panic!("expected a border file error, got {:?}", other),
        }
    }

    #[test]
    fn split_boundaries_map_to_region_stems() {
        assert_eq!(border_file_stems("ser"), vec!["ser1", "ser2"]);
        assert_eq!(border_file_stems("uma"), vec!["uma"]);
        assert_eq!(border_file_stems("lyr"), vec!["lyr"]);
    }
}
