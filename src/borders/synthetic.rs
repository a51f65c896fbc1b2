//! Synthetic border file generation
//!
//! Writes a plausible boundary box for every catalogued constellation so the
//! pipeline can run, and be tested, without the raw IAU border files on hand.

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::borders::border_file_stems;
use crate::coordinates::format_ra;
use crate::data::PROPERTIES;
use crate::Result;

/// Default RNG seed used by the preparation tool's synthetic mode.
pub const DEFAULT_SEED: u64 = 42;

/// Write one synthetic border file per border stem into `dir`.
///
/// Each file holds a header line and a four-vertex box around the
/// constellation's catalogued center, with side lengths jittered by a seeded
/// RNG so runs are reproducible. Returns the number of files written.
pub fn write_synthetic_borders<P: AsRef<Path>>(dir: P, seed: u64) -> Result<usize> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut written = 0;

    for props in PROPERTIES {
        let id = props.iau_id.to_lowercase();
        let label = props.iau_id.to_uppercase();

        for (region, stem) in border_file_stems(&id).iter().enumerate() {
            let half_ra = rng.gen_range(2.0..6.0);
            let half_dec = rng.gen_range(2.0..6.0);

            // Regions of a split boundary are shifted apart by more than two
            // maximal half widths so their rings stay disjoint; every vertex
            // is kept inside 0..360 and -90..90.
            let shift = region as f64 * 14.0;
            let center_ra =
                (props.center_ra_hours * 15.0 + shift).clamp(half_ra + 1.0, 359.0 - half_ra);
            let center_dec = props.center_dec.clamp(half_dec - 89.0, 89.0 - half_dec);

            let ring = [
                (center_ra - half_ra, center_dec - half_dec),
                (center_ra + half_ra, center_dec - half_dec),
                (center_ra + half_ra, center_dec + half_dec),
                (center_ra - half_ra, center_dec + half_dec),
            ];

            let mut contents = format!("{} boundary (synthetic)\n", props.iau_id);
            for (ra, dec) in ring {
                contents.push_str(&format!("{}|{:.2}|{}\n", format_ra(ra), dec, label));
            }

            fs::write(dir.join(format!("{}.txt", stem)), contents)?;
            written += 1;
        }
    }

    Ok(written)
}
