//! Constellation properties table
//!
//! One row per modern constellation: the IAU designation, the full name,
//! and the catalogued center position (right ascension in hours,
//! declination in degrees).

/// Catalogued properties for one constellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstellationProperties {
    /// Three-letter IAU designation, mixed case (e.g. `"UMa"`).
    pub iau_id: &'static str,
    /// Full constellation name.
    pub name: &'static str,
    /// Center right ascension, in hours.
    pub center_ra_hours: f64,
    /// Center declination, in degrees.
    pub center_dec: f64,
}

const fn row(
    iau_id: &'static str,
    name: &'static str,
    center_ra_hours: f64,
    center_dec: f64,
) -> ConstellationProperties {
    ConstellationProperties {
        iau_id,
        name,
        center_ra_hours,
        center_dec,
    }
}

/// The 88 modern constellations.
pub const PROPERTIES: &[ConstellationProperties] = &[
    row("And", "Andromeda", 0.81, 37.43),
    row("Ant", "Antlia", 10.27, -32.48),
    row("Aps", "Apus", 16.14, -75.30),
    row("Aqr", "Aquarius", 22.29, -10.79),
    row("Aql", "Aquila", 19.67, 3.41),
    row("Ara", "Ara", 17.37, -56.59),
    row("Ari", "Aries", 2.64, 20.79),
    row("Aur", "Auriga", 6.07, 42.03),
    row("Boo", "Boötes", 14.71, 31.20),
    row("Cae", "Caelum", 4.70, -37.88),
    row("Cam", "Camelopardalis", 8.86, 69.38),
    row("Cnc", "Cancer", 8.65, 19.81),
    row("CVn", "Canes Venatici", 13.12, 40.10),
    row("CMa", "Canis Major", 6.83, -22.14),
    row("CMi", "Canis Minor", 7.65, 6.43),
    row("Cap", "Capricornus", 21.05, -18.02),
    row("Car", "Carina", 8.70, -63.22),
    row("Cas", "Cassiopeia", 1.32, 62.18),
    row("Cen", "Centaurus", 13.07, -47.35),
    row("Cep", "Cepheus", 22.00, 71.01),
    row("Cet", "Cetus", 1.67, -7.18),
    row("Cha", "Chamaeleon", 10.70, -79.20),
    row("Cir", "Circinus", 14.58, -63.03),
    row("Col", "Columba", 5.86, -35.09),
    row("Com", "Coma Berenices", 12.79, 23.31),
    row("CrA", "Corona Australis", 18.65, -41.15),
    row("CrB", "Corona Borealis", 15.84, 32.62),
    row("Crv", "Corvus", 12.44, -18.44),
    row("Crt", "Crater", 11.40, -15.93),
    row("Cru", "Crux", 12.45, -60.19),
    row("Cyg", "Cygnus", 20.59, 44.55),
    row("Del", "Delphinus", 20.69, 11.67),
    row("Dor", "Dorado", 5.24, -59.39),
    row("Dra", "Draco", 15.14, 67.01),
    row("Equ", "Equuleus", 21.19, 7.76),
    row("Eri", "Eridanus", 3.30, -28.76),
    row("For", "Fornax", 2.80, -31.63),
    row("Gem", "Gemini", 7.07, 22.60),
    row("Gru", "Grus", 22.46, -46.35),
    row("Her", "Hercules", 17.39, 27.50),
    row("Hor", "Horologium", 3.28, -53.34),
    row("Hya", "Hydra", 11.61, -14.53),
    row("Hyi", "Hydrus", 2.34, -69.96),
    row("Ind", "Indus", 21.97, -59.71),
    row("Lac", "Lacerta", 22.46, 46.04),
    row("Leo", "Leo", 10.67, 13.14),
    row("LMi", "Leo Minor", 10.25, 32.13),
    row("Lep", "Lepus", 5.57, -19.05),
    row("Lib", "Libra", 15.20, -15.23),
    row("Lup", "Lupus", 15.22, -42.71),
    row("Lyn", "Lynx", 7.99, 47.47),
    row("Lyr", "Lyra", 18.85, 36.69),
    row("Men", "Mensa", 5.42, -77.50),
    row("Mic", "Microscopium", 20.96, -36.27),
    row("Mon", "Monoceros", 7.06, 0.28),
    row("Mus", "Musca", 12.59, -70.16),
    row("Nor", "Norma", 15.90, -51.35),
    row("Oct", "Octans", 23.00, -82.15),
    row("Oph", "Ophiuchus", 17.39, -7.91),
    row("Ori", "Orion", 5.57, 5.95),
    row("Pav", "Pavo", 19.61, -65.78),
    row("Peg", "Pegasus", 22.70, 19.47),
    row("Per", "Perseus", 3.18, 45.01),
    row("Phe", "Phoenix", 0.93, -48.58),
    row("Pic", "Pictor", 5.71, -53.47),
    row("Psc", "Pisces", 0.48, 13.68),
    row("PsA", "Piscis Austrinus", 22.28, -30.64),
    row("Pup", "Puppis", 7.26, -31.18),
    row("Pyx", "Pyxis", 8.95, -27.35),
    row("Ret", "Reticulum", 3.92, -60.00),
    row("Sge", "Sagitta", 19.65, 18.86),
    row("Sgr", "Sagittarius", 19.10, -28.48),
    row("Sco", "Scorpius", 16.89, -27.03),
    row("Scl", "Sculptor", 0.44, -32.09),
    row("Sct", "Scutum", 18.67, -9.89),
    row("Ser", "Serpens", 16.95, 6.12),
    row("Sex", "Sextans", 10.27, -2.61),
    row("Tau", "Taurus", 4.70, 14.88),
    row("Tel", "Telescopium", 19.32, -51.04),
    row("TrA", "Triangulum Australe", 16.08, -65.39),
    row("Tri", "Triangulum", 2.18, 31.48),
    row("Tuc", "Tucana", 23.78, -65.83),
    row("UMa", "Ursa Major", 11.31, 50.72),
    row("UMi", "Ursa Minor", 15.00, 77.70),
    row("Vel", "Vela", 9.58, -47.17),
    row("Vir", "Virgo", 13.40, -4.16),
    row("Vol", "Volans", 7.80, -69.80),
    row("Vul", "Vulpecula", 20.23, 24.44),
];

/// Look up a properties row by IAU id, case-insensitively.
pub fn properties_for(iau_id: &str) -> Option<&'static ConstellationProperties> {
    PROPERTIES
        .iter()
        .find(|props| props.iau_id.eq_ignore_ascii_case(iau_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_all_88_constellations() {
        assert_eq!(PROPERTIES.len(), 88);
    }

    #[test]
    fn ids_are_three_letters_and_unique() {
        let mut seen: Vec<String> = Vec::new();
        for props in PROPERTIES {
            assert_eq!(props.iau_id.len(), 3, "bad id {:?}", props.iau_id);
            let lower = props.iau_id.to_lowercase();
            assert!(!seen.contains(&lower), "duplicate id {:?}", props.iau_id);
            seen.push(lower);
        }
    }

    #[test]
    fn centers_are_in_catalog_range() {
        for props in PROPERTIES {
            assert!(
                (0.0..24.0).contains(&props.center_ra_hours),
                "{} ra {}",
                props.iau_id,
                props.center_ra_hours
            );
            assert!(
                (-90.0..90.0).contains(&props.center_dec),
                "{} dec {}",
                props.iau_id,
                props.center_dec
            );
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(properties_for("UMa").map(|p| p.name), Some("Ursa Major"));
        assert_eq!(properties_for("uma").map(|p| p.name), Some("Ursa Major"));
        assert_eq!(properties_for("SER").map(|p| p.name), Some("Serpens"));
        assert!(properties_for("xyz").is_none());
    }
}
