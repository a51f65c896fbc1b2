//! Constellation line figures
//!
//! Connect-the-dots stick figures as Hipparcos catalog numbers. Each inner
//! slice is one polyline; consecutive ids are joined by a segment when the
//! figure is drawn. Keys are lowercase IAU ids; a split boundary still has a
//! single figure.

/// Line-figure polylines per lowercase constellation id.
pub const LINE_FIGURES: &[(&str, &[&[u32]])] = &[
    ("and", &[&[677, 3092, 5447, 9640], &[5447, 4436, 3881]]),
    ("ant", &[&[53502, 51172, 46515]]),
    ("aps", &[&[72370, 81065, 80047]]),
    (
        "aqr",
        &[
            &[102618, 106278, 109074, 110395, 110960, 111497],
            &[109074, 110003, 112961, 113136],
        ],
    ),
    (
        "aql",
        &[&[93747, 95501, 97278, 97649, 98036], &[95501, 93805], &[97649, 99473]],
    ),
    ("ara", &[&[85792, 85258, 85267, 83081]]),
    ("ari", &[&[13209, 9884, 8903, 8832]]),
    ("aur", &[&[24608, 23416, 23015, 25428, 28380, 28360, 24608]]),
    (
        "boo",
        &[&[69673, 72105, 74666, 73555, 71075, 69673], &[69673, 67927]],
    ),
    ("cae", &[&[21770, 21861]]),
    ("cam", &[&[17959, 23522, 24254]]),
    ("cnc", &[&[40526, 42911, 44066], &[42911, 42806, 43103]]),
    ("cvn", &[&[63125, 61317]]),
    ("cma", &[&[30324, 32349, 33579, 34444, 35904]]),
    ("cmi", &[&[37279, 36188]]),
    ("cap", &[&[100064, 100345, 105881, 107556, 106985, 104139, 100064]]),
    ("car", &[&[30438, 41037, 45556, 45238], &[45556, 52419]]),
    ("cas", &[&[746, 3179, 4427, 6686, 8886]]),
    ("cen", &[&[71683, 68702, 66657, 61932, 59196], &[61932, 65109]]),
    ("cep", &[&[105199, 106032, 116727, 112724, 105199]]),
    ("cet", &[&[14135, 12706, 10826, 8645, 8102, 3419], &[3419, 1562]]),
    ("cha", &[&[40702, 51839, 58484]]),
    ("cir", &[&[74824, 71908, 75323]]),
    ("col", &[&[25859, 26634, 27628, 30277]]),
    ("com", &[&[64241, 64394, 60742]]),
    ("cra", &[&[93825, 94114, 94160]]),
    ("crb", &[&[75415, 75695, 76267, 76952, 77512, 78159]]),
    ("crv", &[&[59803, 60965, 61359, 59316, 59803]]),
    ("crt", &[&[53740, 54682, 55282, 55705]]),
    ("cru", &[&[60718, 61084], &[59747, 62434]]),
    ("cyg", &[&[102098, 100453, 95947], &[97165, 100453, 102488]]),
    ("del", &[&[101421, 101769], &[101769, 101958, 102281, 102532, 101769]]),
    ("dor", &[&[19893, 21281, 23693]]),
    (
        "dra",
        &[
            &[85670, 87833, 87585, 85829, 85670],
            &[87585, 83895, 80331, 78527, 75458, 68756, 61281, 56211],
        ],
    ),
    ("equ", &[&[104987, 104858, 103045]]),
    ("eri", &[&[7588, 9007, 11407, 13847, 15474, 17378, 18543, 21444, 23875]]),
    ("for", &[&[14879, 13147]]),
    (
        "gem",
        &[&[37826, 37740], &[37826, 35550, 31681], &[36850, 32246, 30343, 29655]],
    ),
    ("gru", &[&[108085, 109268, 112122]]),
    (
        "her",
        &[
            &[81693, 81833, 84380, 83207, 81693],
            &[81693, 80816, 84345],
            &[83207, 84379, 86974],
        ],
    ),
    ("hor", &[&[19747, 14240]]),
    (
        "hya",
        &[
            &[42313, 42402, 42799, 43109, 43234],
            &[43234, 43813, 45336, 46390],
            &[46390, 48356, 51069, 52943],
            &[52943, 57936, 64166, 64962],
        ],
    ),
    ("hyi", &[&[9236, 2021, 17678, 9236]]),
    ("ind", &[&[101772, 105841, 105319]]),
    ("lac", &[&[110609, 111169, 111944, 112917]]),
    (
        "leo",
        &[
            &[47908, 48455, 50335, 50583, 49583, 49669],
            &[49669, 54879, 57632, 54872, 50583],
        ],
    ),
    ("lmi", &[&[49593, 51233, 53229]]),
    ("lep", &[&[23685, 24305, 25985, 27288, 28103], &[25606, 25985], &[25606, 27072, 27654]]),
    ("lib", &[&[72622, 74785, 76333], &[72622, 73714]]),
    ("lup", &[&[71860, 73273, 74395, 75141], &[75141, 75177, 76297]]),
    ("lyn", &[&[45860, 45688, 41075, 36145, 33449, 30060]]),
    ("lyr", &[&[91262, 91971, 92420, 93194, 92791, 91971]]),
    ("men", &[&[29271, 27702, 22871]]),
    ("mic", &[&[102831, 103738, 105140]]),
    ("mon", &[&[29651, 30867, 34769, 37447, 39863]]),
    ("mus", &[&[57363, 61199, 61585, 62322, 63613]]),
    ("nor", &[&[78639, 79509, 80582]]),
    ("oct", &[&[70638, 107089, 112405, 70638]]),
    ("oph", &[&[79593, 79882, 81377, 84012, 86742, 86032, 79593]]),
    (
        "ori",
        &[
            &[24436, 25930, 26311, 26727, 27366],
            &[25336, 25930],
            &[27989, 26727],
            &[25336, 26207, 27989],
        ],
    ),
    ("pav", &[&[100751, 102395, 99240, 98495], &[99240, 91792]]),
    (
        "peg",
        &[
            &[113963, 113881, 677, 1067, 113963],
            &[107315, 109427, 112029, 113963],
            &[113881, 112158],
            &[113881, 112748, 112440],
        ],
    ),
    (
        "per",
        &[&[13268, 14328, 15863, 17358, 18532], &[15863, 14576, 14354], &[18532, 18614, 18246]],
    ),
    ("phe", &[&[2081, 5165, 6867], &[5165, 5348], &[2081, 765]]),
    ("pic", &[&[32607, 27530, 27321]]),
    (
        "psc",
        &[
            &[114971, 114724, 115738, 116771, 116928, 114971],
            &[116928, 118268, 4889, 6193, 7884, 9487],
            &[9487, 8833, 7097, 5742],
        ],
    ),
    ("psa", &[&[113368, 113246, 112948, 110935, 109285, 111954, 113368]]),
    ("pup", &[&[31685, 32768, 35264, 38170, 39429, 39757]]),
    ("pyx", &[&[42515, 42828, 43409]]),
    ("ret", &[&[17440, 17884, 19780, 19921]]),
    ("sge", &[&[96757, 97365, 98337], &[96837, 97365]]),
    (
        "sgr",
        &[
            &[88635, 89931, 90185, 93506],
            &[89931, 90496, 92041, 93506],
            &[92041, 92855, 93864, 93506],
        ],
    ),
    (
        "sco",
        &[
            &[78820, 78401, 78265],
            &[78401, 80112, 80763, 81266, 82396, 82514, 82729, 84143, 86228, 86670, 87073, 85927],
        ],
    ),
    ("scl", &[&[4577, 117452, 115102, 116231]]),
    ("sct", &[&[90595, 91117, 92175], &[91117, 91726]]),
    (
        "ser",
        &[&[78072, 77233, 76276, 77070, 77622, 77516], &[84880, 86263, 92946]],
    ),
    ("sex", &[&[48437, 49641, 51437]]),
    (
        "tau",
        &[&[25428, 20889, 20455, 20205, 18724, 16083], &[20205, 21421, 26451]],
    ),
    ("tel", &[&[89112, 90422, 91589]]),
    ("tra", &[&[82273, 77952, 74946, 82273]]),
    ("tri", &[&[8796, 10064, 10670, 8796]]),
    ("tuc", &[&[2484, 1599, 110130, 110838, 114996]]),
    ("uma", &[&[54061, 53910, 58001, 59774, 54061], &[59774, 62956, 65378, 67301]]),
    ("umi", &[&[11767, 85822, 82080, 77055], &[77055, 79822, 75097, 72607, 77055]]),
    ("vel", &[&[39953, 42913, 45941, 48774, 52727, 46651, 44816, 39953]]),
    (
        "vir",
        &[&[57757, 60129, 61941, 65474, 66249], &[61941, 63090, 63608], &[66249, 68520, 69701]],
    ),
    ("vol", &[&[34481, 35228, 37504, 39794, 41312, 44382]]),
    ("vul", &[&[95771, 97886, 99874]]),
];

/// Look up the line figure for a lowercase constellation id.
pub fn line_figure(id: &str) -> Option<&'static [&'static [u32]]> {
    LINE_FIGURES
        .iter()
        .find(|(figure_id, _)| *figure_id == id)
        .map(|(_, groups)| *groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The published Hipparcos catalog tops out at this designation.
    const MAX_HIP: u32 = 120_416;

    #[test]
    fn covers_all_88_figures() {
        assert_eq!(LINE_FIGURES.len(), 88);
    }

    #[test]
    fn every_polyline_can_draw_a_segment() {
        for (id, groups) in LINE_FIGURES {
            assert!(!groups.is_empty(), "{} has no polylines", id);
            for group in *groups {
                assert!(group.len() >= 2, "{} has a dangling polyline", id);
            }
        }
    }

    #[test]
    fn hip_ids_are_in_catalog_range() {
        for (id, groups) in LINE_FIGURES {
            for hip in groups.iter().flat_map(|group| group.iter()) {
                assert!(
                    (1..=MAX_HIP).contains(hip),
                    "{} carries out-of-range HIP {}",
                    id,
                    hip
                );
            }
        }
    }

    #[test]
    fn lookup_is_exact_lowercase() {
        assert!(line_figure("uma").is_some());
        assert!(line_figure("UMa").is_none());
        assert!(line_figure("xyz").is_none());
    }

    #[test]
    fn dipper_figure_lists_the_plough_stars() {
        let groups = line_figure("uma").unwrap();
        let bowl = groups[0];
        assert_eq!(bowl.first(), Some(&54061));
        assert_eq!(bowl.last(), Some(&54061));
        assert!(groups[1].contains(&67301));
    }
}
