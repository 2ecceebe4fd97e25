//! Destination catalog
//!
//! Fixed set of places a trip can visit, grouped by region.

/// A region and the places that can be selected in it
#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub name: &'static str,
    pub places: &'static [&'static str],
}

pub const REGIONS: &[Region] = &[
    Region {
        name: "Kashmir",
        places: &[
            "Srinagar",
            "Pahalgam",
            "Gulmarg",
            "Sonmarg",
            "Doodpathri",
            "Aharbal waterfall",
            "Gurez valley",
            "Keran valley",
            "Yusmarg",
            "Sinthan top",
            "Duksum valley",
            "Verinag",
            "Tosmaidan",
        ],
    },
    Region {
        name: "Jammu",
        places: &["Vaishno Devi"],
    },
];

/// Look up the region a place belongs to
pub fn region_of(place: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.places.contains(&place))
}

pub fn is_known_place(place: &str) -> bool {
    region_of(place).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_lookup() {
        assert_eq!(region_of("Gulmarg").map(|r| r.name), Some("Kashmir"));
        assert_eq!(region_of("Vaishno Devi").map(|r| r.name), Some("Jammu"));
        assert!(region_of("Leh").is_none());
    }

    #[test]
    fn test_place_names_are_case_sensitive() {
        assert!(is_known_place("Srinagar"));
        assert!(!is_known_place("srinagar"));
    }
}
