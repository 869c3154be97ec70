use crate::Bbox;

/// A named preset area the search form can narrow results to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub id: &'static str,
    pub label: &'static str,
    pub bbox: Bbox,
}

pub const REGIONS: &[Region] = &[
    Region {
        id: "wellington",
        label: "Wellington",
        bbox: Bbox {
            min_lat: -41.35,
            min_lon: 174.72,
            max_lat: -41.24,
            max_lon: 174.82,
        },
    },
    Region {
        id: "auckland",
        label: "Auckland",
        bbox: Bbox {
            min_lat: -36.95,
            min_lon: 174.65,
            max_lat: -36.80,
            max_lon: 174.90,
        },
    },
    Region {
        id: "queenstown",
        label: "Queenstown",
        bbox: Bbox {
            min_lat: -45.07,
            min_lon: 168.60,
            max_lat: -44.98,
            max_lon: 168.77,
        },
    },
    Region {
        id: "christchurch",
        label: "Christchurch",
        bbox: Bbox {
            min_lat: -43.60,
            min_lon: 172.50,
            max_lat: -43.45,
            max_lon: 172.77,
        },
    },
];

pub fn find_region(id: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|region| region.id == id)
}

pub fn region_bbox(id: &str) -> Option<Bbox> {
    find_region(id).map(|region| region.bbox)
}
