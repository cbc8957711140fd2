//! Central London locations around the default map centre (51.505, -0.09).
//!
//! Coordinates sourced from OpenStreetMap.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Thames crossings (a walk along the river)
// ============================================================================

pub const BRIDGES: &[Location] = &[
    Location::new("Westminster Bridge", 51.5008638, -0.1219215),
    Location::new("Waterloo Bridge", 51.5085498, -0.1168376),
    Location::new("Blackfriars Bridge", 51.5096923, -0.1044566),
    Location::new("Millennium Bridge", 51.5094513, -0.0985325),
    Location::new("Southwark Bridge", 51.5083868, -0.0939616),
    Location::new("London Bridge", 51.5079138, -0.0877011),
    Location::new("Tower Bridge", 51.5054564, -0.0753565),
];

// ============================================================================
// Landmarks
// ============================================================================

pub const LANDMARKS: &[Location] = &[
    Location::new("St Paul's Cathedral", 51.5138453, -0.0983506),
    Location::new("Tate Modern", 51.5075953, -0.0993564),
    Location::new("Borough Market", 51.5054306, -0.0907460),
    Location::new("The Monument", 51.5101204, -0.0859442),
    Location::new("Tower of London", 51.5081124, -0.0759493),
    Location::new("Bank of England", 51.5142077, -0.0885840),
];

/// All fixture locations, bridges first.
pub fn all_locations() -> Vec<&'static Location> {
    BRIDGES.iter().chain(LANDMARKS.iter()).collect()
}
