/// Unit a great-circle distance is reported in. Each unit is just a different
/// Earth radius plugged into the haversine formula.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
    Meters,
}

impl DistanceUnit {
    /// Mean Earth radius expressed in this unit.
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Miles => 3_958.8,
            DistanceUnit::Kilometers => 6_371.0,
            DistanceUnit::Meters => 6_371_000.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "miles",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Meters => "m",
        }
    }
}

/// A latitude/longitude pair in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180].
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    pub fn distance_to(&self, other: &Coordinates, unit: DistanceUnit) -> f64 {
        haversine(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
            unit,
        )
    }
}

/// Great-circle distance using the haversine formula.
/// Input lat/lon in degrees. Output in `unit`.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64, unit: DistanceUnit) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair outside [0, 1] near antipodes.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    unit.earth_radius() * c
}

/// Axis-aligned latitude/longitude box around a set of coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl Bounds {
    pub fn around(point: Coordinates) -> Self {
        Self {
            min_latitude: point.latitude,
            max_latitude: point.latitude,
            min_longitude: point.longitude,
            max_longitude: point.longitude,
        }
    }

    pub fn extend(&mut self, point: Coordinates) {
        self.min_latitude = self.min_latitude.min(point.latitude);
        self.max_latitude = self.max_latitude.max(point.latitude);
        self.min_longitude = self.min_longitude.min(point.longitude);
        self.max_longitude = self.max_longitude.max(point.longitude);
    }

    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinates>,
    {
        let mut points = points.into_iter();
        let mut bounds = Bounds::around(points.next()?);
        for point in points {
            bounds.extend(point);
        }
        Some(bounds)
    }
}
