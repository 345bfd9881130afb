use std::{fmt, str::FromStr};

use crate::{
    constants::{Weight, EARTH_RADIUS_KM, EARTH_RADIUS_MI},
    graph::Node,
};

/// Unit great-circle distances are reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
}

impl DistanceUnit {
    pub fn earth_radius(self) -> Weight {
        match self {
            DistanceUnit::Kilometers => EARTH_RADIUS_KM,
            DistanceUnit::Miles => EARTH_RADIUS_MI,
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceUnit::Kilometers => write!(f, "km"),
            DistanceUnit::Miles => write!(f, "mi"),
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "km" | "kilometers" => Ok(DistanceUnit::Kilometers),
            "mi" | "ml" | "miles" => Ok(DistanceUnit::Miles),
            other => Err(format!("unknown distance unit `{}`", other)),
        }
    }
}

/// Great-circle distance between two (latitude, longitude) pairs given in
/// degrees, using the Haversine formula.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64, unit: DistanceUnit) -> Weight {
    let a = (lat2 - lat1).to_radians() / 2.0;
    let b = (lon2 - lon1).to_radians() / 2.0;
    let c = a.sin().powi(2) + lat1.to_radians().cos() * lat2.to_radians().cos() * b.sin().powi(2);
    // Rounding may push c slightly above 1 for antipodal points
    let d = 2.0 * c.sqrt().min(1.0).asin();

    unit.earth_radius() * d
}

/// Great-circle distance between two nodes.
///
/// Nodes without geographic coordinates are 0 apart, which keeps the value
/// usable as an admissible estimate.
pub fn straight_line<D>(src: &Node<D>, dst: &Node<D>, unit: DistanceUnit) -> Weight {
    match (src.lat_lon(), dst.lat_lon()) {
        (Some((lat1, lon1)), Some((lat2, lon2))) => haversine(lat1, lon1, lat2, lon2, unit),
        _ => 0.0,
    }
}

/// Manhattan distance between the grid coordinates of two nodes, 0 if either
/// node has none. Only admissible if edge costs are at least this large.
pub fn manhattan<D>(src: &Node<D>, dst: &Node<D>) -> Weight {
    match (src.grid(), dst.grid()) {
        (Some((x1, y1)), Some((x2, y2))) => {
            ((x1 - x2).abs() as Weight) + ((y1 - y2).abs() as Weight)
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::graph::Coordinates;

    fn geo(key: &str, lat: f64, lon: f64) -> Node {
        Node::new(key, None, Some(Coordinates::Geo { lat, lon }))
    }

    #[test]
    fn known_distance() {
        // Arad -> Bucharest
        let arad = geo("Arad", 46.1792414, 21.3150154);
        let bucharest = geo("Bucharest", 44.4479237, 26.097879);

        let km = straight_line(&arad, &bucharest, DistanceUnit::Kilometers);
        let mi = straight_line(&arad, &bucharest, DistanceUnit::Miles);

        assert!(km > 410.0 && km < 430.0, "{}", km);
        assert_abs_diff_eq!(km / EARTH_RADIUS_KM, mi / EARTH_RADIUS_MI, epsilon = 1e-12);
    }

    #[test]
    fn symmetric_and_zero_on_identity() {
        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(
                &(-90.0..90.0f64, -180.0..180.0f64, -90.0..90.0f64, -180.0..180.0f64),
                |(lat1, lon1, lat2, lon2)| {
                    let ab = haversine(lat1, lon1, lat2, lon2, DistanceUnit::Kilometers);
                    let ba = haversine(lat2, lon2, lat1, lon1, DistanceUnit::Kilometers);

                    assert_abs_diff_eq!(ab, ba, epsilon = 1e-6);
                    assert!(ab >= 0.0);
                    assert!(ab <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
                    assert_eq!(haversine(lat1, lon1, lat1, lon1, DistanceUnit::Miles), 0.0);
                    Ok(())
                },
            )
            .unwrap();
    }

    #[test]
    fn antipodal_points() {
        let d = haversine(0.0, 0.0, 0.0, 180.0, DistanceUnit::Kilometers);
        assert_abs_diff_eq!(d, std::f64::consts::PI * EARTH_RADIUS_KM, epsilon = 1e-6);
    }

    #[test]
    fn missing_coordinates() {
        let arad = geo("Arad", 46.1792414, 21.3150154);
        let plain: Node = Node::new("Depot", None, None);

        assert_eq!(straight_line(&arad, &plain, DistanceUnit::Kilometers), 0.0);
        assert_eq!(manhattan(&arad, &plain), 0.0);
    }

    #[test]
    fn manhattan_on_grid() {
        let a: Node = Node::new("a", None, Some(Coordinates::Grid { x: 46, y: -114 }));
        let b: Node = Node::new("b", None, Some(Coordinates::Grid { x: 452, y: -329 }));

        assert_eq!(manhattan(&a, &b), 621.0);
        assert_eq!(manhattan(&b, &a), 621.0);
        assert_eq!(manhattan(&a, &a), 0.0);
    }

    #[test]
    fn parse_unit() {
        assert_eq!("km".parse::<DistanceUnit>(), Ok(DistanceUnit::Kilometers));
        assert_eq!("Miles".parse::<DistanceUnit>(), Ok(DistanceUnit::Miles));
        assert!("parsec".parse::<DistanceUnit>().is_err());
        assert_eq!(DistanceUnit::Miles.to_string(), "mi");
    }
}
