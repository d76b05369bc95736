use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Coordinate conversion boundary
// ---------------------------------------------------------------------------

/// Geographic coordinates, decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

/// Stateless projected -> geographic conversion used for telemetry.
pub trait Projection {
    fn to_geographic(&self, projected: &Vector2<f64>) -> GeoPoint;
}

// ---------------------------------------------------------------------------
// Spherical Web Mercator (EPSG:3857)
// ---------------------------------------------------------------------------

pub const WGS84_A: f64 = 6_378_137.0; // m, sphere radius used by EPSG:3857
pub const MAX_LATITUDE: f64 = 85.051_128_78; // deg, square-world cutoff

#[derive(Debug, Clone, Copy, Default)]
pub struct WebMercator;

impl WebMercator {
    /// Geographic -> projected meters. Latitude is clamped to the square world.
    pub fn to_projected(&self, point: &GeoPoint) -> Vector2<f64> {
        let lat = point.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        Vector2::new(
            WGS84_A * point.longitude.to_radians(),
            WGS84_A * (0.5 * (FRAC_PI_2 + lat)).tan().ln(),
        )
    }
}

impl Projection for WebMercator {
    fn to_geographic(&self, projected: &Vector2<f64>) -> GeoPoint {
        let lat = 2.0 * (projected.y / WGS84_A).exp().atan() - FRAC_PI_2;
        GeoPoint {
            longitude: wrap_longitude((projected.x / WGS84_A).to_degrees()),
            latitude: lat.to_degrees(),
        }
    }
}

/// Fold a longitude into `[-180, 180)`; a track flown across the
/// antimeridian keeps reporting a real meridian.
pub fn wrap_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn origin_maps_to_null_island() {
        let g = WebMercator.to_geographic(&Vector2::zeros());
        assert_abs_diff_eq!(g.longitude, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g.latitude, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn half_circumference_is_antimeridian() {
        let x = std::f64::consts::PI * WGS84_A;
        let g = WebMercator.to_geographic(&Vector2::new(x, 0.0));
        assert_abs_diff_eq!(g.longitude.abs(), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn crossing_the_antimeridian_wraps_west() {
        // 10 degrees of longitude past 180 E
        let x = std::f64::consts::PI * WGS84_A + 1_113_195.0;
        let g = WebMercator.to_geographic(&Vector2::new(x, 0.0));
        assert_abs_diff_eq!(g.longitude, -170.0, epsilon = 1e-3);
        assert_eq!(crate::telemetry::format_dms(g.longitude, true), "170° 00' 00\" W");

        let far_west = WebMercator.to_geographic(&Vector2::new(-3.0 * x, 0.0));
        assert!((-180.0..180.0).contains(&far_west.longitude), "lon {}", far_west.longitude);
    }

    #[test]
    fn round_trip() {
        let p = GeoPoint { longitude: -122.4194, latitude: 37.7749 };
        let back = WebMercator.to_geographic(&WebMercator.to_projected(&p));
        assert_abs_diff_eq!(back.longitude, p.longitude, epsilon = 1e-9);
        assert_abs_diff_eq!(back.latitude, p.latitude, epsilon = 1e-9);
    }

    #[test]
    fn reference_start_is_in_europe() {
        let g = WebMercator.to_geographic(&Vector2::new(779_232.0, 5_780_430.0));
        assert!((6.9..7.1).contains(&g.longitude), "lon {}", g.longitude);
        assert!((45.0..47.0).contains(&g.latitude), "lat {}", g.latitude);
    }
}
