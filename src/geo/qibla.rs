const KAABA_LAT: f64 = 21.4225;
const KAABA_LNG: f64 = 39.8262;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Qibla bearing from the given position, in degrees clockwise from north,
/// normalized to 0..360.
pub fn qibla_angle(lat: f64, lng: f64) -> f64 {
    let lat_rad = lat.to_radians();
    let kaaba_lat_rad = KAABA_LAT.to_radians();
    let d_lng = (KAABA_LNG - lng).to_radians();

    let x = d_lng.sin();
    let y = lat_rad.cos() * kaaba_lat_rad.tan() - lat_rad.sin() * d_lng.cos();

    let angle = x.atan2(y).to_degrees();
    (angle % 360.0 + 360.0) % 360.0
}

/// Great-circle distance to Mecca in whole kilometers (haversine).
pub fn distance_to_mecca(lat: f64, lng: f64) -> i64 {
    let lat_rad = lat.to_radians();
    let kaaba_lat_rad = KAABA_LAT.to_radians();
    let d_lat = (KAABA_LAT - lat).to_radians();
    let d_lng = (KAABA_LNG - lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat_rad.cos() * kaaba_lat_rad.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_KM * c).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tunis_points_east_south_east() {
        let angle = qibla_angle(36.8065, 10.1815);
        assert!((100.0..125.0).contains(&angle), "got {angle}");
    }

    #[test]
    fn from_mecca_distance_is_zero() {
        assert_eq!(distance_to_mecca(KAABA_LAT, KAABA_LNG), 0);
    }

    #[test]
    fn tunis_to_mecca_distance() {
        let km = distance_to_mecca(36.8065, 10.1815);
        assert!((3100..3500).contains(&km), "got {km}");
    }

    #[test]
    fn angle_is_normalized() {
        for &(lat, lng) in &[(36.8, 10.2), (33.5, 11.1), (-35.0, 150.0), (60.0, -50.0)] {
            let angle = qibla_angle(lat, lng);
            assert!((0.0..360.0).contains(&angle), "got {angle}");
        }
    }
}
