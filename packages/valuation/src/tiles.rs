//! Web Mercator map tile resolution.
//!
//! Converts locality coordinates into `(zoom, x, y)` tile addresses at
//! a fixed zoom level and renders them as satellite/street tile URLs.
//! Pure math; invalid coordinates fall back to the city-center default
//! rather than failing.

use std::f64::consts::PI;

use homesight_models::{PropertyImages, TileCoord};

/// Fixed zoom level for property imagery.
pub const TILE_ZOOM: u32 = 16;

/// Default (city-center) latitude used when coordinates are missing or
/// invalid.
pub const DEFAULT_LATITUDE: f64 = 12.9716;

/// Default (city-center) longitude.
pub const DEFAULT_LONGITUDE: f64 = 77.5946;

/// Latitudes beyond this cannot be projected onto the Mercator plane.
const MAX_MERCATOR_LATITUDE: f64 = 85.0511;

/// Satellite tile server; addressed as `{base}/{z}/{y}/{x}`.
pub const SATELLITE_TILE_SERVER: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile";

/// Street tile server; addressed as `{base}/{z}/{x}/{y}.png`.
pub const STREET_TILE_SERVER: &str = "https://tile.openstreetmap.org";

/// Computes the Web Mercator tile containing a coordinate.
///
/// Non-finite or out-of-range coordinates fall back to the city-center
/// default, so this never fails.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub fn tile_at(latitude: f64, longitude: f64, zoom: u32) -> TileCoord {
    let (lat, lng) = if is_projectable(latitude, longitude) {
        (latitude, longitude)
    } else {
        (DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
    };

    let lat_rad = lat.to_radians();
    let n = 2.0_f64.powi(zoom.min(30) as i32);

    let x = ((lng + 180.0) / 360.0 * n).floor().min(n - 1.0);
    let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * n)
        .floor()
        .min(n - 1.0);

    TileCoord {
        zoom,
        x_tile: x as u32,
        y_tile: y as u32,
    }
}

/// Resolves satellite and street imagery URLs for a coordinate at the
/// fixed property zoom level.
#[must_use]
pub fn property_images(latitude: f64, longitude: f64) -> PropertyImages {
    let tile = tile_at(latitude, longitude, TILE_ZOOM);
    PropertyImages {
        satellite_url: format!(
            "{SATELLITE_TILE_SERVER}/{}/{}/{}",
            tile.zoom, tile.y_tile, tile.x_tile
        ),
        street_url: format!(
            "{STREET_TILE_SERVER}/{}/{}/{}.png",
            tile.zoom, tile.x_tile, tile.y_tile
        ),
    }
}

fn is_projectable(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && latitude.abs() <= MAX_MERCATOR_LATITUDE
        && longitude.abs() <= 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_grid_center() {
        let tile = tile_at(0.0, 0.0, 16);
        assert_eq!(
            tile,
            TileCoord {
                zoom: 16,
                x_tile: 32_768,
                y_tile: 32_768
            }
        );
    }

    #[test]
    fn bangalore_center_matches_hand_computed_tile() {
        // floor((77.5946 + 180) / 360 * 2^16) = 46893
        // floor((1 - ln(tan φ + sec φ) / π) / 2 * 2^16) = 30386
        let tile = tile_at(12.9716, 77.5946, 16);
        assert_eq!(tile.x_tile, 46_893);
        assert_eq!(tile.y_tile, 30_386);
    }

    #[test]
    fn zoom_zero_is_the_single_world_tile() {
        let tile = tile_at(12.9716, 77.5946, 0);
        assert_eq!((tile.x_tile, tile.y_tile), (0, 0));
    }

    #[test]
    fn invalid_coordinates_fall_back_to_city_center() {
        let fallback = tile_at(DEFAULT_LATITUDE, DEFAULT_LONGITUDE, TILE_ZOOM);
        assert_eq!(tile_at(f64::NAN, 77.0, TILE_ZOOM), fallback);
        assert_eq!(tile_at(12.9, f64::INFINITY, TILE_ZOOM), fallback);
        assert_eq!(tile_at(90.0, 77.0, TILE_ZOOM), fallback);
        assert_eq!(tile_at(12.9, 200.0, TILE_ZOOM), fallback);
    }

    #[test]
    fn antimeridian_stays_inside_the_grid() {
        let tile = tile_at(0.0, 180.0, 16);
        assert_eq!(tile.x_tile, 65_535);
    }

    #[test]
    fn image_urls_follow_server_templates() {
        let images = property_images(12.9716, 77.5946);
        assert_eq!(
            images.satellite_url,
            format!("{SATELLITE_TILE_SERVER}/16/30386/46893")
        );
        assert_eq!(
            images.street_url,
            format!("{STREET_TILE_SERVER}/16/46893/30386.png")
        );
    }
}
