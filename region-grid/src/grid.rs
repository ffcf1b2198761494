//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//!Region tile grids

/// Geographic bounding box in degrees.
///
/// `min_lat <= max_lat` and `min_lon <= max_lon` is a caller precondition;
/// the snapping arithmetic produces a degenerate box when it is violated.
#[derive(PartialEq, Clone, Debug)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

/// Min and max tile row/column numbers (inclusive)
#[derive(PartialEq, Clone, Debug)]
pub struct TileRange {
    pub min_row: u32,
    pub max_row: u32,
    pub min_col: u32,
    pub max_col: u32,
}

/// Tile cover of a region at one level
#[derive(PartialEq, Clone, Debug)]
pub struct TileGrid {
    /// The level requested by the caller, never the accuracy override.
    pub level: u8,
    pub range: TileRange,
    /// Region snapped outward to tile corners.
    pub bbox: BoundingBox,
}

/// Tile grid over the full lat/lon plane
///
/// The grid covers latitudes -90..90 and longitudes -180..180. Level 0 has
/// `subdivision` tile rows and `2 * subdivision` tile columns; every level
/// doubles the resolution in both axes.
#[derive(Clone, Debug)]
pub struct RegionGrid {
    /// Base subdivision factor (number of tile rows at level 0).
    subdivision: f64,
}

impl RegionGrid {
    pub fn new(subdivision: f64) -> RegionGrid {
        RegionGrid { subdivision }
    }

    /// Angular tile width at `level`, in degrees
    pub fn tile_width(&self, level: u8) -> f64 {
        360.0 / (self.subdivision * 2f64.powi(level as i32) * 2.0)
    }

    /// Angular tile height at `level`, in degrees
    pub fn tile_height(&self, level: u8) -> f64 {
        180.0 / (self.subdivision * 2f64.powi(level as i32))
    }

    /// Returns `bbox` snapped outward to the nearest tile corners.
    ///
    /// When `accuracy` is given, tile sizes are taken from that level instead
    /// of `level`. The override affects the snapping granularity only; it is
    /// not range-checked.
    pub fn corner_coordinates(
        &self,
        level: u8,
        accuracy: Option<u8>,
        bbox: &BoundingBox,
    ) -> BoundingBox {
        let snap_level = accuracy.unwrap_or(level);
        let range_lon = self.tile_width(snap_level);
        let range_lat = self.tile_height(snap_level);

        BoundingBox {
            min_lat: ((bbox.min_lat + 90.0) / range_lat).floor() * range_lat - 90.0,
            min_lon: ((bbox.min_lon + 180.0) / range_lon).floor() * range_lon - 180.0,
            max_lat: ((bbox.max_lat + 90.0) / range_lat).ceil() * range_lat - 90.0,
            max_lon: ((bbox.max_lon + 180.0) / range_lon).ceil() * range_lon - 180.0,
        }
    }

    /// Tile index range covering `bbox` at `level`
    ///
    /// Corners are snapped with `corner_coordinates`; the index arithmetic
    /// always uses the resolution of the reported `level`, even when the
    /// corners were snapped at an `accuracy` level.
    pub fn tile_grid(&self, level: u8, accuracy: Option<u8>, bbox: &BoundingBox) -> TileGrid {
        let corners = self.corner_coordinates(level, accuracy, bbox);

        let range_lon = self.tile_width(level);
        let range_lat = self.tile_height(level);

        // The snapped max coordinate is the far edge of the last covered
        // tile, hence the -1 for the inclusive index.
        let range = TileRange {
            min_row: ((corners.min_lat + 90.0) / range_lat).round() as u32,
            min_col: ((corners.min_lon + 180.0) / range_lon).round() as u32,
            max_row: (((corners.max_lat + 90.0) / range_lat).round() as u32).saturating_sub(1),
            max_col: (((corners.max_lon + 180.0) / range_lon).round() as u32).saturating_sub(1),
        };

        TileGrid {
            level,
            range,
            bbox: corners,
        }
    }

    /// Tile index ranges covering `bbox` for each level in `from_level..=to_level`
    pub fn find_tiles(
        &self,
        from_level: u8,
        to_level: u8,
        accuracy: Option<u8>,
        bbox: &BoundingBox,
    ) -> Vec<TileGrid> {
        (from_level..=to_level)
            .map(|level| self.tile_grid(level, accuracy, bbox))
            .collect()
    }
}
