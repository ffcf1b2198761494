//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::grid::{BoundingBox, RegionGrid, TileGrid, TileRange};

fn neva_bay() -> BoundingBox {
    BoundingBox {
        min_lat: 59.805323,
        min_lon: 30.024240,
        max_lat: 60.120754,
        max_lon: 30.699476,
    }
}

#[test]
fn test_tile_size() {
    let grid = RegionGrid::new(5.0);
    assert_eq!(grid.tile_height(0), 36.0);
    assert_eq!(grid.tile_width(0), 36.0);
    assert_eq!(grid.tile_height(10), 0.03515625);
    assert_eq!(grid.tile_width(10), 0.03515625);

    let grid = RegionGrid::new(2.0);
    assert_eq!(grid.tile_height(0), 90.0);
    assert_eq!(grid.tile_width(0), 90.0);
}

#[test]
fn test_corner_coordinates() {
    // Expected values are exact dyadic fractions
    let cases = vec![
        (
            10,
            None,
            5.0,
            BoundingBox {
                min_lat: 59.80078125,
                min_lon: 30.0234375,
                max_lat: 60.15234375,
                max_lon: 30.7265625,
            },
        ),
        (
            10,
            None,
            2.0,
            BoundingBox {
                min_lat: 59.765625,
                min_lon: 29.970703125,
                max_lat: 60.205078125,
                max_lon: 30.76171875,
            },
        ),
        (
            10,
            Some(6),
            5.0,
            BoundingBox {
                min_lat: 59.625,
                min_lon: 29.8125,
                max_lat: 60.1875,
                max_lon: 30.9375,
            },
        ),
        (
            10,
            Some(6),
            2.0,
            BoundingBox {
                min_lat: 59.0625,
                min_lon: 29.53125,
                max_lat: 60.46875,
                max_lon: 30.9375,
            },
        ),
    ];
    for (level, accuracy, fld, expected) in cases {
        let grid = RegionGrid::new(fld);
        assert_eq!(grid.corner_coordinates(level, accuracy, &neva_bay()), expected);
    }
}

#[test]
fn test_tile_grid() {
    let grid = RegionGrid::new(5.0);
    assert_eq!(
        grid.tile_grid(10, None, &neva_bay()),
        TileGrid {
            level: 10,
            range: TileRange {
                min_row: 4261,
                max_row: 4270,
                min_col: 5974,
                max_col: 5993,
            },
            bbox: BoundingBox {
                min_lat: 59.80078125,
                min_lon: 30.0234375,
                max_lat: 60.15234375,
                max_lon: 30.7265625,
            },
        }
    );
}

#[test]
fn test_outward_snap() {
    let grid = RegionGrid::new(5.0);
    let bbox = neva_bay();
    for level in 0..=16 {
        let snapped = grid.corner_coordinates(level, None, &bbox);
        assert!(snapped.min_lat <= bbox.min_lat);
        assert!(snapped.min_lon <= bbox.min_lon);
        assert!(snapped.max_lat >= bbox.max_lat);
        assert!(snapped.max_lon >= bbox.max_lon);
    }
}

#[test]
fn test_snap_idempotence() {
    let grid = RegionGrid::new(5.0);
    let snapped = grid.corner_coordinates(10, None, &neva_bay());
    assert_eq!(grid.corner_coordinates(10, None, &snapped), snapped);
}

#[test]
fn test_corners_on_tile_boundaries() {
    let grid = RegionGrid::new(5.0);
    let snapped = grid.corner_coordinates(10, None, &neva_bay());
    let range_lat = grid.tile_height(10);
    let range_lon = grid.tile_width(10);
    for offset in [
        (snapped.min_lat + 90.0) / range_lat,
        (snapped.max_lat + 90.0) / range_lat,
    ] {
        assert_eq!(offset, offset.round());
    }
    for offset in [
        (snapped.min_lon + 180.0) / range_lon,
        (snapped.max_lon + 180.0) / range_lon,
    ] {
        assert_eq!(offset, offset.round());
    }
}

#[test]
fn test_index_consistency() {
    let grid = RegionGrid::new(5.0);
    for level in 0..=16 {
        let tiles = grid.tile_grid(level, None, &neva_bay());
        let rows = (tiles.bbox.max_lat - tiles.bbox.min_lat) / grid.tile_height(level);
        let cols = (tiles.bbox.max_lon - tiles.bbox.min_lon) / grid.tile_width(level);
        assert_eq!(tiles.range.max_row - tiles.range.min_row + 1, rows.round() as u32);
        assert_eq!(tiles.range.max_col - tiles.range.min_col + 1, cols.round() as u32);
    }
}

#[test]
fn test_accuracy_override() {
    let grid = RegionGrid::new(5.0);
    let bbox = neva_bay();

    // Corners are snapped at the accuracy level
    assert_eq!(
        grid.corner_coordinates(10, Some(6), &bbox),
        grid.corner_coordinates(6, None, &bbox)
    );

    // but the reported level and the index resolution stay at the requested level
    let tiles = grid.tile_grid(10, Some(6), &bbox);
    assert_eq!(tiles.level, 10);
    assert_eq!(
        tiles.range,
        TileRange {
            min_row: 4256,
            max_row: 4271,
            min_col: 5968,
            max_col: 5999,
        }
    );
}

#[test]
fn test_find_tiles() {
    let grid = RegionGrid::new(5.0);
    let tiles = grid.find_tiles(9, 11, None, &neva_bay());
    assert_eq!(tiles.len(), 3);
    assert_eq!(
        tiles.iter().map(|t| t.level).collect::<Vec<_>>(),
        vec![9, 10, 11]
    );
    assert_eq!(tiles[1], grid.tile_grid(10, None, &neva_bay()));
    // Each level doubles the resolution, so a cover never shrinks
    assert!(tiles[2].range.max_col - tiles[2].range.min_col >= tiles[1].range.max_col - tiles[1].range.min_col);
}
