//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! A library for map region tile calculations
//!
//! ## Corner snapping
//!
//! ```rust
//! use region_grid::{BoundingBox, RegionGrid};
//!
//! let grid = RegionGrid::new(5.0);
//! let bbox = BoundingBox {
//!     min_lat: 59.805323,
//!     min_lon: 30.024240,
//!     max_lat: 60.120754,
//!     max_lon: 30.699476,
//! };
//! assert_eq!(
//!     grid.corner_coordinates(10, None, &bbox),
//!     BoundingBox {
//!         min_lat: 59.80078125,
//!         min_lon: 30.0234375,
//!         max_lat: 60.15234375,
//!         max_lon: 30.7265625,
//!     }
//! );
//! ```
//!
//! ## Grid iterators
//!
//! ```rust
//! use region_grid::{BoundingBox, GridIterator, RegionGrid};
//!
//! let grid = RegionGrid::new(5.0);
//! let bbox = BoundingBox {
//!     min_lat: 59.805323,
//!     min_lon: 30.024240,
//!     max_lat: 60.120754,
//!     max_lon: 30.699476,
//! };
//! let tiles = grid.find_tiles(7, 9, None, &bbox);
//! for (level, x, y) in GridIterator::new(tiles) {
//!     println!("Tile {}/{}/{}", level, x, y);
//! }
//! ```
//!
//! ## Parsing
//!
//! ```rust
//! use region_grid::parse_levels;
//!
//! let (from_level, to_level) = parse_levels("7 - 9").unwrap();
//! assert_eq!((from_level, to_level), (7, 9));
//! ```

mod grid;
mod grid_iterator;
mod parse;
#[cfg(test)]
mod grid_test;

pub use grid::{BoundingBox, RegionGrid, TileGrid, TileRange};
pub use grid_iterator::GridIterator;
pub use parse::{parse_bounding_box, parse_levels, remove_characters, ParseError};
