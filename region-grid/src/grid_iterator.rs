//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid iterators

use crate::grid::TileGrid;

/// Level-by-level iterator over all tiles of a region cover
pub struct GridIterator {
    idx: usize,
    col: u32,
    row: u32,
    grids: Vec<TileGrid>,
    finished: bool,
}

impl GridIterator {
    /// `grids` as returned by `RegionGrid::find_tiles`
    pub fn new(grids: Vec<TileGrid>) -> GridIterator {
        match grids.first() {
            Some(grid) => GridIterator {
                idx: 0,
                col: grid.range.min_col,
                row: grid.range.min_row,
                grids,
                finished: false,
            },
            // Return "empty" iterator when there is nothing to cover
            None => GridIterator {
                idx: 0,
                col: 0,
                row: 0,
                grids,
                finished: true,
            },
        }
    }
}

impl Iterator for GridIterator {
    /// Current cell index `(level, col, row)`
    type Item = (u8, u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let grid = &self.grids[self.idx];
        let current = (grid.level, self.col, self.row);
        let range = &grid.range;
        if self.row < range.max_row {
            self.row += 1;
        } else if self.col < range.max_col {
            self.col += 1;
            self.row = range.min_row;
        } else if self.idx + 1 < self.grids.len() {
            self.idx += 1;
            let range = &self.grids[self.idx].range;
            self.col = range.min_col;
            self.row = range.min_row;
        } else {
            self.finished = true;
        }
        Some(current)
    }
}

#[test]
fn test_grid_iter() {
    use crate::grid::{BoundingBox, RegionGrid};

    let grid = RegionGrid::new(1.0);
    let world = BoundingBox {
        min_lat: -90.0,
        min_lon: -180.0,
        max_lat: 90.0,
        max_lon: 180.0,
    };
    let tiles = grid.find_tiles(0, 1, None, &world);
    let cells = GridIterator::new(tiles).collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            (0, 0, 0),
            (0, 1, 0),
            (1, 0, 0),
            (1, 0, 1),
            (1, 1, 0),
            (1, 1, 1),
            (1, 2, 0),
            (1, 2, 1),
            (1, 3, 0),
            (1, 3, 1)
        ]
    );

    let tiles = grid.find_tiles(0, 0, None, &world);
    let cells = GridIterator::new(tiles).collect::<Vec<_>>();
    assert_eq!(cells, vec![(0, 0, 0), (0, 1, 0)]);
}

#[test]
fn test_empty_iter() {
    let cells = GridIterator::new(Vec::new()).collect::<Vec<_>>();
    assert_eq!(cells, vec![]);
}
