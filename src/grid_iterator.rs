//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid iterators

use crate::grid::{Extent, TileBounds, TileCoord, TileGrid};

/// Level-by-level iterator over the tile bounds covering a tile at coarser levels
pub struct Ancestors<'a> {
    grid: &'a TileGrid,
    /// Extent of the starting tile
    extent: Extent,
    /// Level of the previously yielded bounds
    z: u8,
}

impl<'a> Ancestors<'a> {
    pub(crate) fn new(grid: &'a TileGrid, extent: Extent, z: u8) -> Ancestors<'a> {
        Ancestors { grid, extent, z }
    }
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = TileBounds;

    fn next(&mut self) -> Option<Self::Item> {
        if self.z == 0 {
            return None;
        }
        self.z -= 1;
        Some(self.grid.level_extent_tile_bounds(self.z as usize, &self.extent))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.z as usize, Some(self.z as usize))
    }
}

impl<'a> ExactSizeIterator for Ancestors<'a> {}

/// Tile-by-tile iterator over tile bounds
pub struct TileBoundsIter {
    bounds: TileBounds,
    x: i64,
    y: i64,
    finished: bool,
}

impl TileBoundsIter {
    pub fn new(bounds: TileBounds) -> TileBoundsIter {
        TileBoundsIter {
            x: bounds.min_x,
            y: bounds.min_y,
            // Inverted bounds contain no tiles
            finished: bounds.min_x > bounds.max_x || bounds.min_y > bounds.max_y,
            bounds,
        }
    }
}

impl Iterator for TileBoundsIter {
    type Item = TileCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let current = TileCoord::new(self.bounds.z, self.x, self.y);
        if self.y < self.bounds.max_y {
            self.y += 1;
        } else if self.x < self.bounds.max_x {
            self.x += 1;
            self.y = self.bounds.min_y;
        } else {
            self.finished = true;
        }
        Some(current)
    }
}

#[cfg(test)]
fn sample_grid() -> TileGrid {
    use crate::grid::{Origin, Point};
    TileGrid::new(
        vec![100.0, 50.0, 25.0, 12.5],
        Extent::new(102400.0, 102400.0, 0.0, 0.0),
        Origin::Single(Point::new(0.0, 0.0)),
        None,
    )
    .unwrap()
}

#[test]
fn test_ancestors() {
    let grid = sample_grid();
    // tile extent: (16000, 16000) - (19200, 19200)
    let ancestors = grid.ancestors(&TileCoord::new(3, 5, 5)).unwrap();
    assert_eq!(ancestors.len(), 3);
    let bounds = ancestors.collect::<Vec<_>>();
    assert_eq!(
        bounds,
        vec![
            TileBounds {
                z: 2,
                min_x: 2,
                max_x: 3,
                min_y: 2,
                max_y: 3,
            },
            TileBounds {
                z: 1,
                min_x: 1,
                max_x: 1,
                min_y: 1,
                max_y: 1,
            },
            TileBounds {
                z: 0,
                min_x: 0,
                max_x: 0,
                min_y: 0,
                max_y: 0,
            },
        ]
    );

    let ancestors = grid.ancestors(&TileCoord::new(0, 5, 5)).unwrap();
    assert_eq!(ancestors.count(), 0);

    assert!(grid.ancestors(&TileCoord::new(4, 0, 0)).is_err());
}

#[test]
fn test_bounds_iter() {
    let bounds = TileBounds {
        z: 2,
        min_x: -1,
        max_x: 0,
        min_y: 3,
        max_y: 5,
    };
    let cells = bounds.iter().collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            TileCoord::new(2, -1, 3),
            TileCoord::new(2, -1, 4),
            TileCoord::new(2, -1, 5),
            TileCoord::new(2, 0, 3),
            TileCoord::new(2, 0, 4),
            TileCoord::new(2, 0, 5),
        ]
    );
    assert_eq!(cells.len() as u64, bounds.width() * bounds.height());
    assert!(cells.iter().all(|tile| bounds.contains(tile)));

    let single = TileBounds {
        z: 0,
        min_x: 0,
        max_x: 0,
        min_y: 0,
        max_y: 0,
    };
    assert_eq!(single.iter().collect::<Vec<_>>(), vec![TileCoord::new(0, 0, 0)]);
}

#[test]
fn test_bad_bounds() {
    // min_x > max_x
    let bounds = TileBounds {
        z: 1,
        min_x: 2,
        max_x: 1,
        min_y: 0,
        max_y: 1,
    };
    assert_eq!(bounds.iter().count(), 0);
    assert_eq!(bounds.width(), 0);

    // min_y > max_y
    let bounds = TileBounds {
        z: 1,
        min_x: 0,
        max_x: 1,
        min_y: 4,
        max_y: 3,
    };
    assert_eq!(bounds.iter().count(), 0);
    assert_eq!(bounds.height(), 0);
}
