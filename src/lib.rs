//! A library for mapping between map coordinates and tile indices of
//! multi-resolution tile pyramids
//!
//! ## Predefined grids
//!
//! ```rust
//! use tile_pyramid::{Point, TileCoord, TileGrid};
//!
//! let grid = TileGrid::web_mercator(2);
//! let origin = grid.origin(0).unwrap();
//! assert_eq!(grid.tile_coord(0, &origin).unwrap(), TileCoord::new(0, 0, 0));
//! // Tile indices grow to the right and upwards from the top-left origin
//! assert_eq!(
//!     grid.tile_coord(1, &Point::new(0.0, 0.0)).unwrap(),
//!     TileCoord::new(1, 1, -1)
//! );
//! ```
//!
//! ## Ancestor traversal
//!
//! ```rust
//! use tile_pyramid::{TileCoord, TileGrid};
//!
//! let grid = TileGrid::web_mercator(10);
//! let mut visited = Vec::new();
//! let stopped = grid
//!     .for_each_ancestor(&TileCoord::new(3, 5, -6), |z, bounds| {
//!         visited.push(z);
//!         bounds.contains(&TileCoord::new(z, 1, -2))
//!     })
//!     .unwrap();
//! assert!(stopped);
//! assert_eq!(visited, vec![2, 1]);
//! ```
//!
//! ## Custom grids
//!
//! ```rust
//! use tile_pyramid::{Extent, Origin, Point, TileCoord, TileGrid};
//!
//! let grid = TileGrid::new(
//!     vec![100.0, 50.0, 25.0],
//!     Extent::new(25600.0, 25600.0, 0.0, 0.0),
//!     Origin::Single(Point::new(0.0, 0.0)),
//!     None,
//! )
//! .unwrap();
//! assert_eq!(
//!     grid.tile_coord_extent(&TileCoord::new(0, 1, 2)).unwrap(),
//!     Extent::new(76800.0, 51200.0, 51200.0, 25600.0)
//! );
//! assert_eq!(grid.z_for_resolution(75.0), 1);
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod config;
mod error;
mod grid;
mod grid_iterator;
#[cfg(test)]
mod config_test;

pub use config::{parse_config, read_config, Config, ExtentCfg, GridCfg, UserGridCfg};
pub use error::GridError;
pub use grid::{
    Extent, Origin, Point, Size, TileBounds, TileCoord, TileGrid, DEFAULT_TILE_SIZE,
    WEB_MERCATOR_HALF_SIZE,
};
pub use grid_iterator::{Ancestors, TileBoundsIter};
