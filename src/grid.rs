//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//!Tile grids

use crate::error::GridError;
use crate::grid_iterator::{Ancestors, TileBoundsIter};
use std::f64::consts;
use std::fmt;

/// Half side length of the square Web Mercator world, in meters
pub const WEB_MERCATOR_HALF_SIZE: f64 = consts::PI * 6378137.0;

/// Degrees per pixel of the WGS84 grid at zoom level 0
const WGS84_RESOLUTION_Z0: f64 = 0.703125;

/// Default tile width and height, in pixels
pub const DEFAULT_TILE_SIZE: u32 = 256;

// Zoom levels are addressed with u8
const MAX_LEVELS: usize = 256;

/// Point in map coordinates
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

/// Axis-aligned rectangle in map coordinates
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Extent {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Extent {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Extent {
        Extent {
            top,
            right,
            bottom,
            left,
        }
    }
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
    pub fn center(&self) -> Point {
        Point {
            x: (self.left + self.right) / 2.0,
            y: (self.bottom + self.top) / 2.0,
        }
    }
    /// Point lies inside or on the border. Unlike tile assignment in
    /// `TileGrid::tile_coord`, the right and top borders count as inside.
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.bottom
            && point.y <= self.top
    }
}

/// Tile size in pixels
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Default for Size {
    fn default() -> Size {
        Size {
            width: DEFAULT_TILE_SIZE,
            height: DEFAULT_TILE_SIZE,
        }
    }
}

/// Tile address: zoom level and (unbounded) tile indices
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct TileCoord {
    pub z: u8,
    pub x: i64,
    pub y: i64,
}

impl TileCoord {
    pub fn new(z: u8, x: i64, y: i64) -> TileCoord {
        TileCoord { z, x, y }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

/// Min and max tile indices (inclusive) at zoom level `z`
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TileBounds {
    pub z: u8,
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl TileBounds {
    pub fn contains(&self, tile_coord: &TileCoord) -> bool {
        tile_coord.z == self.z
            && tile_coord.x >= self.min_x
            && tile_coord.x <= self.max_x
            && tile_coord.y >= self.min_y
            && tile_coord.y <= self.max_y
    }
    /// Number of tile columns, saturating at `u64::MAX`
    pub fn width(&self) -> u64 {
        index_span(self.min_x, self.max_x)
    }
    /// Number of tile rows, saturating at `u64::MAX`
    pub fn height(&self) -> u64 {
        index_span(self.min_y, self.max_y)
    }
    /// All tiles within the bounds, column by column
    pub fn iter(&self) -> TileBoundsIter {
        TileBoundsIter::new(*self)
    }
}

/// Tiling anchor, i.e. the point aligned with tile index (0, 0)
#[derive(PartialEq, Clone, Debug)]
pub enum Origin {
    /// Same origin at every zoom level
    Single(Point),
    /// One origin per zoom level, for pyramids whose levels are not nested
    PerLevel(Vec<Point>),
}

/// Tile grid
#[derive(Clone, Debug)]
pub struct TileGrid {
    /// This is a list of resolutions for each of the zoom levels defined by the grid,
    /// ordered from largest to smallest. The largest value corresponds to zoom level 0.
    /// Resolutions are expressed in map units per pixel.
    resolutions: Vec<f64>,
    /// Full spatial bounds of the pyramid. Tile indices are not clamped to it.
    extent: Extent,
    origin: Origin,
    tile_size: Size,
}

impl TileGrid {
    /// Grid with validated resolutions and origin(s). `tile_size` defaults to 256x256.
    pub fn new(
        resolutions: Vec<f64>,
        extent: Extent,
        origin: Origin,
        tile_size: Option<Size>,
    ) -> Result<TileGrid, GridError> {
        if resolutions.is_empty() {
            return Err(invalid_config("at least one resolution required"));
        }
        if resolutions.len() > MAX_LEVELS {
            return Err(invalid_config(format!(
                "{} resolutions exceed the maximum of {} zoom levels",
                resolutions.len(),
                MAX_LEVELS
            )));
        }
        if let Some(res) = resolutions.iter().find(|res| !(res.is_finite() && **res > 0.0)) {
            return Err(invalid_config(format!(
                "resolution {} is not a positive number",
                res
            )));
        }
        if let Some(pair) = resolutions.windows(2).find(|pair| pair[0] <= pair[1]) {
            return Err(invalid_config(format!(
                "resolutions must be strictly decreasing ({} followed by {})",
                pair[0], pair[1]
            )));
        }
        if let Origin::PerLevel(ref origins) = origin {
            if origins.len() != resolutions.len() {
                return Err(invalid_config(format!(
                    "{} origins given for {} resolutions",
                    origins.len(),
                    resolutions.len()
                )));
            }
        }
        let tile_size = tile_size.unwrap_or_default();
        if tile_size.width == 0 || tile_size.height == 0 {
            return Err(invalid_config("tile size must not be zero"));
        }
        Ok(TileGrid::build(resolutions, extent, origin, tile_size))
    }

    fn build(resolutions: Vec<f64>, extent: Extent, origin: Origin, tile_size: Size) -> TileGrid {
        debug!(
            "TileGrid with {} levels, {} origin, {}x{} tiles",
            resolutions.len(),
            match origin {
                Origin::Single(_) => "single",
                Origin::PerLevel(_) => "per-level",
            },
            tile_size.width,
            tile_size.height
        );
        TileGrid {
            resolutions,
            extent,
            origin,
            tile_size,
        }
    }

    /// Web Mercator grid (Google maps compatible) with zoom levels 0 to `max_zoom`
    pub fn web_mercator(max_zoom: u8) -> TileGrid {
        const HALF_SIZE: f64 = WEB_MERCATOR_HALF_SIZE;
        let resolutions = (0..=max_zoom)
            .map(|z| HALF_SIZE / (128.0 * (z as f64).exp2()))
            .collect();
        TileGrid::build(
            resolutions,
            Extent::new(HALF_SIZE, HALF_SIZE, -HALF_SIZE, -HALF_SIZE),
            Origin::Single(Point::new(-HALF_SIZE, HALF_SIZE)),
            Size::default(),
        )
    }

    /// WGS84 grid with two tiles at level 0 and zoom levels 0 to `max_zoom`
    pub fn wgs84(max_zoom: u8) -> TileGrid {
        let resolutions = (0..=max_zoom)
            .map(|z| WGS84_RESOLUTION_Z0 / (z as f64).exp2())
            .collect();
        TileGrid::build(
            resolutions,
            Extent::new(90.0, 180.0, -90.0, -180.0),
            Origin::Single(Point::new(-180.0, 90.0)),
            Size::default(),
        )
    }

    pub fn level_count(&self) -> usize {
        self.resolutions.len()
    }
    pub fn min_zoom(&self) -> u8 {
        0
    }
    pub fn max_zoom(&self) -> u8 {
        (self.resolutions.len() - 1) as u8
    }
    pub fn resolutions(&self) -> &[f64] {
        &self.resolutions
    }
    pub fn extent(&self) -> &Extent {
        &self.extent
    }
    pub fn tile_size(&self) -> Size {
        self.tile_size
    }
    pub fn origin_kind(&self) -> &Origin {
        &self.origin
    }

    /// Origin of zoom level `z`. A single shared origin is returned for any `z`.
    pub fn origin(&self, z: u8) -> Result<Point, GridError> {
        match self.origin {
            Origin::Single(origin) => Ok(origin),
            Origin::PerLevel(ref origins) => {
                let level = self.check_level(z)?;
                Ok(origins[level])
            }
        }
    }

    /// Map units per pixel at zoom level `z`
    pub fn resolution(&self, z: u8) -> Result<f64, GridError> {
        let level = self.check_level(z)?;
        Ok(self.resolutions[level])
    }

    pub fn tile_coord_resolution(&self, tile_coord: &TileCoord) -> Result<f64, GridError> {
        self.resolution(tile_coord.z)
    }

    /// Tile containing `point` at zoom level `z`. Points on a tile border belong
    /// to the tile whose lower-left corner lies on that border.
    /// Indices beyond the `i64` range saturate at `i64::MIN`/`i64::MAX`.
    pub fn tile_coord(&self, z: u8, point: &Point) -> Result<TileCoord, GridError> {
        let level = self.check_level(z)?;
        Ok(self.level_tile_coord(level, point))
    }

    /// Tile containing `point` at the zoom level nearest to `resolution`
    pub fn tile_coord_for_resolution(&self, point: &Point, resolution: f64) -> TileCoord {
        let z = self.z_for_resolution(resolution);
        self.level_tile_coord(z as usize, point)
    }

    /// Spatial extent covered by a tile
    pub fn tile_coord_extent(&self, tile_coord: &TileCoord) -> Result<Extent, GridError> {
        let level = self.check_level(tile_coord.z)?;
        let origin = self.level_origin(level);
        let (span_x, span_y) = self.tile_span(level);
        let left = origin.x + tile_coord.x as f64 * span_x;
        let bottom = origin.y + tile_coord.y as f64 * span_y;
        Ok(Extent {
            top: bottom + span_y,
            right: left + span_x,
            bottom,
            left,
        })
    }

    pub fn tile_coord_center(&self, tile_coord: &TileCoord) -> Result<Point, GridError> {
        let level = self.check_level(tile_coord.z)?;
        let origin = self.level_origin(level);
        let (span_x, span_y) = self.tile_span(level);
        Ok(Point {
            x: origin.x + (tile_coord.x as f64 + 0.5) * span_x,
            y: origin.y + (tile_coord.y as f64 + 0.5) * span_y,
        })
    }

    /// Tile index limits covering `extent` at zoom level `z`
    pub fn extent_tile_bounds(&self, z: u8, extent: &Extent) -> Result<TileBounds, GridError> {
        let level = self.check_level(z)?;
        Ok(self.level_extent_tile_bounds(level, extent))
    }

    /// Spatial extent covered by all tiles within `bounds`
    pub fn tile_bounds_extent(&self, bounds: &TileBounds) -> Result<Extent, GridError> {
        let level = self.check_level(bounds.z)?;
        let origin = self.level_origin(level);
        let (span_x, span_y) = self.tile_span(level);
        Ok(Extent {
            top: origin.y + (bounds.max_y as f64 + 1.0) * span_y,
            right: origin.x + (bounds.max_x as f64 + 1.0) * span_x,
            bottom: origin.y + bounds.min_y as f64 * span_y,
            left: origin.x + bounds.min_x as f64 * span_x,
        })
    }

    /// Tile bounds covering `tile_coord` at each coarser level, from `z - 1` down to 0
    pub fn ancestors(&self, tile_coord: &TileCoord) -> Result<Ancestors<'_>, GridError> {
        let extent = self.tile_coord_extent(tile_coord)?;
        Ok(Ancestors::new(self, extent, tile_coord.z))
    }

    /// Calls `visit` with the bounds of each ancestor level until it returns `true`.
    /// Returns whether the traversal was stopped by `visit`.
    pub fn for_each_ancestor<F>(
        &self,
        tile_coord: &TileCoord,
        mut visit: F,
    ) -> Result<bool, GridError>
    where
        F: FnMut(u8, &TileBounds) -> bool,
    {
        Ok(self.ancestors(tile_coord)?.any(|bounds| visit(bounds.z, &bounds)))
    }

    /// Zoom level whose resolution is nearest to `resolution`.
    /// Ties go to the finer level.
    pub fn z_for_resolution(&self, resolution: f64) -> u8 {
        for (z, res) in self.resolutions.iter().enumerate() {
            if *res == resolution {
                return z as u8;
            }
            if *res < resolution {
                if z == 0 {
                    return 0;
                }
                let coarser = self.resolutions[z - 1];
                return if (resolution - res).abs() <= (resolution - coarser).abs() {
                    z as u8
                } else {
                    (z - 1) as u8
                };
            }
        }
        self.max_zoom()
    }

    fn check_level(&self, z: u8) -> Result<usize, GridError> {
        let level = z as usize;
        if level < self.resolutions.len() {
            Ok(level)
        } else {
            Err(GridError::IndexOutOfRange {
                z,
                levels: self.resolutions.len(),
            })
        }
    }

    fn level_origin(&self, level: usize) -> Point {
        match self.origin {
            Origin::Single(origin) => origin,
            Origin::PerLevel(ref origins) => origins[level],
        }
    }

    /// Tile width and height in map units
    fn tile_span(&self, level: usize) -> (f64, f64) {
        let res = self.resolutions[level];
        (
            self.tile_size.width as f64 * res,
            self.tile_size.height as f64 * res,
        )
    }

    fn level_tile_coord(&self, level: usize, point: &Point) -> TileCoord {
        let origin = self.level_origin(level);
        let (span_x, span_y) = self.tile_span(level);
        TileCoord {
            z: level as u8,
            x: ((point.x - origin.x) / span_x).floor() as i64,
            y: ((point.y - origin.y) / span_y).floor() as i64,
        }
    }

    pub(crate) fn level_extent_tile_bounds(&self, level: usize, extent: &Extent) -> TileBounds {
        let top_right = self.level_tile_coord(level, &Point::new(extent.right, extent.top));
        let bottom_left = self.level_tile_coord(level, &Point::new(extent.left, extent.bottom));
        TileBounds {
            z: level as u8,
            min_x: top_right.x.min(bottom_left.x),
            max_x: top_right.x.max(bottom_left.x),
            min_y: top_right.y.min(bottom_left.y),
            max_y: top_right.y.max(bottom_left.y),
        }
    }
}

/// Inclusive index count from `min` to `max`
fn index_span(min: i64, max: i64) -> u64 {
    (i128::from(max) - i128::from(min) + 1).max(0).min(u64::MAX as i128) as u64
}

fn invalid_config<S: Into<String>>(msg: S) -> GridError {
    GridError::InvalidConfig(msg.into())
}
