//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid configuration

use crate::error::GridError;
use crate::grid::{Extent, Origin, Point, Size, TileGrid, DEFAULT_TILE_SIZE};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::File;
use std::io::prelude::*;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, GridError>;
    /// Generate configuration template
    fn gen_config() -> String;
}

#[derive(Deserialize, Clone, Debug)]
pub struct GridCfg {
    /// Name of a predefined grid (`web_mercator` or `wgs84`)
    pub predefined: Option<String>,
    /// Highest zoom level of a predefined grid
    pub maxzoom: Option<u8>,
    pub user: Option<UserGridCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct UserGridCfg {
    /// The width and height of an individual tile, in pixels.
    #[serde(default = "default_tile_size")]
    pub width: u32,
    #[serde(default = "default_tile_size")]
    pub height: u32,
    /// Full spatial bounds of the pyramid, in map units.
    pub extent: ExtentCfg,
    /// This is a list of resolutions for each of the zoom levels defined by the grid.
    /// This must be supplied as a list of positive floating point values, ordered from largest to smallest.
    /// The largest value will correspond to the grid’s zoom level 0.
    #[serde(default)]
    pub resolutions: Vec<f64>,
    /// Origin (x, y) shared by all zoom levels
    pub origin: Option<(f64, f64)>,
    /// One origin (x, y) per zoom level
    pub origins: Option<Vec<(f64, f64)>>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ExtentCfg {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE
}

impl From<&ExtentCfg> for Extent {
    fn from(cfg: &ExtentCfg) -> Extent {
        Extent {
            top: cfg.top,
            right: cfg.right,
            bottom: cfg.bottom,
            left: cfg.left,
        }
    }
}

impl UserGridCfg {
    fn grid_origin(&self) -> Result<Origin, GridError> {
        match (self.origin, &self.origins) {
            (Some((x, y)), None) => Ok(Origin::Single(Point::new(x, y))),
            (None, Some(origins)) => Ok(Origin::PerLevel(
                origins.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            )),
            (Some(_), Some(_)) => Err(GridError::InvalidConfig(
                "Either 'origin' or 'origins' expected, not both".to_string(),
            )),
            (None, None) => Err(GridError::InvalidConfig(
                "Missing grid 'origin' or 'origins'".to_string(),
            )),
        }
    }
}

impl<'a> Config<'a, GridCfg> for TileGrid {
    fn from_config(grid_cfg: &GridCfg) -> Result<Self, GridError> {
        let grid = if let Some(ref gridname) = grid_cfg.predefined {
            match gridname.as_str() {
                "web_mercator" => Ok(TileGrid::web_mercator(grid_cfg.maxzoom.unwrap_or(22))),
                "wgs84" => Ok(TileGrid::wgs84(grid_cfg.maxzoom.unwrap_or(17))),
                _ => Err(GridError::InvalidConfig(format!("Unknown grid '{}'", gridname))),
            }
        } else if let Some(ref usergrid) = grid_cfg.user {
            usergrid.grid_origin().and_then(|origin| {
                TileGrid::new(
                    usergrid.resolutions.clone(),
                    Extent::from(&usergrid.extent),
                    origin,
                    Some(Size {
                        width: usergrid.width,
                        height: usergrid.height,
                    }),
                )
            })
        } else {
            Err(GridError::InvalidConfig("Invalid grid definition".to_string()))
        };
        match grid {
            Ok(ref grid) => debug!("Grid with {} levels loaded", grid.level_count()),
            Err(ref e) => warn!("{}", e),
        }
        grid
    }
    fn gen_config() -> String {
        let toml = r#"
[grid]
predefined = "web_mercator"
maxzoom = 22
"#;
        toml.to_string()
    }
}

/// Load and parse the config file into an config struct.
pub fn read_config<T: DeserializeOwned>(path: &str) -> Result<T, GridError> {
    let mut file = File::open(path)?;
    let mut config_toml = String::new();
    file.read_to_string(&mut config_toml)?;
    parse_config(&config_toml)
}

/// Parse the configuration into an config struct.
pub fn parse_config<T: DeserializeOwned>(config_toml: &str) -> Result<T, GridError> {
    toml::from_str::<T>(config_toml).map_err(|err| GridError::InvalidConfig(err.to_string()))
}
