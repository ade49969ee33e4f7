//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use thiserror::Error;

/// Tile grid errors
#[derive(Error, Debug)]
pub enum GridError {
    /// Rejected grid definition (resolutions, origin(s), tile size or configuration file)
    #[error("Invalid grid configuration: {0}")]
    InvalidConfig(String),

    /// Zoom level outside `0..levels`
    #[error("Zoom level {z} out of range (grid has {levels} levels)")]
    IndexOutOfRange { z: u8, levels: usize },

    /// Reading a configuration file failed
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
