//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::config::{parse_config, read_config, Config, GridCfg};
use crate::error::GridError;
use crate::grid::{Extent, Origin, Point, Size, TileCoord, TileGrid};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn grid_from_toml(toml: &str) -> Result<TileGrid, GridError> {
    let config: GridCfg = parse_config(toml)?;
    TileGrid::from_config(&config)
}

#[test]
fn test_predefined_grid_from_config() {
    init_logger();

    let toml = r#"
        #[grid]
        predefined = "web_mercator"
        "#;
    let grid = grid_from_toml(toml).unwrap();
    assert_eq!(grid.level_count(), 23);
    assert_eq!(grid.extent(), TileGrid::web_mercator(0).extent());

    let toml = r#"
        predefined = "wgs84"
        maxzoom = 5
        "#;
    let grid = grid_from_toml(toml).unwrap();
    assert_eq!(grid.max_zoom(), 5);
    assert_eq!(grid.resolution(0).unwrap(), 0.703125);

    let toml = r#"
        predefined = "swiss"
        "#;
    match grid_from_toml(toml) {
        Err(GridError::InvalidConfig(msg)) => assert_eq!(msg, "Unknown grid 'swiss'"),
        r => panic!("unexpected result {:?}", r),
    }

    match grid_from_toml("") {
        Err(GridError::InvalidConfig(msg)) => assert_eq!(msg, "Invalid grid definition"),
        r => panic!("unexpected result {:?}", r),
    }
}

#[test]
fn test_user_grid_from_config() {
    init_logger();

    let toml = r#"
        #[grid.user]
        [user]
        width = 512
        extent = { top = 1350000.0, right = 2900000.0, bottom = 1030000.0, left = 2420000.0 }
        resolutions = [4000.0, 2000.0, 1000.0]
        origin = [2420000.0, 1350000.0]
        "#;
    let grid = grid_from_toml(toml).unwrap();
    assert_eq!(
        *grid.extent(),
        Extent {
            top: 1350000.0,
            right: 2900000.0,
            bottom: 1030000.0,
            left: 2420000.0,
        }
    );
    assert_eq!(
        grid.tile_size(),
        Size {
            width: 512,
            height: 256
        }
    );
    assert_eq!(
        grid.origin_kind(),
        &Origin::Single(Point::new(2420000.0, 1350000.0))
    );
    assert_eq!(
        grid.tile_coord(0, &Point::new(2676000.0, 1222000.0)).unwrap(),
        TileCoord::new(0, 0, -1)
    );

    let toml = r#"
        [user]
        extent = { top = 100.0, right = 100.0, bottom = 0.0, left = 0.0 }
        resolutions = [2.0, 1.0]
        origins = [[0.0, 0.0], [10.0, 20.0]]
        "#;
    let grid = grid_from_toml(toml).unwrap();
    assert_eq!(grid.origin(1).unwrap(), Point::new(10.0, 20.0));
    assert_eq!(
        grid.tile_coord_extent(&TileCoord::new(1, 0, 0)).unwrap(),
        Extent::new(276.0, 266.0, 20.0, 10.0)
    );
}

#[test]
fn test_invalid_user_grid() {
    init_logger();

    // origin and origins
    let toml = r#"
        [user]
        extent = { top = 100.0, right = 100.0, bottom = 0.0, left = 0.0 }
        resolutions = [2.0, 1.0]
        origin = [0.0, 0.0]
        origins = [[0.0, 0.0], [10.0, 20.0]]
        "#;
    assert!(matches!(
        grid_from_toml(toml),
        Err(GridError::InvalidConfig(_))
    ));

    // no origin
    let toml = r#"
        [user]
        extent = { top = 100.0, right = 100.0, bottom = 0.0, left = 0.0 }
        resolutions = [2.0, 1.0]
        "#;
    assert!(matches!(
        grid_from_toml(toml),
        Err(GridError::InvalidConfig(_))
    ));

    // origins count
    let toml = r#"
        [user]
        extent = { top = 100.0, right = 100.0, bottom = 0.0, left = 0.0 }
        resolutions = [2.0, 1.0, 0.5]
        origins = [[0.0, 0.0], [10.0, 20.0]]
        "#;
    assert!(matches!(
        grid_from_toml(toml),
        Err(GridError::InvalidConfig(_))
    ));

    // increasing resolutions
    let toml = r#"
        [user]
        extent = { top = 100.0, right = 100.0, bottom = 0.0, left = 0.0 }
        resolutions = [1.0, 2.0]
        origin = [0.0, 0.0]
        "#;
    assert!(matches!(
        grid_from_toml(toml),
        Err(GridError::InvalidConfig(_))
    ));

    // missing resolutions
    let toml = r#"
        [user]
        extent = { top = 100.0, right = 100.0, bottom = 0.0, left = 0.0 }
        origin = [0.0, 0.0]
        "#;
    assert!(matches!(
        grid_from_toml(toml),
        Err(GridError::InvalidConfig(_))
    ));

    // missing extent
    let toml = r#"
        [user]
        resolutions = [2.0, 1.0]
        origin = [0.0, 0.0]
        "#;
    assert!(matches!(
        grid_from_toml(toml),
        Err(GridError::InvalidConfig(_))
    ));
}

#[test]
fn test_gen_config() {
    #[derive(Deserialize)]
    struct ApplicationCfg {
        grid: GridCfg,
    }
    let config: ApplicationCfg = parse_config(&TileGrid::gen_config()).unwrap();
    let grid = TileGrid::from_config(&config.grid).unwrap();
    assert_eq!(grid.max_zoom(), 22);
}

#[test]
fn test_read_config() {
    match read_config::<GridCfg>("no/such/grid.toml") {
        Err(GridError::Io(_)) => {}
        r => panic!("unexpected result {:?}", r),
    }
}
