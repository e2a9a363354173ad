use assert_approx_eq::assert_approx_eq;
use trigrid::{GridConfig, Side, TriPoint, VertexPoint, WorldPoint};

#[test]
fn test_to_world_default_config() {
    let config = GridConfig::default();

    let world = TriPoint::new(1, 0, Side::Up).to_world(&config);
    assert_approx_eq!(world.x, 173.20508075689);
    assert_approx_eq!(world.y, 0.0);

    // One row north shifts east by half a side
    let world = TriPoint::new(0, 2, Side::Up).to_world(&config);
    assert_approx_eq!(world.x, 173.20508075689);
    assert_approx_eq!(world.y, 300.0);

    // Both halves of a rhombus share the origin corner
    assert_eq!(
        TriPoint::new(3, 4, Side::Up).to_world(&config),
        TriPoint::new(3, 4, Side::Down).to_world(&config),
    );
}

#[test]
fn test_from_world_origin() {
    let config = GridConfig::default();
    assert_eq!(
        TriPoint::from_world(WorldPoint { x: 0.0, y: 0.0 }, &config),
        TriPoint::ORIGIN
    );
}

#[test]
fn test_from_world_picks_side() {
    let config = GridConfig::equilateral(1.0);
    // Near the origin corner of the rhombus: the up half
    assert_eq!(
        TriPoint::from_world(WorldPoint { x: 0.3, y: 0.1 }, &config),
        TriPoint::new(0, 0, Side::Up)
    );
    // Past the diagonal: the down half of the same rhombus
    assert_eq!(
        TriPoint::from_world(WorldPoint { x: 0.95, y: 0.78 }, &config),
        TriPoint::new(0, 0, Side::Down)
    );
}

#[test]
fn test_from_world_floors_negative_coordinates() {
    let config = GridConfig::default();
    // A point just southwest of the origin is in cell (-1, -1), not (0, 0)
    assert_eq!(
        TriPoint::from_world(WorldPoint { x: -10.0, y: -10.0 }, &config),
        TriPoint::new(-1, -1, Side::Down)
    );
    // Straddling zero on x only
    assert_eq!(
        TriPoint::from_world(WorldPoint { x: -1.0, y: 1.0 }, &config),
        TriPoint::new(-1, 0, Side::Up)
    );
}

#[test]
fn test_centroid_round_trip() {
    let configs = [
        GridConfig::default(),
        GridConfig::equilateral(1.0),
        // Vertically stretched lattice
        GridConfig {
            side_len: 50.0,
            height: 75.0,
        },
    ];
    for config in &configs {
        for x in -3..=3 {
            for y in -3..=3 {
                for side in [Side::Up, Side::Down] {
                    let point = TriPoint::new(x, y, side);
                    assert_eq!(
                        TriPoint::from_world(point.centroid(config), config),
                        point,
                        "center of {point} did not map back with config \
                         {config:?}",
                    );
                }
            }
        }
    }
}

#[test]
fn test_centroid_position() {
    let config = GridConfig::default();

    let center = TriPoint::ORIGIN.centroid(&config);
    assert_approx_eq!(center.x, config.side_len / 2.0);
    assert_approx_eq!(center.y, config.height / 3.0);

    let center = TriPoint::new(0, 0, Side::Down).centroid(&config);
    assert_approx_eq!(center.x, config.side_len);
    assert_approx_eq!(center.y, config.height * 2.0 / 3.0);
}

#[test]
fn test_vertex_to_world_matches_cell_corner() {
    let config = GridConfig::default();
    for x in -2..=2 {
        for y in -2..=2 {
            assert_eq!(
                VertexPoint::new(x, y).to_world(&config),
                TriPoint::new(x, y, Side::Up).to_world(&config),
            );
        }
    }
}
