//! Builds a small route map and chains tangent arcs onto a straight lead-in.
//!
//! Usage:
//! ```text
//! cargo run --example chain                      # radius 5, sweep 90, clockwise
//! cargo run --example chain -- 12 45 ccw         # radius, sweep in degrees, sense
//! RUST_LOG=routarc=debug cargo run --example chain
//! ```

use routarc::geometry::StraightSegment;
use routarc::map::{Command, Node, NodeConnection, PointType, RouteMap};
use routarc::math::Point2;
use routarc::operations::creation::{ExtendConnection, TangentArc};
use routarc::operations::query::{IsChained, Length};
use routarc::tessellation::{TessellateConnection, TessellationParams};
use routarc::RouteError;

fn main() -> Result<(), RouteError> {
    // Default: WARN for everything, INFO for routarc.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("routarc=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let radius = args.first().and_then(|s| s.parse().ok()).unwrap_or(5.0);
    let degrees = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(90.0);
    let counter_clockwise = args.get(2).is_some_and(|s| s == "ccw");

    let mut map = RouteMap::new();
    let depot = map.add_node(
        Node::new(Point2::new(0.0, 0.0))
            .with_point_type(PointType::PrimaryTraffic)
            .with_command(Command::ChangeSpeed(8.0)),
    );
    let dock = map.add_node(
        Node::new(Point2::new(20.0, 0.0))
            .with_point_type(PointType::TrafficCheckOut)
            .with_command(Command::SetMode("unload".into())),
    );

    let lead_in = StraightSegment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
    let route = map.add_connection(
        NodeConnection::new(depot, dock, true).with_segments(vec![lead_in.into()]),
    )?;

    for sense in [counter_clockwise, !counter_clockwise] {
        let arc = ExtendConnection::new(route, TangentArc::new(radius, degrees, sense))
            .execute(&mut map)?;
        println!(
            "arc: start ({:.3}, {:.3}) center ({:.3}, {:.3}) end ({:.3}, {:.3}) sweep {:.3} rad",
            arc.start.x,
            arc.start.y,
            arc.center.x,
            arc.center.y,
            arc.end.x,
            arc.end.y,
            arc.sweep()
        );
    }

    println!("length: {:.3}", Length::new(route).execute(&map)?);
    println!("chained: {}", IsChained::new(route).execute(&map)?);

    let polyline = TessellateConnection::new(route, TessellationParams::default()).execute(&map)?;
    println!("polyline: {} points", polyline.points.len());
    Ok(())
}
