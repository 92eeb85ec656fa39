//! Straightens the route through a chain of five squares.
//!
//! ```text
//! cargo run --example corridor
//! RUST_LOG=corridor=trace cargo run --example corridor
//! ```

use corridor::{Point2, Polygon2, Portal, StringPull};

fn main() -> corridor::Result<()> {
    // Default: WARN for everything, INFO for corridor.
    // Override with RUST_LOG env var (e.g. RUST_LOG=corridor=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("corridor=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Three squares to the right, then two upwards.
    let a = Polygon2::new(vec![
        Point2::new(50.0, 50.0),
        Point2::new(100.0, 50.0),
        Point2::new(100.0, 100.0),
        Point2::new(50.0, 100.0),
    ])?;
    let b = a.offset(50.0, 0.0);
    let c = b.offset(50.0, 0.0);
    let d = c.offset(0.0, 50.0);

    let portals: Vec<Portal> = [
        a.outgoing_edge(1),
        b.outgoing_edge(1),
        c.outgoing_edge(2),
        d.outgoing_edge(2),
    ]
    .iter()
    .map(Portal::from_exit_edge)
    .collect();

    let path = StringPull::new(Point2::new(75.0, 75.0), Point2::new(175.0, 175.0), portals)
        .execute()?;

    for (i, leg) in path.legs().enumerate() {
        let (s, e) = (leg.start(), leg.end());
        println!("leg {i}: ({}, {}) -> ({}, {})", s.x, s.y, e.x, e.y);
    }
    println!("length: {:.3}", path.length());
    Ok(())
}
