//! Prints a few kernel results for manual inspection.
//!
//! ```text
//! cargo run --example inspect
//! RUST_LOG=intersect3d=trace cargo run --example inspect
//! ```

use intersect3d::{
    line_line_intersect, line_plane_intersect, plane_plane_intersect, Line, Plane, Result,
    Vector3,
};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for intersect3d.
    // Override with RUST_LOG env var (e.g. RUST_LOG=intersect3d=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("intersect3d=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(3.0, 1.0, 2.0);
    println!("Dot product a*b = {}", a.dot(b));
    println!("Normalized b = {}", b.normalize()?);

    let l1 = Line::new(Vector3::ZERO, Vector3::new(1.0, 1.0, 0.0));
    let l2 = Line::new(Vector3::X, Vector3::Y);
    let ll = line_line_intersect(&l1, &l2)?;
    println!("line-line [{}]: {ll:?}", ll.code());

    let ground = Plane::new(Vector3::Z, 0.0);
    let vertical = Line::new(Vector3::new(0.0, 0.0, -1.0), Vector3::Z);
    let lp = line_plane_intersect(&vertical, &ground)?;
    println!("line-plane [{}]: {lp:?}", lp.code());

    let wall = Plane::new(Vector3::X, 0.0);
    let pp = plane_plane_intersect(&ground, &wall)?;
    println!("plane-plane [{}]: {pp:?}", pp.code());

    Ok(())
}
