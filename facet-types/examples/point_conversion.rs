//! This example converts a point to the geometry kernel representation and back, and logs both
//! results.
//!
//! ```shell
//! cargo run --example point_conversion
//! ```

use facet_kernel::{AnyPoint, Point3, SimpleCartesian};
use facet_types::{to_foreign, to_host, try_to_host, Point};

type CgalPoint = Point3<SimpleCartesian<f64>>;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let p = Point::<3>::new(1.0, 2.0, 3.0);
    let cgal_point: CgalPoint = to_foreign(&p);
    log::info!("CGAL Point: {cgal_point}");

    let cgal_point = CgalPoint::new(1.0, 2.0, 3.0);
    let deal_ii_point: Point<3> = to_host(&cgal_point);
    log::info!("deal.II Point: {deal_ii_point}");

    // Dimension of `AnyPoint` is checked at run time
    let any_point = AnyPoint::from(cgal_point);
    match try_to_host::<2, _>(&any_point) {
        Ok(point) => log::info!("2d point: {point}"),
        Err(err) => log::warn!("{err}"),
    }
}
