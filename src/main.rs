use vector2d::core::prelude::*;
use vector2d::{demo, util};

fn main() -> Result<()> {
    util::setup_log()?;
    demo::run_sanity_checks();

    let v1 = Vector2D::new(3.0, 4.0);
    let v2 = Vector2D::new(1.0, 2.0);
    info!("running demo for {} and {}", v1, v2);
    print!("{}", demo::report(v1, v2)?);
    Ok(())
}
