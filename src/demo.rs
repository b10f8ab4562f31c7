use crate::assert::*;
use crate::core::prelude::*;
use crate::util::vec_float::AlmostEq;
use std::f64::consts::FRAC_PI_3;
use std::fmt::Write;

const SEPARATOR_WIDTH: usize = 50;

fn write_separator(out: &mut String) -> Result<()> {
    writeln!(out, "\n{}\n", "=".repeat(SEPARATOR_WIDTH))?;
    Ok(())
}

/// Renders the walkthrough of every [`Vector2D`] operation for a pair of vectors.
///
/// # Errors
/// Fails if either vector is the zero vector, which has no argument or normalisation.
pub fn report(v1: Vector2D, v2: Vector2D) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Vector 1: {v1}")?;
    writeln!(out, "Vector 2: {v2}")?;
    for (label, v) in [("Vector 1", v1), ("Vector 2", v2)] {
        writeln!(out, "Magnitude of {label}: {:?}", v.magnitude())?;
        let argument = v
            .argument()
            .with_context(|| format!("argument of {label}"))?;
        writeln!(out, "Argument of {label}: {argument:?}")?;
    }
    for (label, v) in [("Vector 1", v1), ("Vector 2", v2)] {
        let normalized = v
            .normalize()
            .with_context(|| format!("normalization of {label}"))?;
        writeln!(out, "Normalization of {label}: {normalized}")?;
    }
    write_separator(&mut out)?;

    writeln!(out, "Addition: {}", v1 + v2)?;
    writeln!(out, "Subtraction: {}", v1 - v2)?;
    writeln!(out, "Multiplication by scalar: {}", v1 * 2.0)?;
    writeln!(out, "Division by scalar: {}", (v1 / 2.0)?)?;
    writeln!(out, "Equality check: {}", v1 == v2)?;
    write_separator(&mut out)?;

    writeln!(out, "Dot product: {:?}", v1.dot(v2))?;
    writeln!(out, "Cross product: {:?}", v1.cross(v2))?;
    write_separator(&mut out)?;

    let euler = Vector2D::euler(5.0, FRAC_PI_3);
    writeln!(out, "Euler vector with magnitude 5 and angle pi/3: {euler}")?;
    Ok(out)
}

/// Checks the worked example of `(3, 4)` and `(1, 2)` before anything is printed.
///
/// Panics with the failing expression and its location if any operation misbehaves.
pub fn run_sanity_checks() {
    let v1 = Vector2D::new(3.0, 4.0);
    let v2 = Vector2D::new(1.0, 2.0);
    check_almost_eq!(v1.magnitude(), 5.0);
    check_ge!(v2.magnitude(), 0.0);
    check_eq!(v1 + v2, Vector2D::new(4.0, 6.0));
    check_eq!(v1 - v2, Vector2D::new(2.0, 2.0));
    check_eq!(v1 * 2.0, Vector2D::new(6.0, 8.0));
    check_eq!(2.0 * v1, v1 * 2.0);
    check_eq!(v1 / 2.0, Ok(Vector2D::new(1.5, 2.0)));
    check_almost_eq!(v1.dot(v2), 11.0);
    check_almost_eq!(v1.cross(v2), 2.0);
    check_almost_eq!(v1.cross(v2), -v2.cross(v1));
    check_almost_eq!(Vector2D::euler(5.0, FRAC_PI_3), Vector2D::new(2.5, 4.330_127_018_922_193));
    check!(v1.normalize().is_ok_and(|unit| unit.magnitude().almost_eq(1.0)));
    check_eq!(v1 / 0.0, Err(VectorError::DivisionByZero));
    check!(Vector2D::zero().argument().is_err());
    check!(Vector2D::zero().normalize().is_err());
    info!("sanity checks passed");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_vector(rendered: &str) -> (f64, f64) {
        let inner = rendered
            .strip_prefix("Vector2D(x=")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap();
        let (x, y) = inner.split_once(", y=").unwrap();
        (x.parse().unwrap(), y.parse().unwrap())
    }

    #[test]
    fn report_lists_every_operation() {
        let out = report(Vector2D::new(3.0, 4.0), Vector2D::new(1.0, 2.0)).unwrap();
        let lines: Vec<&str> = out.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines[0], "Vector 1: Vector2D(x=3.0, y=4.0)");
        assert_eq!(lines[1], "Vector 2: Vector2D(x=1.0, y=2.0)");
        assert_eq!(lines[2], "Magnitude of Vector 1: 5.0");
        assert!(lines[3].starts_with("Argument of Vector 1: 0.927"));
        assert!(lines[5].starts_with("Argument of Vector 2: 1.107"));
        assert_eq!(lines[6], "Normalization of Vector 1: Vector2D(x=0.6, y=0.8)");
        assert!(lines[7].starts_with("Normalization of Vector 2: Vector2D(x=0.447"));
        assert_eq!(lines[8], "=".repeat(SEPARATOR_WIDTH));
        assert_eq!(lines[9], "Addition: Vector2D(x=4.0, y=6.0)");
        assert_eq!(lines[10], "Subtraction: Vector2D(x=2.0, y=2.0)");
        assert_eq!(lines[11], "Multiplication by scalar: Vector2D(x=6.0, y=8.0)");
        assert_eq!(lines[12], "Division by scalar: Vector2D(x=1.5, y=2.0)");
        assert_eq!(lines[13], "Equality check: false");
        assert_eq!(lines[15], "Dot product: 11.0");
        assert_eq!(lines[16], "Cross product: 2.0");
        assert_eq!(lines.len(), 19);
    }

    #[test]
    fn report_renders_euler_vector() {
        let out = report(Vector2D::new(3.0, 4.0), Vector2D::new(1.0, 2.0)).unwrap();
        let line = out.lines().last().unwrap();
        let rendered = line
            .strip_prefix("Euler vector with magnitude 5 and angle pi/3: ")
            .unwrap();
        let (x, y) = parse_vector(rendered);
        assert!(vec_float::is_close(x, 2.5), "x = {x}");
        assert!(vec_float::is_close(y, 4.330_127_018_922_193), "y = {y}");
    }

    #[test]
    fn report_fails_for_zero_vector() {
        let err = report(Vector2D::new(3.0, 4.0), Vector2D::zero()).unwrap_err();
        assert_eq!(err.to_string(), "argument of Vector 2");
        assert_eq!(
            err.downcast_ref::<VectorError>(),
            Some(&VectorError::UndefinedOperation { operation: "argument" })
        );
    }

    #[test]
    fn sanity_checks_pass() {
        run_sanity_checks();
    }
}
