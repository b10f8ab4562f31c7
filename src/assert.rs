pub fn assert_same_type<T, U>(_: &T, _: &U) {}
pub fn assert_type<T>(_: &T) {}

macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
pub(crate) use current_location;

macro_rules! check {
    ($cond:expr) => {{
        let cond = $cond;
        $crate::assert::assert_type::<bool>(&cond);
        if !cond {
            panic!(
                "check failed: {}: {}",
                $crate::assert::current_location!(),
                stringify!($cond),
            );
        }
    }};
}
pub(crate) use check;

// Shared body of the binary checks: `$holds` decides, `$op` only labels the panic message.
macro_rules! check_binary {
    ($lhs:expr, $rhs:expr, $op:literal, |$l:ident, $r:ident| $holds:expr) => {{
        let $l = $lhs;
        let $r = $rhs;
        $crate::assert::assert_same_type(&$l, &$r);
        if !$holds {
            panic!(
                "check failed: {}: {} {} {}: {:?} vs. {:?}",
                $crate::assert::current_location!(),
                stringify!($lhs),
                $op,
                stringify!($rhs),
                $l,
                $r
            );
        }
    }};
}
pub(crate) use check_binary;

macro_rules! check_ge {
    ($lhs:expr, $rhs:expr) => {
        $crate::assert::check_binary!($lhs, $rhs, ">=", |l, r| l >= r)
    };
}
pub(crate) use check_ge;

macro_rules! check_eq {
    ($lhs:expr, $rhs:expr) => {
        $crate::assert::check_binary!($lhs, $rhs, "==", |l, r| l == r)
    };
}
pub(crate) use check_eq;

macro_rules! check_almost_eq {
    ($lhs:expr, $rhs:expr) => {
        $crate::assert::check_binary!($lhs, $rhs, "~=", |l, r| {
            $crate::util::vec_float::AlmostEq::almost_eq(&l, r)
        })
    };
}
pub(crate) use check_almost_eq;
