/// Relative tolerance used when comparing vector components for equality.
pub const REL_TOLERANCE: f64 = 1e-9;
/// Absolute tolerance used when comparing vector components for equality. Only matters for
/// values near zero, where the relative tolerance shrinks to nothing.
pub const ABS_TOLERANCE: f64 = 1e-12;
/// Significant decimal digits kept when hashing components at or above
/// `ABS_TOLERANCE / REL_TOLERANCE`. Must stay coarser than [`REL_TOLERANCE`].
pub const HASH_SIGNIFICANT_DIGITS: i32 = 8;
/// Grid that components below `ABS_TOLERANCE / REL_TOLERANCE` snap to when hashing. Must stay
/// coarser than [`ABS_TOLERANCE`].
pub const HASH_ABS_GRID: f64 = 1e-11;
