pub mod core;
pub mod demo;
pub mod util;

pub(crate) mod assert;
