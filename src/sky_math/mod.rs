pub mod consts;
pub mod coords;
pub mod matrix;
pub mod sidereal;
pub mod convert;
pub mod misalignment;

pub use coords::*;
pub use matrix::*;
pub use sidereal::*;
pub use convert::*;
pub use misalignment::*;
