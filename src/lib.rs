#![allow(
    clippy::uninlined_format_args,
)]

pub mod sky_math;
pub mod sexagesimal;
pub mod error;
pub mod options;
pub mod io_utils;
pub mod log_utils;
