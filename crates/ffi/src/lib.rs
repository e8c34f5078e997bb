//! C ABI for the BECCS calculator
//!
//! Lets a presentation layer written in another language validate and
//! compute a BECCS run and obtain the CSV export. A C header (`BeccsFFI.h`)
//! is generated at the workspace root by `build.rs`.
//!
//! Errors are reported as [`BeccsErrorCode`] values; the message for the most
//! recent failure on the calling thread is available from
//! [`beccs_get_last_error`].

mod calculation;
mod error;
mod helpers;

pub use calculation::{beccs_compute, beccs_result_to_csv, BeccsInput, BeccsResult};
pub use error::{beccs_get_last_error, beccs_get_last_error_code, BeccsErrorCode};
