use beccs_core::{BeccsError, ValidationError};
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// This trait provides a unified way to handle errors across the FFI boundary,
/// allowing both simple error codes and custom error messages.
///
/// # Design
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait BeccsFfiError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> BeccsErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `BeccsFfiError` for every failure the C API reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultBeccsError {
    code: BeccsErrorCode,
    msg: String,
}

impl DefaultBeccsError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"input"`, `"out_result"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: BeccsErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a C string that is not valid UTF-8.
    ///
    /// # Arguments
    /// * `param_name` - The name of the string parameter
    pub fn invalid_utf8(param_name: &str) -> Self {
        Self {
            code: BeccsErrorCode::InvalidUtf8,
            msg: format!("Parameter '{param_name}' is not valid UTF-8"),
        }
    }

    /// Create error for an output buffer that cannot hold the data.
    ///
    /// # Arguments
    /// * `required` - Bytes needed, including the terminating null
    /// * `available` - Bytes the caller provided
    pub fn buffer_too_small(required: usize, available: usize) -> Self {
        Self {
            code: BeccsErrorCode::BufferTooSmall,
            msg: format!("Buffer too small: need {required} bytes, got {available}"),
        }
    }
}

impl BeccsFfiError for DefaultBeccsError {
    fn code(&self) -> BeccsErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

impl From<BeccsError> for DefaultBeccsError {
    fn from(error: BeccsError) -> Self {
        let code = match &error {
            BeccsError::Validation(ValidationError::EmptyBiomassType) => {
                BeccsErrorCode::EmptyBiomassType
            }
            BeccsError::Validation(ValidationError::NonPositiveQuantity { .. }) => {
                BeccsErrorCode::NonPositiveQuantity
            }
            _ => BeccsErrorCode::ComputationFailed,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

/// FFI error codes returned by BECCS calculator functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeccsErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// String parameter is not valid UTF-8.
    InvalidUtf8 = 2,

    /// Biomass type is empty or whitespace only.
    EmptyBiomassType = 3,

    /// Biomass quantity, calorific value or emission factor is not positive.
    NonPositiveQuantity = 4,

    /// The calculation produced a non-finite result.
    ComputationFailed = 5,

    /// Caller-provided output buffer is too small.
    BufferTooSmall = 6,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored to prevent memory leaks when returning raw pointers via FFI.
    static LAST_ERROR: RefCell<(Option<CString>, BeccsErrorCode)> = const { RefCell::new((None, BeccsErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, BeccsErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, BeccsErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded or no call has been made.
///
/// # Thread Safety
/// Error messages are stored per-thread (thread-local storage), so this is thread-safe.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// BeccsResult result;
/// BeccsErrorCode err = beccs_compute(&input, &result);
/// if (err != Ok) {
///     const char* error = beccs_get_last_error();
///     if (error) {
///         printf("BECCS calculation failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn beccs_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `Ok` (0) if the last call on this thread succeeded.
#[no_mangle]
pub extern "C" fn beccs_get_last_error_code() -> BeccsErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
