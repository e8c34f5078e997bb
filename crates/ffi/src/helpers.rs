use crate::error::{with_last_error_mut, BeccsErrorCode, BeccsFfiError};
use std::ffi::CString;

/// Record `error` as this thread's last failure and hand back its code,
/// so entry points can `return track_error(&e)` directly.
///
/// Messages come from validation text or from UTF-8 already read out of a
/// C string, so they never hold an interior null; if one ever did, the
/// code is still recorded and `beccs_get_last_error` returns null.
#[inline]
pub(crate) fn track_error(error: &impl BeccsFfiError) -> BeccsErrorCode {
    let code = error.code();
    with_last_error_mut(|(message, last_code)| {
        *message = CString::new(error.msg()).ok();
        *last_code = code;
    });
    code
}

/// Reset this thread's last failure after a successful call.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(message, last_code)| {
        *message = None;
        *last_code = BeccsErrorCode::Ok;
    });
}
