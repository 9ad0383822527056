//! C-ABI wrapper around `basic-get-core`.
//!
//! # Overview
//! Lets any language with a C FFI build single-parameter GET URLs and route
//! the response its own HTTP stack received into a registered C callback.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - A request handle is single-use. `basic_get_on_response` consumes and
//!   frees it; `basic_get_request_free` releases one that was never answered.
//! - Strings returned to C are owned by the caller and released with
//!   `basic_get_free_string`.

pub mod types;

use std::ffi::{c_void, CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use types::*;

/// Read a borrowed C string as UTF-8. Returns `None` for null or invalid UTF-8.
fn read_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

// ---------------------------------------------------------------------------
// Request lifecycle
// ---------------------------------------------------------------------------

/// Create a GET request that will deliver its response to `callback`.
///
/// Returns null if any pointer argument or `callback` is null, if a string is
/// not valid UTF-8, if `base_url` or `parameter_name` is empty, or if an
/// internal panic occurs. `parameter_value` may be empty; it is used verbatim
/// and must already be percent-encoded.
#[unsafe(no_mangle)]
pub extern "C" fn basic_get_request_new(
    base_url: *const c_char,
    parameter_name: *const c_char,
    parameter_value: *const c_char,
    callback: FfiResponseCallback,
    user_data: *mut c_void,
) -> *mut FfiGetRequest {
    catch_unwind(|| {
        let (Some(base_url), Some(parameter_name), Some(parameter_value), Some(func)) = (
            read_str(base_url),
            read_str(parameter_name),
            read_str(parameter_value),
            callback,
        ) else {
            return std::ptr::null_mut();
        };
        if base_url.is_empty() || parameter_name.is_empty() {
            return std::ptr::null_mut();
        }
        Box::into_raw(Box::new(FfiGetRequest {
            base_url: base_url.to_string(),
            parameter_name: parameter_name.to_string(),
            parameter_value: parameter_value.to_string(),
            callback: CCallback::new(func, user_data),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a request that never received a response. Safe to call with null.
/// The callback is not invoked.
#[unsafe(no_mangle)]
pub extern "C" fn basic_get_request_free(request: *mut FfiGetRequest) {
    if !request.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(request) });
        });
    }
}

// ---------------------------------------------------------------------------
// URL building
// ---------------------------------------------------------------------------

/// Build `<base_url>?<parameter_name>=<parameter_value>` for `request`.
///
/// Returns null if `request` is null. The caller must free the returned
/// string with `basic_get_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn basic_get_build_url(request: *const FfiGetRequest) -> *mut c_char {
    catch_unwind(|| {
        if request.is_null() {
            return std::ptr::null_mut();
        }
        let request = unsafe { &*request };
        CString::new(request.as_core().build_url())
            .map(CString::into_raw)
            .unwrap_or(std::ptr::null_mut())
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Response delivery
// ---------------------------------------------------------------------------

/// Deliver the response for `request` to its callback, then free `request`.
///
/// `status` and `body` are passed through unchanged; a null `body` is
/// delivered as an empty string. `request` must not be used after this call,
/// even on error.
#[unsafe(no_mangle)]
pub extern "C" fn basic_get_on_response(
    request: *mut FfiGetRequest,
    status: u16,
    body: *const c_char,
) -> FfiErrorCode {
    if request.is_null() {
        return FfiErrorCode::NullArg;
    }
    catch_unwind(|| {
        let request = unsafe { Box::from_raw(request) };
        let body = if body.is_null() {
            std::borrow::Cow::Borrowed("")
        } else {
            unsafe { CStr::from_ptr(body) }.to_string_lossy()
        };
        request.as_core().on_response(status, &body);
        FfiErrorCode::Ok
    })
    .unwrap_or(FfiErrorCode::Panic)
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn basic_get_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
