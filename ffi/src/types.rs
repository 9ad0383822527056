//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! The C side owns its callback state through an opaque `user_data` pointer
//! and a plain function pointer. `CCallback` pairs the two and adapts them to
//! the core `ResponseHandler` trait so the request logic is shared with
//! Rust callers rather than duplicated here.

use std::ffi::{c_void, CString};
use std::os::raw::c_char;

use basic_get_core::{GetRequest, ResponseHandler};

/// Function the C caller registers to receive the response.
///
/// `body` is only valid for the duration of the call; copy it if needed.
pub type FfiResponseCallback =
    Option<extern "C" fn(user_data: *mut c_void, status: u16, body: *const c_char)>;

/// Status codes returned by FFI functions that do not return a pointer.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    NullArg = 1,
    Panic = 2,
}

/// C function pointer plus the caller's context pointer.
pub(crate) struct CCallback {
    func: extern "C" fn(*mut c_void, u16, *const c_char),
    user_data: *mut c_void,
}

// The C caller guarantees `user_data` may be used from whichever thread
// delivers the response; the pointer itself is never dereferenced here.
unsafe impl Send for CCallback {}
unsafe impl Sync for CCallback {}

impl CCallback {
    pub(crate) fn new(func: extern "C" fn(*mut c_void, u16, *const c_char), user_data: *mut c_void) -> Self {
        Self { func, user_data }
    }
}

impl ResponseHandler for CCallback {
    fn on_response(&self, status: u16, body: &str) {
        // A C string ends at the first NUL, so anything after it is unreachable anyway.
        let visible = body.split('\0').next().unwrap_or_default();
        let body = CString::new(visible).unwrap_or_default();
        (self.func)(self.user_data, status, body.as_ptr());
    }
}

/// Opaque handle to one pending GET request. C callers receive a pointer to
/// this from `basic_get_request_new` and release it either by delivering a
/// response or by calling `basic_get_request_free`.
pub struct FfiGetRequest {
    pub(crate) base_url: String,
    pub(crate) parameter_name: String,
    pub(crate) parameter_value: String,
    pub(crate) callback: CCallback,
}

impl FfiGetRequest {
    /// Borrow this handle as a core request delivering to the C callback.
    pub(crate) fn as_core(&self) -> GetRequest<'_> {
        GetRequest::new(
            self.base_url.as_str(),
            self.parameter_name.as_str(),
            self.parameter_value.as_str(),
            &self.callback,
        )
    }
}
