//! Foundation value conversions shared by the host adapters.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use objc::runtime::Object;
use objc::{class, msg_send, sel, sel_impl};

use crate::failure::TestFailure;

pub(crate) type Id = *mut Object;

/// Autoreleased `NSString` from a Rust string.
///
/// Interior NUL bytes cannot cross the C boundary; a string containing
/// one converts as empty.
pub(crate) fn nsstring(s: &str) -> Id {
    let c = CString::new(s).unwrap_or_default();
    unsafe { msg_send![class!(NSString), stringWithUTF8String: c.as_ptr()] }
}

/// `NSString` for a named test, `nil` for the unnamed path.
pub(crate) fn nsstring_or_nil(s: Option<&str>) -> Id {
    match s {
        Some(s) => nsstring(s),
        None => ptr::null_mut(),
    }
}

/// `NSError` carrying the diagnostic's domain, code, and message.
pub(crate) fn nserror(failure: &TestFailure) -> Id {
    let domain = nsstring(failure.domain.as_deref().unwrap_or("TrellisTestFailure"));
    let code = failure.code.unwrap_or(0) as isize;
    let description = nsstring(&failure.message);
    let key = nsstring("NSLocalizedDescription");
    unsafe {
        let user_info: Id =
            msg_send![class!(NSDictionary), dictionaryWithObject: description forKey: key];
        msg_send![class!(NSError), errorWithDomain: domain code: code userInfo: user_info]
    }
}

/// Owned Rust string from an `NSString`; `None` for `nil`.
pub(crate) fn string_from_nsstring(ns: Id) -> Option<String> {
    if ns.is_null() {
        return None;
    }
    unsafe {
        let bytes: *const c_char = msg_send![ns, UTF8String];
        if bytes.is_null() {
            return None;
        }
        Some(CStr::from_ptr(bytes).to_string_lossy().into_owned())
    }
}
