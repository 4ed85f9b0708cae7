//! C interface for the camelCase transform
//!
//! Consumers that cannot hold a Rust [`Vec`] get the classic paired
//! shape instead: a transform that returns a heap array of NUL-terminated
//! strings closed by a NULL sentinel, and a release function that walks
//! the sentinel and frees everything the transform allocated. NULL is the
//! absence value on both sides of the boundary.
//!
//! Ownership is strict and unique: every array returned by
//! [`rakuda_camel_case`] must be handed back to [`rakuda_release`]
//! exactly once, and no pointer into it may be used afterwards.

#![warn(missing_docs)]

use std::ffi::{c_char, CStr, CString};
use std::ptr;

/// Transform a NUL-terminated input into a NULL-terminated token array
///
/// A NULL input is the absence value and maps to a NULL output with no
/// allocation. Any other input yields one NUL-terminated string per
/// sentence, in input order, followed by a NULL entry so the consumer can
/// discover the length without being told it. An input with no sentences
/// yields an array holding only the sentinel.
///
/// The returned array and every string in it are owned by the caller
/// until passed to [`rakuda_release`].
///
/// # Safety
///
/// `input`, when non-NULL, must point to a valid NUL-terminated string
/// that stays alive for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn rakuda_camel_case(input: *const c_char) -> *mut *mut c_char {
    if input.is_null() {
        return ptr::null_mut();
    }

    let bytes = CStr::from_ptr(input).to_bytes();
    let tokens = rakuda_core::camel_case(bytes);

    let mut out: Vec<*mut c_char> = Vec::with_capacity(tokens.len() + 1);
    for token in tokens {
        match CString::new(token) {
            Ok(string) => out.push(string.into_raw()),
            Err(_) => {
                // Tokens are drawn from a NUL-free C string, so an
                // interior NUL cannot occur; if it somehow does, release
                // everything built so far and report failure.
                for &built in &out {
                    drop(CString::from_raw(built));
                }
                return ptr::null_mut();
            }
        }
    }
    out.push(ptr::null_mut());

    Box::into_raw(out.into_boxed_slice()) as *mut *mut c_char
}

/// Release a token array produced by [`rakuda_camel_case`]
///
/// A NULL argument is a no-op. Otherwise the array is walked to its NULL
/// sentinel, every token string is freed, and finally the array itself.
///
/// # Safety
///
/// `tokens`, when non-NULL, must be a pointer previously returned by
/// [`rakuda_camel_case`] that has not already been released. No pointer
/// into the array may be used after this call.
#[no_mangle]
pub unsafe extern "C" fn rakuda_release(tokens: *mut *mut c_char) {
    if tokens.is_null() {
        return;
    }

    let mut len = 0;
    while !(*tokens.add(len)).is_null() {
        drop(CString::from_raw(*tokens.add(len)));
        len += 1;
    }

    // The allocation is the boxed slice of len tokens plus the sentinel
    drop(Box::from_raw(ptr::slice_from_raw_parts_mut(tokens, len + 1)));
}
