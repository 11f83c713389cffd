//! FFI bindings for Startup Predictor
//!
//! This module provides C-compatible functions for calling the predictor from
//! other languages. All functions use C strings (null-terminated) and return
//! allocated memory that must be freed by the caller using
//! `predictor_free_string`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::config::PredictorConfig;
use crate::error::PredictError;
use crate::pipeline::{parse_array, predict_json, Predictor};

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Convert a Rust string to a C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

// ============================================================================
// Stateless API
// ============================================================================

/// Predict a profile JSON object and return envelope JSON.
///
/// # Safety
/// - `json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `predictor_free_string`.
/// - Returns NULL on error; call `predictor_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn predictor_predict_json(json: *const c_char) -> *mut c_char {
    clear_last_error();

    let json_str = match cstr_to_string(json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return ptr::null_mut();
        }
    };

    match predict_json(json_str) {
        Ok(envelope) => string_to_cstr(&envelope),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

// ============================================================================
// Stateful API
// ============================================================================

/// Opaque handle to a Predictor
pub struct PredictorHandle {
    predictor: Predictor,
}

/// Create a new Predictor.
///
/// When `has_seed` is true the forecasts are reproducible for `seed`.
///
/// # Safety
/// - Returns a pointer that must be freed with `predictor_free`.
#[no_mangle]
pub unsafe extern "C" fn predictor_new(seed: u64, has_seed: bool) -> *mut PredictorHandle {
    let mut config = PredictorConfig::default();
    if has_seed {
        config = config.with_seed(seed);
    }

    let handle = Box::new(PredictorHandle {
        predictor: Predictor::with_config(config),
    });
    Box::into_raw(handle)
}

/// Free a Predictor.
///
/// # Safety
/// - `predictor` must be a valid pointer returned by `predictor_new`.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn predictor_free(predictor: *mut PredictorHandle) {
    if !predictor.is_null() {
        drop(Box::from_raw(predictor));
    }
}

/// Predict a profile JSON object with a stateful predictor.
///
/// # Safety
/// - `predictor` must be a valid pointer returned by `predictor_new`.
/// - `json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `predictor_free_string`.
/// - Returns NULL on error; call `predictor_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn predictor_process_json(
    predictor: *mut PredictorHandle,
    json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    if predictor.is_null() {
        set_last_error("Null predictor pointer");
        return ptr::null_mut();
    }

    let handle = &mut *predictor;

    let json_str = match cstr_to_string(json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return ptr::null_mut();
        }
    };

    match handle.predictor.process_json(&json_str) {
        Ok(envelope) => string_to_cstr(&envelope),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Predict a JSON array of profiles and return a JSON array of envelopes.
///
/// # Safety
/// - `predictor` must be a valid pointer returned by `predictor_new`.
/// - `json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `predictor_free_string`.
/// - Returns NULL on error; call `predictor_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn predictor_process_batch_json(
    predictor: *mut PredictorHandle,
    json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    if predictor.is_null() {
        set_last_error("Null predictor pointer");
        return ptr::null_mut();
    }

    let handle = &mut *predictor;

    let json_str = match cstr_to_string(json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return ptr::null_mut();
        }
    };

    let result = parse_array(&json_str)
        .and_then(|profiles| handle.predictor.predict_batch(&profiles))
        .and_then(|envelopes| serde_json::to_string(&envelopes).map_err(PredictError::from));

    match result {
        Ok(json) => string_to_cstr(&json),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

// ============================================================================
// Memory Management
// ============================================================================

/// Free a string returned by predictor functions.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by a predictor function, or NULL.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn predictor_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Get the last error message.
///
/// # Safety
/// - Returns a pointer to a thread-local error string.
/// - The returned pointer is valid until the next predictor call on this thread.
/// - Do NOT free the returned pointer.
/// - Returns NULL if no error occurred.
#[no_mangle]
pub unsafe extern "C" fn predictor_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

// ============================================================================
// Version Information
// ============================================================================

/// Get the library version.
///
/// # Safety
/// - Returns a pointer to a static string. Do NOT free.
#[no_mangle]
pub unsafe extern "C" fn predictor_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn sample_profile_json() -> CString {
        CString::new(
            r#"{
                "industry": "ecommerce",
                "funding": 2000000,
                "experience": 4,
                "teamSize": 12,
                "marketSize": 8,
                "competition": 6
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_ffi_predict_json() {
        let json = sample_profile_json();

        unsafe {
            let result = predictor_predict_json(json.as_ptr());
            assert!(!result.is_null());

            let result_str = CStr::from_ptr(result).to_str().unwrap();
            assert!(result_str.contains("riskLevel"));
            assert!(result_str.contains("predictor_version"));

            predictor_free_string(result);
        }
    }

    #[test]
    fn test_ffi_predictor_lifecycle() {
        unsafe {
            let a = predictor_new(21, true);
            let b = predictor_new(21, true);
            assert!(!a.is_null());

            let json = sample_profile_json();
            let ra = predictor_process_json(a, json.as_ptr());
            let rb = predictor_process_json(b, json.as_ptr());
            assert!(!ra.is_null() && !rb.is_null());

            let va: serde_json::Value =
                serde_json::from_str(CStr::from_ptr(ra).to_str().unwrap()).unwrap();
            let vb: serde_json::Value =
                serde_json::from_str(CStr::from_ptr(rb).to_str().unwrap()).unwrap();
            assert_eq!(va["result"], vb["result"]);

            predictor_free_string(ra);
            predictor_free_string(rb);
            predictor_free(a);
            predictor_free(b);
        }
    }

    #[test]
    fn test_ffi_batch() {
        let batch = CString::new(format!(
            "[{0},{0}]",
            sample_profile_json().to_str().unwrap()
        ))
        .unwrap();

        unsafe {
            let predictor = predictor_new(0, false);
            let result = predictor_process_batch_json(predictor, batch.as_ptr());
            assert!(!result.is_null());

            let value: serde_json::Value =
                serde_json::from_str(CStr::from_ptr(result).to_str().unwrap()).unwrap();
            assert_eq!(value.as_array().unwrap().len(), 2);

            predictor_free_string(result);
            predictor_free(predictor);
        }
    }

    #[test]
    fn test_ffi_error_handling() {
        unsafe {
            let invalid_json = CString::new("not json").unwrap();
            let result = predictor_predict_json(invalid_json.as_ptr());
            assert!(result.is_null());

            let error = predictor_last_error();
            assert!(!error.is_null());
            let error_str = CStr::from_ptr(error).to_str().unwrap();
            assert!(!error_str.is_empty());

            let result = predictor_process_json(ptr::null_mut(), invalid_json.as_ptr());
            assert!(result.is_null());
            let error_str = CStr::from_ptr(predictor_last_error()).to_str().unwrap();
            assert_eq!(error_str, "Null predictor pointer");
        }
    }

    #[test]
    fn test_ffi_version() {
        unsafe {
            let version = predictor_version();
            assert!(!version.is_null());

            let version_str = CStr::from_ptr(version).to_str().unwrap();
            assert_eq!(version_str, env!("CARGO_PKG_VERSION"));
        }
    }
}
