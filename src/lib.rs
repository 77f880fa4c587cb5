// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod trace_init;

use std::ffi::{c_char, CStr, CString};
use std::ptr;

pub use uz_core::{
    counterpart, detect_script, settings, transliterate, transliterate_text, Direction, Script,
};

/// Direction codes accepted by `uz_transliterate`.
pub const UZ_CYRILLIC_TO_LATIN: u8 = 0;
pub const UZ_LATIN_TO_CYRILLIC: u8 = 1;

/// Script codes accepted by `uz_counterpart` and returned by `uz_detect_script`.
pub const UZ_SCRIPT_LATIN: i32 = 0;
pub const UZ_SCRIPT_CYRILLIC: i32 = 1;
pub const UZ_SCRIPT_UNKNOWN: i32 = -1;

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

fn direction_from_code(code: u8) -> Option<Direction> {
    match code {
        UZ_CYRILLIC_TO_LATIN => Some(Direction::CyrillicToLatin),
        UZ_LATIN_TO_CYRILLIC => Some(Direction::LatinToCyrillic),
        _ => None,
    }
}

fn script_from_code(code: i32) -> Option<Script> {
    match code {
        UZ_SCRIPT_LATIN => Some(Script::Latin),
        UZ_SCRIPT_CYRILLIC => Some(Script::Cyrillic),
        _ => None,
    }
}

/// Hand ownership of `s` to the caller; release with `uz_string_free`.
fn into_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn uz_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

/// Transliterate a NUL-terminated UTF-8 string, preserving `<...>` tags.
/// Returns null for a null or non-UTF-8 `text` or an unknown direction code.
#[no_mangle]
pub extern "C" fn uz_transliterate(text: *const c_char, direction: u8) -> *mut c_char {
    let Some(direction) = direction_from_code(direction) else {
        return ptr::null_mut();
    };
    let Some(text) = (unsafe { cptr_to_str(text) }) else {
        return ptr::null_mut();
    };
    into_c_string(transliterate(text, direction))
}

/// Render `text`, written in script `source`, in the other script.
#[no_mangle]
pub extern "C" fn uz_counterpart(text: *const c_char, source: i32) -> *mut c_char {
    let Some(source) = script_from_code(source) else {
        return ptr::null_mut();
    };
    let Some(text) = (unsafe { cptr_to_str(text) }) else {
        return ptr::null_mut();
    };
    into_c_string(counterpart(text, source))
}

/// Dominant script of `text` using the configured letter share, or
/// `UZ_SCRIPT_UNKNOWN`.
#[no_mangle]
pub extern "C" fn uz_detect_script(text: *const c_char) -> i32 {
    let Some(text) = (unsafe { cptr_to_str(text) }) else {
        return UZ_SCRIPT_UNKNOWN;
    };
    match detect_script(text, settings::settings().detection.min_letter_share) {
        Some(Script::Latin) => UZ_SCRIPT_LATIN,
        Some(Script::Cyrillic) => UZ_SCRIPT_CYRILLIC,
        None => UZ_SCRIPT_UNKNOWN,
    }
}

/// Install custom settings TOML before first use. Returns 0 on success, -1 on
/// a parse/validation error or when settings were already initialized.
#[no_mangle]
pub extern "C" fn uz_settings_init(toml: *const c_char) -> i32 {
    let Some(toml) = (unsafe { cptr_to_str(toml) }) else {
        return -1;
    };
    match settings::init_custom(toml.to_string()) {
        Ok(()) => 0,
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn uz_string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}
