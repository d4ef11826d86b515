//! A C API for formatting names.

extern crate libc;

use self::libc::c_char;
use super::{format, Component, FormatOptions, MarkupStyle, NameComponents};
use std::ffi::{CStr, CString};
use std::mem;
use std::ptr;

macro_rules! str_to_char_star {
    ($str:expr) => {{
        match CString::new($str) {
            Ok(s) => s.into_raw() as *const c_char,
            Err(_) => ptr::null(),
        }
    }};
}

#[no_mangle]
pub extern "C" fn name_format_components_new() -> Box<NameComponents> {
    Box::new(NameComponents::new())
}

#[no_mangle]
pub unsafe extern "C" fn name_format_free_components(components_ptr: *mut NameComponents) {
    mem::drop(Box::from_raw(components_ptr));
}

#[no_mangle]
pub unsafe extern "C" fn name_format_free_string(str_ptr: *mut c_char) {
    mem::drop(CString::from_raw(str_ptr));
}

/// Sets a component by key ("given", "family", …). Returns false for an
/// unknown key.
#[no_mangle]
pub unsafe extern "C" fn name_format_components_set(
    components: &mut NameComponents,
    key: *const c_char,
    value: *const c_char,
) -> bool {
    let key = CStr::from_ptr(key).to_string_lossy();
    let value = CStr::from_ptr(value).to_string_lossy();
    match key.parse::<Component>() {
        Ok(component) => {
            components.set(component, &value);
            true
        }
        Err(_) => false,
    }
}

/// Formats with default separators. An unknown markup style, or a null
/// one, means plain text.
#[no_mangle]
pub unsafe extern "C" fn name_format_format(
    components: &NameComponents,
    pattern: *const c_char,
    markup: *const c_char,
) -> *const c_char {
    let pattern = CStr::from_ptr(pattern).to_string_lossy();
    let markup = if markup.is_null() {
        MarkupStyle::None
    } else {
        CStr::from_ptr(markup)
            .to_str()
            .ok()
            .and_then(|m| m.parse().ok())
            .unwrap_or_default()
    };
    let options = FormatOptions {
        markup,
        ..FormatOptions::default()
    };

    str_to_char_star!(format(components, &pattern, &options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_c_strings() {
        let mut components = name_format_components_new();
        let given = CString::new("given").unwrap();
        let family = CString::new("family").unwrap();
        let bogus = CString::new("surname").unwrap();
        let john = CString::new("John").unwrap();
        let smith = CString::new("Smith").unwrap();
        let pattern = CString::new("x. f").unwrap();
        let markup = CString::new("simple").unwrap();

        unsafe {
            assert!(name_format_components_set(&mut components, given.as_ptr(), john.as_ptr()));
            assert!(name_format_components_set(&mut components, family.as_ptr(), smith.as_ptr()));
            assert!(!name_format_components_set(&mut components, bogus.as_ptr(), smith.as_ptr()));

            let plain = name_format_format(&components, pattern.as_ptr(), ptr::null());
            assert_eq!("J. Smith", CStr::from_ptr(plain).to_str().unwrap());
            name_format_free_string(plain as *mut c_char);

            let marked = name_format_format(&components, pattern.as_ptr(), markup.as_ptr());
            assert_eq!(
                r#"J. <span class="family">Smith</span>"#,
                CStr::from_ptr(marked).to_str().unwrap()
            );
            name_format_free_string(marked as *mut c_char);

            name_format_free_components(Box::into_raw(components));
        }
    }
}
