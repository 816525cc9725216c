//! Borrowed views over host-owned `double` storage.
//!
//! A view is a plain `&[f64]`: the pointer and length travel together and the
//! borrow checker pins the lifetime to the call. Raw parts coming through the
//! C ABI are converted here, once.

use std::os::raw::c_int;

use crate::error::{Result, SumError};

/// Build a view from raw parts, rejecting inputs a slice cannot represent.
///
/// A null pointer is accepted only together with a zero length.
///
/// # Safety
/// If `ptr` is non-null it must point to `len` initialised `f64`s that stay
/// valid and unmodified for `'a`.
pub unsafe fn try_from_raw<'a>(ptr: *const f64, len: c_int) -> Result<&'a [f64]> {
    if len < 0 {
        return Err(SumError::NegativeLength(len));
    }
    let len = len as usize;
    if ptr.is_null() {
        return if len == 0 {
            Ok(&[])
        } else {
            Err(SumError::NullPointer { len })
        };
    }
    Ok(std::slice::from_raw_parts(ptr, len))
}

/// Build a view from raw parts, mapping null pointers and non-positive
/// lengths to the empty view.
///
/// # Safety
/// Same as [`try_from_raw`].
pub unsafe fn from_raw<'a>(ptr: *const f64, len: c_int) -> &'a [f64] {
    match try_from_raw(ptr, len) {
        Ok(values) => values,
        Err(e) => {
            log::debug!("treating input as empty: {e}");
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_view_aliases_host_storage() {
        let host = vec![1.0, 2.0, 3.0];
        let view = unsafe { from_raw(host.as_ptr(), host.len() as c_int) };
        assert_eq!(view.as_ptr(), host.as_ptr());
        assert_eq!(view, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_prefix_view() {
        let host = [4.0, 5.0, 6.0];
        let view = unsafe { from_raw(host.as_ptr(), 2) };
        assert_eq!(view, &[4.0, 5.0]);
    }

    #[test]
    fn test_null_and_empty() {
        unsafe {
            assert!(try_from_raw(ptr::null(), 0).unwrap().is_empty());
            assert!(matches!(
                try_from_raw(ptr::null(), 3),
                Err(SumError::NullPointer { len: 3 })
            ));
            assert!(from_raw(ptr::null(), 3).is_empty());
        }
    }

    #[test]
    fn test_negative_length() {
        let host = [1.0];
        unsafe {
            assert!(matches!(
                try_from_raw(host.as_ptr(), -1),
                Err(SumError::NegativeLength(-1))
            ));
            assert!(from_raw(host.as_ptr(), -1).is_empty());
        }
    }
}
