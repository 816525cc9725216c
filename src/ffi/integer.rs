//! `Square` and `Sum` from the companion integer library.

use std::os::raw::c_int;

use crate::summation::{square, sum_i32};

#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn Square(x: c_int) -> c_int {
    square(x)
}

/// Safety: arr must point to at least `length` ints, or be null.
/// Returns 0 for a null arr or length <= 0.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn Sum(arr: *const c_int, length: c_int) -> c_int {
    if arr.is_null() || length <= 0 {
        return 0;
    }
    sum_i32(std::slice::from_raw_parts(arr, length as usize))
}
