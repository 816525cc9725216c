//! Recording `SumVec` for tests of the foreign-routine path.

use std::cell::Cell;
use std::os::raw::c_int;

thread_local! {
    static LAST_CALL: Cell<Option<(usize, c_int)>> = const { Cell::new(None) };
}

/// `(pointer address, length)` of the last `SumVec` call on this thread.
pub fn last_call() -> Option<(usize, c_int)> {
    LAST_CALL.with(|c| c.get())
}

/// Safety: vec must point to at least `length` doubles when non-null and length > 0.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn SumVec(vec: *const f64, length: c_int) -> f64 {
    LAST_CALL.with(|c| c.set(Some((vec as usize, length))));
    if vec.is_null() || length <= 0 {
        return 0.0;
    }
    std::slice::from_raw_parts(vec, length as usize)
        .iter()
        .fold(0.0, |acc, &v| acc + v)
}
