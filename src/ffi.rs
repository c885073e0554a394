// C ABI compatibility adapter for hosts that cannot pass native pointers.
//
// The host hands over its buffer address formatted as a hex string; the
// adapter parses it, views the memory as a byte slice of the documented
// size, and delegates to `snapshot`. Doubles in and out per the host ABI:
// 1.0 = success, 0.0 = failure. The address-parsing trick lives only here;
// everything behind this module works on real slices.

use std::ffi::CStr;
use std::os::raw::c_char;

use log::{error, warn};

use crate::snapshot::write_snapshot;
use crate::wire::layout::{size_for, MAX_SCREENS};

const CALL_OK: f64 = 1.0;
const CALL_FAILED: f64 = 0.0;

/// Required buffer size in bytes for the fixed `MAX_SCREENS` capacity used
/// by the buffer-address entry points.
#[no_mangle]
pub extern "C" fn ext_get_virtual_screens_buffer_size() -> f64 {
    size_for(MAX_SCREENS) as f64
}

/// Serialize the first `MAX_SCREENS` displays into the host buffer.
///
/// # Safety
/// `buffer_addr` must be a NUL-terminated hex string naming a writable
/// buffer of at least `ext_get_virtual_screens_buffer_size()` bytes that
/// stays valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn ext_get_virtual_screens(buffer_addr: *const c_char) -> f64 {
    crate::init_logging();
    write_at_address(buffer_addr, 0)
}

/// Paged variant: serialize displays from index `page * MAX_SCREENS`
/// onward, letting the host fetch topologies larger than one buffer.
///
/// # Safety
/// Same contract as [`ext_get_virtual_screens`].
#[no_mangle]
pub unsafe extern "C" fn ext_get_virtual_screens_page(
    buffer_addr: *const c_char,
    page: f64,
) -> f64 {
    crate::init_logging();
    if !(page >= 0.0 && page.fract() == 0.0 && page <= usize::MAX as f64) {
        warn!("rejecting non-integral page argument {page}");
        return CALL_FAILED;
    }
    write_at_address(buffer_addr, page as usize)
}

unsafe fn write_at_address(buffer_addr: *const c_char, page: usize) -> f64 {
    let Some(ptr) = parse_buffer_address(buffer_addr) else {
        warn!("unparseable buffer address from host");
        return CALL_FAILED;
    };

    // SAFETY: the host guarantees `ptr` names at least
    // size_for(MAX_SCREENS) writable bytes for the duration of this call
    // (it allocated the buffer from the size entry point).
    let buf = std::slice::from_raw_parts_mut(ptr, size_for(MAX_SCREENS));

    match write_snapshot(buf, MAX_SCREENS, page) {
        Ok(_) => CALL_OK,
        Err(e) => {
            error!("snapshot failed: {e:#}");
            CALL_FAILED
        }
    }
}

/// Parse the host's hex-string buffer address ("1a2b3c" or "0x1A2B3C").
fn parse_buffer_address(raw: *const c_char) -> Option<*mut u8> {
    if raw.is_null() {
        return None;
    }
    // SAFETY: caller guarantees raw is a NUL-terminated string.
    let s = unsafe { CStr::from_ptr(raw) }.to_str().ok()?;
    let digits = s
        .trim()
        .trim_start_matches("0x")
        .trim_start_matches("0X");
    let addr = u64::from_str_radix(digits, 16).ok()?;
    if addr == 0 {
        return None;
    }
    Some(addr as usize as *mut u8)
}
