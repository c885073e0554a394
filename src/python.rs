// PyO3 Python binding layer
//
// Exposes the same two-step contract as the C adapter, minus the address
// gymnastics: ask for the size, then receive the serialized buffer as a
// bytes object. Python readers use `struct.unpack` against the documented
// layout, or feed the bytes back into `wire::decode` from Rust.

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::wire::layout::{size_for, FORMAT_TAG, MAX_SCREENS};

/// Serialized buffer size in bytes for `max_count` record slots
///
/// Pure arithmetic; does not touch the display hardware.
///
/// Args:
///     max_count: Record slot capacity, defaults to 8
#[pyfunction]
#[pyo3(signature = (max_count = MAX_SCREENS))]
fn buffer_size(max_count: usize) -> usize {
    size_for(max_count)
}

/// Serialize the current display topology into a bytes object
///
/// Args:
///     max_count: Record slot capacity, defaults to 8
///     page: Skip `page * max_count` screens first; follow-up pages
///         retrieve the remainder when the header's `more` flag is set
///
/// Returns:
///     bytes: Exactly `buffer_size(max_count)` bytes — header, record
///     slots, trailer tag
#[pyfunction]
#[pyo3(signature = (max_count = MAX_SCREENS, page = 0))]
fn snapshot<'py>(py: Python<'py>, max_count: usize, page: usize) -> PyResult<Bound<'py, PyBytes>> {
    let bytes = crate::snapshot::snapshot_bytes(max_count, page)
        .map_err(|e| PyRuntimeError::new_err(format!("{e:#}")))?;
    Ok(PyBytes::new(py, &bytes))
}

/// Display topology snapshots for Windows
#[pymodule]
fn virtscreen(m: &Bound<'_, PyModule>) -> PyResult<()> {
    crate::init_logging();
    m.add("FORMAT_TAG", FORMAT_TAG)?;
    m.add("MAX_SCREENS", MAX_SCREENS)?;
    m.add_function(wrap_pyfunction!(buffer_size, m)?)?;
    m.add_function(wrap_pyfunction!(snapshot, m)?)?;
    Ok(())
}
