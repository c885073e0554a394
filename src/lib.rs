//! # virtscreen
//!
//! Windows display topology snapshots in a fixed-layout byte buffer.
//!
//! Enumerates the attached monitors (virtual-desktop position, native
//! resolution, refresh rate, physical panel size, friendly name) and
//! serializes the results into a versioned, fixed-size binary record format
//! that a host runtime holding nothing but the buffer address can read back.
//!
//! The wire layer and the record-building logic are platform-independent;
//! only the Win32 data source and the extension entry points require Windows.
//!
//! ## Rust usage
//!
//! ```
//! use virtscreen::screen::types::{ScreenRecord, ScreenSet};
//! use virtscreen::wire::{decode, encode, layout};
//!
//! let set = ScreenSet {
//!     records: vec![ScreenRecord::default()],
//!     more: false,
//!     taskbar_auto_hide: false,
//! };
//! let mut buf = vec![0u8; layout::size_for(layout::MAX_SCREENS)];
//! encode::encode(&mut buf, &set, layout::MAX_SCREENS).unwrap();
//!
//! let snap = decode::decode(&buf).unwrap();
//! assert_eq!(snap.count, 1);
//! ```

pub mod screen;
pub mod wire;

#[cfg(windows)]
pub mod snapshot;

#[cfg(windows)]
mod ffi;
#[cfg(windows)]
mod python;

#[cfg(windows)]
static LOG_INIT: std::sync::Once = std::sync::Once::new();

/// One-time logger setup for the extension entry points.
///
/// Defaults to errors only; override with the `VIRTSCREEN_LOG_LEVEL`
/// environment variable (env_logger filter syntax).
#[cfg(windows)]
pub(crate) fn init_logging() {
    LOG_INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(log::LevelFilter::Error);
        if let Ok(filters) = std::env::var("VIRTSCREEN_LOG_LEVEL") {
            builder.parse_filters(&filters);
        }
        let _ = builder.try_init();
    });
}
