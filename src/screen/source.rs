// Display data source capability.
//
// The enumerator never talks to the OS directly; it consumes probes from a
// `DisplaySource` so the record-building policy can be exercised against a
// fake source with controlled per-field failures.

use anyhow::Result;

use super::types::VirtRect;

/// Raw query results for one attached display.
///
/// `bounds` always holds the monitor rectangle in virtual-desktop
/// coordinates (the OS guarantees one per monitor handle). Each remaining
/// field is an independent sub-query: `None` means that query failed and
/// the corresponding record fields stay zeroed.
#[derive(Debug, Clone, Default)]
pub struct ScreenProbe {
    pub bounds: VirtRect,
    pub info: Option<MonitorBasics>,
    pub mode: Option<DisplayMode>,
    /// Physical panel `(width_mm, height_mm)`.
    pub panel_mm: Option<(i32, i32)>,
    /// Resolved friendly name. Sources substitute "Internal Display" for a
    /// matched display whose EDID carries no name; `None` means the name
    /// service failed or had no match for this display.
    pub friendly_name: Option<String>,
}

/// Extended monitor info (one `GetMonitorInfo`-level lookup).
#[derive(Debug, Clone, Default)]
pub struct MonitorBasics {
    pub is_primary: bool,
    pub work: VirtRect,
    /// OS device name, e.g. `\\.\DISPLAY1`. Diagnostic only; not serialized.
    pub device: String,
}

/// Active display-mode settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayMode {
    pub width: i32,
    pub height: i32,
    pub refresh_hz: i32,
}

/// Anything that can describe the currently attached displays.
pub trait DisplaySource {
    /// Probe every attached display, in OS enumeration order (not stable
    /// across calls, not sorted). Fails only if enumeration itself is
    /// impossible; individual sub-query failures surface as `None` fields.
    fn probe_all(&self) -> Result<Vec<ScreenProbe>>;

    /// Whether the OS taskbar is configured to auto-hide.
    fn taskbar_auto_hide(&self) -> bool {
        false
    }
}
