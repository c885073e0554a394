// Win32 display source: EnumDisplayMonitors topology, GDI device queries,
// DisplayConfig friendly names, shell taskbar state.
//
// Per-monitor sub-queries are keyed by the GDI device name from
// GetMonitorInfoW, so when that lookup fails only the bounds rectangle
// survives for the monitor — matching the info_bits contract.

use anyhow::{bail, Result};
use log::{debug, warn};
use windows::core::{BOOL, PCWSTR};
use windows::Win32::Devices::Display::{
    DisplayConfigGetDeviceInfo, GetDisplayConfigBufferSizes, QueryDisplayConfig,
    DISPLAYCONFIG_DEVICE_INFO_GET_SOURCE_NAME, DISPLAYCONFIG_DEVICE_INFO_GET_TARGET_NAME,
    DISPLAYCONFIG_DEVICE_INFO_HEADER, DISPLAYCONFIG_MODE_INFO, DISPLAYCONFIG_PATH_INFO,
    DISPLAYCONFIG_SOURCE_DEVICE_NAME, DISPLAYCONFIG_TARGET_DEVICE_NAME, QDC_ONLY_ACTIVE_PATHS,
};
use windows::Win32::Foundation::{ERROR_SUCCESS, LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{
    CreateDCW, DeleteDC, EnumDisplayMonitors, EnumDisplaySettingsW, GetDeviceCaps,
    GetMonitorInfoW, DEVMODEW, ENUM_CURRENT_SETTINGS, HDC, HMONITOR, HORZSIZE, MONITORINFOEXW,
    VERTSIZE,
};
use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};
use windows::Win32::UI::Shell::{SHAppBarMessage, ABM_GETSTATE, ABS_AUTOHIDE, APPBARDATA};

use super::source::{DisplayMode, DisplaySource, MonitorBasics, ScreenProbe};
use super::types::VirtRect;

/// Name reported for a display the name service matched but whose EDID
/// carries no friendly name (typically laptop panels).
pub const INTERNAL_DISPLAY: &str = "Internal Display";

/// Enable Per-Monitor DPI awareness
///
/// Ensures monitor rectangles and display modes are physical pixels rather
/// than scaled logical units. Repeated calls are safe (silently ignored if
/// already set).
pub fn enable_dpi_awareness() {
    unsafe {
        // SAFETY: best-effort call, failure indicates it was already set
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
    }
}

/// The live Win32 implementation of `DisplaySource`.
pub struct Win32DisplaySource;

impl DisplaySource for Win32DisplaySource {
    fn probe_all(&self) -> Result<Vec<ScreenProbe>> {
        let handles = enumerate_handles()?;
        // One DisplayConfig query serves every monitor in this pass.
        let paths = query_display_paths();
        if paths.is_none() {
            warn!("QueryDisplayConfig unavailable, friendly names will fall back");
        }

        Ok(handles
            .into_iter()
            .map(|(hmonitor, bounds)| probe_monitor(hmonitor, bounds, paths.as_deref()))
            .collect())
    }

    fn taskbar_auto_hide(&self) -> bool {
        // SAFETY: ABM_GETSTATE only reads global shell state; APPBARDATA
        // needs cbSize set before the call.
        unsafe {
            let mut abd = APPBARDATA {
                cbSize: std::mem::size_of::<APPBARDATA>() as u32,
                ..Default::default()
            };
            let state = SHAppBarMessage(ABM_GETSTATE, &mut abd);
            (state as u32 & ABS_AUTOHIDE) != 0
        }
    }
}

// ---------------------------------------------------------------------------
// Monitor enumeration
// ---------------------------------------------------------------------------

fn enumerate_handles() -> Result<Vec<(HMONITOR, VirtRect)>> {
    unsafe {
        let mut found: Vec<(HMONITOR, RECT)> = Vec::new();
        let ok = EnumDisplayMonitors(
            Some(HDC::default()),
            None,
            Some(enum_monitor_proc),
            LPARAM(&mut found as *mut _ as isize),
        );

        if !ok.as_bool() {
            bail!("EnumDisplayMonitors failed");
        }

        Ok(found
            .into_iter()
            .map(|(hmonitor, rect)| (hmonitor, rect_to_virt(rect)))
            .collect())
    }
}

unsafe extern "system" fn enum_monitor_proc(
    hmonitor: HMONITOR,
    _: HDC,
    rect: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    // SAFETY: lparam points to a Vec on the caller's stack in
    // enumerate_handles(). The callback executes synchronously on the same
    // thread for the duration of the EnumDisplayMonitors call.
    let found = &mut *(lparam.0 as *mut Vec<(HMONITOR, RECT)>);
    let bounds = if rect.is_null() { RECT::default() } else { *rect };
    found.push((hmonitor, bounds));
    BOOL(1)
}

fn probe_monitor(
    hmonitor: HMONITOR,
    bounds: VirtRect,
    paths: Option<&[DISPLAYCONFIG_PATH_INFO]>,
) -> ScreenProbe {
    let mut probe = ScreenProbe {
        bounds,
        ..Default::default()
    };

    let Some(info) = monitor_info(hmonitor) else {
        // Without the device name none of the keyed sub-queries can run.
        warn!(
            "GetMonitorInfoW failed for monitor at ({}, {})",
            bounds.left, bounds.top
        );
        return probe;
    };
    let device = info.szDevice;

    probe.info = Some(MonitorBasics {
        // MONITORINFOF_PRIMARY = 1
        is_primary: (info.monitorInfo.dwFlags & 1) != 0,
        work: rect_to_virt(info.monitorInfo.rcWork),
        device: utf16_until_nul(&device),
    });
    probe.mode = display_mode(&device);
    probe.panel_mm = panel_millimeters(&device);
    probe.friendly_name = paths.and_then(|paths| friendly_name(paths, &device));

    debug!(
        "probed {}: mode={} panel={} name={}",
        utf16_until_nul(&device),
        probe.mode.is_some(),
        probe.panel_mm.is_some(),
        probe.friendly_name.as_deref().unwrap_or("<unresolved>")
    );
    probe
}

// ---------------------------------------------------------------------------
// Per-device sub-queries
// ---------------------------------------------------------------------------

fn monitor_info(hmonitor: HMONITOR) -> Option<MONITORINFOEXW> {
    // SAFETY: GetMonitorInfoW writes to a caller-provided MONITORINFOEXW.
    // cbSize must be set correctly before the call.
    unsafe {
        let mut info = MONITORINFOEXW::default();
        info.monitorInfo.cbSize = std::mem::size_of::<MONITORINFOEXW>() as u32;
        if !GetMonitorInfoW(hmonitor, &mut info.monitorInfo).as_bool() {
            return None;
        }
        Some(info)
    }
}

fn display_mode(device: &[u16; 32]) -> Option<DisplayMode> {
    // SAFETY: EnumDisplaySettingsW writes to a caller-provided DEVMODEW;
    // dmSize must be set and the device name is NUL-terminated.
    unsafe {
        let mut mode = DEVMODEW {
            dmSize: std::mem::size_of::<DEVMODEW>() as u16,
            ..Default::default()
        };
        if !EnumDisplaySettingsW(
            PCWSTR::from_raw(device.as_ptr()),
            ENUM_CURRENT_SETTINGS,
            &mut mode,
        )
        .as_bool()
        {
            return None;
        }
        Some(DisplayMode {
            width: mode.dmPelsWidth as i32,
            height: mode.dmPelsHeight as i32,
            refresh_hz: mode.dmDisplayFrequency as i32,
        })
    }
}

/// RAII guard: DeleteDC on drop, so the measurement context is released on
/// every exit path. Leaking one DC per monitor per call is a real handle
/// leak, not cosmetic.
struct DcGuard(HDC);

impl Drop for DcGuard {
    fn drop(&mut self) {
        // SAFETY: self.0 is a live DC from CreateDCW.
        unsafe {
            let _ = DeleteDC(self.0);
        }
    }
}

fn panel_millimeters(device: &[u16; 32]) -> Option<(i32, i32)> {
    // SAFETY: CreateDCW opens a measurement context for the device; the
    // guard releases it even if a later query path bails.
    unsafe {
        let hdc = CreateDCW(
            PCWSTR::from_raw(device.as_ptr()),
            PCWSTR::null(),
            PCWSTR::null(),
            None,
        );
        if hdc.is_invalid() {
            return None;
        }
        let _guard = DcGuard(hdc);

        let width_mm = GetDeviceCaps(Some(hdc), HORZSIZE);
        let height_mm = GetDeviceCaps(Some(hdc), VERTSIZE);
        Some((width_mm, height_mm))
    }
}

// ---------------------------------------------------------------------------
// Friendly-name resolution (DisplayConfig)
// ---------------------------------------------------------------------------

fn query_display_paths() -> Option<Vec<DISPLAYCONFIG_PATH_INFO>> {
    // SAFETY: GetDisplayConfigBufferSizes and QueryDisplayConfig write to
    // caller-provided buffers sized from the returned counts.
    unsafe {
        let mut num_paths = 0u32;
        let mut num_modes = 0u32;
        if GetDisplayConfigBufferSizes(QDC_ONLY_ACTIVE_PATHS, &mut num_paths, &mut num_modes)
            != ERROR_SUCCESS
        {
            return None;
        }

        let mut paths = vec![DISPLAYCONFIG_PATH_INFO::default(); num_paths as usize];
        let mut modes = vec![DISPLAYCONFIG_MODE_INFO::default(); num_modes as usize];

        if QueryDisplayConfig(
            QDC_ONLY_ACTIVE_PATHS,
            &mut num_paths,
            paths.as_mut_ptr(),
            &mut num_modes,
            modes.as_mut_ptr(),
            None,
        ) != ERROR_SUCCESS
        {
            return None;
        }
        paths.truncate(num_paths as usize);
        Some(paths)
    }
}

/// Resolve the EDID friendly name by matching the path whose source GDI
/// device name equals this monitor's device name.
fn friendly_name(paths: &[DISPLAYCONFIG_PATH_INFO], device: &[u16; 32]) -> Option<String> {
    // SAFETY: DisplayConfigGetDeviceInfo writes to a caller-provided struct.
    // header.size and header.type must be set correctly.
    unsafe {
        for path in paths {
            let mut source_name = DISPLAYCONFIG_SOURCE_DEVICE_NAME {
                header: DISPLAYCONFIG_DEVICE_INFO_HEADER {
                    r#type: DISPLAYCONFIG_DEVICE_INFO_GET_SOURCE_NAME,
                    size: std::mem::size_of::<DISPLAYCONFIG_SOURCE_DEVICE_NAME>() as u32,
                    adapterId: path.sourceInfo.adapterId,
                    id: path.sourceInfo.id,
                },
                ..Default::default()
            };
            if DisplayConfigGetDeviceInfo(&mut source_name.header) != 0 {
                continue;
            }
            if source_name.viewGdiDeviceName != *device {
                continue;
            }

            let mut target = DISPLAYCONFIG_TARGET_DEVICE_NAME {
                header: DISPLAYCONFIG_DEVICE_INFO_HEADER {
                    r#type: DISPLAYCONFIG_DEVICE_INFO_GET_TARGET_NAME,
                    size: std::mem::size_of::<DISPLAYCONFIG_TARGET_DEVICE_NAME>() as u32,
                    adapterId: path.targetInfo.adapterId,
                    id: path.targetInfo.id,
                },
                ..Default::default()
            };
            if DisplayConfigGetDeviceInfo(&mut target.header) != 0 {
                return None;
            }

            let name = utf16_until_nul(&target.monitorFriendlyDeviceName);
            return Some(if name.is_empty() {
                INTERNAL_DISPLAY.to_string()
            } else {
                name
            });
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

fn rect_to_virt(rect: RECT) -> VirtRect {
    VirtRect {
        left: rect.left,
        top: rect.top,
        right: rect.right,
        bottom: rect.bottom,
    }
}

fn utf16_until_nul(buf: &[u16]) -> String {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..len])
}
