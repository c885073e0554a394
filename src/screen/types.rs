// Data model shared by the enumerator and the wire layer.

/// Sub-query succeeded: monitor info (primary flag, working area, device name).
pub const INFO_MONITOR: i32 = 1 << 0;
/// Sub-query succeeded: active display mode (native resolution, refresh rate).
pub const INFO_MODE: i32 = 1 << 1;
/// Sub-query succeeded: physical panel size in millimeters.
pub const INFO_PANEL: i32 = 1 << 2;
/// Sub-query succeeded: EDID friendly name.
pub const INFO_NAME: i32 = 1 << 3;

/// Rectangle in virtual-desktop coordinates, `{left, top, right, bottom}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VirtRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl VirtRect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Native pixel resolution of the active display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelSize {
    pub width: i32,
    pub height: i32,
}

/// Physical panel dimensions in millimeters plus the derived diagonal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width_mm: i32,
    pub height_mm: i32,
    pub diagonal_mm: i32,
}

impl PhysicalSize {
    /// Diagonal is the rounded Euclidean norm of the panel dimensions.
    pub fn from_panel_mm(width_mm: i32, height_mm: i32) -> Self {
        let w = f64::from(width_mm);
        let h = f64::from(height_mm);
        Self {
            width_mm,
            height_mm,
            diagonal_mm: (w * w + h * h).sqrt().round() as i32,
        }
    }
}

/// Best-effort description of one attached display.
///
/// `info_bits` records which sub-queries succeeded (`INFO_*` flags); fields
/// belonging to a failed sub-query stay at their zeroed defaults. A display
/// where every sub-query failed still yields a record with `info_bits == 0`
/// and a valid `virt` rectangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenRecord {
    pub info_bits: i32,
    pub refresh_rate: i32,
    pub is_primary: bool,
    pub pixel: PixelSize,
    pub virt: VirtRect,
    pub work: VirtRect,
    pub physical: PhysicalSize,
    pub name: String,
}

/// One enumeration result: up to `max_count` records plus the flags that
/// land in the serialized header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenSet {
    pub records: Vec<ScreenRecord>,
    /// More displays were attached than the returned window could hold.
    pub more: bool,
    /// The shell taskbar is configured to auto-hide.
    pub taskbar_auto_hide: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_is_rounded_norm() {
        // 600/340 mm panel (27" class): sqrt(600^2 + 340^2) = 689.63...
        let p = PhysicalSize::from_panel_mm(600, 340);
        assert_eq!(p.diagonal_mm, 690);
        // Pythagorean triple stays exact.
        assert_eq!(PhysicalSize::from_panel_mm(300, 400).diagonal_mm, 500);
    }

    #[test]
    fn test_zeroed_panel_has_zero_diagonal() {
        assert_eq!(PhysicalSize::from_panel_mm(0, 0), PhysicalSize::default());
    }

    #[test]
    fn test_rect_extent() {
        let r = VirtRect {
            left: -1920,
            top: 0,
            right: 0,
            bottom: 1080,
        };
        assert_eq!(r.width(), 1920);
        assert_eq!(r.height(), 1080);
    }
}
