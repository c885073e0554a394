// Record building: probes in, best-effort ScreenRecords out.
//
// Enumeration never fails because one field could not be retrieved; each
// record's info_bits say which sub-queries produced data. Truncation to the
// slot capacity is expected and reported through `ScreenSet::more`, not an
// error.

use anyhow::Result;
use log::debug;

use super::source::{DisplaySource, ScreenProbe};
use super::types::{
    PhysicalSize, PixelSize, ScreenRecord, ScreenSet, INFO_MODE, INFO_MONITOR, INFO_NAME,
    INFO_PANEL,
};

/// Name written when the friendly-name lookup failed outright.
pub const UNKNOWN_MONITOR: &str = "Unknown Monitor";

/// Describe up to `max_count` attached displays, starting at screen index
/// `page * max_count`.
///
/// `more` is set iff displays remain beyond the returned window, so a
/// caller with fewer slots than screens can fetch the rest with follow-up
/// paged calls. A page past the end yields an empty set with `more` clear.
pub fn enumerate(source: &dyn DisplaySource, max_count: usize, page: usize) -> Result<ScreenSet> {
    let probes = source.probe_all()?;
    let total = probes.len();

    let start = page.saturating_mul(max_count).min(total);
    let end = start.saturating_add(max_count).min(total);
    let records: Vec<ScreenRecord> = probes[start..end].iter().map(build_record).collect();
    let more = end < total;

    debug!(
        "enumerated {} of {} displays (page {}, capacity {}, more={})",
        records.len(),
        total,
        page,
        max_count,
        more
    );

    Ok(ScreenSet {
        records,
        more,
        taskbar_auto_hide: source.taskbar_auto_hide(),
    })
}

/// Fold one probe into a record, setting an info bit per successful
/// sub-query and leaving the rest of the fields zeroed.
fn build_record(probe: &ScreenProbe) -> ScreenRecord {
    let mut record = ScreenRecord {
        virt: probe.bounds,
        ..Default::default()
    };

    if let Some(info) = &probe.info {
        record.info_bits |= INFO_MONITOR;
        record.is_primary = info.is_primary;
        record.work = info.work;
    }

    if let Some(mode) = probe.mode {
        record.info_bits |= INFO_MODE;
        record.pixel = PixelSize {
            width: mode.width,
            height: mode.height,
        };
        record.refresh_rate = mode.refresh_hz;
    }

    if let Some((width_mm, height_mm)) = probe.panel_mm {
        record.info_bits |= INFO_PANEL;
        record.physical = PhysicalSize::from_panel_mm(width_mm, height_mm);
    }

    match &probe.friendly_name {
        Some(name) => {
            record.info_bits |= INFO_NAME;
            record.name = name.clone();
        }
        None => record.name = UNKNOWN_MONITOR.to_string(),
    }

    record
}
