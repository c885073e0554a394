// Integration test: snapshot of the real display topology (Windows only).
#![cfg(windows)]

use virtscreen::snapshot;
use virtscreen::wire::{decode, layout};

#[test]
fn test_live_snapshot_decodes() {
    let bytes =
        snapshot::snapshot_bytes(layout::MAX_SCREENS, 0).expect("Failed to snapshot displays");
    assert_eq!(bytes.len(), layout::size_for(layout::MAX_SCREENS));

    let snap = decode::decode(&bytes).expect("Snapshot buffer should decode");
    assert!(snap.count >= 1, "should detect at least one display");
    assert_eq!(snap.version, layout::FORMAT_VERSION);

    let primaries = snap.filled().iter().filter(|r| r.is_primary).count();
    assert!(primaries <= 1, "more than one primary display reported");

    println!("Detected {} display(s):", snap.count);
    for (i, rec) in snap.filled().iter().enumerate() {
        println!(
            "  [{}] {} {}x{} @ ({}, {}) {}Hz {}",
            i,
            rec.name,
            rec.virt.width(),
            rec.virt.height(),
            rec.virt.left,
            rec.virt.top,
            rec.refresh_rate,
            if rec.is_primary { "(primary)" } else { "" }
        );
    }
}

#[test]
fn test_live_page_past_end_is_empty() {
    // No machine has 8 * 100 displays; the page must come back empty but valid.
    let bytes = snapshot::snapshot_bytes(layout::MAX_SCREENS, 100).expect("Failed to snapshot");
    let snap = decode::decode(&bytes).expect("Paged buffer should decode");
    assert_eq!(snap.count, 0);
    assert!(!snap.more);
}
