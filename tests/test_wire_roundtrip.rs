// Integration test: wire format round-trip and write-bounds guarantees.

use virtscreen::screen::types::{
    PhysicalSize, PixelSize, ScreenRecord, ScreenSet, VirtRect, INFO_MODE, INFO_MONITOR,
    INFO_NAME, INFO_PANEL,
};
use virtscreen::wire::{decode, encode, layout, WireError};

fn synthetic_set() -> ScreenSet {
    let primary = ScreenRecord {
        info_bits: INFO_MONITOR | INFO_MODE | INFO_PANEL | INFO_NAME,
        refresh_rate: 144,
        is_primary: true,
        pixel: PixelSize {
            width: 2560,
            height: 1440,
        },
        virt: VirtRect {
            left: 0,
            top: 0,
            right: 2560,
            bottom: 1440,
        },
        work: VirtRect {
            left: 0,
            top: 0,
            right: 2560,
            bottom: 1392,
        },
        physical: PhysicalSize::from_panel_mm(600, 340),
        name: "DELL U2719DC".to_string(),
    };
    let secondary = ScreenRecord {
        info_bits: INFO_MONITOR | INFO_MODE,
        refresh_rate: 60,
        is_primary: false,
        pixel: PixelSize {
            width: 1920,
            height: 1080,
        },
        virt: VirtRect {
            left: -1920,
            top: 120,
            right: 0,
            bottom: 1200,
        },
        work: VirtRect {
            left: -1920,
            top: 120,
            right: 0,
            bottom: 1160,
        },
        physical: PhysicalSize::default(),
        name: "Unknown Monitor".to_string(),
    };
    ScreenSet {
        records: vec![primary, secondary],
        more: true,
        taskbar_auto_hide: true,
    }
}

#[test]
fn test_roundtrip_reproduces_every_field() {
    let set = synthetic_set();
    let max_count = 4;

    let mut buf = vec![0u8; layout::size_for(max_count)];
    let written = encode::encode(&mut buf, &set, max_count).expect("encode failed");
    assert_eq!(written, layout::size_for(max_count));

    let snap = decode::decode(&buf).expect("decode failed");
    assert_eq!(snap.count, 2);
    assert_eq!(snap.max_count, max_count);
    assert!(snap.more);
    assert!(snap.taskbar_auto_hide);
    assert_eq!(snap.version, layout::FORMAT_VERSION);

    // Filled slots match bit-for-bit, padding slots are defaults.
    assert_eq!(snap.filled(), &set.records[..]);
    assert_eq!(snap.records[2], ScreenRecord::default());
    assert_eq!(snap.records[3], ScreenRecord::default());
}

#[test]
fn test_writer_never_touches_the_canary() {
    let set = synthetic_set();
    let max_count = 4;
    let nominal = layout::size_for(max_count);

    // One spare byte past the advertised size, pre-marked.
    let mut buf = vec![0u8; nominal + 1];
    buf[nominal] = 0xC9;

    let written = encode::encode(&mut buf, &set, max_count).expect("encode failed");
    assert_eq!(written, nominal);
    assert_eq!(buf[nominal], 0xC9, "writer ran past size_for()");
}

#[test]
fn test_exact_capacity_succeeds_one_less_fails() {
    let set = synthetic_set();

    let mut exact = vec![0u8; layout::size_for(2)];
    assert!(encode::encode(&mut exact, &set, 2).is_ok());

    let mut short = vec![0u8; layout::size_for(2) - 1];
    let err = encode::encode(&mut short, &set, 2).unwrap_err();
    assert!(matches!(err, WireError::Overflow { .. }));
}

#[test]
fn test_decoded_record_array_always_has_max_count_slots() {
    for max_count in [1usize, 2, 4, 8] {
        let set = ScreenSet {
            records: vec![ScreenRecord::default()],
            more: false,
            taskbar_auto_hide: false,
        };
        let mut buf = vec![0u8; layout::size_for(max_count)];
        encode::encode(&mut buf, &set, max_count).unwrap();

        let snap = decode::decode(&buf).unwrap();
        assert_eq!(snap.records.len(), max_count);
    }
}

#[test]
fn test_long_name_truncated_but_valid() {
    let mut set = synthetic_set();
    set.records[0].name = "A Monitor With An Unreasonably Long Marketing Name Edition \
                           Pro Max Ultra 2"
        .to_string();

    let mut buf = vec![0u8; layout::size_for(2)];
    encode::encode(&mut buf, &set, 2).unwrap();

    let snap = decode::decode(&buf).unwrap();
    let name = &snap.records[0].name;
    assert!(name.len() < layout::NAME_BYTES);
    assert!(set.records[0].name.starts_with(name.as_str()));
}
