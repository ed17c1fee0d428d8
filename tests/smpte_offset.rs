use chunkix::midi::{SmpteError, SmpteFps, SmpteOffset};
use pretty_assertions::assert_eq;

/// Raw 5-byte payload of an `FF 54 05` meta event.
fn smpte_bytes(fps_bits: u8, hour: u8, minute: u8, second: u8, frame: u8, subframe: u8) -> Vec<u8> {
    vec![
        (fps_bits << 5) | (hour & 0x1F),
        minute,
        second,
        frame,
        subframe,
    ]
}

#[test]
fn parses_each_frame_rate() {
    for (bits, fps) in [
        (0, SmpteFps::TwentyFour),
        (1, SmpteFps::TwentyFive),
        (2, SmpteFps::TwentyNine),
        (3, SmpteFps::Thirty),
    ] {
        let offset = SmpteOffset::parse(&smpte_bytes(bits, 12, 30, 15, 10, 50)).unwrap();
        assert_eq!(offset.fps, fps);
        assert_eq!(offset.hour, 12);
        assert_eq!(offset.minute, 30);
        assert_eq!(offset.second, 15);
        assert_eq!(offset.frame, 10);
        assert_eq!(offset.subframe, 50);
    }
}

#[test]
fn rejects_wrong_payload_length() {
    assert_eq!(
        SmpteOffset::parse(&[0, 0, 0]),
        Err(SmpteError::Length(3))
    );
    assert_eq!(
        SmpteOffset::parse(&[0, 0, 0, 0, 0, 0]),
        Err(SmpteError::Length(6))
    );
    assert_eq!(SmpteOffset::parse(&[]), Err(SmpteError::Length(0)));
}

#[test]
fn rejects_undefined_frame_rate_bits() {
    for bits in 4..=7 {
        assert_eq!(
            SmpteOffset::parse(&smpte_bytes(bits, 12, 30, 15, 10, 50)),
            Err(SmpteError::FrameRate(bits))
        );
    }
}

#[test]
fn rejects_out_of_range_components() {
    assert_eq!(
        SmpteOffset::parse(&smpte_bytes(0, 24, 0, 0, 0, 0)),
        Err(SmpteError::Hour(24))
    );
    assert_eq!(
        SmpteOffset::parse(&smpte_bytes(0, 31, 0, 0, 0, 0)),
        Err(SmpteError::Hour(31))
    );
    assert_eq!(
        SmpteOffset::parse(&smpte_bytes(0, 12, 60, 30, 15, 50)),
        Err(SmpteError::Minute(60))
    );
    assert_eq!(
        SmpteOffset::parse(&smpte_bytes(1, 12, 30, 60, 15, 50)),
        Err(SmpteError::Second(60))
    );
    assert_eq!(
        SmpteOffset::parse(&smpte_bytes(2, 12, 30, 45, 15, 100)),
        Err(SmpteError::Subframe(100))
    );
}

#[test]
fn first_out_of_range_component_wins() {
    // invalid hour and minute together report the hour
    assert_eq!(
        SmpteOffset::parse(&smpte_bytes(0, 25, 61, 30, 15, 50)),
        Err(SmpteError::Hour(25))
    );
}

#[test]
fn accepts_boundary_values() {
    for (bits, hour, minute, second, frame, subframe) in [
        (0, 0, 0, 0, 0, 0),
        (0, 23, 0, 0, 0, 0),
        (0, 0, 59, 0, 0, 0),
        (0, 0, 0, 59, 0, 0),
        (0, 0, 0, 0, 0, 99),
        (0, 23, 59, 59, 23, 99),
        (1, 23, 59, 59, 24, 99),
        (2, 23, 59, 59, 29, 99),
        (3, 23, 59, 59, 29, 99),
    ] {
        let data = smpte_bytes(bits, hour, minute, second, frame, subframe);
        let offset = SmpteOffset::parse(&data).unwrap();
        assert_eq!(offset.hour, hour);
        assert_eq!(offset.minute, minute);
        assert_eq!(offset.second, second);
        assert_eq!(offset.frame, frame);
        assert_eq!(offset.subframe, subframe);
    }
}

#[test]
fn micros_just_before_midnight() {
    let offset = SmpteOffset::parse(&smpte_bytes(0, 23, 59, 59, 23, 99)).unwrap();
    let expected = 86_399_000_000.0 // 23:59:59
        + (23.0 / 24.0) * 1_000_000.0 // frames
        + (99.0 / 100.0 / 24.0) * 1_000_000.0; // subframes
    assert!((offset.as_micros() - expected).abs() < 1.0);
}

#[test]
fn micros_at_zero() {
    let offset = SmpteOffset::parse(&smpte_bytes(1, 0, 0, 0, 0, 0)).unwrap();
    assert_eq!(offset.as_micros(), 0.0);
}

#[test]
fn drop_frame_rate_uses_29_97() {
    let offset = SmpteOffset::parse(&smpte_bytes(2, 0, 0, 0, 1, 0)).unwrap();
    let expected = 1_000_000.0 / 29.97;
    assert!((offset.as_micros() - expected).abs() < 0.1);
}
