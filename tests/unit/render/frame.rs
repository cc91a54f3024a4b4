use super::*;

#[test]
fn unpremultiply_restores_straight_channels() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![128, 0, 0, 128, 10, 20, 30, 255],
        premultiplied: true,
    };
    let straight = frame.to_straight_rgba8();
    assert_eq!(&straight[..4], &[255, 0, 0, 128]);
    assert_eq!(&straight[4..], &[10, 20, 30, 255]);
}

#[test]
fn straight_frames_pass_through() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![200, 100, 50, 10],
        premultiplied: false,
    };
    assert_eq!(frame.to_straight_rgba8(), vec![200, 100, 50, 10]);
}

#[test]
fn flatten_composites_premultiplied_pixels_over_background() {
    let frame = FrameRGBA {
        width: 3,
        height: 1,
        data: vec![128, 0, 0, 128, 0, 0, 0, 0, 10, 20, 30, 255],
        premultiplied: true,
    };
    let mut out = Vec::new();
    frame.flatten_onto(Rgba8::rgb(0, 0, 0), &mut out);
    assert_eq!(&out[..4], &[128, 0, 0, 255]);
    assert_eq!(&out[4..8], &[0, 0, 0, 255]);
    assert_eq!(&out[8..], &[10, 20, 30, 255]);

    frame.flatten_onto(Rgba8::rgb(255, 255, 255), &mut out);
    assert_eq!(&out[..4], &[255, 127, 127, 255]);
    assert_eq!(&out[4..8], &[255, 255, 255, 255]);
    assert_eq!(out.len(), 12);
}

#[test]
fn flatten_blends_straight_pixels_and_reuses_the_buffer() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![0, 0, 0, 0, 200, 100, 50, 255],
        premultiplied: false,
    };
    let mut out = vec![9; 64];
    frame.flatten_onto(palette::PAGE, &mut out);
    assert_eq!(
        &out[..4],
        &[palette::PAGE.r, palette::PAGE.g, palette::PAGE.b, 255]
    );
    assert_eq!(&out[4..], &[200, 100, 50, 255]);
}

#[test]
fn settings_validation() {
    assert!(RenderSettings::default().validate().is_ok());
    for scale in [0.0, -1.0, f64::NAN, 9.0] {
        let s = RenderSettings {
            scale,
            ..RenderSettings::default()
        };
        assert!(s.validate().is_err(), "scale={scale}");
    }
}

#[test]
fn settings_fill_missing_fields_from_defaults() {
    let s: RenderSettings = serde_json::from_str(r##"{ "scale": 2.0 }"##).unwrap();
    assert_eq!(s.scale, 2.0);
    assert!(s.show_chart);
    assert_eq!(s.background, palette::PAGE);

    let s: RenderSettings = serde_json::from_str(r##"{ "background": "#000000" }"##).unwrap();
    assert_eq!(s.background, Rgba8::rgb(0, 0, 0));
}
