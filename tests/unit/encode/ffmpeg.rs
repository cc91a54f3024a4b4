use super::*;

fn target(width: u32, height: u32, fps: u32) -> VideoTarget {
    VideoTarget {
        out_path: PathBuf::from("target/encode_test/sweep.mp4"),
        width,
        height,
        fps,
        overwrite: true,
    }
}

#[test]
fn target_validation_catches_bad_values() {
    assert!(target(640, 360, 30).validate().is_ok());
    assert!(target(0, 360, 30).validate().is_err());
    assert!(target(640, 360, 0).validate().is_err());
    assert!(target(641, 360, 30).validate().is_err());
    assert!(target(640, 361, 30).validate().is_err());
}

#[test]
fn target_takes_its_size_from_the_first_frame() {
    let frame = FrameRGBA {
        width: 8,
        height: 4,
        data: vec![0; 8 * 4 * 4],
        premultiplied: true,
    };
    let t = VideoTarget::for_frame(&frame, Path::new("out/a.mp4"), 24, false);
    assert_eq!((t.width, t.height, t.fps), (8, 4, 24));
    assert_eq!(t.out_path, PathBuf::from("out/a.mp4"));
    assert!(!t.overwrite);
}

#[test]
fn ffmpeg_args_describe_the_raw_input_and_output() {
    let args: Vec<String> = target(640, 360, 30)
        .ffmpeg_args()
        .into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    assert_eq!(args[0], "-y");
    let size = args.iter().position(|a| a == "-video_size").unwrap();
    assert_eq!(args[size + 1], "640x360");
    let rate = args.iter().position(|a| a == "-framerate").unwrap();
    assert_eq!(args[rate + 1], "30");
    let input = args.iter().position(|a| a == "-i").unwrap();
    assert_eq!(args[input + 1], "-");
    assert_eq!(args.last().map(String::as_str), Some("target/encode_test/sweep.mp4"));
}

#[test]
fn ffmpeg_args_refuse_to_overwrite_when_asked() {
    let t = VideoTarget {
        overwrite: false,
        ..target(2, 2, 1)
    };
    let args = t.ffmpeg_args();
    assert_eq!(args[0], OsString::from("-n"));
    assert!(!args.iter().any(|a| a == "-y"));
}

#[test]
fn parent_dir_of_bare_file_name_is_fine() {
    assert!(ensure_parent_dir(Path::new("out.mp4")).is_ok());
}
