use super::*;
use crate::foundation::core::Rgba8Premul;
use crate::transitions::kind::TransitionKind;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pushfx_{name}_{}", std::process::id()))
}

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: 60,
        frame_count: 2,
        kind: TransitionKind::Navigation,
    }
}

#[test]
fn file_names_are_zero_padded() {
    assert_eq!(PngSequenceSink::frame_file_name(7), "frame_0007.png");
    assert_eq!(PngSequenceSink::frame_file_name(12345), "frame_12345.png");
}

#[test]
fn writes_straight_alpha_pngs() {
    let dir = temp_dir("png_sink");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg(3, 2)).unwrap();
    let half_red = Rgba8Premul::from_straight_rgba(255, 0, 0, 128);
    let raster = Raster::solid(3, 2, half_red).unwrap();
    sink.push_frame(1, 0.5, &raster).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written(), &[dir.join("frame_0001.png")]);
    let decoded = image::open(dir.join("frame_0001.png")).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (3, 2));
    assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 128]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn rejects_frames_before_begin_or_of_wrong_size() {
    let dir = temp_dir("png_sink_errors");
    let raster = Raster::solid(1, 1, Rgba8Premul::transparent()).unwrap();

    let mut sink = PngSequenceSink::new(&dir);
    assert!(sink.push_frame(0, 0.0, &raster).is_err());

    sink.begin(cfg(4, 4)).unwrap();
    assert!(matches!(
        sink.push_frame(0, 0.0, &raster),
        Err(PushfxError::Render(_))
    ));
    assert!(sink.written().is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}
