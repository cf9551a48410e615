use std::io::Write;

use approx::assert_relative_eq;
use tempfile::NamedTempFile;

use panview_core::config::{ResampleFilter, ViewerConfig};
use panview_core::controller::ViewportController;
use panview_core::drag::{PointerButton, PointerHandler};
use panview_core::error::ViewerError;
use panview_core::geometry::Point;
use panview_core::surface::FrameSlot;

#[test]
fn test_default_config() {
    let c = ViewerConfig::default();
    assert_eq!(c.pan_button, PointerButton::Right);
    assert_eq!(c.resample, ResampleFilter::Triangle);
    assert_relative_eq!(c.min_zoom, 0.1);
    assert_relative_eq!(c.max_zoom, 20.0);
}

#[test]
fn test_partial_toml_takes_defaults() {
    let c = ViewerConfig::from_toml_str("pan_button = \"Middle\"\n").unwrap();
    assert_eq!(c.pan_button, PointerButton::Middle);
    assert_eq!(c.resample, ResampleFilter::Triangle);
    assert_relative_eq!(c.max_zoom, 20.0);
}

#[test]
fn test_toml_round_trip() {
    let c = ViewerConfig {
        pan_button: PointerButton::Left,
        resample: ResampleFilter::Lanczos3,
        min_zoom: 0.5,
        max_zoom: 8.0,
    };
    let text = c.to_toml_string().unwrap();
    assert!(text.contains("Lanczos3"), "got: {text}");
    assert_eq!(ViewerConfig::from_toml_str(&text).unwrap(), c);
}

#[test]
fn test_bad_toml_is_a_parse_error() {
    let err = ViewerConfig::from_toml_str("resample = \"Cubic\"").unwrap_err();
    assert!(matches!(err, ViewerError::ConfigParse(_)));
}

#[test]
fn test_load_from_file() {
    let mut f = NamedTempFile::new().unwrap();
    writeln!(f, "resample = \"Nearest\"").unwrap();
    writeln!(f, "max_zoom = 4.0").unwrap();
    f.flush().unwrap();

    let c = ViewerConfig::load(f.path()).unwrap();
    assert_eq!(c.resample, ResampleFilter::Nearest);
    assert_relative_eq!(c.max_zoom, 4.0);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ViewerConfig::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ViewerError::Io(_)));
}

#[test]
fn test_clamp_zoom() {
    let c = ViewerConfig::default();
    assert_eq!(c.clamp_zoom(2.5), Some(2.5));
    assert_eq!(c.clamp_zoom(50.0), Some(20.0));
    assert_eq!(c.clamp_zoom(0.0), None);
    assert_eq!(c.clamp_zoom(f32::INFINITY), None);

    let swapped = ViewerConfig {
        min_zoom: 5.0,
        max_zoom: 1.0,
        ..ViewerConfig::default()
    };
    assert_eq!(swapped.clamp_zoom(10.0), Some(5.0));
}

#[test]
fn test_configured_pan_button_is_used() {
    let config = ViewerConfig {
        pan_button: PointerButton::Middle,
        ..ViewerConfig::default()
    };
    let mut c = ViewportController::with_config(FrameSlot::new(), config);
    c.on_resize(10, 10);
    c.set_image(vec![0; 100 * 100], 100, 100, 1, false).unwrap();
    c.set_zoom(10.0);

    c.on_press(PointerButton::Right, Point::new(0, 0));
    c.on_move(Point::new(-5, 0));
    assert_eq!(c.pan_offset(), Point::ZERO);
    c.on_release(PointerButton::Right);

    c.on_press(PointerButton::Middle, Point::new(0, 0));
    c.on_move(Point::new(-5, 0));
    assert_eq!(c.pan_offset(), Point::new(5, 0));
}
