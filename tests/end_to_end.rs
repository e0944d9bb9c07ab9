use std::path::Path;
use std::process::Command;

use image::{Rgba, RgbaImage};
use splitpreview::{
    CompositeParams, CropBox, Error, OutputFormat, compose_preview_to_buffer,
    compose_preview_to_path, compose_preview_with_sidecar,
};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

fn write_solid(path: &Path, w: u32, h: u32, color: Rgba<u8>) {
    RgbaImage::from_pixel(w, h, color).save(path).unwrap();
}

fn assert_red_blue_preview(img: &RgbaImage) {
    assert_eq!(img.dimensions(), (1200, 630));
    for y in 0..630 {
        for x in 0..480 {
            assert_eq!(*img.get_pixel(x, y), RED, "({x}, {y})");
        }
        for x in 720..1200 {
            assert_eq!(*img.get_pixel(x, y), BLUE, "({x}, {y})");
        }
    }
    let mut prev = 0u8;
    for x in 480..720 {
        let p = img.get_pixel(x, 0);
        assert!(p[2] >= prev && p[0] == 255 - p[2]);
        prev = p[2];
        for y in 1..630 {
            assert_eq!(img.get_pixel(x, y), p);
        }
    }
}

#[test]
fn red_and_blue_sources_make_a_horizontal_ramp() {
    let dir = tempfile::tempdir().unwrap();
    let left = dir.path().join("left.png");
    let right = dir.path().join("right.png");
    let output = dir.path().join("preview.png");
    write_solid(&left, 800, 600, RED);
    write_solid(&right, 800, 600, BLUE);

    let report =
        compose_preview_to_path(&left, &right, &output, &CompositeParams::default()).unwrap();
    assert_eq!(report.format, OutputFormat::Png);
    assert_eq!(report.fade_columns, (480, 720));
    assert_eq!(
        report.left_crop,
        CropBox {
            left: 0,
            top: 90,
            width: 800,
            height: 420,
        }
    );

    let img = image::open(&output).unwrap().to_rgba8();
    assert_red_blue_preview(&img);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let left = dir.path().join("left.png");
    let right = dir.path().join("right.png");
    RgbaImage::from_fn(640, 480, |x, y| Rgba([(x % 256) as u8, (y % 256) as u8, 90, 255]))
        .save(&left)
        .unwrap();
    RgbaImage::from_fn(300, 900, |x, y| Rgba([40, (x % 256) as u8, (y % 256) as u8, 200]))
        .save(&right)
        .unwrap();

    let first = dir.path().join("a.png");
    let second = dir.path().join("b.png");
    let params = CompositeParams::default();
    compose_preview_to_path(&left, &right, &first, &params).unwrap();
    compose_preview_to_path(&left, &right, &second, &params).unwrap();

    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}

#[test]
fn any_source_shape_yields_target_size() {
    let dir = tempfile::tempdir().unwrap();
    let left = dir.path().join("wide.png");
    let right = dir.path().join("tall.png");
    write_solid(&left, 3000, 400, RED);
    write_solid(&right, 200, 1500, BLUE);

    let preview = compose_preview_to_buffer(&left, &right, &CompositeParams::default()).unwrap();
    assert_eq!(preview.image.dimensions(), (1200, 630));
    assert_eq!(preview.left_source, (3000, 400));
    assert_eq!(preview.right_crop.width, 200);
}

#[test]
fn missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let left = dir.path().join("left.png");
    write_solid(&left, 10, 10, RED);
    let output = dir.path().join("preview.png");

    let err = compose_preview_to_path(
        &left,
        &dir.path().join("absent.png"),
        &output,
        &CompositeParams::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::ImageLoad { .. }));
    assert!(!output.exists());
}

#[test]
fn sidecar_and_jpeg_output() {
    let dir = tempfile::tempdir().unwrap();
    let left = dir.path().join("left.png");
    let right = dir.path().join("right.png");
    write_solid(&left, 120, 63, RED);
    write_solid(&right, 120, 63, BLUE);
    let output = dir.path().join("preview.jpg");

    let report =
        compose_preview_with_sidecar(&left, &right, &output, &CompositeParams::default()).unwrap();
    assert_eq!(report.format, OutputFormat::Jpeg);
    assert!(output.exists());

    let text = std::fs::read_to_string(dir.path().join("preview.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["size"]["width"], 1200);
    assert_eq!(value["format"], "jpeg");
}

#[test]
fn cli_without_arguments_uses_fixed_file_names() {
    let dir = tempfile::tempdir().unwrap();
    write_solid(&dir.path().join("left.png"), 800, 600, RED);
    write_solid(&dir.path().join("right.png"), 800, 600, BLUE);

    let status = Command::new(env!("CARGO_BIN_EXE_splitpreview"))
        .current_dir(dir.path())
        .status()
        .unwrap();
    assert!(status.success());

    let img = image::open(dir.path().join("preview.png")).unwrap().to_rgba8();
    assert_red_blue_preview(&img);
}

#[test]
fn cli_fails_without_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let status = Command::new(env!("CARGO_BIN_EXE_splitpreview"))
        .current_dir(dir.path())
        .status()
        .unwrap();
    assert!(!status.success());
    assert!(!dir.path().join("preview.png").exists());
}
