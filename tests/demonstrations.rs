use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use image_basics::demonstration::{
    demonstrate_arithmetic, demonstrate_crop, demonstrate_flipping, demonstrate_resize,
    demonstrate_rotation, demonstrate_splitting_and_merging,
};
use image_basics::image::Image;
use image_basics::viewer::{ImageViewer, PngWindowViewer};
use image_basics::{Arguments, CLIParser, Error};
use tempfile::TempDir;

const IMAGE_WIDTH: u32 = 500;
const IMAGE_HEIGHT: u32 = 400;
const BLUE_VALUE: u8 = 200;

/// Remembers every shown window instead of displaying it.
#[derive(Default)]
struct RecordingViewer {
    windows: Vec<(String, (u32, u32))>,
    waits: usize,
}

impl RecordingViewer {
    fn window_names(&self) -> Vec<&str> {
        self.windows.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl ImageViewer for RecordingViewer {
    fn show(&mut self, window_name: &str, image: &Image) -> image_basics::Result<()> {
        self.windows.push((window_name.to_owned(), image.dimensions()));
        Ok(())
    }

    fn wait_key(&mut self) -> image_basics::Result<()> {
        self.waits += 1;
        Ok(())
    }
}

/// Red follows the column, green the row, blue is constant.
fn create_gradient_image_file(directory: &TempDir, file_name: &str) -> PathBuf {
    let path = directory.path().join(file_name);
    RgbImage::from_fn(IMAGE_WIDTH, IMAGE_HEIGHT, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, BLUE_VALUE])
    })
    .save(&path)
    .expect("Writing test image failed");
    path
}

fn parse_arguments(image_file: &Path) -> Arguments {
    let mut cli_parser = CLIParser::new();
    cli_parser.parse(vec!["test", "--image", image_file.to_str().unwrap()])
}

fn into_lines(report: Vec<u8>) -> Vec<String> {
    String::from_utf8(report)
        .expect("Report must be UTF-8")
        .lines()
        .map(str::to_owned)
        .collect()
}

/// Splits "Pixel at (c, r) - Red: x, Green: y, Blue: z" into its numbers.
fn parse_pixel_line(line: &str) -> ((u32, u32), [i32; 3]) {
    let (position, channels) = line
        .strip_prefix("Pixel at (")
        .and_then(|rest| rest.split_once(") - "))
        .unwrap_or_else(|| panic!("Malformed report line '{}'", line));
    let (column, row) = position.split_once(", ").unwrap();
    let values: Vec<i32> = channels
        .split(", ")
        .zip(["Red: ", "Green: ", "Blue: "])
        .map(|(part, label)| part.strip_prefix(label).unwrap().parse().unwrap())
        .collect();
    (
        (column.parse().unwrap(), row.parse().unwrap()),
        [values[0], values[1], values[2]],
    )
}

fn assert_approximately(actual: [i32; 3], expected: [i32; 3]) {
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!(
            (a - e).abs() <= 2,
            "Sampled {:?} is not close to {:?}",
            actual,
            expected
        );
    }
}

#[test]
fn arithmetic_reports_saturated_sum() {
    let directory = tempfile::tempdir().unwrap();
    let arguments = parse_arguments(&create_gradient_image_file(&directory, "canyon.png"));
    let mut viewer = RecordingViewer::default();
    let mut report = Vec::new();
    demonstrate_arithmetic(&arguments, &mut viewer, &mut report).unwrap();
    assert_eq!(
        into_lines(report),
        vec!["Pixel at (61, 152) - Red: 136, Green: 227, Blue: 255"]
    );
    assert_eq!(viewer.window_names(), vec!["Original", "Added"]);
    assert_eq!(viewer.waits, 1);
}

#[test]
fn arithmetic_writes_shown_windows() {
    let directory = tempfile::tempdir().unwrap();
    let arguments = {
        let image_file = create_gradient_image_file(&directory, "canyon.png");
        let output_directory = directory.path().join("windows");
        let mut cli_parser = CLIParser::default();
        cli_parser.parse(vec![
            "test",
            "-i",
            image_file.to_str().unwrap(),
            "-o",
            output_directory.to_str().unwrap(),
        ])
    };
    let mut viewer = PngWindowViewer::from(&arguments);
    let mut report = Vec::new();
    demonstrate_arithmetic(&arguments, &mut viewer, &mut report).unwrap();
    let added = image::open(directory.path().join("windows").join("added.png"))
        .unwrap()
        .into_rgb8();
    assert_eq!(added.get_pixel(61, 152), &Rgb([136, 227, 255]));
    assert!(directory.path().join("windows").join("original.png").exists());
}

#[test]
fn crop_shows_both_regions() {
    let directory = tempfile::tempdir().unwrap();
    let image_file = create_gradient_image_file(&directory, "florida_trip.png");
    let mut cli_parser = CLIParser::with_fixed_image_file(&image_file);
    let arguments = cli_parser.parse(vec!["test"]);
    let mut viewer = RecordingViewer::default();
    demonstrate_crop(&arguments, &mut viewer).unwrap();
    assert_eq!(
        viewer.windows,
        vec![
            ("Original".to_owned(), (IMAGE_WIDTH, IMAGE_HEIGHT)),
            ("2".to_owned(), (155, 88)),
            ("3".to_owned(), (68, 62)),
        ]
    );
    assert_eq!(viewer.waits, 2);
}

#[test]
fn flipping_reports_pixel_of_rotated_image() {
    let directory = tempfile::tempdir().unwrap();
    let arguments = parse_arguments(&create_gradient_image_file(&directory, "trip.png"));
    let mut viewer = RecordingViewer::default();
    let mut report = Vec::new();
    demonstrate_flipping(&arguments, &mut viewer, &mut report).unwrap();
    let lines = into_lines(report);
    assert_eq!(lines.len(), 1);
    let (position, color) = parse_pixel_line(&lines[0]);
    assert_eq!(position, (441, 189));
    // mirrored, turned 45 degrees about (250, 200) and mirrored again
    assert_approximately(color, [121, 86, BLUE_VALUE as i32]);
    assert_eq!(
        viewer.window_names(),
        vec![
            "Original",
            "Flipped Horizontally",
            "Rotated by 45 Degrees",
            "Flipped Vertically"
        ]
    );
}

#[test]
fn resize_reports_interpolated_pixel() {
    let directory = tempfile::tempdir().unwrap();
    let arguments = parse_arguments(&create_gradient_image_file(&directory, "canyon.png"));
    let mut viewer = RecordingViewer::default();
    let mut report = Vec::new();
    demonstrate_resize(&arguments, &mut viewer, &mut report).unwrap();
    let lines = into_lines(report);
    let (position, color) = parse_pixel_line(&lines[0]);
    assert_eq!(position, (170, 367));
    assert_approximately(color, [85, 183, BLUE_VALUE as i32]);
    assert_eq!(
        viewer.windows[1],
        (
            "Resized (Width)".to_owned(),
            (2 * IMAGE_WIDTH, 2 * IMAGE_HEIGHT)
        )
    );
}

#[test]
fn rotation_reports_pixel_near_offset_center() {
    let directory = tempfile::tempdir().unwrap();
    let arguments = parse_arguments(&create_gradient_image_file(&directory, "canyon.png"));
    let mut viewer = RecordingViewer::default();
    let mut report = Vec::new();
    demonstrate_rotation(&arguments, &mut viewer, &mut report).unwrap();
    let lines = into_lines(report);
    let (position, color) = parse_pixel_line(&lines[0]);
    assert_eq!(position, (10, 10));
    // (10, 10) comes from about (88.6, 8.6) when turning 88 degrees about (50, 50)
    assert_approximately(color, [89, 9, BLUE_VALUE as i32]);
}

#[test]
fn splitting_reports_single_channels() {
    let directory = tempfile::tempdir().unwrap();
    let arguments = parse_arguments(&create_gradient_image_file(&directory, "small.png"));
    let mut viewer = RecordingViewer::default();
    let mut report = Vec::new();
    demonstrate_splitting_and_merging(&arguments, &mut viewer, &mut report).unwrap();
    assert_eq!(
        into_lines(report),
        vec![
            "Pixel at (180, 94) - Red: 180",
            "Pixel at (13, 78) - Blue: 200",
            "Pixel at (80, 5) - Green: 5",
        ]
    );
    assert_eq!(viewer.window_names(), vec!["Red", "Green", "Blue", "Merged"]);
}

#[test]
fn missing_image_fails() {
    let directory = tempfile::tempdir().unwrap();
    let arguments = parse_arguments(&directory.path().join("missing.png"));
    let mut viewer = RecordingViewer::default();
    let mut report = Vec::new();
    match demonstrate_resize(&arguments, &mut viewer, &mut report) {
        Err(Error::InputFileNotFound(_)) => {}
        other => panic!("Missing image not reported, got {:?}", other),
    }
    assert!(report.is_empty());
}

#[test]
fn small_image_fails_with_out_of_range_sample() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("tiny.png");
    RgbImage::from_pixel(8, 8, Rgb([1, 2, 3])).save(&path).unwrap();
    let arguments = parse_arguments(&path);
    let mut viewer = RecordingViewer::default();
    let mut report = Vec::new();
    match demonstrate_arithmetic(&arguments, &mut viewer, &mut report) {
        Err(Error::CoordinateOutOfRange {
            row: 152,
            column: 61,
            ..
        }) => {}
        other => panic!("Out of range sample not reported, got {:?}", other),
    }
}
