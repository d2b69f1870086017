use image::{Rgb, RgbImage};
use image_basics::{sample_pixel, SampleCLIParser};

#[test]
fn sample_pixel_from_png() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("three_by_three.png");
    let mut image = RgbImage::from_pixel(3, 3, Rgb([0, 0, 0]));
    image.put_pixel(1, 1, Rgb([200, 120, 75]));
    image.save(&path).unwrap();

    let mut cli_parser = SampleCLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        "-i",
        path.to_str().unwrap(),
        "-r",
        "1",
        "-c",
        "1",
    ]);
    let mut report = Vec::new();
    sample_pixel(&arguments, &mut report).expect("Sampling failed");
    assert_eq!(
        String::from_utf8(report).unwrap(),
        "Pixel at (1, 1) - Red: 200, Green: 120, Blue: 75\n"
    );
}

#[test]
fn sample_pixel_outside_image() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("three_by_three.png");
    RgbImage::from_pixel(3, 3, Rgb([0, 0, 0])).save(&path).unwrap();

    let mut cli_parser = SampleCLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        "-i",
        path.to_str().unwrap(),
        "-r",
        "3",
        "-c",
        "0",
    ]);
    let mut report = Vec::new();
    assert!(sample_pixel(&arguments, &mut report).is_err());
    assert!(report.is_empty());
}
