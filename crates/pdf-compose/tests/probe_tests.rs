use pdf_compose::*;
use std::io::Cursor;

fn encoded_image(width: u32, height: u32, format: image::ImageFormat) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([180, 120, 60]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
    bytes
}

fn source(name: &str, bytes: Vec<u8>) -> SourceImage {
    SourceImage {
        id: ImageId(0),
        bytes,
        display_name: name.to_string(),
    }
}

#[tokio::test]
async fn test_probe_png() {
    let img = source("photo.png", encoded_image(640, 480, image::ImageFormat::Png));
    let px = probe_dimensions(&img).await.unwrap();
    assert_eq!(
        px,
        PixelDimensions {
            width: 640,
            height: 480
        }
    );
}

#[tokio::test]
async fn test_probe_jpeg() {
    let img = source("photo.jpg", encoded_image(300, 200, image::ImageFormat::Jpeg));
    let px = probe_dimensions(&img).await.unwrap();
    assert_eq!(
        px,
        PixelDimensions {
            width: 300,
            height: 200
        }
    );
}

#[tokio::test]
async fn test_probe_rejects_unrecognized_bytes() {
    let img = source("notes.txt", b"this is not an image at all".to_vec());
    let result = probe_dimensions(&img).await;
    match result {
        Err(ComposeError::UnsupportedFormat { name }) => assert_eq!(name, "notes.txt"),
        other => panic!("Expected UnsupportedFormat, got {:?}", other),
    }
}

#[tokio::test]
async fn test_probe_rejects_truncated_image() {
    // Keep the PNG signature but cut the header short
    let png = encoded_image(640, 480, image::ImageFormat::Png);
    let img = source("broken.png", png[..20].to_vec());
    let result = probe_dimensions(&img).await;
    assert!(matches!(result, Err(ComposeError::Decode { .. })));
}
