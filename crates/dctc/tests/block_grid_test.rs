//! Padding and block reassembly properties

use dctc::*;

fn create_test_image(width: u32, height: u32) -> Image {
    let data = (0..width * height).map(|i| ((i * 31 + 7) % 256) as u8).collect();
    Image::gray(width, height, data).unwrap()
}

#[test]
fn test_pad_then_crop_returns_original() {
    for (width, height) in [(1, 1), (5, 12), (9, 9), (15, 17), (100, 3)] {
        let image = create_test_image(width, height);
        let padded = pad(&image).unwrap();

        assert_eq!(padded.width() % 8, 0);
        assert_eq!(padded.height() % 8, 0);
        assert!(padded.width() - (width as usize) < 8);
        assert!(padded.height() - (height as usize) < 8);

        let cropped = crop(&padded, height as usize, width as usize).unwrap();
        assert_eq!(cropped.to_image().unwrap(), image, "{}x{}", width, height);
    }
}

#[test]
fn test_split_merge_split_is_identity() {
    for (width, height) in [(8, 8), (24, 16), (13, 29)] {
        let image = create_test_image(width, height);
        let padded = pad(&image).unwrap();

        let blocks = split(&padded).unwrap();
        let merged = merge(&blocks, padded.width()).unwrap();
        assert_eq!(merged, padded);
        assert_eq!(split(&merged).unwrap(), blocks);
    }
}

#[test]
fn test_blocks_are_row_major() {
    // 3 blocks wide, 2 blocks high; every block filled with its index
    let mut plane = Plane::new(24, 16);
    for y in 0..16 {
        for x in 0..24 {
            plane.set(x, y, ((y / 8) * 3 + x / 8) as f32);
        }
    }

    let blocks = split(&plane).unwrap();
    assert_eq!(blocks.len(), 6);
    for (i, block) in blocks.iter().enumerate() {
        assert!(block.iter().all(|&v| v == i as f32), "block {}", i);
    }
}

#[test]
fn test_bad_geometry_is_shape_error() {
    let rgb = Image::new(Dimensions::new(4, 4), ColorChannels::RGBA).unwrap();
    assert!(pad(&rgb).unwrap_err().is_shape_error());

    let plane = Plane::new(8, 8);
    assert!(crop(&plane, 8, 16).unwrap_err().is_shape_error());
    assert!(merge(&[[0.0; 64]; 2], 24).unwrap_err().is_shape_error());
}
