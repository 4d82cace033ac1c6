use super::*;

#[test]
fn new_checks_buffer_length() {
    assert!(Raster::new(2, 2, vec![0; 16]).is_ok());
    assert!(Raster::new(2, 2, vec![0; 15]).is_err());
}

#[test]
fn solid_fills_every_pixel() {
    let c = Rgba8Premul::opaque(9, 8, 7);
    let r = Raster::solid(3, 2, c).unwrap();
    assert_eq!(r.data.len(), 3 * 2 * 4);
    assert_eq!(r.count_pixels(c), 6);
    assert_eq!(r.pixel(2, 1), Some(c));
    assert_eq!(r.pixel(3, 0), None);
}

#[test]
fn rgba_image_conversion_premultiplies() {
    let mut img = image::RgbaImage::new(1, 1);
    img.put_pixel(0, 0, image::Rgba([255, 0, 0, 128]));
    let r = Raster::from_rgba_image(&img);
    assert_eq!(r.pixel(0, 0), Some(Rgba8Premul::from_straight_rgba(255, 0, 0, 128)));

    let back = r.to_rgba_image().unwrap();
    assert_eq!(back.get_pixel(0, 0).0, [255, 0, 0, 128]);
}

#[test]
fn bounds_match_dimensions() {
    let r = Raster::solid(5, 4, Rgba8Premul::transparent()).unwrap();
    assert_eq!(r.bounds(), Rect::new(0.0, 0.0, 5.0, 4.0));
}
