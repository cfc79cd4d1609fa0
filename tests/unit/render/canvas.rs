use super::*;

#[test]
fn rejects_sizes_outside_u16() {
    assert!(Canvas::new(70_000, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(1920, 1080).unwrap();
    assert_eq!((c.width(), c.height()), (1920, 1080));
}

#[test]
fn rect_fill_covers_its_pixels() {
    let mut c = Canvas::new(64, 32).unwrap();
    c.fill_rect(Rect::new(0.0, 0.0, 64.0, 32.0), Rgb8::new(10, 20, 30));
    c.fill_rect(Rect::new(8.0, 8.0, 24.0, 24.0), Rgb8::new(200, 100, 50));
    let img = c.finish().unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30, 255]);
    assert_eq!(img.get_pixel(16, 16).0, [200, 100, 50, 255]);
    assert_eq!(img.get_pixel(30, 30).0, [10, 20, 30, 255]);
}

#[test]
fn untouched_pixels_stay_transparent() {
    let mut c = Canvas::new(16, 16).unwrap();
    c.fill_circle(Point::new(8.0, 8.0), 4.0, Rgb8::WHITE);
    let img = c.finish().unwrap();
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
    assert_eq!(img.get_pixel(8, 8).0, [255, 255, 255, 255]);
}

#[test]
fn images_land_at_their_origin() {
    let mut c = Canvas::new(32, 32).unwrap();
    c.fill_rect(Rect::new(0.0, 0.0, 32.0, 32.0), Rgb8::WHITE);
    let patch = RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 255, 255]));
    c.draw_image(&patch, Point::new(10.0, 12.0)).unwrap();
    let img = c.finish().unwrap();
    assert_eq!(img.get_pixel(11, 13).0, [0, 0, 255, 255]);
    assert_eq!(img.get_pixel(5, 5).0, [255, 255, 255, 255]);
}

#[test]
fn builtin_text_marks_pixels_in_its_color() {
    let mut c = Canvas::new(200, 40).unwrap();
    c.fill_rect(Rect::new(0.0, 0.0, 200.0, 40.0), Rgb8::WHITE);
    let shaped = ShapedText::Builtin {
        text: "HOLA".into(),
        size_px: 22.0,
        color: Rgb8::new(31, 41, 55),
    };
    c.draw_text(&shaped, Point::new(4.0, 4.0));
    let img = c.finish().unwrap();
    assert!(img.pixels().any(|p| p.0 == [31, 41, 55, 255]));
}
