use super::*;

#[test]
fn most_frequent_color_wins() {
    let mut img = RgbaImage::from_pixel(10, 10, image::Rgba([30, 64, 175, 255]));
    for x in 0..10 {
        img.put_pixel(x, 0, image::Rgba([255, 255, 255, 255]));
    }
    let got = ExactTally::default().dominant_color(&img);
    assert_eq!(got, Some(Rgb8::new(30, 64, 175)));
}

#[test]
fn transparent_pixels_do_not_count() {
    let mut img = RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 0, 0]));
    img.put_pixel(1, 1, image::Rgba([5, 150, 105, 255]));
    assert_eq!(
        ExactTally::default().dominant_color(&img),
        Some(Rgb8::new(5, 150, 105))
    );
    let empty = RgbaImage::from_pixel(4, 4, image::Rgba([9, 9, 9, 0]));
    assert_eq!(ExactTally::default().dominant_color(&empty), None);
}

#[test]
fn ties_go_to_the_first_seen_color() {
    let mut img = RgbaImage::from_pixel(2, 1, image::Rgba([1, 1, 1, 255]));
    img.put_pixel(1, 0, image::Rgba([2, 2, 2, 255]));
    assert_eq!(
        ExactTally::default().dominant_color(&img),
        Some(Rgb8::new(1, 1, 1))
    );
}

#[test]
fn large_logos_are_thumbnailed_first() {
    let img = RgbaImage::from_pixel(640, 480, image::Rgba([120, 40, 200, 255]));
    let got = ExactTally { thumbnail: 100 }.dominant_color(&img);
    assert_eq!(got, Some(Rgb8::new(120, 40, 200)));
}

#[test]
fn theme_falls_back_without_a_usable_logo() {
    let fallback = Rgb8::new(220, 38, 38);
    assert_eq!(resolve_theme(None, &ExactTally::default(), fallback), fallback);
    let clear = RgbaImage::new(3, 3);
    assert_eq!(
        resolve_theme(Some(&clear), &ExactTally::default(), fallback),
        fallback
    );
}
