//! Integration tests exercising gridpaint-ops through its public API.

use std::collections::BTreeSet;

use approx::assert_abs_diff_eq;
use gridpaint_core::{Error, LayeredBuffer, PixelBuffer, Rect, Rgba8};
use gridpaint_ops::{blend, blit, bytes, shapes, tint, transform, RowOrder, TintMode};

/// Buffer whose pixel at (x, y) is `y * width + x`.
fn pattern(width: i32, height: i32) -> PixelBuffer<u32> {
    let data = (0..(width * height) as u32).collect();
    PixelBuffer::from_vec(width, height, data).unwrap()
}

fn lit(img: &PixelBuffer<u8>) -> BTreeSet<(i32, i32)> {
    img.iter()
        .filter(|&(_, _, p)| p != 0)
        .map(|(x, y, _)| (x as i32, y as i32))
        .collect()
}

#[test]
fn clone_is_independent() {
    let original = pattern(6, 5);
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.set(2, 3, 999);
    assert_eq!(original.get(2, 3).unwrap(), 20);
    assert_ne!(copy, original);
}

#[test]
fn resize_round_trip_preserves_overlap() {
    let original = pattern(5, 4);

    let mut grown = original.clone();
    grown.resize(9, 7).unwrap();
    grown.resize(5, 4).unwrap();
    assert_eq!(grown, original);

    let mut shrunk = original.clone();
    shrunk.resize(2, 2).unwrap();
    shrunk.resize(5, 4).unwrap();
    for (x, y, p) in shrunk.iter() {
        if x < 2 && y < 2 {
            assert_eq!(p, original.get(x as i32, y as i32).unwrap());
        } else {
            assert_eq!(p, 0, "pixel {x},{y} should be default");
        }
    }
}

#[test]
fn scale_identity_and_corner_alignment() {
    let src = pattern(7, 5);
    assert_eq!(blit::scale(&src, 1.0, 1.0).unwrap(), src);

    for (sx, sy) in [(2.0, 3.0), (0.5, 0.5), (1.7, 0.3), (3.0, 1.0)] {
        let out = blit::scale(&src, sx, sy).unwrap();
        let (w, h) = out.dimensions();
        assert_eq!(out.get(0, 0).unwrap(), src.get(0, 0).unwrap(), "scale {sx}x{sy}");
        assert_eq!(
            out.get(w as i32 - 1, h as i32 - 1).unwrap(),
            src.get(6, 4).unwrap(),
            "scale {sx}x{sy}"
        );
    }
}

#[test]
fn scale_output_size_rounds_to_nearest() {
    let src = pattern(7, 3);
    for factor in [1.3, 2.2, 0.45, 3.14159] {
        let out = blit::scale(&src, factor, factor).unwrap();
        assert_abs_diff_eq!(out.width() as f64, 7.0 * factor, epsilon = 0.5);
        assert_abs_diff_eq!(out.height() as f64, 3.0 * factor, epsilon = 0.5);
    }
    // Tiny factors still produce one pixel.
    let out = blit::scale(&src, 0.01, 0.01).unwrap();
    assert_eq!(out.dimensions(), (1, 1));
}

#[test]
fn draw_fully_outside_leaves_dest_untouched() {
    let mut dest = pattern(8, 8);
    let before = dest.clone();
    let src = PixelBuffer::filled(3, 3, 42u32).unwrap();

    for (x, y) in [(8, 0), (0, 8), (-3, 0), (0, -3), (100, -100)] {
        blit::draw(&mut dest, &src, x, y, blend::replace).unwrap();
    }
    assert_eq!(dest, before);
}

#[test]
fn draw_near_coordinate_limits_is_a_no_op() {
    let mut dest = pattern(8, 8);
    let before = dest.clone();
    let src = PixelBuffer::filled(4, 4, 42u32).unwrap();

    for (x, y) in [(i32::MAX - 1, 0), (0, i32::MAX - 1), (i32::MIN, 0), (0, i32::MIN), (i32::MAX, i32::MIN)] {
        blit::draw(&mut dest, &src, x, y, blend::replace).unwrap();
    }
    blit::draw_region(&mut dest, &src, Rect::new(i32::MIN, 0, i32::MAX, 4), src.bounds(), blend::replace).unwrap();
    assert_eq!(dest, before);
}

#[test]
fn shapes_near_coordinate_limits_leave_buffer_untouched() {
    let mut img: PixelBuffer<u8> = PixelBuffer::new(8, 8).unwrap();
    let far = [(i32::MAX - 1, 0), (0, i32::MAX - 1), (i32::MAX, i32::MIN), (i32::MIN, i32::MAX)];

    for (x, y) in far {
        shapes::draw_rectangle(&mut img, x, y, 4, 4, 1, blend::replace);
        shapes::fill_rectangle(&mut img, x, y, 4, 4, 1);
        shapes::draw_circle(&mut img, x, y, 3, 1).unwrap();
        shapes::fill_circle(&mut img, x, y, 3, 1).unwrap();
        shapes::draw_ellipse(&mut img, x, y, 6, 4, 1).unwrap();
        shapes::fill_ellipse(&mut img, x, y, 4, 4, 1).unwrap();
        shapes::checkerboard(&mut img, x, y, 4, 4, 1, 2, 2).unwrap();
    }
    assert!(lit(&img).is_empty());
}

#[test]
fn long_lines_wrap_through_linear_index() {
    // Row 0 from far left to far right covers every linear index.
    let mut img: PixelBuffer<u8> = PixelBuffer::new(10, 10).unwrap();
    shapes::draw_line(&mut img, -1_200_000_000, 0, 1_200_000_000, 0, 1);
    assert!(img.pixels().iter().all(|&p| p == 1));

    let mut img: PixelBuffer<u8> = PixelBuffer::new(10, 10).unwrap();
    shapes::draw_line(&mut img, i32::MIN, i32::MIN, i32::MAX, i32::MAX, 1);
    let diagonal: BTreeSet<_> = (0..10).map(|i| (i, i)).collect();
    assert_eq!(lit(&img), diagonal);
}

#[test]
fn draw_region_scales_into_destination() {
    let mut dest: PixelBuffer<u32> = PixelBuffer::new(6, 6).unwrap();
    let src = pattern(2, 2);
    blit::draw_region(&mut dest, &src, Rect::new(1, 1, 4, 4), src.bounds(), blend::replace).unwrap();

    // Each source pixel covers a 2x2 block.
    assert_eq!(dest.get(1, 1).unwrap(), 0);
    assert_eq!(dest.get(2, 2).unwrap(), 0);
    assert_eq!(dest.get(3, 1).unwrap(), 1);
    assert_eq!(dest.get(1, 3).unwrap(), 2);
    assert_eq!(dest.get(4, 4).unwrap(), 3);
    assert_eq!(dest.get(0, 0).unwrap(), 0);
    assert_eq!(dest.get(5, 5).unwrap(), 0);
}

#[test]
fn draw_rejects_empty_regions() {
    let mut dest = pattern(4, 4);
    let before = dest.clone();
    let src = pattern(2, 2);
    let err = blit::draw_region(&mut dest, &src, Rect::new(0, 0, 0, 2), src.bounds(), blend::replace).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(dest, before);
}

#[test]
fn horizontal_line_sets_exactly_endpoints_inclusive() {
    let mut img: PixelBuffer<u8> = PixelBuffer::new(10, 10).unwrap();
    shapes::draw_line(&mut img, 0, 0, 5, 0, 1);
    let expected: BTreeSet<_> = (0..=5).map(|x| (x, 0)).collect();
    assert_eq!(lit(&img), expected);
}

#[test]
fn rectangle_outline_only() {
    let mut img: PixelBuffer<u8> = PixelBuffer::new(10, 10).unwrap();
    shapes::draw_rectangle(&mut img, 2, 2, 4, 4, 1, blend::replace);

    let set = lit(&img);
    assert_eq!(set.len(), 12);
    for (x, y) in &set {
        assert!(*x == 2 || *x == 5 || *y == 2 || *y == 5, "{x},{y} not on border");
    }
    for (x, y) in [(3, 3), (4, 3), (3, 4), (4, 4)] {
        assert_eq!(img.get(x, y).unwrap(), 0);
    }
}

#[test]
fn circle_is_mirror_symmetric() {
    let mut img: PixelBuffer<u8> = PixelBuffer::new(10, 10).unwrap();
    shapes::draw_circle(&mut img, 5, 5, 3, 1).unwrap();

    let set = lit(&img);
    assert!(!set.is_empty());
    for &(x, y) in &set {
        assert!(set.contains(&(10 - x, y)), "missing x-mirror of {x},{y}");
        assert!(set.contains(&(x, 10 - y)), "missing y-mirror of {x},{y}");
    }
    assert!(set.contains(&(8, 5)) && set.contains(&(5, 2)));
}

#[test]
fn checkerboard_quadrants_alternate() {
    let mut img: PixelBuffer<u8> = PixelBuffer::new(8, 8).unwrap();
    let err = shapes::checkerboard(&mut img, 0, 0, 8, 8, 1, 2, 0).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(img.pixels().iter().all(|&p| p == 0));

    shapes::checkerboard(&mut img, 0, 0, 8, 8, 1, 2, 4).unwrap();
    for (x, y, p) in img.iter() {
        let left = x % 4 < 2;
        let top = y % 4 < 2;
        let expected = if left == top { 1 } else { 2 };
        assert_eq!(p, expected, "pixel {x},{y}");
    }
}

#[test]
fn byte_array_layout() {
    let mut img: PixelBuffer<Rgba8> = PixelBuffer::new(3, 2).unwrap();
    img.set(1, 1, Rgba8::new(1, 2, 3, 4));
    let out = bytes::to_byte_array(&img);
    assert_eq!(out.len(), 3 * 2 * 4);
    assert_eq!(&out[16..20], &[1, 2, 3, 4]);
    assert!(out[..16].iter().all(|&b| b == 0));
}

#[test]
fn bottom_up_export_matches_flipped_buffer() {
    let mut img: PixelBuffer<Rgba8> = PixelBuffer::new(4, 3).unwrap();
    shapes::draw_line(&mut img, 0, 0, 3, 2, Rgba8::RED);

    let mut flipped = img.clone();
    transform::flip_vertically(&mut flipped);
    assert_eq!(
        bytes::to_byte_array_oriented(&img, RowOrder::BottomUp),
        bytes::to_byte_array(&flipped)
    );
}

#[test]
fn red_square_with_green_outline() {
    let mut img: PixelBuffer<Rgba8> = PixelBuffer::new(4, 4).unwrap();
    assert!(img.pixels().iter().all(|&p| p == Rgba8::TRANSPARENT));

    shapes::fill_rectangle(&mut img, 0, 0, 4, 4, Rgba8::RED);
    shapes::draw_rectangle(&mut img, 1, 1, 2, 2, Rgba8::GREEN, blend::replace);

    let green = [(1, 1), (1, 2), (2, 1), (2, 2)];
    for (x, y, p) in img.iter() {
        let expected = if green.contains(&(x, y)) { Rgba8::GREEN } else { Rgba8::RED };
        assert_eq!(p, expected, "pixel {x},{y}");
    }
}

#[test]
fn tint_then_export() {
    let mut img = PixelBuffer::filled(2, 2, Rgba8::WHITE).unwrap();
    tint::tint(&mut img, Rgba8::new(255, 128, 0, 255), TintMode::Alpha);
    let out = bytes::to_byte_array(&img);
    assert_eq!(&out[0..4], &[255, 128, 0, 255]);
}

#[test]
fn layered_buffer_layers_are_independent() {
    let mut stack: LayeredBuffer<u8> = LayeredBuffer::new(4, 4, 3).unwrap();
    let mut plane: PixelBuffer<u8> = PixelBuffer::new(4, 4).unwrap();
    shapes::fill_rectangle(&mut plane, 0, 0, 4, 4, 5);
    stack.set_layer(1, &plane).unwrap();

    assert_eq!(stack.get(3, 3, 1).unwrap(), 5);
    assert_eq!(stack.get(3, 3, 0).unwrap(), 0);
    assert_eq!(stack.get(0, 0, 2).unwrap(), 0);
    assert_eq!(stack.layer(1).unwrap(), plane);
}
