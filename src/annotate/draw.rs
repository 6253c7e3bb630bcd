//! Closed-polygon stroke rasterization.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

/// Stroke color for every overlay: pure green.
pub const STROKE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Stroke thickness in pixels, realized as a square brush stamped along each
/// line segment.
pub const STROKE_THICKNESS: i32 = 2;

/// Strokes the closed polygon through `vertices` onto `image` in place.
///
/// Every consecutive vertex pair forms an edge and the last vertex connects
/// back to the first, so callers never need to repeat the starting point.
/// Degenerate inputs are drawn, not rejected: a single vertex stamps one
/// brush dot, two vertices stroke the segment twice (once per direction), and
/// an empty slice is a no-op. Pixels falling outside the canvas are clipped.
pub fn stroke_closed_polygon(image: &mut RgbImage, vertices: &[(i32, i32)]) {
    for (index, &start) in vertices.iter().enumerate() {
        let end = vertices[(index + 1) % vertices.len()];
        stroke_segment(image, start, end);
    }
}

/// Draws one thick segment by repeating the 1 px rasterized line at each
/// brush offset.
fn stroke_segment(image: &mut RgbImage, start: (i32, i32), end: (i32, i32)) {
    for dx in 0..STROKE_THICKNESS {
        for dy in 0..STROKE_THICKNESS {
            draw_line_segment_mut(
                image,
                ((start.0 + dx) as f32, (start.1 + dy) as f32),
                ((end.0 + dx) as f32, (end.1 + dy) as f32),
                STROKE_COLOR,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn blank(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, WHITE)
    }

    #[test]
    fn square_outline_touches_all_four_edges() {
        let mut image = blank(100, 100);
        stroke_closed_polygon(&mut image, &[(10, 10), (60, 10), (60, 60), (10, 60)]);

        // Midpoint of each edge, including the closing edge back to (10, 10).
        assert_eq!(*image.get_pixel(35, 10), STROKE_COLOR);
        assert_eq!(*image.get_pixel(60, 35), STROKE_COLOR);
        assert_eq!(*image.get_pixel(35, 60), STROKE_COLOR);
        assert_eq!(*image.get_pixel(10, 35), STROKE_COLOR);
        // Interior stays untouched.
        assert_eq!(*image.get_pixel(35, 35), WHITE);
    }

    #[test]
    fn stroke_is_two_pixels_thick() {
        let mut image = blank(100, 100);
        stroke_closed_polygon(&mut image, &[(10, 20), (80, 20)]);

        assert_eq!(*image.get_pixel(40, 20), STROKE_COLOR);
        assert_eq!(*image.get_pixel(40, 21), STROKE_COLOR);
        assert_eq!(*image.get_pixel(40, 19), WHITE);
        assert_eq!(*image.get_pixel(40, 22), WHITE);
    }

    #[test]
    fn empty_vertex_list_leaves_image_untouched() {
        let mut image = blank(32, 32);
        let before = image.clone();
        stroke_closed_polygon(&mut image, &[]);
        assert_eq!(image, before);
    }

    #[test]
    fn single_vertex_stamps_one_brush_dot() {
        let mut image = blank(32, 32);
        stroke_closed_polygon(&mut image, &[(5, 7)]);

        for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert_eq!(*image.get_pixel((5 + dx) as u32, (7 + dy) as u32), STROKE_COLOR);
        }
        assert_eq!(*image.get_pixel(4, 7), WHITE);
        assert_eq!(*image.get_pixel(7, 7), WHITE);
    }

    #[test]
    fn off_canvas_vertices_are_clipped_without_panicking() {
        let mut image = blank(50, 50);
        stroke_closed_polygon(&mut image, &[(-40, 25), (90, 25)]);

        // The visible span of the horizontal line is drawn.
        assert_eq!(*image.get_pixel(0, 25), STROKE_COLOR);
        assert_eq!(*image.get_pixel(49, 25), STROKE_COLOR);
    }

    #[test]
    fn collinear_vertices_draw_without_panicking() {
        let mut image = blank(64, 64);
        stroke_closed_polygon(&mut image, &[(5, 5), (20, 5), (40, 5)]);
        assert_eq!(*image.get_pixel(30, 5), STROKE_COLOR);
    }
}
