use crate::picture::{Color, Picture};
use super::{
    barycentric::{barycentric, is_inside},
    depth_buffer::DepthBuffer,
    line::{Point, draw_line},
};

type Vector = [f32; 3];

/// Outlines the triangle. Returns `true` when any edge landed in bounds.
pub fn draw_triangle(t0: Point, t1: Point, t2: Point, picture: &mut Picture, color: Color) -> bool {
    let a = draw_line(t0, t1, picture, color);
    let b = draw_line(t1, t2, picture, color);
    let c = draw_line(t2, t0, picture, color);
    a || b || c
}

/// Fills the triangle with one flat color.
///
/// Triangles whose vertices all share the same y, or all share the same x, are
/// skipped and reported as `false`.
pub fn fill_triangle(t0: Point, t1: Point, t2: Point, picture: &mut Picture, color: Color) -> bool {
    let to_vector = |p: Point| [p[0] as f32, p[1] as f32, 0.0];
    let Some(triangle) = sort_by_height([to_vector(t0), to_vector(t1), to_vector(t2)]) else {
        return false;
    };

    let (width, height) = (picture.xres, picture.yres);
    let mut drawn = false;

    sweep(&triangle, width, height, |x_start, x_end, y| {
        for x in x_start..=x_end {
            drawn |= picture.plot(x, y as isize, color);
        }
    });

    drawn
}

/// Fills the triangle while interpolating z and testing it against `depth_buffer`.
///
/// Candidate pixels come from the same scanline sweep as `fill_triangle`. Each one
/// is kept only if its barycentric weights are all non-negative and its depth is
/// strictly greater than what the buffer already holds.
pub fn fill_triangle_depth_tested(
    t0: Vector, t1: Vector, t2: Vector,
    depth_buffer: &mut DepthBuffer, picture: &mut Picture, color: Color,
) -> bool {
    let Some(triangle) = sort_by_height([t0, t1, t2]) else {
        return false;
    };
    let [a, b, c] = triangle;

    let width = picture.xres.min(depth_buffer.width);
    let height = picture.yres.min(depth_buffer.height);
    let mut drawn = false;

    sweep(&triangle, width, height, |x_start, x_end, y| {
        let row = y as isize;

        for x in x_start..=x_end {
            let weights = barycentric(&a, &b, &c, &[x as f32, y, 0.0]);
            if !is_inside(&weights) {
                continue;
            }

            let z = a[2] * weights[0] + b[2] * weights[1] + c[2] * weights[2];
            if depth_buffer.test_and_set(x, row, z) {
                picture.plot(x, row, color);
                drawn = true;
            }
        }
    });

    drawn
}

// sorts bottom to top by y with three compare-and-swaps, None when the triangle is a line
fn sort_by_height(mut t: [Vector; 3]) -> Option<[Vector; 3]> {
    let flat = t[0][1] == t[1][1] && t[0][1] == t[2][1];
    let upright = t[0][0] == t[1][0] && t[0][0] == t[2][0];
    if flat || upright {
        return None;
    }

    if t[0][1] > t[1][1] {
        t.swap(0, 1);
    }
    if t[0][1] > t[2][1] {
        t.swap(0, 2);
    }
    if t[1][1] > t[2][1] {
        t.swap(1, 2);
    }

    Some(t)
}

/// One of the two edges that only span half of the triangle's height.
struct ShortEdge {
    slope: f32,
    origin: f32,
    fallback_x: isize,
}

impl ShortEdge {
    fn new(mut a: Vector, mut b: Vector) -> Self {
        if a[0] > b[0] {
            std::mem::swap(&mut a, &mut b);
        }

        let slope = if a[0] != b[0] { (b[1] - a[1]) / (b[0] - a[0]) } else { 0.0 };

        Self {
            slope,
            origin: a[1] - a[0] * slope,
            fallback_x: b[0] as isize,
        }
    }

    fn x_at(&self, y: f32) -> isize {
        if self.slope != 0.0 {
            ((y - self.origin) / self.slope) as isize
        } else {
            self.fallback_x
        }
    }
}

/// Walks the scanlines of a sorted triangle and hands every row's span to `span`
/// as (x_start, x_end, y), x_end inclusive and both clipped to the picture.
///
/// The long edge t0 -> t2 bounds one side of every row. The other side comes from
/// t0 -> t1 up to the middle vertex and from t1 -> t2 past it. Boundaries are
/// truncated, never rounded.
fn sweep<F>(triangle: &[Vector; 3], width: usize, height: usize, mut span: F)
where
    F: FnMut(isize, isize, f32),
{
    let [t0, t1, t2] = *triangle;

    // t2.y > t0.y here, so only a vertical long edge has no usable slope
    let long_slope = if t2[0] != t0[0] { (t2[1] - t0[1]) / (t2[0] - t0[0]) } else { 0.0 };
    let long_origin = (t0[1] - t0[0] * long_slope) as isize as f32;

    let upper = ShortEdge::new(t0, t1);
    let lower = ShortEdge::new(t2, t1);
    let upper_height = t1[1] - t0[1];

    // the row window is clamped in f32, far vertices saturate the casts instead of overflowing
    let total = t2[1] - t0[1];
    let first = ((-t0[1]).floor() - 1.0).max(0.0) as isize;
    let last = ((height as f32 - t0[1]).ceil() + 1.0).min(total) as isize;

    for i in first..=last {
        let y = t0[1] + i as f32;
        let row = y as isize;
        if row < 0 || row >= height as isize {
            continue;
        }

        let short = if i as f32 > upper_height || t0[1] == t1[1] { &lower } else { &upper };

        let long_x = if long_slope != 0.0 {
            ((y - long_origin) / long_slope) as isize
        } else {
            t0[0] as isize
        };
        let short_x = short.x_at(y);

        let (x_start, x_end) = if long_x > short_x { (short_x, long_x) } else { (long_x, short_x) };
        let x_start = x_start.max(0);
        let x_end = x_end.min(width as isize - 1);
        if x_start > x_end {
            continue;
        }

        span(x_start, x_end, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BLACK, GREEN, RED, WHITE};

    fn lit(picture: &Picture, x: isize, y: isize) -> bool {
        picture.get(x, y).is_some_and(|c| c != picture.background)
    }

    #[test]
    fn outline_follows_every_edge() {
        let mut picture = Picture::new(64, 64, BLACK);
        assert!(draw_triangle([10, 10], [50, 20], [20, 55], &mut picture, WHITE));
        assert!(lit(&picture, 10, 10));
        assert!(lit(&picture, 50, 20));
        // (20, 55) ends both of its edges, so only the pixel just below it is set
        assert!(!lit(&picture, 20, 55));
        assert!(lit(&picture, 20, 54));
        // outline only, the middle stays empty
        assert!(!lit(&picture, 25, 28));
    }

    #[test]
    fn axis_degenerate_triangles_draw_nothing() {
        let mut picture = Picture::new(64, 64, BLACK);
        assert!(!fill_triangle([5, 20], [40, 20], [60, 20], &mut picture, WHITE));
        assert!(!fill_triangle([7, 3], [7, 50], [7, 30], &mut picture, WHITE));
        assert!(!fill_triangle([9, 9], [9, 9], [9, 9], &mut picture, WHITE));
        assert_eq!(picture.drawn_pixels(), 0);
    }

    #[test]
    fn coincident_points_without_shared_x_still_render() {
        let mut picture = Picture::new(64, 64, BLACK);
        assert!(fill_triangle([10, 10], [10, 10], [50, 50], &mut picture, WHITE));

        assert_eq!(picture.drawn_pixels(), 41);
        for i in 10..=50 {
            assert!(lit(&picture, i, i), "({}, {})", i, i);
        }
    }

    #[test]
    fn right_triangle_has_exact_rows() {
        let mut picture = Picture::new(20, 20, BLACK);
        assert!(fill_triangle([0, 0], [10, 0], [0, 10], &mut picture, WHITE));

        for y in 0..=10 {
            for x in 0..20 {
                assert_eq!(lit(&picture, x, y), x <= 10 - y, "({}, {})", x, y);
            }
        }
        assert_eq!(picture.drawn_pixels(), 66);
    }

    #[test]
    fn boundaries_truncate_instead_of_rounding() {
        let mut picture = Picture::new(10, 10, BLACK);
        fill_triangle([0, 0], [4, 0], [0, 3], &mut picture, WHITE);

        // the short edge crosses row 1 at x = 2.67
        assert!(lit(&picture, 2, 1));
        assert!(!lit(&picture, 3, 1));
        // and row 2 at x = 1.33
        assert!(lit(&picture, 1, 2));
        assert!(!lit(&picture, 2, 2));
        assert_eq!(picture.drawn_pixels(), 5 + 3 + 2 + 1);
    }

    #[test]
    fn vertex_order_does_not_matter() {
        let (a, b, c) = ([10, 10], [30, 20], [15, 40]);
        let mut first = Picture::new(50, 50, BLACK);
        let mut second = Picture::new(50, 50, BLACK);
        fill_triangle(a, b, c, &mut first, WHITE);
        fill_triangle(c, a, b, &mut second, WHITE);
        assert_eq!(first.data, second.data);
    }

    #[test]
    fn rows_are_contiguous_across_the_middle_vertex() {
        let mut picture = Picture::new(50, 50, BLACK);
        fill_triangle([10, 10], [30, 20], [15, 40], &mut picture, WHITE);

        for y in 10..=40 {
            let xs: Vec<isize> = (0..50).filter(|&x| lit(&picture, x, y)).collect();
            assert!(!xs.is_empty(), "row {} is empty", y);
            assert_eq!(xs.len() as isize, xs[xs.len() - 1] - xs[0] + 1, "row {} has a gap", y);
        }
        assert!(lit(&picture, 18, 22));
        assert!(!lit(&picture, 5, 30));
    }

    #[test]
    fn offscreen_parts_are_clipped() {
        let mut picture = Picture::new(10, 10, BLACK);
        assert!(fill_triangle([-20, -20], [30, -5], [5, 30], &mut picture, WHITE));
        assert!(!fill_triangle([-40, -40], [-10, -30], [-25, -5], &mut picture, WHITE));
    }

    #[test]
    fn far_vertices_do_not_overflow_the_row_window() {
        let mut picture = Picture::new(20, 20, BLACK);
        let mut depth = DepthBuffer::new(20, 20);

        fill_triangle_depth_tested([0.0, -1e30, 1.0], [10.0, 5.0, 1.0], [5.0, 10.0, 1.0], &mut depth, &mut picture, WHITE);
        fill_triangle([0, isize::MIN + 1], [10, 5], [5, 10], &mut picture, WHITE);
        fill_triangle([0, isize::MAX], [10, 5], [5, 10], &mut picture, WHITE);
        fill_triangle([isize::MIN, 0], [isize::MAX, 3], [5, 10], &mut picture, WHITE);

        // a far but representable vertex still fills its visible part
        picture.clear();
        assert!(fill_triangle([0, -100_000], [10, 5], [5, 10], &mut picture, WHITE));
        assert!(lit(&picture, 5, 6));
    }

    #[test]
    fn nearer_fragment_overwrites_farther_does_not() {
        let mut depth = DepthBuffer::with_clear_value(50, 50, -0.4);
        let mut picture = Picture::new(50, 50, BLACK);

        let near = [[10.0, 10.0, 0.2], [40.0, 10.0, 0.2], [10.0, 40.0, 0.2]];
        assert!(fill_triangle_depth_tested(near[0], near[1], near[2], &mut depth, &mut picture, RED));
        assert_eq!(picture.get(15, 15), Some(RED));
        assert!((depth.get(15, 15).unwrap() - 0.2).abs() < 1e-5);

        let far = [[5.0, 5.0, -0.6], [45.0, 5.0, -0.6], [5.0, 45.0, -0.6]];
        fill_triangle_depth_tested(far[0], far[1], far[2], &mut depth, &mut picture, GREEN);
        assert_eq!(picture.get(15, 15), Some(RED));
        assert!((depth.get(15, 15).unwrap() - 0.2).abs() < 1e-5);
    }

    #[test]
    fn second_identical_pass_changes_nothing() {
        let mut depth = DepthBuffer::new(50, 50);
        let mut picture = Picture::new(50, 50, BLACK);
        let t = [[10.0, 10.0, 3.0], [40.0, 15.0, 7.0], [20.0, 45.0, 5.0]];

        assert!(fill_triangle_depth_tested(t[0], t[1], t[2], &mut depth, &mut picture, RED));
        let colors = picture.data.clone();
        let (min, max) = depth.min_max();

        assert!(!fill_triangle_depth_tested(t[0], t[1], t[2], &mut depth, &mut picture, GREEN));
        assert_eq!(picture.data, colors);
        assert_eq!(depth.min_max(), (min, max));
    }

    #[test]
    fn draw_order_does_not_change_the_result() {
        let back = [[5.0, 5.0, 10.0], [45.0, 5.0, 10.0], [25.0, 45.0, 10.0]];
        let front = [[5.0, 25.0, 50.0], [45.0, 20.0, 50.0], [25.0, 0.0, 50.0]];

        let mut depth_a = DepthBuffer::new(50, 50);
        let mut picture_a = Picture::new(50, 50, BLACK);
        fill_triangle_depth_tested(back[0], back[1], back[2], &mut depth_a, &mut picture_a, RED);
        fill_triangle_depth_tested(front[0], front[1], front[2], &mut depth_a, &mut picture_a, GREEN);

        let mut depth_b = DepthBuffer::new(50, 50);
        let mut picture_b = Picture::new(50, 50, BLACK);
        fill_triangle_depth_tested(front[0], front[1], front[2], &mut depth_b, &mut picture_b, GREEN);
        fill_triangle_depth_tested(back[0], back[1], back[2], &mut depth_b, &mut picture_b, RED);

        assert_eq!(picture_a.data, picture_b.data);
        assert_eq!(picture_a.get(25, 15), Some(GREEN));
    }

    #[test]
    fn depth_is_interpolated_across_the_face() {
        let mut depth = DepthBuffer::new(40, 40);
        let mut picture = Picture::new(40, 40, BLACK);
        fill_triangle_depth_tested(
            [0.0, 0.0, 0.0], [30.0, 0.0, 30.0], [0.0, 30.0, 0.0],
            &mut depth, &mut picture, WHITE,
        );

        // z grows with x on this face
        for x in [2, 10, 20] {
            let z = depth.get(x, 3).unwrap();
            assert!((z - x as f32).abs() < 1e-3, "x = {} z = {}", x, z);
        }
    }

    #[test]
    fn depth_tested_degenerate_triangle_is_skipped() {
        let mut depth = DepthBuffer::new(10, 10);
        let mut picture = Picture::new(10, 10, BLACK);
        assert!(!fill_triangle_depth_tested(
            [1.0, 4.0, 1.0], [5.0, 4.0, 2.0], [8.0, 4.0, 3.0],
            &mut depth, &mut picture, WHITE,
        ));
        assert_eq!(picture.drawn_pixels(), 0);
    }
}
