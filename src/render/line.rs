use std::mem::swap;

use crate::picture::{Color, Picture};

pub type Point = [isize; 2];

/// Draws the segment p0 -> p1.
///
/// The sweep always runs along the longer axis, from the smaller coordinate up to
/// but not including the larger one, so `draw_line(a, b)` and `draw_line(b, a)`
/// set the same pixels. Returns whether any pixel landed inside the picture.
pub fn draw_line(p0: Point, p1: Point, picture: &mut Picture, color: Color) -> bool {
    let [mut x0, mut y0] = p0;
    let [mut x1, mut y1] = p1;

    // steep lines are drawn transposed so consecutive pixels never leave a gap
    let steep = x1.abs_diff(x0) < y1.abs_diff(y0);
    if steep {
        swap(&mut x0, &mut y0);
        swap(&mut x1, &mut y1);
    }

    if x0 > x1 {
        swap(&mut x0, &mut x1);
        swap(&mut y0, &mut y1);
    }

    // a zero extent along the sweep axis means both endpoints are the same pixel
    if x0 == x1 {
        return plot(picture, x0, y0, steep, color);
    }

    let slope = (y1 as f32 - y0 as f32) / (x1 as f32 - x0 as f32);
    let intercept = y0 as f32 - slope * x0 as f32;

    // columns outside the picture can never land, so the sweep is clipped to it
    let sweep_limit = (if steep { picture.yres } else { picture.xres }) as isize;

    let mut drawn = false;
    for x in x0.max(0)..x1.min(sweep_limit) {
        let y = (slope * x as f32 + intercept).round() as isize;
        drawn |= plot(picture, x, y, steep, color);
    }

    drawn
}

fn plot(picture: &mut Picture, x: isize, y: isize, steep: bool, color: Color) -> bool {
    if steep {
        picture.plot(y, x, color)
    } else {
        picture.plot(x, y, color)
    }
}
