use protocol::{Point, StrokeSegment};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, LINE_WIDTH};

pub const BACKGROUND: u8 = 255;
pub const INK: u8 = 0;

/// Single-channel raster. Knows nothing about rounds; the room decides when it is active.
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    active: bool,
    drawing: bool,
    last: Point,
}

impl Canvas {
    pub fn new() -> Self {
        Self::with_size(CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; width * height],
            active: false,
            drawing: false,
            last: Point::default(),
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
        self.drawing = false;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pointer_down(&mut self, at: Point) {
        if !self.active {
            return;
        }
        self.drawing = true;
        self.last = at;
    }

    pub fn pointer_move(&mut self, to: Point) -> Option<StrokeSegment> {
        if !self.active || !self.drawing {
            return None;
        }
        let segment = StrokeSegment { from: self.last, to };
        self.stroke(segment);
        self.last = to;
        Some(segment)
    }

    /// Pointer released or left the surface.
    pub fn pointer_up(&mut self) {
        if !self.active {
            return;
        }
        self.drawing = false;
    }

    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|p| *p == BACKGROUND)
    }

    /// Liang-Barsky against the surface grown by the brush radius.
    /// Whatever survives is at most a few surface-widths long.
    fn clip(&self, seg: StrokeSegment) -> Option<(i64, i64, i64, i64)> {
        let r = (LINE_WIDTH / 2) as f64;
        let (xmin, ymin) = (-r, -r);
        let (xmax, ymax) = (self.width as f64 - 1.0 + r, self.height as f64 - 1.0 + r);
        let (x0, y0) = (seg.from.x as f64, seg.from.y as f64);
        let (dx, dy) = (seg.to.x as f64 - x0, seg.to.y as f64 - y0);
        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        for (p, q) in [(-dx, x0 - xmin), (dx, xmax - x0), (-dy, y0 - ymin), (dy, ymax - y0)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                if t > t1 {
                    return None;
                }
                t0 = t0.max(t);
            } else {
                if t < t0 {
                    return None;
                }
                t1 = t1.min(t);
            }
        }
        Some((
            (x0 + t0 * dx).round() as i64,
            (y0 + t0 * dy).round() as i64,
            (x0 + t1 * dx).round() as i64,
            (y0 + t1 * dy).round() as i64,
        ))
    }

    // bresenham, on the clipped segment
    fn stroke(&mut self, seg: StrokeSegment) {
        let (mut x, mut y, x1, y1) = match self.clip(seg) {
            Some(clipped) => clipped,
            None => return,
        };
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.stamp(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn stamp(&mut self, cx: i64, cy: i64) {
        let r = (LINE_WIDTH / 2) as i64;
        for y in cy - r..=cy + r {
            for x in cx - r..=cx + r {
                if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
                    self.pixels[y as usize * self.width + x as usize] = INK;
                }
            }
        }
    }

    /// Downsamples to `cols`x`rows` cells, `#` where a cell holds any ink.
    pub fn render_ascii(&self, cols: usize, rows: usize) -> String {
        let cols = cols.clamp(1, self.width.max(1));
        let rows = rows.clamp(1, self.height.max(1));
        let mut out = String::with_capacity((cols + 3) * (rows + 2));
        let border = format!("+{}+", "-".repeat(cols));
        out.push_str(&border);
        out.push('\n');
        for row in 0..rows {
            out.push('|');
            let (y0, y1) = (row * self.height / rows, (row + 1) * self.height / rows);
            for col in 0..cols {
                let (x0, x1) = (col * self.width / cols, (col + 1) * self.width / cols);
                let inked = (y0..y1).any(|y| {
                    self.pixels[y * self.width + x0..y * self.width + x1]
                        .iter()
                        .any(|p| *p == INK)
                });
                out.push(if inked { '#' } else { ' ' });
            }
            out.push_str("|\n");
        }
        out.push_str(&border);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_blank() {
        let canvas = Canvas::new();
        assert!(canvas.is_blank());
        assert_eq!(canvas.pixel(0, 0), Some(BACKGROUND));
        assert_eq!(canvas.pixel(CANVAS_WIDTH, 0), None);
    }

    #[test]
    fn inactive_surface_ignores_pointer() {
        let mut canvas = Canvas::new();
        canvas.pointer_down(Point::new(10, 10));
        assert_eq!(canvas.pointer_move(Point::new(50, 10)), None);
        canvas.pointer_up();
        assert!(canvas.is_blank());
    }

    #[test]
    fn drag_draws_connected_segments() {
        let mut canvas = Canvas::new();
        canvas.set_active(true);
        assert_eq!(canvas.pointer_move(Point::new(5, 5)), None);
        canvas.pointer_down(Point::new(10, 10));
        let seg = canvas.pointer_move(Point::new(20, 10)).unwrap();
        assert_eq!(seg, StrokeSegment { from: Point::new(10, 10), to: Point::new(20, 10) });
        let seg = canvas.pointer_move(Point::new(20, 30)).unwrap();
        assert_eq!(seg.from, Point::new(20, 10));
        for x in 10..=20 {
            assert_eq!(canvas.pixel(x, 10), Some(INK));
        }
        for y in 10..=30 {
            assert_eq!(canvas.pixel(20, y), Some(INK));
        }
        // width 3
        assert_eq!(canvas.pixel(15, 9), Some(INK));
        assert_eq!(canvas.pixel(15, 11), Some(INK));
        assert_eq!(canvas.pixel(15, 12), Some(BACKGROUND));
    }

    #[test]
    fn release_ends_stroke() {
        let mut canvas = Canvas::new();
        canvas.set_active(true);
        canvas.pointer_down(Point::new(0, 0));
        canvas.pointer_up();
        assert_eq!(canvas.pointer_move(Point::new(40, 40)), None);
        assert!(canvas.is_blank());
    }

    #[test]
    fn off_surface_points_are_clipped() {
        let mut canvas = Canvas::with_size(20, 20);
        canvas.set_active(true);
        canvas.pointer_down(Point::new(-10, 5));
        canvas.pointer_move(Point::new(30, 5));
        assert_eq!(canvas.pixel(0, 5), Some(INK));
        assert_eq!(canvas.pixel(19, 5), Some(INK));
    }

    #[test]
    fn extreme_coordinates_stay_on_surface() {
        let mut canvas = Canvas::with_size(20, 20);
        canvas.set_active(true);
        canvas.pointer_down(Point::new(i32::MIN, 0));
        canvas.pointer_move(Point::new(i32::MAX, 0));
        assert_eq!(canvas.pixel(0, 0), Some(INK));
        assert_eq!(canvas.pixel(19, 0), Some(INK));
        assert_eq!(canvas.pixel(10, 2), Some(BACKGROUND));

        canvas.pointer_down(Point::new(i32::MIN, i32::MIN));
        canvas.pointer_move(Point::new(i32::MAX, i32::MAX));
        assert_eq!(canvas.pixel(10, 10), Some(INK));
    }

    #[test]
    fn far_move_only_walks_visible_part() {
        let mut canvas = Canvas::new();
        canvas.set_active(true);
        canvas.pointer_down(Point::new(0, 0));
        let started = std::time::Instant::now();
        canvas.pointer_move(Point::new(200_000_000, 0));
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
        assert_eq!(canvas.pixel(CANVAS_WIDTH - 1, 0), Some(INK));
        assert_eq!(canvas.pixel(CANVAS_WIDTH - 1, 2), Some(BACKGROUND));
    }

    #[test]
    fn segment_wholly_off_surface_draws_nothing() {
        let mut canvas = Canvas::with_size(20, 20);
        canvas.set_active(true);
        canvas.pointer_down(Point::new(-100, -100));
        assert!(canvas.pointer_move(Point::new(-50, -100)).is_some());
        canvas.pointer_move(Point::new(500, -3));
        assert!(canvas.is_blank());
    }

    #[test]
    fn clear_wipes_ink() {
        let mut canvas = Canvas::new();
        canvas.set_active(true);
        canvas.pointer_down(Point::new(1, 1));
        canvas.pointer_move(Point::new(2, 2));
        assert!(!canvas.is_blank());
        canvas.clear();
        assert!(canvas.is_blank());
        assert_eq!(canvas.pointer_move(Point::new(3, 3)), None);
    }

    #[test]
    fn ascii_marks_inked_cells() {
        let mut canvas = Canvas::with_size(40, 20);
        canvas.set_active(true);
        canvas.pointer_down(Point::new(1, 1));
        canvas.pointer_move(Point::new(2, 1));
        let art = canvas.render_ascii(4, 2);
        assert_eq!(art, "+----+\n|#   |\n|    |\n+----+");
    }
}
