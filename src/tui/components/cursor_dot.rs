// Cursor dot - inverted block trailing the pointer
//
// The dot inverts whatever is under it, so it stays visible over both the
// page and the inverse-colored works panel.

use crate::tracker::Point;
use crate::tui::app::App;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let Some((center, size)) = app.cursor_dot() else {
        return;
    };
    let (cell_w, cell_h) = app.cell_size();
    let area = f.area();
    let rect = dot_rect(center, size, cell_w, cell_h, area);
    invert(f.buffer_mut(), rect);
}

/// Cells covered by a dot of `size` pixels centered on `center`
pub fn dot_rect(center: Point, size: f64, cell_w: f64, cell_h: f64, area: Rect) -> Rect {
    let width = (size / cell_w).round().max(1.0);
    let height = (size / cell_h).round().max(1.0);
    let left = (center.x + 0.5 - width / 2.0).floor();
    let top = (center.y + 0.5 - height / 2.0).floor();

    let clamp = |v: f64, max: u16| v.clamp(0.0, f64::from(max)) as u16;
    let x0 = clamp(left, area.right());
    let y0 = clamp(top, area.bottom());
    let x1 = clamp(left + width, area.right());
    let y1 = clamp(top + height, area.bottom());
    Rect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0)).intersection(area)
}

fn invert(buf: &mut Buffer, rect: Rect) {
    for y in rect.top()..rect.bottom() {
        for x in rect.left()..rect.right() {
            if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
                cell.set_style(Style::default().add_modifier(Modifier::REVERSED));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn test_normal_dot_is_small_block() {
        // 20px over 8x16 cells: 3 wide (2.5 rounds up), 1 tall
        let rect = dot_rect(Point::new(40.0, 12.0), 20.0, 8.0, 16.0, AREA);
        assert_eq!(rect.width, 3);
        assert_eq!(rect.height, 1);
        assert!(rect.contains(Position::new(40, 12)));
    }

    #[test]
    fn test_enlarged_dot_is_bigger() {
        let normal = dot_rect(Point::new(40.0, 12.0), 20.0, 8.0, 16.0, AREA);
        let enlarged = dot_rect(Point::new(40.0, 12.0), 35.0, 8.0, 16.0, AREA);
        assert!(enlarged.area() > normal.area());
        assert!(enlarged.contains(Position::new(40, 12)));
    }

    #[test]
    fn test_dot_clipped_at_edges() {
        let rect = dot_rect(Point::new(0.0, 0.0), 35.0, 8.0, 16.0, AREA);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 0);
        let rect = dot_rect(Point::new(79.0, 23.0), 35.0, 8.0, 16.0, AREA);
        assert!(rect.right() <= 80 && rect.bottom() <= 24);
    }

    #[test]
    fn test_invert_sets_reversed() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        invert(&mut buf, Rect::new(1, 0, 2, 1));
        let reversed = |x, y| {
            buf.cell(Position::new(x, y))
                .map(|c| c.modifier.contains(Modifier::REVERSED))
                .unwrap_or(false)
        };
        assert!(reversed(1, 0));
        assert!(reversed(2, 0));
        assert!(!reversed(0, 0));
        assert!(!reversed(1, 1));
    }
}
