//! Small drawing helpers shared by the rotating sections.

use raylib::prelude::*;
use crate::constants::{DOT_RADIUS, DOT_SPACING};

/// Average glyph width relative to font size for the default font
pub const GLYPH_ASPECT: f32 = 0.55;

/// Centres of `count` navigation dots, centred horizontally near the bottom of `area`.
pub fn dot_centers(area: Rectangle, count: usize) -> Vec<Vector2> {
    let spacing = DOT_SPACING as f32;
    let row_width = spacing * count.saturating_sub(1) as f32;
    let start_x = area.x + (area.width - row_width) * 0.5;
    let y = area.y + area.height - spacing;
    (0..count)
        .map(|i| Vector2::new(start_x + spacing * i as f32, y))
        .collect()
}

/// Index of the dot under `point`, if any.
pub fn dot_at(area: Rectangle, count: usize, point: Vector2) -> Option<usize> {
    let reach = DOT_RADIUS * 2.0;
    dot_centers(area, count).iter().position(|c| {
        let dx = c.x - point.x;
        let dy = c.y - point.y;
        dx * dx + dy * dy <= reach * reach
    })
}

/// Draw one dot per item, filling only the active one.
pub fn draw_dots(d: &mut RaylibDrawHandle, area: Rectangle, count: usize, active: usize) {
    for (i, center) in dot_centers(area, count).into_iter().enumerate() {
        if i == active {
            d.draw_circle_v(center, DOT_RADIUS, Color::WHITE);
        } else {
            d.draw_circle_lines(center.x as i32, center.y as i32, DOT_RADIUS, Color::LIGHTGRAY);
        }
    }
}

/// Greedy word wrap on character count.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Rough pixel width of `text` in the default raylib font.
pub fn approx_text_width(text: &str, size: i32) -> i32 {
    (text.chars().count() as f32 * size as f32 * GLYPH_ASPECT) as i32
}

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha.clamp(0.0, 1.0)) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rectangle {
        Rectangle::new(0.0, 0.0, 400.0, 200.0)
    }

    #[test]
    fn test_dots_are_centred() {
        let centers = dot_centers(area(), 3);
        assert_eq!(centers.len(), 3);
        assert_eq!(centers[1].x, 200.0);
        assert_eq!(centers[0].y, 200.0 - DOT_SPACING as f32);
    }

    #[test]
    fn test_dot_hit_testing() {
        let centers = dot_centers(area(), 4);
        assert_eq!(dot_at(area(), 4, centers[2]), Some(2));
        assert_eq!(dot_at(area(), 4, Vector2::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap("The canapes were gone in ten minutes", 16);
        assert_eq!(lines, vec!["The canapes were", "gone in ten", "minutes"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_with_alpha_scales_opacity() {
        assert_eq!(with_alpha(Color::WHITE, 0.5).a, 127);
        assert_eq!(with_alpha(Color::WHITE, 2.0).a, 255);
    }
}
