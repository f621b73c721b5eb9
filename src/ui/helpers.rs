//! Helper functions for UI rendering

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Spinner frames for the loading indicator
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for the given tick (ticks run at ~60fps, frames at ~12fps).
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[((tick / 5) % SPINNER_FRAMES.len() as u64) as usize]
}

/// Truncate a string to fit `max_width` display columns, ending with "…"
/// when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// A rect of the given size centered in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("pikachu", 10), "pikachu");
        assert_eq!(truncate_to_width("pikachu", 7), "pikachu");
        assert_eq!(truncate_to_width("pikachu", 5), "pika…");
        assert_eq!(truncate_to_width("pikachu", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each kana is two columns wide
        assert_eq!(truncate_to_width("ピカチュウ", 5), "ピカ…");
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 6, area), Rect::new(20, 9, 40, 6));
        assert_eq!(centered_rect(100, 50, area), area);
    }

    #[test]
    fn test_spinner_frame_cycles() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(5), SPINNER_FRAMES[1]);
        assert_eq!(spinner_frame(50), SPINNER_FRAMES[0]);
    }
}
