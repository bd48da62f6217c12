use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tui_big_text::{BigText, PixelSize};

/// Terminal cells one glyph takes at a pixel size, as (columns, rows).
pub fn glyph_cells(size: PixelSize) -> (u16, u16) {
    match size {
        PixelSize::Full => (8, 8),
        PixelSize::HalfHeight => (8, 4),
        PixelSize::HalfWidth => (4, 8),
        _ => (4, 4),
    }
}

/// Largest pixel size at which `chars` glyphs fit in `width` x `height`.
pub fn fit_pixel_size(chars: usize, width: u16, height: u16) -> Option<PixelSize> {
    if chars == 0 {
        return None;
    }
    let chars = u16::try_from(chars).ok()?;

    [
        PixelSize::Full,
        PixelSize::HalfHeight,
        PixelSize::HalfWidth,
        PixelSize::Quadrant,
    ]
    .into_iter()
    .find(|size| {
        let (w, h) = glyph_cells(*size);
        chars.checked_mul(w).is_some_and(|needed| needed <= width) && h <= height
    })
}

/// Draws `text` as large as the area allows, centred. Falls back to a plain
/// line when even the smallest glyphs do not fit.
pub fn draw_scaled(f: &mut Frame, area: Rect, text: &str, style: Style) {
    let chars = text.chars().count();
    let Some(size) = fit_pixel_size(chars, area.width, area.height) else {
        let y = area.y + area.height.saturating_sub(1) / 2;
        let row = Rect::new(area.x, y, area.width, area.height.min(1));
        let widget = Paragraph::new(Line::from(text.to_string()))
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(widget, row);
        return;
    };

    let (w, h) = glyph_cells(size);
    let text_width = chars as u16 * w;
    let x = area.x + (area.width - text_width) / 2;
    let y = area.y + (area.height - h) / 2;
    let target = Rect::new(x, y, text_width, h);

    let big = BigText::builder()
        .pixel_size(size)
        .style(style)
        .lines(vec![Line::from(text.to_string())])
        .build();
    f.render_widget(big, target);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_full_when_room() {
        assert_eq!(fit_pixel_size(8, 80, 10), Some(PixelSize::Full));
    }

    #[test]
    fn test_scales_down_to_width() {
        // 9 glyphs ("-00:00:30") need 72 columns at full size.
        assert_eq!(fit_pixel_size(9, 60, 10), Some(PixelSize::HalfWidth));
        assert_eq!(fit_pixel_size(9, 80, 5), Some(PixelSize::HalfHeight));
        assert_eq!(fit_pixel_size(9, 40, 5), Some(PixelSize::Quadrant));
    }

    #[test]
    fn test_falls_back_when_nothing_fits() {
        assert_eq!(fit_pixel_size(9, 20, 10), None);
        assert_eq!(fit_pixel_size(3, 80, 3), None);
        assert_eq!(fit_pixel_size(0, 80, 10), None);
    }
}
