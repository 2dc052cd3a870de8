use googly_core::Rgb;
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use crate::pixmap::Pixmap;

/// Render a pixmap into a terminal rect using Unicode half-block characters.
///
/// Each terminal cell shows two vertically stacked pixels via the upper
/// half-block (`▀`): the top pixel as the foreground color, the bottom as
/// the background. The pixmap is downsampled to fit `area` with
/// nearest-neighbour scaling, which keeps the characteristic crisp edges of
/// the eye shapes at any terminal size.
pub fn render_pixmap(buf: &mut Buffer, area: Rect, pix: &Pixmap) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let src_w = pix.width();
    let src_h = pix.height();
    if src_w == 0 || src_h == 0 {
        return;
    }

    let cell_w = area.width as u32;
    let cell_h = area.height as u32;
    let pixel_h = cell_h * 2; // two vertical pixels per cell

    for cy in 0..cell_h {
        for cx in 0..cell_w {
            let top_py = (cy * 2 * src_h) / pixel_h;
            let bot_py = ((cy * 2 + 1) * src_h) / pixel_h;
            let px = (cx * src_w) / cell_w;

            let top = match pix.pixel(px, top_py) {
                Some(p) => p,
                None => continue,
            };
            let bot = match pix.pixel(px, bot_py) {
                Some(p) => p,
                None => continue,
            };

            let x = area.x + cx as u16;
            let y = area.y + cy as u16;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char('▀');
                cell.set_fg(rgb_color(top));
                cell.set_bg(rgb_color(bot));
            }
        }
    }
}

fn rgb_color(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}
