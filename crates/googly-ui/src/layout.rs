use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct ScreenRects {
    pub face: Rect,
    pub status: Rect,
}

/// Split the screen into the face canvas and a one-line status bar.
pub fn screen_layout(area: Rect) -> ScreenRects {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // face
            Constraint::Length(1), // status bar
        ])
        .split(area);

    ScreenRects {
        face: chunks[0],
        status: chunks[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_bar_takes_one_line() {
        let rects = screen_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(rects.face.height, 23);
        assert_eq!(rects.status.height, 1);
        assert_eq!(rects.status.y, 23);
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let rects = screen_layout(Rect::new(0, 0, 1, 1));
        assert!(rects.face.height + rects.status.height <= 1);
    }
}
