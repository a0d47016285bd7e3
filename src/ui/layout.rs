use ratatui::layout::Rect;

/// Splits the terminal into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Carves `height` rows off the top of `area`, clamped to what is left.
/// Returns `None` once `area` is exhausted.
pub fn take_rows(area: &mut Rect, height: u16) -> Option<Rect> {
    if area.height == 0 || height == 0 {
        return None;
    }
    let height = height.min(area.height);
    let slice = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height,
    };
    area.y += height;
    area.height -= height;
    Some(slice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_area() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 18);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn tiny_terminal_gives_header_priority() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 2));
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn take_rows_clamps_and_exhausts() {
        let mut area = Rect::new(0, 5, 40, 6);
        assert_eq!(take_rows(&mut area, 4), Some(Rect::new(0, 5, 40, 4)));
        assert_eq!(take_rows(&mut area, 4), Some(Rect::new(0, 9, 40, 2)));
        assert_eq!(take_rows(&mut area, 1), None);
    }
}
