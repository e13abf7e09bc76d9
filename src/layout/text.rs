use crate::page::*;
use crate::units::Pt;

/// One row of output on a page: either a run of text, or an empty row that
/// only advances the baseline
#[derive(Debug, Clone, PartialEq)]
pub enum TextRow {
    Text {
        text: String,
        font: SpanFont,
        char_spacing: Pt,
    },
    Gap,
}

/// Calculates where the first baseline of a page goes: at the left edge of the
/// content box, `drop` below its top edge.
pub fn baseline_start(page: &Page, drop: Pt) -> (Pt, Pt) {
    let x = page.content_box.x1;
    let y = page.content_box.y2 - drop;
    (x, y)
}

/// Lays rows out top to bottom starting at `start`, moving down by `leading`
/// after every row regardless of the font each row is set in.
///
/// Rows are never moved to another page. Rows whose baseline falls below the
/// content box are still placed (and will likely be clipped by the reader), and
/// a warning is logged.
///
/// Returns the baseline the next row would have been placed on
pub fn layout_rows(page: &mut Page, start: (Pt, Pt), rows: Vec<TextRow>, leading: Pt) -> (Pt, Pt) {
    let (x, mut y) = start;
    let mut overflowed = 0usize;

    for row in rows.into_iter() {
        if let TextRow::Text {
            text,
            font,
            char_spacing,
        } = row
        {
            if y < page.content_box.y1 {
                overflowed += 1;
            }
            page.add_span(SpanLayout {
                text,
                font,
                char_spacing,
                coords: (x, y),
            });
        }
        y -= leading;
    }

    if overflowed > 0 {
        log::warn!("{overflowed} line(s) run past the bottom margin of the page");
    }

    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Font;
    use crate::layout::Margins;
    use crate::pagesize;
    use id_arena::Arena;

    fn row(text: &str, font: SpanFont) -> TextRow {
        TextRow::Text {
            text: text.to_string(),
            font,
            char_spacing: Pt(0.0),
        }
    }

    #[test]
    fn rows_step_down_by_the_leading() {
        let mut fonts: Arena<Font> = Arena::new();
        let font = SpanFont {
            id: fonts.alloc(Font::Helvetica),
            size: Pt(11.0),
        };

        let mut page = Page::new(pagesize::LETTER, Some(Margins::all(Pt(90.0))));
        let start = baseline_start(&page, Pt(20.0));
        assert_eq!(start, (Pt(90.0), Pt(682.0)));

        let end = layout_rows(
            &mut page,
            start,
            vec![row("one", font), TextRow::Gap, row("two", font)],
            Pt(16.5),
        );
        assert_eq!(end, (Pt(90.0), Pt(682.0 - 3.0 * 16.5)));

        let coords: Vec<(Pt, Pt)> = page.spans().map(|s| s.coords).collect();
        assert_eq!(coords, vec![(Pt(90.0), Pt(682.0)), (Pt(90.0), Pt(682.0 - 33.0))]);
    }

    #[test]
    fn overflowing_rows_are_still_placed() {
        let mut fonts: Arena<Font> = Arena::new();
        let font = SpanFont {
            id: fonts.alloc(Font::Helvetica),
            size: Pt(11.0),
        };

        let mut page = Page::new(pagesize::LETTER, Some(Margins::all(Pt(90.0))));
        let rows = (0..60).map(|i| row(&format!("row {i}"), font)).collect();
        let start = baseline_start(&page, Pt(20.0));
        layout_rows(&mut page, start, rows, Pt(16.5));
        assert_eq!(page.spans().count(), 60);
    }
}
