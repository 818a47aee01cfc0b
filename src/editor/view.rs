//! Frame composition: Projecting the document onto the screen.
//!
//! Each frame draws a line-number gutter, the wrapped document text, the
//! cursor (as a reversed cell), and a one-row status line at the bottom.
//! Scroll is kept so the cursor's visual row is always inside the text
//! viewport.

use super::{layout, Editor};
use crate::screen::Screen;

impl Editor {
    /// Compose the current frame into a cleared screen.
    ///
    /// Adjusts the scroll offset first so the cursor stays visible, then
    /// populates the grid. Must be called between `Screen::clear` and
    /// `Screen::present`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn compose(&mut self, screen: &mut Screen) {
        let width = screen.width();
        let height = screen.height() as usize;
        let gutter = self.config.gutter_width;
        let max_chars = layout::text_width(width, gutter);
        // Bottom row is the status line.
        let visual_height = height.saturating_sub(1);

        let line_count = self.document.line_count();
        let lengths: Vec<usize> = (0..line_count)
            .map(|l| self.document.line_length(l).unwrap_or(0))
            .collect();

        let (cursor_line, cursor_col) = self.cursor();
        let cursor_row: usize = lengths[..cursor_line]
            .iter()
            .map(|&len| layout::visual_rows(len, max_chars))
            .sum::<usize>()
            + layout::row_within_line(cursor_col, max_chars);

        let total_rows: usize = lengths
            .iter()
            .map(|&len| layout::visual_rows(len, max_chars))
            .sum();

        if visual_height > 0 {
            let mut scroll = self
                .scroll()
                .min(total_rows.saturating_sub(visual_height));
            if cursor_row >= scroll + visual_height {
                scroll = cursor_row + 1 - visual_height;
            }
            if cursor_row < scroll {
                scroll = cursor_row;
            }
            self.set_scroll(scroll);
        }
        let scroll = self.scroll();

        // Document text, wrapped into the viewport.
        let mut row = 0usize;
        'lines: for (line, &len) in lengths.iter().enumerate() {
            for seg in 0..layout::visual_rows(len, max_chars) {
                if row >= scroll + visual_height {
                    break 'lines;
                }
                if row >= scroll {
                    let y = (row - scroll) as u16;

                    // Line number only on the first visual row of the line.
                    if seg == 0 {
                        let num = format!("{:<4}", line + 1);
                        for (x, byte) in num.bytes().enumerate() {
                            screen.put(x as u16, y, byte);
                        }
                    }

                    let start = seg * max_chars;
                    for x in 0..max_chars {
                        match self.document.char_at(line, start + x) {
                            Some(byte) => {
                                screen.put(gutter + x as u16, y, byte);
                            }
                            None => break,
                        }
                    }
                }
                row += 1;
            }
        }

        // Cursor: reverse the cell under it.
        if visual_height > 0 && cursor_row >= scroll && cursor_row - scroll < visual_height {
            let cx = layout::screen_column(cursor_col, max_chars, gutter) as u16;
            let cy = (cursor_row - scroll) as u16;
            screen.set_reverse(cx, cy, true);
        }

        self.draw_status(screen, width, height as u16);
    }

    /// Status line: mode name on the left, `line,col` on the right.
    #[allow(clippy::cast_possible_truncation)]
    fn draw_status(&self, screen: &mut Screen, width: u16, height: u16) {
        let Some(y) = height.checked_sub(1) else {
            return;
        };

        for (x, byte) in self.mode().as_str().bytes().enumerate() {
            screen.put(x as u16, y, byte);
        }

        let (line, col) = self.cursor();
        let pos = format!("{},{}", line + 1, col + 1);
        let start_x = (width as usize).saturating_sub(pos.len());
        for (i, byte) in pos.bytes().enumerate() {
            screen.put((start_x + i) as u16, y, byte);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::editor::EditorConfig;
    use crate::input::Key;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn editor_from(content: &[u8]) -> (Editor, NamedTempFile) {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(content).unwrap();
        tmp.flush().unwrap();
        let doc = Document::open(tmp.path()).unwrap();
        (Editor::new(doc, EditorConfig::default()), tmp)
    }

    fn row_string(screen: &Screen, y: u16) -> String {
        (0..screen.width())
            .map(|x| screen.frame().get(x, y).unwrap().ch() as char)
            .collect()
    }

    #[test]
    fn test_compose_gutter_and_text() {
        let (mut editor, _tmp) = editor_from(b"hello\nworld\n");
        let mut screen = Screen::new(20, 5);
        screen.clear();
        editor.compose(&mut screen);

        assert_eq!(row_string(&screen, 0), "1    hello          ");
        assert_eq!(row_string(&screen, 1), "2    world          ");
    }

    #[test]
    fn test_compose_status_line() {
        let (mut editor, _tmp) = editor_from(b"hello\n");
        let mut screen = Screen::new(20, 5);
        screen.clear();
        editor.compose(&mut screen);

        let status = row_string(&screen, 4);
        assert!(status.starts_with("NORMAL"));
        assert!(status.ends_with("1,1"));
    }

    #[test]
    fn test_compose_status_tracks_mode_and_cursor() {
        let (mut editor, _tmp) = editor_from(b"hello\n");
        editor.handle_key(Key::Char('l'));
        editor.handle_key(Key::Char('i'));
        let mut screen = Screen::new(20, 5);
        screen.clear();
        editor.compose(&mut screen);

        let status = row_string(&screen, 4);
        assert!(status.starts_with("INSERT"));
        assert!(status.ends_with("1,2"));
    }

    #[test]
    fn test_compose_cursor_is_reversed() {
        let (mut editor, _tmp) = editor_from(b"hello\n");
        let mut screen = Screen::new(20, 5);
        screen.clear();
        editor.compose(&mut screen);

        // Cursor at (0,0) draws at the first text column.
        let cell = screen.frame().get(5, 0).unwrap();
        assert_eq!(cell.ch(), b'h');
        assert!(cell.is_reversed());
    }

    #[test]
    fn test_compose_wraps_long_lines() {
        // Width 10, gutter 5: 5 text columns per visual row.
        let (mut editor, _tmp) = editor_from(b"abcdefgh\n");
        let mut screen = Screen::new(10, 5);
        screen.clear();
        editor.compose(&mut screen);

        assert_eq!(row_string(&screen, 0), "1    abcde");
        // Continuation row carries no line number.
        assert_eq!(row_string(&screen, 1), "     fgh  ");
    }

    #[test]
    fn test_compose_scrolls_to_cursor() {
        let content: Vec<u8> = (1..=20)
            .flat_map(|i| format!("line{i}\n").into_bytes())
            .collect();
        let (mut editor, _tmp) = editor_from(&content);
        // Move to the last line; viewport is 4 text rows.
        for _ in 0..19 {
            editor.handle_key(Key::Char('j'));
        }
        let mut screen = Screen::new(20, 5);
        screen.clear();
        editor.compose(&mut screen);

        // Cursor row 19, viewport height 4 -> scroll 16.
        assert_eq!(editor.scroll(), 16);
        assert_eq!(row_string(&screen, 3), "20   line20         ");
    }

    #[test]
    fn test_compose_scrolls_back_up() {
        let content: Vec<u8> = (1..=20)
            .flat_map(|i| format!("line{i}\n").into_bytes())
            .collect();
        let (mut editor, _tmp) = editor_from(&content);
        for _ in 0..19 {
            editor.handle_key(Key::Char('j'));
        }
        let mut screen = Screen::new(20, 5);
        screen.clear();
        editor.compose(&mut screen);
        for _ in 0..19 {
            editor.handle_key(Key::Char('k'));
        }
        screen.clear();
        editor.compose(&mut screen);

        assert_eq!(editor.scroll(), 0);
        assert_eq!(row_string(&screen, 0), "1    line1          ");
    }

    #[test]
    fn test_compose_tiny_screen_does_not_panic() {
        let (mut editor, _tmp) = editor_from(b"hello\n");
        let mut screen = Screen::new(3, 1);
        screen.clear();
        editor.compose(&mut screen);
        let mut screen = Screen::new(0, 0);
        screen.clear();
        editor.compose(&mut screen);
    }
}
