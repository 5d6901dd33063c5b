use std::ops::Range;

use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Position, Rect, Size},
    style::Style,
    symbols::line,
    Terminal,
};

use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::error::Result;
use crate::layout::{clusters, layout_words, str_width};

/// Cell-addressed drawing over a ratatui terminal.
///
/// Writes land in a grid that outlives individual frames and only reach the
/// terminal on [`Surface::sync`], so callers can batch everything one event
/// produces into a single flush. Writes outside the grid are dropped.
pub struct Surface<B: Backend> {
    terminal: Terminal<B>,
    grid: Buffer,
    cursor: Option<Position>,
}

impl<B: Backend> Surface<B> {
    pub fn new(terminal: Terminal<B>) -> Result<Self> {
        let size = terminal.size()?;
        Ok(Self {
            terminal,
            grid: Buffer::empty(Rect::new(0, 0, size.width, size.height)),
            cursor: None,
        })
    }

    /// (width, height) in cells
    pub fn size(&self) -> (u16, u16) {
        (self.grid.area.width, self.grid.area.height)
    }

    pub fn grid(&self) -> &Buffer {
        &self.grid
    }

    pub fn cursor(&self) -> Option<Position> {
        self.cursor
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    fn set_cell(&mut self, x: u16, y: u16, symbol: &str, width: u16, style: Style) {
        if let Some(cell) = self.grid.cell_mut((x, y)) {
            cell.reset();
            cell.set_symbol(symbol).set_style(style);
        }
        // cells hidden under a wide symbol
        for dx in 1..width {
            if let Some(cell) = self.grid.cell_mut((x.saturating_add(dx), y)) {
                cell.reset();
            }
        }
    }

    /// Write `s` starting at (x, y). Returns the number of columns used.
    pub fn puts(&mut self, style: Style, x: u16, y: u16, s: &str) -> u16 {
        let mut advance = 0;
        for cluster in clusters(s) {
            self.set_cell(
                x.saturating_add(cluster.offset),
                y,
                &cluster.symbol,
                cluster.width,
                style,
            );
            advance = cluster.offset + cluster.width;
        }
        advance
    }

    /// Write a typed character, styled as a mistake unless it `matched`.
    pub fn putexp(&mut self, theme: &Theme, x: u16, y: u16, c: char, matched: bool) -> u16 {
        let style = if matched { theme.typed } else { theme.mistake };
        self.puts(style, x, y, c.encode_utf8(&mut [0; 4]))
    }

    pub fn clear_rows(&mut self, style: Style, rows: Range<u16>) {
        let blank = " ".repeat(self.grid.area.width as usize);
        for y in rows {
            self.puts(style, 0, y, &blank);
        }
    }

    pub fn clear(&mut self) {
        self.grid.reset();
    }

    pub fn hline(&mut self, style: Style, y: u16, width: u16) {
        self.puts(style, 0, y, &line::HORIZONTAL.repeat(width as usize));
    }

    /// Center each line of `text` horizontally, one per row from `y` down.
    pub fn center_text(&mut self, style: Style, y: u16, text: &str) {
        let mid = self.grid.area.width / 2;
        for (row, line) in text.lines().enumerate() {
            let x = mid.saturating_sub(str_width(line) / 2);
            self.puts(style, x, y.saturating_add(row as u16), line);
        }
    }

    /// Lay `text` out from (x, y) wrapping at word boundaries.
    pub fn fill_text(&mut self, style: Style, x: u16, y: u16, text: &str) {
        let width = self.grid.area.width.saturating_sub(x);
        for placed in layout_words(text, width) {
            self.puts(
                style,
                x.saturating_add(placed.x),
                y.saturating_add(placed.y),
                placed.word,
            );
        }
    }

    pub fn show_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Some(Position::new(x, y));
    }

    pub fn hide_cursor(&mut self) {
        self.cursor = None;
    }

    /// Flush pending writes to the terminal, adopting a new terminal size first
    /// if it changed. Resizing keeps the overlapping cells and does not re-layout.
    pub fn sync(&mut self) -> Result<()> {
        let size = self.terminal.size()?;
        if size != Size::from(self.grid.area) {
            self.resize(size);
        }

        let Self {
            terminal,
            grid,
            cursor,
        } = self;
        terminal.draw(|frame| {
            frame.buffer_mut().merge(grid);
            if let Some(position) = *cursor {
                frame.set_cursor_position(position);
            }
        })?;

        // ratatui's diff skips the columns it thinks a symbol covers, so a
        // cluster narrower than its string width hides the cells after it.
        let shadowed = shadowed_cells(grid);
        if !shadowed.is_empty() {
            let backend = terminal.backend_mut();
            for (x, y) in shadowed {
                // one call per cell so each write is positioned explicitly
                backend.draw(std::iter::once((x, y, &grid[(x, y)])))?;
            }
            if let Some(position) = *cursor {
                terminal.set_cursor_position(position)?;
            }
            terminal.backend_mut().flush()?;
        }
        Ok(())
    }

    fn resize(&mut self, size: Size) {
        log::debug!("surface resized to {}x{}", size.width, size.height);
        let mut next = Buffer::empty(Rect::new(0, 0, size.width, size.height));
        let area = self.grid.area.intersection(next.area);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let (Some(src), Some(dst)) = (self.grid.cell((x, y)), next.cell_mut((x, y))) {
                    *dst = src.clone();
                }
            }
        }
        self.grid = next;
    }
}

/// Cells that follow a cluster ratatui measures wider than the grid does.
fn shadowed_cells(grid: &Buffer) -> Vec<(u16, u16)> {
    let area = grid.area;
    let mut cells = Vec::new();
    for y in area.top()..area.bottom() {
        let mut x = area.left();
        while x < area.right() {
            let symbol = grid[(x, y)].symbol();
            let width = str_width(symbol).max(1);
            let measured = UnicodeWidthStr::width(symbol) as u16;
            let end = x.saturating_add(measured).min(area.right());
            cells.extend((x.saturating_add(width)..end).map(|sx| (sx, y)));
            x = x.saturating_add(1);
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, style::Color};

    fn surface(width: u16, height: u16) -> Surface<TestBackend> {
        Surface::new(Terminal::new(TestBackend::new(width, height)).unwrap()).unwrap()
    }

    fn row(surface: &Surface<TestBackend>, y: u16) -> String {
        let (w, _) = surface.size();
        (0..w).map(|x| surface.grid()[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_new_matches_terminal_size() {
        let s = surface(20, 6);
        assert_eq!(s.size(), (20, 6));
        assert_eq!(s.cursor(), None);
    }

    #[test]
    fn test_puts_returns_advance() {
        let mut s = surface(20, 3);
        assert_eq!(s.puts(Style::default(), 2, 1, "abc"), 3);
        assert_eq!(row(&s, 1), "  abc               ");
    }

    #[test]
    fn test_puts_zwj_sequence_takes_one_cell() {
        let mut s = surface(10, 1);
        let used = s.puts(Style::default(), 0, 0, "a\u{200d}bc");
        assert_eq!(used, 2);
        assert_eq!(s.grid()[(0, 0)].symbol(), "a\u{200d}b");
        assert_eq!(s.grid()[(1, 0)].symbol(), "c");
    }

    #[test]
    fn test_puts_wide_char_takes_two_cells() {
        let mut s = surface(10, 1);
        assert_eq!(s.puts(Style::default(), 0, 0, "日x"), 3);
        assert_eq!(s.grid()[(0, 0)].symbol(), "日");
        assert_eq!(s.grid()[(2, 0)].symbol(), "x");
    }

    #[test]
    fn test_puts_outside_grid_is_dropped() {
        let mut s = surface(4, 2);
        s.puts(Style::default(), 2, 1, "abcdef");
        s.puts(Style::default(), 0, 9, "zzz");
        assert_eq!(row(&s, 1), "  ab");
    }

    #[test]
    fn test_putexp_styles_mismatch() {
        let theme = Theme::default();
        let mut s = surface(4, 1);
        s.putexp(&theme, 0, 0, 'a', true);
        s.putexp(&theme, 1, 0, 'b', false);

        assert_eq!(s.grid()[(0, 0)].fg, Color::Reset);
        assert_eq!(s.grid()[(1, 0)].fg, Color::Red);
        assert_eq!(s.grid()[(1, 0)].symbol(), "b");
    }

    #[test]
    fn test_rewrite_replaces_previous_style() {
        let theme = Theme::default();
        let mut s = surface(4, 1);
        s.putexp(&theme, 0, 0, 'x', false);
        s.puts(Style::default(), 0, 0, " ");
        assert_eq!(s.grid()[(0, 0)].fg, Color::Reset);
    }

    #[test]
    fn test_clear_rows() {
        let mut s = surface(5, 4);
        for y in 0..4 {
            s.puts(Style::default(), 0, y, "xxxxx");
        }
        s.clear_rows(Style::default(), 1..3);
        assert_eq!(row(&s, 0), "xxxxx");
        assert_eq!(row(&s, 1), "     ");
        assert_eq!(row(&s, 2), "     ");
        assert_eq!(row(&s, 3), "xxxxx");
    }

    #[test]
    fn test_hline() {
        let mut s = surface(3, 2);
        s.hline(Style::default(), 1, 3);
        assert_eq!(row(&s, 1), "───");
    }

    #[test]
    fn test_center_text() {
        let mut s = surface(20, 4);
        s.center_text(Style::default(), 1, "\nab\nabcd");
        assert_eq!(row(&s, 1).trim(), "");
        assert_eq!(s.grid()[(9, 2)].symbol(), "a");
        assert_eq!(s.grid()[(8, 3)].symbol(), "a");
    }

    #[test]
    fn test_fill_text_wraps_words() {
        let mut s = surface(9, 3);
        s.fill_text(Style::default(), 0, 0, "aaa bbb ccc");
        assert_eq!(row(&s, 0), "aaa      ");
        assert_eq!(row(&s, 1), "bbb ccc  ");
    }

    #[test]
    fn test_sync_flushes_grid_and_cursor() {
        let mut s = surface(6, 2);
        s.puts(Style::default(), 0, 0, "hi");
        s.show_cursor(2, 0);
        s.sync().unwrap();

        let drawn = s.terminal().backend().buffer();
        assert_eq!(drawn[(0, 0)].symbol(), "h");
        assert_eq!(drawn[(1, 0)].symbol(), "i");
        assert_eq!(
            s.terminal_mut().backend_mut().get_cursor_position().unwrap(),
            Position::new(2, 0)
        );
    }

    #[test]
    fn test_sync_sends_cell_after_narrow_zwj_cluster() {
        let mut s = surface(6, 1);
        s.puts(Style::default(), 0, 0, "a\u{200d}bc");
        s.show_cursor(2, 0);
        s.sync().unwrap();

        let drawn = s.terminal().backend().buffer();
        assert_eq!(drawn[(0, 0)].symbol(), "a\u{200d}b");
        assert_eq!(drawn[(1, 0)].symbol(), "c");
        assert_eq!(
            s.terminal_mut().backend_mut().get_cursor_position().unwrap(),
            Position::new(2, 0)
        );

        // a later edit next to the cluster reaches the terminal too
        s.puts(Style::default(), 1, 0, "d");
        s.sync().unwrap();
        assert_eq!(s.terminal().backend().buffer()[(1, 0)].symbol(), "d");
    }

    #[test]
    fn test_shadowed_cells() {
        let mut s = surface(6, 2);
        s.puts(Style::default(), 0, 0, "a\u{200d}bc");
        s.puts(Style::default(), 0, 1, "日x");
        assert_eq!(shadowed_cells(s.grid()), vec![(1, 0)]);
    }

    #[test]
    fn test_sync_adopts_new_size() {
        let mut s = surface(6, 2);
        s.puts(Style::default(), 0, 0, "hello");
        s.terminal_mut().backend_mut().resize(3, 4);
        s.sync().unwrap();

        assert_eq!(s.size(), (3, 4));
        assert_eq!(row(&s, 0), "hel");
        assert_eq!(row(&s, 3), "   ");
    }
}
