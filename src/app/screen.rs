use super::Config;
use crate::{Grid, Result};
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Stdout, Write};

/// Text picture of a grid: one glyph per cell, rows separated by `\n`.
pub fn render(grid: &Grid, live: &str, dead: &str) -> String {
    let mut picture = String::with_capacity(grid.rows() * (grid.cols() * live.len() + 1));
    for (i, row) in grid.iter_rows().enumerate() {
        if i > 0 {
            picture.push('\n');
        }
        for &cell in row {
            picture.push_str(if cell { live } else { dead });
        }
    }
    picture
}

/// Pads `line` with spaces on both sides up to `width` characters.
///
/// When the padding is odd, the extra space goes to the left only if `width`
/// is odd as well. Lines already `width` characters or longer are returned
/// unchanged.
pub fn center(line: &str, width: usize) -> String {
    let len = line.chars().count();
    if len >= width {
        return line.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;
    format!("{}{line}{}", " ".repeat(left), " ".repeat(right))
}

/// Terminal frame writer.
pub struct Screen<W: Write> {
    out: W,
    columns: usize,
    clear: bool,
}

impl Screen<Stdout> {
    /// Screen on stdout, as wide as the current terminal.
    pub fn stdout(clear: bool) -> Self {
        let columns = match terminal::size() {
            Ok((columns, _)) => columns as usize,
            Err(err) => {
                log::warn!(
                    "cannot query terminal size ({err}), assuming {} columns",
                    Config::FALLBACK_COLUMNS
                );
                Config::FALLBACK_COLUMNS
            }
        };
        Self::new(io::stdout(), columns, clear)
    }
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, columns: usize, clear: bool) -> Self {
        Self {
            out,
            columns,
            clear,
        }
    }

    /// Replaces the terminal contents with a centered picture of `grid`.
    pub fn draw(&mut self, grid: &Grid) -> Result<()> {
        if self.clear {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        let margin = "\n".repeat(Config::VERTICAL_MARGIN);
        self.out.write_all(margin.as_bytes())?;
        for line in render(grid, Config::LIVE_GLYPH, Config::DEAD_GLYPH).lines() {
            writeln!(self.out, "{}", center(line, self.columns))?;
        }
        self.out.write_all(margin.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let grid = Grid::from_rows(&[[0u8, 1], [1, 1]]).unwrap();
        assert_eq!(render(&grid, "##", ".."), "..##\n####");
        assert_eq!(render(&grid, "██", "▒▒"), "▒▒██\n████");
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab  ");
        // Odd margin: extra space on the left only for odd widths.
        assert_eq!(center("ab", 5), "  ab ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("██", 4), " ██ ");
        assert_eq!(center("abcdef", 4), "abcdef");
    }

    #[test]
    fn test_draw_without_clearing() {
        let grid = Grid::from_rows(&[[1u8, 0]]).unwrap();
        let mut screen = Screen::new(Vec::new(), 8, false);
        screen.draw(&grid).unwrap();
        let text = String::from_utf8(screen.into_inner()).unwrap();
        assert_eq!(text, "\n\n\n\n  ██▒▒  \n\n\n\n\n");
    }

    #[test]
    fn test_draw_clears_first() {
        let grid = Grid::from_rows(&[[1u8]]).unwrap();
        let mut screen = Screen::new(Vec::new(), 2, true);
        screen.draw(&grid).unwrap();
        let text = String::from_utf8(screen.into_inner()).unwrap();
        assert!(text.starts_with('\x1b'), "{text:?}");
        assert!(text.ends_with("\n\n\n\n██\n\n\n\n\n"), "{text:?}");
    }
}
