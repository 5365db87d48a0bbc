//! Console rendering for grids and exported snapshots

use crate::config::CellStyle;
use crate::engine::Grid;
use std::fmt::Write as _;

/// ANSI clear screen + cursor home, for redrawing frames in place.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

impl CellStyle {
    fn glyphs(self) -> (char, char) {
        match self {
            CellStyle::Blocks => ('█', '·'),
            CellStyle::Ascii => ('*', '.'),
        }
    }
}

/// Render an exported snapshot buffer (0 = dead, 1 = alive, row-major).
///
/// Works purely on the bytes the engine wrote, so the animation path goes
/// through the same export contract as any other consumer.
pub fn render_snapshot(buffer: &[u8], width: usize, style: CellStyle) -> String {
    let (alive, dead) = style.glyphs();
    let mut output = String::with_capacity(buffer.len() * 2);

    for row in buffer.chunks(width) {
        for &bit in row {
            output.push(if bit != 0 { alive } else { dead });
        }
        output.push('\n');
    }

    output
}

/// Compose a full animation frame: status line plus rendered cells.
pub fn render_frame(buffer: &[u8], width: usize, generation: usize, style: CellStyle) -> String {
    let population = buffer.iter().filter(|&&bit| bit != 0).count();

    let mut output = String::new();
    let _ = writeln!(
        output,
        "Generation {:>6} | Population {:>6}",
        generation, population
    );
    output.push_str(&render_snapshot(buffer, width, style));
    output
}

/// Format a grid with row and column numbers.
pub fn format_grid_with_coords(grid: &Grid) -> String {
    let mut output = String::new();

    output.push_str("   ");
    for x in 0..grid.width() {
        let _ = write!(output, "{:2}", x % 10);
    }
    output.push('\n');

    for y in 0..grid.height() {
        let _ = write!(output, "{:2} ", y);
        for x in 0..grid.width() {
            output.push_str(if grid.cells[grid.index(x, y)].is_alive() {
                "██"
            } else {
                "··"
            });
        }
        output.push('\n');
    }

    output
}

/// ANSI coloring for status lines.
pub struct ColorOutput;

impl ColorOutput {
    /// Wrap `text` in a color escape when the terminal supports it.
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::parse_pattern;

    #[test]
    fn test_render_snapshot() {
        let buffer = [1, 0, 0, 1];
        let rendered = render_snapshot(&buffer, 2, CellStyle::Blocks);
        assert_eq!(rendered, "█·\n·█\n");

        let ascii = render_snapshot(&buffer, 2, CellStyle::Ascii);
        assert_eq!(ascii, "*.\n.*\n");
    }

    #[test]
    fn test_render_frame_reports_generation_and_population() {
        let buffer = [1, 1, 0, 0, 0, 0];
        let frame = render_frame(&buffer, 3, 7, CellStyle::Ascii);

        let mut lines = frame.lines();
        let header = lines.next().unwrap();
        assert!(header.contains('7'));
        assert!(header.contains("Population"));
        assert_eq!(lines.next().unwrap(), "**.");
        assert_eq!(lines.next().unwrap(), "...");
    }

    #[test]
    fn test_grid_formatting_with_coords() {
        let grid = parse_pattern("101\n010\n101\n").unwrap();
        let with_coords = format_grid_with_coords(&grid);
        assert!(with_coords.contains(" 0 1 2"));
        assert!(with_coords.contains("██"));
        assert!(with_coords.contains("··"));
    }

    #[test]
    fn test_color_output_preserves_text() {
        // Colored or plain, the original text must survive.
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
