use core::fmt;

use crate::*;

impl Field {
    fn fmt_separator(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("---|")?;
        for _ in 0..self.dimension() {
            f.write_str("---")?;
        }
        f.write_str("-|\n")
    }
}

/// Fixed-width text grid with 1-based row and column headers.
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dimension = self.dimension();

        f.write_str("---|")?;
        for col in 1..=u16::from(dimension) {
            write!(f, "{:>3}", col)?;
        }
        f.write_str(" |\n")?;
        self.fmt_separator(f)?;

        for row in 0..dimension {
            write!(f, "{:>3}|", u16::from(row) + 1)?;
            for col in 0..dimension {
                let glyph = self.cell_at((row, col)).map_or(HIDDEN_MARK, Cell::glyph);
                write!(f, "  {}", glyph)?;
            }
            f.write_str(" |\n")?;
        }

        self.fmt_separator(f)
    }
}
