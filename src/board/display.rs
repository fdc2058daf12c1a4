//! Text dumps of the board for debugging.

use std::fmt::{self, Write};

use super::{Board, Square};

const EMPTY: char = '\u{3000}';
const LEGAL_MARK: char = '\u{2612}';

impl Board {
    fn render(&self, f: &mut impl Write, show_legal: bool) -> fmt::Result {
        writeln!(f, "  a  b  c  d  e  f  g  h")?;
        for rank in 0..8 {
            write!(f, "{}", 8 - rank)?;
            for file in 0..8 {
                let sq = Square(rank, file);
                let glyph = if show_legal && self.cell(sq).is_legal() {
                    LEGAL_MARK
                } else {
                    self.piece_at(sq).map_or(EMPTY, |piece| piece.glyph())
                };
                write!(f, "[{glyph}]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    /// Board dump with every currently legal destination drawn as a cross.
    #[must_use]
    pub fn legal_overlay(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.render(&mut out, true);
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, false)
    }
}
