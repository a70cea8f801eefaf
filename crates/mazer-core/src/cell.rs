//! The [`CellState`] tag stored in every grid cell.

/// State of one grid cell.
///
/// Searches only distinguish [`Wall`](CellState::Wall) from everything else;
/// `Start`, `End`, `Visited` and `Solution` exist for reporting and replay.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Traversable, not yet explored.
    #[default]
    Path,
    /// Impassable.
    Wall,
    Start,
    End,
    /// Expanded by a search.
    Visited,
    /// Part of the reported route.
    Solution,
}

impl CellState {
    /// All states, in declaration order.
    pub const ALL: [CellState; 6] = [
        CellState::Path,
        CellState::Wall,
        CellState::Start,
        CellState::End,
        CellState::Visited,
        CellState::Solution,
    ];

    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, CellState::Wall)
    }

    /// ASCII glyph used by [`Grid`](crate::Grid)'s text form.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            CellState::Path => '.',
            CellState::Wall => '#',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Visited => 'o',
            CellState::Solution => '*',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<CellState> {
        match ch {
            '.' => Some(CellState::Path),
            '#' => Some(CellState::Wall),
            'S' => Some(CellState::Start),
            'E' => Some(CellState::End),
            'o' => Some(CellState::Visited),
            '*' => Some(CellState::Solution),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_wall_blocks() {
        for s in CellState::ALL {
            assert_eq!(s.is_passable(), s != CellState::Wall);
        }
    }

    #[test]
    fn glyphs_are_distinct() {
        for s in CellState::ALL {
            assert_eq!(CellState::from_glyph(s.glyph()), Some(s));
        }
        assert_eq!(CellState::from_glyph('x'), None);
    }
}
