//! Step-by-step replay of a search.
//!
//! A [`Replay`] reveals the visitation trace one cell per step, then the
//! solution path one cell per step, and renders the state at any step as a
//! [`Grid`] of presentation tags. Pacing is left to the caller.

use mazer_core::{CellState, Coord, Grid};

use crate::record::PathResult;

/// Which part of the result the next step reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Revealing expanded cells.
    Exploring,
    /// Revealing the solution path.
    Tracing,
    /// Everything revealed.
    Done,
}

/// Cursor over the steps of a [`PathResult`].
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    base: &'a Grid,
    start: Coord,
    end: Coord,
    result: &'a PathResult,
    step: usize,
}

impl<'a> Replay<'a> {
    /// Start a replay at step 0 (nothing revealed).
    pub fn new(base: &'a Grid, start: Coord, end: Coord, result: &'a PathResult) -> Self {
        Self {
            base,
            start,
            end,
            result,
            step: 0,
        }
    }

    /// Total number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.result.visited.len() + self.result.path.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Steps revealed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.step
    }

    pub fn phase(&self) -> Phase {
        if self.step < self.result.visited.len() {
            Phase::Exploring
        } else if self.step < self.len() {
            Phase::Tracing
        } else {
            Phase::Done
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase() == Phase::Done
    }

    /// Reveal one more cell and return it, or `None` when done.
    pub fn advance(&mut self) -> Option<Coord> {
        let c = self.cell_at(self.step)?;
        self.step += 1;
        Some(c)
    }

    /// Jump to `step`, clamped to [`len`](Self::len).
    pub fn seek(&mut self, step: usize) {
        self.step = step.min(self.len());
    }

    /// Back to step 0.
    pub fn rewind(&mut self) {
        self.step = 0;
    }

    /// The cell revealed by step `i` (0-based).
    fn cell_at(&self, i: usize) -> Option<Coord> {
        let v = &self.result.visited;
        match v.get(i) {
            Some(&c) => Some(c),
            None => self.result.path.get(i - v.len()).copied(),
        }
    }

    /// Render the current step.
    ///
    /// Start and End always show as such. Solution cells override Visited.
    /// Start and End are never tagged Visited.
    pub fn frame(&self) -> Grid {
        let mut grid = self.base.clone();
        let shown_visited = self.step.min(self.result.visited.len());
        for &c in &self.result.visited[..shown_visited] {
            if c != self.start && c != self.end {
                grid.set(c, CellState::Visited);
            }
        }
        let shown_path = self.step - shown_visited;
        for &c in &self.result.path[..shown_path] {
            grid.set(c, CellState::Solution);
        }
        grid.set(self.start, CellState::Start);
        grid.set(self.end, CellState::End);
        grid
    }

    /// Frames after each step, from the first step to the last.
    pub fn frames(mut self) -> impl Iterator<Item = Grid> + 'a {
        std::iter::from_fn(move || {
            self.advance()?;
            Some(self.frame())
        })
    }
}

impl PathResult {
    /// The fully revealed presentation grid.
    pub fn overlay(&self, base: &Grid, start: Coord, end: Coord) -> Grid {
        let mut replay = Replay::new(base, start, end, self);
        replay.seek(replay.len());
        replay.frame()
    }
}
