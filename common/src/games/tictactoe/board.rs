use std::fmt;

use super::types::{CELL_COUNT, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Grid {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_none()
    }

    pub fn placed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn next_mark(&self) -> Mark {
        Mark::for_ply(self.placed_count())
    }

    pub fn apply(&self, index: usize, mark: Mark) -> Result<Grid, String> {
        if index >= CELL_COUNT {
            return Err("Position out of bounds".to_string());
        }
        if self.cells[index].is_some() {
            return Err("Cell is already marked".to_string());
        }

        let mut next = *self;
        next.cells[index] = Some(mark);
        Ok(next)
    }

    pub fn get_available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    pub(crate) fn set(&mut self, index: usize, cell: Option<Mark>) {
        self.cells[index] = cell;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell.map_or('.', Mark::symbol))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn grid_from(layout: &str) -> Grid {
    let mut grid = Grid::empty();
    let cells = layout.chars().filter(|c| !c.is_whitespace());
    for (index, c) in cells.enumerate() {
        match c {
            'X' => grid.set(index, Some(Mark::X)),
            'O' => grid.set(index, Some(Mark::O)),
            _ => {}
        }
    }
    grid
}
