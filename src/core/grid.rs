use macroquad::prelude::Vec2;
use std::collections::HashSet;

use super::constants::{CELL_COUNT, GRID_CELLS, UNPAINTED};

/// Flat, row-major store of every cell's CSS color value
#[derive(Clone, Debug)]
pub struct GridStore {
    colors: Vec<String>,
    dirty: HashSet<usize>,
}

impl GridStore {
    pub fn new() -> Self {
        GridStore {
            colors: vec![UNPAINTED.to_string(); CELL_COUNT],
            dirty: (0..CELL_COUNT).collect(),
        }
    }

    /// Set a cell's color and mark it for repaint.
    ///
    /// # Panics
    /// When `index` is outside the grid.
    pub fn set_color(&mut self, index: usize, color: &str) {
        let cell = &mut self.colors[index];
        if cell.as_str() != color {
            cell.clear();
            cell.push_str(color);
            self.dirty.insert(index);
        }
    }

    /// # Panics
    /// When `index` is outside the grid.
    pub fn get_color(&self, index: usize) -> &str {
        &self.colors[index]
    }

    pub fn reset_all(&mut self) {
        for color in self.colors.iter_mut() {
            color.clear();
            color.push_str(UNPAINTED);
        }
        self.dirty.extend(0..CELL_COUNT);
    }

    /// Snapshot view in cell order
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Drain the cells changed since the last call
    pub fn take_dirty(&mut self) -> HashSet<usize> {
        std::mem::take(&mut self.dirty)
    }
}

impl Default for GridStore {
    fn default() -> Self {
        Self::new()
    }
}

/// (row, col) of a cell index
pub fn position(index: usize) -> (usize, usize) {
    (index / GRID_CELLS, index % GRID_CELLS)
}

pub fn cell_at(row: usize, col: usize) -> Option<usize> {
    (row < GRID_CELLS && col < GRID_CELLS).then_some(row * GRID_CELLS + col)
}

/// Cell under a screen position, given the grid's top-left corner and cell size
pub fn screen_position_to_cell(pos: Vec2, origin: Vec2, cell_pixels: f32) -> Option<usize> {
    let local = (pos - origin) / cell_pixels;
    if local.x < 0.0 || local.y < 0.0 {
        return None;
    }
    cell_at(local.y.floor() as usize, local.x.floor() as usize)
}

/// Top-left screen corner of a cell
pub fn cell_to_screen_position(index: usize, origin: Vec2, cell_pixels: f32) -> Vec2 {
    let (row, col) = position(index);
    origin + Vec2::new(col as f32 * cell_pixels, row as f32 * cell_pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_index_reads_back_what_was_written() {
        let mut grid = GridStore::new();
        for i in 0..CELL_COUNT {
            let color = format!("#{:06x}", i);
            grid.set_color(i, &color);
            assert_eq!(grid.get_color(i), color);
        }
    }

    #[test]
    fn reset_all_whitens_every_cell() {
        let mut grid = GridStore::new();
        grid.set_color(0, "red");
        grid.set_color(CELL_COUNT - 1, "#123456");
        grid.reset_all();
        assert!((0..CELL_COUNT).all(|i| grid.get_color(i) == "white"));
        assert_eq!(grid.len(), CELL_COUNT);
    }

    #[test]
    fn only_changed_cells_become_dirty() {
        let mut grid = GridStore::new();
        assert_eq!(grid.take_dirty().len(), CELL_COUNT);

        grid.set_color(5, "white");
        assert!(grid.take_dirty().is_empty());

        grid.set_color(5, "red");
        grid.set_color(7, "blue");
        let dirty = grid.take_dirty();
        assert_eq!(dirty, HashSet::from([5, 7]));
    }

    #[test]
    #[should_panic]
    fn out_of_range_write_is_a_contract_violation() {
        GridStore::new().set_color(CELL_COUNT, "red");
    }

    #[test]
    fn index_maps_row_major() {
        assert_eq!(position(0), (0, 0));
        assert_eq!(position(61), (1, 1));
        assert_eq!(cell_at(59, 59), Some(CELL_COUNT - 1));
        assert_eq!(cell_at(60, 0), None);
    }

    #[test]
    fn screen_positions_resolve_to_cells() {
        let origin = Vec2::new(200.0, 60.0);
        assert_eq!(screen_position_to_cell(Vec2::new(200.0, 60.0), origin, 10.0), Some(0));
        assert_eq!(screen_position_to_cell(Vec2::new(215.0, 60.0), origin, 10.0), Some(1));
        assert_eq!(screen_position_to_cell(Vec2::new(205.0, 75.0), origin, 10.0), Some(60));
        assert_eq!(screen_position_to_cell(Vec2::new(199.0, 65.0), origin, 10.0), None);
        assert_eq!(screen_position_to_cell(Vec2::new(800.0, 65.0), origin, 10.0), None);
        assert_eq!(cell_to_screen_position(61, origin, 10.0), Vec2::new(210.0, 70.0));
    }
}
