//! Focus grid: the reference navigation target the simulator drives.
//!
//! A rows x cols grid of named tiles with a single focused cell, the way a
//! ten-foot launcher lays out its rails.

use crate::dispatch::Navigation;

pub struct FocusGrid {
  rows: usize,
  cols: usize,
  labels: Vec<String>,
  row: usize,
  col: usize,
  /// Tiles activated via accept, most recent last
  activated: Vec<(usize, usize)>,
}

/// Tile labels used when the config provides none
const DEFAULT_LABELS: &[&str] = &[
  "Home", "Search", "Live TV", "Apps", "Movies", "Series", "Music", "Settings",
];

impl FocusGrid {
  /// Create a grid with the given dimensions. Labels beyond the provided
  /// list fall back to the built-in set, then to numbered tiles.
  pub fn new(rows: usize, cols: usize, labels: Vec<String>) -> Self {
    let rows = rows.max(1);
    let cols = cols.max(1);

    let mut all = labels;
    for i in all.len()..rows * cols {
      let label = DEFAULT_LABELS
        .get(i)
        .map(|s| (*s).to_string())
        .unwrap_or_else(|| format!("Tile {}", i + 1));
      all.push(label);
    }
    all.truncate(rows * cols);

    Self {
      rows,
      cols,
      labels: all,
      row: 0,
      col: 0,
      activated: Vec::new(),
    }
  }

  pub fn rows(&self) -> usize {
    self.rows
  }

  pub fn cols(&self) -> usize {
    self.cols
  }

  pub fn focused(&self) -> (usize, usize) {
    (self.row, self.col)
  }

  pub fn label_at(&self, row: usize, col: usize) -> &str {
    &self.labels[row * self.cols + col]
  }

  pub fn focused_label(&self) -> &str {
    self.label_at(self.row, self.col)
  }

  /// Whether a tile is in the activation trail
  pub fn is_activated(&self, row: usize, col: usize) -> bool {
    self.activated.contains(&(row, col))
  }

  /// Labels of activated tiles, oldest first
  pub fn breadcrumb(&self) -> Vec<&str> {
    self
      .activated
      .iter()
      .map(|&(r, c)| self.label_at(r, c))
      .collect()
  }
}

impl Navigation for FocusGrid {
  // Movement clamps at the edges: a rail stops at its ends, no wrapping

  fn up(&mut self) {
    self.row = self.row.saturating_sub(1);
  }

  fn down(&mut self) {
    if self.row + 1 < self.rows {
      self.row += 1;
    }
  }

  fn left(&mut self) {
    self.col = self.col.saturating_sub(1);
  }

  fn right(&mut self) {
    if self.col + 1 < self.cols {
      self.col += 1;
    }
  }

  fn accept(&mut self) {
    self.activated.push((self.row, self.col));
  }

  fn back(&mut self) {
    // With nothing activated there is nothing to leave
    self.activated.pop();
  }
}
