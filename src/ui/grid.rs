use crate::focus::FocusGrid;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Draw the tile grid with the focused cell highlighted
pub fn draw_grid(frame: &mut Frame, area: Rect, grid: &FocusGrid) {
  let outer = Block::default()
    .title(" Screen ")
    .title_alignment(Alignment::Center)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Blue));
  let inner = outer.inner(area);
  frame.render_widget(outer, area);

  let row_constraints = vec![Constraint::Ratio(1, grid.rows() as u32); grid.rows()];
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints(row_constraints)
    .split(inner);

  for row in 0..grid.rows() {
    let col_constraints = vec![Constraint::Ratio(1, grid.cols() as u32); grid.cols()];
    let cols = Layout::default()
      .direction(Direction::Horizontal)
      .constraints(col_constraints)
      .split(rows[row]);

    for col in 0..grid.cols() {
      draw_tile(frame, cols[col], grid, row, col);
    }
  }
}

fn draw_tile(frame: &mut Frame, area: Rect, grid: &FocusGrid, row: usize, col: usize) {
  let focused = grid.focused() == (row, col);
  let activated = grid.is_activated(row, col);

  let border_style = if focused {
    Style::default().fg(Color::Yellow).bold()
  } else {
    Style::default().fg(Color::DarkGray)
  };

  let mut block = Block::default()
    .borders(Borders::ALL)
    .border_style(border_style);
  if activated {
    block = block.title(" * ").title_style(Style::default().fg(Color::Green));
  }

  let label_style = if focused {
    Style::default().fg(Color::Yellow).bold()
  } else {
    Style::default().fg(Color::White)
  };

  let paragraph = Paragraph::new(grid.label_at(row, col))
    .style(label_style)
    .alignment(Alignment::Center)
    .block(block);

  frame.render_widget(paragraph, area);
}
