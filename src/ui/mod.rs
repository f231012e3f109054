mod grid;
mod log;

use crate::app::App;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // Header
      Constraint::Min(5),    // Tile grid
      Constraint::Length(8), // Dispatch log
      Constraint::Length(1), // Status bar
    ])
    .split(frame.area());

  draw_header(frame, chunks[0], app);
  grid::draw_grid(frame, chunks[1], app.grid());
  log::draw_dispatch_log(frame, chunks[2], app);
  draw_status_bar(frame, chunks[3]);
}

/// Title on the left, activation breadcrumb on the right
fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
  let mut spans = vec![
    Span::raw(" "),
    Span::styled(app.title().to_string(), Style::default().fg(Color::Cyan).bold()),
    Span::styled(
      format!("  [{}]", app.grid().focused_label()),
      Style::default().fg(Color::DarkGray),
    ),
  ];

  let breadcrumb = app.grid().breadcrumb();
  if !breadcrumb.is_empty() {
    spans.push(Span::styled("   ", Style::default()));
    for (i, part) in breadcrumb.iter().enumerate() {
      if i > 0 {
        spans.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));
      }
      let style = if i == breadcrumb.len() - 1 {
        // Most recent activation - highlighted
        Style::default().fg(Color::Green).bold()
      } else {
        Style::default().fg(Color::White)
      };
      spans.push(Span::styled((*part).to_string(), style));
    }
  }

  let paragraph = Paragraph::new(Line::from(spans));
  frame.render_widget(paragraph, area);
}

fn draw_status_bar(frame: &mut Frame, area: Rect) {
  let hint = " arrows:remote pad  Enter:accept  Backspace:return  F1-F4:color keys  q:quit";
  let paragraph = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
  frame.render_widget(paragraph, area);
}
