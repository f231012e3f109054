use crate::app::App;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

/// Draw the dispatch log: one line per remote key event, newest at the
/// bottom, unmapped keys dimmed.
pub fn draw_dispatch_log(frame: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Dispatch log ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Blue));

  let visible = area.height.saturating_sub(2) as usize;

  let items: Vec<ListItem> = app
    .dispatch_log()
    .rev()
    .take(visible)
    .collect::<Vec<_>>()
    .into_iter()
    .rev()
    .map(|record| {
      let time = record.at.format("%H:%M:%S").to_string();
      let key = match record.key {
        Some(name) => format!("{} ({})", name, record.code),
        None => format!("code {}", record.code),
      };

      let mut spans = vec![
        Span::styled(time, Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(format!("{:<24}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
      ];
      match record.action {
        Some(action) => {
          spans.push(Span::styled(action.label(), Style::default().fg(Color::Green)));
        }
        None => {
          spans.push(Span::styled("ignored", Style::default().fg(Color::DarkGray)));
        }
      }

      ListItem::new(Line::from(spans))
    })
    .collect();

  let list = List::new(items).block(block);
  frame.render_widget(list, area);
}
