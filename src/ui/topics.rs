use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let topics = app.topic_names();
    let list_height = (topics.len() as u16 * 2).saturating_add(10);

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(list_height),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "CLINICAL TRAINING",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(format!("Welcome, {}", app.user()).fg(Color::DarkGray)),
        Line::from(""),
        Line::from("Choose a topic".fg(Color::White)),
        Line::from(""),
    ];

    for (index, topic) in topics.iter().enumerate() {
        let is_selected = index == app.topic_cursor();
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        content.push(Line::from(Span::styled(
            format!("{} {}", marker, topic),
            style,
        )));
        content.push(Line::from(""));
    }

    content.push(Line::from(
        "j/k navigate  ·  enter start  ·  q quit".fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
