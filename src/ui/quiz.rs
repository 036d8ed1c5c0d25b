use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.session().current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(9),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], &question.text);
    render_options(frame, chunks[2], app, &question.options);

    if app.awaiting_advance() {
        render_feedback(frame, chunks[3], app);
    }

    render_warning(frame, chunks[4], app);
    render_controls(frame, chunks[5], app);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let left = Paragraph::new(format!(
        "{}  ·  score {}/{}",
        session.selected_topic().unwrap_or(""),
        session.score(),
        session.question_count()
    ))
    .fg(Color::DarkGray);
    frame.render_widget(left, area);

    let right = Paragraph::new(format!(
        "{}/{}",
        session.current_question_number(),
        session.total_questions()
    ))
    .alignment(Alignment::Right)
    .fg(Color::DarkGray);
    frame.render_widget(right, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App, options: &[String; 4]) {
    let answered = app.awaiting_advance();
    let correct_answer = app.session().last_record().map(|r| r.correct_answer.clone());

    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);
    for (index, option) in options.iter().enumerate() {
        let is_selected = index == app.selected_option();

        // Options carry their own "A."–"D." labels, so render them
        // verbatim. After submission, color the correct option and the
        // wrong pick instead of the cursor.
        let style = if answered {
            if Some(option) == correct_answer.as_ref() {
                Style::default().fg(Color::Green).bold()
            } else if is_selected {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            }
        } else if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let Some(record) = app.session().last_record() else {
        return;
    };

    let (verdict, color) = if record.is_correct {
        ("Correct", Color::Green)
    } else {
        ("Incorrect", Color::Red)
    };

    let mut content = vec![
        Line::from(Span::styled(verdict, Style::default().fg(color).bold())),
        Line::from(""),
        Line::from(record.feedback.as_str().fg(Color::Gray)),
    ];
    if !record.is_correct {
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled("Correct answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(record.correct_answer.as_str(), Style::default().fg(Color::Green)),
        ]));
    }

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(color)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_warning(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(warning) = app.warning() {
        let widget = Paragraph::new(warning).fg(Color::Yellow);
        frame.render_widget(widget, area);
    }
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let text = if app.awaiting_advance() {
        "enter next question  ·  q quit"
    } else {
        "j/k navigate  ·  enter submit  ·  q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
