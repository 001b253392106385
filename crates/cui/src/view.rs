use crate::app::{App, Screen};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Line, Modifier, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Setup => draw_setup(frame, app),
        Screen::Play => draw_play(frame, app),
    }
    if app.show_help {
        draw_help_popup(frame);
    }
}

fn draw_setup(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = vec![
        Line::from("Autonoma Deck".bold()),
        Line::from(format!("Seed: {}", app.seed)),
    ];
    frame.render_widget(
        Paragraph::new(header).block(Block::default().borders(Borders::ALL).title("Setup")),
        root[0],
    );

    let items: Vec<ListItem> = (1..=app.game.max_difficulty())
        .map(|difficulty| {
            let label = format!(
                "Difficulty {difficulty} ({} cards)",
                app.difficulty_count(difficulty)
            );
            let item = ListItem::new(label);
            if difficulty == app.difficulty_choice {
                item.style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                item
            }
        })
        .collect();
    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title("Difficulty")),
        root[1],
    );

    frame.render_widget(
        Paragraph::new(app.status_line.as_str())
            .block(Block::default().borders(Borders::ALL).title("Status")),
        root[2],
    );
}

fn draw_play(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Min(5),
        ])
        .split(frame.area());

    let difficulty = app
        .game
        .session()
        .map(|session| session.difficulty().to_string())
        .unwrap_or_else(|| "-".to_string());
    let header = vec![
        Line::from(format!("Autonoma Deck | Difficulty {difficulty} | Seed {}", app.seed).bold()),
        Line::from(format!("Status: {}", app.status_line)),
    ];
    frame.render_widget(
        Paragraph::new(header)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Overview")),
        root[0],
    );

    let card_lines = match &app.card {
        Some(card) => vec![
            Line::from(format!("Difficulty: {}", card.difficulty)),
            Line::from(format!("Resources: {}", card.resources)),
            Line::from(format!("Draw Filter: {}", card.draw_filter)),
            Line::from(format!("Action: {}", card.action)),
        ],
        None => vec![Line::from("(no card drawn)")],
    };
    frame.render_widget(
        Paragraph::new(card_lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Card")),
        root[1],
    );

    let log: Vec<ListItem> = app
        .event_log
        .iter()
        .map(|line| ListItem::new(line.as_str()))
        .collect();
    frame.render_widget(
        List::new(log).block(Block::default().borders(Borders::ALL).title("Log")),
        root[2],
    );
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(frame.area(), 44, 12);
    let lines = vec![
        Line::from("Keys".bold()),
        Line::from("Up/Down or k/j  pick difficulty"),
        Line::from("Enter           start session"),
        Line::from("d or Space      draw a card"),
        Line::from("n or Esc        new session"),
        Line::from("?               toggle this help"),
        Line::from("q               quit"),
    ];
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Help")),
        area,
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
