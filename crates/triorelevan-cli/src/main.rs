use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    process,
};
use triorelevan_config::Config;

mod app;
mod client;

use app::{Action, App, RESULTS_PER_SEARCH};
use client::SearchClient;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Determine server URL from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let server_url = match args.len() {
        2 => args[1].clone(),
        1 => match Config::load_or_default() {
            Ok(config) => format!("http://{}", config.server.bind),
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} [server-url]", args[0]);
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Usage: {} [server-url]", args[0]);
            process::exit(1);
        }
    };

    log::info!("Using search server at {server_url}");
    let client = SearchClient::new(server_url)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    // Main loop
    let res = run_app(&mut terminal, &mut app, &client);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    client: &SearchClient,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.handle_key(key.code) {
                Action::Quit => return Ok(()),
                Action::Search(query) => {
                    // Show the "Searching..." status before blocking on the request
                    terminal.draw(|f| ui(f, app))?;
                    app.apply_result(client.search(&query, RESULTS_PER_SEARCH));
                }
                Action::None => {}
            }
        }
    }
}

fn text_lines(lines: Vec<String>) -> Vec<Line<'static>> {
    lines.into_iter().map(Line::from).collect()
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Search input
    let input = Paragraph::new(Line::from(vec![Span::raw("🔍 "), Span::raw(app.query.as_str())]))
        .block(Block::default().borders(Borders::ALL).title("TrioRelevan"));
    f.render_widget(input, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    // Results list
    let items: Vec<ListItem> = app.result_items().into_iter().map(ListItem::new).collect();
    let results = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_stateful_widget(results, columns[0], &mut app.list_state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Percentage(55),
            Constraint::Min(0),
        ])
        .split(columns[1]);

    let query_info = Paragraph::new(text_lines(app.query_lines()))
        .block(Block::default().borders(Borders::ALL).title("Query Processing"))
        .wrap(Wrap { trim: true });
    f.render_widget(query_info, right[0]);

    let answer = Paragraph::new(text_lines(app.answer_lines()))
        .block(Block::default().borders(Borders::ALL).title("AI Answer"))
        .wrap(Wrap { trim: true });
    f.render_widget(answer, right[1]);

    let detail = Paragraph::new(text_lines(app.detail_lines()))
        .block(Block::default().borders(Borders::ALL).title("Document"))
        .wrap(Wrap { trim: true });
    f.render_widget(detail, right[2]);

    // Status and key help
    let status = app.status.clone().unwrap_or_default();
    let help = Paragraph::new(Line::from(vec![
        Span::raw(status),
        Span::raw(" | Enter: Search | ↑/↓: Select | Esc: Quit"),
    ]));
    f.render_widget(help, rows[2]);
}
