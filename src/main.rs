use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tracing::{info, warn};

use glossa::api::client::{HttpLessonSource, LessonSource};
use glossa::api::worker::FetchChannel;
use glossa::app::{App, AppScreen};
use glossa::config::Config;
use glossa::event::{AppEvent, EventHandler};
use glossa::logging;
use glossa::store::selection::SelectionStore;
use glossa::ui::components::lesson_list::LessonList;
use glossa::ui::components::lesson_viewer::LessonViewer;
use glossa::ui::components::overview::OverviewPanel;
use glossa::ui::components::practice_list::PracticeList;
use glossa::ui::layout::{AppLayout, catalog_area, footer_hints};
use glossa::ui::theme::Theme;

#[derive(Parser)]
#[command(name = "glossa", version, about = "Terminal client for language lessons")]
struct Cli {
    #[arg(short, long, help = "Lesson server base URL")]
    base_url: Option<String>,

    #[arg(short, long, help = "Language code to browse, e.g. el")]
    language: Option<String>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Open practice mode for the last selected lesson")]
    practice: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
        config.normalize_base_url();
    }
    if let Some(language) = cli.language {
        config.language = language;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    let _log_guard = logging::init(&config.log_level);
    if let Some(err) = &config_error {
        warn!(error = %err, "config unreadable, running with defaults");
    }

    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        warn!(theme = %config.theme, "unknown theme, falling back to default");
        Theme::default()
    });
    let http = HttpLessonSource::new(&config.base_url)?;
    info!(base_url = http.base_url(), language = %config.language, "starting");
    let source: Arc<dyn LessonSource> = Arc::new(http);
    let start_language = config.language.clone();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));
    let mut app = App::new(
        config,
        theme,
        source,
        events.sender(),
        SelectionStore::new().ok(),
    );
    app.refresh();
    if cli.practice {
        match app.selection_store.as_ref().and_then(SelectionStore::load) {
            Some(selection) => app.open_practice_for(&selection),
            None => app.status = Some("No lesson selected yet".to_string()),
        }
    }

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if app.language_code != start_language {
        remember_language(&app.language_code);
    }

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Persists a language picked in the catalog without touching other settings.
fn remember_language(code: &str) {
    if let Err(err) = Config::store_language(code) {
        warn!(error = %err, language = code, "config not updated");
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Fetched(response) => app.handle_fetch(response),
            AppEvent::Tick | AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Catalog => handle_catalog_key(app, key),
        AppScreen::Lesson => handle_lesson_key(app, key),
        AppScreen::Practice => handle_practice_key(app, key),
    }
}

fn handle_catalog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.catalog.previous(),
        KeyCode::Down | KeyCode::Char('j') => app.catalog.next(),
        KeyCode::Left | KeyCode::Char('h') => app.cycle_language(false),
        KeyCode::Right | KeyCode::Char('l') => app.cycle_language(true),
        KeyCode::Enter => app.start_lesson(),
        KeyCode::Char('p') => app.open_practice(),
        KeyCode::Char('r') => app.refresh(),
        _ => {}
    }
}

fn handle_lesson_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        app.close_lesson();
        return;
    }
    let Some(view) = app.lesson_view.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Right
        | KeyCode::Down
        | KeyCode::Char('l')
        | KeyCode::Char('n')
        | KeyCode::Char('j') => view.next(),
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => view.previous(),
        KeyCode::Char(' ') | KeyCode::Enter => view.toggle_reveal(),
        _ => {}
    }
}

fn handle_practice_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        app.close_lesson();
        return;
    }
    let Some(practice) = app.practice.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => practice.next(),
        KeyCode::Up | KeyCode::Char('k') => practice.previous(),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = AppLayout::new(area);
    render_header(frame, app, &layout);

    match app.screen {
        AppScreen::Catalog => render_catalog(frame, app, &layout),
        AppScreen::Lesson => render_lesson(frame, app, &layout),
        AppScreen::Practice => render_practice(frame, app, &layout),
    }

    render_status(frame, app, &layout);
    render_footer(frame, app, &layout);
}

fn render_header(frame: &mut ratatui::Frame, app: &App, layout: &AppLayout) {
    let colors = &app.theme.colors;
    let info = match app.screen {
        AppScreen::Catalog => format!(" {}", app.language_label()),
        AppScreen::Lesson => match &app.lesson_view {
            Some(view) => {
                let mut info = format!(" {} | {}", view.lesson.title, view.variant.name());
                if !view.lesson.level.is_empty() {
                    info.push_str(&format!(" | Level {}", view.lesson.level));
                }
                info
            }
            None => " Loading lesson".to_string(),
        },
        AppScreen::Practice => " Practice".to_string(),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " glossa ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            info,
            Style::default()
                .fg(colors.text_muted())
                .bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);
}

fn render_catalog(frame: &mut ratatui::Frame, app: &App, layout: &AppLayout) {
    let language = app.language_label();
    let list = LessonList {
        language: &language,
        lessons: &app.lessons,
        cursor: &app.catalog,
        loading: app.is_loading(FetchChannel::Lessons),
        theme: app.theme,
    };
    let list_area = catalog_area(layout.main, 96);
    frame.render_widget(&list, list_area);
}

fn render_lesson(frame: &mut ratatui::Frame, app: &App, layout: &AppLayout) {
    let colors = &app.theme.colors;
    let Some(view) = &app.lesson_view else {
        let message = if app.is_loading(FetchChannel::Detail) {
            "Loading lesson..."
        } else {
            "Lesson unavailable"
        };
        let loading = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(colors.text_muted()),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(loading, layout.main);
        return;
    };

    let (variant_area, overview_area) = layout.lesson_areas(!view.overview.is_empty());
    frame.render_widget(
        LessonViewer {
            view,
            theme: app.theme,
        },
        variant_area,
    );
    if let Some(area) = overview_area {
        frame.render_widget(
            OverviewPanel {
                overview: &view.overview,
                theme: app.theme,
            },
            area,
        );
    }
}

fn render_practice(frame: &mut ratatui::Frame, app: &App, layout: &AppLayout) {
    let Some(practice) = &app.practice else {
        return;
    };
    let area = match layout.sidebar {
        Some(sidebar) => layout.main.union(sidebar),
        None => layout.main,
    };
    frame.render_widget(
        PracticeList {
            title: &practice.title,
            phrases: &practice.phrases,
            cursor: &practice.cursor,
            loading: practice.loading,
            theme: app.theme,
        },
        area,
    );
}

fn render_status(frame: &mut ratatui::Frame, app: &App, layout: &AppLayout) {
    let colors = &app.theme.colors;
    let line = if let Some(status) = &app.status {
        Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(colors.error()),
        ))
    } else if !app.loading.is_empty() {
        Line::from(Span::styled(
            " Loading...",
            Style::default().fg(colors.warning()),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), layout.status);
}

fn render_footer(frame: &mut ratatui::Frame, app: &App, layout: &AppLayout) {
    let colors = &app.theme.colors;
    let hints: &[&str] = match app.screen {
        AppScreen::Catalog => &[
            "[Enter] Open",
            "[j/k] Move",
            "[h/l] Language",
            "[p] Practice",
            "[r] Reload",
            "[q] Quit",
        ],
        AppScreen::Lesson => &[
            "[l] Next",
            "[h] Previous",
            "[space] Reveal",
            "[q] Back",
        ],
        AppScreen::Practice => &["[j/k] Move", "[q] Back"],
    };
    let text = footer_hints(hints, layout.footer.width as usize);
    let footer = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(colors.text_muted()),
    )));
    frame.render_widget(footer, layout.footer);
}
