//! Play command implementation - interactive TUI.

// The TUI uses intentional casts for layout arithmetic
#![allow(clippy::needless_pass_by_value, clippy::cast_possible_truncation)]

use super::{seed_or_random, CliError};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use periodic_recall::element::Origin;
use periodic_recall::feedback::{Throttled, TracingSink};
use periodic_recall::game::{Outcome, RoundSummary};
use periodic_recall::layout::{cell_size, half_of, CarouselWindow, CellRole, TableGrid, TableHalf, Viewport, COLUMNS};
use periodic_recall::{Action, Element, GameConfig, GameState, Phase, Session, SystemClock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::stdout;
use std::time::Duration;

type PlaySession = Session<StdRng, SystemClock, Throttled<TracingSink>>;

/// Rough pixel size of one terminal character.
const CHAR_WIDTH_PX: f32 = 8.0;
const CHAR_HEIGHT_PX: f32 = 16.0;

/// Narrowest cell that still fits a three-letter symbol with padding.
const MIN_CELL_CHARS: u16 = 5;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the target pool is invalid or the terminal fails.
pub(crate) fn execute(config: &GameConfig, seed: Option<u64>) -> Result<(), CliError> {
    let pool = config.rules.resolve_pool()?;
    let seed = seed_or_random(seed);
    tracing::info!(seed, "starting interactive session");

    let session = Session::new(
        config.rules.rules(),
        pool,
        StdRng::seed_from_u64(seed),
        SystemClock::new(),
        Throttled::new(TracingSink, config.feedback.throttle_ms),
    );

    run_tui(session)
}

/// App state for the TUI.
struct App {
    session: PlaySession,
    half: TableHalf,
    /// Target the view last followed, so the half only flips when it changes.
    followed: Option<u8>,
}

impl App {
    fn new(session: PlaySession) -> Self {
        Self {
            session,
            half: TableHalf::Left,
            followed: None,
        }
    }

    fn send(&mut self, action: Action) {
        self.session.send(action);
        self.follow_target();
    }

    fn tick(&mut self) {
        self.session.tick();
        self.follow_target();
    }

    /// Flip to the half showing the current target when a new one comes up.
    fn follow_target(&mut self) {
        let target = self.session.state().current_target().filter(|_| self.session.state().phase == Phase::Recall);
        let number = target.map(|e| e.atomic_number);
        if number != self.followed {
            self.followed = number;
            if let Some(element) = target {
                self.half = half_of(element);
            }
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        let phase = self.session.state().phase;
        match code {
            KeyCode::Tab => self.half = self.half.toggled(),
            KeyCode::Char('o') => {
                let action = if self.session.state().show_origin_popup {
                    Action::HideOriginPopup
                } else {
                    Action::ShowOriginPopup
                };
                self.send(action);
            }
            KeyCode::Esc if self.session.state().show_origin_popup => self.send(Action::HideOriginPopup),
            KeyCode::Char('s') | KeyCode::Enter if matches!(phase, Phase::Menu | Phase::HowToPlay) => {
                self.send(Action::StartGame);
            }
            KeyCode::Char('h') => self.send(Action::ShowHowToPlay),
            KeyCode::Char('b') | KeyCode::Esc if phase == Phase::HowToPlay => self.send(Action::BackToMenu),
            KeyCode::Char('r') => self.send(Action::ResetGame),
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => self.send(Action::PreviousChoice),
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => self.send(Action::NextChoice),
            KeyCode::Enter | KeyCode::Char(' ') => self.send(Action::SelectCurrentChoice),
            _ => {}
        }
    }
}

/// Runs its closure when dropped.
struct Restore<F: FnMut()>(F);

impl<F: FnMut()> Drop for Restore<F> {
    fn drop(&mut self) {
        (self.0)();
    }
}

/// Enter raw mode and the alternate screen. The returned guard undoes both,
/// also when a later setup step fails.
fn enter_terminal() -> Result<Restore<fn()>, CliError> {
    enable_raw_mode()?;
    let guard = Restore(restore_terminal as fn());
    execute!(stdout(), EnterAlternateScreen)?;
    Ok(guard)
}

fn restore_terminal() {
    disable_raw_mode().ok();
    execute!(stdout(), LeaveAlternateScreen).ok();
}

fn run_tui(session: PlaySession) -> Result<(), CliError> {
    let _restore = enter_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(session);
    // Nothing to preload in a terminal; open the gate right away.
    app.session.mark_ready();

    event_loop(&mut terminal, &mut app)
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<(), CliError> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        app.tick();

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            if key.code == KeyCode::Char('q') {
                break;
            }
            app.handle_key(key.code);
        }
    }
    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let state = app.session.state();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Main content
            Constraint::Length(3),  // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], state);

    let cell = cell_width(f.area());
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(COLUMNS as u16 * cell + 2), Constraint::Min(30)])
        .split(chunks[1]);

    render_table(f, main_chunks[0], state, app.half, cell);
    match state.phase {
        Phase::Menu => render_menu(f, main_chunks[1]),
        Phase::HowToPlay => render_how_to_play(f, main_chunks[1], state),
        Phase::Memorize => render_memorize(f, main_chunks[1], state),
        Phase::Recall => render_carousel(f, main_chunks[1], state),
        Phase::GameEnd => render_summary(f, main_chunks[1], state),
    }

    render_footer(f, chunks[2], state);

    if state.show_origin_popup {
        render_origin_popup(f, f.area(), state);
    }
}

fn render_header(f: &mut Frame, area: Rect, state: &GameState) {
    let status = match state.phase {
        Phase::Memorize => format!("Memorize: {}s", state.time_remaining),
        Phase::Recall => format!(
            "Recall: {}s | {}/{} | Mistakes {}/{}",
            state.recall_time_remaining,
            state.correct_placements.len(),
            state.target_elements.len(),
            state.mistakes,
            state.max_mistakes
        ),
        phase => phase.to_string(),
    };
    let paused = if state.is_paused { " | PAUSED" } else { "" };

    let header = Paragraph::new(format!(" Periodic Recall | {status}{paused} "))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

/// Table cell width in characters for a terminal of `area`'s size.
#[allow(clippy::cast_sign_loss)]
fn cell_width(area: Rect) -> u16 {
    let viewport = Viewport {
        width: f32::from(area.width) * CHAR_WIDTH_PX,
        height: f32::from(area.height) * CHAR_HEIGHT_PX,
    };
    let chars = (cell_size(viewport) / CHAR_WIDTH_PX).round() as u16;
    chars.max(MIN_CELL_CHARS)
}

fn render_table(f: &mut Frame, area: Rect, state: &GameState, half: TableHalf, cell_width: u16) {
    let grid = TableGrid::build(half);
    let mut lines: Vec<Line> = Vec::new();

    for (i, row) in grid.rows().enumerate() {
        if i == grid.main.len() {
            lines.push(Line::from(""));
        }
        let spans: Vec<Span> = row.iter().map(|cell| cell_span(state, *cell, cell_width)).collect();
        lines.push(Line::from(spans));
    }

    let title = match half {
        TableHalf::Left => " Groups 1-9 ",
        TableHalf::Right => " Groups 10-18 ",
    };
    let table = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(table, area);
}

fn cell_span(state: &GameState, cell: Option<&'static Element>, width: u16) -> Span<'static> {
    let width = usize::from(width);
    let role = CellRole::for_cell(state, cell);
    let Some(element) = cell else {
        return Span::raw(" ".repeat(width));
    };

    let label = if role.shows_symbol() { element.symbol } else { "???" };
    let text = format!(" {label:<pad$}", pad = width - 1);
    let (r, g, b) = element.color.rgb();
    let style = match role {
        CellRole::Blank | CellRole::Plain => Style::default().fg(Color::Rgb(r, g, b)),
        CellRole::MemorizeTarget => Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD),
        CellRole::Hidden => Style::default().fg(Color::DarkGray).bg(Color::Gray),
        CellRole::CurrentTarget => {
            Style::default().fg(Color::White).bg(Color::Magenta).add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
        }
        CellRole::Recalled => Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
    };
    Span::styled(text, style)
}

fn render_menu(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("PERIODIC RECALL", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("[s] Start"),
        Line::from("[h] How to play"),
        Line::from("[q] Quit"),
    ];
    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Menu "));
    f.render_widget(menu, area);
}

fn render_how_to_play(f: &mut Frame, area: Rect, state: &GameState) {
    let rules = state.rules;
    let text = vec![
        Line::from(format!(
            "1. {} cells light up on the table. You have {} seconds to memorize them.",
            state.target_pool.len(),
            rules.memorize_secs
        )),
        Line::from(""),
        Line::from("2. The symbols are hidden again. One cell at a time is marked."),
        Line::from(""),
        Line::from("3. Scroll the carousel to the element that belongs there and select it."),
        Line::from(""),
        Line::from(format!(
            "4. You have {} seconds and may make {} mistakes.",
            rules.recall_secs, rules.max_mistakes
        )),
        Line::from(""),
        Line::from("[Tab] switches table halves. [o] shows where elements come from."),
        Line::from(""),
        Line::from("[s] Start   [b] Back"),
    ];
    let help = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" How to play "));
    f.render_widget(help, area);
}

fn render_memorize(f: &mut Frame, area: Rect, state: &GameState) {
    let mut lines = vec![Line::from(""), Line::from("Memorize these elements:"), Line::from("")];
    for element in &state.target_elements {
        lines.push(Line::from(format!("  {element}  {}", element.description)));
    }
    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(format!(" {}s ", state.time_remaining)));
    f.render_widget(panel, area);
}

fn render_carousel(f: &mut Frame, area: Rect, state: &GameState) {
    let choices = &state.available_choices;
    let mut lines = vec![Line::from("Which element goes in the marked cell?"), Line::from("")];

    if let Some(window) = CarouselWindow::around(choices.len(), state.current_choice_index) {
        let dim = Style::default().fg(Color::DarkGray);
        if choices.len() > 2 {
            lines.push(Line::from(Span::styled(format!("    {}", choices[window.previous]), dim)));
        }
        let current = choices[window.current];
        lines.push(Line::from(Span::styled(
            format!("  > {current} <"),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        if choices.len() > 1 {
            lines.push(Line::from(Span::styled(format!("    {}", choices[window.next]), dim)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(current.description));
    }

    let carousel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(format!(" {}s ", state.recall_time_remaining)));
    f.render_widget(carousel, area);
}

fn render_summary(f: &mut Frame, area: Rect, state: &GameState) {
    let summary = RoundSummary::from_state(state);
    let color = match summary.outcome {
        Outcome::MissionSucceeded => Color::Green,
        Outcome::MissionFailed => Color::Red,
    };

    let mut lines = vec![
        Line::from(Span::styled(
            summary.outcome.banner(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Recalled: {}/{} ({}%)", summary.correct, summary.total, summary.percentage)),
        Line::from(format!("Mistakes: {}", summary.mistakes)),
        Line::from(format!("Average response: {:.1}s", summary.average_response_secs)),
        Line::from(""),
    ];
    for target in &summary.targets {
        let (mark, style) = if target.recalled {
            ("+", Style::default().fg(Color::Green))
        } else {
            ("-", Style::default().fg(Color::Red))
        };
        lines.push(Line::from(Span::styled(format!("  [{mark}] {}", target.element), style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("[r] Play again"));

    let panel = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Results "));
    f.render_widget(panel, area);
}

fn render_origin_popup(f: &mut Frame, area: Rect, state: &GameState) {
    let popup = centered(area, 60, 16);
    let focus = state.current_choice().or_else(|| state.current_target());

    let mut lines = Vec::new();
    if let Some(element) = focus {
        lines.push(Line::from(Span::styled(
            element.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(element.description));
        lines.push(Line::from(format!("{} {}", element.name, element.extended_description())));
        lines.push(Line::from(""));
    }
    let highlighted = focus.map_or(&[][..], Element::origins);
    for origin in Origin::all() {
        let (top, bottom) = origin.caption();
        let style = if highlighted.contains(&origin) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(format!("  {top} {bottom}"), style)));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Origin [o] close "));
    f.render_widget(Clear, popup);
    f.render_widget(widget, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_footer(f: &mut Frame, area: Rect, state: &GameState) {
    let controls = match state.phase {
        Phase::Menu => " [s] Start  [h] How to play  [Tab] Half  [o] Origins  [q] Quit ",
        Phase::HowToPlay => " [s] Start  [b] Back  [q] Quit ",
        Phase::Memorize => " [Tab] Half  [o] Origins (pauses)  [r] Reset  [q] Quit ",
        Phase::Recall => " [↑/↓] Choose  [Enter] Select  [Tab] Half  [o] Origins  [r] Reset  [q] Quit ",
        Phase::GameEnd => " [r] Play again  [Tab] Half  [q] Quit ",
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use periodic_recall::element;
    use std::cell::Cell;
    use std::io;

    #[test]
    fn test_cell_width_follows_terminal_size() {
        assert_eq!(cell_width(Rect::new(0, 0, 80, 24)), 5);
        assert_eq!(cell_width(Rect::new(0, 0, 240, 70)), 6);
        assert!(cell_width(Rect::new(0, 0, 10, 5)) >= MIN_CELL_CHARS);
    }

    #[test]
    fn test_cells_fill_their_width() {
        let state = GameState::default();
        for width in [5, 6] {
            assert_eq!(cell_span(&state, None, width).width(), usize::from(width));
            assert_eq!(cell_span(&state, element::lookup(1), width).width(), usize::from(width));
            assert_eq!(cell_span(&state, element::lookup(118), width).width(), usize::from(width));
        }
    }

    fn no_terminal() -> io::Result<()> {
        Err(io::Error::other("not a terminal"))
    }

    #[test]
    fn test_restore_runs_when_setup_fails() {
        let restored = Cell::new(0);
        let setup = || -> Result<(), CliError> {
            let _restore = Restore(|| restored.set(restored.get() + 1));
            no_terminal()?;
            Ok(())
        };
        assert!(setup().is_err());
        assert_eq!(restored.get(), 1);
    }
}
