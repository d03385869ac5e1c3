//! Arrow-key checkbox menu for file selection.
//!
//! The menu shows one toggleable row per changed file, a separator, and a
//! Cancel row. Space toggles, `a` toggles every selectable row at once,
//! Enter confirms, Esc / `q` / Ctrl-C abort. Key handling lives in
//! [`MenuState`], a plain state machine with no terminal dependency, so the
//! interaction rules are unit-tested by feeding it key events; the raw-mode
//! driver is a thin wrapper around it.
//!
//! Cancel is only honored when it is the distinguishing extra choice: if the
//! toggle-all affordance swept up Cancel together with every file, the
//! cancellation is treated as incidental and the full file set is returned.

use crate::core::changes::{changed_files, ChangeEntry};
use crate::core::colors::status_symbol;
use crate::core::output::{print_error, print_info};
use crate::core::runner::GitRunner;
use crate::select::FileSelector;
use colored::*;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use is_terminal::IsTerminal;
use std::io::{self, Write};

pub struct CheckboxSelector;

impl FileSelector for CheckboxSelector {
    fn select(&self, runner: &GitRunner) -> Option<Vec<String>> {
        let entries = changed_files(runner);
        if entries.is_empty() {
            return None;
        }

        // raw mode reads /dev/tty, which would hang a scripted caller
        if !io::stdin().is_terminal() {
            print_error("The interactive menu requires a terminal; use the numbered prompt instead");
            return None;
        }

        match run_menu(&entries) {
            Ok(Some(response)) => resolve_toggles(&response, &entries),
            Ok(None) => {
                print_info("Selection cancelled.");
                None
            }
            Err(e) => {
                print_error(&format!("Terminal error: {e}"));
                None
            }
        }
    }
}

/// Signals a key can produce besides mutating the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuSignal {
    Confirm,
    Abort,
}

/// Final toggle set of a confirmed menu round
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MenuResponse {
    /// Indices of toggled files, in listing order
    pub files: Vec<usize>,
    /// Whether the Cancel row was toggled
    pub cancel: bool,
}

/// Key-driven menu state.
///
/// Rows 0..file_count are files, row file_count is Cancel; the separator is
/// purely visual and can be neither reached nor toggled.
pub(crate) struct MenuState {
    file_count: usize,
    cursor: usize,
    toggled: Vec<bool>,
}

impl MenuState {
    pub(crate) fn new(file_count: usize) -> Self {
        MenuState {
            file_count,
            cursor: 0,
            toggled: vec![false; file_count + 1],
        }
    }

    fn cancel_row(&self) -> usize {
        self.file_count
    }

    fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_down(&mut self) {
        if self.cursor < self.cancel_row() {
            self.cursor += 1;
        }
    }

    fn toggle_current(&mut self) {
        self.toggled[self.cursor] = !self.toggled[self.cursor];
    }

    /// Toggle-all affordance: every selectable row, Cancel included
    fn toggle_all(&mut self) {
        let all_on = self.toggled.iter().all(|t| *t);
        for slot in &mut self.toggled {
            *slot = !all_on;
        }
    }

    pub(crate) fn on_key(&mut self, key: KeyEvent) -> Option<MenuSignal> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('d') => Some(MenuSignal::Abort),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down();
                None
            }
            KeyCode::Char(' ') => {
                self.toggle_current();
                None
            }
            KeyCode::Char('a') => {
                self.toggle_all();
                None
            }
            KeyCode::Enter => Some(MenuSignal::Confirm),
            KeyCode::Esc | KeyCode::Char('q') => Some(MenuSignal::Abort),
            _ => None,
        }
    }

    pub(crate) fn response(&self) -> MenuResponse {
        MenuResponse {
            files: (0..self.file_count).filter(|&i| self.toggled[i]).collect(),
            cancel: self.toggled[self.cancel_row()],
        }
    }
}

/// Apply the cancellation policy to a confirmed toggle set.
///
/// Cancel toggled with a strict subset of files is a genuine cancellation.
/// Cancel toggled together with every file is the toggle-all artifact: the
/// cancel entry is ignored and the full set returned. Without Cancel, the
/// toggled paths are returned as-is; an empty set resolves to `None`.
pub(crate) fn resolve_toggles(
    response: &MenuResponse,
    entries: &[ChangeEntry],
) -> Option<Vec<String>> {
    if response.cancel {
        if response.files.len() < entries.len() {
            print_info("Selection cancelled.");
            return None;
        }
        print_info("All files selected; ignoring the cancel entry.");
        return Some(entries.iter().map(|e| e.path.clone()).collect());
    }

    if response.files.is_empty() {
        return None;
    }

    Some(
        response
            .files
            .iter()
            .map(|&i| entries[i].path.clone())
            .collect(),
    )
}

fn render_lines(state: &MenuState, entries: &[ChangeEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\r\n", "Select files to stage:".bold()));
    out.push_str(&format!(
        "{}\r\n",
        "[space] toggle · [a] toggle all · [enter] confirm · [esc] cancel".bright_black()
    ));

    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{} {} {} {}\r\n",
            marker(state.cursor == i),
            checkbox(state.toggled[i]),
            status_symbol(entry),
            entry.path
        ));
    }

    out.push_str(&format!("  {}\r\n", "──────────".bright_black()));
    out.push_str(&format!(
        "{} {} {}\r\n",
        marker(state.cursor == state.cancel_row()),
        checkbox(state.toggled[state.cancel_row()]),
        "Cancel".red()
    ));
    out
}

fn marker(at_cursor: bool) -> String {
    if at_cursor {
        "❯".cyan().to_string()
    } else {
        " ".to_string()
    }
}

fn checkbox(toggled: bool) -> String {
    if toggled {
        "[x]".green().to_string()
    } else {
        "[ ]".to_string()
    }
}

fn run_menu(entries: &[ChangeEntry]) -> io::Result<Option<MenuResponse>> {
    let mut state = MenuState::new(entries.len());
    let mut stdout = io::stdout();

    terminal::enable_raw_mode()?;
    let result = menu_loop(&mut state, entries, &mut stdout);
    terminal::disable_raw_mode()?;
    println!();
    result
}

fn menu_loop(
    state: &mut MenuState,
    entries: &[ChangeEntry],
    stdout: &mut io::Stdout,
) -> io::Result<Option<MenuResponse>> {
    // header + hint + file rows + separator + cancel
    let line_count = entries.len() + 4;

    write!(stdout, "{}", render_lines(state, entries))?;
    stdout.flush()?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(signal) = state.on_key(key) {
                    return Ok(match signal {
                        MenuSignal::Confirm => Some(state.response()),
                        MenuSignal::Abort => None,
                    });
                }
                execute!(
                    stdout,
                    cursor::MoveUp(line_count as u16),
                    terminal::Clear(terminal::ClearType::FromCursorDown)
                )?;
                write!(stdout, "{}", render_lines(state, entries))?;
                stdout.flush()?;
            }
            _ => {}
        }
    }
}
