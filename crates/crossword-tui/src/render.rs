use crate::app::{App, Focus, MessageKind, ScreenState};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use crossword_core::{Orientation, Position};
use std::io;

pub fn render(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;
    app.term_size = (term_width, term_height);

    execute!(stdout, Hide)?;

    match app.screen_state {
        ScreenState::Win => render_win_screen(stdout, app, term_width, term_height)?,
        ScreenState::Playing => {
            execute!(stdout, Clear(ClearType::All))?;
            render_game_screen(stdout, app, term_width, term_height)?;
        }
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn render_game_screen(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let n = app.game.layout().size() as u16;

    // Each cell is 2 chars wide plus a 1-char border either side.
    let grid_width = n * 2 + 2;
    let panel_width: u16 = 44;
    let total_width = grid_width + 3 + panel_width;

    let start_x = if term_width > total_width {
        (term_width - total_width) / 2
    } else {
        1
    };
    let start_y = 1;

    render_grid(stdout, app, start_x, start_y, term_height)?;

    let panel_x = start_x + grid_width + 3;
    render_clue_panel(stdout, app, panel_x, start_y, panel_width, term_height)?;

    let input_y = (start_y + n + 2).min(term_height.saturating_sub(3));
    render_input_bar(stdout, app, start_x, input_y)?;

    if let Some((ref msg, kind)) = app.message {
        render_message(stdout, app, msg, kind, start_x, input_y + 1)?;
    }

    render_controls(stdout, app, start_x, input_y + 2)?;

    Ok(())
}

fn render_grid(
    stdout: &mut io::Stdout,
    app: &App,
    x: u16,
    y: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let layout = app.game.layout();
    let n = layout.size();

    let horizontal_border: String = format!("+{}+", "-".repeat(n * 2));
    execute!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.border),
        Print(&horizontal_border)
    )?;

    for row in 0..n {
        let cell_y = y + 1 + row as u16;
        if cell_y + 1 >= term_height {
            break;
        }
        execute!(
            stdout,
            MoveTo(x, cell_y),
            SetForegroundColor(theme.border),
            SetBackgroundColor(theme.bg),
            Print("|")
        )?;

        for col in 0..n {
            let pos = Position::new(row, col);
            if !layout.grid.is_used(pos) {
                execute!(stdout, SetBackgroundColor(theme.block_bg), Print("  "))?;
                continue;
            }

            match app.game.revealed_letter(pos) {
                Some(ch) => {
                    execute!(
                        stdout,
                        SetBackgroundColor(theme.cell_bg),
                        SetForegroundColor(theme.letter),
                        Print(format!("{} ", ch))
                    )?;
                }
                None => {
                    // Hidden cell: show the clue number on placement
                    // origins, a placeholder dot elsewhere.
                    let numbers = layout.numbers_at(pos);
                    if let Some(number) = numbers.first() {
                        execute!(
                            stdout,
                            SetBackgroundColor(theme.cell_bg),
                            SetForegroundColor(theme.badge),
                            Print(format!("{:<2}", number))
                        )?;
                    } else {
                        execute!(
                            stdout,
                            SetBackgroundColor(theme.cell_bg),
                            SetForegroundColor(theme.badge),
                            Print("· ")
                        )?;
                    }
                }
            }
        }

        execute!(
            stdout,
            SetForegroundColor(theme.border),
            SetBackgroundColor(theme.bg),
            Print("|")
        )?;
    }

    let bottom_y = y + 1 + n as u16;
    if bottom_y < term_height {
        execute!(
            stdout,
            MoveTo(x, bottom_y),
            SetForegroundColor(theme.border),
            Print(&horizontal_border)
        )?;
    }
    Ok(())
}

fn render_clue_panel(
    stdout: &mut io::Stdout,
    app: &App,
    x: u16,
    y: u16,
    width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let layout = app.game.layout();

    execute!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.fg),
        Print("Clues"),
        SetForegroundColor(theme.info),
        Print(format!(
            "  {}/{} solved · {} guesses",
            app.game.solved_count(),
            layout.placements.len(),
            app.game.guesses()
        ))
    )?;

    let mut line_y = y + 2;
    for placement in layout.placements.iter().skip(app.clue_scroll) {
        if line_y + 1 >= term_height.saturating_sub(3) {
            execute!(
                stdout,
                MoveTo(x, line_y),
                SetForegroundColor(theme.info),
                Print("...")
            )?;
            break;
        }

        let entry = app.game.entry_for(placement);
        let solved = app.game.placement_solved(placement);
        let color = if solved { theme.solved } else { theme.clue };
        let badge_color = if solved { theme.solved } else { theme.badge };

        let orientation = match placement.orientation {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        };
        execute!(
            stdout,
            MoveTo(x, line_y),
            SetForegroundColor(badge_color),
            Print(format!(
                "{:02}{} ({:02},{:02}) · {} letters{}",
                placement.number,
                orientation,
                placement.row,
                placement.col,
                placement.length,
                if solved { " · solved" } else { "" }
            ))
        )?;
        line_y += 1;

        for line in wrap_text(&entry.clue, width as usize).into_iter().take(3) {
            if line_y + 1 >= term_height.saturating_sub(3) {
                break;
            }
            execute!(
                stdout,
                MoveTo(x, line_y),
                SetForegroundColor(color),
                Print(line)
            )?;
            line_y += 1;
        }
        line_y += 1; // gap between clues
    }
    Ok(())
}

fn render_input_bar(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    let (number_bg, answer_bg) = match app.focus {
        Focus::Number => (theme.input_focus_bg, theme.input_bg),
        Focus::Answer => (theme.input_bg, theme.input_focus_bg),
    };

    execute!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.info),
        Print("Clue # "),
        SetBackgroundColor(number_bg),
        SetForegroundColor(theme.fg),
        Print(format!(" {:<4}", app.number_input)),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.info),
        Print("  Answer "),
        SetBackgroundColor(answer_bg),
        SetForegroundColor(theme.fg),
        Print(format!(" {:<42}", app.answer_input)),
        SetBackgroundColor(theme.bg)
    )?;
    Ok(())
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    kind: MessageKind,
    x: u16,
    y: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let color = match kind {
        MessageKind::Info => theme.info,
        MessageKind::Success => theme.success,
        MessageKind::Error => theme.error,
    };
    execute!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(color),
        Print(msg)
    )?;
    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let bindings = [
        ("Tab", "switch field"),
        ("Enter", "submit"),
        ("^R", "reveal"),
        ("^N", "new game"),
        ("^S", "save"),
        ("↑↓", "scroll clues"),
        ("Esc", "quit"),
    ];

    execute!(stdout, MoveTo(x, y), SetBackgroundColor(theme.bg))?;
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            execute!(stdout, SetForegroundColor(theme.info), Print(" · "))?;
        }
        execute!(
            stdout,
            SetForegroundColor(theme.key),
            Print(key),
            SetForegroundColor(theme.info),
            Print(format!(" {}", action))
        )?;
    }
    Ok(())
}

fn render_win_screen(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    execute!(stdout, SetBackgroundColor(theme.bg), Clear(ClearType::All))?;

    // Confetti behind the banner.
    for p in &app.win_screen.particles {
        if p.is_visible(term_width, term_height) {
            execute!(
                stdout,
                MoveTo(p.x as u16, p.y as u16),
                SetForegroundColor(p.color),
                Print(p.char)
            )?;
        }
    }

    let lines = [
        "PUZZLE COMPLETE!".to_string(),
        String::new(),
        format!(
            "{} clues · {} guesses ({} correct)",
            app.game.layout().placements.len(),
            app.game.guesses(),
            app.game.correct_guesses()
        ),
        String::new(),
        "Enter new game · Esc view board · q quit".to_string(),
    ];

    let box_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16 + 6;
    let box_height = lines.len() as u16 + 2;
    let box_x = term_width.saturating_sub(box_width) / 2;
    let box_y = term_height.saturating_sub(box_height) / 2;

    execute!(
        stdout,
        MoveTo(box_x, box_y),
        SetForegroundColor(theme.success),
        Print(format!("+{}+", "-".repeat(box_width as usize - 2)))
    )?;
    for (i, line) in lines.iter().enumerate() {
        let color = match i {
            0 => theme.success,
            4 => theme.key,
            _ => theme.fg,
        };
        let chars = line.chars().count();
        let pad = (box_width as usize - 2).saturating_sub(chars) / 2;
        let padded = format!(
            "|{}{}{}|",
            " ".repeat(pad),
            line,
            " ".repeat((box_width as usize - 2).saturating_sub(chars + pad))
        );
        execute!(
            stdout,
            MoveTo(box_x, box_y + 1 + i as u16),
            SetForegroundColor(color),
            Print(padded)
        )?;
    }
    execute!(
        stdout,
        MoveTo(box_x, box_y + box_height - 1),
        SetForegroundColor(theme.success),
        Print(format!("+{}+", "-".repeat(box_width as usize - 2)))
    )?;
    Ok(())
}

/// Greedy word wrap to a maximum line width
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
