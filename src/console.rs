use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue, terminal,
};
use lifegrid::{Cell, Session};
use std::io;

pub enum ConsoleCommand {
    Exit,
    Handled,
}

/// Interactive board view. The terminal is the viewport onto the board's
/// top-left corner; the bottom row carries the status line.
pub struct ConsoleRender {
    report: String,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide, EnableMouseCapture)?;
        Ok(Self {
            report: String::new(),
        })
    }

    pub fn render(&self, session: &Session) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let view_rows = rows.saturating_sub(1) as i32;
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        for &cell in session.living() {
            if cell.col >= cols as i32 || cell.row >= view_rows {
                continue;
            }
            queue!(stdout, cursor::MoveTo(cell.col as u16, cell.row as u16))?;
            io::Write::write_all(&mut stdout, b"\xE2\x96\x88")?;
        }

        // write footer
        let footer = format!(
            "[{}] gen:{} alive:{} {}ms  {}",
            if session.is_running() { "run" } else { "pause" },
            session.generation(),
            session.alive_count(),
            session.interval().as_millis(),
            self.report,
        );
        queue!(stdout, cursor::MoveTo(0, rows.saturating_sub(1)))?;
        io::Write::write_all(&mut stdout, footer.as_bytes())?;

        io::Write::flush(&mut stdout)
    }

    /// Drains one pending event and applies it to the session.
    ///
    /// space toggles play/pause, `.` single-steps while paused, `+`/`-`
    /// change speed, `c` clears the board, a left click toggles the
    /// clicked cell, `q` or CTRL+C exits.
    pub fn poll_events(&mut self, session: &mut Session) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is present for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let mut outp = Ok(Some(ConsoleCommand::Handled));
        match event::read()? {
            // CTRL+C
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | event::Event::Key(KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }) => {
                outp = Ok(Some(ConsoleCommand::Exit));
            }
            event::Event::Key(KeyEvent {
                code: KeyCode::Char(' '),
                ..
            }) => session.toggle_running(),
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('.'),
                ..
            }) => {
                if !session.is_running() {
                    session.advance();
                }
            }
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('+' | '='),
                ..
            }) => session.faster(),
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('-'),
                ..
            }) => session.slower(),
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                ..
            }) => session.clear(),
            event::Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => session.toggle(Cell::new(row as i32, column as i32)),
            _ => {}
        }
        outp
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(io::stdout(), cursor::Show, DisableMouseCapture).expect("restore terminal");
    }
}
