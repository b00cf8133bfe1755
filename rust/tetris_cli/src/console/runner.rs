// rust/tetris_cli/src/console/runner.rs
#![forbid(unsafe_code)]

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use tetris_stack_engine::engine::{
    MENU_EXIT, render_banner, render_menu, render_outcome, render_panel, render_placed,
};
use tetris_stack_engine::{Input, Outcome, Piece, Session};

/// End-of-run counters (printed to the log, not the transcript).
#[derive(Clone, Debug, Default)]
pub struct RunReport {
    pub actions: u64,
    pub played: u64,
    pub inserted: u64,
    pub rejected: u64,
    pub invalid: u64,
    /// True if input ran out before an explicit exit selection.
    pub eof_exit: bool,
    pub remaining: Vec<Piece>,
}

/// Drives a `Session` from a line-oriented input and writes the transcript to `out`.
pub struct ConsoleRunner<R, W> {
    session: Session,
    input: super::SelectionReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> ConsoleRunner<R, W> {
    pub fn new(session: Session, input: R, out: W) -> Self {
        Self {
            session,
            input: super::SelectionReader::new(input),
            out,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> io::Result<RunReport> {
        let mut report = RunReport::default();

        write!(self.out, "{}", render_banner())?;
        writeln!(
            self.out,
            "\nInitialising queue with {} pieces...",
            self.session.queue().capacity()
        )?;
        for placed in self.session.fill() {
            write!(self.out, "{}", render_placed(&placed))?;
        }
        write!(self.out, "{}", render_panel(self.session.queue()))?;

        while !self.session.is_terminated() {
            write!(self.out, "{}", render_menu())?;
            self.out.flush()?;

            let input = match self.input.next_input()? {
                Some(input) => input,
                None => {
                    // Closed input behaves like choosing exit.
                    debug!("input closed; exiting");
                    writeln!(self.out)?;
                    report.eof_exit = true;
                    Input::Code(MENU_EXIT)
                }
            };

            let outcome = self.session.apply(input);
            report.actions += 1;
            match &outcome {
                Outcome::Played(_) => report.played += 1,
                Outcome::Inserted(_) => report.inserted += 1,
                Outcome::Rejected(_) => report.rejected += 1,
                Outcome::Invalid(_) => report.invalid += 1,
                Outcome::Exited { remaining } => report.remaining = remaining.clone(),
                Outcome::Terminated => {}
            }

            write!(self.out, "{}", render_outcome(&outcome))?;
            if outcome.shows_panel() {
                write!(self.out, "{}", render_panel(self.session.queue()))?;
                self.session.finish_display();
            }
        }
        self.out.flush()?;

        info!(
            actions = report.actions,
            played = report.played,
            inserted = report.inserted,
            rejected = report.rejected,
            invalid = report.invalid,
            remaining = report.remaining.len(),
            "run finished"
        );
        Ok(report)
    }
}
