//! Rendered printing to standard streams.
//!
//! `log` writes to stdout; `warn` and `error` write to stderr. Fragments are
//! rendered through the dispatcher first, then the normalized parts are
//! written on one line separated by a space.

use std::io;

use console::Term;
use mtxt_render::{RenderConfig, Renderer};
use once_cell::sync::Lazy;

/// Severity of a print call, selecting the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Log,
    Warn,
    Error,
}

impl Level {
    fn term(&self) -> Term {
        match self {
            Level::Log => Term::stdout(),
            Level::Warn | Level::Error => Term::stderr(),
        }
    }
}

/// Renders fragments and writes them to a standard stream.
#[derive(Debug, Clone, Default)]
pub struct Printer {
    renderer: Renderer,
}

impl Printer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            renderer: Renderer::new(config),
        }
    }

    /// The line [`print`](Self::print) would write.
    pub fn format<S: AsRef<str>>(&self, fragments: &[S]) -> String {
        self.renderer.render(fragments).into_parts().join(" ")
    }

    pub fn print<S: AsRef<str>>(&self, level: Level, fragments: &[S]) -> io::Result<()> {
        level.term().write_line(&self.format(fragments))
    }

    pub fn log<S: AsRef<str>>(&self, fragments: &[S]) -> io::Result<()> {
        self.print(Level::Log, fragments)
    }

    pub fn warn<S: AsRef<str>>(&self, fragments: &[S]) -> io::Result<()> {
        self.print(Level::Warn, fragments)
    }

    pub fn error<S: AsRef<str>>(&self, fragments: &[S]) -> io::Result<()> {
        self.print(Level::Error, fragments)
    }
}

static PRINTER: Lazy<Printer> = Lazy::new(Printer::default);

/// Prints to stdout with the default configuration.
pub fn log<S: AsRef<str>>(fragments: &[S]) -> io::Result<()> {
    PRINTER.log(fragments)
}

/// Prints to stderr with the default configuration.
pub fn warn<S: AsRef<str>>(fragments: &[S]) -> io::Result<()> {
    PRINTER.warn(fragments)
}

/// Prints to stderr with the default configuration.
pub fn error<S: AsRef<str>>(fragments: &[S]) -> io::Result<()> {
    PRINTER.error(fragments)
}
