//! Runtime detection and terminal geometry.
//!
//! The dispatcher asks a [`RuntimeDetector`] which environment it is running
//! in when rendering in automatic mode. Detectors are plain values held by
//! the render configuration; tests inject a closure instead of the native
//! check.

use std::fmt;

use console::Term;

/// The environment output is headed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Runtime {
    /// An interactive terminal.
    Terminal,
    /// A non-interactive stream (pipe, file, CI log).
    Pipe,
    /// A host with a templated console API (browser-style devtools).
    HostConsole,
}

impl Runtime {
    /// Returns true if output should use the console template convention.
    pub fn is_console_capable(&self) -> bool {
        matches!(self, Runtime::HostConsole)
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Runtime::Terminal => "terminal",
            Runtime::Pipe => "pipe",
            Runtime::HostConsole => "host-console",
        };
        f.write_str(name)
    }
}

/// Answers which [`Runtime`] is active.
pub trait RuntimeDetector: Send + Sync {
    fn detect(&self) -> Runtime;
}

impl<F> RuntimeDetector for F
where
    F: Fn() -> Runtime + Send + Sync,
{
    fn detect(&self) -> Runtime {
        self()
    }
}

/// Detects the process this library is compiled into.
///
/// `wasm32-unknown-unknown` builds are assumed to run under a host console;
/// everything else is a terminal when stdout is a TTY and a pipe otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeRuntime;

impl RuntimeDetector for NativeRuntime {
    fn detect(&self) -> Runtime {
        if cfg!(all(target_arch = "wasm32", target_os = "unknown")) {
            Runtime::HostConsole
        } else if Term::stdout().is_term() {
            Runtime::Terminal
        } else {
            Runtime::Pipe
        }
    }
}

/// Detects the current runtime with [`NativeRuntime`].
pub fn detect_runtime() -> Runtime {
    NativeRuntime.detect()
}

/// Gets the current terminal width, or `default` when it cannot be measured.
pub fn terminal_width(default: usize) -> usize {
    terminal_width_for(detect_runtime(), default)
}

/// Terminal width as seen from `runtime`.
///
/// Host consoles have no column count, so they always get `default`.
pub fn terminal_width_for(runtime: Runtime, default: usize) -> usize {
    match runtime {
        Runtime::HostConsole => default,
        Runtime::Terminal | Runtime::Pipe => terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .filter(|w| *w > 0)
            .unwrap_or(default),
    }
}
