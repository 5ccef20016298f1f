//! Render dispatch: one entry point, two backends.
//!
//! [`Renderer`] joins markup fragments, parses them once, and compiles the
//! tree through exactly one backend per call. Both backends' results are
//! normalized into one calling convention, an ordered list of strings:
//!
//! - terminal backend: a single fully styled string
//! - console backend: the format string followed by one declaration per
//!   placeholder
//!
//! # Example
//!
//! ```rust
//! use mtxt_render::{RenderConfig, RenderMode, Renderer};
//! use mtxt_markup::wrap_with_styles;
//!
//! let renderer = Renderer::new(RenderConfig::new().mode(RenderMode::Console).separator(""));
//! let markup = wrap_with_styles(&["bold"], "world");
//!
//! let parts = renderer.render(&["Hello ", markup.as_str()]).into_parts();
//! assert_eq!(parts, vec!["%cHello %cworld", "", "font-weight: bold;"]);
//! ```

use std::fmt;
use std::sync::Arc;

use mtxt_markup::parse;
use once_cell::sync::Lazy;

use crate::renderer::{ConsoleRenderer, TerminalRenderer};
use crate::runtime::{NativeRuntime, Runtime, RuntimeDetector};
use crate::style::StyleVocabulary;

/// Default separator for both input fragments and joined output parts.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Which backend a render call should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Always compile to terminal escape codes.
    Terminal,
    /// Always compile to the host console template convention.
    Console,
    /// Ask the runtime detector on every call.
    #[default]
    Auto,
}

/// A concrete backend, after resolving [`RenderMode::Auto`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Terminal,
    Console,
}

impl RenderMode {
    /// Resolves this mode to a backend, consulting `detector` only for `Auto`.
    pub fn resolve(&self, detector: &dyn RuntimeDetector) -> Backend {
        match self {
            RenderMode::Terminal => Backend::Terminal,
            RenderMode::Console => Backend::Console,
            RenderMode::Auto => {
                let runtime = detector.detect();
                let backend = backend_for(runtime);
                tracing::debug!(%runtime, ?backend, "resolved automatic render mode");
                backend
            }
        }
    }
}

fn backend_for(runtime: Runtime) -> Backend {
    if runtime.is_console_capable() {
        Backend::Console
    } else {
        Backend::Terminal
    }
}

/// Normalized result of a render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutput {
    /// The ordered argument list for the active backend.
    Parts(Vec<String>),
    /// The argument list joined into one string. For the console backend this
    /// discards the placeholder/declaration pairing and is only useful for
    /// inspection.
    Joined(String),
}

impl RenderOutput {
    /// The argument list. A joined output is a single part.
    pub fn into_parts(self) -> Vec<String> {
        match self {
            RenderOutput::Parts(parts) => parts,
            RenderOutput::Joined(joined) => vec![joined],
        }
    }

    /// The output as one string; parts are concatenated.
    pub fn into_string(self) -> String {
        match self {
            RenderOutput::Parts(parts) => parts.concat(),
            RenderOutput::Joined(joined) => joined,
        }
    }

    /// Borrowed view of the parts, if not joined.
    pub fn parts(&self) -> Option<&[String]> {
        match self {
            RenderOutput::Parts(parts) => Some(parts),
            RenderOutput::Joined(_) => None,
        }
    }
}

/// Everything a render call needs, passed explicitly instead of living in
/// process-wide state.
#[derive(Clone)]
pub struct RenderConfig {
    mode: RenderMode,
    join: bool,
    separator: String,
    join_separator: String,
    force_styling: bool,
    vocabulary: StyleVocabulary,
    detector: Arc<dyn RuntimeDetector>,
}

impl fmt::Debug for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderConfig")
            .field("mode", &self.mode)
            .field("join", &self.join)
            .field("separator", &self.separator)
            .field("join_separator", &self.join_separator)
            .field("force_styling", &self.force_styling)
            .field("vocabulary", &self.vocabulary.len())
            .finish_non_exhaustive()
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::Auto,
            join: false,
            separator: DEFAULT_SEPARATOR.to_string(),
            join_separator: DEFAULT_SEPARATOR.to_string(),
            force_styling: true,
            vocabulary: StyleVocabulary::default(),
            detector: Arc::new(NativeRuntime),
        }
    }
}

impl RenderConfig {
    /// Automatic mode, unjoined output, [`DEFAULT_SEPARATOR`] on both sides,
    /// default vocabulary, native detection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the render mode.
    pub fn mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Joins the normalized output into one string when true.
    pub fn join(mut self, join: bool) -> Self {
        self.join = join;
        self
    }

    /// Separator placed between input fragments before parsing.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Separator placed between output parts when joining.
    pub fn join_separator(mut self, separator: impl Into<String>) -> Self {
        self.join_separator = separator.into();
        self
    }

    /// Whether the terminal backend always writes escape codes. When false the
    /// environment decides (TTY, `NO_COLOR`, `CLICOLOR_FORCE`).
    pub fn force_styling(mut self, force: bool) -> Self {
        self.force_styling = force;
        self
    }

    /// Replaces the named style vocabulary.
    pub fn vocabulary(mut self, vocabulary: StyleVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Replaces the runtime detector used by automatic mode.
    pub fn detector<D: RuntimeDetector + 'static>(mut self, detector: D) -> Self {
        self.detector = Arc::new(detector);
        self
    }

    /// The configured mode.
    pub fn render_mode(&self) -> RenderMode {
        self.mode
    }

    /// The configured vocabulary.
    pub fn style_vocabulary(&self) -> &StyleVocabulary {
        &self.vocabulary
    }
}

/// Compiles markup through the configured backend.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Creates a renderer from a configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The configuration this renderer was built with.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Resolves the backend the next call would use.
    pub fn backend(&self) -> Backend {
        self.config.mode.resolve(self.config.detector.as_ref())
    }

    /// Joins `fragments`, parses them, and renders through one backend.
    pub fn render<S: AsRef<str>>(&self, fragments: &[S]) -> RenderOutput {
        let markup = fragments
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<&str>>()
            .join(&self.config.separator);
        let forest = parse(&markup);

        let parts = match self.backend() {
            Backend::Terminal => {
                let renderer = TerminalRenderer::new(&self.config.vocabulary)
                    .force_styling(self.config.force_styling);
                vec![renderer.render(&forest)]
            }
            Backend::Console => ConsoleRenderer::new(&self.config.vocabulary)
                .render(&forest)
                .into_parts(),
        };

        if self.config.join {
            RenderOutput::Joined(parts.join(&self.config.join_separator))
        } else {
            RenderOutput::Parts(parts)
        }
    }
}

static AUTO: Lazy<Renderer> = Lazy::new(Renderer::default);
static CONSOLE: Lazy<Renderer> =
    Lazy::new(|| Renderer::new(RenderConfig::new().mode(RenderMode::Console)));
static TERMINAL: Lazy<Renderer> =
    Lazy::new(|| Renderer::new(RenderConfig::new().mode(RenderMode::Terminal)));

/// Renders with the default configuration in automatic mode.
pub fn render<S: AsRef<str>>(fragments: &[S]) -> Vec<String> {
    AUTO.render(fragments).into_parts()
}

/// Renders with the default configuration for a host console.
pub fn render_to_console<S: AsRef<str>>(fragments: &[S]) -> Vec<String> {
    CONSOLE.render(fragments).into_parts()
}

/// Renders with the default configuration for a terminal.
pub fn render_to_terminal<S: AsRef<str>>(fragments: &[S]) -> Vec<String> {
    TERMINAL.render(fragments).into_parts()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const MARKUP: &str = "Hello [mtxt-style[[bold]]]world[[/mtxt-style]]";

    #[test]
    fn test_terminal_mode_single_part() {
        let renderer = Renderer::new(RenderConfig::new().mode(RenderMode::Terminal));
        assert_eq!(
            renderer.render(&[MARKUP]).into_parts(),
            vec!["Hello \x1b[1mworld\x1b[0m"]
        );
    }

    #[test]
    fn test_console_mode_parts() {
        let renderer = Renderer::new(RenderConfig::new().mode(RenderMode::Console));
        assert_eq!(
            renderer.render(&[MARKUP]).into_parts(),
            vec!["%cHello %cworld", "", "font-weight: bold;"]
        );
    }

    #[test]
    fn test_auto_mode_follows_detector() {
        let console = Renderer::new(RenderConfig::new().detector(|| Runtime::HostConsole));
        assert_eq!(console.backend(), Backend::Console);

        let piped = Renderer::new(RenderConfig::new().detector(|| Runtime::Pipe));
        assert_eq!(piped.backend(), Backend::Terminal);
    }

    #[test]
    fn test_auto_mode_detects_once_per_call() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let renderer = Renderer::new(RenderConfig::new().detector(|| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            Runtime::Terminal
        }));

        renderer.render(&[MARKUP, MARKUP]);
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_explicit_mode_never_detects() {
        let renderer = Renderer::new(
            RenderConfig::new()
                .mode(RenderMode::Terminal)
                .detector(|| -> Runtime { panic!("detector must not run") }),
        );
        renderer.render(&[MARKUP]);
    }

    #[test]
    fn test_fragments_joined_with_separator() {
        let renderer = Renderer::new(
            RenderConfig::new()
                .mode(RenderMode::Console)
                .separator(" "),
        );
        assert_eq!(
            renderer.render(&["a", "b"]).into_parts(),
            vec!["%ca b", ""]
        );
    }

    #[test]
    fn test_tag_may_span_fragments() {
        let renderer = Renderer::new(RenderConfig::new().mode(RenderMode::Console));
        let parts = renderer
            .render(&["[mtxt-style[[red]]]", "x", "[[/mtxt-style]]"])
            .into_parts();
        assert_eq!(parts, vec!["%c,x,", "color: red;"]);
    }

    #[test]
    fn test_default_separators_are_commas() {
        assert_eq!(render_to_terminal(&["a", "b"]), vec!["a,b"]);

        let renderer = Renderer::new(RenderConfig::new().mode(RenderMode::Console).join(true));
        assert_eq!(
            renderer.render(&["[mtxt-style[[bold]]]x[[/mtxt-style]]"]),
            RenderOutput::Joined("%cx,font-weight: bold;".to_string())
        );
    }

    #[test]
    fn test_join_flag() {
        let renderer = Renderer::new(
            RenderConfig::new()
                .mode(RenderMode::Console)
                .join(true)
                .join_separator(","),
        );
        assert_eq!(
            renderer.render(&[MARKUP]),
            RenderOutput::Joined("%cHello %cworld,,font-weight: bold;".to_string())
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_to_console::<&str>(&[]), vec![""]);
        assert_eq!(render_to_terminal(&[""]), vec![""]);
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocabulary = StyleVocabulary::empty().add(
            "shout",
            console::Style::new().bold(),
            "font-size: 2em;",
        );
        let renderer = Renderer::new(
            RenderConfig::new()
                .mode(RenderMode::Console)
                .vocabulary(vocabulary),
        );
        let parts = renderer
            .render(&["[mtxt-style[[shout]]]hey[[/mtxt-style]][mtxt-style[[bold]]]!![[/mtxt-style]]"])
            .into_parts();
        assert_eq!(parts, vec!["%chey%c!!", "font-size: 2em;", ""]);
    }

    #[test]
    fn test_output_accessors() {
        let parts = RenderOutput::Parts(vec!["a".into(), "b".into()]);
        assert_eq!(parts.parts().map(<[String]>::len), Some(2));
        assert_eq!(parts.into_string(), "ab");
        assert_eq!(RenderOutput::Joined("x".into()).into_parts(), vec!["x"]);
    }
}
