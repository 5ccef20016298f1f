use std::io::Write as _;

use mtxt::{
    boxed, code, cols, hr, leftbar, render_to_console, render_to_terminal, vbar, write,
    BoxOptions, CodeError, CodeOptions, CodeTheme, HrOptions, LanguageRegistry, RenderConfig,
    RenderMode, Renderer, Runtime, VBarOptions,
};
use tempfile::NamedTempFile;

#[test]
fn test_chain_renders_in_both_backends() {
    let markup = cols().red().bold().paint("Hello, World!");

    assert_eq!(
        render_to_terminal(&[markup.as_str()]),
        vec!["\x1b[31m\x1b[1mHello, World!\x1b[0m\x1b[0m"]
    );
    assert_eq!(
        render_to_console(&[markup.as_str()]),
        vec!["%cHello, World!", "color: red;"]
    );
}

#[test]
fn test_layout_composes_with_rendering() {
    let body = write(|w| {
        w.push(&[hr(&HrOptions::new().title("Report").rule('=').width(16))]);
        w.push(&[leftbar("line one\nline two")]);
        w.push(&[vbar("note", &VBarOptions::new().color("yellow"))]);
    });

    let renderer = Renderer::new(
        RenderConfig::new()
            .mode(RenderMode::Terminal)
            .force_styling(true),
    );
    let out = renderer.render(&[body.as_str()]).into_string();
    let plain = console::strip_ansi_codes(&out).to_string();

    assert_eq!(plain, "==== Report ====\n│ line one\n│ line two\n│ note");
}

#[test]
fn test_box_in_console() {
    let markup = boxed("hi", &BoxOptions::new().rounded().color("blue"));
    let parts = render_to_console(&[markup.as_str()]);

    assert_eq!(parts[0], "%c╭────╮%c\n%c│%c hi %c│%c\n%c╰────╯");
    let blue = "color: blue;";
    assert_eq!(&parts[1..], [blue, "", blue, "", blue, "", blue]);
}

#[test]
fn test_code_highlighting_end_to_end() {
    let registry = LanguageRegistry::with_builtin_languages();
    let markup = code(
        &registry,
        &CodeOptions::new("javascript", "let a = 'x'").theme(CodeTheme::monokai()),
    )
    .unwrap();

    let parts = render_to_console(&[markup.as_str()]);
    assert!(parts[0].starts_with("%clet%c "));
    assert!(parts[0].ends_with("%c'x'"));
    assert_eq!(parts[0].replace("%c", ""), "let a = 'x'");
    assert_eq!(parts[1], "color: #f92672");
    assert_eq!(parts.last().map(String::as_str), Some("color: #e6db74"));
}

#[test]
fn test_unknown_language() {
    let err = code(&LanguageRegistry::new(), &CodeOptions::new("javascript", "x")).unwrap_err();
    assert!(matches!(err, CodeError::UnknownLanguage(_)));
}

#[test]
fn test_theme_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "styles:\n  .hljs-keyword: [underline, bold]").unwrap();

    let theme = CodeTheme::from_file(file.path()).unwrap();
    assert!(!theme.name().is_empty());

    let registry = LanguageRegistry::with_builtin_languages();
    let markup = code(&registry, &CodeOptions::new("rust", "fn main() {}").theme(theme)).unwrap();
    assert!(markup
        .starts_with("[mtxt-style[[bold]]][mtxt-style[[underline]]]fn[[/mtxt-style]][[/mtxt-style]] "));
}

#[test]
fn test_theme_file_missing() {
    let err = CodeTheme::from_file("/no/such/theme.yaml").unwrap_err();
    assert!(matches!(err, CodeError::Io { .. }));
}

#[test]
fn test_auto_mode_follows_injected_runtime() {
    let markup = cols().dim().paint("quiet");
    let renderer = Renderer::new(RenderConfig::new().detector(|| Runtime::HostConsole));
    assert_eq!(
        renderer.render(&[markup.as_str()]).into_parts(),
        vec!["%cquiet", "opacity: 0.6;"]
    );
}
