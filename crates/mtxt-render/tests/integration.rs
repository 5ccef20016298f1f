use std::io::Write;

use mtxt_markup::wrap_with_styles;
use mtxt_render::{
    render_to_console, render_to_terminal, RenderConfig, RenderMode, RenderOutput, Renderer,
    Runtime, StyleVocabulary, VocabularyError,
};
use tempfile::NamedTempFile;

#[test]
fn test_hello_world_both_backends() {
    let input = "Hello [mtxt-style[[bold]]], world! [[/mtxt-style]]";

    assert_eq!(
        render_to_console(&[input]),
        vec!["%cHello %c, world! ", "", "font-weight: bold;"]
    );
    assert_eq!(
        render_to_terminal(&[input]),
        vec!["Hello \x1b[1m, world! \x1b[0m"]
    );
}

#[test]
fn test_multi_style_wrap_renders_outermost_in_console() {
    let markup = wrap_with_styles(&["red", "bold"], "Hello, World!");
    assert_eq!(
        render_to_console(&[markup.as_str()]),
        vec!["%cHello, World!", "font-weight: bold;"]
    );
    assert_eq!(
        render_to_terminal(&[markup.as_str()]),
        vec!["\x1b[1m\x1b[31mHello, World!\x1b[0m\x1b[0m"]
    );
}

#[test]
fn test_unknown_style_is_identity() {
    let markup = wrap_with_styles(&["sparkly"], "x");
    assert_eq!(render_to_terminal(&[markup.as_str()]), vec!["x"]);
    assert_eq!(render_to_console(&[markup.as_str()]), vec!["%cx", ""]);
}

#[test]
fn test_auto_mode_with_injected_detector() {
    let markup = wrap_with_styles(&["green"], "ok");
    let config = RenderConfig::new().mode(RenderMode::Auto);

    let console = Renderer::new(config.clone().detector(|| Runtime::HostConsole));
    assert_eq!(
        console.render(&[markup.as_str()]).into_parts(),
        vec!["%cok", "color: green;"]
    );

    let terminal = Renderer::new(config.detector(|| Runtime::Terminal));
    assert_eq!(
        terminal.render(&[markup.as_str()]).into_parts(),
        vec!["\x1b[32mok\x1b[0m"]
    );
}

#[test]
fn test_joined_terminal_output() {
    let renderer = Renderer::new(RenderConfig::new().mode(RenderMode::Terminal).join(true));
    assert_eq!(
        renderer.render(&["a", "b"]),
        RenderOutput::Joined("a,b".to_string())
    );
}

#[test]
fn test_vocabulary_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "warning:\n  fg: yellow\n  bold: true").unwrap();

    let custom = StyleVocabulary::from_file(file.path()).unwrap();
    let vocabulary = StyleVocabulary::default().merge(custom);
    let renderer = Renderer::new(
        RenderConfig::new()
            .mode(RenderMode::Console)
            .vocabulary(vocabulary),
    );

    let markup = wrap_with_styles(&["warning"], "careful");
    assert_eq!(
        renderer.render(&[markup.as_str()]).into_parts(),
        vec!["%ccareful", "color: yellow; font-weight: bold;"]
    );
}

#[test]
fn test_vocabulary_file_errors() {
    let missing = StyleVocabulary::from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(matches!(missing, VocabularyError::Io { .. }));

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "warning: [unclosed").unwrap();
    let err = StyleVocabulary::from_file(file.path()).unwrap_err();
    match err {
        VocabularyError::Parse { path, .. } => assert_eq!(path.as_deref(), Some(file.path())),
        other => panic!("expected parse error, got {:?}", other),
    }
}
