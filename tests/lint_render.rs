//! Lint: `[X]` key hints in the renderer must be clickable.
//!
//! A hint such as `[S] Share` pushed with `cl.push(...)` is drawn but never
//! registered as a click target, so it does nothing on touch screens. Hints
//! belong in `push_clickable(...)` lines.

use std::fs;
use std::path::Path;

/// True for `[X]` where X is a single key-like character.
fn has_key_hint(line: &str) -> bool {
    line.as_bytes()
        .windows(3)
        .any(|w| w[0] == b'[' && w[2] == b']' && (w[1].is_ascii_alphanumeric() || w[1] == b' '))
}

/// `(line_number, line)` for every plain `.push(` carrying a key hint.
fn unclickable_hints(source: &str) -> Vec<(usize, String)> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .filter(|(_, line)| has_key_hint(line))
        .filter(|(_, line)| line.contains(".push(") && !line.contains("push_clickable("))
        .map(|(i, line)| (i + 1, line.trim().to_string()))
        .collect()
}

#[test]
fn renderer_key_hints_are_clickable() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/dessert/render.rs");
    let source = fs::read_to_string(&path).expect("render.rs readable");
    assert!(
        source.lines().any(has_key_hint),
        "no [X] key hints found in {}; the lint has nothing to check",
        path.display()
    );
    let violations = unclickable_hints(&source);
    assert!(
        violations.is_empty(),
        "key hints in non-clickable push() calls in {}:\n{}",
        path.display(),
        violations
            .iter()
            .map(|(n, l)| format!("  {n}: {l}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

#[test]
fn flags_plain_push_with_hint() {
    let source = r#"cl.push(Line::from(" [S] Share"));"#;
    assert_eq!(unclickable_hints(source).len(), 1);
}

#[test]
fn flags_plain_push_of_action_line() {
    let source = r#"cl.push(action_line("[S]", "Share sales"));"#;
    assert_eq!(unclickable_hints(source).len(), 1);
}

#[test]
fn allows_push_clickable_with_hint() {
    let source = r#"cl.push_clickable(Line::from(" [S] Share"), DessertAction::Share);"#;
    assert!(unclickable_hints(source).is_empty());
}

#[test]
fn ignores_commented_lines() {
    let source = r#"// cl.push(Line::from(" [C] Sell"));"#;
    assert!(unclickable_hints(source).is_empty());
}

#[test]
fn key_hint_detection() {
    assert!(has_key_hint("[C]"));
    assert!(has_key_hint("x [1] y"));
    assert!(!has_key_hint("[]"));
    assert!(!has_key_hint("[CC]"));
    assert!(!has_key_hint("[{}]"));
}
