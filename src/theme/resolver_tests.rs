//! Unit tests for theme resolution.

use ratatui::style::Color;

use super::{apply_theme, resolve, Fallback, Surface, SurfaceStyles, BINDINGS};
use crate::theme::store::{Theme, ThemeStore};

fn theme_of(pairs: &[(&str, &str)]) -> Theme {
    Theme::from_pairs("test", "nord", pairs)
}

// ===== resolve =====

#[test]
fn resolve_parses_present_key() {
    let theme = theme_of(&[("editor.background", "#112233")]);
    assert_eq!(
        resolve(&theme, "editor.background"),
        Some(Color::Rgb(0x11, 0x22, 0x33))
    );
}

#[test]
fn resolve_treats_absent_key_as_none() {
    let theme = theme_of(&[]);
    assert_eq!(resolve(&theme, "editor.background"), None);
}

#[test]
fn resolve_coerces_malformed_value_to_none() {
    let theme = theme_of(&[("editor.background", "not-a-color")]);
    assert_eq!(resolve(&theme, "editor.background"), None);
}

// ===== apply_theme =====

#[test]
fn missing_status_bar_background_uses_fixed_fallback() {
    // statusBar.background absent, statusBar.foreground present: the
    // fallback covers the one and theme data still styles the other in
    // the same pass.
    let theme = theme_of(&[
        ("editor.background", "#101010"),
        ("editor.foreground", "#f0f0f0"),
        ("statusBar.foreground", "#abcdef"),
    ]);
    let styles = apply_theme(&theme);
    assert_eq!(
        styles.get(Surface::StatusBarBackground),
        Color::Rgb(0x00, 0x7a, 0xcc)
    );
    assert_eq!(
        styles.get(Surface::StatusBarForeground),
        Color::Rgb(0xab, 0xcd, 0xef)
    );
}

#[test]
fn window_surfaces_copy_from_editor_when_absent() {
    let theme = theme_of(&[
        ("editor.background", "#223344"),
        ("editor.foreground", "#ddeeff"),
    ]);
    let styles = apply_theme(&theme);
    assert_eq!(styles.get(Surface::WindowBackground), Color::Rgb(0x22, 0x33, 0x44));
    assert_eq!(styles.get(Surface::WindowForeground), Color::Rgb(0xdd, 0xee, 0xff));
}

#[test]
fn window_key_beats_copy_fallback_when_present() {
    let theme = theme_of(&[
        ("editor.background", "#223344"),
        ("window.background", "#000000"),
    ]);
    let styles = apply_theme(&theme);
    assert_eq!(styles.get(Surface::WindowBackground), Color::Rgb(0, 0, 0));
}

#[test]
fn empty_theme_styles_every_surface() {
    let styles = apply_theme(&theme_of(&[]));
    for surface in Surface::ALL {
        // Fallback chain bottoms out at fixed defaults; nothing is left
        // as the uninitialized sentinel.
        assert_ne!(styles.get(surface), Color::Reset, "{surface:?} unstyled");
    }
}

#[test]
fn malformed_value_falls_back_like_absence() {
    let theme = theme_of(&[("statusBar.background", "#nope")]);
    let styles = apply_theme(&theme);
    assert_eq!(
        styles.get(Surface::StatusBarBackground),
        Color::Rgb(0x00, 0x7a, 0xcc)
    );
}

#[test]
fn reapplying_same_theme_is_value_identical() {
    let store = ThemeStore::builtin();
    let theme = store.active();
    let first = apply_theme(theme);
    let second = apply_theme(theme);
    assert_eq!(first, second);
}

#[test]
fn copy_from_only_references_earlier_surfaces() {
    for (index, binding) in BINDINGS.iter().enumerate() {
        if let Fallback::CopyFrom(source) = binding.fallback {
            let source_index = BINDINGS
                .iter()
                .position(|b| b.surface == source)
                .expect("copy source must be bound");
            assert!(
                source_index < index,
                "{:?} copies from {:?} which resolves later",
                binding.surface,
                source
            );
        }
    }
}

#[test]
fn plain_styles_carry_no_colors() {
    let styles = SurfaceStyles::plain();
    for surface in Surface::ALL {
        assert_eq!(styles.get(surface), Color::Reset);
    }
}

#[test]
fn builtin_themes_resolve_without_warnings() {
    // Every raw color string shipped in a built-in theme must parse.
    let store = ThemeStore::builtin();
    for name in store.names() {
        let theme = store.get(name).expect("named theme exists");
        for binding in &BINDINGS {
            if theme.raw(binding.key).is_some() {
                assert!(
                    resolve(theme, binding.key).is_some(),
                    "{name}: {} does not parse",
                    binding.key
                );
            }
        }
    }
}
