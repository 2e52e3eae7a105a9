use lumen_core::{Color, ColorSpace, EditorConfig, RgbaLinear};
use lumen_editor::{Channel, ColorEditor, EditorError};

const EPSILON: f64 = 1e-6;

fn assert_channels_close(actual: Color, expected: Color) {
    assert_eq!(actual.space(), expected.space(), "{actual:?}");
    for (a, e) in actual.channels().into_iter().zip(expected.channels()) {
        assert!((a - e).abs() < EPSILON, "{actual:?} vs {expected:?}");
    }
}

fn session(component: Color) -> ColorEditor<&'static str> {
    ColorEditor::new(EditorConfig::default(), "light.1", component)
}

#[test]
fn test_dragging_a_channel_past_one_keeps_intensity() {
    let mut editor = session(Color::rgba_linear(4.0, 2.0, 1.0, 1.0));
    assert_eq!(editor.intensity(), 2.0);

    let saved = editor.set_channel(Channel::Green, 1.5).unwrap();
    assert_eq!(saved, Color::rgba_linear(4.0, 6.0, 1.0, 1.0));

    // Echo from the remote: a fresh extraction would give log2(6).
    editor.sync("light.1", saved);
    assert_eq!(editor.intensity(), 2.0);
    assert_eq!(editor.value(), Color::rgba_linear(1.0, 1.5, 0.25, 1.0));
}

#[test]
fn test_explicit_recalculate_rederives_intensity() {
    let mut editor = session(Color::rgba_linear(4.0, 2.0, 1.0, 1.0));
    let saved = editor.set_channel(Channel::Green, 1.5).unwrap();
    editor.sync("light.1", saved);

    let hdr = editor.recalculate_intensity().unwrap();
    assert!((hdr.intensity - 6.0_f64.log2()).abs() < EPSILON);
    assert_eq!(hdr.base.green, 1.0);
    assert_eq!(editor.intensity(), hdr.intensity);

    // Base now touches 1.0, nothing left to recalculate.
    assert!(!editor.can_recalculate());
}

#[test]
fn test_can_recalculate_when_base_is_below_one() {
    let mut editor = session(Color::rgba_linear(0.5, 0.25, 0.0, 1.0));
    assert!(editor.can_recalculate());

    // Held at intensity 0, so the over-unit echo shows as is.
    editor.sync("light.1", Color::rgba_linear(3.0, 0.25, 0.0, 1.0));
    assert_eq!(editor.intensity(), 0.0);
    assert_eq!(editor.value(), Color::rgba_linear(3.0, 0.25, 0.0, 1.0));
    assert!(editor.can_recalculate());

    let hdr = editor.recalculate_intensity().unwrap();
    assert!((hdr.intensity - 3.0_f64.log2()).abs() < EPSILON);
    assert!(!editor.can_recalculate());
}

#[test]
fn test_selection_change_extracts_again() {
    let mut editor = session(Color::rgba_linear(4.0, 2.0, 1.0, 1.0));
    editor.sync("light.2", Color::rgba_linear(8.0, 0.0, 0.0, 1.0));
    assert_eq!(*editor.selection(), "light.2");
    assert_eq!(editor.intensity(), 3.0);
    assert_eq!(editor.value(), Color::rgba_linear(1.0, 0.0, 0.0, 1.0));
}

#[test]
fn test_swatch_moves_intensity_and_survives_echo() {
    let mut editor = session(Color::rgba_linear(2.0, 1.0, 0.0, 1.0));
    assert_eq!(editor.intensity(), 1.0);

    let saved = editor.apply_swatch(1.0).unwrap();
    assert_eq!(saved, Color::rgba_linear(4.0, 2.0, 0.0, 1.0));

    editor.sync("light.1", saved);
    assert_eq!(editor.intensity(), 2.0);
    assert_eq!(editor.value(), Color::rgba_linear(1.0, 0.5, 0.0, 1.0));

    let swatches = editor.swatches();
    assert_eq!(swatches.len(), 5);
    assert_eq!(swatches[2].intensity, 2.0);
    assert_eq!(swatches[2].color, RgbaLinear::new(4.0, 2.0, 0.0, 1.0));
    assert_eq!(swatches[0].color, RgbaLinear::new(1.0, 0.5, 0.0, 1.0));
}

#[test]
fn test_swatch_on_non_linear_value_is_rejected() {
    let mut editor = session(Color::lcha(0.5, 0.2, 40.0, 1.0));
    assert!(matches!(
        editor.apply_swatch(1.0),
        Err(EditorError::NotLinear(ColorSpace::Lcha))
    ));
}

#[test]
fn test_space_switch_converts_component() {
    let mut editor = session(Color::rgba(1.0, 0.0, 0.0, 1.0));
    let hsla = editor.set_color_space(ColorSpace::Hsla);
    assert_channels_close(hsla, Color::hsla(0.0, 1.0, 0.5, 1.0));

    editor.sync("light.1", hsla);
    assert_eq!(editor.space(), ColorSpace::Hsla);
    assert_eq!(editor.intensity(), 0.0);

    let linear = editor.set_color_space(ColorSpace::RgbaLinear);
    assert_channels_close(linear, Color::rgba_linear(1.0, 0.0, 0.0, 1.0));
}

#[test]
fn test_space_switch_from_hdr_keeps_full_value() {
    let editor = session(Color::rgba_linear(4.0, 2.0, 0.0, 0.5));
    let rgba = editor.set_color_space(ColorSpace::Rgba).to_rgba();
    assert!(rgba.red > 1.0, "HDR red should stay over-unit: {rgba:?}");
    assert_eq!(rgba.alpha, 0.5);
}

#[test]
fn test_wheel_pick_reinjects_positive_intensity() {
    let mut editor = session(Color::rgba_linear(4.0, 2.0, 0.0, 1.0));
    let saved = editor.apply_wheel(Color::rgba_linear(0.0, 0.0, 1.0, 1.0));
    assert_eq!(saved, Color::rgba_linear(0.0, 0.0, 4.0, 1.0));
    assert_eq!(editor.value(), Color::rgba_linear(0.0, 0.0, 1.0, 1.0));
}

#[test]
fn test_wheel_pick_converts_into_component_space() {
    let mut editor = session(Color::hsla(200.0, 0.5, 0.5, 1.0));
    let saved = editor.apply_wheel(Color::rgba(1.0, 0.0, 0.0, 1.0));
    assert_channels_close(saved, Color::hsla(0.0, 1.0, 0.5, 1.0));
}

#[test]
fn test_channel_edit_rejects_foreign_channel() {
    let mut editor = session(Color::hsla(200.0, 0.5, 0.5, 1.0));
    let err = editor.set_channel(Channel::Red, 0.5).unwrap_err();
    assert!(matches!(
        err,
        EditorError::ChannelNotInSpace {
            channel: Channel::Red,
            space: ColorSpace::Hsla
        }
    ));
    assert_eq!(editor.value(), Color::hsla(200.0, 0.5, 0.5, 1.0));
}

#[test]
fn test_unchanged_at_configured_precision() {
    let editor = session(Color::rgba(0.5, 0.25, 0.125, 1.0));
    assert!(editor.is_unchanged(&Color::rgba(0.5001, 0.25, 0.125, 1.0)));
    assert!(!editor.is_unchanged(&Color::rgba(0.502, 0.25, 0.125, 1.0)));
    let relabeled = Color::rgba_linear(0.5, 0.25, 0.125, 1.0);
    assert!(!editor.is_unchanged(&relabeled));

    let coarse = EditorConfig::from_json_str(r#"{"precision_denominator": 10}"#).unwrap();
    let editor = ColorEditor::new(coarse, "light.1", Color::rgba(0.5, 0.25, 0.125, 1.0));
    assert!(editor.is_unchanged(&Color::rgba(0.52, 0.25, 0.125, 1.0)));
}
