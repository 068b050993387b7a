//! Snapshot coverage for generated text: compiled CSS and the serialized
//! palette.
//!
//! Class names are fixed so the snapshots pin the emission format itself:
//! rule shape, declaration order, selector rewriting, and media wrapping.

use insta::assert_snapshot;
use stylebound::{compile, media, ClassName, StyleMap, ThemeTokens};

#[test]
fn test_base_and_pseudo_rules() {
    let class = ClassName::new("sc-card");
    let style = StyleMap::new()
        .set("color", "red")
        .set("fontSize", "12px")
        .set("&:hover", StyleMap::new().set("color", "blue"));

    assert_snapshot!(
        compile(&class, &style),
        @".sc-card { color: red; font-size: 12px; } .sc-card:hover { color: blue; }"
    );
}

#[test]
fn test_media_wrapped_rules() {
    let class = ClassName::new("sc-nav");
    let style = StyleMap::new()
        .set("display", "flex")
        .merge(media::tablet(StyleMap::new().set("display", "none")));

    assert_snapshot!(
        compile(&class, &style),
        @".sc-nav { display: flex; } @media (max-width: 768px) { .sc-nav { display: none; } }"
    );
}

#[test]
fn test_full_component_style() {
    let class = ClassName::new("sc-panel");
    let style = StyleMap::new()
        .set("background", "#121212")
        .set("borderRadius", "8px")
        .set("padding", "16px 24px")
        .set(
            "&:hover",
            StyleMap::new()
                .set("background", "#1f1f1f")
                .set("cursor", "pointer"),
        )
        .set("::before", StyleMap::new().set("content", "''"))
        .set("& > h2", StyleMap::new().set("marginTop", 0))
        .merge(media::mobile(StyleMap::new().set("padding", "8px")));

    assert_snapshot!(
        compile(&class, &style),
        @".sc-panel { background: #121212; border-radius: 8px; padding: 16px 24px; } .sc-panel:hover { background: #1f1f1f; cursor: pointer; } .sc-panel::before { content: ''; } .sc-panel > h2 { margin-top: 0; } @media (max-width: 480px) { .sc-panel { padding: 8px; } }"
    );
}

#[test]
fn test_empty_and_selector_only_styles() {
    let class = ClassName::new("sc-ghost");

    assert_snapshot!(compile(&class, &StyleMap::new()), @".sc-ghost { }");

    let style = StyleMap::new().set(
        ":focus",
        StyleMap::new().set("outline", "2px solid #818CF8"),
    );
    assert_snapshot!(
        compile(&class, &style),
        @".sc-ghost { } .sc-ghost:focus { outline: 2px solid #818CF8; }"
    );
}

#[test]
fn test_dark_palette_yaml() {
    let yaml = serde_yaml::to_string(&ThemeTokens::dark()).unwrap();
    assert_snapshot!(yaml, @r"
    primary_color: '#818CF8'
    background: '#000000'
    background1: '#0a0a0a'
    background2: '#121212'
    background3: '#171717'
    background4: '#1f1f1f'
    midground: '#262626'
    midground1: '#2e2e2e'
    midground2: '#363636'
    midground3: '#404040'
    midground4: '#525252'
    foreground_color: '#0a0a0a'
    text_color: '#fafafa'
    text_alt_color: '#d4d4d4'
    border_color: '#262626'
    ");
}

#[test]
fn test_tokens_flow_into_declarations() {
    let theme = ThemeTokens::dark();
    let class = ClassName::new("sc-chip");
    let style = StyleMap::new()
        .set("background", theme.background1.as_str())
        .set("color", theme.text_color.as_str())
        .set("border", format!("1px solid {}", theme.border_color));

    assert_snapshot!(
        compile(&class, &style),
        @".sc-chip { background: #0a0a0a; color: #fafafa; border: 1px solid #262626; }"
    );
}
