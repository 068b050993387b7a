//! Themed cards rendered in both modes, with the injected stylesheet
//! printed at the end.
//!
//! Run twice and toggle: the chosen mode persists in `.cards-theme`.

use anyhow::Result;
use stylebound::prelude::*;
use stylebound::FileThemeStore;

fn card() -> StyledComponent {
    styled(
        "div",
        StyleParam::dynamic(|theme, _| {
            StyleMap::new()
                .set("background", theme.background1.as_str())
                .set("color", theme.text_color.as_str())
                .set("border", format!("1px solid {}", theme.border_color))
                .set("borderRadius", "8px")
                .set("padding", "16px")
                .set(
                    "&:hover",
                    StyleMap::new().set("background", theme.background2.as_str()),
                )
                .merge(media::mobile(StyleMap::new().set("padding", "8px")))
        }),
    )
}

fn card_title() -> StyledComponent {
    styled(
        "h2",
        StyleParam::dynamic(|theme, _| {
            StyleMap::new()
                .set("color", theme.primary_color.as_str())
                .set("fontSize", "18px")
                .set("marginTop", 0)
        }),
    )
}

/// A pill badge on a motion primitive. The `$accent` prop picks the
/// accent background and stays behind in the styling layer.
fn badge() -> StyledComponent {
    styled_motion(
        "span",
        StyleParam::dynamic(|theme, props| {
            let accent = props
                .get("$accent")
                .and_then(PropValue::as_bool)
                .unwrap_or(false);
            let background = if accent {
                theme.primary_color.as_str()
            } else {
                theme.midground.as_str()
            };
            StyleMap::new()
                .set("background", background)
                .set("color", theme.foreground_color.as_str())
                .set("borderRadius", "999px")
                .set("padding", "2px 10px")
                .set("fontSize", "12px")
        }),
    )
}

fn render_cards() -> Result<Vec<Element>> {
    let title = card_title().render(Props::new().child("Weekly report"))?;
    let status = badge().render(
        Props::new()
            .set("$accent", true)
            .on("onClick", || println!("badge clicked"))
            .child("on track"),
    )?;

    let report = card().render(
        Props::new()
            .class_name("report")
            .set("id", "report-card")
            .child(title)
            .child(status)
            .child("Three releases shipped, one rollback."),
    )?;

    let empty = card().render(Props::new().child("Nothing else this week."))?;

    Ok(vec![report, empty])
}

fn print_element(element: &Element, depth: usize) {
    let pad = "  ".repeat(depth);
    let label = element.target().label();
    println!("{}<{} class=\"{}\">", pad, label, element.class_name());
    for node in element.props().children() {
        match node {
            Node::Text(text) => println!("{}  {}", pad, text),
            Node::Element(child) => print_element(child, depth + 1),
        }
    }
    println!("{}</{}>", pad, label);
}

fn main() -> Result<()> {
    provide_themes_with_store(ThemeSet::default(), FileThemeStore::new(".cards-theme"));

    println!("mode: {}", current_mode()?.as_str());
    for element in render_cards()? {
        print_element(&element, 0);
    }

    // Same components, other palette: new classes, freshly injected rules.
    let mode = toggle_theme()?;
    println!("\ntoggled to {}:", mode.as_str());
    for element in render_cards()? {
        print_element(&element, 0);
    }

    println!(
        "\ninjected stylesheet ({} elements):",
        stylebound::style_element_count()
    );
    for style in stylebound::style_elements() {
        println!("/* {} */", style.id());
        println!("{}", style.css());
    }

    Ok(())
}
