use iced::widget::{Svg, svg};
use include_dir::{Dir, include_dir};
use tracing::warn;

static ICONS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets/icons");

/// Load one of the bundled SVG icons by file stem, e.g. `icon("trash")`.
pub fn icon(name: &str) -> Svg<'static> {
    let path = format!("{name}.svg");
    let contents: &[u8] = match ICONS.get_file(&path) {
        Some(file) => file.contents(),
        None => {
            warn!("Missing icon: {path}");
            &[]
        }
    };

    svg(svg::Handle::from_memory(contents)).width(20).height(20)
}

#[cfg(test)]
mod test {
    use super::ICONS;

    #[test]
    fn test_icons_bundled() {
        for name in ["grip", "trash"] {
            assert!(ICONS.get_file(format!("{name}.svg")).is_some());
        }
    }
}
