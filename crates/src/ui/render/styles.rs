use lipgloss::{Color, Style};
use once_cell::sync::Lazy;

// Styles kept local to render module
pub static STYLE_LABEL: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(0, 0, 238))
        .bold(true)
});
pub static STYLE_CHIP: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(1, 5, 45))
        .foreground(Color::from_rgb(255, 255, 255))
});
pub static STYLE_INPUT: Lazy<Style> = Lazy::new(|| Style::new().bold(true));
pub static STYLE_PLACEHOLDER: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_TOGGLE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
});
pub static STYLE_HINT: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_ROW: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(200, 200, 200)));
pub static STYLE_ROW_HIGHLIGHT: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(95, 95, 95))
        .foreground(Color::from_rgb(255, 255, 255))
        .bold(true)
});
pub static STYLE_ROW_SELECTED: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_EMPTY: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_HELP: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_MODELINE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(95, 95, 95))
        .foreground(Color::from_rgb(255, 255, 255))
        .padding(0, 1, 0, 1)
});
