use crate::ui::render::styles::{
    STYLE_CHIP, STYLE_HELP, STYLE_INPUT, STYLE_LABEL, STYLE_PLACEHOLDER, STYLE_TOGGLE,
};
use crate::ui::render::util::fit;
use crate::ui::view::View;
use lipgloss::Style;

const CARET: &str = "▏";
// toggle glyph plus the space before it
const TOGGLE_WIDTH: usize = 2;

pub fn render_label(v: &View, width: usize) -> Option<String> {
    if v.label.is_empty() {
        return None;
    }
    Some(STYLE_LABEL.render(&fit(&v.label.to_uppercase(), width)))
}

pub fn render_help(v: &View, width: usize) -> Option<String> {
    v.help_text
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(|t| STYLE_HELP.render(&fit(t, width)))
}

// Plain text, the style it is drawn with and, for chips, the selection index.
fn field_segments(v: &View) -> Vec<(String, &'static Style, Option<usize>)> {
    let mut segs: Vec<(String, &'static Style, Option<usize>)> = v
        .selection
        .iter()
        .enumerate()
        .map(|(i, c)| (format!(" {} × ", c.name), &*STYLE_CHIP, Some(i)))
        .collect();
    let caret = if v.focused { CARET } else { "" };
    if !v.input.is_empty() {
        segs.push((format!("{}{caret}", v.input), &*STYLE_INPUT, None));
    } else if let Some(p) = &v.placeholder {
        segs.push((format!("{caret}{p}"), &*STYLE_PLACEHOLDER, None));
    } else if v.focused {
        segs.push((CARET.to_string(), &*STYLE_INPUT, None));
    }
    segs
}

/// Where one field segment lands once wrapped: line, first column and plain
/// width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpan {
    pub line: usize,
    pub col: usize,
    pub len: usize,
    /// Selection index when the segment is a chip.
    pub chip: Option<usize>,
    /// The chip still ends in its ` × ` remove button (not cut by `fit`).
    pub removable: bool,
}

fn field_avail(width: usize) -> usize {
    width.saturating_sub(TOGGLE_WIDTH).max(1)
}

/// Column of the toggle glyph on the first field line.
pub fn toggle_column(width: usize) -> usize {
    field_avail(width) + 1
}

// Greedy wrap: segments are separated by one space and never split.
fn place_segments(v: &View, avail: usize) -> Vec<(FieldSpan, String, &'static Style)> {
    let mut out = vec![];
    let (mut line, mut cur) = (0usize, 0usize);
    for (plain, style, chip) in field_segments(v) {
        let fitted = fit(&plain, avail);
        let len = fitted.chars().count();
        if cur > 0 && cur + 1 + len > avail {
            line += 1;
            cur = 0;
        }
        if cur > 0 {
            cur += 1;
        }
        let span = FieldSpan {
            line,
            col: cur,
            len,
            chip,
            removable: chip.is_some() && fitted == plain,
        };
        out.push((span, fitted, style));
        cur += len;
    }
    out
}

/// Layout of every chip and the input segment for a field `width` wide.
pub fn field_spans(v: &View, width: usize) -> Vec<FieldSpan> {
    place_segments(v, field_avail(width))
        .into_iter()
        .map(|(span, _, _)| span)
        .collect()
}

/// Chips followed by the input, wrapped to `width`. The first line ends with
/// the toggle glyph showing whether the panel is open.
pub fn render_field(v: &View, width: usize) -> Vec<String> {
    let avail = field_avail(width);
    let placed = place_segments(v, avail);
    let count = placed.last().map_or(1, |(span, _, _)| span.line + 1);
    let mut lines: Vec<(String, usize)> = vec![(String::new(), 0); count];
    for (span, plain, style) in &placed {
        let (text, cur) = &mut lines[span.line];
        if *cur > 0 {
            text.push(' ');
            *cur += 1;
        }
        text.push_str(&style.render(plain));
        *cur += span.len;
    }

    let glyph = if v.open { "▴" } else { "▾" };
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    for (i, (text, cur)) in lines.into_iter().enumerate() {
        if i == 0 {
            let pad = " ".repeat(avail.saturating_sub(cur) + 1);
            out.push(format!("{text}{pad}{}", STYLE_TOGGLE.render(glyph)));
        } else {
            out.push(text);
        }
    }
    out
}
