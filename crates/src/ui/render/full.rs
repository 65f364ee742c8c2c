use crate::ui::Msg;
use crate::ui::model::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MODELINE_LINES, Model};
use crate::ui::render::util::normalize_and_pad;
use crate::ui::render::{
    field_spans, panel_row_at, render_field, render_help, render_label, render_panel, toggle_column,
};

fn dims(m: &Model) -> (usize, usize) {
    let w = if m.screen_width > 0 { m.screen_width } else { DEFAULT_WIDTH };
    let h = if m.screen_height > 0 { m.screen_height } else { DEFAULT_HEIGHT };
    (w, h)
}

/// Lines left for the panel once label, field, help and modeline are placed.
pub fn panel_budget(m: &Model) -> usize {
    let (w, h) = dims(m);
    let v = m.view();
    let fixed = render_label(&v, w).map_or(0, |_| 1)
        + render_field(&v, w).len()
        + render_help(&v, w).map_or(0, |_| 1)
        + MODELINE_LINES;
    h.saturating_sub(fixed)
}

pub fn render_full(m: &Model) -> String {
    let (w, h) = dims(m);
    let v = m.view();
    let mut lines: Vec<String> = vec![];
    if let Some(l) = render_label(&v, w) {
        lines.push(l);
    }
    lines.extend(render_field(&v, w));
    lines.extend(render_panel(&v, w, panel_budget(m)));
    if let Some(help) = render_help(&v, w) {
        lines.push(help);
    }
    let body = normalize_and_pad(lines, w, h.saturating_sub(MODELINE_LINES));
    let modeline = crate::ui::render::modeline::render_modeline_padded(m);
    let first_line = modeline.lines().next().unwrap_or("").to_string();
    if body.is_empty() {
        return first_line;
    }
    format!("{body}\n{first_line}")
}

/// Map a click at column `x`, screen line `y` onto the widget event it means,
/// using the same layout `render_full` draws.
///
/// Label and field lines focus the field, except for a chip's ` × ` (remove
/// that chip) and the toggle glyph. Panel rows activate their candidate and
/// the panel hint line does nothing. Anywhere else is outside the widget.
pub fn hit_test(m: &Model, x: usize, y: usize) -> Option<Msg> {
    let (w, _) = dims(m);
    let v = m.view();
    let mut top = 0;
    if render_label(&v, w).is_some() {
        if y == 0 {
            return Some(Msg::FocusGained);
        }
        top = 1;
    }

    let field_lines = render_field(&v, w).len();
    if y < top + field_lines {
        let line = y - top;
        if line == 0 && x == toggle_column(w) {
            return Some(Msg::TogglePressed);
        }
        let removed = field_spans(&v, w).into_iter().find_map(|s| {
            let end = s.col + s.len;
            match s.chip {
                Some(i) if s.removable && s.line == line && x >= end.saturating_sub(3) && x < end => {
                    Some(i)
                }
                _ => None,
            }
        });
        return Some(removed.map_or(Msg::FocusGained, Msg::RemoveAt));
    }
    top += field_lines;

    let budget = panel_budget(m);
    let panel_lines = render_panel(&v, w, budget).len();
    if y < top + panel_lines {
        return panel_row_at(&v, budget, y - top).map(|row| Msg::Activate(row.candidate.clone()));
    }
    Some(Msg::OutsideInteraction)
}
