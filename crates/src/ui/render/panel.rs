use crate::ui::render::styles::{
    STYLE_EMPTY, STYLE_HINT, STYLE_ROW, STYLE_ROW_HIGHLIGHT, STYLE_ROW_SELECTED,
};
use crate::ui::render::util::fit;
use crate::ui::view::{PanelRow, View};

pub const PANEL_HINT: &str = "Select an item to add.";
pub const PANEL_EMPTY: &str = "No matches";

/// Current page and page count when `per` candidate rows fit on screen.
pub fn panel_page(v: &View, per: usize) -> (usize, usize) {
    if per == 0 || v.rows.is_empty() {
        return (0, 1);
    }
    let total = v.rows.len().div_ceil(per);
    let page = v.highlight.unwrap_or(0) / per;
    (page.min(total - 1), total)
}

fn render_row(row: &PanelRow, width: usize) -> String {
    let marker = if row.highlighted { "› " } else { "  " };
    let suffix = if row.already_selected { " ✓" } else { "" };
    let room = width.saturating_sub(marker.chars().count() + suffix.chars().count());
    let plain = format!("{marker}{}{suffix}", fit(&row.candidate.name, room));
    if row.highlighted {
        STYLE_ROW_HIGHLIGHT.render(&plain)
    } else if row.already_selected {
        STYLE_ROW_SELECTED.render(&plain)
    } else {
        STYLE_ROW.render(&plain)
    }
}

/// Panel lines, at most `max_lines`; empty when the panel is closed.
pub fn render_panel(v: &View, width: usize, max_lines: usize) -> Vec<String> {
    if !v.open || max_lines == 0 {
        return vec![];
    }
    if v.rows.is_empty() {
        return vec![STYLE_EMPTY.render(&fit(PANEL_EMPTY, width))];
    }
    let mut out = vec![STYLE_HINT.render(&fit(PANEL_HINT, width))];
    let per = max_lines - 1;
    if per == 0 {
        return out;
    }
    let (page, _) = panel_page(v, per);
    out.extend(
        v.rows
            .iter()
            .skip(page * per)
            .take(per)
            .map(|r| render_row(r, width)),
    );
    out
}

/// The candidate row drawn on panel line `line` (0 is the hint line) by
/// `render_panel(v, _, max_lines)`.
pub fn panel_row_at(v: &View, max_lines: usize, line: usize) -> Option<&PanelRow> {
    if !v.open || v.rows.is_empty() || line == 0 || line >= max_lines {
        return None;
    }
    let per = max_lines - 1;
    let (page, _) = panel_page(v, per);
    v.rows.get(page * per + line - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Candidate;
    use crate::ui::model::TagsSelect;
    use crate::ui::view::build_view;
    use crate::ui::{Msg, handle_update};
    use regex::Regex;

    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    fn widget(n: usize) -> TagsSelect {
        TagsSelect::new((1..=n).map(|i| Candidate::new(format!("item{i}"))).collect())
    }

    #[test]
    fn closed_panel_renders_nothing() {
        let w = widget(3);
        assert!(render_panel(&build_view(&w, &[]), 40, 10).is_empty());
    }

    #[test]
    fn open_panel_lists_rows_and_marks_selected() {
        let mut w = widget(3);
        handle_update(&mut w, &[], Msg::TogglePressed);
        let sel = vec![Candidate::new("item2")];
        let lines: Vec<String> = render_panel(&build_view(&w, &sel), 40, 10)
            .iter()
            .map(|l| strip_ansi(l))
            .collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], PANEL_HINT);
        assert_eq!(lines[1], "› item1");
        assert_eq!(lines[2], "  item2 ✓");
        assert_eq!(lines[3], "  item3");
    }

    #[test]
    fn no_match_row() {
        let mut w = widget(3);
        handle_update(&mut w, &[], Msg::Paste("nothing".to_string()));
        let lines = render_panel(&build_view(&w, &[]), 40, 10);
        assert_eq!(lines.len(), 1);
        assert_eq!(strip_ansi(&lines[0]), PANEL_EMPTY);
    }

    #[test]
    fn panel_pages_follow_highlight() {
        let mut w = widget(10);
        handle_update(&mut w, &[], Msg::KeyDown);
        for _ in 0..5 {
            handle_update(&mut w, &[], Msg::KeyDown);
        }
        let v = build_view(&w, &[]);
        assert_eq!(v.highlight, Some(5));
        // 1 hint line + 4 rows per page: highlight 5 is on the second page
        assert_eq!(panel_page(&v, 4), (1, 3));
        let lines: Vec<String> = render_panel(&v, 40, 5).iter().map(|l| strip_ansi(l)).collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "  item5");
        assert_eq!(lines[2], "› item6");
    }

    #[test]
    fn row_lookup_matches_rendered_lines() {
        let mut w = widget(10);
        for _ in 0..6 {
            handle_update(&mut w, &[], Msg::KeyDown);
        }
        let v = build_view(&w, &[]);
        let lines: Vec<String> = render_panel(&v, 40, 5).iter().map(|l| strip_ansi(l)).collect();
        assert!(panel_row_at(&v, 5, 0).is_none());
        for (k, line) in lines.iter().enumerate().skip(1) {
            let row = panel_row_at(&v, 5, k).unwrap();
            assert!(line.ends_with(&row.candidate.name), "line {k}: `{line}`");
        }
        assert!(panel_row_at(&v, 5, 5).is_none());

        let closed = build_view(&widget(3), &[]);
        assert!(panel_row_at(&closed, 5, 1).is_none());
    }

    #[test]
    fn long_names_are_cut_to_width() {
        let mut w = TagsSelect::new(vec![Candidate::new("a-very-long-candidate-name")]);
        handle_update(&mut w, &[], Msg::TogglePressed);
        let lines = render_panel(&build_view(&w, &[]), 12, 5);
        for l in lines {
            assert!(strip_ansi(&l).chars().count() <= 12);
        }
    }
}
