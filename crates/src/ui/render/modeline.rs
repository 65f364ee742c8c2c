use crate::ui::model::{DEFAULT_WIDTH, Model};
use crate::ui::render::styles::STYLE_MODELINE;
use lipgloss::Color;

// key/description pairs, dropped from the right when space runs out
const PAIRS: [(&str, &str); 5] = [
    ("⏎", "add"),
    ("⌫", "remove"),
    ("⎋", "close"),
    ("^T", "list"),
    ("⇥", "leave"),
];

/// Key hints on the left, selection count (and panel page) on the right,
/// fitted into `inner_max` plain characters.
pub fn render_modeline(inner_max: usize, selected: usize, page: Option<(usize, usize)>) -> String {
    let inner_style = STYLE_MODELINE.clone().padding(0, 0, 0, 0);
    let key_style = STYLE_MODELINE
        .clone()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
        .padding(0, 0, 0, 0);
    let right_style = STYLE_MODELINE.clone().faint(true).padding(0, 0, 0, 0);

    let mut right_plain = format!("{selected} selected");
    if let Some((p, total)) = page {
        if total > 1 {
            right_plain = format!("{right_plain} · {}/{}", p + 1, total);
        }
    }
    if right_plain.chars().count() > inner_max {
        right_plain.clear();
    }
    let right_w = right_plain.chars().count();

    let pair_w = |(k, d): &(&str, &str)| k.chars().count() + 1 + d.chars().count();
    let mut count = PAIRS.len();
    let left_w = |n: usize| -> usize {
        let sum: usize = PAIRS.iter().take(n).map(pair_w).sum();
        sum + 2 * n.saturating_sub(1)
    };
    while count > 0 && left_w(count) + 1 + right_w > inner_max {
        count -= 1;
    }
    let left = PAIRS
        .iter()
        .take(count)
        .map(|(k, d)| format!("{}{}", key_style.render(k), inner_style.render(&format!(" {d}"))))
        .collect::<Vec<_>>()
        .join(inner_style.render("  ").as_str());

    let used = if count > 0 { left_w(count) } else { 0 };
    let pad = inner_max.saturating_sub(used + right_w);
    let filler = inner_style.render(&" ".repeat(pad));
    format!("{left}{filler}{}", right_style.render(&right_plain))
}

pub fn render_modeline_padded(m: &Model) -> String {
    let total_width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };
    let inner_max = total_width.saturating_sub(2);
    let page = if m.widget.is_open() {
        let v = m.view();
        let per = crate::ui::render::full::panel_budget(m).saturating_sub(1);
        Some(crate::ui::render::panel_page(&v, per))
    } else {
        None
    };
    let modeline = render_modeline(inner_max, m.selection.len(), page);
    STYLE_MODELINE
        .clone()
        .width(total_width as i32)
        .render(&modeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Candidate;
    use regex::Regex;

    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    #[test]
    fn modeline_fits_width_and_counts_selection() {
        for w in [80usize, 40, 20] {
            let mut m = crate::ui::initial_model(vec![Candidate::new("a")], vec![Candidate::new("a")]);
            m.update(crate::ui::Msg::WindowSize { width: w, height: 10 });
            let plain = strip_ansi(&render_modeline_padded(&m));
            let first = plain.lines().next().unwrap_or("");
            assert_eq!(first.chars().count(), w, "width {w}: `{first}`");
            assert!(first.contains("1 selected"));
        }
    }

    #[test]
    fn modeline_drops_hints_before_count() {
        let plain = strip_ansi(&render_modeline(14, 3, None));
        assert!(plain.ends_with("3 selected"));
        assert!(!plain.contains("remove"));
        let wide = strip_ansi(&render_modeline(78, 3, None));
        assert!(wide.contains("⏎ add"));
        assert!(wide.contains("⇥ leave"));
    }

    #[test]
    fn modeline_shows_panel_page_when_paging() {
        let plain = strip_ansi(&render_modeline(78, 0, Some((1, 3))));
        assert!(plain.contains("0 selected · 2/3"));
        let single = strip_ansi(&render_modeline(78, 0, Some((0, 1))));
        assert!(!single.contains('·'));
    }
}
