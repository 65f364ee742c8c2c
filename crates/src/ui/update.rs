use crate::candidate::Candidate;
use crate::selection::{with_added, without_index};
use crate::ui::Msg;
use crate::ui::model::TagsSelect;

/// Apply one event to the widget against the caller's selection snapshot.
///
/// Returns `Some(list)` exactly when the selection changed; `list` is a new
/// vector and `selection` is left untouched.
pub fn handle_update(w: &mut TagsSelect, selection: &[Candidate], msg: Msg) -> Option<Vec<Candidate>> {
    let was_open = w.open;
    let out = match msg {
        Msg::Rune(r) => {
            handle_text_entry(w, &r.to_string());
            None
        }
        Msg::Paste(s) => {
            handle_text_entry(w, &s);
            None
        }
        Msg::KeyBackspace => handle_key_backspace(w, selection),
        Msg::KeyEsc => {
            w.open = false;
            None
        }
        Msg::KeyDown => {
            handle_key_down(w);
            None
        }
        Msg::KeyUp => {
            handle_key_up(w);
            None
        }
        Msg::KeyEnter => handle_key_enter(w, selection),
        Msg::FocusGained => {
            w.focused = true;
            w.open = true;
            None
        }
        Msg::OutsideInteraction => {
            w.focused = false;
            w.open = false;
            None
        }
        Msg::TogglePressed => {
            w.open = !w.open;
            None
        }
        Msg::Activate(c) => handle_activate(w, selection, &c),
        Msg::RemoveAt(i) => Some(handle_remove_at(w, selection, i)),
        // layout belongs to the host
        Msg::WindowSize { .. } => None,
    };
    if was_open != w.open {
        log::debug!("panel {}", if w.open { "opened" } else { "closed" });
    }
    out
}

fn handle_text_entry(w: &mut TagsSelect, text: &str) {
    let mut next = w.input.clone();
    next.push_str(text);
    if !next.is_empty() {
        w.open = true;
    }
    w.set_input(next);
}

fn handle_key_backspace(w: &mut TagsSelect, selection: &[Candidate]) -> Option<Vec<Candidate>> {
    if !w.input.is_empty() {
        let mut next = w.input.clone();
        next.pop();
        w.set_input(next);
        return None;
    }
    if selection.is_empty() {
        return None;
    }
    Some(handle_remove_at(w, selection, selection.len() - 1))
}

fn handle_key_down(w: &mut TagsSelect) {
    if !w.open {
        w.open = true;
        return;
    }
    if let Some(h) = w.highlight() {
        if h + 1 < w.filtered().len() {
            w.highlight = h + 1;
        } else {
            w.highlight = h;
        }
    }
}

fn handle_key_up(w: &mut TagsSelect) {
    if !w.open {
        return;
    }
    if let Some(h) = w.highlight() {
        w.highlight = h.saturating_sub(1);
    }
}

fn handle_key_enter(w: &mut TagsSelect, selection: &[Candidate]) -> Option<Vec<Candidate>> {
    if !w.open {
        return None;
    }
    let target = {
        let h = w.highlight()?;
        w.filtered().get(h).map(|c| (*c).clone())
    }?;
    handle_activate(w, selection, &target)
}

fn handle_activate(w: &mut TagsSelect, selection: &[Candidate], item: &Candidate) -> Option<Vec<Candidate>> {
    w.focused = true;
    let next = with_added(selection, item)?;
    w.set_input(String::new());
    Some(next)
}

fn handle_remove_at(w: &mut TagsSelect, selection: &[Candidate], index: usize) -> Vec<Candidate> {
    let next = without_index(selection, index);
    w.focused = true;
    next
}
