//! Rendering contract: everything a surface needs to draw the widget, derived
//! from the widget state and the caller's selection on demand.

use crate::candidate::Candidate;
use crate::filter::contains_name;
use crate::ui::model::TagsSelect;

/// One candidate row in the open panel.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelRow {
    pub candidate: Candidate,
    pub already_selected: bool,
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub label: String,
    pub selection: Vec<Candidate>,
    pub input: String,
    /// Set only while nothing is selected and a placeholder was given.
    pub placeholder: Option<String>,
    pub focused: bool,
    pub open: bool,
    pub rows: Vec<PanelRow>,
    pub highlight: Option<usize>,
    pub help_text: Option<String>,
}

pub fn build_view(w: &TagsSelect, selection: &[Candidate]) -> View {
    let highlight = w.highlight();
    let rows = w
        .filtered()
        .into_iter()
        .enumerate()
        .map(|(i, c)| PanelRow {
            candidate: c.clone(),
            already_selected: contains_name(selection, &c.name),
            highlighted: highlight == Some(i),
        })
        .collect();
    let placeholder = if selection.is_empty() && !w.placeholder.is_empty() {
        Some(w.placeholder.clone())
    } else {
        None
    };
    View {
        label: w.label.clone(),
        selection: selection.to_vec(),
        input: w.input.clone(),
        placeholder,
        focused: w.focused,
        open: w.open,
        rows,
        highlight,
        help_text: w.help_text.clone(),
    }
}
