use crate::candidate::{Candidate, dedup_by_name};
use crate::config::Config;
use crate::filter::filter_candidates;

// small constants reused by rendering code
pub const MODELINE_LINES: usize = 1;
pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 24;

/// The tag picker.
///
/// Holds the candidate universe and display props supplied by the caller, plus
/// the widget-private state (input buffer, panel visibility, focus and the
/// keyboard highlight). The selection itself is not stored here: every event
/// is applied against the caller's snapshot via [`crate::ui::handle_update`].
#[derive(Clone, Debug, Default)]
pub struct TagsSelect {
    pub universe: Vec<Candidate>,
    pub label: String,
    pub placeholder: String,
    pub help_text: Option<String>,
    pub(crate) input: String,
    pub(crate) open: bool,
    pub(crate) focused: bool,
    pub(crate) highlight: usize,
}

impl TagsSelect {
    pub fn new(universe: Vec<Candidate>) -> Self {
        TagsSelect {
            universe: dedup_by_name(universe),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    // Recomputed on every call; nothing is cached.
    pub fn filtered(&self) -> Vec<&Candidate> {
        filter_candidates(&self.universe, &self.input)
    }

    /// Highlighted row index into `filtered()`, clamped; `None` when nothing matches.
    pub fn highlight(&self) -> Option<usize> {
        let len = self.filtered().len();
        if len == 0 {
            None
        } else {
            Some(self.highlight.min(len - 1))
        }
    }

    // The buffer only changes through here so the highlight follows it.
    pub(crate) fn set_input(&mut self, value: String) {
        if value != self.input {
            self.input = value;
            self.highlight = 0;
        }
    }
}

/// Host state for the terminal program: owns the canonical selection and
/// feeds every widget notification back into it.
#[derive(Clone, Debug, Default)]
pub struct Model {
    pub widget: TagsSelect,
    pub selection: Vec<Candidate>,
    pub screen_width: usize,
    pub screen_height: usize,
    pub confirmed: bool,
}

pub fn initial_model(universe: Vec<Candidate>, selection: Vec<Candidate>) -> Model {
    Model {
        widget: TagsSelect::new(universe),
        selection,
        screen_width: DEFAULT_WIDTH,
        screen_height: DEFAULT_HEIGHT,
        confirmed: false,
    }
}

pub fn model_from_config(cfg: &Config, universe: Vec<Candidate>, selection: Vec<Candidate>) -> Model {
    let mut m = initial_model(universe, selection);
    m.widget.label = cfg.label.clone();
    m.widget.placeholder = cfg.placeholder.clone();
    m.widget.help_text = cfg.help_text.clone();
    m
}

impl Model {
    pub fn update(&mut self, msg: crate::ui::Msg) {
        match msg {
            crate::ui::Msg::WindowSize { width, height } => {
                self.screen_width = width;
                self.screen_height = height;
            }
            // Enter with the panel closed confirms the whole selection.
            crate::ui::Msg::KeyEnter if !self.widget.is_open() => {
                log::info!("selection confirmed with {} item(s)", self.selection.len());
                self.confirmed = true;
            }
            msg => {
                if let Some(next) = crate::ui::update::handle_update(&mut self.widget, &self.selection, msg) {
                    log::debug!(
                        "selection changed: {:?}",
                        next.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
                    );
                    self.selection = next;
                }
            }
        }
    }

    pub fn view(&self) -> crate::ui::View {
        crate::ui::view::build_view(&self.widget, &self.selection)
    }

    pub fn render_full(&self) -> String {
        crate::ui::render::render_full(self)
    }

    pub fn selected_names(&self) -> impl Iterator<Item = &str> {
        self.selection.iter().map(|c| c.name.as_str())
    }
}
