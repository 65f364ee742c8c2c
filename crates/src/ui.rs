// UI module root: widget state, transitions, the rendering contract, styled
// rendering and the bubbletea-rs runner live in focused submodules under `ui/`.

use crate::candidate::Candidate;

pub mod model;
pub mod render;
pub mod run;
pub mod update;
pub mod view;

// Re-export commonly used symbols so call sites can use `crate::ui::...`.
pub use model::{Model, TagsSelect, initial_model};
pub use render::{render_field, render_full, render_modeline_padded, render_panel};
pub use run::run;
pub use update::handle_update;
pub use view::{PanelRow, View};

// Events delivered by the host, one at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    WindowSize { width: usize, height: usize },
    Rune(char),
    Paste(String),
    KeyBackspace,
    KeyEnter,
    KeyEsc,
    KeyUp,
    KeyDown,
    FocusGained,
    OutsideInteraction,
    TogglePressed,
    Activate(Candidate),
    RemoveAt(usize),
}
