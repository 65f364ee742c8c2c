// Render module: turns the widget's `View` into styled terminal lines.

pub mod field;
pub mod full;
pub mod modeline;
pub mod panel;
pub mod styles;
pub mod util;

pub use field::{field_spans, render_field, render_help, render_label, toggle_column};
pub use full::{hit_test, render_full};
pub use modeline::{render_modeline, render_modeline_padded};
pub use panel::{panel_page, panel_row_at, render_panel};
