use crate::candidate::Candidate;
use crate::config::Config;
use crate::error::TagselError;
use crate::filter::filter_candidates;
use crate::ui::model::{Model, model_from_config};
use crate::ui::render::hit_test;
use bubbletea_rs::{
    MouseMotion, Program, command::Cmd, event::KeyMsg, event::MouseMsg, event::WindowSizeMsg,
    model::Model as TeaModel, window_size,
};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use once_cell::sync::OnceCell;

// bubbletea-rs builds the model through `init()` without arguments, so the
// prepared model is parked here before the program starts.
static INITIAL: OnceCell<Model> = OnceCell::new();

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// `--filter` results or the confirmed selection.
    Done(Vec<Candidate>),
    Cancelled,
}

pub fn format_output(items: &[Candidate], json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string(items);
    }
    Ok(items
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join("\n"))
}

// Adapter type implementing bubbletea-rs Model trait by delegating to our Model
struct TeaAdapter {
    inner: Model,
}

impl TeaAdapter {
    fn send(&mut self, msg: crate::ui::Msg) {
        self.inner.update(msg);
    }
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        let inner = INITIAL.get().cloned().unwrap_or_default();
        (TeaAdapter { inner }, Some(window_size()))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            let ctrl = km.modifiers.contains(KeyModifiers::CONTROL);
            match &km.key {
                KeyCode::Char('c') | KeyCode::Char('C') if ctrl => {
                    return Some(bubbletea_rs::quit());
                }
                // Ctrl-C delivered as ETX
                KeyCode::Char('\u{03}') => return Some(bubbletea_rs::quit()),
                KeyCode::Esc => {
                    if !self.inner.widget.is_open() {
                        return Some(bubbletea_rs::quit());
                    }
                    self.send(crate::ui::Msg::KeyEsc);
                }
                KeyCode::Enter => {
                    self.send(crate::ui::Msg::KeyEnter);
                    if self.inner.confirmed {
                        return Some(bubbletea_rs::quit());
                    }
                }
                KeyCode::Backspace => self.send(crate::ui::Msg::KeyBackspace),
                KeyCode::Up => self.send(crate::ui::Msg::KeyUp),
                KeyCode::Down => self.send(crate::ui::Msg::KeyDown),
                // keyboard alias for clicking outside the widget
                KeyCode::Tab => self.send(crate::ui::Msg::OutsideInteraction),
                KeyCode::BackTab => self.send(crate::ui::Msg::FocusGained),
                KeyCode::Char(ch) if ctrl => match ch {
                    't' | 'T' => self.send(crate::ui::Msg::TogglePressed),
                    'n' | 'N' => self.send(crate::ui::Msg::KeyDown),
                    'p' | 'P' => self.send(crate::ui::Msg::KeyUp),
                    _ => {}
                },
                KeyCode::Char(ch) => self.send(crate::ui::Msg::Rune(*ch)),
                _ => { /* ignore other keys */ }
            }
            return None;
        }
        if let Some(mm) = msg.downcast_ref::<MouseMsg>() {
            let open = self.inner.widget.is_open();
            match mm.button {
                MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(hit) = hit_test(&self.inner, mm.x as usize, mm.y as usize) {
                        self.send(hit);
                    }
                }
                MouseEventKind::ScrollDown if open => self.send(crate::ui::Msg::KeyDown),
                MouseEventKind::ScrollUp if open => self.send(crate::ui::Msg::KeyUp),
                _ => {}
            }
            return None;
        }
        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            self.send(crate::ui::Msg::WindowSize {
                width: ws.width as usize,
                height: ws.height as usize,
            });
        }
        None
    }

    fn view(&self) -> String {
        self.inner.render_full()
    }
}

/// Load the candidates described by `cfg`, then either print filter results
/// (`--filter`) or run the interactive picker until the user confirms or quits.
pub async fn run(cfg: &Config) -> Result<Outcome, TagselError> {
    let universe = cfg.universe()?;
    let selection = cfg.initial_selection(&universe)?;

    if let Some(query) = &cfg.filter {
        let found: Vec<Candidate> = filter_candidates(&universe, query)
            .into_iter()
            .cloned()
            .collect();
        log::info!("filter `{query}` matched {} of {}", found.len(), universe.len());
        return Ok(Outcome::Done(found));
    }

    log::info!(
        "starting picker with {} candidates, {} pre-selected",
        universe.len(),
        selection.len()
    );
    let model = model_from_config(cfg, universe, selection);
    if INITIAL.set(model).is_err() {
        return Err(TagselError::Program("picker already running".to_string()));
    }

    let builder = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .mouse_motion(MouseMotion::Cell)
        .signal_handler(true);
    let program = builder
        .build()
        .map_err(|e| TagselError::Program(format!("failed to build program: {e:?}")))?;
    let final_adapter = program
        .run()
        .await
        .map_err(|e| TagselError::Program(format!("{e:?}")))?;

    if final_adapter.inner.confirmed {
        Ok(Outcome::Done(final_adapter.inner.selection))
    } else {
        log::info!("picker cancelled");
        Ok(Outcome::Cancelled)
    }
}
