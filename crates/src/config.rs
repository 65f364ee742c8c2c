// Command-line configuration for the terminal host.

use crate::candidate::{Candidate, dedup_by_name, load_items};
use crate::error::{ConfigError, LoadError};
use log::LevelFilter;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub items_path: Option<String>,
    pub names: Vec<String>,
    pub preselect: Vec<String>,
    pub label: String,
    pub placeholder: String,
    pub help_text: Option<String>,
    pub filter: Option<String>,
    pub json: bool,
    pub log_file: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            items_path: None,
            names: vec![],
            preselect: vec![],
            label: String::new(),
            placeholder: String::new(),
            help_text: None,
            filter: None,
            json: false,
            log_file: None,
            log_level: LevelFilter::Debug,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Invocation {
    Help,
    Run(Config),
}

fn take_value(args: &[String], i: usize) -> Result<String, ConfigError> {
    args.get(i + 1)
        .cloned()
        .ok_or_else(|| ConfigError::MissingValue(args[i].clone()))
}

pub fn parse_args(args: &[String]) -> Result<Invocation, ConfigError> {
    let mut cfg = Config::default();
    let mut i = 0usize;
    while i < args.len() {
        let a = args[i].as_str();
        match a {
            "-h" | "--help" => return Ok(Invocation::Help),
            "--json" => {
                cfg.json = true;
                i += 1;
                continue;
            }
            "--items" => cfg.items_path = Some(take_value(args, i)?),
            "--select" => cfg.preselect.push(take_value(args, i)?),
            "--label" => cfg.label = take_value(args, i)?,
            "--placeholder" => cfg.placeholder = take_value(args, i)?,
            "--help-text" => cfg.help_text = Some(take_value(args, i)?),
            "--filter" => cfg.filter = Some(take_value(args, i)?),
            "--log" => cfg.log_file = Some(take_value(args, i)?),
            "--log-level" => {
                let raw = take_value(args, i)?;
                cfg.log_level = raw
                    .parse::<LevelFilter>()
                    .map_err(|_| ConfigError::BadLogLevel(raw.clone()))?;
            }
            // "-" alone is not a flag; treat it like any other name
            _ if a.starts_with('-') && a != "-" => {
                return Err(ConfigError::UnknownFlag(a.to_string()));
            }
            _ => {
                cfg.names.push(a.to_string());
                i += 1;
                continue;
            }
        }
        i += 2;
    }
    Ok(Invocation::Run(cfg))
}

impl Config {
    /// Candidate universe: `--items` first, then positional names, duplicates
    /// dropped (first occurrence wins).
    pub fn universe(&self) -> Result<Vec<Candidate>, LoadError> {
        let mut items = match &self.items_path {
            Some(p) => load_items(p)?,
            None => vec![],
        };
        items.extend(self.names.iter().map(Candidate::new));
        let items = dedup_by_name(items);
        if items.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(items)
    }

    /// Resolve `--select` names against the universe, in the order given.
    pub fn initial_selection(&self, universe: &[Candidate]) -> Result<Vec<Candidate>, ConfigError> {
        let mut out: Vec<Candidate> = vec![];
        for name in &self.preselect {
            let found = universe
                .iter()
                .find(|c| &c.name == name)
                .ok_or_else(|| ConfigError::UnknownSelection(name.clone()))?;
            if let Some(next) = crate::selection::with_added(&out, found) {
                out = next;
            }
        }
        Ok(out)
    }
}

pub fn help_text() -> String {
    [
        "tagsel - pick several items from a list",
        "",
        "Usage:",
        "  tagsel [options] [NAME...]",
        "",
        "Options:",
        "  --items <file>        JSON array of candidates or one name per line (\"-\" = stdin)",
        "  --select <name>       pre-select a candidate (repeatable)",
        "  --label <text>        field label",
        "  --placeholder <text>  placeholder shown while nothing is selected",
        "  --help-text <text>    help line under the field",
        "  --filter <query>      print the candidates matching <query> and exit",
        "  --json                print results as a JSON array instead of names",
        "  --log <file>          write a debug log to <file>",
        "  --log-level <level>   off|error|warn|info|debug|trace (default: debug)",
        "  -h, --help            show this help",
        "",
        "Keys:",
        "  type to filter, Up/Down to move, Enter to add (Enter with the list closed confirms),",
        "  Backspace on an empty field removes the last tag, Esc closes the list (or quits),",
        "  Ctrl-T toggles the list, Tab leaves the field, Shift-Tab returns to it.",
        "Mouse:",
        "  click a tag's × to remove it, a row to add it, the arrow to toggle the list;",
        "  clicking outside the field leaves it.",
    ]
    .join("\n")
}
