//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull the fields each command uses
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::emit::EmitArgs;
use crate::commands::source_loader::Input;
use crate::commands::tokens::TokensArgs;

pub struct TokensParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub trivia: bool,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            trivia: m.get_flag("trivia"),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input: Input::new(p.input_path, p.input_text),
            trivia: p.trivia,
        }
    }
}

pub struct AstParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub spans: bool,
    pub fuel: Option<u32>,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            spans: m.get_flag("spans"),
            fuel: m.get_one::<u32>("fuel").copied(),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input: Input::new(p.input_path, p.input_text),
            spans: p.spans,
            fuel: p.fuel,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub types: bool,
    pub spans: bool,
    pub fuel: Option<u32>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            types: m.get_flag("types"),
            spans: m.get_flag("spans"),
            fuel: m.get_one::<u32>("fuel").copied(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: Input::new(p.input_path, p.input_text),
            types: p.types,
            spans: p.spans,
            fuel: p.fuel,
            color: p.color.should_colorize(),
        }
    }
}

pub struct EmitParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub indent: usize,
    pub no_check: bool,
    pub fuel: Option<u32>,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl EmitParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            indent: m.get_one::<usize>("indent").copied().unwrap_or(4),
            no_check: m.get_flag("no_check"),
            fuel: m.get_one::<u32>("fuel").copied(),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<EmitParams> for EmitArgs {
    fn from(p: EmitParams) -> Self {
        Self {
            input: Input::new(p.input_path, p.input_text),
            indent: p.indent,
            no_check: p.no_check,
            fuel: p.fuel,
            output: p.output,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
