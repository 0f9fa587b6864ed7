//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror the command `*Args` but are populated from clap
//! - `from_matches()` pulls the fields a command uses
//! - `Into<*Args>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::info::InfoArgs;
use crate::commands::patterns::PatternsArgs;
use crate::commands::tokens::TokensArgs;

pub struct TokensParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub spans: bool,
    pub json: bool,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            spans: m.get_flag("spans"),
            json: m.get_flag("json"),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            spans: p.spans,
            json: p.json,
        }
    }
}

pub struct AstParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub raw: bool,
    pub spans: bool,
    pub json: bool,
    pub recursion_limit: Option<u32>,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            raw: m.get_flag("raw"),
            spans: m.get_flag("spans"),
            json: m.get_flag("json"),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            raw: p.raw,
            spans: p.spans,
            json: p.json,
            recursion_limit: p.recursion_limit,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub recursion_limit: Option<u32>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            recursion_limit: p.recursion_limit,
            color: p.color.should_colorize(),
        }
    }
}

pub struct InfoParams {
    pub name: String,
    pub json: bool,
}

impl InfoParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            name: m.get_one::<String>("name").cloned().unwrap_or_default(),
            json: m.get_flag("json"),
        }
    }
}

impl From<InfoParams> for InfoArgs {
    fn from(p: InfoParams) -> Self {
        Self {
            name: p.name,
            json: p.json,
        }
    }
}

pub struct PatternsParams {
    pub command: String,
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub json: bool,
}

impl PatternsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            command: m.get_one::<String>("command").cloned().unwrap_or_default(),
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            json: m.get_flag("json"),
        }
    }
}

impl From<PatternsParams> for PatternsArgs {
    fn from(p: PatternsParams) -> Self {
        Self {
            command: p.command,
            query_path: p.query_path,
            query_text: p.query_text,
            json: p.json,
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
