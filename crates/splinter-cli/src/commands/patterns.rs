//! Match a stage against a command's syntax pattern.

use std::path::PathBuf;

use splinter_lib::patterns::{CommandSyntax, PatternMatchResult, get_command_pattern};
use splinter_lib::{FieldEffect, interpret_pattern, tokenize};

use super::print_json;
use super::query_loader::load_or_exit;

pub struct PatternsArgs {
    pub command: String,
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub json: bool,
}

pub fn run(args: PatternsArgs) {
    let Some(syntax) = get_command_pattern(&args.command) else {
        eprintln!("error: no syntax pattern for `{}`", args.command);
        std::process::exit(1);
    };
    let source = load_or_exit(args.query_path.as_deref(), args.query_text.as_deref());

    let result = match_stage(syntax, &source.text);

    if args.json {
        print_json(&result);
    } else {
        print!("{}", format_result(syntax, &result));
    }

    if !result.matched {
        std::process::exit(1);
    }
}

/// Matches `text` with or without the leading command keyword.
pub fn match_stage(syntax: &CommandSyntax, text: &str) -> PatternMatchResult {
    let tokens = tokenize(text).tokens;
    let starts_with_keyword = tokens
        .first()
        .is_some_and(|t| syntax.matches_name(&t.text));
    if starts_with_keyword {
        syntax.interpret_stage(&tokens)
    } else {
        interpret_pattern(syntax.syntax, &tokens)
    }
}

pub fn format_result(syntax: &CommandSyntax, result: &PatternMatchResult) -> String {
    let mut out = format!("usage: {}\n", syntax.usage);
    if result.matched {
        out.push_str(&format!("matched ({} tokens)\n", result.consumed));
    } else {
        out.push_str(&format!(
            "no match after {} tokens: {}\n",
            result.consumed,
            result.error.as_deref().unwrap_or("unexpected input")
        ));
    }

    if !result.bindings.is_empty() {
        out.push_str("bindings:\n");
        for binding in &result.bindings {
            let effect = match binding.effect {
                FieldEffect::Creates => " (creates)",
                FieldEffect::Modifies => " (modifies)",
                FieldEffect::Drops => " (drops)",
                FieldEffect::None => "",
            };
            out.push_str(&format!(
                "  {}: {} = {}{}\n",
                binding.name,
                binding.ty.as_str(),
                binding.text,
                effect
            ));
        }
    }

    if !result.expected.is_empty() {
        out.push_str(&format!("expected: {}\n", result.expected.join(", ")));
    }
    out
}
