//! Print the token stream of a query.

use std::path::PathBuf;

use splinter_lib::{Token, tokenize};

use super::print_json;
use super::query_loader::load_or_exit;

pub struct TokensArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub spans: bool,
    pub json: bool,
}

pub fn run(args: TokensArgs) {
    let source = load_or_exit(args.query_path.as_deref(), args.query_text.as_deref());
    let result = tokenize(&source.text);
    tracing::debug!(
        tokens = result.tokens.len(),
        errors = result.errors.len(),
        "tokenized query"
    );

    if args.json {
        print_json(&result);
    } else {
        print!("{}", format_tokens(&result.tokens, args.spans));
    }

    for error in &result.errors {
        eprintln!(
            "error: {} at {}:{}",
            error.message, error.line, error.column
        );
    }
    if !result.is_ok() {
        std::process::exit(1);
    }
}

/// One `Kind "text"` line per token.
pub fn format_tokens(tokens: &[Token], spans: bool) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!("{:?}", token.kind));
        if spans {
            out.push_str(&format!(
                " [{}..{}] {}:{}",
                token.start_offset, token.end_offset, token.start_line, token.start_column
            ));
        }
        out.push_str(&format!(" {:?}\n", token.text));
    }
    out
}
