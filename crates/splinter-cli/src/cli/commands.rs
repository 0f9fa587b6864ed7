//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("splinter")
        .about("Error-tolerant parser and metadata tooling for SPL search queries")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tokens_command())
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(info_command())
        .subcommand(patterns_command())
}

/// Print the token stream of a query.
pub fn tokens_command() -> Command {
    Command::new("tokens")
        .about("Show the token stream of a query")
        .override_usage(
            "\
  splinter tokens <QUERY>
  splinter tokens -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  splinter tokens search.spl
  splinter tokens -q 'index=main | stats count by host'
  splinter tokens -q 'host=web-01' --spans
  splinter tokens -q 'host=web-01' --json"#,
        )
        .arg(query_path_arg())
        .arg(query_text_arg())
        .arg(spans_arg())
        .arg(json_arg())
        .arg(verbose_arg())
}

/// Print the AST (or CST) of a query.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the syntax tree of a query")
        .override_usage(
            "\
  splinter ast <QUERY>
  splinter ast -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  splinter ast search.spl                 # typed AST
  splinter ast search.spl --raw           # concrete syntax tree
  splinter ast search.spl --raw --spans   # with byte ranges
  splinter ast -q '| eval x=a+1' --json   # parse result as JSON"#,
        )
        .arg(query_path_arg())
        .arg(query_text_arg())
        .arg(raw_arg())
        .arg(spans_arg())
        .arg(json_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Validate a query.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a query")
        .override_usage(
            "\
  splinter check <QUERY>
  splinter check -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  splinter check search.spl
  cat search.spl | splinter check -
  splinter check -q 'index=main | stats count by'"#,
        )
        .arg(query_path_arg())
        .arg(query_text_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Describe a command or function.
pub fn info_command() -> Command {
    Command::new("info")
        .about("Show metadata for a command or function")
        .after_help(
            r#"EXAMPLES:
  splinter info stats
  splinter info bucket           # aliases resolve to the command
  splinter info strftime --json"#,
        )
        .arg(name_arg())
        .arg(json_arg())
        .arg(verbose_arg())
}

/// Match a stage against a command's syntax pattern.
pub fn patterns_command() -> Command {
    Command::new("patterns")
        .about("Match a stage against a command's syntax pattern")
        .override_usage(
            "\
  splinter patterns <COMMAND> -q <TEXT>
  splinter patterns <COMMAND> <QUERY>",
        )
        .after_help(
            r#"EXAMPLES:
  splinter patterns stats -q 'count by host'
  splinter patterns rename -q 'rename src AS'   # shows expected continuations
  splinter patterns lookup -q 'users uid OUTPUT name' --json"#,
        )
        .arg(command_arg())
        .arg(query_path_arg())
        .arg(query_text_arg())
        .arg(json_arg())
        .arg(verbose_arg())
}
