use std::path::PathBuf;

use splinter_lib::{ParseResult, QueryBuilder};

use super::query_loader::{QuerySource, load_or_exit};

pub struct CheckArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source = load_or_exit(args.query_path.as_deref(), args.query_text.as_deref());

    let mut builder = QueryBuilder::new(&source.text);
    if let Some(limit) = args.recursion_limit {
        builder = builder.with_recursion_limit(limit);
    }
    let result = builder.parse();

    if let Some(report) = render_report(&source, &result, args.color) {
        eprint!("{}", report);
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

/// Rendered diagnostics of a failed parse, newline-terminated.
pub fn render_report(source: &QuerySource, result: &ParseResult, color: bool) -> Option<String> {
    if result.success {
        return None;
    }
    let diagnostics = result.all_diagnostics();
    let mut printer = diagnostics.printer(&source.text).colored(color);
    if let Some(path) = &source.path {
        printer = printer.path(path);
    }
    let mut report = printer.render();
    if !report.ends_with('\n') {
        report.push('\n');
    }
    Some(report)
}
