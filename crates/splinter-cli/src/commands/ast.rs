//! Show the AST (or CST) of a query.

use std::path::PathBuf;

use splinter_lib::QueryBuilder;

use super::check::render_report;
use super::print_json;
use super::query_loader::load_or_exit;

pub struct AstArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub raw: bool,
    pub spans: bool,
    pub json: bool,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let source = load_or_exit(args.query_path.as_deref(), args.query_text.as_deref());

    let mut builder = QueryBuilder::new(&source.text);
    if let Some(limit) = args.recursion_limit {
        builder = builder.with_recursion_limit(limit);
    }
    let result = builder.parse();

    if args.json {
        print_json(&result);
        return;
    }

    // The tree is printed even when there are errors: it is the partial result.
    if let Some(report) = render_report(&source, &result, args.color) {
        eprint!("{}", report);
    }

    if args.raw {
        let output = result
            .cst()
            .printer()
            .with_trivia(true)
            .with_spans(args.spans)
            .dump();
        print!("{}", output);
    } else {
        println!("{:#?}", result.ast);
    }
}
