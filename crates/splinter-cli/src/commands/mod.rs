pub mod ast;
pub mod check;
pub mod info;
pub mod patterns;
pub mod query_loader;
pub mod tokens;


use serde::Serialize;

/// Pretty-prints `value` as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: failed to serialize output: {}", e);
            std::process::exit(1);
        }
    }
}
