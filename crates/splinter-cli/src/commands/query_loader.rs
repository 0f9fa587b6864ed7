use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("query is required: use a positional argument or -q/--query")]
    Missing,
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to read '{}': {source}", .path.display())]
    File { path: PathBuf, source: io::Error },
}

/// Query text plus the name diagnostics should show for it.
pub struct QuerySource {
    pub text: String,
    pub path: Option<String>,
}

pub fn load_query_source(
    query_path: Option<&Path>,
    query_text: Option<&str>,
) -> Result<QuerySource, LoadError> {
    if let Some(text) = query_text {
        return Ok(QuerySource {
            text: text.to_string(),
            path: None,
        });
    }

    if let Some(path) = query_path {
        if path.as_os_str() == "-" {
            return load_stdin();
        }
        return load_file(path);
    }

    Err(LoadError::Missing)
}

/// Loads the query and exits with an error message when that fails.
pub fn load_or_exit(query_path: Option<&Path>, query_text: Option<&str>) -> QuerySource {
    match load_query_source(query_path, query_text) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_stdin() -> Result<QuerySource, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(QuerySource {
        text: buf,
        path: Some("<stdin>".to_string()),
    })
}

fn load_file(path: &Path) -> Result<QuerySource, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(QuerySource {
        text,
        path: Some(path.to_string_lossy().into_owned()),
    })
}
