use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while extracting exported functions
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to read Go source {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Function '{name}' is exported twice (lines {first_line} and {line})")]
    DuplicateExport {
        name: String,
        first_line: usize,
        line: usize,
    },

    #[error("Parameter '{param}' of '{function}' (line {line}) has no type")]
    UntypedParameter {
        function: String,
        param: String,
        line: usize,
    },
}
