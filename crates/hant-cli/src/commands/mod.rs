pub mod convert_ops;
pub mod detect_ops;
pub mod settings_ops;

use std::fs;
use std::io::{self, Read};

use crate::CliError;

/// Read a whole input: the named file, or stdin for `None` / `"-"`.
pub fn read_input(path: Option<&str>) -> Result<String, CliError> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(buf)
        }
        Some(p) => fs::read_to_string(p).map_err(|source| CliError::Read {
            path: p.to_string(),
            source,
        }),
    }
}
