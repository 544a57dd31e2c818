use crate::{ClientError, ClientResult};

use std::io::ErrorKind;
use std::path::PathBuf;

/// Session token persisted between runs of the CLI
#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The stored token; a missing or blank file means none
    pub fn load(&self) -> ClientResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::token_file(
                format!("Failed to read token file {}", self.path.display()),
                e,
            )),
        }
    }

    pub fn save(&self, token: &str) -> ClientResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClientError::token_file(format!("Failed to create {}", parent.display()), e)
            })?;
        }

        std::fs::write(&self.path, token).map_err(|e| {
            ClientError::token_file(
                format!("Failed to write token file {}", self.path.display()),
                e,
            )
        })
    }

    /// Remove the stored token. Succeeds when there is none.
    pub fn discard(&self) -> ClientResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::token_file(
                format!("Failed to remove token file {}", self.path.display()),
                e,
            )),
        }
    }
}
