//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::data::{MOVEMENT_SCHEMA_VERSION, MovementConfigFile};
use crate::movement::{MovementTuning, TuningError};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {file}: {source}")]
    Io {
        file: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("{file} has schema_version {found}, expected {expected}")]
    SchemaVersion {
        file: PathBuf,
        found: u32,
        expected: u32,
    },
    #[error("invalid movement tuning in {file}: {source}")]
    Tuning {
        file: PathBuf,
        #[source]
        source: TuningError,
    },
}

/// Where the tuning in use came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuningSource {
    Defaults,
    File(PathBuf),
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate a movement config document.
pub fn parse_movement_tuning(file: &Path, contents: &str) -> Result<MovementTuning, ContentError> {
    let config: MovementConfigFile =
        ron_options()
            .from_str(contents)
            .map_err(|source| ContentError::Parse {
                file: file.to_path_buf(),
                source,
            })?;

    if config.schema_version != MOVEMENT_SCHEMA_VERSION {
        return Err(ContentError::SchemaVersion {
            file: file.to_path_buf(),
            found: config.schema_version,
            expected: MOVEMENT_SCHEMA_VERSION,
        });
    }

    config
        .tuning
        .validate()
        .map_err(|source| ContentError::Tuning {
            file: file.to_path_buf(),
            source,
        })?;

    Ok(config.tuning)
}

/// Load movement tuning from `path`.
///
/// A missing file falls back to the built-in defaults; anything else that goes
/// wrong is an error, so bad tuning never reaches a running game.
pub fn load_movement_tuning(path: &Path) -> Result<(MovementTuning, TuningSource), ContentError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok((MovementTuning::default(), TuningSource::Defaults));
        }
        Err(source) => {
            return Err(ContentError::Io {
                file: path.to_path_buf(),
                source,
            });
        }
    };

    let tuning = parse_movement_tuning(path, &contents)?;
    Ok((tuning, TuningSource::File(path.to_path_buf())))
}
