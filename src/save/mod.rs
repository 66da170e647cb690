//! Save domain: persistence of the last activated spawn point.


use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::{ActiveSpawn, CheckpointActivated};

pub const DEFAULT_SAVE_PATH: &str = "saves/spawn.json";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to access save file {file}: {source}")]
    Io {
        file: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("save file {file} is corrupt: {source}")]
    Corrupt {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Spawn coordinate as written to disk, one scalar per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedSpawn {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for SavedSpawn {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<SavedSpawn> for Vec3 {
    fn from(s: SavedSpawn) -> Self {
        Vec3::new(s.x, s.y, s.z)
    }
}

/// Location of the save file for this session.
#[derive(Resource, Debug, Clone)]
pub struct SavePath(pub PathBuf);

impl Default for SavePath {
    fn default() -> Self {
        Self(PathBuf::from(DEFAULT_SAVE_PATH))
    }
}

/// Read the saved spawn. `Ok(None)` means there is no saved game.
pub fn load_spawn(path: &Path) -> Result<Option<Vec3>, SaveError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SaveError::Io {
                file: path.to_path_buf(),
                source,
            });
        }
    };

    let saved: SavedSpawn =
        serde_json::from_str(&contents).map_err(|source| SaveError::Corrupt {
            file: path.to_path_buf(),
            source,
        })?;
    Ok(Some(saved.into()))
}

pub fn store_spawn(path: &Path, position: Vec3) -> Result<(), SaveError> {
    let io_err = |source| SaveError::Io {
        file: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(io_err)?;
    }

    let json = serde_json::to_string_pretty(&SavedSpawn::from(position)).map_err(|source| {
        SaveError::Corrupt {
            file: path.to_path_buf(),
            source,
        }
    })?;
    fs::write(path, json).map_err(io_err)
}

/// Forget the saved game.
pub fn clear_spawn(path: &Path) -> Result<(), SaveError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(SaveError::Io {
            file: path.to_path_buf(),
            source,
        }),
    }
}

pub(crate) fn restore_saved_spawn(save_path: Res<SavePath>, mut spawn: ResMut<ActiveSpawn>) {
    match load_spawn(&save_path.0) {
        Ok(Some(position)) => {
            info!("Continuing from saved spawn {:?}", position);
            spawn.position = position;
        }
        Ok(None) => info!("No saved spawn, starting at {:?}", spawn.position),
        Err(e) => warn!("{e}; starting at {:?}", spawn.position),
    }
}

fn persist_checkpoints(
    mut checkpoints: MessageReader<CheckpointActivated>,
    save_path: Res<SavePath>,
) {
    // Only the latest activation matters.
    let Some(last) = checkpoints.read().last() else {
        return;
    };

    match store_spawn(&save_path.0, last.position) {
        Ok(()) => debug!("Saved spawn {:?} to {}", last.position, save_path.0.display()),
        Err(e) => error!("{e}"),
    }
}

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SavePath>()
            .add_systems(PreStartup, restore_saved_spawn)
            .add_systems(Update, persist_checkpoints);
    }
}
