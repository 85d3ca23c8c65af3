// Copyright (c) 2025 the howto authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Credential storage: a single plaintext API key under `~/.config/howto/`.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

const CONFIG_DIR: &str = ".config/howto";
const KEY_FILE: &str = "api.txt";

/// Path of the key file, `<home>/.config/howto/api.txt`.
pub fn key_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_DIR).join(KEY_FILE))
        .context("Could not determine the home directory")
}

/// Persist the API key, overwriting any previous value.
pub fn store_key(key: &str) -> Result<()> {
    store_key_at(&key_path()?, key)
}

/// Read the stored API key back verbatim.
pub fn load_key() -> Result<String> {
    load_key_at(&key_path()?)
}

fn store_key_at(path: &Path, key: &str) -> Result<()> {
    let dir = path
        .parent()
        .with_context(|| format!("Key path has no parent directory: {}", path.display()))?;

    let mut dir_builder = fs::DirBuilder::new();
    dir_builder.recursive(true);
    #[cfg(unix)]
    dir_builder.mode(0o750);
    dir_builder
        .create(dir)
        .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    // Owner-only: the key is stored in plaintext.
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options
        .open(path)
        .with_context(|| format!("Failed to open key file: {}", path.display()))?;
    file.write_all(key.as_bytes())
        .with_context(|| format!("Failed to write key file: {}", path.display()))?;

    Ok(())
}

fn load_key_at(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .context("No API key could be read, use `howto api <your-api-key>` first")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[cfg(unix)]
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn store_then_load_round_trips_exactly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_DIR).join(KEY_FILE);

        store_key_at(&path, "abc123").unwrap();
        assert_eq!(load_key_at(&path).unwrap(), "abc123");
    }

    #[test]
    fn store_overwrites_previous_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_DIR).join(KEY_FILE);

        store_key_at(&path, "old-key").unwrap();
        store_key_at(&path, "new-key").unwrap();
        assert_eq!(load_key_at(&path).unwrap(), "new-key");
    }

    #[test]
    fn load_without_stored_key_fails_with_hint() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_DIR).join(KEY_FILE);

        let err = load_key_at(&path).unwrap_err();
        assert!(err.to_string().contains("howto api"));
    }

    #[cfg(unix)]
    #[test]
    fn key_file_is_owner_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_DIR).join(KEY_FILE);

        store_key_at(&path, "abc123").unwrap();

        let file_mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(file_mode, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn config_directory_excludes_world_access() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_DIR).join(KEY_FILE);

        store_key_at(&path, "abc123").unwrap();

        let dir_mode = fs::metadata(path.parent().unwrap())
            .unwrap()
            .permissions()
            .mode()
            & 0o777;
        // The umask may clear further bits; world access must be gone.
        assert_eq!(dir_mode & 0o007, 0);
        assert_ne!(dir_mode & 0o700, 0);
    }
}
