use crate::{DeviceStore, StoreError, StoreResult};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// One file per key inside a device directory.
///
/// Writes go to a temp file that is fsynced and then renamed over the
/// target, so a crash mid-write leaves the previous value intact.
pub struct FileDeviceStore {
    dir: PathBuf,
}

impl FileDeviceStore {
    /// The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl DeviceStore for FileDeviceStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path(key);

        if !path.exists() {
            return Ok(None);
        }

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                Err(StoreError::corrupted(path, format!("not valid UTF-8: {}", e)))
            }
            Err(e) => Err(StoreError::file_read(path, e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::dir_creation(self.dir.clone(), e))?;

        let final_path = self.path(key);
        let temp_path = self
            .dir
            .join(format!("{}.tmp.{}", key, std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Wrote {}", final_path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::file_write(path, e)),
        }
    }

    /// Renames `<key>` to `<key>.corrupted.<timestamp>`.
    fn quarantine(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path(key);

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self.dir.join(format!("{}.corrupted.{}", key, timestamp));

        fs::rename(&path, &backup_path).map_err(|e| StoreError::backup_failed(path.clone(), e))?;

        warn!("Backed up corrupted {} to {}", key, backup_path.display());
        Ok(Some(backup_path.display().to_string()))
    }
}
