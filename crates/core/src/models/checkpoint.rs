use std::{
    fs::{self, File},
    io::ErrorKind,
    path::Path,
};

use crate::prelude::*;

/// Run progress persisted to disk so that a crashed run can be resumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
pub struct Checkpoint {
    #[getset(get = "pub")]
    mode: DispatchMode,

    #[getset(get = "pub")]
    total_count: u64,

    #[getset(get = "pub")]
    remaining: i64,

    #[getset(get = "pub")]
    last_batch_index: Option<u64>,
}

fn checkpoint_error(path: &Path, underlying: impl ToString) -> Error {
    Error::Checkpoint {
        path: path.display().to_string(),
        underlying: underlying.to_string(),
    }
}

impl Checkpoint {
    /// `Ok(None)` if there is no checkpoint at `path`.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(checkpoint_error(path, e)),
        };
        serde_json::from_reader(file)
            .map(Some)
            .map_err(|e| checkpoint_error(path, e))
    }

    /// Writes next to `path` first and renames, so a crash mid-write keeps the
    /// previous checkpoint intact.
    pub fn save(&self, path: &Path) -> Result<()> {
        let staging = path.with_extension("tmp");
        let mut file = File::create(&staging).map_err(|e| checkpoint_error(&staging, e))?;
        serde_json::to_writer_pretty(&mut file, self).map_err(|e| checkpoint_error(&staging, e))?;
        file.sync_all().map_err(|e| checkpoint_error(&staging, e))?;
        fs::rename(&staging, path).map_err(|e| checkpoint_error(path, e))
    }

    pub fn is_resumable_for(&self, mode: DispatchMode) -> bool {
        self.mode == mode && self.remaining > 0
    }
}
