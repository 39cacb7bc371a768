use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::{HistoryData, TransliterationHistory, MAGIC, VERSION};

impl TransliterationHistory {
    /// Serialize to bytes (RUHS format).
    pub fn to_bytes(&self) -> Result<Vec<u8>, io::Error> {
        let data = HistoryData {
            records: self.records.iter().cloned().collect(),
        };
        let body = bincode::serialize(&data).map_err(io::Error::other)?;

        let mut buf = Vec::with_capacity(5 + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    /// Deserialize from bytes (RUHS format), keeping at most the newest
    /// `history.max_records` records.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, io::Error> {
        if bytes.len() < 5 {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "too short"));
        }
        if &bytes[0..4] != MAGIC {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "bad magic"));
        }
        if bytes[4] != VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "unsupported version",
            ));
        }
        let data: HistoryData = bincode::deserialize(&bytes[5..])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut history = Self::new();
        for record in data.records {
            history.push(record);
        }
        Ok(history)
    }

    /// Atomic write: write to .tmp then rename.
    ///
    /// A target that itself ends in `.tmp` is refused with `InvalidInput`,
    /// since the staging file would be the target.
    pub fn save(&self, path: &Path) -> Result<(), io::Error> {
        if path.extension().is_some_and(|ext| ext == "tmp") {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("history path must not use the .tmp extension: {}", path.display()),
            ));
        }
        let bytes = self.to_bytes()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        debug!(path = %path.display(), records = self.len(), "history saved");
        Ok(())
    }

    /// Open from file, returning an empty history if the file doesn't exist.
    pub fn open(path: &Path) -> Result<Self, io::Error> {
        match fs::read(path) {
            Ok(bytes) => Self::from_bytes(&bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e),
        }
    }
}
