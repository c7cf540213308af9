//! Reading and writing custom event files.
//!
//! The format follows the file extension: `.md` for Markdown lists, `.csv`
//! for `day,month,label[,year]` rows and `.json` for month-keyed documents.
//! All three translate to and from [`CustomEvents`].

pub mod csv;
pub mod json;
pub mod markdown;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::error::EventFileError;
use crate::events::CustomEvents;

/// Supported event file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFileFormat {
    Markdown,
    Csv,
    Json,
}

impl EventFileFormat {
    /// Picks the format from the file extension, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`EventFileError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, EventFileError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("md") => Ok(Self::Markdown),
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(EventFileError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn parse(self, content: &str) -> Result<CustomEvents, EventFileError> {
        match self {
            Self::Markdown => markdown::parse(content),
            Self::Csv => csv::parse(content),
            Self::Json => json::parse(content),
        }
    }

    pub fn render(self, events: &CustomEvents) -> Result<String, EventFileError> {
        match self {
            Self::Markdown => markdown::render(events),
            Self::Csv => Ok(csv::render(events)),
            Self::Json => json::render(events),
        }
    }
}

/// Loads custom events from `path`.
///
/// A missing file is not an error: it yields an empty mapping.
pub fn load(path: &Path) -> Result<CustomEvents, EventFileError> {
    let format = EventFileFormat::from_path(path)?;
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "event file not found, continuing without custom events");
            return Ok(CustomEvents::new());
        }
        Err(source) => {
            return Err(EventFileError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let events = format.parse(&content)?;
    debug!(path = %path.display(), count = events.len(), "loaded custom events");
    Ok(events)
}

/// Writes `events` to `path`, replacing any existing file.
pub fn save(path: &Path, events: &CustomEvents) -> Result<(), EventFileError> {
    let format = EventFileFormat::from_path(path)?;
    let content = format.render(events)?;
    fs::write(path, content).map_err(|source| EventFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = events.len(), "saved custom events");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Position;

    fn sample() -> CustomEvents {
        let mut events = CustomEvents::new();
        for (key, label) in [
            ("15 Ordium", "Fondation"),
            ("5 Jours du Silence", "Veille"),
            ("8 Fervor, An 20", "Rébellion, suite"),
        ] {
            events.insert(key.parse::<Position>().unwrap(), label.to_string());
        }
        events
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            EventFileFormat::from_path(Path::new("a/events.md")).unwrap(),
            EventFileFormat::Markdown
        );
        assert_eq!(
            EventFileFormat::from_path(Path::new("events.CSV")).unwrap(),
            EventFileFormat::Csv
        );
        assert_eq!(
            EventFileFormat::from_path(Path::new("events.json")).unwrap(),
            EventFileFormat::Json
        );
    }

    #[test]
    fn unknown_extension_is_rejected() {
        for name in ["events.txt", "events"] {
            assert!(matches!(
                EventFileFormat::from_path(Path::new(name)),
                Err(EventFileError::UnsupportedFormat { .. })
            ));
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let events = load(&dir.path().join("absent.json")).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn save_then_load_each_format() {
        let dir = tempfile::tempdir().expect("create temp dir");
        for name in ["events.md", "events.csv", "events.json"] {
            let path = dir.path().join(name);
            save(&path, &sample()).unwrap();
            assert_eq!(load(&path).unwrap(), sample(), "{name}");
        }
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("nope").join("events.md");
        assert!(matches!(
            save(&path, &sample()),
            Err(EventFileError::Io { .. })
        ));
    }
}
