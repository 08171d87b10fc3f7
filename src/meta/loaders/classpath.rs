//! Classpath loader over directories and jar archives

use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use zip::ZipArchive;
use zip::result::ZipError;

use crate::meta::loader::{Resource, ResourceLoader};

/// Looks up resources across an ordered list of classpath entries
///
/// Each entry is either a directory, where a resource is the file at the
/// relative name, or a jar/zip archive, where it is the archive entry of that
/// name. Entries that do not exist and archives that cannot be opened are
/// skipped.
#[derive(Debug, Clone, Default)]
pub struct ClasspathLoader {
    entries: Vec<PathBuf>,
}

impl ClasspathLoader {
    pub fn new(entries: Vec<PathBuf>) -> Self {
        Self { entries }
    }

    /// Build a loader from a platform path list (`a.jar:classes` on Unix)
    pub fn from_path_list(path_list: &str) -> Self {
        Self::from_path_lists([path_list])
    }

    /// Build a loader from several path lists, concatenated in order
    pub fn from_path_lists<I, S>(path_lists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Self::new(
            path_lists
                .into_iter()
                .flat_map(|list| std::env::split_paths(&list).collect::<Vec<_>>())
                .filter(|path| !path.as_os_str().is_empty())
                .collect(),
        )
    }

    /// Build a loader from the `CLASSPATH` environment variable
    pub fn from_env() -> Self {
        std::env::var("CLASSPATH")
            .map(|value| Self::from_path_list(&value))
            .unwrap_or_default()
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    fn locate<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = io::Result<ClasspathResource>> + 'a {
        let name = name.trim_start_matches('/');
        self.entries
            .iter()
            .filter_map(move |entry| probe(entry, name).transpose())
    }
}

impl ResourceLoader for ClasspathLoader {
    fn open_resource(&self, name: &str) -> io::Result<Option<Box<dyn Read>>> {
        match self.locate(name).next() {
            Some(resource) => resource?.open().map(Some),
            None => Ok(None),
        }
    }

    fn resources(&self, name: &str) -> io::Result<Vec<Box<dyn Resource>>> {
        self.locate(name)
            .map(|resource| resource.map(|r| Box::new(r) as Box<dyn Resource>))
            .collect()
    }
}

fn probe(entry: &Path, name: &str) -> io::Result<Option<ClasspathResource>> {
    if entry.is_dir() {
        let path = entry.join(name);
        return Ok(path.is_file().then(|| ClasspathResource::file(path)));
    }

    if !entry.is_file() {
        debug!("Skipping missing classpath entry {:?}", entry);
        return Ok(None);
    }

    // Unreadable archives are skipped like missing entries
    let mut archive = match open_archive(entry) {
        Ok(archive) => archive,
        Err(e) => {
            warn!("Skipping unreadable classpath archive {:?}: {}", entry, e);
            return Ok(None);
        }
    };
    let found = match archive.by_name(name) {
        Ok(_) => true,
        Err(ZipError::FileNotFound) => false,
        Err(e) => return Err(e.into()),
    };

    Ok(found.then(|| ClasspathResource::archive_entry(entry.to_path_buf(), name)))
}

fn open_archive(path: &Path) -> io::Result<ZipArchive<BufReader<File>>> {
    let file = File::open(path)?;
    ZipArchive::new(BufReader::new(file)).map_err(io::Error::from)
}

/// A resource found on the classpath
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClasspathResource {
    source: ResourceSource,
    location: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ResourceSource {
    File(PathBuf),
    ArchiveEntry { archive: PathBuf, name: String },
}

impl ClasspathResource {
    fn file(path: PathBuf) -> Self {
        let location = format!("file:{}", path.display());
        Self {
            source: ResourceSource::File(path),
            location,
        }
    }

    fn archive_entry(archive: PathBuf, name: &str) -> Self {
        let location = format!("jar:file:{}!/{}", archive.display(), name);
        Self {
            source: ResourceSource::ArchiveEntry {
                archive,
                name: name.to_string(),
            },
            location,
        }
    }
}

impl Resource for ClasspathResource {
    fn location(&self) -> &str {
        &self.location
    }

    fn open(&self) -> io::Result<Box<dyn Read>> {
        match &self.source {
            ResourceSource::File(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            ResourceSource::ArchiveEntry { archive, name } => {
                // Entries borrow the archive, so copy the bytes out and close it
                let mut archive = open_archive(archive)?;
                let mut entry = archive.by_name(name)?;
                let mut bytes = Vec::with_capacity(entry.size() as usize);
                entry.read_to_end(&mut bytes)?;
                Ok(Box::new(Cursor::new(bytes)))
            }
        }
    }
}
