use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Filesystem capability
///
/// Scripts reach files only through this trait.
pub trait FileSystem {
    /// Length of the file at `path` in bytes.
    fn length(&self, path: &str) -> Result<u64>;
    fn read_to_string(&self, path: &str) -> Result<String>;
}

/// The host filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn length(&self, path: &str) -> Result<u64> {
        Ok(std::fs::metadata(path)?.len())
    }
    fn read_to_string(&self, path: &str) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenFile {
    pub path: String,
    pub length: u64,
    pub position: u64,
}

/// ## Open file handles
///
/// Handles are never closed; they live as long as the runtime.
pub struct Files {
    fs: Box<dyn FileSystem>,
    open: HashMap<String, OpenFile>,
}

impl Default for Files {
    fn default() -> Files {
        Files::new(Box::new(StdFileSystem))
    }
}

impl Files {
    pub fn new(fs: Box<dyn FileSystem>) -> Files {
        Files {
            fs,
            open: HashMap::new(),
        }
    }

    /// Reopening a handle replaces it.
    pub fn open(&mut self, handle: &str, path: &str) -> Result<&OpenFile> {
        let file = OpenFile {
            path: path.to_string(),
            length: self.fs.length(path)?,
            position: 0,
        };
        self.open.insert(handle.to_string(), file);
        self.get(handle)
    }

    pub fn get(&self, handle: &str) -> Result<&OpenFile> {
        match self.open.get(handle) {
            Some(file) => Ok(file),
            None => Err(error!(BadFileHandle; handle)),
        }
    }

    pub fn length(&self, handle: &str) -> Result<u64> {
        Ok(self.get(handle)?.length)
    }

    pub fn read_all(&self, handle: &str) -> Result<String> {
        let file = self.get(handle)?;
        self.fs.read_to_string(&file.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OneFile;

    impl FileSystem for OneFile {
        fn length(&self, path: &str) -> Result<u64> {
            match path {
                "notes.txt" => Ok(5),
                _ => Err(error!(FileNotFound; path)),
            }
        }
        fn read_to_string(&self, path: &str) -> Result<String> {
            self.length(path).map(|_| "hello".to_string())
        }
    }

    #[test]
    fn test_open_and_read() {
        let mut files = Files::new(Box::new(OneFile));
        let file = files.open("n", "notes.txt").unwrap();
        assert_eq!(file.length, 5);
        assert_eq!(file.position, 0);
        assert_eq!(files.length("n").unwrap(), 5);
        assert_eq!(files.read_all("n").unwrap(), "hello");
    }

    #[test]
    fn test_missing_file() {
        let mut files = Files::new(Box::new(OneFile));
        let e = files.open("n", "other.txt").unwrap_err();
        assert!(e.is(crate::lang::ErrorCode::FileNotFound));
        assert!(files.get("n").is_err());
    }

    #[test]
    fn test_unknown_handle() {
        let files = Files::new(Box::new(OneFile));
        let e = files.read_all("nope").unwrap_err();
        assert!(e.is(crate::lang::ErrorCode::BadFileHandle));
    }
}
