//! The generator itself: renders the shared template once per descriptor
//! and writes the resulting HTML files under an output root.

use crate::page::{PageDescriptor, PAGES};
use crate::template;
use gtmpl::Template;
use std::collections::HashSet;
use std::fmt;
use std::fs::{create_dir_all, File};
use std::io;
use std::path::{Path, PathBuf};

/// Renders prototype pages from the static descriptor list and writes them
/// to disk. Construct once with [`Generator::new`]; the template is parsed a
/// single time and reused for every page.
pub struct Generator {
    template: Template,
}

impl Generator {
    /// Parses the shared template and returns a ready generator.
    pub fn new() -> Result<Generator> {
        Ok(Generator {
            template: template::parse()?,
        })
    }

    /// Renders a single descriptor into the file at `target`, overwriting
    /// any existing file.
    fn write_page(&self, descriptor: &PageDescriptor, target: &Path) -> Result<()> {
        self.template.execute(
            &mut File::create(target)?,
            &gtmpl::Context::from(descriptor.to_value())?,
        )?;
        Ok(())
    }

    /// Writes every page in [`PAGES`] under `root`, creating parent
    /// directories as needed, and prints one progress line per file. Returns
    /// the number of pages written. The first error aborts the run; pages
    /// already written stay on disk.
    pub fn generate(&self, root: &Path) -> Result<usize> {
        let mut seen_dirs: HashSet<PathBuf> = HashSet::new();
        let mut count = 0;
        for descriptor in PAGES {
            let target = root.join(descriptor.path);
            if let Some(dir) = target.parent() {
                if seen_dirs.insert(dir.to_owned()) {
                    create_dir_all(dir)?;
                }
            }
            self.write_page(descriptor, &target)?;
            println!("✓ Created: {}", target.display());
            count += 1;
        }
        Ok(count)
    }
}

/// The result of a fallible page-writing operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error in a page-writing operation.
#[derive(Debug)]
pub enum Error {
    /// An error parsing or executing the template.
    Template(String),

    /// An error creating directories or writing the output files.
    Io(io::Error),
}

impl From<io::Error> for Error {
    /// Converts an [`io::Error`] into an [`Error`]. This allows us to use
    /// the `?` operator for fallible I/O operations.
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<String> for Error {
    /// Converts a template error message ([`String`]) into an [`Error`].
    /// This allows us to use the `?` operator for fallible template
    /// operations.
    fn from(err: String) -> Error {
        Error::Template(err)
    }
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Template(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Template(_) => None,
            Error::Io(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_generate_writes_every_page() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let count = Generator::new()?.generate(dir.path())?;
        assert_eq!(count, PAGES.len());
        for descriptor in PAGES {
            let target = dir.path().join(descriptor.path);
            assert!(target.is_file(), "missing {}", target.display());
        }
        Ok(())
    }

    #[test]
    fn test_page_contains_title_and_asset_root() -> Result<()> {
        let dir = tempfile::tempdir()?;
        Generator::new()?.generate(dir.path())?;
        for descriptor in PAGES {
            let contents = std::fs::read_to_string(dir.path().join(descriptor.path))?;
            assert!(
                contents.matches(descriptor.title).count() >= 2,
                "expected title '{}' in header and body of {}",
                descriptor.title,
                descriptor.path,
            );
            assert!(contents
                .contains(&format!("href=\"{}styles/reset.css\"", descriptor.asset_root)));
        }
        Ok(())
    }

    #[test]
    fn test_generate_twice_is_idempotent() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let generator = Generator::new()?;
        generator.generate(dir.path())?;
        let before = std::fs::read(dir.path().join(PAGES[0].path))?;
        generator.generate(dir.path())?;
        let after = std::fs::read(dir.path().join(PAGES[0].path))?;
        assert_eq!(before, after);
        Ok(())
    }

    #[test]
    fn test_generate_creates_missing_directories() -> Result<()> {
        let dir = tempfile::tempdir()?;
        assert!(!dir.path().join("course").exists());
        Generator::new()?.generate(dir.path())?;
        assert!(dir.path().join("course").is_dir());
        assert!(dir.path().join("ambassador").is_dir());
        Ok(())
    }
}
