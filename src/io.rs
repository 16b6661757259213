//! Reading `.adn` test instances from a data directory.
//!
//! Instances are named `Inst_{size:07}_{id}.adn`. The directory is usually
//! given by the `GENOME_DATA` environment variable.
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use log::info;

use crate::config::{DATA_DIR_VAR, INSTANCE_FILES, INSTANCE_SIZES, SECONDARY_IDS};
use crate::dna::DnaBlock;
use crate::error::Error;

/// The file name of the instance of the given size and secondary id.
pub fn instance_file_name(size: usize, id: usize) -> String {
    format!("Inst_{size:07}_{id}.adn")
}

/// The size encoded in an instance file name, e.g. 10 for `Inst_0000010_7.adn`.
pub fn instance_size(name: &str) -> Result<usize, Error> {
    name.split('_')
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(|| Error::InvalidFileName(name.to_string()))
}

/// A directory of instances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstanceSource {
    pub dir: PathBuf,
}

impl InstanceSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        InstanceSource { dir: dir.into() }
    }

    /// The directory given by the `GENOME_DATA` environment variable.
    pub fn from_env() -> Result<Self, Error> {
        let dir = std::env::var(DATA_DIR_VAR).map_err(|source| Error::MissingDataDir {
            var: DATA_DIR_VAR,
            source,
        })?;
        Ok(Self::new(dir))
    }

    /// Read and parse a single file.
    pub fn load_path(path: &Path) -> Result<DnaBlock, Error> {
        info!("Reading instance {}", path.display());
        let text = read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse::<DnaBlock>().map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read the instance with the given file name.
    pub fn load(&self, name: &str) -> Result<DnaBlock, Error> {
        Self::load_path(&self.dir.join(name))
    }

    /// Read the first existing instance of the given size, trying the
    /// secondary ids in `SECONDARY_IDS` order.
    pub fn load_of_size(&self, size: usize) -> Result<DnaBlock, Error> {
        let path = SECONDARY_IDS
            .iter()
            .map(|&id| self.dir.join(instance_file_name(size, id)))
            .find(|path| path.is_file())
            .ok_or(Error::NoInstanceOfSize(size))?;
        Self::load_path(&path)
    }

    /// All known instances, ordered by size, together with their size.
    ///
    /// Files are only read when the iterator reaches them, and the iterator
    /// can be cloned to start over.
    pub fn all(&self) -> impl Iterator<Item = Result<(usize, DnaBlock), Error>> + Clone + '_ {
        INSTANCE_FILES
            .iter()
            .map(move |name| -> Result<_, Error> { Ok((instance_size(name)?, self.load(name)?)) })
    }

    /// One instance for each size in `INSTANCE_SIZES`, read lazily.
    pub fn by_size(&self) -> impl Iterator<Item = Result<(usize, DnaBlock), Error>> + Clone + '_ {
        INSTANCE_SIZES
            .iter()
            .map(move |&size| -> Result<_, Error> { Ok((size, self.load_of_size(size)?)) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dna::Dna::*;
    use crate::error::ParseError;

    const BLOCK: &str = "10\n5\nT A T A T G A G T C \nT A T T T \n";

    #[test]
    fn file_names() {
        assert_eq!(instance_file_name(10, 7), "Inst_0000010_7.adn");
        assert_eq!(instance_size("Inst_0100000_3.adn").unwrap(), 100000);
        assert!(matches!(
            instance_size("instance.adn"),
            Err(Error::InvalidFileName(_))
        ));
        for name in INSTANCE_FILES {
            assert!(instance_size(name).is_ok());
        }
    }

    #[test]
    fn read_double_dna_block() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Inst_0000010_44.adn"), BLOCK).unwrap();
        let source = InstanceSource::new(dir.path());
        assert_eq!(
            source.load("Inst_0000010_44.adn").unwrap(),
            DnaBlock(vec![T, A, T, A, T, G, A, G, T, C], vec![T, A, T, T, T])
        );
        assert!(matches!(
            source.load("Inst_0000010_7.adn"),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn of_size() {
        let dir = tempfile::tempdir().unwrap();
        let source = InstanceSource::new(dir.path());
        assert!(matches!(
            source.load_of_size(10),
            Err(Error::NoInstanceOfSize(10))
        ));
        // 44 is not a secondary id, 8 comes after 7.
        std::fs::write(dir.path().join("Inst_0000010_44.adn"), "1\n1\nA\nA\n").unwrap();
        std::fs::write(dir.path().join("Inst_0000010_8.adn"), "1\n1\nC\nC\n").unwrap();
        assert_eq!(source.load_of_size(10).unwrap(), DnaBlock(vec![C], vec![C]));
        std::fs::write(dir.path().join("Inst_0000010_7.adn"), BLOCK).unwrap();
        assert_eq!(source.load_of_size(10).unwrap().x().len(), 10);
    }

    #[test]
    fn parse_errors_carry_the_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.adn"), "2\n1\nA\nA\n").unwrap();
        match InstanceSource::new(dir.path()).load("bad.adn") {
            Err(Error::Parse { path, source }) => {
                assert!(path.ends_with("bad.adn"));
                assert_eq!(
                    source,
                    ParseError::LengthMismatch {
                        which: "first sequence",
                        declared: 2,
                        found: 1
                    }
                );
            }
            r => panic!("expected a parse error, got {r:?}"),
        }
    }

    #[test]
    fn lazy_and_restartable() {
        let dir = tempfile::tempdir().unwrap();
        for name in &INSTANCE_FILES[..3] {
            std::fs::write(dir.path().join(name), BLOCK).unwrap();
        }
        let source = InstanceSource::new(dir.path());
        let all = source.all();
        assert_eq!(all.clone().count(), INSTANCE_FILES.len());
        let first = all.take(4).collect::<Vec<_>>();
        for r in &first[..3] {
            assert_eq!(r.as_ref().unwrap().0, 10);
        }
        assert!(first[3].is_err());

        let mut by_size = source.by_size();
        assert_eq!(by_size.next().unwrap().unwrap().0, 10);
        assert!(matches!(
            by_size.next(),
            Some(Err(Error::NoInstanceOfSize(12)))
        ));
    }
}
