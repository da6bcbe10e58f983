//! Known source databases and their export locations

use crate::error::KeenError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Source databases whose BEL exports are commonly converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Database {
    Compath,
    Hippie,
    Kegg,
    MirTarBase,
    Msig,
    Reactome,
    WikiPathways,
    DrugBank,
}

impl Database {
    /// All databases, in id order
    pub const ALL: [Database; 8] = [
        Database::Compath,
        Database::Hippie,
        Database::Kegg,
        Database::MirTarBase,
        Database::Msig,
        Database::Reactome,
        Database::WikiPathways,
        Database::DrugBank,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Database::Compath => "compath",
            Database::Hippie => "hippie",
            Database::Kegg => "kegg",
            Database::MirTarBase => "mirtarbase",
            Database::Msig => "msig",
            Database::Reactome => "reactome",
            Database::WikiPathways => "wikipathways",
            Database::DrugBank => "drugbank",
        }
    }

    /// 1-based numeric id
    pub fn id(&self) -> usize {
        Self::ALL.iter().position(|d| d == self).map_or(0, |i| i + 1)
    }

    pub fn from_id(id: usize) -> Option<Self> {
        id.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// `<data_dir>/<name>.keen.tsv`
    pub fn keen_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(format!("{}.keen.tsv", self.name()))
    }

    /// `<data_dir>/<name>.keen.summary.json`
    pub fn summary_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(format!("{}.keen.summary.json", self.name()))
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Database {
    type Err = KeenError;

    /// Accepts a name (case-insensitive) or a numeric id
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        if let Ok(id) = needle.parse::<usize>() {
            return Self::from_id(id).ok_or_else(|| KeenError::UnknownDatabase(s.to_string()));
        }
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| KeenError::UnknownDatabase(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_one_based() {
        assert_eq!(Database::Compath.id(), 1);
        assert_eq!(Database::DrugBank.id(), 8);
        assert_eq!(Database::from_id(3), Some(Database::Kegg));
        assert_eq!(Database::from_id(0), None);
        assert_eq!(Database::from_id(9), None);
    }

    #[test]
    fn parses_name_or_id() {
        assert_eq!("kegg".parse::<Database>().unwrap(), Database::Kegg);
        assert_eq!("MirTarBase".parse::<Database>().unwrap(), Database::MirTarBase);
        assert_eq!("6".parse::<Database>().unwrap(), Database::Reactome);
        assert!(matches!(
            "uniprot".parse::<Database>(),
            Err(KeenError::UnknownDatabase(_))
        ));
    }

    #[test]
    fn export_paths() {
        let dir = Path::new("/data");
        assert_eq!(Database::Hippie.keen_path(dir), PathBuf::from("/data/hippie.keen.tsv"));
        assert_eq!(
            Database::Hippie.summary_path(dir),
            PathBuf::from("/data/hippie.keen.summary.json")
        );
    }
}
