//! Writing triple tables and their summaries
//!
//! Tables are written as headerless three-column TSV. Fields are quoted
//! only when they contain a tab, a double quote or a line break.

use crate::convert::{Triple, TripleTable};
use crate::error::{KeenError, KeenResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Default JSON indentation for summaries
pub const DEFAULT_INDENT: usize = 2;

/// Write `table` to an open stream
///
/// Returns `false` without writing anything when the table is empty.
pub fn write_table_to<W: Write>(table: &TripleTable, writer: W) -> KeenResult<bool> {
    if table.is_empty() {
        return Ok(false);
    }
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);
    for triple in table {
        writer.serialize(triple)?;
    }
    writer.flush()?;
    Ok(true)
}

/// Write `table` to `path`
///
/// The rows go to a temporary file next to `path` which is then moved into
/// place, so a failed write never leaves a partial table behind. Returns
/// `false` and creates no file when the table is empty.
pub fn write_table(table: &TripleTable, path: impl AsRef<Path>) -> KeenResult<bool> {
    let path = path.as_ref();
    if table.is_empty() {
        tracing::warn!(path = %path.display(), "no triples, table not written");
        return Ok(false);
    }
    write_atomically(path, |file| write_table_to(table, file).map(|_| ()))?;
    tracing::info!(path = %path.display(), rows = table.len(), "wrote triple table");
    Ok(true)
}

fn write_atomically<F>(path: &Path, write: F) -> KeenResult<()>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> KeenResult<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = temp_file_in(dir)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }
    temp.persist(path)?;
    Ok(())
}

/// Create the temporary file with the same mode `std::fs::write` would use
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // the umask still applies on creation
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Aggregate statistics over a triple table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Occurrences of each namespace prefix across subjects and objects
    pub namespaces: BTreeMap<String, usize>,
    /// Distinct subject/object strings
    pub entities: usize,
    /// Number of rows
    pub relations: usize,
}

impl Summary {
    /// Summarize a table
    pub fn of(table: &TripleTable) -> Self {
        let mut namespaces = BTreeMap::new();
        let mut entities = HashSet::new();
        for element in table.iter().flat_map(|t| [t.subject.as_str(), t.object.as_str()]) {
            let prefix = element.split(':').next().unwrap_or(element);
            *namespaces.entry(prefix.to_string()).or_insert(0) += 1;
            entities.insert(element);
        }
        Self {
            namespaces,
            entities: entities.len(),
            relations: table.len(),
        }
    }

    /// Serialize as JSON indented by `indent` spaces
    pub fn to_json(&self, indent: usize) -> KeenResult<String> {
        let indent = vec![b' '; indent];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Summarize a table
pub fn get_summary(table: &TripleTable) -> Summary {
    Summary::of(table)
}

/// Write the summary of `table` to `path` as indented JSON
pub fn write_summary(table: &TripleTable, path: impl AsRef<Path>, indent: usize) -> KeenResult<Summary> {
    let path = path.as_ref();
    let summary = Summary::of(table);
    let json = summary.to_json(indent)?;
    write_atomically(path, |writer| Ok(writer.write_all(json.as_bytes())?))?;
    tracing::info!(path = %path.display(), "wrote summary");
    Ok(summary)
}

/// Read a table written by [`write_table`]
pub fn read_table(path: impl AsRef<Path>) -> KeenResult<TripleTable> {
    read_table_from(File::open(path.as_ref())?)
}

/// Read a headerless three-column TSV from a stream
pub fn read_table_from(reader: impl Read) -> KeenResult<TripleTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut triples = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() != 3 {
            return Err(KeenError::MalformedRow {
                line: record.position().map_or(0, |p| p.line() as usize),
                reason: format!("expected 3 columns, found {}", record.len()),
            });
        }
        triples.push(Triple::new(&record[0], &record[1], &record[2]));
    }
    Ok(TripleTable::from_triples(triples))
}
