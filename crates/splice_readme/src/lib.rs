// crates/splice_readme/src/lib.rs

use log::{debug, trace};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use quote_line::quote_line;
use readme_marker::{is_sentinel_line, TERMINATOR_LINE};

pub mod error;

pub use error::SpliceError;

/// Counters collected while splicing. They describe the run and are never
/// written to the output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpliceStats {
    /// Lines read from the source document.
    pub source_lines: usize,
    /// Sentinel lines replaced.
    pub sentinels: usize,
    /// Quoted README lines written.
    pub content_lines: usize,
}

/// Copies `source` to `out`, replacing every sentinel line with the quoted
/// lines of `content` followed by the terminator line.
///
/// A line matches only if its full text, newline included, equals
/// [`readme_marker::SENTINEL_LINE`]; other lines are copied byte for byte.
/// `content` is read from wherever the previous sentinel left it and is never rewound, so once it is
/// exhausted later sentinels produce only the terminator.
///
/// # Errors
///
/// Returns [`SpliceError::ReadSource`] or [`SpliceError::ReadReadme`] if an
/// input cannot be read (invalid UTF-8 included), and [`SpliceError::Write`]
/// if `out` rejects a write. Output written before the failure is left as is.
pub fn splice<S, C, W>(mut source: S, mut content: C, mut out: W) -> Result<SpliceStats, SpliceError>
where
    S: BufRead,
    C: BufRead,
    W: Write,
{
    let mut stats = SpliceStats::default();
    let mut line = String::new();

    loop {
        line.clear();
        let read = source.read_line(&mut line).map_err(SpliceError::ReadSource)?;
        if read == 0 {
            break;
        }
        stats.source_lines += 1;

        if !is_sentinel_line(&line) {
            trace!("copying source line {}", stats.source_lines);
            out.write_all(line.as_bytes()).map_err(SpliceError::Write)?;
            continue;
        }

        stats.sentinels += 1;
        debug!("sentinel found on source line {}", stats.source_lines);
        let emitted = emit_content(&mut content, &mut out)?;
        if emitted == 0 {
            debug!("README stream had no lines left for sentinel {}", stats.sentinels);
        }
        stats.content_lines += emitted;
        out.write_all(TERMINATOR_LINE.as_bytes())
            .map_err(SpliceError::Write)?;
    }

    out.flush().map_err(SpliceError::Write)?;
    Ok(stats)
}

/// Writes the rest of `content` as quoted lines and returns how many were written.
fn emit_content<C: BufRead, W: Write>(content: &mut C, out: &mut W) -> Result<usize, SpliceError> {
    let mut emitted = 0;
    let mut line = String::new();
    loop {
        line.clear();
        let read = content.read_line(&mut line).map_err(SpliceError::ReadReadme)?;
        if read == 0 {
            return Ok(emitted);
        }
        writeln!(out, "{}", quote_line(&line)).map_err(SpliceError::Write)?;
        emitted += 1;
    }
}

/// Opens both documents and splices them into `out`.
///
/// Both paths are opened before anything is written, so a bad README path
/// is reported even when the source has no sentinel.
///
/// # Errors
///
/// Returns [`SpliceError::Open`] if either path is missing, unreadable, or a
/// directory, plus any error [`splice`] returns.
pub fn splice_files<P, Q, W>(source_path: P, readme_path: Q, out: W) -> Result<SpliceStats, SpliceError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    W: Write,
{
    let source = open_input(source_path.as_ref())?;
    let readme = open_input(readme_path.as_ref())?;
    splice(source, readme, out)
}

fn open_input(path: &Path) -> Result<BufReader<File>, SpliceError> {
    let open_error = |source: io::Error| SpliceError::Open {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(open_error)?;
    let metadata = file.metadata().map_err(open_error)?;
    if metadata.is_dir() {
        return Err(open_error(io::Error::new(
            io::ErrorKind::Other,
            "is a directory",
        )));
    }
    Ok(BufReader::new(file))
}
