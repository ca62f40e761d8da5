// crates/readme_marker/src/lib.rs

//! Fixed literals shared by the README splicing tool‑chain.

/// The placeholder a source file carries where the README belongs,
/// **without** the trailing newline.
pub const SENTINEL: &str = "\"<make, insert README here>\"";

/// Exact form of a sentinel line **with** its trailing newline (the
/// version the splicer compares each source line against).
pub const SENTINEL_LINE: &str = "\"<make, insert README here>\"\n";

/// Emitted after every spliced block: the literal `"\n"` on its own line.
pub const TERMINATOR_LINE: &str = "\"\\n\"\n";

/// True if `line` is exactly the sentinel followed by a single `\n`.
pub fn is_sentinel_line(line: &str) -> bool {
    line == SENTINEL_LINE
}
