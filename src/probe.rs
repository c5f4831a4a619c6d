//! The matrix-load collaborator seam.
//!
//! The harness never inspects matrix contents; it only needs to open a
//! file, learn how many bytes were materialized, and release the result
//! before the next trial. [`MatrixLoadProbe`] is that contract. A real
//! matrix-format reader plugs in behind it; the bundled [`RawFileProbe`]
//! reads the file sequentially to the end, which is exactly the I/O pattern
//! a full matrix load performs and keeps the shipped binary useful without
//! any format parser.

use std::fs;
use std::path::Path;

use crate::error::BenchmarkError;

/// An opaque loaded matrix, owned exclusively by one trial iteration.
///
/// Queried once for its byte size, then dropped before the next trial's
/// cache invalidation — a live handle could pin pages in cache and bias
/// the next measurement. Release is the handle's `Drop`.
pub trait MatrixHandle {
    /// Size in bytes of the loaded payload.
    fn byte_size(&self) -> u64;
}

/// Opens a matrix file and produces a loaded handle.
///
/// `load` is a synchronous, finite-duration call; the harness has no
/// timeout mechanism and relies on the operator to interrupt externally if
/// a load hangs.
pub trait MatrixLoadProbe {
    /// Handle type produced by a successful load.
    type Handle: MatrixHandle;

    /// Load the file at `path` from disk.
    fn load(&mut self, path: &Path) -> Result<Self::Handle, BenchmarkError>;
}

/// Default probe: reads the whole file into memory.
#[derive(Debug, Clone, Default)]
pub struct RawFileProbe;

impl RawFileProbe {
    /// Create the default whole-file probe.
    pub fn new() -> Self {
        Self
    }
}

/// Handle produced by [`RawFileProbe`]; owns the file contents until drop.
#[derive(Debug)]
pub struct RawFileHandle {
    contents: Vec<u8>,
}

impl MatrixHandle for RawFileHandle {
    fn byte_size(&self) -> u64 {
        self.contents.len() as u64
    }
}

impl MatrixLoadProbe for RawFileProbe {
    type Handle = RawFileHandle;

    fn load(&mut self, path: &Path) -> Result<Self::Handle, BenchmarkError> {
        let contents = fs::read(path).map_err(|source| BenchmarkError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(RawFileHandle { contents })
    }
}
