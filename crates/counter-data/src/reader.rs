//! Line-oriented reading of plain and compressed input files.
//!
//! The transport is declared by the caller ([`TransportKind`]); `Auto`
//! resolves it by peeking at the stream's magic bytes, never by looking at
//! the file name.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use counter_core::error::{Result, StatsError};
use counter_core::models::TransportKind;
use tracing::debug;

const BZIP2_MAGIC: &[u8] = b"BZh";
const ZSTD_MAGIC: &[u8] = &[0x28, 0xB5, 0x2F, 0xFD];

// ── Transport detection ───────────────────────────────────────────────────────

/// Resolve `Auto` by peeking at the first bytes of `reader`.
///
/// Nothing is consumed. Any other kind is returned unchanged.
pub fn resolve_transport<R: BufRead>(
    reader: &mut R,
    declared: TransportKind,
) -> io::Result<TransportKind> {
    if declared != TransportKind::Auto {
        return Ok(declared);
    }
    let head = reader.fill_buf()?;
    let kind = if head.starts_with(BZIP2_MAGIC) {
        TransportKind::Bzip2
    } else if head.starts_with(ZSTD_MAGIC) {
        TransportKind::Zstd
    } else {
        TransportKind::Plain
    };
    Ok(kind)
}

// ── LineSource ────────────────────────────────────────────────────────────────

/// Lazy, forward-only sequence of raw lines from one input.
///
/// Each item is the line's bytes without the terminating `\n`. The underlying
/// file is closed when the source is dropped.
pub struct LineSource {
    path: Option<PathBuf>,
    transport: TransportKind,
    reader: Box<dyn BufRead>,
    lines_read: usize,
}

impl LineSource {
    /// Open `path` and wrap it in the decoder for `transport`.
    pub fn open(path: &Path, transport: TransportKind) -> Result<Self> {
        let file_open = |source: io::Error| StatsError::FileOpen {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(file_open)?;
        let mut source = Self::from_reader(BufReader::new(file), transport).map_err(file_open)?;
        source.path = Some(path.to_path_buf());

        debug!(
            "Opened {} as {} (declared {})",
            path.display(),
            source.transport,
            transport
        );
        Ok(source)
    }

    /// Wrap an already-open reader.
    pub fn from_reader<R>(mut reader: R, transport: TransportKind) -> io::Result<Self>
    where
        R: BufRead + 'static,
    {
        let resolved = resolve_transport(&mut reader, transport)?;
        let reader: Box<dyn BufRead> = match resolved {
            TransportKind::Bzip2 => Box::new(BufReader::new(
                bzip2::bufread::MultiBzDecoder::new(reader),
            )),
            TransportKind::Zstd => Box::new(BufReader::new(
                zstd::stream::read::Decoder::with_buffer(reader)?,
            )),
            TransportKind::Plain | TransportKind::Auto => Box::new(reader),
        };

        Ok(Self {
            path: None,
            transport: resolved,
            reader,
            lines_read: 0,
        })
    }

    /// The concrete transport in use (never `Auto`).
    pub fn transport(&self) -> TransportKind {
        self.transport
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of lines yielded so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

impl Iterator for LineSource {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.last() == Some(&b'\n') {
                    line.pop();
                }
                self.lines_read += 1;
                Some(Ok(line))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl std::fmt::Debug for LineSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineSource")
            .field("path", &self.path)
            .field("transport", &self.transport)
            .field("lines_read", &self.lines_read)
            .finish()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    fn bzip2_bytes(data: &[u8]) -> Vec<u8> {
        let mut encoder = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    fn collect(source: LineSource) -> Vec<Vec<u8>> {
        source.map(|l| l.unwrap()).collect()
    }

    // ── resolve_transport ─────────────────────────────────────────────────────

    #[test]
    fn test_resolve_transport_sniffs_bzip2() {
        let mut reader = Cursor::new(bzip2_bytes(b"1\n"));
        let kind = resolve_transport(&mut reader, TransportKind::Auto).unwrap();
        assert_eq!(kind, TransportKind::Bzip2);
        // Peeking must not consume anything.
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_resolve_transport_sniffs_zstd() {
        let compressed = zstd::stream::encode_all(&b"1\n"[..], 3).unwrap();
        let mut reader = Cursor::new(compressed);
        let kind = resolve_transport(&mut reader, TransportKind::Auto).unwrap();
        assert_eq!(kind, TransportKind::Zstd);
    }

    #[test]
    fn test_resolve_transport_defaults_to_plain() {
        let mut reader = Cursor::new(b"12\n13\n".to_vec());
        let kind = resolve_transport(&mut reader, TransportKind::Auto).unwrap();
        assert_eq!(kind, TransportKind::Plain);

        let mut empty = Cursor::new(Vec::new());
        let kind = resolve_transport(&mut empty, TransportKind::Auto).unwrap();
        assert_eq!(kind, TransportKind::Plain);
    }

    #[test]
    fn test_resolve_transport_keeps_declared_kind() {
        let mut reader = Cursor::new(b"BZh-but-really-text".to_vec());
        let kind = resolve_transport(&mut reader, TransportKind::Plain).unwrap();
        assert_eq!(kind, TransportKind::Plain);
    }

    // ── LineSource ────────────────────────────────────────────────────────────

    #[test]
    fn test_plain_lines_without_trailing_newline() {
        let source =
            LineSource::from_reader(Cursor::new(b"1\n2\n3".to_vec()), TransportKind::Auto).unwrap();
        assert_eq!(collect(source), vec![b"1".to_vec(), b"2".to_vec(), b"3".to_vec()]);
    }

    #[test]
    fn test_plain_lines_keep_empty_lines() {
        let source =
            LineSource::from_reader(Cursor::new(b"1\n\n2\n".to_vec()), TransportKind::Plain).unwrap();
        assert_eq!(collect(source), vec![b"1".to_vec(), Vec::new(), b"2".to_vec()]);
    }

    #[test]
    fn test_lines_read_counter() {
        let mut source =
            LineSource::from_reader(Cursor::new(b"4\n5\n".to_vec()), TransportKind::Plain).unwrap();
        assert_eq!(source.lines_read(), 0);
        source.next();
        source.next();
        assert!(source.next().is_none());
        assert_eq!(source.lines_read(), 2);
    }

    #[test]
    fn test_open_bzip2_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "numbers.bin", &bzip2_bytes(b"7\n8\n9\n"));

        let source = LineSource::open(&path, TransportKind::Auto).unwrap();
        assert_eq!(source.transport(), TransportKind::Bzip2);
        assert_eq!(source.path(), Some(path.as_path()));
        assert_eq!(collect(source), vec![b"7".to_vec(), b"8".to_vec(), b"9".to_vec()]);
    }

    #[test]
    fn test_open_concatenated_bzip2_streams() {
        let dir = TempDir::new().unwrap();
        let mut bytes = bzip2_bytes(b"1\n2\n");
        bytes.extend(bzip2_bytes(b"3\n"));
        let path = write_file(dir.path(), "multi.bz2", &bytes);

        let source = LineSource::open(&path, TransportKind::Bzip2).unwrap();
        assert_eq!(collect(source).len(), 3);
    }

    #[test]
    fn test_open_zstd_file() {
        let dir = TempDir::new().unwrap();
        let compressed = zstd::stream::encode_all(&b"-1\n0\n1"[..], 3).unwrap();
        let path = write_file(dir.path(), "numbers.zst", &compressed);

        let source = LineSource::open(&path, TransportKind::Auto).unwrap();
        assert_eq!(source.transport(), TransportKind::Zstd);
        assert_eq!(collect(source), vec![b"-1".to_vec(), b"0".to_vec(), b"1".to_vec()]);
    }

    #[test]
    fn test_file_suffix_is_ignored() {
        let dir = TempDir::new().unwrap();
        // Plain text behind a compressed-looking name stays plain.
        let path = write_file(dir.path(), "numbers.txt.bz2", b"10\n20\n");

        let source = LineSource::open(&path, TransportKind::Auto).unwrap();
        assert_eq!(source.transport(), TransportKind::Plain);
        assert_eq!(collect(source).len(), 2);
    }

    #[test]
    fn test_open_missing_file() {
        let err = LineSource::open(
            Path::new("/tmp/does-not-exist-counter-test-xyz.txt"),
            TransportKind::Auto,
        )
        .unwrap_err();
        assert!(matches!(err, StatsError::FileOpen { .. }));
    }

    #[test]
    fn test_corrupt_bzip2_surfaces_io_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "broken.bz2", b"BZh9 definitely not bzip2 data");

        let mut source = LineSource::open(&path, TransportKind::Auto).unwrap();
        assert!(matches!(source.next(), Some(Err(_))));
    }
}
