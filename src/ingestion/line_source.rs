use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// Open `path` and yield its lines in file order, without line terminators.
///
/// Failing to open returns the I/O error directly. Read and UTF-8 decoding
/// failures show up as `Err` items; callers stop at the first one.
pub fn read_lines(path: &Path) -> Result<impl Iterator<Item = Result<String>> + use<>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file).lines().map(|line| Ok(line?)))
}

/// Async counterpart of [`read_lines`]: poll with `next_line().await`.
#[cfg(feature = "async")]
pub async fn read_lines_async(
    path: &Path,
) -> Result<tokio::io::Lines<tokio::io::BufReader<tokio::fs::File>>> {
    use tokio::io::AsyncBufReadExt;

    let file = tokio::fs::File::open(path).await?;
    Ok(tokio::io::BufReader::new(file).lines())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::ErrorKind;

    use super::*;
    use crate::error::MtlError;

    #[test]
    fn yields_lines_in_order_without_terminators() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a.mtl");
        fs::write(&path, "newmtl a\r\nKd 1 1 1\n\nnewmtl b").unwrap();

        let lines: Vec<String> = read_lines(&path)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["newmtl a", "Kd 1 1 1", "", "newmtl b"]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let Err(err) = read_lines(Path::new("/nonexistent/dir/missing.mtl")) else {
            panic!("expected an error");
        };
        match err {
            MtlError::Io(e) => assert_eq!(e.kind(), ErrorKind::NotFound),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_utf8_surfaces_as_item_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.mtl");
        fs::write(&path, b"newmtl a\n\xff\xfe\xfd\n").unwrap();

        let mut lines = read_lines(&path).unwrap();
        assert_eq!(lines.next().unwrap().unwrap(), "newmtl a");
        assert!(lines.next().unwrap().is_err());
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn async_lines_match_sync() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a.mtl");
        fs::write(&path, "newmtl a\nNs 10\n").unwrap();

        let mut lines = read_lines_async(&path).await.unwrap();
        let mut out = Vec::new();
        while let Some(line) = lines.next_line().await.unwrap() {
            out.push(line);
        }
        assert_eq!(out, vec!["newmtl a", "Ns 10"]);
    }
}
