// src/csv.rs
use std::io::Write;

use ::csv::{QuoteStyle, WriterBuilder};

/* ---------------- Writing ---------------- */

/// Write headers (optionally) and rows as delimited text to any writer.
/// Fields are quoted only when they contain the separator, quotes or newlines.
pub fn write_rows<W: Write>(
    w: W,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    sep: u8,
) -> ::csv::Result<()> {
    let mut out = WriterBuilder::new()
        .delimiter(sep)
        .quote_style(QuoteStyle::Necessary)
        .flexible(true)
        .from_writer(w);

    if let Some(h) = headers {
        out.write_record(h)?;
    }
    for row in rows {
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}

/// Create a full export string from headers/rows.
pub fn to_export_string(
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    include_headers: bool,
    sep: u8,
) -> ::csv::Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    let h = if include_headers { headers.as_deref() } else { None };
    write_rows(&mut buf, h, rows, sep)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn quotes_only_when_needed() {
        let rows = vec![row(&["수원 KT", "a,b", "say \"hi\""])];
        let s = to_export_string(&None, &rows, false, b',').unwrap();
        assert_eq!(s, "수원 KT,\"a,b\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn tsv_with_headers() {
        let headers = Some(row(&["Player", "PTS"]));
        let rows = vec![row(&["허훈", "12"])];
        let s = to_export_string(&headers, &rows, true, b'\t').unwrap();
        assert_eq!(s, "Player\tPTS\n허훈\t12\n");
    }

    #[test]
    fn headers_can_be_skipped() {
        let headers = Some(row(&["Player"]));
        let s = to_export_string(&headers, &[row(&["허훈"])], false, b',').unwrap();
        assert_eq!(s, "허훈\n");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_returned() {
        let err = write_rows(Broken, None, &[row(&["허훈", "12"])], b',').unwrap_err();
        assert!(err.to_string().contains("disk full"));
    }
}
