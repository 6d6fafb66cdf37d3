//! Data Processor Module
//! Streams CSV lines into (x, y) samples while accumulating column statistics.

use crate::stats::{ColumnStats, StatsAccumulator};
use std::io::{self, BufRead};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// One valid input row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Output of a single read: samples in input order plus per-column stats.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseResult {
    pub samples: Vec<Sample>,
    pub stats_x: Option<ColumnStats>,
    pub stats_y: Option<ColumnStats>,
    pub rejected_line_count: usize,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Two-line statistics report, `None` when there are no samples.
    pub fn stats_report(&self, precision: usize) -> Option<String> {
        let (x, y) = (self.stats_x?, self.stats_y?);
        Some(format!(
            "{}\n{}",
            x.report("X", precision),
            y.report("Y", precision)
        ))
    }
}

/// Parses two-column numeric CSV text. Stateless: every call starts fresh.
pub struct CsvSeriesProcessor;

impl CsvSeriesProcessor {
    /// Parse a lazy sequence of lines in a single pass.
    ///
    /// Blank lines are skipped. A line is rejected when it has fewer than two
    /// comma-separated fields or when either of the first two fields is not a
    /// finite number. Fields beyond the second are ignored. A byte-order mark
    /// at the start of the first line is dropped.
    pub fn parse<I>(lines: I) -> ParseResult
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut samples = Vec::new();
        let mut acc_x = StatsAccumulator::new();
        let mut acc_y = StatsAccumulator::new();
        let mut rejected_line_count = 0;

        for (index, item) in lines.into_iter().enumerate() {
            let mut line = item.as_ref();
            if index == 0 {
                line = line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(line);
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match Self::parse_line(line) {
                Some(sample) => {
                    acc_x.push(sample.x);
                    acc_y.push(sample.y);
                    samples.push(sample);
                }
                None => rejected_line_count += 1,
            }
        }

        ParseResult {
            samples,
            stats_x: acc_x.finish(),
            stats_y: acc_y.finish(),
            rejected_line_count,
        }
    }

    /// Parse everything a reader yields.
    ///
    /// Lines are decoded lossily, so bytes that are not UTF-8 only make their
    /// own line fail to parse. A real I/O error aborts the read and no partial
    /// result is returned.
    pub fn parse_reader<R: BufRead>(reader: R) -> io::Result<ParseResult> {
        let mut read_error = None;
        let result = Self::parse(reader.split(b'\n').map_while(|line| match line {
            Ok(bytes) => Some(Self::decode_line(bytes)),
            Err(e) => {
                read_error = Some(e);
                None
            }
        }));

        match read_error {
            Some(e) => Err(e),
            None => Ok(result),
        }
    }

    fn decode_line(mut bytes: Vec<u8>) -> String {
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }

    fn parse_line(line: &str) -> Option<Sample> {
        let mut fields = line.split(',');
        let x = Self::parse_field(fields.next()?)?;
        let y = Self::parse_field(fields.next()?)?;
        Some(Sample::new(x, y))
    }

    fn parse_field(field: &str) -> Option<f64> {
        field
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn parse_text(text: &str) -> ParseResult {
        CsvSeriesProcessor::parse(text.lines())
    }

    #[test]
    fn test_three_rows() {
        let result = parse_text("1,2\n3,4\n5,6");
        assert_eq!(
            result.samples,
            vec![Sample::new(1.0, 2.0), Sample::new(3.0, 4.0), Sample::new(5.0, 6.0)]
        );
        assert_eq!(
            result.stats_x,
            Some(ColumnStats { min: 1.0, max: 5.0, mean: 3.0 })
        );
        assert_eq!(
            result.stats_y,
            Some(ColumnStats { min: 2.0, max: 6.0, mean: 4.0 })
        );
        assert_eq!(result.rejected_line_count, 0);
    }

    #[test]
    fn test_empty_fields_rejected() {
        let result = parse_text("1,2\n,\n3,4");
        assert_eq!(result.samples, vec![Sample::new(1.0, 2.0), Sample::new(3.0, 4.0)]);
        assert_eq!(result.rejected_line_count, 1);
    }

    #[test]
    fn test_empty_input() {
        let result = parse_text("");
        assert!(result.is_empty());
        assert!(result.stats_x.is_none());
        assert!(result.stats_y.is_none());
        assert_eq!(result.rejected_line_count, 0);
        assert!(result.stats_report(3).is_none());
    }

    #[test]
    fn test_non_numeric_field_rejected() {
        let result = parse_text("a,2\n1,b\n7,8");
        assert_eq!(result.samples, vec![Sample::new(7.0, 8.0)]);
        assert_eq!(result.rejected_line_count, 2);
    }

    #[test]
    fn test_single_field_rejected() {
        let result = parse_text("42\n1,2");
        assert_eq!(result.len(), 1);
        assert_eq!(result.rejected_line_count, 1);
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = parse_text("inf,1\n1,NaN\n-infinity,2\n3,4");
        assert_eq!(result.samples, vec![Sample::new(3.0, 4.0)]);
        assert_eq!(result.rejected_line_count, 3);
    }

    #[test]
    fn test_whitespace_and_extra_fields() {
        let result = parse_text("  1.5 , -2e3 ,ignored,9\n\t\n   \n0.25,  4  ");
        assert_eq!(
            result.samples,
            vec![Sample::new(1.5, -2000.0), Sample::new(0.25, 4.0)]
        );
        assert_eq!(result.rejected_line_count, 0);
    }

    #[test]
    fn test_accepted_plus_rejected_equals_nonblank_lines() {
        let text = "1,2\n\nx,y\n3\n4,5,6\n \n-1,-1\n,7\n";
        let nonblank = text.lines().filter(|l| !l.trim().is_empty()).count();
        let result = parse_text(text);
        assert_eq!(result.len() + result.rejected_line_count, nonblank);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_deterministic() {
        let text = "0.1,0.2\nbad\n0.3,0.4\n1e-3,5";
        assert_eq!(parse_text(text), parse_text(text));
    }

    #[test]
    fn test_stats_report() {
        let result = parse_text("1,2\n3,4\n5,6");
        assert_eq!(
            result.stats_report(3).unwrap(),
            "X stats: min=1.000, max=5.000, mean=3.000\n\
             Y stats: min=2.000, max=6.000, mean=4.000"
        );
    }

    #[test]
    fn test_parse_reader_crlf() {
        let reader = Cursor::new(b"1,2\r\n3,4\r\n".to_vec());
        let result = CsvSeriesProcessor::parse_reader(reader).unwrap();
        assert_eq!(result.samples, vec![Sample::new(1.0, 2.0), Sample::new(3.0, 4.0)]);
    }

    #[test]
    fn test_parse_reader_invalid_utf8_line_rejected() {
        let reader = Cursor::new(b"1,2\ncaf\xe9,x\n5\xff,6\n3,4\n".to_vec());
        let result = CsvSeriesProcessor::parse_reader(reader).unwrap();
        assert_eq!(result.samples, vec![Sample::new(1.0, 2.0), Sample::new(3.0, 4.0)]);
        assert_eq!(result.rejected_line_count, 2);
    }

    #[test]
    fn test_parse_reader_io_error_is_fatal() {
        struct FailingReader;
        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
            }
        }

        let err = CsvSeriesProcessor::parse_reader(std::io::BufReader::new(FailingReader))
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::Other);
    }

    #[test]
    fn test_leading_byte_order_mark() {
        let result = parse_text("\u{feff}1,2\n3,4\n");
        assert_eq!(result.samples, vec![Sample::new(1.0, 2.0), Sample::new(3.0, 4.0)]);
        assert_eq!(result.rejected_line_count, 0);

        let reader = Cursor::new(b"\xef\xbb\xbf1,2\r\n3,4\r\n".to_vec());
        let result = CsvSeriesProcessor::parse_reader(reader).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.rejected_line_count, 0);
    }

    #[test]
    fn test_byte_order_mark_only_stripped_from_first_line() {
        let result = parse_text("1,2\n\u{feff}3,4");
        assert_eq!(result.len(), 1);
        assert_eq!(result.rejected_line_count, 1);
    }

    #[test]
    fn test_parse_reader_chained_sources() {
        let reader = Cursor::new(b"1,1\n2,2\n".to_vec()).chain(Cursor::new(b"3,3".to_vec()));
        let result = CsvSeriesProcessor::parse_reader(std::io::BufReader::new(reader)).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result.stats_x.unwrap().mean, 2.0);
    }
}
