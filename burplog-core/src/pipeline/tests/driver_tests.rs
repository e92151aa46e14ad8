use crate::decode::DecodeError;
use crate::output::{OutputError, RecordWriter};
use crate::pipeline::{RecordError, RunStats, process_record, run_pipeline};
use crate::record::{OutputRecord, RawRecord};
use crate::request::ParseError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use pretty_assertions::assert_eq;

/// Collects records in memory.
#[derive(Debug, Default)]
struct VecRecordWriter {
    records: Vec<OutputRecord>,
}

impl RecordWriter for VecRecordWriter {
    fn write_record(&mut self, record: &OutputRecord) -> Result<(), OutputError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), OutputError> {
        Ok(())
    }
}

fn b64(input: &[u8]) -> String {
    STANDARD.encode(input)
}

fn record(url: &str, request: &str, response: &str) -> RawRecord {
    RawRecord {
        time: "Mon Jan 01 10:00:00 UTC 2024".to_string(),
        url: url.to_string(),
        host: "a".to_string(),
        port: 80,
        protocol: "http".to_string(),
        method: "GET".to_string(),
        path: "/a".to_string(),
        request: request.to_string(),
        status: 200,
        response_length: 19,
        response: response.to_string(),
        ..Default::default()
    }
}

fn valid(url: &str) -> RawRecord {
    record(
        url,
        "R0VUIC9hIEhUVFAvMS4xCkhvc3Q6IGEKCg==",
        &b64(b"HTTP/1.1 200 OK\n\nok"),
    )
}

//-----------------------------------------------------------------------------
// process_record
//-----------------------------------------------------------------------------
#[test]
fn single_get_record_scenario() {
    // Arrange
    let raw = valid("a%2Fb");

    // Act
    let out = process_record(&raw).unwrap();

    // Assert
    assert_eq!(out.url, "a/b");
    assert_eq!(out.headers, "Host: a");
    assert_eq!(out.params, "");
    assert_eq!(out.request, "GET /a HTTP/1.1\nHost: a\n\n");
    assert_eq!(out.response, "HTTP/1.1 200 OK\n\nok");
    assert_eq!(out.mime_type, "UNKNOWN");
    assert_eq!(out.method, "GET");
    assert_eq!(out.path, "/a");
}

#[test]
fn empty_request_payload_is_skipped() {
    let raw = record("a", "", &b64(b"HTTP/1.1 200 OK\n\n"));

    assert_eq!(
        process_record(&raw),
        Err(RecordError::Request(DecodeError::EmptyPayload))
    );
}

#[test]
fn binary_response_is_skipped() {
    let raw = record(
        "a",
        "R0VUIC9hIEhUVFAvMS4xCkhvc3Q6IGEKCg==",
        &b64(&[0x89, b'P', b'N', b'G']),
    );

    assert_eq!(
        process_record(&raw),
        Err(RecordError::Response(DecodeError::BinaryPayload { byte: 0x89 }))
    );
}

#[test]
fn binary_request_is_skipped() {
    let raw = record("a", &b64(&[0x00, 0x01]), &b64(b"HTTP/1.1 200 OK\n\n"));

    assert!(matches!(
        process_record(&raw),
        Err(RecordError::Request(DecodeError::BinaryPayload { byte: 0 }))
    ));
}

#[test]
fn unparsable_request_is_skipped() {
    let raw = record("a", &b64(b"not an http request"), &b64(b"ok"));

    assert_eq!(
        process_record(&raw),
        Err(RecordError::Split(ParseError::TruncatedHead))
    );
}

#[test]
fn bad_url_escape_is_skipped() {
    let raw = valid("http://a/%zz");

    assert!(matches!(process_record(&raw), Err(RecordError::Url(_))));
}

#[test]
fn request_failure_is_reported_before_response_failure() {
    let raw = record("%zz", "", "");

    assert_eq!(process_record(&raw).unwrap_err().step(), "request");
}

//-----------------------------------------------------------------------------
// run_pipeline
//-----------------------------------------------------------------------------
#[test]
fn emits_valid_records_in_input_order() {
    // Arrange
    let records = vec![
        valid("first"),
        record("bad", "", ""),
        valid("second"),
        record("bin", &b64(&[0x00, 0xff]), &b64(b"x")),
        valid("third"),
    ];
    let mut writer = VecRecordWriter::default();

    // Act
    let stats = run_pipeline(records, &mut writer).unwrap();

    // Assert
    let urls: Vec<&str> = writer.records.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec!["first", "second", "third"]);
    assert_eq!(
        stats,
        RunStats {
            read: 5,
            emitted: 3,
            skipped_request: 2,
            ..Default::default()
        }
    );
}

#[test]
fn every_record_skipped_still_succeeds() {
    let mut writer = VecRecordWriter::default();

    let stats = run_pipeline(vec![record("a", "", "")], &mut writer).unwrap();

    assert!(writer.records.is_empty());
    assert_eq!(stats.read, 1);
    assert_eq!(stats.emitted, 0);
    assert_eq!(stats.skipped(), 1);
}

#[test]
fn skip_counts_by_step() {
    // Arrange
    let records = vec![
        record("a", "", "x"),
        record("a", "R0VUIC9hIEhUVFAvMS4xCkhvc3Q6IGEKCg==", ""),
        record("a", &b64(b"garbage"), &b64(b"x")),
        valid("%"),
    ];
    let mut writer = VecRecordWriter::default();

    // Act
    let stats = run_pipeline(records, &mut writer).unwrap();

    // Assert
    assert_eq!(stats.skipped_request, 1);
    assert_eq!(stats.skipped_response, 1);
    assert_eq!(stats.skipped_split, 1);
    assert_eq!(stats.skipped_url, 1);
    assert_eq!(stats.emitted, 0);
}

#[test]
fn running_twice_gives_identical_output() {
    let records = vec![valid("x%20y"), record("z", "", ""), valid("w")];

    let mut first = VecRecordWriter::default();
    let mut second = VecRecordWriter::default();
    run_pipeline(records.clone(), &mut first).unwrap();
    run_pipeline(records, &mut second).unwrap();

    assert_eq!(first.records, second.records);
}
