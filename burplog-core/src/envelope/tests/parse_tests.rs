use crate::envelope::{EnvelopeError, parse_envelope, read_envelope};
use pretty_assertions::assert_eq;

const EXPORT: &str = r#"<?xml version="1.0"?>
<!DOCTYPE items [
<!ELEMENT items (item*)>
<!ATTLIST items burpVersion CDATA "">
]>
<items burpVersion="2023.10" exportTime="Mon Jan 01 10:00:00 UTC 2024">
  <item>
    <time>Mon Jan 01 10:00:00 UTC 2024</time>
    <url><![CDATA[http://example.com/a%20b]]></url>
    <host ip="93.184.216.34">example.com</host>
    <port>80</port>
    <protocol>http</protocol>
    <method><![CDATA[GET]]></method>
    <path><![CDATA[/a%20b]]></path>
    <extension>null</extension>
    <request base64="true"><![CDATA[R0VUIC9hIEhUVFAvMS4xCkhvc3Q6IGEKCg==]]></request>
    <status>200</status>
    <responselength>17</responselength>
    <mimetype>HTML</mimetype>
    <response base64="true"><![CDATA[SFRUUC8xLjEgMjAwIE9LCgo=]]></response>
    <comment>first</comment>
  </item>
  <item>
    <time>Mon Jan 01 10:00:01 UTC 2024</time>
    <url><![CDATA[http://example.com/]]></url>
    <host ip="93.184.216.34">example.com</host>
    <port>443</port>
    <protocol>https</protocol>
    <method><![CDATA[POST]]></method>
    <path><![CDATA[/]]></path>
    <extension>null</extension>
    <request base64="true"></request>
    <status></status>
    <responselength></responselength>
    <mimetype></mimetype>
    <response base64="true"></response>
    <comment></comment>
  </item>
</items>
"#;

#[test]
fn parses_items_in_document_order() {
    // Act
    let records = parse_envelope(EXPORT).unwrap();

    // Assert
    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(first.time, "Mon Jan 01 10:00:00 UTC 2024");
    assert_eq!(first.url, "http://example.com/a%20b");
    assert_eq!(first.host, "example.com");
    assert_eq!(first.port, 80);
    assert_eq!(first.protocol, "http");
    assert_eq!(first.method, "GET");
    assert_eq!(first.path, "/a%20b");
    assert_eq!(first.extension, "null");
    assert_eq!(first.request, "R0VUIC9hIEhUVFAvMS4xCkhvc3Q6IGEKCg==");
    assert_eq!(first.status, 200);
    assert_eq!(first.response_length, 17);
    assert_eq!(first.mime_type, "HTML");
    assert_eq!(first.response, "SFRUUC8xLjEgMjAwIE9LCgo=");
    assert_eq!(first.comment, "first");

    assert_eq!(records[1].port, 443);
    assert_eq!(records[1].method, "POST");
}

#[test]
fn empty_elements_read_as_defaults() {
    let records = parse_envelope(EXPORT).unwrap();

    let second = &records[1];
    assert_eq!(second.request, "");
    assert_eq!(second.status, 0);
    assert_eq!(second.response_length, 0);
    assert_eq!(second.mime_type, "");
    assert_eq!(second.comment, "");
}

#[test]
fn missing_elements_read_as_defaults() {
    let records = parse_envelope("<items><item><port>8080</port></item></items>").unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].port, 8080);
    assert_eq!(records[0].url, "");
    assert_eq!(records[0].status, 0);
}

#[test]
fn envelope_without_items() {
    let records = parse_envelope("<items burpVersion=\"2023.10\"></items>").unwrap();

    assert!(records.is_empty());
}

#[test]
fn rejects_non_numeric_port() {
    // Act
    let err = parse_envelope("<items><item><port>eighty</port></item></items>").unwrap_err();

    // Assert
    match err {
        EnvelopeError::InvalidNumber {
            index,
            field,
            value,
        } => {
            assert_eq!(index, 0);
            assert_eq!(field, "port");
            assert_eq!(value, "eighty");
        }
        other => panic!("Expected InvalidNumber, got {:?}", other),
    }
}

#[test]
fn rejects_wrong_root_element() {
    // Act
    let err = parse_envelope("<html><body>hi</body></html>").unwrap_err();

    // Assert
    match err {
        EnvelopeError::UnexpectedRoot { found } => assert_eq!(found, "html"),
        other => panic!("Expected UnexpectedRoot, got {:?}", other),
    }
}

#[test]
fn rejects_empty_wrong_root_element() {
    let err = parse_envelope("<?xml version=\"1.0\"?><burp/>").unwrap_err();

    assert!(matches!(err, EnvelopeError::UnexpectedRoot { found } if found == "burp"));
}

#[test]
fn accepts_empty_items_element() {
    let records = parse_envelope("<?xml version=\"1.0\"?>\n<!-- export -->\n<items/>").unwrap();

    assert!(records.is_empty());
}

#[test]
fn plain_text_is_trimmed_and_cdata_is_kept() {
    // Act
    let records = parse_envelope(
        "<items><item><url><![CDATA[ http://a/ ]]></url><comment>  hi </comment></item></items>",
    )
    .unwrap();

    // Assert
    assert_eq!(records[0].url, " http://a/ ");
    assert_eq!(records[0].comment, "hi");
}

#[test]
fn rejects_unclosed_document() {
    let err = parse_envelope("<items><item><time>now</time>").unwrap_err();

    assert!(matches!(err, EnvelopeError::Xml(_)));
}

#[test]
fn rejects_empty_input() {
    assert!(parse_envelope("").is_err());
}

#[test]
fn rejects_non_utf8_stream() {
    let err = read_envelope(&[0x3c, 0xff, 0xfe, 0x3e][..]).unwrap_err();

    assert!(matches!(err, EnvelopeError::Utf8(_)));
}

#[test]
fn reads_from_any_reader() {
    let records = read_envelope(EXPORT.as_bytes()).unwrap();

    assert_eq!(records.len(), 2);
}
