use crate::envelope::EnvelopeError;
use crate::envelope::types::{Item, Items, Text};
use crate::record::RawRecord;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::Read;
use std::str::FromStr;

/// Name of the document element of a session export.
pub const ROOT_ELEMENT: &str = "items";

/// Reads the whole stream and parses it as a session export.
pub fn read_envelope<R: Read>(mut reader: R) -> Result<Vec<RawRecord>, EnvelopeError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(EnvelopeError::Read)?;

    parse_envelope(&String::from_utf8(bytes)?)
}

/// Parses a session export into raw records, in document order.
pub fn parse_envelope(xml: &str) -> Result<Vec<RawRecord>, EnvelopeError> {
    check_root(xml)?;
    let items: Items = quick_xml::de::from_str(xml)?;

    items
        .items
        .into_iter()
        .enumerate()
        .map(|(index, item)| into_raw_record(index, item))
        .collect()
}

/// Fails when the document element is anything but `<items>`. Documents
/// without an element or with broken markup are left to the deserializer,
/// which reports them.
fn check_root(xml: &str) -> Result<(), EnvelopeError> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e) | Event::Empty(e)) => {
                let name = e.name();
                if name.as_ref() == ROOT_ELEMENT.as_bytes() {
                    return Ok(());
                }
                return Err(EnvelopeError::UnexpectedRoot {
                    found: String::from_utf8_lossy(name.as_ref()).into_owned(),
                });
            }
            Ok(Event::Eof) | Err(_) => return Ok(()),
            Ok(_) => {}
        }
    }
}

fn into_raw_record(index: usize, item: Item) -> Result<RawRecord, EnvelopeError> {
    Ok(RawRecord {
        port: number(index, "port", &item.port)?,
        status: number(index, "status", &item.status)?,
        response_length: number(index, "responselength", &item.response_length)?,
        time: item.time.value,
        url: item.url.value,
        host: item.host.value,
        protocol: item.protocol.value,
        method: item.method.value,
        path: item.path.value,
        extension: item.extension.value,
        request: item.request.value,
        mime_type: item.mime_type.value,
        response: item.response.value,
        comment: item.comment.value,
    })
}

/// Integer element content; surrounding whitespace is ignored and an empty
/// element reads as zero.
fn number<T: FromStr + Default>(
    index: usize,
    field: &'static str,
    text: &Text,
) -> Result<T, EnvelopeError> {
    let value = text.value.trim();
    if value.is_empty() {
        return Ok(T::default());
    }

    value.parse().map_err(|_| EnvelopeError::InvalidNumber {
        index,
        field,
        value: value.to_string(),
    })
}
