use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn load_fixture(file: &str) -> String {
    std::fs::read_to_string(fixture_path(file)).expect("failed to read fixture")
}

pub fn b64(input: impl AsRef<[u8]>) -> String {
    STANDARD.encode(input)
}

/// Builds a single `<item>` element of a session export.
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    url: String,
    method: String,
    path: String,
    request: String,
    response: String,
    mime_type: String,
    status: u16,
}

impl ItemBuilder {
    pub fn new(request: &str) -> Self {
        Self {
            url: "http://example.com/".to_string(),
            method: "GET".to_string(),
            path: "/".to_string(),
            request: b64(request),
            response: b64("HTTP/1.1 200 OK\r\n\r\n"),
            mime_type: String::new(),
            status: 200,
        }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    pub fn method(mut self, method: &str) -> Self {
        self.method = method.to_string();
        self
    }

    /// Raw base64 text, used as-is.
    pub fn encoded_request(mut self, encoded: &str) -> Self {
        self.request = encoded.to_string();
        self
    }

    pub fn response_bytes(mut self, bytes: &[u8]) -> Self {
        self.response = b64(bytes);
        self
    }

    pub fn mime_type(mut self, mime: &str) -> Self {
        self.mime_type = mime.to_string();
        self
    }

    pub fn to_xml(&self) -> String {
        format!(
            "<item>\
             <time>Mon Jan 01 10:00:00 UTC 2024</time>\
             <url><![CDATA[{url}]]></url>\
             <host ip=\"127.0.0.1\">example.com</host>\
             <port>80</port>\
             <protocol>http</protocol>\
             <method><![CDATA[{method}]]></method>\
             <path><![CDATA[{path}]]></path>\
             <extension>null</extension>\
             <request base64=\"true\"><![CDATA[{request}]]></request>\
             <status>{status}</status>\
             <responselength>0</responselength>\
             <mimetype>{mime}</mimetype>\
             <response base64=\"true\"><![CDATA[{response}]]></response>\
             <comment></comment>\
             </item>",
            url = self.url,
            method = self.method,
            path = self.path,
            request = self.request,
            status = self.status,
            mime = self.mime_type,
            response = self.response,
        )
    }
}

pub fn envelope(items: &[ItemBuilder]) -> String {
    let body: String = items.iter().map(ItemBuilder::to_xml).collect();
    format!("<?xml version=\"1.0\"?>\n<items burpVersion=\"test\">{body}</items>")
}
