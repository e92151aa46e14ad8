use std::collections::HashMap;

/// Canonical form of a header name: the first letter and every letter after
/// a hyphen upper-cased, the rest lower-cased (`content-type` becomes
/// `Content-Type`). Names with bytes outside the token set come back as-is.
pub fn canonical_header_name(name: &str) -> String {
    if !name.bytes().all(is_token_byte) {
        return name.to_string();
    }

    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}

/// Renders one `Name: Value` line per header occurrence.
///
/// Names are ordered by first appearance. Later occurrences of a name are
/// pulled up next to the first one and keep their relative order.
pub(crate) fn flatten_headers(headers: &[(String, String)]) -> Vec<String> {
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for (name, value) in headers {
        let (name, value) = (name.as_str(), value.as_str());
        match index.get(name) {
            Some(&i) => groups[i].1.push(value),
            None => {
                index.insert(name, groups.len());
                groups.push((name, vec![value]));
            }
        }
    }

    groups
        .into_iter()
        .flat_map(|(name, values)| values.into_iter().map(move |v| format!("{name}: {v}")))
        .collect()
}

pub(crate) fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}
