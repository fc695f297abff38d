//! Tag/length/value log record decoding.

use hashbrown::HashMap;

use crate::qso::QsoRecord;

/// Tag names that may carry the other party's club number, checked in order.
pub const CLUB_ID_TAGS: &[&str] = &["SKCC", "APP_SKCCLOGGER_SKCC", "SRX_STRING"];

/// Tag names that may carry the key device descriptor, checked in order.
pub const KEY_TYPE_TAGS: &[&str] = &["APP_SKCCLOGGER_KEYTYPE", "MY_MORSE_KEY_TYPE", "KEY"];

/// Decodes raw log text into an ordered sequence of records.
///
/// The scanner never fails: anything that does not parse as a
/// `<TAG:LEN[:TYPE]>` marker or an `<EOR>`/`<EOH>` sentinel is skipped one
/// character at a time. A trailing record without `<EOR>` is still emitted
/// when it has a call field.
pub fn parse_records(input: &str) -> Vec<QsoRecord> {
    let bytes = input.as_bytes();
    let mut records = Vec::new();
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut pos = 0usize;

    while pos < bytes.len() {
        if bytes[pos] != b'<' {
            pos += 1;
            continue;
        }

        let Some(close) = find_close(bytes, pos + 1) else {
            pos += 1;
            continue;
        };
        let Some(inner) = input.get(pos + 1..close) else {
            pos += 1;
            continue;
        };

        if inner.eq_ignore_ascii_case("EOR") {
            if let Some(rec) = assemble(&fields) {
                records.push(rec);
            }
            fields.clear();
            pos = close + 1;
            continue;
        }

        if inner.eq_ignore_ascii_case("EOH") {
            // Header fields are discarded wholesale.
            fields.clear();
            pos = close + 1;
            continue;
        }

        let Some((tag, len)) = parse_marker(inner) else {
            pos += 1;
            continue;
        };

        let start = close + 1;
        let stop = start.saturating_add(len).min(bytes.len());
        let value = String::from_utf8_lossy(&bytes[start..stop]);
        let value = value.trim();
        if !value.is_empty() {
            fields.insert(tag, value.to_string());
        }
        pos = stop;
    }

    if let Some(rec) = assemble(&fields) {
        records.push(rec);
    }

    records
}

fn find_close(bytes: &[u8], from: usize) -> Option<usize> {
    bytes[from..].iter().position(|b| *b == b'>').map(|i| from + i)
}

/// Parses `TAG:LEN` or `TAG:LEN:TYPE` marker text; the type suffix is ignored.
fn parse_marker(inner: &str) -> Option<(String, usize)> {
    let mut parts = inner.splitn(3, ':');
    let tag = parts.next()?;
    let len = parts.next()?;

    if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    let len: usize = len.parse().ok()?;

    Some((tag.to_ascii_uppercase(), len))
}

fn assemble(fields: &HashMap<String, String>) -> Option<QsoRecord> {
    let call = fields.get("CALL")?;

    Some(QsoRecord {
        call: call.to_ascii_uppercase(),
        band: fields.get("BAND").cloned(),
        mode: fields.get("MODE").cloned(),
        date: fields.get("QSO_DATE").cloned(),
        time_on: fields.get("TIME_ON").cloned(),
        club_id: first_of(fields, CLUB_ID_TAGS),
        key_type: first_of(fields, KEY_TYPE_TAGS),
    })
}

fn first_of(fields: &HashMap<String, String>, tags: &[&str]) -> Option<String> {
    tags.iter().find_map(|tag| fields.get(*tag).cloned())
}
