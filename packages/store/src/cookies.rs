/// Read/clear access to browser cookies.
///
/// Session cookies are issued by the backend; the client only ever reads or
/// deletes them, so there is no setter.
pub trait CookieJar: Clone {
    fn get(&self, name: &str) -> Option<String>;

    fn remove(&self, name: &str);
}

/// Find `name` in a `document.cookie` style string (`"a=1; b=2"`).
///
/// The value is unquoted and percent-decoded. Malformed escapes are kept as-is.
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| decode_value(value))
        .filter(|value| !value.is_empty())
}

fn decode_value(raw: &str) -> String {
    let raw = raw
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(raw);
    urlencoding::decode(raw)
        .map(|v| v.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}
