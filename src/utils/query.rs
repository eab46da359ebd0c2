/// Arma el query string de un request GET.
pub fn query_string(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

// percent-encoding de los caracteres fuera del set no-reservado;
// alcanza para ids y texto de búsqueda
fn encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_pairs_with_ampersand() {
        let qs = query_string(&[
            ("limit", "20".to_string()),
            ("page", "1".to_string()),
            ("search", "green".to_string()),
        ]);
        assert_eq!(qs, "limit=20&page=1&search=green");
    }

    #[test]
    fn encodes_reserved_characters() {
        let qs = query_string(&[("search", "green valley & co".to_string())]);
        assert_eq!(qs, "search=green%20valley%20%26%20co");
    }

    #[test]
    fn encodes_non_ascii_as_utf8_bytes() {
        let qs = query_string(&[("search", "société".to_string())]);
        assert_eq!(qs, "search=soci%C3%A9t%C3%A9");
    }

    #[test]
    fn empty_params_yield_empty_string() {
        assert_eq!(query_string(&[]), "");
    }
}
