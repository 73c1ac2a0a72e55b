//! Escaping and link building shared by the section renderers.

use storefront_search::search::FilterSelection;

/// Escape text for use in HTML bodies and double-quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Form-encode a query string component.
pub fn urlencoding_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            ' ' => result.push('+'),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

/// Link to the results page for `query` under `filters`.
///
/// Parameters follow the search form: `q`, repeated `brand`, `cpu`, `price`.
pub fn search_href(query: &str, filters: &FilterSelection) -> String {
    let mut params = vec![format!("q={}", urlencoding_encode(query))];
    params.extend(
        filters
            .brands
            .iter()
            .map(|b| format!("brand={}", urlencoding_encode(b))),
    );
    if let Some(cpu) = &filters.cpu {
        params.push(format!("cpu={}", urlencoding_encode(cpu)));
    }
    if let Some(range) = &filters.price_range {
        params.push(format!("price={}", range));
    }
    format!("/search?{}", params.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_search::search::{FilterAction, PriceRange};

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">O'Neil & co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;O&#39;Neil &amp; co&lt;/a&gt;"
        );
    }

    #[test]
    fn test_urlencoding_encode_thai() {
        assert_eq!(urlencoding_encode("rtx 4060"), "rtx+4060");
        assert_eq!(urlencoding_encode("ก"), "%E0%B8%81");
        assert_eq!(urlencoding_encode("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn test_search_href() {
        let filters = FilterSelection::default()
            .apply(FilterAction::ToggleBrand("MSI".into()))
            .apply(FilterAction::ToggleBrand("HP".into()))
            .apply(FilterAction::SetPriceRange(PriceRange::new(0, 10000).unwrap()));
        assert_eq!(
            search_href("gaming laptop", &filters),
            "/search?q=gaming+laptop&brand=HP&brand=MSI&price=0-10000"
        );
    }
}
