//! Cookie lookup used to fetch the CSRF token.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Find `name` in a `document.cookie`-style string and return its decoded
/// value.  The first matching entry wins; entries are `;`-separated and may
/// carry surrounding whitespace.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|entry| entry.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| match urlencoding::decode(raw) {
            Ok(decoded) => decoded.into_owned(),
            // Malformed escape or invalid UTF-8: hand back the raw text.
            Err(_) => raw.to_string(),
        })
}

/// Look up a cookie on the current document.
pub fn document_cookie(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html: HtmlDocument = document.dyn_into().ok()?;
    let cookies = html.cookie().ok()?;
    cookie_value(&cookies, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn finds_value_among_neighbours() {
        let jar = "sessionid=abc; csrftoken=Tok%2Fen%3D; theme=dark";
        assert_eq!(cookie_value(jar, "csrftoken").as_deref(), Some("Tok/en="));
        assert_eq!(cookie_value(jar, "theme").as_deref(), Some("dark"));
        assert_eq!(cookie_value(jar, "missing"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }

    #[wasm_bindgen_test]
    fn prefix_names_do_not_match() {
        // `csrftoken2` must not satisfy a lookup for `csrftoken`.
        let jar = "csrftoken2=wrong;csrftoken=right";
        assert_eq!(cookie_value(jar, "csrftoken").as_deref(), Some("right"));
        assert_eq!(cookie_value("xcsrftoken=1", "csrftoken"), None);
    }

    #[wasm_bindgen_test]
    fn first_entry_wins_and_empty_value_is_present() {
        assert_eq!(cookie_value("a=1; a=2", "a").as_deref(), Some("1"));
        assert_eq!(cookie_value("a=; b=2", "a").as_deref(), Some(""));
    }

    #[wasm_bindgen_test]
    fn malformed_escape_returned_raw() {
        assert_eq!(cookie_value("a=%E0%A4%A", "a").as_deref(), Some("%E0%A4%A"));
    }

    #[wasm_bindgen_test]
    fn reads_document_cookie() {
        let doc: HtmlDocument = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .dyn_into()
            .unwrap();
        doc.set_cookie("csrftoken=from-document; path=/").unwrap();
        assert_eq!(document_cookie("csrftoken").as_deref(), Some("from-document"));
    }

    #[wasm_bindgen_test]
    fn lookup_ignores_surrounding_cookies() {
        let mut runner = proptest::test_runner::TestRunner::default();
        let strategy = (
            prop::collection::vec(("[a-z]{1,8}", "[a-zA-Z0-9]{0,12}"), 0..6),
            prop::collection::vec(("[a-z]{1,8}", "[a-zA-Z0-9]{0,12}"), 0..6),
            "[a-zA-Z0-9 /=]{0,16}",
            " {0,2}",
        );

        runner
            .run(&strategy, |(before, after, value, pad)| {
                let name = "csrftoken";
                let mut parts: Vec<String> = before
                    .iter()
                    .map(|(k, v)| format!("{}{}={}", pad, k, v))
                    .collect();
                parts.push(format!("{}{}={}", pad, name, urlencoding::encode(&value)));
                parts.extend(after.iter().map(|(k, v)| format!("{}{}={}", pad, k, v)));

                let jar = parts.join(";");
                prop_assert_eq!(cookie_value(&jar, name), Some(value.clone()));
                Ok(())
            })
            .expect("property test failed");
    }
}
