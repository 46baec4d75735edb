// src/core/html.rs
//
// Thin helpers over the `scraper` DOM: the few queries the page specs need
// (find nodes by tag + attribute, read visible text, read an attribute).

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

/// Parse a whole page. Never fails; broken markup yields a best-effort tree.
pub fn parse_document(markup: &str) -> Html {
    Html::parse_document(markup)
}

/// Compile a selector known at build time.
/// Only call with literals; a bad literal is a programming error.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}

/// Visible text of an element, whitespace collapsed and trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Attribute value, trimmed. Present-but-blank counts as absent.
pub fn attr_of<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value()
        .attr(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// First descendant matching `sel`.
pub fn first<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_collapsed() {
        let doc = parse_document("<div id=x>  Jul 1, 2021\n   ~  <b>Jun 30, 2025</b> </div>");
        let div = doc.select(&selector("#x")).next().unwrap();
        assert_eq!(text_of(div), "Jul 1, 2021 ~ Jun 30, 2025");
    }

    #[test]
    fn blank_attr_is_absent() {
        let doc = parse_document(r#"<a id=a title="  ">x</a><a id=b title=" Lionel Messi ">y</a>"#);
        let a = doc.select(&selector("#a")).next().unwrap();
        let b = doc.select(&selector("#b")).next().unwrap();
        assert_eq!(attr_of(a, "title"), None);
        assert_eq!(attr_of(b, "title"), Some("Lionel Messi"));
        assert_eq!(attr_of(b, "href"), None);
    }
}
