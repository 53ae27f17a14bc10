//! Page environment helpers.

use crate::config::{CSRF_TOKEN_META, POST_URL_META, PageConfig};
use crate::error::{ConfigError, MountError};
use web_sys::{Document, Element, HtmlCollection};

pub(crate) fn document() -> Result<Document, MountError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(MountError::Document)
}

/// Read the endpoint and token the server rendered into `<meta>` tags.
pub(crate) fn page_config(document: &Document) -> Result<PageConfig, ConfigError> {
    let post_url = meta_content(document, POST_URL_META).unwrap_or_default();
    let csrf_token = meta_content(document, CSRF_TOKEN_META).unwrap_or_default();
    PageConfig::new(&post_url, &csrf_token)
}

fn meta_content(document: &Document, name: &str) -> Option<String> {
    document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()??
        .get_attribute("content")
}

/// Every element carrying `class`, in document order.
pub(crate) fn elements_by_class(document: &Document, class: &str) -> Vec<Element> {
    collect(&document.get_elements_by_class_name(class))
}

fn collect(collection: &HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|index| collection.item(index))
        .collect()
}
