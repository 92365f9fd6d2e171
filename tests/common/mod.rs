//! Synthetic search pages for integration tests.
//!
//! Pages mirror the upstream shape: an `AF_initDataCallback` script whose
//! data array holds the entry list at `[56][1][0][0][1][0]`.

#![allow(dead_code)]

use rs_imagesearch::extract::{RESULT_KEY, SOURCE_KEY};
use serde_json::{json, Value};

/// Details payload for one image.
pub fn details(asset: &str, source: &str, host: &str) -> Value {
    let mut source_info = vec![Value::Null; 18];
    source_info[2] = json!(source);
    source_info[17] = json!(host);

    let mut details = vec![Value::Null; 10];
    details[1] = json!([0, "thumb"]);
    details[3] = json!([asset, 768, 1024]);
    details[9] = json!({ SOURCE_KEY: source_info, "2008": [null, "caption"] });
    Value::Array(details)
}

/// Candidate entry wrapping a details payload (or null).
pub fn entry(details: Value) -> Value {
    json!([[{ RESULT_KEY: [null, details] }], null, "meta"])
}

/// Entry for the `n`th image on `host`.
pub fn image_entry(n: usize, host: &str) -> Value {
    entry(details(
        &format!("https://{host}/images/{n}.jpg"),
        &format!("https://{host}/articles/{n}"),
        host,
    ))
}

/// Entry whose details slot is null.
pub fn empty_entry() -> Value {
    entry(Value::Null)
}

/// Root data array with `entries` placed at the entry-list path.
pub fn data_tree(entries: Vec<Value>) -> Value {
    let mut root = vec![Value::Null; 60];
    root[0] = json!("ds:1");
    root[56] = json!([null, [[[null, [entries]]]]]);
    Value::Array(root)
}

fn script(key: &str, data: &str) -> String {
    format!("<script nonce=\"x\">AF_initDataCallback({{key: '{key}', hash: '2', data:{data}, sideChannel: {{}}}});</script>")
}

/// Full page embedding `tree`, preceded by an unrelated dataset with the same marker.
pub fn page_from_tree(tree: &Value) -> String {
    format!(
        "<!doctype html><html><head><title>results</title>{}</head><body><div id=\"search\"></div>{}</body></html>",
        script("ds:0", "[[\"decoy\"],null]"),
        script("ds:1", &tree.to_string()),
    )
}

/// Page with the given entries.
pub fn page(entries: Vec<Value>) -> String {
    page_from_tree(&data_tree(entries))
}

/// Page whose data block is HTML-escaped the way upstream serves it.
pub fn escaped_page(entries: Vec<Value>) -> String {
    let data = data_tree(entries)
        .to_string()
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;");
    format!("<html><body>{}</body></html>", script("ds:1", &data))
}

/// Five entries on distinct hosts, the third with a null details slot.
pub fn five_entry_page() -> String {
    page(vec![
        image_entry(1, "one.example"),
        image_entry(2, "two.example"),
        empty_entry(),
        image_entry(4, "four.example"),
        image_entry(5, "five.example"),
    ])
}
