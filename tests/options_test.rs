mod common;

use std::time::Duration;

use rs_imagesearch::{extract, extract_with_options, Options, Phase, DEFAULT_USER_AGENT};

#[test]
fn options_default_values_are_sensible() {
    let options = Options::default();
    assert_eq!(options.marker, "AF_initDataCallback");
    assert_eq!(options.script_close, "</script>");
    assert_eq!(options.trailing_trim, 20);
    assert_eq!(options.search_url, "https://www.google.com/search");
    assert_eq!(options.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(options.timeout, Duration::from_secs(30));
}

#[test]
fn options_struct_update_syntax_overrides_selected_fields_only() {
    let options = Options {
        timeout: Duration::from_secs(5),
        ..Options::default()
    };

    assert_eq!(options.timeout, Duration::from_secs(5));
    assert_eq!(options.trailing_trim, 20);
    assert_eq!(options.marker, "AF_initDataCallback");
}

#[test]
fn extract_with_options_respects_custom_markers_and_extract_remains_unchanged() {
    let tree = common::data_tree(vec![common::image_entry(1, "a.example")]);
    let page = format!("<script>window.__init({tree}, done);</script>");

    let custom = Options {
        marker: "window.__init".to_string(),
        trailing_trim: ", done);".len(),
        ..Options::default()
    };

    let records = extract_with_options(&page, 0, &custom).expect("expected Ok(_)");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].source_host(), "a.example");

    let err = extract(&page, 0).expect_err("default marker is absent");
    assert_eq!(err.phase(), Some(Phase::Locate));
}

#[test]
fn default_options_match_standard_page_trailer() {
    let page = common::page(vec![common::image_entry(1, "a.example")]);
    let records = extract_with_options(&page, 0, &Options::default()).expect("expected Ok(_)");
    assert_eq!(records, extract(&page, 0).expect("expected Ok(_)"));
}
