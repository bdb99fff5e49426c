//! Tests for merging flags over config.toml values.

use super::parse;
use linktab_core::config::LinktabConfig;

fn custom_config() -> LinktabConfig {
    LinktabConfig {
        primary_list_key: "items".to_string(),
        url_key_in_item: "href".to_string(),
    }
}

#[test]
fn config_values_used_without_flags() {
    let extract = parse(&["linktab", "x.json"]).extract_config(&custom_config());
    assert_eq!(extract.primary_list_key, "items");
    assert_eq!(extract.url_key_in_item, "href");
}

#[test]
fn flags_override_config() {
    let cli = parse(&["linktab", "--list-key", "Saved Links", "x.json"]);
    let extract = cli.extract_config(&custom_config());
    assert_eq!(extract.primary_list_key, "Saved Links");
    assert_eq!(extract.url_key_in_item, "href");

    let cli = parse(&["linktab", "--url-key", "link", "x.json"]);
    let extract = cli.extract_config(&LinktabConfig::default());
    assert_eq!(extract.primary_list_key, "Saved Media");
    assert_eq!(extract.url_key_in_item, "link");
}
