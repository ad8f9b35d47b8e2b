use std::fs;

use gallery_social::config::{Config, ConfigError};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.site.url, "http://localhost:1924");
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.reaction.animation_linger_ms, 1000);
    assert_eq!(config.share.popup_width, 600);
    assert_eq!(config.share.popup_height, 400);
    assert!(config.share.embed_enabled);
    assert_eq!(config.messages.share_text_for("Sunset"), "Check out this photo: Sunset");
    assert_eq!(config.share_targets().len(), 6);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[site]
url = "https://gallery.example.com"

[share]
popup_width = 800

[messages]
link_copied = "Link kopiert"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.site.url, "https://gallery.example.com");
    assert_eq!(config.site.name, "Gallery");
    assert_eq!(config.share.popup_width, 800);
    assert_eq!(config.share.popup_height, 400);
    assert_eq!(config.messages.link_copied, "Link kopiert");
    assert_eq!(config.messages.copy_failed, "Copy failed");
}

#[test]
fn test_custom_targets_replace_builtin() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[[share.targets]]
id = "mastodon"
label = "Mastodon"
template = "https://mastodon.social/share?text={text}%20{url}"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    let targets = config.share_targets();

    assert_eq!(targets.len(), 1);
    assert!(targets.get("mastodon").is_some());
    assert!(targets.get("twitter").is_none());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[site\nurl = ");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_empty_site_url_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[site]\nurl = \"\"\n");

    let err = Config::load_from(&path).unwrap_err();

    assert!(err.to_string().contains("site.url must not be empty"));
}

#[test]
fn test_zero_popup_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[share]\npopup_height = 0\n");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_duplicate_target_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[[share.targets]]
id = "x"
label = "X"
template = "https://x.com/intent/post?text={text}"

[[share.targets]]
id = "x"
label = "X again"
template = "https://x.com/intent/post?url={url}"
"#,
    );

    let err = Config::load_from(&path).unwrap_err();

    assert!(err.to_string().contains("Duplicate share target 'x'"));
}

#[test]
fn test_target_without_placeholder_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[[share.targets]]
id = "static"
label = "Static"
template = "https://example.com/share"
"#,
    );

    let err = Config::load_from(&path).unwrap_err();

    assert!(err.to_string().contains("template has no placeholder"));
}
