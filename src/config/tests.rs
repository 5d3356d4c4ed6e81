use std::path::{Path, PathBuf};

use super::ops::config_path_from;
use super::*;

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join(CONFIG_FILE_NAME);
    std::fs::write(&path, content).unwrap();
    path
}

fn load(path: &Path) -> (Config, String) {
    let mut diagnostics = Vec::new();
    let config = Config::load_from(path, &mut diagnostics);
    (config, String::from_utf8(diagnostics).unwrap())
}

#[test]
fn test_default() {
    let config = Config::default();
    assert_eq!(config.terminal_name(), "gnome-terminal");
    assert!(config.display_name());
}

#[test]
fn test_empty_terminal_name_selects_default() {
    assert_eq!(Config::new("", false).terminal_name(), DEFAULT_TERMINAL);
    assert_eq!(Config::new("xterm", false).terminal_name(), "xterm");
}

#[test]
fn test_missing_file_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    let (config, diagnostics) = load(&dir.path().join(CONFIG_FILE_NAME));
    assert_eq!(config, Config::default());
    assert!(diagnostics.is_empty());
}

#[test]
fn test_unreadable_file_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    // A directory at the config path cannot be read as a file
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::create_dir(&path).unwrap();
    let (config, diagnostics) = load(&path);
    assert_eq!(config, Config::default());
    assert!(diagnostics.is_empty());

    let err = Config::read(&path).unwrap_err();
    assert!(!err.invalid);
}

#[test]
fn test_malformed_yaml_reports_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "terminal: [unclosed\n");
    let (config, diagnostics) = load(&path);
    assert_eq!(config, Config::default());
    assert_eq!(diagnostics.lines().count(), 1);
    assert_eq!(
        diagnostics,
        format!(
            "nautiterm: invalid configuration file at {}, falling back to gnome-terminal\n",
            path.display()
        )
    );
    assert!(Config::read(&path).unwrap_err().invalid);
}

#[test]
fn test_wrong_field_type_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "display-name: maybe\n");
    let (config, diagnostics) = load(&path);
    assert_eq!(config, Config::default());
    assert_eq!(diagnostics.lines().count(), 1);
}

#[test]
fn test_non_utf8_document_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, b"terminal: \xff\xfe xterm\n").unwrap();
    let (config, diagnostics) = load(&path);
    assert_eq!(config, Config::default());
    assert_eq!(diagnostics.lines().count(), 1);
    assert!(Config::read(&path).unwrap_err().invalid);
}

#[test]
fn test_non_mapping_document_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "- xterm\n- terminator\n");
    assert!(Config::read(&path).unwrap_err().invalid);
}

#[test]
fn test_terminal_and_display_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "terminal: terminator\ndisplay-name: false\n");
    let (config, diagnostics) = load(&path);
    assert_eq!(config.terminal_name(), "terminator");
    assert!(!config.display_name());
    assert!(diagnostics.is_empty());
}

#[test]
fn test_display_name_defaults_to_true() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "terminal: /usr/bin/xterm\n");
    let config = Config::read(&path).unwrap();
    assert_eq!(config.terminal_name(), "/usr/bin/xterm");
    assert!(config.display_name());
}

#[test]
fn test_blank_or_null_terminal_selects_default() {
    let dir = tempfile::tempdir().unwrap();
    for content in ["terminal: \"\"\n", "terminal: ~\n", "terminal:\n"] {
        let path = write_config(dir.path(), content);
        assert_eq!(Config::read(&path).unwrap().terminal_name(), DEFAULT_TERMINAL, "{content}");
    }
}

#[test]
fn test_empty_and_comment_only_documents() {
    let dir = tempfile::tempdir().unwrap();
    for content in ["", "# just a comment\n"] {
        let path = write_config(dir.path(), content);
        let (config, diagnostics) = load(&path);
        assert_eq!(config, Config::default());
        assert!(diagnostics.is_empty());
    }
}

#[test]
fn test_unknown_fields_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "terminal: xterm\ntheme: dark\nextra:\n  nested: 1\n");
    assert_eq!(Config::read(&path).unwrap().terminal_name(), "xterm");
}

#[test]
fn test_path_prefers_xdg_config_home() {
    let path = config_path_from(Some("/xdg".into()), Some("/home/u".into()));
    assert_eq!(path, Some(PathBuf::from("/xdg/nautiterm.yml")));
}

#[test]
fn test_path_falls_back_to_home_config() {
    let expected = Some(PathBuf::from("/home/u/.config/nautiterm.yml"));
    assert_eq!(config_path_from(None, Some("/home/u".into())), expected);
    assert_eq!(config_path_from(Some("".into()), Some("/home/u".into())), expected);
    assert_eq!(config_path_from(Some("relative".into()), Some("/home/u".into())), expected);
}

#[test]
fn test_path_without_home() {
    assert_eq!(config_path_from(None, None), None);
}

#[test]
fn test_serialized_form() {
    let yaml = serde_yaml::to_string(&Config::default()).unwrap();
    insta::assert_snapshot!(yaml, @r"
    terminal: gnome-terminal
    display-name: true
    ");
}
