//! Tests for TOML configuration.

use locyst::config::{SizeSetting, default_target_path};
use locyst::{Config, Error, Level, Logger};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.general.name, "LocystLogger");
    assert_eq!(config.parse_internal_level(), Level::Warn);
    assert_eq!(config.max_size_bytes().unwrap(), 20_560);
    assert!(!config.file.auto_flush);
    assert_eq!(config.file.format, "[{time}] [{scope}/{level}] {msg}{extras}");
    assert!(!config.rotation.unique_names);
    assert!(!config.rotation.compress);
    assert_eq!(config.target_paths(), vec![default_target_path()]);
}

#[test]
fn full_config_parses() {
    let config: Config = toml::from_str(
        r#"
[general]
name = "App"
internal_level = "debug"

[file]
targets = ["/tmp/a.txt", "/tmp/b.txt"]
max_size = "1K"
auto_flush = true
format = "{level} {msg}"

[rotation]
unique_names = true
compress = true
"#,
    )
    .unwrap();

    assert_eq!(config.general.name, "App");
    assert_eq!(config.parse_internal_level(), Level::Debug);
    assert_eq!(config.max_size_bytes().unwrap(), 1024);
    assert!(config.file.auto_flush);
    assert!(config.rotation.unique_names);
    assert!(config.rotation.compress);
    assert_eq!(
        config.target_paths(),
        vec![PathBuf::from("/tmp/a.txt"), PathBuf::from("/tmp/b.txt")]
    );
}

#[test]
fn max_size_accepts_integer() {
    let config: Config = toml::from_str("[file]\nmax_size = 500").unwrap();
    assert_eq!(config.file.max_size, SizeSetting::Bytes(500));
    assert_eq!(config.max_size_bytes().unwrap(), 500);
}

#[test]
fn invalid_max_size_is_an_error() {
    let config: Config = toml::from_str("[file]\nmax_size = \"lots\"").unwrap();
    assert!(matches!(config.max_size_bytes(), Err(Error::InvalidSize(s)) if s == "lots"));
}

#[test]
fn tilde_targets_expand() {
    let config: Config = toml::from_str("[file]\ntargets = [\"~/logs/app.txt\"]").unwrap();
    let paths = config.target_paths();
    assert!(!paths[0].to_string_lossy().starts_with('~'));
    assert!(paths[0].ends_with("logs/app.txt"));
}

#[test]
fn missing_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(&tmp.path().join("absent.toml")).unwrap();
    assert_eq!(config.general.name, "LocystLogger");
}

#[test]
fn syntax_error_is_reported() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.toml");
    fs::write(&path, "[file\nmax_size = ").unwrap();
    assert!(matches!(Config::load_from(&path), Err(Error::ConfigParse(_))));
}

#[test]
fn sources_add_targets() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("base.toml");
    let child = tmp.path().join("child.toml");

    fs::write(
        &base,
        format!(
            "source = \"{}\"\n\n[file]\ntargets = [\"/tmp/a.txt\"]\nmax_size = 10\n",
            child.display()
        ),
    )
    .unwrap();
    fs::write(
        &child,
        "[file]\ntargets = [\"/tmp/a.txt\", \"/tmp/b.txt\"]\nmax_size = 99\n",
    )
    .unwrap();

    let config = Config::load_from(&base).unwrap();
    assert_eq!(config.file.targets, ["/tmp/a.txt", "/tmp/b.txt"]);
    assert_eq!(config.max_size_bytes().unwrap(), 10);
}

#[test]
fn cyclic_sources_are_rejected() {
    let tmp = TempDir::new().unwrap();
    let a = tmp.path().join("a.toml");
    let b = tmp.path().join("b.toml");
    fs::write(&a, format!("source = \"{}\"\n", b.display())).unwrap();
    fs::write(&b, format!("source = \"{}\"\n", a.display())).unwrap();

    assert!(matches!(
        Config::load_from(&a),
        Err(Error::CyclicInclude(_))
    ));
}

#[test]
fn logger_from_config() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("out").join("log.txt");
    let path = tmp.path().join("locyst.toml");
    fs::write(
        &path,
        format!(
            "[general]\nname = \"Cfg\"\n\n[file]\ntargets = [\"{}\"]\nmax_size = \"2K\"\nauto_flush = true\n",
            target.display()
        ),
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let mut logger = Logger::from_config(&config).unwrap();
    assert_eq!(logger.name(), "Cfg");
    assert_eq!(logger.max_size(), 2048);
    assert!(logger.auto_flush());
    assert!(target.exists());

    logger.initialize();
    logger.info("configured").unwrap();
    let content = fs::read_to_string(&target).unwrap();
    assert!(content.lines().last().unwrap().ends_with("[Cfg/INFO] configured"));
}
