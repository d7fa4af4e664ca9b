use chrono::{Local, TimeZone};
use locyst::fmt::{FormatTemplate, FormatValues};
use locyst::{Extras, Level, LogRecord};

#[test]
fn default_template_matches_file_format() {
    let record = LogRecord {
        timestamp: Local.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap(),
        source: "Main".to_string(),
        level: Level::Warn,
        message: "disk low".to_string(),
        extras: Extras::new().arg("sda1").kv("free", "3%"),
    };

    assert_eq!(
        record.render(&FormatTemplate::default()),
        "[07:08:09] [Main/WARN] disk low sda1 free=3%"
    );
}

#[test]
fn date_placeholder() {
    let record = LogRecord {
        timestamp: Local.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap(),
        source: "S".to_string(),
        level: Level::Info,
        message: "m".to_string(),
        extras: Extras::new(),
    };
    let template = FormatTemplate::parse("{date} {time} {level}");
    assert_eq!(record.render(&template), "2024-05-06 07:08:09 INFO");
}

#[test]
fn render_values() {
    let template = FormatTemplate::parse("<{scope}> {msg}{extras}");
    let values = FormatValues::new().scope("X").msg("hello").extras(" k=v");
    assert_eq!(template.render(&values), "<X> hello k=v");
}
