use log::LevelFilter;
use spoken_time::config::LoggingConfig;
use spoken_time::logging::{apply_console_logging, console_logging_active, init_logger};

// The max level is process-wide, so the whole switch is exercised in one test.
#[test]
fn test_console_logging_switch() {
    let mut config = LoggingConfig { console_enabled: false, level: "info".to_string() };
    init_logger(&config);
    assert!(!console_logging_active());

    config.console_enabled = true;
    apply_console_logging(&config);
    assert_eq!(log::max_level(), LevelFilter::Info);
    assert!(console_logging_active());

    config.level = "trace".to_string();
    apply_console_logging(&config);
    assert_eq!(log::max_level(), LevelFilter::Trace);

    config.console_enabled = false;
    apply_console_logging(&config);
    assert_eq!(log::max_level(), LevelFilter::Off);

    // A second init must not panic
    init_logger(&config);
}
