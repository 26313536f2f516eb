use battleships::{init_logging, parse_level};
use log::LevelFilter;

#[test]
fn test_parse_level() {
    assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
    assert_eq!(parse_level(Some(" WARN ")), LevelFilter::Warn);
    assert_eq!(parse_level(Some("off")), LevelFilter::Off);
    assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
    assert_eq!(parse_level(None), LevelFilter::Info);
}

#[test]
fn test_init_twice_is_harmless() {
    init_logging();
    init_logging();
    log::info!("logger installed");
}
