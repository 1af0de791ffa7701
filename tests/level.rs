//! Tests for severity levels.

use gatelog::Level;
use gatelog::level::{self, INVALID};

#[test]
fn level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
    assert!(Level::Error < Level::None);
}

#[test]
fn level_ranks() {
    let ranks: Vec<i64> = Level::all().iter().map(|l| l.rank()).collect();
    assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
}

#[test]
fn level_display() {
    assert_eq!(Level::Debug.to_string(), "DEBUG");
    assert_eq!(Level::Info.to_string(), "INFO");
    assert_eq!(Level::Warn.to_string(), "WARN");
    assert_eq!(Level::Error.to_string(), "ERROR");
    assert_eq!(Level::None.to_string(), "NONE");
}

#[test]
fn to_string_known_ranks() {
    assert_eq!(level::to_string(0), "DEBUG");
    assert_eq!(level::to_string(3), "ERROR");
    assert_eq!(Level::name_of(4), "NONE");
}

#[test]
fn to_string_never_fails() {
    for rank in [-1, 5, 42, i64::MIN, i64::MAX] {
        assert_eq!(level::to_string(rank), INVALID);
    }
}

#[test]
fn level_from_str() {
    assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("off".parse::<Level>().unwrap(), Level::None);
}

#[test]
fn level_from_str_invalid() {
    let err = "loud".parse::<Level>().unwrap_err();
    assert_eq!(err.to_string(), "unknown log level: 'loud'");
}

#[test]
fn level_try_from_rank() {
    assert_eq!(Level::try_from(2).unwrap(), Level::Warn);
    assert!(matches!(
        Level::try_from(7),
        Err(gatelog::Error::InvalidLevel(rank)) if rank == "7"
    ));
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Warn);
}
