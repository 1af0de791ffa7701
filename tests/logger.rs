//! Tests for the emission gate, line format, and convenience wrappers.

mod common;

use common::{captured, registry};
use gatelog::{Error, Level, MemorySink, format_line, sink};

#[test]
fn new_logger_starts_at_warn() {
    let (logger, _) = captured(&registry(), "svc");
    assert_eq!(logger.threshold(), Level::Warn);
    assert_eq!(logger.name(), "svc");
}

#[test]
fn gate_matches_rank_comparison() {
    let messages = [Level::Debug, Level::Info, Level::Warn, Level::Error];
    for threshold in Level::all() {
        let (mut logger, sink) = captured(&registry(), "svc");
        logger.set_threshold(threshold);
        for level in messages {
            logger.print(level, "x").unwrap();
        }
        let expected: Vec<String> = messages
            .iter()
            .filter(|level| threshold <= **level)
            .map(|level| format_line("svc", *level, "x"))
            .collect();
        assert_eq!(sink.lines(), expected, "threshold {threshold}");
    }
}

#[test]
fn warn_threshold_drops_debug() {
    let (logger, sink) = captured(&registry(), "svc");
    logger.print(Level::Debug, "x").unwrap();
    assert!(sink.is_empty());
    logger.print(Level::Warn, "x").unwrap();
    logger.print(Level::Error, "x").unwrap();
    assert_eq!(sink.lines(), vec!["svc [WARN]: x", "svc [ERROR]: x"]);
}

#[test]
fn info_format_is_exact() {
    let (mut logger, sink) = captured(&registry(), "svc");
    logger.set_threshold(Level::Debug);
    logger.info("ready").unwrap();
    assert_eq!(sink.lines(), vec!["svc [INFO]: ready"]);
}

#[test]
fn shortcuts_use_their_levels() {
    let (mut logger, sink) = captured(&registry(), "app");
    logger.set_threshold(Level::Debug);
    logger.error("e").unwrap();
    logger.warn("w").unwrap();
    logger.info("i").unwrap();
    logger.debug("d").unwrap();
    assert_eq!(
        sink.lines(),
        vec![
            "app [ERROR]: e",
            "app [WARN]: w",
            "app [INFO]: i",
            "app [DEBUG]: d",
        ]
    );
}

#[test]
fn none_message_level_is_never_emitted() {
    let (mut logger, sink) = captured(&registry(), "svc");
    logger.set_threshold(Level::None);
    logger.print(Level::None, "x").unwrap();
    logger.set_threshold(Level::Debug);
    logger.print(Level::None, "x").unwrap();
    assert!(sink.is_empty());
}

#[test]
fn when_and_unless_mirror_each_other() {
    for condition in [true, false] {
        for level in [Level::Debug, Level::Warn, Level::Error] {
            let registry = registry();
            let (when_logger, when_sink) = captured(&registry, "svc");
            let (unless_logger, unless_sink) = captured(&registry, "svc");
            when_logger.when(!condition, level, "m").unwrap();
            unless_logger.unless(condition, level, "m").unwrap();
            assert_eq!(when_sink.lines(), unless_sink.lines());
        }
    }
}

#[test]
fn when_respects_condition_and_gate() {
    let (logger, sink) = captured(&registry(), "svc");
    logger.when(false, Level::Error, "skipped").unwrap();
    logger.when(true, Level::Info, "gated").unwrap();
    logger.when(true, Level::Error, "shown").unwrap();
    assert_eq!(sink.lines(), vec!["svc [ERROR]: shown"]);
}

#[test]
fn none_threshold_silences_everything() {
    let (mut logger, sink) = captured(&registry(), "svc");
    logger.set_threshold(Level::None);
    logger.error("a").unwrap();
    logger.warn("b").unwrap();
    logger.info("c").unwrap();
    logger.debug("d").unwrap();
    logger.print(Level::Error, "e").unwrap();
    assert!(sink.is_empty());

    logger.set_threshold(Level::Error);
    logger.error("back").unwrap();
    assert_eq!(sink.lines(), vec!["svc [ERROR]: back"]);
}

#[test]
fn set_sink_replaces_previous() {
    let (mut logger, old) = captured(&registry(), "svc");
    logger.warn("one").unwrap();

    let new = MemorySink::new();
    logger.set_sink(new.clone());
    logger.warn("two").unwrap();

    assert_eq!(old.lines(), vec!["svc [WARN]: one"]);
    assert_eq!(new.lines(), vec!["svc [WARN]: two"]);
}

#[test]
fn sink_errors_propagate() {
    let registry = registry();
    let failing = sink::from_fn(|_| Err(Error::Sink("disk full".to_string())));
    let logger = registry.create_logger_with_sink("svc", failing);

    let err = logger.error("boom").unwrap_err();
    assert!(matches!(err, Error::Sink(ref msg) if msg == "disk full"));

    // Gated calls never reach the sink.
    logger.info("quiet").unwrap();
}

#[test]
fn instances_are_independent() {
    let registry = registry();
    let (mut a, a_sink) = captured(&registry, "a");
    let (b, b_sink) = captured(&registry, "b");
    a.set_threshold(Level::Debug);

    a.debug("only a").unwrap();
    b.debug("dropped").unwrap();
    b.error("only b").unwrap();

    assert_eq!(a_sink.lines(), vec!["a [DEBUG]: only a"]);
    assert_eq!(b_sink.lines(), vec!["b [ERROR]: only b"]);
    assert_eq!(b.threshold(), Level::Warn);
}

#[test]
fn shared_names_are_allowed() {
    let registry = registry();
    let (first, first_sink) = captured(&registry, "dup");
    let (second, second_sink) = captured(&registry, "dup");
    first.warn("1").unwrap();
    second.warn("2").unwrap();
    assert_eq!(first_sink.lines(), vec!["dup [WARN]: 1"]);
    assert_eq!(second_sink.lines(), vec!["dup [WARN]: 2"]);
}
