//! Shared fixtures: registries that ignore `GATELOG_STRICT` so results don't
//! depend on the environment the tests run in.

#![allow(dead_code)]

use gatelog::{Config, Logger, MemorySink, Registry};

pub fn registry_with(strict: bool) -> Registry {
    let mut config = Config::default();
    config.general.strict = Some(strict);
    Registry::from_config(config)
}

pub fn registry() -> Registry {
    registry_with(false)
}

pub fn captured(registry: &Registry, name: &str) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = registry.create_logger_with_sink(name, sink.clone());
    (logger, sink)
}
