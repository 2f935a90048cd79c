//! Log output of enum types
//!
//! Kept in its own test binary: the logger is process-wide and the legacy
//! context notice fires at most once per process.

use log::{Level, LevelFilter, Log, Metadata, Record};
use octofhir_gql_types::{EnumType, EnumValue, QueryContext, Value};
use std::sync::Mutex;

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn count(level: Level, needle: &str) -> usize {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, message)| *l == level && message.contains(needle))
        .count()
}

fn enum_type(name: &str, values: &[(&str, i64)]) -> EnumType {
    let values = values
        .iter()
        .map(|&(value_name, internal)| EnumValue::with_internal(value_name, internal).unwrap());
    EnumType::new(name).unwrap().with_values(values).unwrap()
}

#[test]
fn test_log_records() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    // === Legacy no-context output coercion warns exactly once ===
    let color = enum_type("Color", &[("RED", 0), ("GREEN", 1), ("BLUE", 2)]);
    assert_eq!(count(Level::Warn, "without a query context"), 0);

    assert_eq!(color.coerce_result(&Value::from(0), None).unwrap(), "RED");
    assert_eq!(color.coerce_result(&Value::from(1), None).unwrap(), "GREEN");
    assert_eq!(count(Level::Warn, "without a query context"), 1);
    assert_eq!(count(Level::Warn, "coercing enum Color"), 1);

    let ctx = QueryContext::new();
    assert_eq!(color.coerce_result(&Value::from(2), Some(&ctx)).unwrap(), "BLUE");
    assert_eq!(count(Level::Warn, "without a query context"), 1);

    // === Sealing reports shared internal values ===
    let mut size = enum_type("Size", &[("SMALL", 1), ("TINY", 1), ("LARGE", 2)]);
    size.seal();
    assert_eq!(count(Level::Warn, "GQL0004"), 1);
    assert_eq!(
        count(Level::Warn, "Enum Size maps 1 to more than one name: SMALL, TINY"),
        1
    );
    assert_eq!(count(Level::Debug, "sealed enum Size with 3 values"), 1);

    // Sealing again is a no-op
    size.seal();
    assert_eq!(count(Level::Warn, "GQL0004"), 1);

    // No warnings for a type without shared values
    let mut color = color;
    color.seal();
    assert_eq!(count(Level::Warn, "GQL0004"), 1);
    assert_eq!(count(Level::Debug, "sealed enum Color with 3 values"), 1);
}
