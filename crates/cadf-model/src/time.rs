// time.rs — Event time formatting.
//
// CADF event times carry an explicit numeric UTC offset — never a "Z"
// suffix. `2001-07-04T12:08:56.235+00:00`, not `...Z`. The event builder
// stores whatever string it is handed; this helper exists so callers with
// a chrono timestamp can produce a conforming string without thinking
// about the offset spelling.

use std::fmt;

use chrono::{DateTime, TimeZone};

/// Format a timestamp as a CADF event time: ISO-8601 with millisecond
/// precision and an explicit numeric offset.
pub fn format_event_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    // %:z always renders a numeric offset ("+00:00"), never "Z".
    time.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string()
}
