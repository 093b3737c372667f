pub mod subscriber;

pub const DEFAULT_JSON_LOG_FILE: &str = "log.json";

// tableau log record fields:
pub const EVENT_FIELD: &str = "event";
pub const PROPS_FIELD: &str = "props";

// log event types:
/// A node's formulae were trunk-expanded.
pub const EXPAND: &str = "@expand";

/// A case split created two children.
pub const SPLIT: &str = "@split";

/// A branch closed on a contradiction.
pub const CLOSE: &str = "@close";

/// A branch remained open.
pub const OPEN: &str = "@open";
