use serde_derive::Serialize;
use std::{fmt, fs::File, io::Write, sync::Mutex};
use tracing::{
    field::{Field, Visit},
    span, Event, Metadata, Subscriber,
};

/// Thread safe logger that writes a record of every tableau event into a
/// given log file, one JSON document per line.
pub struct JsonLogger {
    log_file: Mutex<File>,
}

impl JsonLogger {
    pub fn new(log_file: File) -> Self {
        Self {
            log_file: Mutex::new(log_file),
        }
    }
}

impl Subscriber for JsonLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true // for now
    }

    fn new_span(&self, _span: &span::Attributes) -> span::Id {
        span::Id::from_u64(1)
    }

    fn record(&self, _span: &span::Id, _values: &span::Record) {}

    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

    fn event(&self, event: &Event) {
        let mut recorder = Recorder::new();
        event.record(&mut recorder);

        let known = matches!(
            recorder.event.as_deref(),
            Some(super::EXPAND) | Some(super::SPLIT) | Some(super::CLOSE) | Some(super::OPEN)
        );
        if !known {
            return;
        }

        if let Ok(record) = BranchRecord::try_from(recorder) {
            let json = serde_json::to_string(&record).unwrap();
            let mut file = self.log_file.lock().unwrap();
            writeln!(file, "{}", json).expect("unable to write the log record");
        }
    }

    fn enter(&self, _span: &span::Id) {}

    fn exit(&self, _span: &span::Id) {}
}

/// A record of a single tableau event and the formulae of the branch that
/// fired it.
#[derive(Serialize)]
struct BranchRecord {
    event: String,
    props: String,
}

impl BranchRecord {
    fn try_from(value: Recorder) -> Result<Self, ()> {
        match (value.event, value.props) {
            (Some(event), Some(props)) => Ok(BranchRecord { event, props }),
            _ => Err(()),
        }
    }
}

/// Generic trace visitor that collects the fields of a tableau event.
struct Recorder {
    event: Option<String>,
    props: Option<String>,
}

impl Recorder {
    fn new() -> Recorder {
        Recorder {
            event: None,
            props: None,
        }
    }
}

impl Visit for Recorder {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == super::EVENT_FIELD {
            self.event = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == super::PROPS_FIELD {
            self.props = Some(format!("{:?}", value));
        }
    }
}
