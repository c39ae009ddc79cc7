//! NDJSON event stream used by `--stream`.
//!
//! One command produces, in order: `start` (request identity), `progress`
//! (dataset loaded), one `chunk` per focus update or a single `chunk` with
//! the whole envelope, one `error` per envelope error, then `end`. `seq`
//! starts at 1 and increases by one per line.

use std::io::Write;

use focusline_core::{Envelope, EnvelopeError, EnvelopeMeta, UtcDateTime};
use serde::Serialize;
use serde_json::Value;

use crate::commands::ReplayStep;
use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamEventType {
    Start,
    Progress,
    Chunk,
    End,
    Error,
}

#[derive(Debug, Serialize)]
struct StreamEvent<'a, T> {
    event: StreamEventType,
    seq: u64,
    ts: UtcDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a EnvelopeError>,
}

#[derive(Debug, Serialize)]
struct StartData<'a> {
    request_id: &'a str,
    schema_version: &'a str,
    dataset: &'a str,
}

#[derive(Debug, Serialize)]
struct LoadedData {
    phase: &'static str,
    point_count: usize,
}

#[derive(Debug, Serialize)]
struct EndData {
    status: &'static str,
    warning_count: usize,
    error_count: usize,
}

pub struct NdjsonStreamWriter<W: Write> {
    writer: W,
    next_seq: u64,
}

impl<W: Write> NdjsonStreamWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            next_seq: 1,
        }
    }

    pub fn emit_start(&mut self, meta: &EnvelopeMeta) -> Result<(), CliError> {
        let data = StartData {
            request_id: &meta.request_id,
            schema_version: &meta.schema_version,
            dataset: &meta.dataset,
        };
        self.emit(StreamEventType::Start, Some(&data), None)
    }

    pub fn emit_loaded(&mut self, point_count: usize) -> Result<(), CliError> {
        let data = LoadedData {
            phase: "dataset_loaded",
            point_count,
        };
        self.emit(StreamEventType::Progress, Some(&data), None)
    }

    pub fn emit_update(&mut self, step: &ReplayStep) -> Result<(), CliError> {
        self.emit(StreamEventType::Chunk, Some(step), None)
    }

    pub fn emit_envelope(&mut self, envelope: &Envelope<Value>) -> Result<(), CliError> {
        self.emit(StreamEventType::Chunk, Some(envelope), None)
    }

    pub fn emit_error(&mut self, error: &EnvelopeError) -> Result<(), CliError> {
        self.emit::<Value>(StreamEventType::Error, None, Some(error))
    }

    pub fn emit_end(&mut self, envelope: &Envelope<Value>) -> Result<(), CliError> {
        let data = EndData {
            status: if envelope.errors.is_empty() { "ok" } else { "error" },
            warning_count: envelope.meta.warnings.len(),
            error_count: envelope.errors.len(),
        };
        self.emit(StreamEventType::End, Some(&data), None)
    }

    fn emit<T: Serialize>(
        &mut self,
        event: StreamEventType,
        data: Option<&T>,
        error: Option<&EnvelopeError>,
    ) -> Result<(), CliError> {
        let event = StreamEvent {
            event,
            seq: self.next_seq,
            ts: UtcDateTime::now(),
            data,
            error,
        };
        self.next_seq += 1;

        serde_json::to_writer(&mut self.writer, &event)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
