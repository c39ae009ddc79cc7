pub mod stream_writer;

use std::io::{self, Write};

use focusline_core::Envelope;
use serde_json::Value;

use self::stream_writer::NdjsonStreamWriter;
use crate::cli::OutputFormat;
use crate::commands::ReplayStep;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Ndjson => {
            let payload = serde_json::to_string(envelope)?;
            println!("{payload}");
        }
        OutputFormat::Table => {
            let stdout = io::stdout();
            render_table(envelope, &mut stdout.lock())?;
        }
    }

    Ok(())
}

pub fn render_stream(envelope: &Envelope<Value>, updates: &[ReplayStep]) -> Result<(), CliError> {
    let stdout = io::stdout();
    write_stream(envelope, updates, stdout.lock())
}

/// Writes the event sequence for one command.
///
/// Commands that produce focus updates get one `chunk` per update;
/// everything else gets the whole envelope as a single chunk.
fn write_stream<W: Write>(
    envelope: &Envelope<Value>,
    updates: &[ReplayStep],
    sink: W,
) -> Result<(), CliError> {
    let mut writer = NdjsonStreamWriter::new(sink);

    writer.emit_start(&envelope.meta)?;
    writer.emit_loaded(envelope.meta.point_count)?;

    if updates.is_empty() {
        writer.emit_envelope(envelope)?;
    } else {
        for step in updates {
            writer.emit_update(step)?;
        }
    }

    for error in &envelope.errors {
        writer.emit_error(error)?;
    }

    writer.emit_end(envelope)
}

fn render_table<W: Write>(envelope: &Envelope<Value>, out: &mut W) -> Result<(), CliError> {
    writeln!(out, "request_id  : {}", envelope.meta.request_id)?;
    writeln!(out, "schema      : {}", envelope.meta.schema_version)?;
    writeln!(out, "generated_at: {}", envelope.meta.generated_at)?;
    writeln!(out, "dataset     : {}", envelope.meta.dataset)?;
    writeln!(out, "points      : {}", envelope.meta.point_count)?;

    if !envelope.meta.warnings.is_empty() {
        writeln!(out, "warnings:")?;
        for warning in &envelope.meta.warnings {
            writeln!(out, "  - {warning}")?;
        }
    }

    if !envelope.data.is_null() {
        writeln!(out, "data:")?;
        let pretty_data = serde_json::to_string_pretty(&envelope.data)?;
        for line in pretty_data.lines() {
            writeln!(out, "  {line}")?;
        }
    }

    if !envelope.errors.is_empty() {
        writeln!(out, "errors:")?;
        for error in &envelope.errors {
            match error.line {
                Some(line) => writeln!(out, "  - {} (line {line}): {}", error.code, error.message)?,
                None => writeln!(out, "  - {}: {}", error.code, error.message)?,
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use focusline_core::{
        Domain, EnvelopeError, EnvelopeMeta, FocusUpdate, Selection, UtcDateTime, SCHEMA_VERSION,
    };
    use serde_json::json;

    fn envelope(errors: Vec<EnvelopeError>) -> Envelope<Value> {
        let meta = EnvelopeMeta::new("req-12345678", SCHEMA_VERSION, "prices.csv", 3)
            .expect("meta");
        Envelope::with_errors(meta, json!({ "focus": "full" }), errors).expect("envelope")
    }

    fn events(sink: &[u8]) -> Vec<Value> {
        std::str::from_utf8(sink)
            .expect("utf8")
            .lines()
            .map(|line| serde_json::from_str::<Value>(line).expect("json line"))
            .collect()
    }

    #[test]
    fn stream_emits_one_chunk_per_update() {
        let mut sink = Vec::<u8>::new();
        let overview = Domain::new(
            UtcDateTime::parse_month_year("Jan 2013").expect("month"),
            UtcDateTime::parse_month_year("Mar 2013").expect("month"),
        )
        .expect("domain");
        let steps = (1..=2)
            .map(|step| ReplayStep {
                step,
                gesture: String::from("clear"),
                update: FocusUpdate {
                    selection: Selection::Empty,
                    focus: overview,
                },
            })
            .collect::<Vec<_>>();

        write_stream(&envelope(Vec::new()), &steps, &mut sink).expect("stream");

        let kinds = events(&sink)
            .iter()
            .map(|event| event.get("event").cloned().unwrap_or(Value::Null))
            .collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                json!("start"),
                json!("progress"),
                json!("chunk"),
                json!("chunk"),
                json!("end")
            ]
        );
    }

    #[test]
    fn stream_without_updates_emits_the_envelope() {
        let mut sink = Vec::<u8>::new();

        write_stream(&envelope(Vec::new()), &[], &mut sink).expect("stream");

        let events = events(&sink);
        assert_eq!(events.len(), 4);
        assert_eq!(
            events[2].pointer("/data/meta/dataset"),
            Some(&Value::String("prices.csv".into()))
        );
    }

    #[test]
    fn stream_reports_load_errors() {
        let mut sink = Vec::<u8>::new();
        let error = EnvelopeError::new("row_invalid", "bad date")
            .expect("error")
            .with_line(3);

        write_stream(&envelope(vec![error]), &[], &mut sink).expect("stream");

        let events = events(&sink);
        let error_event = &events[3];
        assert_eq!(error_event.get("event"), Some(&Value::String("error".into())));
        assert_eq!(error_event.pointer("/error/line"), Some(&Value::from(3)));
        assert_eq!(
            events[4].pointer("/data/status"),
            Some(&Value::String("error".into()))
        );
    }

    #[test]
    fn table_lists_errors_with_their_line() {
        let mut out = Vec::<u8>::new();
        let error = EnvelopeError::new("row_invalid", "bad date")
            .expect("error")
            .with_line(3);

        render_table(&envelope(vec![error]), &mut out).expect("table");

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("dataset     : prices.csv"));
        assert!(text.contains("row_invalid (line 3): bad date"));
    }
}
