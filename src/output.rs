//! Writing generated objects.

use crate::OutputFormat;
use anyhow::Context;
use mock_core::MockObject;
use std::io::Write;

/// Write `objects` to `writer` in the given format.
///
/// A single object is written bare for `json` and `yaml`; several objects
/// become an array (sequence). `jsonl` always writes one object per line.
pub fn write_objects<W: Write>(
    writer: &mut W,
    objects: &[MockObject],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let encoded = match objects {
                [single] => serde_json::to_writer_pretty(&mut *writer, single),
                many => serde_json::to_writer_pretty(&mut *writer, many),
            };
            encoded.context("Failed to encode objects as JSON")?;
            writeln!(writer)?;
        }
        OutputFormat::Jsonl => {
            for object in objects {
                serde_json::to_writer(&mut *writer, object)
                    .context("Failed to encode object as JSON")?;
                writeln!(writer)?;
            }
        }
        OutputFormat::Yaml => {
            let encoded = match objects {
                [single] => serde_yaml::to_writer(&mut *writer, single),
                many => serde_yaml::to_writer(&mut *writer, many),
            };
            encoded.context("Failed to encode objects as YAML")?;
        }
    }
    writer.flush()?;
    Ok(())
}
