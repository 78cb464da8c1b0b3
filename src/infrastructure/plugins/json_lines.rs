use crate::infrastructure::{PickerEvent, PickerObserver};
use anyhow::{Context, Result};
use std::cell::RefCell;
use std::io::Write;

/// Plugin that writes each notification as one JSON document per line
pub struct JsonLinesObserver<W: Write> {
    writer: RefCell<W>,
}

impl<W: Write> JsonLinesObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl JsonLinesObserver<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> PickerObserver for JsonLinesObserver<W> {
    fn on_event(&self, event: &PickerEvent) -> Result<()> {
        let mut writer = self.writer.borrow_mut();
        serde_json::to_writer(&mut *writer, event)
            .with_context(|| format!("Failed to encode {}", event.name()))?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "JSON Lines"
    }
}
