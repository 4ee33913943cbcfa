//! Display surfaces that receive countdown frames.

use std::io::Write;

use anyhow::Result;

use super::display::CountdownDisplay;

/// Anything that can show a countdown frame.
///
/// Rendering is best-effort: a surface that fails to draw logs and carries
/// on, the driver never stops because of it.
pub trait DisplaySurface: Send + 'static {
    fn render(&mut self, display: &CountdownDisplay);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameFormat {
    /// Human-readable block, one per frame
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Writes frames to a terminal (or any other writer).
pub struct TerminalSurface<W> {
    writer: W,
    format: FrameFormat,
}

impl<W: Write + Send + 'static> TerminalSurface<W> {
    pub fn new(writer: W, format: FrameFormat) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_frame(&mut self, display: &CountdownDisplay) -> Result<()> {
        match self.format {
            FrameFormat::Text => write_text(&mut self.writer, display)?,
            FrameFormat::Json => {
                serde_json::to_writer(&mut self.writer, display)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn write_text<W: Write>(writer: &mut W, display: &CountdownDisplay) -> std::io::Result<()> {
    writeln!(writer, "{}", display.heading)?;
    if let Some(date) = &display.milestone_date {
        writeln!(writer, "{date}")?;
    }

    let units = display
        .padded_units()
        .iter()
        .map(|(unit, value)| format!("{value} {unit}"))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(writer, "  {units}")?;
    writeln!(writer, "{}", display.footer())?;
    writeln!(writer)
}

impl<W: Write + Send + 'static> DisplaySurface for TerminalSurface<W> {
    fn render(&mut self, display: &CountdownDisplay) {
        if let Err(err) = self.write_frame(display) {
            log::warn!("Failed to render countdown frame: {err:#}");
        }
    }
}
