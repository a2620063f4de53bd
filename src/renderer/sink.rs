//! Presentation sinks
//!
//! The windowing/raster layer lives outside this crate; it plugs in by
//! implementing [`PresentationSink`].

use super::frame::Frame;

/// Receives one frame per tick
pub trait PresentationSink {
    fn present(&mut self, frame: &Frame) -> anyhow::Result<()>;
}

/// Discards every frame
#[derive(Debug, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn present(&mut self, _frame: &Frame) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Logs frames: overlay changes at info, everything else at debug
#[derive(Debug, Default)]
pub struct LogSink {
    last_overlay: Vec<String>,
}

impl PresentationSink for LogSink {
    fn present(&mut self, frame: &Frame) -> anyhow::Result<()> {
        let overlay: Vec<String> = frame.overlay.iter().map(|o| o.text.clone()).collect();
        if overlay != self.last_overlay {
            for line in &overlay {
                log::info!("{}", line);
            }
            self.last_overlay = overlay;
        }
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "frame {}: {}",
                frame.tick,
                serde_json::to_string(&frame.commands)?
            );
        }
        Ok(())
    }
}

/// Keeps every presented frame (tests, replays)
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<Frame>,
}

impl PresentationSink for RecordingSink {
    fn present(&mut self, frame: &Frame) -> anyhow::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
