//! Rendering boundary
//!
//! Builds a flat draw list per tick and hands it to a presentation sink.

pub mod frame;
pub mod instance;
pub mod sink;

pub use frame::{DrawCommand, Frame, OverlayText, build_frame};
pub use instance::{RectInstance, colors};
pub use sink::{LogSink, NullSink, PresentationSink, RecordingSink};
