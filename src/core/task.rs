use std::ops::ControlFlow;

/// A unit of work driven once per display frame.
///
/// `Continue` asks the driver to schedule the next frame; `Break` ends the
/// loop and the driver drops its continuation.
pub trait FrameTask {
    fn frame(&mut self) -> ControlFlow<()>;
}
