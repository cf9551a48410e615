use crate::buffer::DisplayBuffer;

/// Where the controller pushes each recomputed crop.
pub trait DisplaySurface {
    /// Show `buffer`, replacing whatever was shown before.
    fn present(&mut self, buffer: DisplayBuffer);

    /// Show nothing.
    fn clear(&mut self);
}

/// Surface that keeps the most recent buffer and counts presents.
#[derive(Debug, Default)]
pub struct FrameSlot {
    pub current: Option<DisplayBuffer>,
    pub presents: usize,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySurface for FrameSlot {
    fn present(&mut self, buffer: DisplayBuffer) {
        self.current = Some(buffer);
        self.presents += 1;
    }

    fn clear(&mut self) {
        self.current = None;
    }
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for Box<S> {
    fn present(&mut self, buffer: DisplayBuffer) {
        (**self).present(buffer);
    }

    fn clear(&mut self) {
        (**self).clear();
    }
}
