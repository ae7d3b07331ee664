use tracing::debug;

use crate::{
    layout::{indicator_dots, IndicatorDot},
    window::{visible_window, VisibleItem},
};

/// Keys the carousel listens to while mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "Home" => Key::Home,
            "End" => Key::End,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    /// The key was consumed; the host must suppress its default scroll.
    pub handled: bool,
}

/// Circular index over a sequence of `len` items.
///
/// `current_index` stays in `[0, len)` for non-empty sequences and at 0 for
/// empty ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    current_index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            current_index: 0,
            len,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current_index = (self.current_index + self.len - 1) % self.len;
    }

    /// Jumps to `index`, clamped to the last item.
    pub fn go_to(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        self.current_index = index.min(self.len - 1);
    }

    pub fn go_to_first(&mut self) {
        self.go_to(0);
    }

    pub fn go_to_last(&mut self) {
        self.go_to(self.len.saturating_sub(1));
    }

    /// Adopts a new sequence length, keeping the current index when it is
    /// still valid and clamping it to the last item otherwise.
    pub fn resize(&mut self, len: usize) {
        let clamped = self.current_index.min(len.saturating_sub(1));
        if clamped != self.current_index {
            debug!(
                from = self.current_index,
                to = clamped,
                len,
                "clamped carousel index after resize"
            );
        }
        self.len = len;
        self.current_index = clamped;
    }

    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::ArrowLeft => self.previous(),
            Key::ArrowRight => self.next(),
            Key::Home => self.go_to_first(),
            Key::End => self.go_to_last(),
            Key::Other => return KeyOutcome { handled: false },
        }
        KeyOutcome { handled: true }
    }

    /// Visible window over `items`. The slice is expected to be the sequence
    /// this carousel was sized for.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> Vec<VisibleItem<'a, T>> {
        visible_window(items, self.current_index)
    }

    pub fn dots(&self) -> Vec<IndicatorDot> {
        indicator_dots(self.len, self.current_index)
    }
}

#[cfg(test)]
#[path = "tests/carousel_tests.rs"]
mod tests;
