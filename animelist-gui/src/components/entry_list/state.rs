use std::time::Duration;

use animelist_lib::EntryId;
use iced::time::Instant;

/// How long a newly added card takes to become fully opaque
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Opacity of a card that started fading in at `started`, from 0.0 to 1.0.
pub fn fade_progress(started: Instant, now: Instant) -> f32 {
    let elapsed = now.duration_since(started).as_secs_f32();
    (elapsed / FADE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
}

/// The entry currently grabbed by the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub id: EntryId,
}

impl DragState {
    pub fn new(id: EntryId) -> Self {
        Self { id }
    }
}

/// How a card arranges its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Content stacked vertically, no grip icon
    Narrow,
    /// Content in a single row with a grip icon
    Wide,
}

impl Layout {
    pub fn for_width(width: f32, breakpoint: f32) -> Self {
        if width >= breakpoint {
            Self::Wide
        } else {
            Self::Narrow
        }
    }
}

#[cfg(test)]
mod test {
    use iced::time::Instant;

    use super::{FADE_DURATION, Layout, fade_progress};

    #[test]
    fn test_for_width() {
        assert_eq!(Layout::for_width(500.0, 768.0), Layout::Narrow);
        assert_eq!(Layout::for_width(768.0, 768.0), Layout::Wide);
        assert_eq!(Layout::for_width(1024.0, 768.0), Layout::Wide);
    }

    #[test]
    fn test_fade_progress() {
        let started = Instant::now();

        assert_eq!(fade_progress(started, started), 0.0);
        assert!((fade_progress(started, started + FADE_DURATION / 2) - 0.5).abs() < 0.01);
        assert_eq!(fade_progress(started, started + FADE_DURATION), 1.0);
        assert_eq!(fade_progress(started, started + FADE_DURATION * 4), 1.0);
    }
}
