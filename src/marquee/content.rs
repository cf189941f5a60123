use crate::foundation::error::{MarqueeError, MarqueeResult};

/// Repeated label content for one track.
///
/// One *segment* is the item labels joined by the separator, with a trailing separator so that
/// consecutive segments read seamlessly. The track renders `repeat_count` segments side by side;
/// the width of a single segment is the wrap period.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackContent {
    items: Vec<String>,
    separator: String,
    repeat_count: u32,
    segment: String,
}

impl TrackContent {
    /// Build content; `repeat_count` must be at least 1.
    pub fn new(
        items: Vec<String>,
        separator: impl Into<String>,
        repeat_count: u32,
    ) -> MarqueeResult<Self> {
        if repeat_count == 0 {
            return Err(MarqueeError::config("track repeat_count must be >= 1"));
        }
        let separator = separator.into();
        let mut segment = items.join(&separator);
        segment.push_str(&separator);
        Ok(Self {
            items,
            separator,
            repeat_count,
            segment,
        })
    }

    /// Item labels in display order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Separator between items.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Number of segment copies rendered.
    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    /// One repetition of the content, trailing separator included.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Iterate the rendered segments, left to right.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::repeat_n(self.segment.as_str(), self.repeat_count as usize)
    }

    /// Full concatenated text of all segments.
    pub fn text(&self) -> String {
        self.segment.repeat(self.repeat_count as usize)
    }

    /// Whether the repeated strip is at least twice `viewport_px` wide, which keeps the wrap
    /// boundary out of sight.
    pub fn covers_viewport(&self, segment_width_px: f64, viewport_px: f64) -> bool {
        f64::from(self.repeat_count) * segment_width_px >= 2.0 * viewport_px
    }
}
