//! Free-text extraction of stop mentions and time mentions.

use std::sync::LazyLock;

use regex::Regex;

use crate::timetable::{Stop, Timetable};

/// One-or-two-digit hour followed by an am/pm marker, e.g. "6am", "10 PM".
static TIME_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{1,2})\s*([ap])m").expect("time pattern compiles"));

/// An hour-of-day window, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourWindow {
    pub start: u32,
    pub end: u32,
}

impl HourWindow {
    /// The whole day; used when a query names fewer than two times.
    pub const FULL_DAY: HourWindow = HourWindow { start: 0, end: 24 };

    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start && hour <= self.end
    }
}

/// Stops whose names appear somewhere in `text`, case-insensitively.
///
/// The scan walks the stop list in feed definition order, not the order
/// the names occur in the sentence; the first two hits become the
/// declared start and end. A sentence phrased "to X from Y" can
/// therefore bind X as the start if X is defined earlier in the feed.
/// Long-standing behavior; callers and tests pin it.
pub fn mentioned_stops<'t>(timetable: &'t Timetable, text: &str) -> Vec<&'t Stop> {
    let haystack = text.to_lowercase();
    timetable
        .stops_with_keys()
        .filter(|(_, key)| haystack.contains(key))
        .map(|(stop, _)| stop)
        .collect()
}

/// Extract the inclusive hour window from the time mentions in `text`.
///
/// Mentions are scanned left to right; the first two bound the window,
/// converted to 24-hour hours ("12am" stays 12, "12pm" stays 12, other
/// pm hours gain 12). Fewer than two mentions leave the full day.
pub fn time_window(text: &str) -> HourWindow {
    let mut mentions = TIME_MENTION.captures_iter(text).map(|caps| {
        let hour: u32 = caps[1].parse().unwrap_or_default();
        let pm = caps[2].eq_ignore_ascii_case("p");
        if pm && hour != 12 { hour + 12 } else { hour }
    });

    match (mentions.next(), mentions.next()) {
        (Some(start), Some(end)) => HourWindow { start, end },
        _ => HourWindow::FULL_DAY,
    }
}
