//! Date/time interpreter.
//!
//! Recognizes, after display-mode variable substitution:
//! - `now`, `today`, `tomorrow`, `yesterday`
//! - relative offsets: `5 minutes ago`, `2 days from now`, `in 3 hours`
//! - city clocks: `bangkok time`, `bangkok time in london time`
//! - clock conversions: `10pm bangkok time in indiana time`
//!
//! City lookups use a small built-in table of standard UTC offsets (no DST
//! rules). A reference instant can be injected for tests; live sessions
//! use the local clock.

use async_trait::async_trait;
use chrono::{DateTime, Duration, FixedOffset, Local, NaiveTime, TimeZone};
use onebox_application::{InterpretError, Interpreter};
use onebox_domain::{Question, Value};
use regex::Regex;
use std::sync::LazyLock;

/// Standard UTC offsets in minutes, no daylight-saving adjustment.
const CITY_OFFSETS: &[(&str, i32)] = &[
    ("utc", 0),
    ("london", 0),
    ("paris", 60),
    ("berlin", 60),
    ("madrid", 60),
    ("rome", 60),
    ("athens", 120),
    ("cairo", 120),
    ("moscow", 180),
    ("dubai", 240),
    ("delhi", 330),
    ("mumbai", 330),
    ("bangkok", 420),
    ("singapore", 480),
    ("hong kong", 480),
    ("beijing", 480),
    ("tokyo", 540),
    ("seoul", 540),
    ("sydney", 600),
    ("auckland", 720),
    ("honolulu", -600),
    ("los angeles", -480),
    ("denver", -420),
    ("chicago", -360),
    ("new york", -300),
    ("indiana", -300),
    ("toronto", -300),
    ("sao paulo", -180),
];

static RELATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<count_ago>\d+)\s*(?P<unit_ago>second|sec|minute|min|hour|day|week)s?\s+(?P<direction>ago|from now)|in\s+(?P<count_in>\d+)\s*(?P<unit_in>second|sec|minute|min|hour|day|week)s?)$")
        .expect("relative time pattern")
});

static CITY_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<city>[a-z][a-z ]*?)\s+time(?:\s+(?:in|to)\s+(?P<target>[a-z][a-z ]*?)\s+time)?$")
        .expect("city time pattern")
});

static CLOCK_CITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<clock>[\d: ]*?(?:am|pm)?)\s+(?P<city>[a-z][a-z ]*?)\s+time(?:\s+(?:in|to)\s+(?P<target>[a-z][a-z ]*?)\s+time)?$")
        .expect("clock conversion pattern")
});

static CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<hour>\d{1,2})(?::(?P<minute>\d{2}))?\s*(?P<meridiem>am|pm)?$")
        .expect("clock pattern")
});

fn city_offset(name: &str) -> Option<FixedOffset> {
    let name = name.trim();
    CITY_OFFSETS
        .iter()
        .find(|(city, _)| *city == name)
        .and_then(|(_, minutes)| FixedOffset::east_opt(minutes * 60))
}

fn parse_clock(text: &str) -> Option<NaiveTime> {
    let caps = CLOCK.captures(text.trim())?;
    let mut hour: u32 = caps["hour"].parse().ok()?;
    let minute: u32 = match caps.name("minute") {
        Some(minute) => minute.as_str().parse().ok()?,
        None => 0,
    };
    match caps.name("meridiem").map(|m| m.as_str()) {
        Some("pm") if hour < 12 => hour += 12,
        Some("am") if hour == 12 => hour = 0,
        _ => {}
    }
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Interpreter for date and time questions.
pub struct DateTimeInterpreter {
    reference: Option<DateTime<FixedOffset>>,
}

impl DateTimeInterpreter {
    /// Interpreter against the live local clock.
    pub fn new() -> Self {
        Self { reference: None }
    }

    /// Interpreter with a fixed "now", for deterministic tests.
    pub fn with_reference(reference: DateTime<FixedOffset>) -> Self {
        Self {
            reference: Some(reference),
        }
    }

    fn now(&self) -> DateTime<FixedOffset> {
        self.reference
            .unwrap_or_else(|| Local::now().fixed_offset())
    }

    fn midnight(&self) -> Option<DateTime<FixedOffset>> {
        self.now().with_time(NaiveTime::MIN).single()
    }

    fn relative(&self, caps: &regex::Captures<'_>) -> Result<DateTime<FixedOffset>, InterpretError> {
        let (count, unit) = if let Some(count) = caps.name("count_ago") {
            (count.as_str(), &caps["unit_ago"])
        } else if let Some(count) = caps.name("count_in") {
            (count.as_str(), &caps["unit_in"])
        } else {
            return Err(self.unknown("relative time"));
        };
        let count: i64 = count
            .parse()
            .map_err(|_| InterpretError::Unrecognized(format!("bad count: {count}")))?;
        let delta = match unit {
            "second" | "sec" => Duration::seconds(count),
            "minute" | "min" => Duration::minutes(count),
            "hour" => Duration::hours(count),
            "day" => Duration::days(count),
            "week" => Duration::weeks(count),
            other => return Err(self.unknown(other)),
        };
        let ago = caps.name("direction").is_some_and(|d| d.as_str() == "ago");
        Ok(if ago {
            self.now() - delta
        } else {
            self.now() + delta
        })
    }

    fn unknown(&self, text: &str) -> InterpretError {
        InterpretError::Unrecognized(format!("unknown date: {text}"))
    }
}

impl Default for DateTimeInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Interpreter for DateTimeInterpreter {
    fn name(&self) -> &str {
        "datetime"
    }

    async fn answer(&self, question: &Question) -> Result<Value, InterpretError> {
        let text = question.resolved_text()?.to_lowercase();
        let text = text.trim();

        match text {
            "now" => return Ok(Value::Moment(self.now())),
            "today" => {
                return self
                    .midnight()
                    .map(Value::Moment)
                    .ok_or_else(|| self.unknown(text));
            }
            "tomorrow" => {
                return self
                    .midnight()
                    .map(|m| Value::Moment(m + Duration::days(1)))
                    .ok_or_else(|| self.unknown(text));
            }
            "yesterday" => {
                return self
                    .midnight()
                    .map(|m| Value::Moment(m - Duration::days(1)))
                    .ok_or_else(|| self.unknown(text));
            }
            _ => {}
        }

        if let Some(caps) = RELATIVE.captures(text) {
            return Ok(Value::Moment(self.relative(&caps)?));
        }

        // `bangkok time`, `bangkok time in london time`
        if let Some(caps) = CITY_ONLY.captures(text)
            && let Some(offset) = city_offset(&caps["city"])
        {
            let here = self.now().with_timezone(&offset);
            return Ok(Value::Moment(match caps.name("target") {
                Some(target) => {
                    let target = city_offset(target.as_str())
                        .ok_or_else(|| self.unknown(target.as_str()))?;
                    here.with_timezone(&target)
                }
                None => here,
            }));
        }

        // `10pm bangkok time`, `10pm bangkok time in indiana time`
        if let Some(caps) = CLOCK_CITY.captures(text)
            && let Some(clock) = parse_clock(&caps["clock"])
            && let Some(offset) = city_offset(&caps["city"])
        {
            let date = self.now().with_timezone(&offset).date_naive();
            let moment = offset
                .from_local_datetime(&date.and_time(clock))
                .single()
                .ok_or_else(|| self.unknown(text))?;
            return Ok(Value::Moment(match caps.name("target") {
                Some(target) => {
                    let target = city_offset(target.as_str())
                        .ok_or_else(|| self.unknown(target.as_str()))?;
                    moment.with_timezone(&target)
                }
                None => moment,
            }));
        }

        Err(self.unknown(text))
    }
}
