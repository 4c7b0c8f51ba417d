//! Scales mapping data values to pixel positions, and their ticks.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

const MS_SECOND: i64 = 1_000;
const MS_MINUTE: i64 = 60 * MS_SECOND;
const MS_HOUR: i64 = 60 * MS_MINUTE;
pub(crate) const MS_DAY: i64 = 24 * MS_HOUR;
const MS_WEEK: i64 = 7 * MS_DAY;
const MS_MONTH: i64 = 30 * MS_DAY;
const MS_YEAR: i64 = 365 * MS_DAY;

/// A continuous linear mapping from a domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
    round: bool,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            round: false,
        }
    }

    /// Round mapped values to whole pixels.
    pub fn rounded(mut self) -> Self {
        self.round = true;
        self
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn set_domain(&mut self, domain: (f64, f64)) {
        self.domain = domain;
    }

    /// Map a domain value into the range.
    ///
    /// A degenerate domain maps everything to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let mapped = if d1 == d0 {
            (r0 + r1) / 2.0
        } else {
            r0 + (value - d0) / (d1 - d0) * (r1 - r0)
        };
        if self.round { mapped.round() } else { mapped }
    }

    /// Roughly `count` evenly spaced values of 1, 2 or 5 times a power of ten
    /// covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Tick values at a step of 1, 2 or 5 × 10ⁿ between `start` and `stop`.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let (lo, hi, reverse) = if start < stop {
        (start, stop, false)
    } else {
        (stop, start, true)
    };

    let raw_step = (hi - lo) / count as f64;
    let power = raw_step.log10().floor();
    let error = raw_step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    // Negative powers divide by an integer increment to avoid drift like
    // 0.30000000000000004.
    let mut ticks: Vec<f64> = if power >= 0.0 {
        let step = factor * 10f64.powf(power);
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    } else {
        let inc = 10f64.powf(-power) / factor;
        let first = (lo * inc).ceil() as i64;
        let last = (hi * inc).floor() as i64;
        (first..=last).map(|i| i as f64 / inc).collect()
    };

    if reverse {
        ticks.reverse();
    }
    ticks
}

// =============================================================================
// Time scale
// =============================================================================

/// Calendar-aware tick spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickInterval {
    /// Fixed number of milliseconds, aligned to the epoch.
    Millis(i64),
    /// Whole days, aligned to UTC midnight.
    Days(i64),
    /// Weeks starting on Sunday.
    Weeks(i64),
    /// Months starting on the first.
    Months(u32),
    Years(i32),
}

const INTERVALS: &[(TickInterval, i64)] = &[
    (TickInterval::Millis(MS_SECOND), MS_SECOND),
    (TickInterval::Millis(5 * MS_SECOND), 5 * MS_SECOND),
    (TickInterval::Millis(15 * MS_SECOND), 15 * MS_SECOND),
    (TickInterval::Millis(30 * MS_SECOND), 30 * MS_SECOND),
    (TickInterval::Millis(MS_MINUTE), MS_MINUTE),
    (TickInterval::Millis(5 * MS_MINUTE), 5 * MS_MINUTE),
    (TickInterval::Millis(15 * MS_MINUTE), 15 * MS_MINUTE),
    (TickInterval::Millis(30 * MS_MINUTE), 30 * MS_MINUTE),
    (TickInterval::Millis(MS_HOUR), MS_HOUR),
    (TickInterval::Millis(3 * MS_HOUR), 3 * MS_HOUR),
    (TickInterval::Millis(6 * MS_HOUR), 6 * MS_HOUR),
    (TickInterval::Millis(12 * MS_HOUR), 12 * MS_HOUR),
    (TickInterval::Days(1), MS_DAY),
    (TickInterval::Days(2), 2 * MS_DAY),
    (TickInterval::Weeks(1), MS_WEEK),
    (TickInterval::Months(1), MS_MONTH),
    (TickInterval::Months(3), 3 * MS_MONTH),
    (TickInterval::Years(1), MS_YEAR),
];

impl TickInterval {
    /// The interval whose length is closest to `span / count`.
    pub fn for_span(span_ms: i64, count: usize) -> Self {
        let target = span_ms.unsigned_abs() as f64 / count.max(1) as f64;
        let index = INTERVALS.partition_point(|(_, ms)| (*ms as f64) < target);
        if index == 0 {
            return INTERVALS[0].0;
        }
        if index == INTERVALS.len() {
            // Beyond a year: whole years at a nice step.
            let years = target / MS_YEAR as f64;
            let step = nice_ticks(0.0, years, 1).get(1).copied().unwrap_or(1.0).max(1.0);
            return TickInterval::Years(step as i32);
        }
        let (lower, lower_ms) = INTERVALS[index - 1];
        let (upper, upper_ms) = INTERVALS[index];
        if target / (lower_ms as f64) < (upper_ms as f64) / target {
            lower
        } else {
            upper
        }
    }

    /// First boundary at or after `t`.
    fn ceil(&self, t: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let ms = t.timestamp_millis();
        match *self {
            TickInterval::Millis(step) | TickInterval::Days(step) => {
                let step = if matches!(self, TickInterval::Days(_)) {
                    step * MS_DAY
                } else {
                    step
                };
                let aligned = ms.div_euclid(step) * step;
                let aligned = if aligned < ms { aligned + step } else { aligned };
                Utc.timestamp_millis_opt(aligned).single()
            }
            TickInterval::Weeks(_) => {
                let day = Utc.timestamp_millis_opt(ms.div_euclid(MS_DAY) * MS_DAY).single()?;
                let back = day.weekday().num_days_from_sunday() as i64;
                let mut sunday = day - Duration::days(back);
                if sunday < t {
                    sunday += Duration::weeks(1);
                }
                Some(sunday)
            }
            TickInterval::Months(step) => {
                let mut candidate = Utc.with_ymd_and_hms(t.year(), t.month(), 1, 0, 0, 0).single()?;
                while (candidate.month0() % step) != 0 || candidate < t {
                    candidate = add_months(candidate, 1)?;
                }
                Some(candidate)
            }
            TickInterval::Years(step) => {
                let mut year = t.year();
                let mut candidate = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single()?;
                while year.rem_euclid(step.max(1)) != 0 || candidate < t {
                    year += 1;
                    candidate = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single()?;
                }
                Some(candidate)
            }
        }
    }

    fn advance(&self, t: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match *self {
            TickInterval::Millis(step) => Some(t + Duration::milliseconds(step)),
            TickInterval::Days(step) => Some(t + Duration::days(step)),
            TickInterval::Weeks(step) => Some(t + Duration::weeks(step)),
            TickInterval::Months(step) => add_months(t, step),
            TickInterval::Years(step) => t.with_year(t.year() + step.max(1)),
        }
    }
}

fn add_months(t: DateTime<Utc>, months: u32) -> Option<DateTime<Utc>> {
    let total = t.month0() + months;
    let year = t.year() + (total / 12) as i32;
    let month = total % 12 + 1;
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()
}

/// A linear scale over time, with calendar-aligned ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> Self {
        Self::from_millis(
            (
                domain.0.timestamp_millis() as f64,
                domain.1.timestamp_millis() as f64,
            ),
            range,
        )
    }

    /// Domain given as milliseconds since the epoch.
    pub fn from_millis(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            linear: LinearScale::new(domain, range),
        }
    }

    pub fn rounded(mut self) -> Self {
        self.linear = self.linear.rounded();
        self
    }

    pub fn map(&self, t: DateTime<Utc>) -> f64 {
        self.linear.map(t.timestamp_millis() as f64)
    }

    pub fn map_millis(&self, ms: f64) -> f64 {
        self.linear.map(ms)
    }

    pub fn linear(&self) -> &LinearScale {
        &self.linear
    }

    pub fn linear_mut(&mut self) -> &mut LinearScale {
        &mut self.linear
    }

    /// Roughly `count` ticks at calendar boundaries inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<DateTime<Utc>> {
        let (d0, d1) = self.linear.domain();
        let (Some(start), Some(stop)) = (
            Utc.timestamp_millis_opt(d0.min(d1) as i64).single(),
            Utc.timestamp_millis_opt(d0.max(d1) as i64).single(),
        ) else {
            return Vec::new();
        };
        if count == 0 {
            return Vec::new();
        }

        let interval = TickInterval::for_span((stop - start).num_milliseconds(), count);
        let mut ticks = Vec::new();
        let mut current = interval.ceil(start);
        while let Some(t) = current {
            if t > stop {
                break;
            }
            ticks.push(t);
            current = interval.advance(t);
        }
        ticks
    }
}

/// Default label for a time tick: `%b %d` at midnight, `%H:%M` otherwise.
pub fn format_time_tick(t: &DateTime<Utc>) -> String {
    if t.timestamp_millis().rem_euclid(MS_DAY) == 0 {
        t.format("%b %d").to_string()
    } else {
        t.format("%H:%M").to_string()
    }
}

/// Truncate a timestamp to the start of its UTC day.
pub fn start_of_day(ms: i64) -> i64 {
    ms - ms.rem_euclid(MS_DAY)
}
