//! Count-up animation for the stats bar.

#[derive(Clone, Debug, PartialEq)]
pub struct StatItem {
    pub value: u64,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub label: &'static str,
    pub duration_sec: f64,
}

pub const DEFAULT_STATS: [StatItem; 4] = [
    StatItem {
        value: 500,
        prefix: "",
        suffix: "+",
        label: "Successful Placements",
        duration_sec: 2.5,
    },
    StatItem {
        value: 150,
        prefix: "",
        suffix: "+",
        label: "Partner Companies",
        duration_sec: 2.0,
    },
    StatItem {
        value: 98,
        prefix: "",
        suffix: "%",
        label: "Client Satisfaction",
        duration_sec: 2.5,
    },
    StatItem {
        value: 15,
        prefix: "",
        suffix: "+",
        label: "Years of Excellence",
        duration_sec: 1.5,
    },
];

/// Interpolates a displayed number from 0 to `target` over `duration_ms`,
/// driven by animation-frame timestamps.
#[derive(Clone, Debug)]
pub struct CountUp {
    pub target: u64,
    pub duration_ms: f64,
    pub prefix: String,
    pub suffix: String,
    started_at: Option<f64>,
}

impl CountUp {
    pub fn new(target: u64, duration_sec: f64) -> Self {
        Self {
            target,
            duration_ms: duration_sec * 1000.0,
            prefix: String::new(),
            suffix: String::new(),
            started_at: None,
        }
    }

    pub fn with_affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    pub fn from_stat(stat: &StatItem) -> Self {
        Self::new(stat.value, stat.duration_sec).with_affixes(stat.prefix, stat.suffix)
    }

    /// Value to show at `timestamp_ms` and whether the animation is over.
    /// The first call pins the start time.
    pub fn frame(&mut self, timestamp_ms: f64) -> (u64, bool) {
        let start = *self.started_at.get_or_insert(timestamp_ms);
        let progress = if self.duration_ms > 0.0 {
            (timestamp_ms - start) / self.duration_ms
        } else {
            1.0
        };
        if progress < 1.0 {
            ((self.target as f64 * progress.max(0.0)).floor() as u64, false)
        } else {
            (self.target, true)
        }
    }

    pub fn render(&self, value: u64) -> String {
        format!("{}{}{}", self.prefix, group_thousands(value), self.suffix)
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
