use crate::models::{ChartAxis, ChartSeries, Mood, MoodEntry, MoodSnapshot, MoodSummary};
use chrono::{DateTime, Local, Utc};

/// Number of entries the log keeps; older ones are evicted first.
pub const MOOD_LOG_CAPACITY: usize = 7;

/// Tick labels for scores 1 through 5.
pub const AXIS_LABELS: [&str; 5] = ["Very Bad", "Bad", "Okay", "Good", "Very Good"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
}

impl MoodLog {
    /// Builds a log from stored entries, restoring chronological order and
    /// keeping only the most recent ones.
    pub fn from_entries(mut entries: Vec<MoodEntry>) -> Self {
        entries.sort_by_key(|entry| entry.timestamp);
        let overflow = entries.len().saturating_sub(MOOD_LOG_CAPACITY);
        entries.drain(..overflow);
        Self { entries }
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&MoodEntry> {
        self.entries.last()
    }

    pub fn record(&mut self, mood: Mood) -> &MoodEntry {
        self.record_at(mood, Utc::now())
    }

    pub fn record_at(&mut self, mood: Mood, at: DateTime<Utc>) -> &MoodEntry {
        // clock skew must not break chronological order
        let timestamp = match self.entries.last() {
            Some(last) if last.timestamp > at => last.timestamp,
            _ => at,
        };
        self.entries.push(MoodEntry { mood, timestamp });
        if self.entries.len() > MOOD_LOG_CAPACITY {
            self.entries.remove(0);
        }
        &self.entries[self.entries.len() - 1]
    }

    pub fn average_score(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let sum: u32 = self.entries.iter().map(|entry| u32::from(entry.mood.score())).sum();
        Some(f64::from(sum) / self.entries.len() as f64)
    }

    pub fn chart(&self) -> ChartSeries {
        ChartSeries {
            labels: self
                .entries
                .iter()
                .map(|entry| chart_label(entry.timestamp))
                .collect(),
            scores: self.entries.iter().map(|entry| entry.mood.score()).collect(),
            tooltips: self
                .entries
                .iter()
                .filter_map(|entry| tooltip(entry.mood.score()))
                .collect(),
        }
    }

    pub fn summary(&self) -> Option<MoodSummary> {
        let latest = self.latest()?;
        let average = self.average_score()?;
        Some(MoodSummary {
            current_mood: latest.mood.label().to_string(),
            average: average_bucket(average).to_string(),
        })
    }

    pub fn snapshot(&self) -> MoodSnapshot {
        MoodSnapshot {
            entries: self.entries.clone(),
            chart: self.chart(),
            summary: self.summary(),
            axis: chart_axis(),
        }
    }
}

pub fn average_bucket(avg: f64) -> &'static str {
    if avg >= 4.5 {
        "Very Good"
    } else if avg >= 3.5 {
        "Good"
    } else if avg >= 2.5 {
        "Okay"
    } else if avg >= 1.5 {
        "Down"
    } else {
        "Bad"
    }
}

/// `month/day` in local time, no zero padding.
pub fn chart_label(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%-m/%-d").to_string()
}

pub fn axis_label(score: u8) -> Option<&'static str> {
    let index = usize::from(score).checked_sub(1)?;
    AXIS_LABELS.get(index).copied()
}

pub fn tooltip(score: u8) -> Option<String> {
    axis_label(score).map(|label| format!("Mood: {label}"))
}

pub fn chart_axis() -> ChartAxis {
    ChartAxis {
        min: 1,
        max: 5,
        tick_labels: AXIS_LABELS.iter().map(|label| label.to_string()).collect(),
    }
}
