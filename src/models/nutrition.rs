use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Nutrient plotted when the report first opens.
pub const DEFAULT_GRAPHED_NUTRIENT: &str = "Calories";

/// Days of history shown before the end date.
const HISTORY_SPAN_DAYS: i64 = 6;

/// Intake for one nutrient against its daily value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NutrientTarget {
    pub name: String,
    pub intake: f64,
    pub daily_value: f64,
    pub unit: String,
}

impl NutrientTarget {
    pub fn new(name: &str, intake: f64, daily_value: f64, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            intake,
            daily_value,
            unit: unit.to_string(),
        }
    }

    pub fn percent_of_daily_value(&self) -> Option<f64> {
        (self.daily_value > 0.0).then(|| self.intake / self.daily_value * 100.0)
    }

    pub fn exceeds_daily_value(&self) -> bool {
        self.intake > self.daily_value
    }
}

/// The report's nutrient table, in display order.
pub fn default_targets() -> Vec<NutrientTarget> {
    vec![
        NutrientTarget::new("Calories", 1800.0, 2300.0, "cal"),
        NutrientTarget::new("Sugar", 28.0, 36.0, "g"),
        NutrientTarget::new("Salt", 8.0, 6.0, "g"),
        NutrientTarget::new("Calcium", 1000.0, 2500.0, "mg"),
        NutrientTarget::new("Sodium", 2500.0, 3400.0, "mg"),
        NutrientTarget::new("Vitamin A", 1000.0, 900.0, "mg"),
        NutrientTarget::new("Vitamin B-12", 1.1, 2.4, "mg"),
        NutrientTarget::new("Vitamin C", 78.0, 80.0, "mg"),
        NutrientTarget::new("Fat", 20.0, 50.0, "g"),
        NutrientTarget::new("Carbohydrates", 240.0, 300.0, "g"),
        NutrientTarget::new("Protein", 44.0, 50.0, "g"),
        NutrientTarget::new("Water", 0.0, 8.0, "cups"),
    ]
}

pub fn find_target<'a>(targets: &'a [NutrientTarget], name: &str) -> Option<&'a NutrientTarget> {
    targets.iter().find(|target| target.name == name)
}

/// Date range for the nutrition history graph. Neither bound passes `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    today: NaiveDate,
}

impl HistoryWindow {
    pub fn ending_today(today: NaiveDate) -> Self {
        Self {
            start: today - Duration::days(HISTORY_SPAN_DAYS),
            end: today,
            today,
        }
    }

    /// Moving the start past the end drags the end along with it.
    pub fn set_start(self, start: NaiveDate) -> Self {
        let start = start.min(self.today);
        Self {
            start,
            end: self.end.max(start),
            ..self
        }
    }

    /// An end before the start pulls the start back to it.
    pub fn set_end(self, end: NaiveDate) -> Self {
        let end = end.min(self.today);
        Self {
            start: self.start.min(end),
            end,
            ..self
        }
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        self.start
            .iter_days()
            .take_while(|day| *day <= self.end)
            .collect()
    }
}
