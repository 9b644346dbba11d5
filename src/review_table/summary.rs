/// Star totals gathered while collapsing duplicate reviews.
///
/// The table has always reported the star total of *every* raw review over
/// the number of *distinct* reviews, which overshoots when duplicates exist.
/// That figure is kept as [`RatingSummary::reported`]; the two consistent
/// means sit next to it until one of them replaces it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingSummary {
    pub raw_count: usize,
    pub unique_count: usize,
    pub raw_star_total: f64,
    pub unique_star_total: f64,
}

impl RatingSummary {
    /// Raw star total over the distinct review count.
    pub fn reported(&self) -> Option<f64> {
        ratio(self.raw_star_total, self.unique_count)
    }

    pub fn mean_over_raw(&self) -> Option<f64> {
        ratio(self.raw_star_total, self.raw_count)
    }

    pub fn mean_over_unique(&self) -> Option<f64> {
        ratio(self.unique_star_total, self.unique_count)
    }
}

fn ratio(total: f64, count: usize) -> Option<f64> {
    (count > 0).then(|| total / count as f64)
}

/// Title shown above the table, e.g. `"Marketplace 4.5 Stars"`.
pub fn rating_headline(name: &str, average: Option<f64>) -> String {
    match average {
        Some(average) if average > 0.0 => format!("{} {} Stars", name, average),
        _ => format!("{} (no average rating)", name),
    }
}
