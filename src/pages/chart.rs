//! Price buckets and the bar-chart data derived from them.

use std::fmt::Write as _;

use crate::client::Booking;

/// A labelled open price interval `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBucket {
    /// Chart label.
    pub label: &'static str,
    /// Exclusive lower bound.
    pub min: f64,
    /// Exclusive upper bound.
    pub max: f64,
}

impl PriceBucket {
    /// `true` when `min < price < max`.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price > self.min && price < self.max
    }
}

/// Buckets used by the bookings chart, in display order.
pub const BOOKING_BUCKETS: [PriceBucket; 3] = [
    PriceBucket {
        label: "Cheap",
        min: 0.0,
        max: 100.0,
    },
    PriceBucket {
        label: "Normal",
        min: 100.0,
        max: 200.0,
    },
    PriceBucket {
        label: "Expensive",
        min: 200.0,
        max: 10_000_000.0,
    },
];

/// Bucket a price falls into, if any. Prices on a boundary fall into none.
#[must_use]
pub fn classify(buckets: &[PriceBucket], price: f64) -> Option<&PriceBucket> {
    buckets.iter().find(|bucket| bucket.contains(price))
}

/// One bar series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Bar fill colour.
    pub fill_color: &'static str,
    /// Bar outline colour.
    pub stroke_color: &'static str,
    /// Fill colour on hover.
    pub highlight_fill: &'static str,
    /// Outline colour on hover.
    pub highlight_stroke: &'static str,
    /// Zeros for earlier buckets followed by this bucket's count.
    pub data: Vec<usize>,
}

/// Labels plus one dataset per bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartData {
    /// Bucket labels.
    pub labels: Vec<&'static str>,
    /// Series, one per label.
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// Counts bookings per bucket.
    #[must_use]
    pub fn from_bookings(buckets: &[PriceBucket], bookings: &[Booking]) -> Self {
        let mut chart = Self::default();
        for (index, bucket) in buckets.iter().enumerate() {
            let count = bookings
                .iter()
                .filter(|booking| bucket.contains(booking.event.price))
                .count();
            let mut data = vec![0; index];
            data.push(count);

            chart.labels.push(bucket.label);
            chart.datasets.push(Dataset {
                fill_color: "rgba(220,220,220,0.5)",
                stroke_color: "rgba(220,220,220,0.8)",
                highlight_fill: "rgba(220,220,220,0.75)",
                highlight_stroke: "rgba(220,220,220,1)",
                data,
            });
        }
        chart
    }

    /// `(label, count)` pairs in bucket order.
    pub fn counts(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.labels.iter().zip(&self.datasets).map(|(label, dataset)| {
            (*label, dataset.data.last().copied().unwrap_or(0))
        })
    }

    /// Renders a horizontal text bar chart.
    #[must_use]
    pub fn render(&self) -> String {
        let width = self.labels.iter().map(|l| l.len()).max().unwrap_or(0);
        let mut out = String::new();
        for (label, count) in self.counts() {
            let _ = writeln!(out, "{label:<width$} | {} {count}", "#".repeat(count));
        }
        out
    }
}
