//! Reallocation accounting and profiling
//!
//! Records every grow and shrink so callers can check the growth policy
//! against a workload

mod tracker;

pub(crate) use tracker::ReallocationTracker;

/// Direction of a single reallocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ReallocationKind {
    /// Capacity increased
    Grow,
    /// Capacity decreased
    Shrink,
}

/// One reallocation of the backing buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Reallocation {
    /// Modification stamp when the reallocation happened
    pub stamp: u64,
    /// Capacity before
    pub from: usize,
    /// Capacity after
    pub to: usize,
}

impl Reallocation {
    /// Whether this reallocation grew or shrank the buffer
    pub fn kind(&self) -> ReallocationKind {
        if self.to >= self.from {
            ReallocationKind::Grow
        } else {
            ReallocationKind::Shrink
        }
    }
}

/// Detailed reallocation profile (if enabled)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReallocationProfile {
    /// Number of capacity increases
    pub grow_count: usize,

    /// Number of capacity decreases
    pub shrink_count: usize,

    /// Largest capacity reached
    pub peak_capacity: usize,

    /// Every reallocation in order
    pub timeline: Vec<Reallocation>,
}

impl ReallocationProfile {
    /// Total reallocations
    pub fn reallocations(&self) -> usize {
        self.grow_count + self.shrink_count
    }

    /// Generate report
    pub fn report(&self) -> String {
        let mut report = format!(
            "Reallocations: {}\n  Grow: {}\n  Shrink: {}\n  Peak capacity: {}",
            self.reallocations(),
            self.grow_count,
            self.shrink_count,
            self.peak_capacity
        );
        for event in &self.timeline {
            let label = match event.kind() {
                ReallocationKind::Grow => "grow",
                ReallocationKind::Shrink => "shrink",
            };
            report.push_str(&format!(
                "\n  @{} {} {} -> {}",
                event.stamp, label, event.from, event.to
            ));
        }
        report
    }
}
