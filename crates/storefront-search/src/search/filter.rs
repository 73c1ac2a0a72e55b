//! Structured filter state.
//!
//! [`FilterSelection`] is a plain value with a pure reducer
//! ([`FilterSelection::apply`]). [`FilterState`] owns the current value for
//! one session and publishes every change on a `watch` channel, exactly one
//! notification per mutation.

use crate::error::SearchError;
use crate::money::group_thousands;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tokio::sync::watch;

/// Brands offered in the filter panel.
pub const BRANDS: &[&str] = &["Lenovo", "ASUS", "MSI", "HP", "Dell", "Acer"];

/// CPU families offered in the filter panel.
pub const CPU_TYPES: &[&str] = &["Intel", "AMD"];

/// A budget bracket offered in the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBucket {
    pub label: &'static str,
    pub min: i64,
    pub max: i64,
}

impl PriceBucket {
    /// The bracket as a range.
    pub fn range(&self) -> PriceRange {
        PriceRange {
            min: self.min,
            max: self.max,
        }
    }
}

/// Budget brackets offered in the filter panel.
pub const PRICE_BUCKETS: &[PriceBucket] = &[
    PriceBucket { label: "ไม่เกิน 10,000", min: 0, max: 10_000 },
    PriceBucket { label: "10,000 - 20,000", min: 10_000, max: 20_000 },
    PriceBucket { label: "20,000 - 30,000", min: 20_000, max: 30_000 },
    PriceBucket { label: "30,000 - 50,000", min: 30_000, max: 50_000 },
    PriceBucket { label: "มากกว่า 50,000", min: 50_000, max: 999_999 },
];

/// An inclusive price bracket. Always satisfies `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PriceRange {
    min: i64,
    max: i64,
}

impl PriceRange {
    /// Create a range, rejecting `min > max`.
    pub fn new(min: i64, max: i64) -> Result<Self, SearchError> {
        if min > max {
            return Err(SearchError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// The catalogue bucket with exactly these bounds, if any.
    pub fn bucket(&self) -> Option<&'static PriceBucket> {
        PRICE_BUCKETS
            .iter()
            .find(|b| b.min == self.min && b.max == self.max)
    }

    /// Display label: the bucket label, or `"min - max"` with grouping.
    pub fn label(&self) -> String {
        match self.bucket() {
            Some(bucket) => bucket.label.to_string(),
            None => format!(
                "{} - {}",
                group_thousands(self.min),
                group_thousands(self.max)
            ),
        }
    }
}

impl fmt::Display for PriceRange {
    /// Formats as the bucket value, `min-max`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for PriceRange {
    type Err = SearchError;

    /// Parse a bucket value such as `"10000-20000"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparsable = || SearchError::UnparsablePriceRange(s.to_string());
        let (min, max) = s.trim().split_once('-').ok_or_else(unparsable)?;
        let min = min.trim().parse::<i64>().map_err(|_| unparsable())?;
        let max = max.trim().parse::<i64>().map_err(|_| unparsable())?;
        PriceRange::new(min, max)
    }
}

/// The user's structured filter selections.
///
/// An empty brand set, absent CPU and absent range each mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub brands: BTreeSet<String>,
    pub cpu: Option<String>,
    pub price_range: Option<PriceRange>,
}

/// A change to a [`FilterSelection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Add the brand if absent, remove it if present.
    ToggleBrand(String),
    /// Replace the CPU selection. Setting the current value again keeps it;
    /// an empty value clears it.
    SetCpu(String),
    ClearCpu,
    /// Replace the selected bracket.
    SetPriceRange(PriceRange),
    ClearPriceRange,
    /// Reset everything.
    Clear,
}

impl FilterSelection {
    /// Whether no constraint is selected.
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty() && self.cpu.is_none() && self.price_range.is_none()
    }

    /// Number of active constraints (each brand counts once).
    pub fn active_count(&self) -> usize {
        self.brands.len() + self.cpu.is_some() as usize + self.price_range.is_some() as usize
    }

    /// Whether the brand is selected.
    pub fn has_brand(&self, brand: &str) -> bool {
        self.brands.contains(brand)
    }

    /// Produce the selection that results from `action`.
    pub fn apply(&self, action: FilterAction) -> FilterSelection {
        let mut next = self.clone();
        match action {
            FilterAction::ToggleBrand(brand) => {
                if !next.brands.remove(&brand) {
                    next.brands.insert(brand);
                }
            }
            FilterAction::SetCpu(cpu) if cpu.is_empty() => next.cpu = None,
            FilterAction::SetCpu(cpu) => next.cpu = Some(cpu),
            FilterAction::ClearCpu => next.cpu = None,
            FilterAction::SetPriceRange(range) => next.price_range = Some(range),
            FilterAction::ClearPriceRange => next.price_range = None,
            FilterAction::Clear => next = FilterSelection::default(),
        }
        next
    }
}

/// Session-owned filter state with change notification.
#[derive(Debug)]
pub struct FilterState {
    tx: watch::Sender<FilterSelection>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    /// Create state with nothing selected.
    pub fn new() -> Self {
        Self::with_selection(FilterSelection::default())
    }

    /// Create state starting from `selection`.
    pub fn with_selection(selection: FilterSelection) -> Self {
        let (tx, _rx) = watch::channel(selection);
        Self { tx }
    }

    /// Copy of the current selection.
    pub fn selection(&self) -> FilterSelection {
        self.tx.borrow().clone()
    }

    /// Receive every subsequent change.
    pub fn subscribe(&self) -> watch::Receiver<FilterSelection> {
        self.tx.subscribe()
    }

    /// Apply `action`, notify subscribers once, and return the new selection.
    pub fn dispatch(&self, action: FilterAction) -> FilterSelection {
        let next = self.tx.borrow().apply(action);
        self.tx.send_replace(next.clone());
        tracing::debug!(active = next.active_count(), "filters changed");
        next
    }

    pub fn toggle_brand(&self, brand: impl Into<String>) -> FilterSelection {
        self.dispatch(FilterAction::ToggleBrand(brand.into()))
    }

    pub fn set_cpu(&self, cpu: impl Into<String>) -> FilterSelection {
        self.dispatch(FilterAction::SetCpu(cpu.into()))
    }

    pub fn clear_cpu(&self) -> FilterSelection {
        self.dispatch(FilterAction::ClearCpu)
    }

    pub fn set_price_range(&self, range: PriceRange) -> FilterSelection {
        self.dispatch(FilterAction::SetPriceRange(range))
    }

    pub fn clear_price_range(&self) -> FilterSelection {
        self.dispatch(FilterAction::ClearPriceRange)
    }

    pub fn clear(&self) -> FilterSelection {
        self.dispatch(FilterAction::Clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_brand_twice_restores_selection() {
        let start = FilterSelection::default()
            .apply(FilterAction::ToggleBrand("MSI".into()))
            .apply(FilterAction::SetCpu("AMD".into()));

        let toggled = start.apply(FilterAction::ToggleBrand("Lenovo".into()));
        assert!(toggled.has_brand("Lenovo"));

        let back = toggled.apply(FilterAction::ToggleBrand("Lenovo".into()));
        assert_eq!(back, start);

        // Removing an existing brand and adding it back is also a no-op.
        let twice = start
            .apply(FilterAction::ToggleBrand("MSI".into()))
            .apply(FilterAction::ToggleBrand("MSI".into()));
        assert_eq!(twice, start);
    }

    #[test]
    fn test_cpu_is_single_select_and_sticky() {
        let s = FilterSelection::default().apply(FilterAction::SetCpu("Intel".into()));
        let s = s.apply(FilterAction::SetCpu("AMD".into()));
        assert_eq!(s.cpu.as_deref(), Some("AMD"));

        let same = s.apply(FilterAction::SetCpu("AMD".into()));
        assert_eq!(same.cpu.as_deref(), Some("AMD"));

        assert_eq!(same.apply(FilterAction::ClearCpu).cpu, None);
        assert_eq!(same.apply(FilterAction::SetCpu(String::new())).cpu, None);
    }

    #[test]
    fn test_unknown_values_pass_through() {
        let s = FilterSelection::default()
            .apply(FilterAction::ToggleBrand("Framework".into()))
            .apply(FilterAction::SetCpu("Apple M3".into()));
        assert!(s.has_brand("Framework"));
        assert_eq!(s.cpu.as_deref(), Some("Apple M3"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let s = FilterSelection::default()
            .apply(FilterAction::ToggleBrand("HP".into()))
            .apply(FilterAction::SetPriceRange(PRICE_BUCKETS[1].range()));
        assert_eq!(s.active_count(), 2);
        assert!(s.apply(FilterAction::Clear).is_empty());
    }

    #[test]
    fn test_price_range_parse_and_validate() {
        let r: PriceRange = "10000-20000".parse().unwrap();
        assert_eq!((r.min(), r.max()), (10_000, 20_000));
        assert_eq!(r.label(), "10,000 - 20,000");
        assert_eq!(r.to_string(), "10000-20000");

        let custom: PriceRange = " 15000 - 17500 ".parse().unwrap();
        assert_eq!(custom.bucket(), None);
        assert_eq!(custom.label(), "15,000 - 17,500");

        assert!(matches!(
            "20000-10000".parse::<PriceRange>(),
            Err(SearchError::InvalidPriceRange { min: 20000, max: 10000 })
        ));
        assert!(matches!(
            "cheap".parse::<PriceRange>(),
            Err(SearchError::UnparsablePriceRange(_))
        ));
    }

    #[test]
    fn test_bucket_labels() {
        assert_eq!(PRICE_BUCKETS[0].range().label(), "ไม่เกิน 10,000");
        assert_eq!(PRICE_BUCKETS[4].range().label(), "มากกว่า 50,000");
    }

    #[test]
    fn test_filter_state_notifies_once_per_mutation() {
        let state = FilterState::new();
        let mut rx = state.subscribe();
        assert!(!rx.has_changed().unwrap());

        let returned = state.toggle_brand("Dell");
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), returned);
        assert!(!rx.has_changed().unwrap());

        state.set_cpu("Intel");
        state.clear();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());
        assert!(state.selection().is_empty());
    }
}
