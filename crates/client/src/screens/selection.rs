//! Selection set and location filters shared by the list screens.
//!
//! Rules:
//! - the selection is emptied every time the list is replaced;
//! - only eligible items (balance left) can be selected;
//! - switching the location filter keeps only selected codes that are still
//!   visible and eligible;
//! - when nothing visible is left to pick while the list itself is not
//!   empty, the completion flag fires, once per screen instance.

use contracts::domain::a002_separation_item::SeparationItem;
use contracts::domain::a003_delivery_item::DeliveryItem;
use std::collections::{BTreeMap, BTreeSet};

/// An item that can be picked on a list screen
pub trait PickableItem {
    fn product_code(&self) -> &str;
    /// Raw location code, blank when the item has no location
    fn location_code(&self) -> &str;
    fn is_eligible(&self) -> bool;
}

impl PickableItem for SeparationItem {
    fn product_code(&self) -> &str {
        &self.product_code
    }

    fn location_code(&self) -> &str {
        &self.location.code
    }

    fn is_eligible(&self) -> bool {
        self.is_separable()
    }
}

impl PickableItem for DeliveryItem {
    fn product_code(&self) -> &str {
        &self.product_code
    }

    fn location_code(&self) -> &str {
        &self.location_code
    }

    fn is_eligible(&self) -> bool {
        self.is_deliverable()
    }
}

/// Bucket of the local location filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LocationKey {
    All,
    NoLocation,
    Code(String),
}

impl LocationKey {
    pub fn matches<T: PickableItem>(&self, item: &T) -> bool {
        match self {
            LocationKey::All => true,
            LocationKey::NoLocation => item.location_code().trim().is_empty(),
            LocationKey::Code(code) => item.location_code() == code,
        }
    }

    pub fn label(&self) -> String {
        match self {
            LocationKey::All => "Todos".to_string(),
            LocationKey::NoLocation => "Sem local".to_string(),
            LocationKey::Code(code) => code.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationFilter {
    pub key: LocationKey,
    pub count: usize,
}

/// "All" first, then location codes in ascending order, then "no location"
/// when at least one item has a blank code
pub fn compute_filters<T: PickableItem>(items: &[T]) -> Vec<LocationFilter> {
    let mut by_code: BTreeMap<&str, usize> = BTreeMap::new();
    let mut without_location = 0;

    for item in items {
        let code = item.location_code();
        if code.trim().is_empty() {
            without_location += 1;
        } else {
            *by_code.entry(code).or_default() += 1;
        }
    }

    let mut filters = Vec::with_capacity(by_code.len() + 2);
    filters.push(LocationFilter {
        key: LocationKey::All,
        count: items.len(),
    });
    filters.extend(by_code.into_iter().map(|(code, count)| LocationFilter {
        key: LocationKey::Code(code.to_string()),
        count,
    }));
    if without_location > 0 {
        filters.push(LocationFilter {
            key: LocationKey::NoLocation,
            count: without_location,
        });
    }
    filters
}

/// Items of one list screen plus the user's selection and filter
#[derive(Debug, Clone)]
pub struct ItemList<T> {
    items: Vec<T>,
    filters: Vec<LocationFilter>,
    active: LocationKey,
    selection: BTreeSet<String>,
    completion_fired: bool,
    completion_pending: bool,
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filters: Vec::new(),
            active: LocationKey::All,
            selection: BTreeSet::new(),
            completion_fired: false,
            completion_pending: false,
        }
    }
}

impl<T: PickableItem> ItemList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// New fetch result: selection starts empty, filters are recomputed.
    /// The active filter is kept when its bucket still exists.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.filters = compute_filters(&self.items);
        self.selection.clear();
        if !self.filters.iter().any(|f| f.key == self.active) {
            self.active = LocationKey::All;
        }
        self.check_completion();
    }

    /// Drop the items, e.g. after a failed fetch
    pub fn clear(&mut self) {
        self.items.clear();
        self.filters.clear();
        self.selection.clear();
        self.active = LocationKey::All;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn filters(&self) -> &[LocationFilter] {
        &self.filters
    }

    pub fn active_filter(&self) -> &LocationKey {
        &self.active
    }

    pub fn visible(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter(move |item| self.active.matches(*item))
    }

    pub fn visible_eligible_count(&self) -> usize {
        self.visible().filter(|item| item.is_eligible()).count()
    }

    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    pub fn is_selected(&self, product_code: &str) -> bool {
        self.selection.contains(product_code)
    }

    /// Selected items in list order
    pub fn selected_items(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| self.selection.contains(item.product_code()))
            .collect()
    }

    /// Flip membership of a product code. Unknown or ineligible items are
    /// left alone; returns whether the selection changed.
    pub fn toggle(&mut self, product_code: &str) -> bool {
        let eligible = self
            .items
            .iter()
            .any(|item| item.product_code() == product_code && item.is_eligible());
        if !eligible {
            return false;
        }
        if !self.selection.remove(product_code) {
            self.selection.insert(product_code.to_string());
        }
        true
    }

    /// Show only one bucket. The selection is narrowed to what stays visible
    /// and eligible; hidden selections are dropped, not remembered.
    pub fn apply_filter(&mut self, key: LocationKey) {
        self.active = key;
        let visible: BTreeSet<String> = self
            .visible()
            .filter(|item| item.is_eligible())
            .map(|item| item.product_code().to_string())
            .collect();
        self.selection.retain(|code| visible.contains(code));
        self.check_completion();
    }

    pub fn select_all_visible(&mut self) {
        let visible: Vec<String> = self
            .visible()
            .filter(|item| item.is_eligible())
            .map(|item| item.product_code().to_string())
            .collect();
        self.selection.extend(visible);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn check_completion(&mut self) {
        if self.completion_fired {
            return;
        }
        if !self.items.is_empty() && self.visible_eligible_count() == 0 {
            self.completion_fired = true;
            self.completion_pending = true;
        }
    }

    /// `true` exactly once, when the list became fully processed
    pub fn take_completion(&mut self) -> bool {
        std::mem::take(&mut self.completion_pending)
    }
}
