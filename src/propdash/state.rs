//! # Page State
//!
//! Ephemeral UI state for the properties page: the current filter criteria,
//! the selection of property ids and the table/grid view mode. None of this
//! is persisted; it lives for the duration of a session and is owned by the
//! API facade.
//!
//! The one coupling rule lives here: changing the filter criteria clears the
//! selection, so a selection can never refer to rows the user no longer
//! sees. The selection is deliberately NOT reconciled after list-altering
//! mutations; the bulk dispatcher clears it explicitly on success instead.

use crate::filters::PropertyFilters;
use crate::model::PropertyId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A set of selected property ids. Order-free; iteration is by id for
/// deterministic output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(BTreeSet<PropertyId>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`.
    pub fn toggle(&mut self, id: PropertyId) {
        if !self.0.insert(id) {
            self.0.remove(&id);
        }
    }

    /// Replaces the selection with the given ids.
    pub fn select_all<I: IntoIterator<Item = PropertyId>>(&mut self, ids: I) {
        self.0 = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, id: PropertyId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> Vec<PropertyId> {
        self.0.iter().copied().collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Grid,
            ViewMode::Grid => ViewMode::Table,
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "grid" => Ok(ViewMode::Grid),
            other => Err(format!("unknown view mode: {}", other)),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViewMode::Table => "table",
            ViewMode::Grid => "grid",
        })
    }
}

/// All the mutable page state, grouped so it can be handed to whoever needs
/// it instead of living in ambient globals.
#[derive(Debug, Clone, Default)]
pub struct PropertiesState {
    pub filters: PropertyFilters,
    pub selection: Selection,
    pub view_mode: ViewMode,
}

impl PropertiesState {
    /// Installs new filter criteria. Always clears the selection, matching
    /// the page behavior where any filter change drops the selection.
    pub fn set_filters(&mut self, filters: PropertyFilters) {
        self.filters = filters;
        self.selection.clear();
    }

    pub fn toggle_view(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::VacancyFilter;

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut sel = Selection::new();
        sel.select_all([1, 4]);
        let before = sel.clone();
        sel.toggle(9);
        sel.toggle(9);
        assert_eq!(sel, before);

        sel.toggle(1);
        assert!(!sel.contains(1));
        sel.toggle(1);
        assert_eq!(sel, before);
    }

    #[test]
    fn select_all_then_clear_is_empty() {
        let mut sel = Selection::new();
        sel.select_all([3, 1, 2, 2]);
        assert_eq!(sel.len(), 3);
        assert_eq!(sel.ids(), vec![1, 2, 3]);
        sel.clear();
        assert!(sel.is_empty());
    }

    #[test]
    fn select_all_replaces_previous_selection() {
        let mut sel = Selection::new();
        sel.toggle(7);
        sel.select_all([1, 2]);
        assert!(!sel.contains(7));
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn filter_change_clears_selection() {
        let mut state = PropertiesState::default();
        state.selection.select_all([1, 4]);
        state.set_filters(PropertyFilters {
            vacancy: VacancyFilter::Available,
            ..Default::default()
        });
        assert!(state.selection.is_empty());
        assert_eq!(state.filters.vacancy, VacancyFilter::Available);
    }

    #[test]
    fn view_mode_parse_roundtrip() {
        for mode in [ViewMode::Table, ViewMode::Grid] {
            assert_eq!(mode.to_string().parse::<ViewMode>(), Ok(mode));
        }
        assert!("cards".parse::<ViewMode>().is_err());
    }

    #[test]
    fn view_mode_toggles_between_two_values() {
        let mut state = PropertiesState::default();
        assert_eq!(state.view_mode, ViewMode::Table);
        state.toggle_view();
        assert_eq!(state.view_mode, ViewMode::Grid);
        state.toggle_view();
        assert_eq!(state.view_mode, ViewMode::Table);
    }
}
