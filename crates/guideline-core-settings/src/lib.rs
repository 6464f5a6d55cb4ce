#![warn(missing_docs)]
//! `guideline-core-settings` - host settings-store adapter for `guideline-core`.
//!
//! Hosts without convention-file support persist guidelines as one string
//! (`RGB(r,g,b) c1, c2, c3`) in a key/value settings store. This crate
//! wraps that string behind [`GuidelineSettings`], a read-modify-write
//! changer implementing the guideline commands a host UI needs: add,
//! remove, remove-all, and the matching enablement predicates.
//!
//! The store itself stays behind the [`SettingsStore`] trait so the
//! changer is host-independent; [`MemorySettingsStore`] backs tests and
//! hosts that keep settings in memory.

use guideline_core::settings::{
    MAX_SETTINGS_GUIDELINES, compose_settings, parse_settings_color, parse_settings_columns,
};
use guideline_core::{Color, GuidelineError, is_valid_column};
use std::collections::HashMap;

/// Store key under which the guideline settings string is persisted.
pub const GUIDELINES_SETTING_KEY: &str = "Guides";

/// A host key/value string store.
///
/// The kernel only ever reads and writes whole strings; durability,
/// scoping and change notification are the host's concern.
pub trait SettingsStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any existing value.
    fn set(&mut self, key: &str, value: &str);
}

/// An in-memory [`SettingsStore`].
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: HashMap<String, String>,
}

impl MemorySettingsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Read-modify-write access to the persisted guideline settings.
///
/// The settings string is read from the store once and cached; every edit
/// rewrites the whole string, preserving the color when columns change and
/// the columns when the color changes. Call [`refresh`](Self::refresh)
/// when the host observes an external change to the store.
#[derive(Debug)]
pub struct GuidelineSettings<S> {
    store: S,
    cached: Option<String>,
}

impl<S: SettingsStore> GuidelineSettings<S> {
    /// Wrap a settings store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            cached: None,
        }
    }

    /// Drop the cached settings string so the next read hits the store.
    pub fn refresh(&mut self) {
        self.cached = None;
    }

    /// The persisted guideline color, or the default dark red.
    pub fn color(&mut self) -> Color {
        parse_settings_color(self.configuration())
    }

    /// Persist a new guideline color, keeping the current columns.
    pub fn set_color(&mut self, color: Color) {
        let columns = self.columns();
        self.write(color, &columns);
    }

    /// The persisted guideline columns, in order.
    pub fn columns(&mut self) -> Vec<i32> {
        parse_settings_columns(self.configuration())
    }

    /// Add a guideline at `column`.
    ///
    /// Returns `Ok(false)` without writing when the column is already
    /// present or the store already holds [`MAX_SETTINGS_GUIDELINES`]
    /// guidelines. Out-of-range columns are the caller's bug and error.
    pub fn add_guideline(&mut self, column: i32) -> Result<bool, GuidelineError> {
        if !is_valid_column(column) {
            return Err(GuidelineError::InvalidColumn(column));
        }

        let mut columns = self.columns();
        if columns.len() >= MAX_SETTINGS_GUIDELINES || columns.contains(&column) {
            return Ok(false);
        }

        columns.push(column);
        let color = self.color();
        self.write(color, &columns);
        Ok(true)
    }

    /// Remove the guideline at `column`.
    ///
    /// When `column` is not present but exactly one guideline remains,
    /// that last guideline is removed anyway, so a user can always clear
    /// the final guideline without placing the caret on its exact column.
    pub fn remove_guideline(&mut self, column: i32) -> Result<bool, GuidelineError> {
        if !is_valid_column(column) {
            return Err(GuidelineError::InvalidColumn(column));
        }

        let mut columns = self.columns();
        if let Some(index) = columns.iter().position(|&c| c == column) {
            columns.remove(index);
        } else if columns.len() == 1 {
            columns.clear();
        } else {
            return Ok(false);
        }

        let color = self.color();
        self.write(color, &columns);
        Ok(true)
    }

    /// Remove every persisted guideline, keeping the color.
    pub fn remove_all_guidelines(&mut self) {
        let color = self.color();
        self.write(color, &[]);
    }

    /// Whether an "add guideline at `column`" command should be enabled.
    pub fn can_add_guideline(&mut self, column: i32) -> bool {
        is_valid_column(column)
            && self.columns().len() < MAX_SETTINGS_GUIDELINES
            && !self.columns().contains(&column)
    }

    /// Whether a "remove guideline at `column`" command should be enabled.
    pub fn can_remove_guideline(&mut self, column: i32) -> bool {
        if !is_valid_column(column) {
            return false;
        }

        let columns = self.columns();
        columns.contains(&column) || columns.len() == 1
    }

    /// The wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap the store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn configuration(&mut self) -> &str {
        if self.cached.is_none() {
            let value = self
                .store
                .get(GUIDELINES_SETTING_KEY)
                .unwrap_or_default()
                .trim()
                .to_string();
            self.cached = Some(value);
        }

        self.cached.as_deref().unwrap_or_default()
    }

    fn write(&mut self, color: Color, columns: &[i32]) {
        let value = compose_settings(color, columns);
        if self.cached.as_deref() != Some(value.as_str()) {
            self.store.set(GUIDELINES_SETTING_KEY, &value);
            self.cached = Some(value);
        }
    }
}
