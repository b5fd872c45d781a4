use std::{collections::HashMap, sync::Arc};

use tracing::warn;

use crate::catalog::{Catalog, Network};

/// Which lines the map is currently drawing, grouped by network for the
/// layer-control sidebar. Pure view state, holds no rendering handles.
#[derive(Debug, Clone, Default)]
pub struct LayerVisibility {
    visible: HashMap<Arc<str>, bool>,
    groups: HashMap<Network, Box<[Arc<str>]>>,
}

impl LayerVisibility {
    /// Every line starts visible.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut visible = HashMap::new();
        let mut groups: HashMap<Network, Vec<Arc<str>>> = HashMap::new();
        for line in catalog.lines() {
            visible.insert(line.name.clone(), true);
            groups
                .entry(line.network)
                .or_default()
                .push(line.name.clone());
        }
        let groups = groups
            .into_iter()
            .map(|(network, lines)| (network, lines.into()))
            .collect();
        Self { visible, groups }
    }

    /// Unknown lines report hidden; the rendering layer simply draws
    /// nothing for them.
    pub fn is_visible(&self, line_name: &str) -> bool {
        self.visible.get(line_name).copied().unwrap_or(false)
    }

    pub fn set_visible(&mut self, line_name: &str, visible: bool) {
        match self.visible.get_mut(line_name) {
            Some(value) => *value = visible,
            None => warn!("Toggled unknown line {line_name}"),
        }
    }

    /// Flips one line. Returns the new state, or None for an unknown
    /// line.
    pub fn toggle_line(&mut self, line_name: &str) -> Option<bool> {
        let value = self.visible.get_mut(line_name)?;
        *value = !*value;
        Some(*value)
    }

    /// A group is visible when every line in it is. An empty group counts
    /// as visible.
    pub fn group_visible(&self, network: Network) -> bool {
        self.group_lines(network)
            .iter()
            .all(|name| self.is_visible(name))
    }

    /// Shows the whole group, unless every line in it is already visible,
    /// in which case the whole group is hidden. Returns the new state.
    pub fn toggle_group(&mut self, network: Network) -> bool {
        let target = !self.group_visible(network);
        let lines: Vec<Arc<str>> = self.group_lines(network).to_vec();
        for name in lines {
            self.set_visible(&name, target);
        }
        target
    }

    pub fn visible_lines(&self) -> Vec<&str> {
        self.visible
            .iter()
            .filter_map(|(name, visible)| visible.then_some(name.as_ref()))
            .collect()
    }

    fn group_lines(&self, network: Network) -> &[Arc<str>] {
        self.groups
            .get(&network)
            .map(|lines| lines.as_ref())
            .unwrap_or(&[])
    }
}
