//! Groups clipped street fragments by display name.
//!
//! OSM splits one logical street into many ways. Every way sharing a display
//! name is folded into one group, collecting:
//! - all name aliases seen on any of its ways
//! - all contributing way ids
//! - all clipped fragments, to be joined later

use std::collections::BTreeSet;

use geo_types::LineString;
use hashbrown::HashMap;
use itertools::Itertools;
use tracing::info;

use crate::geometry::{line_length_mi, unify_segments};
use crate::models::{Road, RoadGeometry, ROAD_ID_SEPARATOR};
use crate::names::{generate_alternate_names, NameMode};

/// All fragments sharing one display name
#[derive(Debug, Clone)]
pub struct RoadGroup {
    /// Display name, exactly as extracted
    pub name: String,
    /// Every name seen across the group's ways, display name first
    pub aliases: Vec<String>,
    /// Contributing source ids, kept sorted
    pub source_ids: BTreeSet<String>,
    /// Clipped fragments in arrival order
    pub fragments: Vec<LineString<f64>>,
}

impl RoadGroup {
    fn new(name: String) -> Self {
        Self {
            name,
            aliases: Vec::new(),
            source_ids: BTreeSet::new(),
            fragments: Vec::new(),
        }
    }

    /// Stable id derived from the sorted source ids
    pub fn road_id(&self) -> String {
        self.source_ids.iter().join(ROAD_ID_SEPARATOR)
    }

    /// Join fragments and compute length and guessable names.
    /// Returns `None` for a group with no fragments.
    pub fn finalize(self, mode: NameMode) -> Option<Road> {
        let id = self.road_id();
        let chains = unify_segments(self.fragments);
        let geometry = RoadGeometry::from_chains(chains)?;
        let length_mi = geometry.lines().map(line_length_mi).sum();

        let alternate_names = self
            .aliases
            .iter()
            .flat_map(|alias| generate_alternate_names(alias, mode))
            .unique()
            .collect();

        Some(Road {
            id,
            name: self.name,
            alternate_names,
            geometry,
            length_mi,
        })
    }
}

/// Accumulates road groups keyed by display name, in first-seen order
#[derive(Debug, Default)]
pub struct RoadAggregator {
    index_by_name: HashMap<String, usize>,
    groups: Vec<RoadGroup>,
    ways: usize,
}

impl RoadAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one way's names, id and clipped fragments.
    ///
    /// `names[0]` is the display name; a way with no names is ignored.
    pub fn add(&mut self, names: Vec<String>, source_id: &str, fragments: Vec<LineString<f64>>) {
        let Some(display_name) = names.first() else {
            return;
        };

        let idx = match self.index_by_name.get(display_name) {
            Some(&idx) => idx,
            None => {
                let idx = self.groups.len();
                self.index_by_name.insert(display_name.clone(), idx);
                self.groups.push(RoadGroup::new(display_name.clone()));
                idx
            }
        };

        let group = &mut self.groups[idx];
        for name in names {
            if !group.aliases.contains(&name) {
                group.aliases.push(name);
            }
        }
        group.source_ids.insert(source_id.to_string());
        group.fragments.extend(fragments);
        self.ways += 1;
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Consume the aggregator, yielding groups in first-seen order
    pub fn finish(self) -> Vec<RoadGroup> {
        info!(
            "Grouped {} ways into {} named roads",
            self.ways,
            self.groups.len()
        );
        self.groups
    }
}
