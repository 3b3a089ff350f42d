use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::{MapError, Result};
use crate::map_data::MapDefinition;
use crate::maps::ALL_MAPS;
use crate::types::MapName;

static BUILTIN: LazyLock<MapRegistry> = LazyLock::new(|| {
    MapRegistry::new(ALL_MAPS.iter().copied()).expect("shipped map names are unique")
});

/// Lookup from map name to its radar metadata.
#[derive(Debug, Clone, Default)]
pub struct MapRegistry {
    maps: Vec<&'static MapDefinition>,
    by_name: HashMap<MapName, usize>,
}

impl MapRegistry {
    /// Build a registry, rejecting any name registered twice.
    pub fn new(defs: impl IntoIterator<Item = &'static MapDefinition>) -> Result<Self> {
        let mut registry = MapRegistry::default();
        for def in defs {
            registry.insert(def)?;
        }
        debug!("map registry built with {} maps", registry.len());
        Ok(registry)
    }

    /// Registry over every shipped map.
    pub fn builtin() -> &'static MapRegistry {
        &BUILTIN
    }

    pub fn insert(&mut self, def: &'static MapDefinition) -> Result<()> {
        if self.by_name.contains_key(def.name()) {
            return Err(MapError::DuplicateMap(def.map_name.clone()));
        }
        self.by_name.insert(def.map_name.clone(), self.maps.len());
        self.maps.push(def);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&'static MapDefinition> {
        self.by_name.get(name).map(|&idx| self.maps[idx])
    }

    pub fn require(&self, name: &str) -> Result<&'static MapDefinition> {
        self.get(name)
            .ok_or_else(|| MapError::UnknownMap(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &MapName> + '_ {
        self.maps.iter().map(|def| &def.map_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static MapDefinition> + '_ {
        self.maps.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::DE_DUST2;

    #[test]
    fn builtin_contains_dust2() {
        let registry = MapRegistry::builtin();
        assert_eq!(registry.len(), ALL_MAPS.len());
        let def = registry.get("de_dust2").unwrap();
        assert!(std::ptr::eq(def, &DE_DUST2));
        assert!(registry.contains("de_dust2"));
    }

    #[test]
    fn shipped_names_are_unique() {
        assert!(MapRegistry::new(ALL_MAPS.iter().copied()).is_ok());
    }

    #[test]
    fn duplicate_is_rejected() {
        let err = MapRegistry::new([&DE_DUST2, &DE_DUST2]).unwrap_err();
        assert!(matches!(err, MapError::DuplicateMap(ref name) if name == "de_dust2"));
    }

    #[test]
    fn unknown_map() {
        let registry = MapRegistry::builtin();
        assert!(registry.get("de_nowhere").is_none());
        let err = registry.require("de_nowhere").unwrap_err();
        assert_eq!(err.to_string(), "unknown map de_nowhere");
    }

    #[test]
    fn iteration_follows_registration_order() {
        let registry = MapRegistry::builtin();
        let names: Vec<_> = registry.names().map(|n| n.as_str()).collect();
        let expected: Vec<_> = ALL_MAPS.iter().map(|def| def.name()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn every_shipped_map_has_positive_resolution() {
        for def in MapRegistry::builtin().iter() {
            assert!(def.meta_info.resolution > 0.0, "{}", def.map_name);
        }
    }
}
