use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Expansions in release order, which is also the order menus list them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[value(rename_all = "verbatim")]
pub enum Expansion {
    #[serde(rename = "ARR")]
    #[value(name = "ARR")]
    Arr,
    Heavensward,
    Stormblood,
    Shadowbringers,
    Endwalker,
    Dawntrail,
}

impl Expansion {
    pub const ALL: [Expansion; 6] = [
        Expansion::Arr,
        Expansion::Heavensward,
        Expansion::Stormblood,
        Expansion::Shadowbringers,
        Expansion::Endwalker,
        Expansion::Dawntrail,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Expansion::Arr => "ARR",
            Expansion::Heavensward => "Heavensward",
            Expansion::Stormblood => "Stormblood",
            Expansion::Shadowbringers => "Shadowbringers",
            Expansion::Endwalker => "Endwalker",
            Expansion::Dawntrail => "Dawntrail",
        }
    }
}

impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One B-rank hunt mark and the map it roams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuntMark {
    pub name: String,
    pub expansion: Expansion,
    pub map_code: u32,
    /// Map screenshot, relative to the maps directory
    pub filename: String,
}

impl HuntMark {
    pub fn map_path(&self, maps_dir: &Path) -> PathBuf {
        maps_dir.join(&self.filename)
    }
}

/// Hunt mark records loaded from a JSON array.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    marks: Vec<HuntMark>,
}

impl Catalog {
    pub fn new(marks: Vec<HuntMark>) -> Self {
        Self { marks }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let catalog_error = |message: String| Error::Catalog {
            path: path.to_path_buf(),
            message,
        };
        let raw = std::fs::read_to_string(path).map_err(|e| catalog_error(e.to_string()))?;
        Self::from_json(&raw).map_err(|e| catalog_error(e.to_string()))
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }

    pub fn marks(&self) -> &[HuntMark] {
        &self.marks
    }

    /// Marks of one expansion, in file order
    pub fn marks_for(&self, expansion: Expansion) -> impl Iterator<Item = &HuntMark> {
        self.marks.iter().filter(move |m| m.expansion == expansion)
    }

    pub fn find(&self, expansion: Expansion, map_code: u32) -> Result<&HuntMark> {
        self.marks_for(expansion)
            .find(|m| m.map_code == map_code)
            .ok_or(Error::MarkNotFound { expansion, map_code })
    }

    /// Expansions that have at least one mark, in release order
    pub fn expansions(&self) -> Vec<Expansion> {
        Expansion::ALL
            .into_iter()
            .filter(|e| self.marks_for(*e).next().is_some())
            .collect()
    }
}
