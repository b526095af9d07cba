use serde::{Deserialize, Serialize};

use super::package::PackageInfo;

/// Run-level aggregate written to the index file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexReport {
    pub packages: Vec<PackageInfo>,
    pub total_count: usize,
    #[serde(rename = "marker_a_count")]
    pub cmake_count: usize,
    #[serde(rename = "marker_b_count")]
    pub luarocks_count: usize,
}

impl IndexReport {
    /// Build a report from inspected packages, sorting them by name and deriving the counts
    pub fn new(mut packages: Vec<PackageInfo>) -> Self {
        packages.sort_by(|a, b| a.name.cmp(&b.name));

        let cmake_count = packages.iter().filter(|p| p.has_cmake).count();
        let luarocks_count = packages.iter().filter(|p| p.has_rockspec).count();

        Self { total_count: packages.len(), cmake_count, luarocks_count, packages }
    }

    pub fn cmake_packages(&self) -> impl Iterator<Item = &PackageInfo> {
        self.packages.iter().filter(|p| p.has_cmake)
    }

    /// Every package with a rockspec, including those also built with CMake
    pub fn luarocks_packages(&self) -> impl Iterator<Item = &PackageInfo> {
        self.packages.iter().filter(|p| p.has_rockspec)
    }

    /// Rockspec packages not already listed under CMake
    pub fn luarocks_only_packages(&self) -> impl Iterator<Item = &PackageInfo> {
        self.luarocks_packages().filter(|p| !p.has_cmake)
    }
}

impl Default for IndexReport {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
