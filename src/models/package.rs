use serde::{Deserialize, Serialize};

pub const CMAKE_LABEL: &str = "CMake";
pub const LUAROCKS_LABEL: &str = "LuaRocks";

/// One immediate subdirectory of the packages root.
///
/// Field names follow the build systems they detect; the serialized keys are
/// the stable identifiers of the index file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    pub path: String,
    /// `CMakeLists.txt` present directly inside the package
    #[serde(rename = "has_build_marker_a")]
    pub has_cmake: bool,
    /// Some direct child ends with `.rockspec`
    #[serde(rename = "has_build_marker_b")]
    pub has_rockspec: bool,
    pub has_readme: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PackageInfo {
    /// Labels of the build systems this package is configured for, CMake first
    pub fn build_systems(&self) -> Vec<&'static str> {
        let mut labels = Vec::with_capacity(2);
        if self.has_cmake {
            labels.push(CMAKE_LABEL);
        }
        if self.has_rockspec {
            labels.push(LUAROCKS_LABEL);
        }
        labels
    }
}
