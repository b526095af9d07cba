//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a working directory containing a `packages/` root
pub struct WorkspaceBuilder {
    temp_dir: TempDir,
}

impl WorkspaceBuilder {
    /// Create a new builder with an empty `packages/` directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(temp_dir.path().join("packages")).expect("Failed to create packages dir");
        Self { temp_dir }
    }

    /// Create a new builder without a `packages/` directory
    pub fn without_packages_dir() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the working directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a package directory with the given files
    pub fn with_package(self, package: PackageBuilder) -> Self {
        package.create_in(&self.temp_dir.path().join("packages"));
        self
    }

    /// Add a plain file directly under `packages/`
    pub fn with_root_file(self, name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("packages").join(name), content)
            .expect("Failed to write root file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

/// Builder for one package directory
pub struct PackageBuilder {
    name: String,
    files: Vec<(String, Vec<u8>)>,
}

impl PackageBuilder {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), files: Vec::new() }
    }

    pub fn with_file(mut self, name: &str, content: &str) -> Self {
        self.files.push((name.to_string(), content.as_bytes().to_vec()));
        self
    }

    pub fn with_bytes(mut self, name: &str, content: &[u8]) -> Self {
        self.files.push((name.to_string(), content.to_vec()));
        self
    }

    pub fn with_cmake(self) -> Self {
        self.with_file("CMakeLists.txt", "cmake_minimum_required(VERSION 3.5)\n")
    }

    pub fn with_rockspec(self) -> Self {
        let rockspec = format!("{}-scm-1.rockspec", self.name);
        self.with_file(&rockspec, "package = \"pkg\"\n")
    }

    pub fn with_readme(self, content: &str) -> Self {
        self.with_file("README.md", content)
    }

    fn create_in(&self, root: &Path) -> PathBuf {
        let dir = root.join(&self.name);
        fs::create_dir(&dir).expect("Failed to create package dir");
        for (name, content) in &self.files {
            fs::write(dir.join(name), content).expect("Failed to write package file");
        }
        dir
    }
}

/// A small monorepo resembling the Torch distribution layout
pub fn torch_workspace() -> WorkspaceBuilder {
    WorkspaceBuilder::new()
        .with_package(
            PackageBuilder::new("torch7")
                .with_cmake()
                .with_rockspec()
                .with_readme("# Torch7\n\nTorch is the main package in the distribution.\n"),
        )
        .with_package(
            PackageBuilder::new("nn")
                .with_cmake()
                .with_readme("# nn\n\nThis package provides an easy way to build neural networks.\n"),
        )
        .with_package(
            PackageBuilder::new("optim")
                .with_rockspec()
                .with_readme("# optim\n\nA numeric optimization package for Torch.\n"),
        )
        .with_package(PackageBuilder::new("docs").with_readme("# Docs\nshort\n"))
}
