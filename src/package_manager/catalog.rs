//! 包列表来源：内置表或配置文件

use super::types::Package;
use crate::config::{Config, PackageEntry};
use crate::error::{PktError, Result};
use std::collections::HashSet;

/// 内置的 Termux 包列表（顺序即菜单顺序）
const BUILTIN_PACKAGES: &[(&str, &str)] = &[
    ("nnn", "Terminal file manager"),
    ("lazygit", "Git TUI client"),
    ("gotop", "Terminal system monitor"),
    ("lf", "Terminal file manager"),
    ("croc", "File transfer tool"),
    ("glow", "Markdown renderer"),
    ("bat", "Cat with syntax highlighting"),
    ("termux-api", "Termux API access"),
    ("termux-styling", "Terminal styling"),
    ("termux-boot", "Run scripts on boot"),
];

pub trait CatalogSource {
    fn load(&self) -> Result<Vec<Package>>;
}

pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> Result<Vec<Package>> {
        Ok(BUILTIN_PACKAGES
            .iter()
            .map(|(name, desc)| Package::new(*name, *desc))
            .collect())
    }
}

/// 配置文件中的 `[[packages]]`
pub struct ConfigCatalog {
    entries: Vec<PackageEntry>,
}

impl ConfigCatalog {
    pub fn new(entries: Vec<PackageEntry>) -> Self {
        Self { entries }
    }
}

impl CatalogSource for ConfigCatalog {
    fn load(&self) -> Result<Vec<Package>> {
        let packages: Vec<Package> = self
            .entries
            .iter()
            .map(|e| Package::new(e.name.trim(), e.description.as_str()))
            .collect();
        validate(&packages)?;
        Ok(packages)
    }
}

/// 配置里写了包就用配置，否则用内置表
pub fn from_config(config: &Config) -> Box<dyn CatalogSource> {
    if config.packages.is_empty() {
        Box::new(BuiltinCatalog)
    } else {
        Box::new(ConfigCatalog::new(config.packages.clone()))
    }
}

/// 包名会作为 bin 目录下的文件名和脚本参数，必须是单个路径分量
fn validate(packages: &[Package]) -> Result<()> {
    if packages.is_empty() {
        return Err(PktError::EmptyCatalog);
    }
    let mut seen = HashSet::new();
    for pkg in packages {
        let name = pkg.name.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains('/') {
            return Err(PktError::InvalidPackage(format!("bad name {:?}", name)));
        }
        if !seen.insert(name) {
            return Err(PktError::InvalidPackage(format!("duplicate name {:?}", name)));
        }
    }
    Ok(())
}
