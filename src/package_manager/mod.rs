//! 包管理模块 — 包列表、安装探测与动作脚本

pub mod catalog;
pub mod scripts;
pub mod types;

pub use catalog::CatalogSource;
pub use scripts::{Script, ScriptRunner, ShellScripts};
pub use types::Package;

use crate::error::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PackageManager {
    bin_dir: PathBuf,
}

impl PackageManager {
    pub fn new(bin_dir: PathBuf) -> Self {
        Self { bin_dir }
    }

    /// 从来源加载包列表并探测每个包的安装状态
    pub fn load(&self, source: &dyn CatalogSource) -> Result<Vec<Package>> {
        let mut packages = source.load()?;
        self.refresh(&mut packages);
        log::info!(
            "loaded {} packages, {} installed",
            packages.len(),
            packages.iter().filter(|p| p.installed).count()
        );
        Ok(packages)
    }

    /// bin 目录下存在同名普通文件即视为已安装，不校验版本
    pub fn is_installed(&self, name: &str) -> bool {
        self.bin_dir.join(name).is_file()
    }

    pub fn refresh(&self, packages: &mut [Package]) {
        for pkg in packages.iter_mut() {
            pkg.installed = self.is_installed(&pkg.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package_manager::catalog::BuiltinCatalog;
    use std::fs;

    #[test]
    fn probe_follows_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let pm = PackageManager::new(dir.path().to_path_buf());
        let marker = dir.path().join("lazygit");

        assert!(!pm.is_installed("lazygit"));
        fs::write(&marker, b"").unwrap();
        assert!(pm.is_installed("lazygit"));
        fs::remove_file(&marker).unwrap();
        assert!(!pm.is_installed("lazygit"));
    }

    #[test]
    fn probe_needs_exact_name_and_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let pm = PackageManager::new(dir.path().to_path_buf());
        fs::write(dir.path().join("lazygit-old"), b"").unwrap();
        fs::create_dir(dir.path().join("nnn")).unwrap();

        assert!(!pm.is_installed("lazygit"));
        assert!(!pm.is_installed("nnn"));
    }

    #[test]
    fn load_marks_present_binaries() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bat"), b"").unwrap();
        fs::write(dir.path().join("glow"), b"").unwrap();
        let pm = PackageManager::new(dir.path().to_path_buf());

        let packages = pm.load(&BuiltinCatalog).unwrap();
        let installed: Vec<&str> = packages
            .iter()
            .filter(|p| p.installed)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(installed, ["glow", "bat"]);
    }

    #[test]
    fn missing_bin_dir_means_nothing_installed() {
        let dir = tempfile::tempdir().unwrap();
        let pm = PackageManager::new(dir.path().join("does-not-exist"));
        let packages = pm.load(&BuiltinCatalog).unwrap();
        assert!(packages.iter().all(|p| !p.installed));
    }
}
