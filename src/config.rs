use crate::error::{PktError, Result};
use serde::Deserialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// `~/.config/pkt/config.toml`，所有字段均可省略
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 覆盖默认的 `~/.pkt`
    pub root_dir: Option<PathBuf>,
    /// 覆盖默认的 `<root>/scripts`
    pub scripts_dir: Option<PathBuf>,
    /// 执行脚本的解释器，默认 bash
    pub interpreter: Option<String>,
    /// 非空时替换内置包列表
    pub packages: Vec<PackageEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PackageEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// 启动时一次性算好的路径
#[derive(Debug, Clone, PartialEq)]
pub struct PktPaths {
    pub root: PathBuf,
    /// 安装探测目录：包名同名文件存在即视为已安装
    pub bin: PathBuf,
    /// 仅构造路径，核心逻辑不使用
    #[allow(dead_code)]
    pub src: PathBuf,
    /// 仅声明，不读不写
    #[allow(dead_code)]
    pub installed_db: PathBuf,
    pub scripts: PathBuf,
}

impl PktPaths {
    pub fn from_root(root: PathBuf) -> Self {
        Self {
            bin: root.join("bin"),
            src: root.join("src"),
            installed_db: root.join("installed.json"),
            scripts: root.join("scripts"),
            root,
        }
    }
}

/// 读取 HOME；未设置或为空时直接报错，不做兜底
pub fn home_dir() -> Result<PathBuf> {
    home_from(std::env::var_os("HOME"))
}

fn home_from(var: Option<OsString>) -> Result<PathBuf> {
    match var {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home)),
        _ => Err(PktError::HomeNotSet),
    }
}

impl Config {
    pub const DEFAULT_INTERPRETER: &'static str = "bash";

    pub fn config_path(home: &Path) -> PathBuf {
        home.join(".config/pkt/config.toml")
    }

    pub fn load_or_default(home: &Path) -> Result<Self> {
        Self::load_from(&Self::config_path(home))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| PktError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| PktError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn paths(&self, home: &Path) -> PktPaths {
        let root = self
            .root_dir
            .clone()
            .unwrap_or_else(|| home.join(".pkt"));
        let mut paths = PktPaths::from_root(root);
        if let Some(scripts) = &self.scripts_dir {
            paths.scripts = scripts.clone();
        }
        paths
    }

    pub fn interpreter(&self) -> &str {
        self.interpreter
            .as_deref()
            .unwrap_or(Self::DEFAULT_INTERPRETER)
    }
}
