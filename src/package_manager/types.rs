//! 包记录类型定义

/// 菜单中的一条包记录
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub name: String,
    pub description: String,
    /// 由 bin 目录下同名文件是否存在决定
    pub installed: bool,
    /// 由 check_update.sh 的退出码决定
    pub update_available: bool,
}

impl Package {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            installed: false,
            update_available: false,
        }
    }
}
