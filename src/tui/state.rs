use crate::error::{PktError, Result};
use crate::package_manager::Package;

/// 菜单控制器状态：包列表 + 当前选中行
#[derive(Debug)]
pub struct App {
    packages: Vec<Package>,
    selected: usize,
    pub should_quit: bool,
}

impl App {
    /// 空列表无法满足选中下标约束，直接拒绝
    pub fn new(packages: Vec<Package>) -> Result<Self> {
        if packages.is_empty() {
            return Err(PktError::EmptyCatalog);
        }
        Ok(Self {
            packages,
            selected: 0,
            should_quit: false,
        })
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_package(&self) -> &Package {
        &self.packages[self.selected]
    }

    pub fn selected_package_mut(&mut self) -> &mut Package {
        &mut self.packages[self.selected]
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.packages.len() {
            self.selected += 1;
        }
    }
}
