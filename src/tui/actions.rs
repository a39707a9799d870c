//! 安装 / 卸载 / 检查更新三个动作
//!
//! 所有失败都只在状态行提示，然后等待任意键回到菜单。

use super::input::{confirm, wait_any, KeySource};
use super::render::{prompt, status_line, PRESS_ANY_KEY};
use super::theme;
use super::Menu;
use crate::package_manager::{Script, ScriptRunner};
use std::io::{self, Write};

/// check_update.sh 以此退出码表示有可用更新
const UPDATE_AVAILABLE_CODE: i32 = 1;

impl<W: Write, K: KeySource, R: ScriptRunner> Menu<W, K, R> {
    fn pause(&mut self) -> io::Result<()> {
        prompt(&mut self.out, None, PRESS_ANY_KEY)?;
        wait_any(&mut self.keys)
    }

    fn not_installed(&mut self, name: &str) -> io::Result<()> {
        let msg = format!("Package '{}' is not installed.", name);
        status_line(&mut self.out, theme::YELLOW, &msg)?;
        self.pause()
    }

    /// 运行脚本，spawn 失败记日志后按非零处理
    fn run_script(&mut self, script: Script, args: &[&str]) -> Option<i32> {
        match self.scripts.run(script, args) {
            Ok(code) => code,
            Err(e) => {
                log::error!("{}", e);
                None
            }
        }
    }

    pub fn install_selected(&mut self) -> io::Result<()> {
        let name = self.app.selected_package().name.clone();
        if self.app.selected_package().installed {
            let msg = format!("Package '{}' is already installed.", name);
            status_line(&mut self.out, theme::YELLOW, &msg)?;
            return self.pause();
        }

        status_line(&mut self.out, theme::CYAN, &format!("Installing {}...", name))?;
        if self.run_script(Script::Install, &[name.as_str()]) == Some(0) {
            self.app.selected_package_mut().installed = true;
            log::info!("installed {}", name);
            let msg = format!("Successfully installed {}!", name);
            status_line(&mut self.out, theme::GREEN, &msg)?;
        } else {
            log::warn!("install of {} failed", name);
            status_line(&mut self.out, theme::RED, &format!("Failed to install {}.", name))?;
        }
        self.pause()
    }

    pub fn uninstall_selected(&mut self) -> io::Result<()> {
        let name = self.app.selected_package().name.clone();
        if !self.app.selected_package().installed {
            return self.not_installed(&name);
        }

        let question = format!("\n Uninstall {}? [y/N]: ", name);
        prompt(&mut self.out, Some(theme::RED), &question)?;
        if !confirm(&mut self.keys)? {
            status_line(&mut self.out, theme::BLUE, "Cancelled.")?;
            return self.pause();
        }

        if self.run_script(Script::Uninstall, &[name.as_str()]) == Some(0) {
            self.app.selected_package_mut().installed = false;
            log::info!("uninstalled {}", name);
            status_line(&mut self.out, theme::GREEN, &format!("Uninstalled {}.", name))?;
        } else {
            log::warn!("uninstall of {} failed", name);
            let msg = format!("Failed to uninstall {}.", name);
            status_line(&mut self.out, theme::RED, &msg)?;
        }
        self.pause()
    }

    pub fn check_update_selected(&mut self) -> io::Result<()> {
        let name = self.app.selected_package().name.clone();
        if !self.app.selected_package().installed {
            return self.not_installed(&name);
        }

        status_line(&mut self.out, theme::CYAN, "Checking for updates...")?;
        if self.run_script(Script::CheckUpdate, &[name.as_str()]) != Some(UPDATE_AVAILABLE_CODE) {
            status_line(&mut self.out, theme::GREEN, &format!("{} is up to date.", name))?;
            return self.pause();
        }

        self.app.selected_package_mut().update_available = true;
        let msg = format!("Update available for {}!", name);
        status_line(&mut self.out, theme::YELLOW, &msg)?;
        prompt(&mut self.out, None, " Update now? [y/N]: ")?;
        if confirm(&mut self.keys)? {
            // 更新结果不检查
            self.run_script(Script::Install, &[name.as_str(), "update"]);
            self.app.selected_package_mut().update_available = false;
            log::info!("updated {}", name);
            status_line(&mut self.out, theme::GREEN, &format!("Updated {}!", name))?;
        }
        self.pause()
    }
}
