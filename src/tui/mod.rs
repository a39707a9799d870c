mod actions;
pub mod input;
mod render;
pub mod state;
mod theme;

use crate::config::Config;
use crate::package_manager::{catalog, PackageManager, ScriptRunner, ShellScripts};
use anyhow::Result;
use input::{read_key, Key, KeySource, StdinKeys};
use state::App;
use std::io::{self, Write};
use std::path::Path;

/// 菜单控制器：持有状态、输出、按键来源和脚本执行器
pub struct Menu<W, K, R> {
    app: App,
    out: W,
    keys: K,
    scripts: R,
}

impl<W: Write, K: KeySource, R: ScriptRunner> Menu<W, K, R> {
    pub fn new(app: App, out: W, keys: K, scripts: R) -> Self {
        Self {
            app,
            out,
            keys,
            scripts,
        }
    }

    /// 处理一个按键；返回后由主循环重绘
    pub fn handle_key(&mut self, key: Key) -> io::Result<()> {
        match key {
            Key::Up => self.app.move_up(),
            Key::Down => self.app.move_down(),
            Key::Enter => self.install_selected()?,
            Key::Uninstall => self.uninstall_selected()?,
            Key::Update => self.check_update_selected()?,
            Key::Quit => self.app.should_quit = true,
            Key::Other => {}
        }
        Ok(())
    }

    /// 主循环：重绘 → 读一个键 → 分发，直到 q 或输入关闭
    pub fn run_loop(&mut self) -> io::Result<()> {
        while !self.app.should_quit {
            render::draw_menu(&mut self.out, &self.app)?;
            match read_key(&mut self.keys)? {
                Some(key) => self.handle_key(key)?,
                None => {
                    log::info!("input closed, leaving");
                    self.app.should_quit = true;
                }
            }
        }
        render::goodbye(&mut self.out)
    }
}

pub fn run(config: &Config, home: &Path) -> Result<()> {
    let paths = config.paths(home);
    log::info!("pkt root: {}", paths.root.display());

    let pm = PackageManager::new(paths.bin.clone());
    let packages = pm.load(catalog::from_config(config).as_ref())?;
    let app = App::new(packages)?;

    let scripts = ShellScripts::new(config.interpreter(), paths.scripts.clone());
    let mut menu = Menu::new(app, io::stdout(), StdinKeys::new(), scripts);
    menu.run_loop()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result as PktResult;
    use crate::package_manager::{Package, Script};
    use std::collections::VecDeque;

    struct NoScripts;

    impl ScriptRunner for NoScripts {
        fn run(&mut self, script: Script, _args: &[&str]) -> PktResult<Option<i32>> {
            panic!("unexpected script {:?}", script);
        }
    }

    fn menu(keys: &[u8]) -> Menu<Vec<u8>, VecDeque<u8>, NoScripts> {
        let packages = ["nnn", "lazygit", "gotop"]
            .iter()
            .map(|n| Package::new(*n, ""))
            .collect();
        let app = App::new(packages).unwrap();
        Menu::new(app, Vec::new(), keys.iter().copied().collect(), NoScripts)
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut m = menu(b"\x1b[A\x1b[B\x1b[Bjjjq");
        m.run_loop().unwrap();
        assert_eq!(m.app.selected(), 2);

        let mut m = menu(b"jj\x1b[Akkkq");
        m.run_loop().unwrap();
        assert_eq!(m.app.selected(), 0);
    }

    #[test]
    fn unknown_escape_is_ignored() {
        let mut m = menu(b"j\x1b[Cxq");
        m.run_loop().unwrap();
        assert_eq!(m.app.selected(), 1);
    }

    #[test]
    fn quit_stops_reading() {
        let mut m = menu(b"Qj");
        m.run_loop().unwrap();
        assert!(m.app.should_quit);
        assert_eq!(m.app.selected(), 0);
        assert_eq!(m.keys, VecDeque::from(vec![b'j']));
        assert!(String::from_utf8_lossy(&m.out).contains("Thanks for using Pkt!"));
    }

    #[test]
    fn closed_input_ends_the_loop() {
        let mut m = menu(b"j");
        m.run_loop().unwrap();
        assert!(m.app.should_quit);
        assert_eq!(m.app.selected(), 1);
    }

    #[test]
    fn ineligible_actions_never_touch_scripts() {
        // 全部未安装：卸载和检查更新都只提示
        let mut m = menu(b"d u q");
        m.run_loop().unwrap();
        assert!(m.app.packages().iter().all(|p| !p.installed));
    }
}
