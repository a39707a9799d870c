//! 外部动作脚本的调用（install / uninstall / check_update）
//!
//! 脚本只通过退出码回报结果。参数以 argv 形式传递，包名不会拼进 shell 命令串。

use crate::error::{PktError, Result};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Install,
    Uninstall,
    CheckUpdate,
}

impl Script {
    pub fn file_name(self) -> &'static str {
        match self {
            Script::Install => "install.sh",
            Script::Uninstall => "uninstall.sh",
            Script::CheckUpdate => "check_update.sh",
        }
    }
}

/// 同步执行脚本，返回退出码（被信号终止时为 None）
pub trait ScriptRunner {
    fn run(&mut self, script: Script, args: &[&str]) -> Result<Option<i32>>;
}

/// `<interpreter> <scripts_dir>/<script> args...`，stdio 继承自终端
#[derive(Debug, Clone)]
pub struct ShellScripts {
    interpreter: String,
    scripts_dir: PathBuf,
}

impl ShellScripts {
    pub fn new(interpreter: impl Into<String>, scripts_dir: PathBuf) -> Self {
        Self {
            interpreter: interpreter.into(),
            scripts_dir,
        }
    }

    pub fn script_path(&self, script: Script) -> PathBuf {
        self.scripts_dir.join(script.file_name())
    }
}

impl ScriptRunner for ShellScripts {
    fn run(&mut self, script: Script, args: &[&str]) -> Result<Option<i32>> {
        let path = self.script_path(script);
        let mut argv = vec![path.clone().into_os_string()];
        argv.extend(args.iter().map(|arg| OsString::from(*arg)));

        log::info!("run: {} {} {:?}", self.interpreter, path.display(), args);
        let expr = duct::cmd(self.interpreter.as_str(), argv).unchecked();
        #[cfg(unix)]
        let expr = expr.before_spawn(|cmd| {
            use std::os::unix::process::CommandExt;
            // 子进程恢复默认处理，Ctrl-C 只结束脚本
            unsafe {
                cmd.pre_exec(|| {
                    libc::signal(libc::SIGINT, libc::SIG_DFL);
                    libc::signal(libc::SIGQUIT, libc::SIG_DFL);
                    Ok(())
                });
            }
            Ok(())
        });

        #[cfg(unix)]
        let _interrupts = InterruptGuard::ignore();
        let output = expr
            .run()
            .map_err(|source| PktError::Spawn {
                script: path.clone(),
                source,
            })?;

        let code = output.status.code();
        if code.is_none() {
            log::warn!("{} terminated by signal", path.display());
        } else {
            log::debug!("{} exited with {:?}", path.display(), code);
        }
        Ok(code)
    }
}

/// 等待脚本期间父进程忽略 SIGINT / SIGQUIT，drop 时恢复原处理
#[cfg(unix)]
struct InterruptGuard {
    prev_int: libc::sighandler_t,
    prev_quit: libc::sighandler_t,
}

#[cfg(unix)]
impl InterruptGuard {
    fn ignore() -> Self {
        unsafe {
            Self {
                prev_int: libc::signal(libc::SIGINT, libc::SIG_IGN),
                prev_quit: libc::signal(libc::SIGQUIT, libc::SIG_IGN),
            }
        }
    }
}

#[cfg(unix)]
impl Drop for InterruptGuard {
    fn drop(&mut self) {
        unsafe {
            libc::signal(libc::SIGINT, self.prev_int);
            libc::signal(libc::SIGQUIT, self.prev_quit);
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;

    // 信号处理是进程级的，跑脚本的测试串行执行
    static SERIAL: Mutex<()> = Mutex::new(());

    fn serial() -> std::sync::MutexGuard<'static, ()> {
        SERIAL.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn runner_with(dir: &std::path::Path, script: Script, body: &str) -> ShellScripts {
        fs::write(dir.join(script.file_name()), body).unwrap();
        ShellScripts::new("sh", dir.to_path_buf())
    }

    #[test]
    fn reports_exit_codes() {
        let _serial = serial();
        let dir = tempfile::tempdir().unwrap();
        let mut runner = runner_with(
            dir.path(),
            Script::CheckUpdate,
            "[ \"$1\" = stale ] && exit 1\nexit 0\n",
        );
        assert_eq!(runner.run(Script::CheckUpdate, &["stale"]).unwrap(), Some(1));
        assert_eq!(runner.run(Script::CheckUpdate, &["fresh"]).unwrap(), Some(0));
    }

    #[test]
    fn passes_arguments_verbatim() {
        let _serial = serial();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("args.txt");
        let body = format!("printf '%s|' \"$@\" > '{}'\n", out.display());
        let mut runner = runner_with(dir.path(), Script::Install, &body);

        let code = runner.run(Script::Install, &["a;touch pwned", "update"]).unwrap();
        assert_eq!(code, Some(0));
        assert_eq!(fs::read_to_string(&out).unwrap(), "a;touch pwned|update|");
        assert!(!dir.path().join("pwned").exists());
    }

    #[test]
    fn missing_script_is_a_nonzero_exit() {
        let _serial = serial();
        let dir = tempfile::tempdir().unwrap();
        let mut runner = ShellScripts::new("sh", dir.path().to_path_buf());
        let code = runner.run(Script::Uninstall, &["nnn"]).unwrap();
        assert_ne!(code, Some(0));
    }

    #[test]
    fn missing_interpreter_is_a_spawn_error() {
        let _serial = serial();
        let dir = tempfile::tempdir().unwrap();
        let mut runner = ShellScripts::new("/definitely/not/a/shell", dir.path().to_path_buf());
        assert!(matches!(
            runner.run(Script::Install, &["nnn"]),
            Err(PktError::Spawn { .. })
        ));
    }

    #[test]
    fn interrupt_during_script_does_not_kill_the_menu() {
        let _serial = serial();
        let dir = tempfile::tempdir().unwrap();
        let mut runner = runner_with(
            dir.path(),
            Script::Install,
            "kill -INT $PPID\nsleep 1\nexit 130\n",
        );
        let before = unsafe { libc::signal(libc::SIGINT, libc::SIG_DFL) };
        assert_eq!(runner.run(Script::Install, &["nnn"]).unwrap(), Some(130));

        // 结束后恢复为运行前的处理
        let after = unsafe { libc::signal(libc::SIGINT, before) };
        assert_eq!(after, libc::SIG_DFL);
    }

    #[test]
    fn script_keeps_default_interrupt_handling() {
        let _serial = serial();
        let dir = tempfile::tempdir().unwrap();
        let mut runner = runner_with(dir.path(), Script::Install, "kill -INT $$\nexit 0\n");
        assert_eq!(runner.run(Script::Install, &["nnn"]).unwrap(), None);
    }
}
