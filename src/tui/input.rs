use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;
#[cfg(not(unix))]
use std::io::Read;

const ESC: u8 = 0x1b;
const CTRL_C: u8 = 0x03;

/// 菜单层面的按键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Uninstall,
    Update,
    Quit,
    Other,
}

/// 逐字节读取键盘输入，`None` 表示输入已关闭
pub trait KeySource {
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

/// 持有期间终端处于 raw 模式，drop 时恢复
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            log::error!("failed to restore terminal mode: {}", e);
        }
    }
}

/// 标准输入；raw 模式只覆盖单次读取。
///
/// 直接对 fd 逐字节 read，不经过 `io::stdin()` 的缓冲，
/// 预先敲下的按键留在终端里，仍能被随后运行的脚本读到。
pub struct StdinKeys {
    #[cfg(unix)]
    fd: std::os::unix::io::RawFd,
}

impl Default for StdinKeys {
    fn default() -> Self {
        Self {
            #[cfg(unix)]
            fd: libc::STDIN_FILENO,
        }
    }
}

impl StdinKeys {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeySource for StdinKeys {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let _raw = RawModeGuard::enter()?;
        #[cfg(unix)]
        let byte = read_fd_byte(self.fd);
        #[cfg(not(unix))]
        let byte = read_unbuffered(&mut io::stdin());
        byte
    }
}

/// 从 fd 读一个字节，EINTR 时重试
#[cfg(unix)]
fn read_fd_byte(fd: std::os::unix::io::RawFd) -> io::Result<Option<u8>> {
    let mut byte = 0u8;
    loop {
        let n = unsafe { libc::read(fd, &mut byte as *mut u8 as *mut libc::c_void, 1) };
        match n {
            0 => return Ok(None),
            1 => return Ok(Some(byte)),
            _ => {
                let err = io::Error::last_os_error();
                if err.kind() != io::ErrorKind::Interrupted {
                    return Err(err);
                }
            }
        }
    }
}

#[cfg(not(unix))]
fn read_unbuffered<R: Read>(src: &mut R) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match src.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

/// 读一个按键。ESC 之后最多再读两个字节，不是 `[A` / `[B` 的序列直接吞掉
pub fn read_key<S: KeySource + ?Sized>(src: &mut S) -> io::Result<Option<Key>> {
    let Some(byte) = src.read_byte()? else {
        return Ok(None);
    };
    let key = match byte {
        ESC => match src.read_byte()? {
            Some(b'[') => match src.read_byte()? {
                Some(b'A') => Key::Up,
                Some(b'B') => Key::Down,
                _ => Key::Other,
            },
            _ => Key::Other,
        },
        b'k' => Key::Up,
        b'j' => Key::Down,
        b'\n' | b'\r' => Key::Enter,
        b'd' | b'D' => Key::Uninstall,
        b'u' | b'U' => Key::Update,
        b'q' | b'Q' | CTRL_C => Key::Quit,
        _ => Key::Other,
    };
    Ok(Some(key))
}

/// y/N 确认；除 y/Y 外（包括输入关闭）一律视为拒绝
pub fn confirm<S: KeySource + ?Sized>(src: &mut S) -> io::Result<bool> {
    Ok(matches!(src.read_byte()?, Some(b'y' | b'Y')))
}

/// 等待任意键
pub fn wait_any<S: KeySource + ?Sized>(src: &mut S) -> io::Result<()> {
    src.read_byte()?;
    Ok(())
}

#[cfg(test)]
impl KeySource for std::collections::VecDeque<u8> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.pop_front())
    }
}
