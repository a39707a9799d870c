//! 固定六色调色板与横幅，全局统一使用

use crossterm::style::Color;

pub const RED: Color = Color::DarkRed;
pub const GREEN: Color = Color::DarkGreen;
pub const YELLOW: Color = Color::DarkYellow;
pub const BLUE: Color = Color::DarkBlue;
pub const CYAN: Color = Color::DarkCyan;
pub const WHITE: Color = Color::Grey;

/// 每帧原样输出
pub const BANNER: &[&str] = &[
    "  ____  _    _   ",
    " |  _ \\| | _| |_ ",
    " | |_) | |/ / __|",
    " |  __/|   <| |_ ",
    " |_|   |_|\\_\\\\__|",
];

pub const TAGLINE: &str = " Package Manager for Termux";
pub const RULE: &str = " ─────────────────────────────────";
