use super::state::App;
use super::theme;
use crate::package_manager::Package;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

pub const PRESS_ANY_KEY: &str = " Press any key to continue...";

/// 行颜色优先级：有更新 > 已安装 > 未安装
pub fn row_color(pkg: &Package) -> Color {
    if pkg.update_available {
        theme::YELLOW
    } else if pkg.installed {
        theme::GREEN
    } else {
        theme::WHITE
    }
}

fn colored<W: Write>(out: &mut W, color: Color, text: &str) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(color),
        Print(text),
        SetAttribute(Attribute::Reset)
    )
}

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}

fn draw_header<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Bold), SetForegroundColor(theme::CYAN))?;
    for line in theme::BANNER {
        queue!(out, Print(line), Print("\n"))?;
    }
    queue!(out, SetAttribute(Attribute::Reset), Print("\n"))?;
    colored(out, theme::WHITE, theme::TAGLINE)?;
    queue!(out, Print("\n"))?;
    colored(out, theme::WHITE, theme::RULE)?;
    queue!(out, Print("\n"))
}

fn draw_row<W: Write>(out: &mut W, pkg: &Package, selected: bool) -> io::Result<()> {
    if selected {
        queue!(
            out,
            SetAttribute(Attribute::Bold),
            Print(" > "),
            SetAttribute(Attribute::Reset)
        )?;
    } else {
        queue!(out, Print("   "))?;
    }

    colored(out, row_color(pkg), &format!("{:<12}", pkg.name))?;
    queue!(out, Print(format!(" - {}", pkg.description)))?;

    if pkg.installed {
        colored(out, theme::GREEN, " [installed]")?;
    }
    if pkg.update_available {
        colored(out, theme::YELLOW, " [update]")?;
    }
    queue!(out, Print("\n"))
}

fn draw_footer<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Print("\n"))?;
    colored(out, theme::WHITE, theme::RULE)?;
    queue!(out, Print("\n"))?;
    for (key, label) in [
        (" [↑/↓]", " Navigate  "),
        ("[Enter]", " Install  "),
        ("[u]", " Update  "),
        ("[d]", " Uninstall  "),
        ("[q]", " Quit"),
    ] {
        colored(out, theme::CYAN, key)?;
        queue!(out, Print(label))?;
    }
    queue!(out, Print("\n"))
}

/// 整屏重绘：清屏、横幅、列表、按键说明
pub fn draw_menu<W: Write>(out: &mut W, app: &App) -> io::Result<()> {
    clear_screen(out)?;
    draw_header(out)?;
    queue!(out, Print("\n"))?;
    for (i, pkg) in app.packages().iter().enumerate() {
        draw_row(out, pkg, i == app.selected())?;
    }
    draw_footer(out)?;
    out.flush()
}

/// `\n <msg>\n`，带颜色
pub fn status_line<W: Write>(out: &mut W, color: Color, msg: &str) -> io::Result<()> {
    queue!(out, Print("\n"))?;
    colored(out, color, &format!(" {}", msg))?;
    queue!(out, Print("\n"))?;
    out.flush()
}

/// 不换行的提示，等待按键
pub fn prompt<W: Write>(out: &mut W, color: Option<Color>, msg: &str) -> io::Result<()> {
    match color {
        Some(c) => colored(out, c, msg)?,
        None => queue!(out, Print(msg))?,
    }
    out.flush()
}

pub fn goodbye<W: Write>(out: &mut W) -> io::Result<()> {
    clear_screen(out)?;
    colored(out, theme::CYAN, "Thanks for using Pkt!")?;
    queue!(out, Print("\n"))?;
    out.flush()
}
