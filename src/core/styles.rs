//! Style roles for the terminal front end
//!
//! Each logical role (lane title, rank column, alert, ...) maps to an optional
//! `colored::Color`. Colour is applied only when the caller passes
//! `enabled = true`, so there is no global colour switch to keep in sync.
//!
//! ```
//! use helpqueue::core::styles::StyleRole;
//! assert_eq!(StyleRole::Title.paint("Quick Questions", false), "Quick Questions");
//! let painted = StyleRole::Title.paint("Quick Questions", true);
//! assert!(painted.starts_with("\x1b[") && painted.ends_with("\x1b[0m"));
//! ```

use clap::builder::styling::AnsiColor;
use colored::Color;

macro_rules! style {
    ( $( $variant:ident => $color:expr ),+ $(,)? ) => {
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        pub enum StyleRole { $( $variant ),+ }

        impl StyleRole {
            pub fn color(self) -> Option<Color> {
                match self { $( StyleRole::$variant => $color ),+ }
            }

            pub fn ansi_code(self) -> Option<String> {
                map_color_code(self.color()?)
            }

            pub fn paint(self, text: &str, enabled: bool) -> String {
                if !enabled { return text.to_string(); }
                match self.ansi_code() {
                    Some(code) => format!("\x1b[{}m{}\x1b[0m", code, text),
                    None => text.to_string(),
                }
            }
        }
    }
}

style! {
    Title        => Some(Color::Yellow),
    Subtitle     => Some(Color::BrightBlack),
    Header       => Some(Color::Cyan),
    Rank         => Some(Color::BrightGreen),
    Name         => None,
    Wait         => Some(Color::Green),
    Summary      => Some(Color::Blue),
    Mode         => Some(Color::Magenta),
    Alert        => Some(Color::BrightRed),
    Prompt       => Some(Color::Cyan),
    Announcement => Some(Color::BrightYellow),
}

fn map_color_code(c: Color) -> Option<String> {
    let code = match c {
        Color::Black => "30",
        Color::Red => "31",
        Color::Green => "32",
        Color::Yellow => "33",
        Color::Blue => "34",
        Color::Magenta => "35",
        Color::Cyan => "36",
        Color::White => "37",
        Color::BrightBlack => "90",
        Color::BrightRed => "91",
        Color::BrightGreen => "92",
        Color::BrightYellow => "93",
        Color::BrightBlue => "94",
        Color::BrightMagenta => "95",
        Color::BrightCyan => "96",
        Color::BrightWhite => "97",
        Color::TrueColor { r, g, b } => return Some(format!("38;2;{};{};{}", r, g, b)),
        // 256-colour and any later palette variants are not used by the roles
        #[allow(unreachable_patterns)]
        _ => return None,
    };
    Some(code.to_string())
}

fn color_to_ansi(c: Color) -> Option<AnsiColor> {
    Some(match c {
        Color::Black => AnsiColor::Black,
        Color::Red => AnsiColor::Red,
        Color::Green => AnsiColor::Green,
        Color::Yellow => AnsiColor::Yellow,
        Color::Blue => AnsiColor::Blue,
        Color::Magenta => AnsiColor::Magenta,
        Color::Cyan => AnsiColor::Cyan,
        Color::White => AnsiColor::White,
        Color::BrightBlack => AnsiColor::BrightBlack,
        Color::BrightRed => AnsiColor::BrightRed,
        Color::BrightGreen => AnsiColor::BrightGreen,
        Color::BrightYellow => AnsiColor::BrightYellow,
        Color::BrightBlue => AnsiColor::BrightBlue,
        Color::BrightMagenta => AnsiColor::BrightMagenta,
        Color::BrightCyan => AnsiColor::BrightCyan,
        Color::BrightWhite => AnsiColor::BrightWhite,
        _ => return None,
    })
}

/// Build clap help styles from the same roles
pub fn palette_to_clap(enabled: bool) -> clap::builder::Styles {
    use clap::builder::styling::{Color as ClapColor, Style};
    if !enabled {
        return clap::builder::Styles::plain();
    }

    let style = |role: StyleRole, bold: bool| {
        let mut s = Style::new();
        if let Some(col) = role.color().and_then(color_to_ansi) {
            s = s.fg_color(Some(ClapColor::Ansi(col)));
        }
        if bold {
            s = s.bold();
        }
        s
    };

    clap::builder::Styles::styled()
        .header(style(StyleRole::Title, true))
        .usage(style(StyleRole::Title, true))
        .literal(style(StyleRole::Header, false))
        .placeholder(style(StyleRole::Wait, false))
        .valid(style(StyleRole::Wait, false))
        .invalid(style(StyleRole::Alert, false))
        .error(style(StyleRole::Alert, true))
}
