use std::fmt::{self, Display};
use std::io::{self, Write};

use console::Style;
use unicode_width::UnicodeWidthStr;

use passgen::panel::LENGTH_RANGE;
use passgen::{PanelView, Theme};

/// Inner width of the password field; fits the longest password the slider allows.
const FIELD_WIDTH: usize = *LENGTH_RANGE.end() + 2;
const SLIDER_WIDTH: usize = 30;

struct Palette {
    title: Style,
    border: Style,
    text: Style,
    accent: Style,
}

impl Palette {
    fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Light => Palette {
                title: Style::new().bold(),
                border: Style::new().dim(),
                text: Style::new(),
                accent: Style::new().blue(),
            },
            Theme::Dark => Palette {
                title: Style::new().bold().white(),
                border: Style::new().cyan(),
                text: Style::new().white(),
                accent: Style::new().cyan(),
            },
        }
    }
}

/// Draw the panel as lines of text, styled for its theme.
pub(crate) fn render_panel(view: &PanelView<'_>, mut out: impl Write) -> io::Result<()> {
    let palette = Palette::for_theme(view.theme);
    let total_width = FIELD_WIDTH + 2;
    let title_padding = total_width.saturating_sub(view.title.width()) / 2;
    writeln!(
        out,
        "{}{}",
        " ".repeat(title_padding),
        palette.title.apply_to(view.title)
    )?;
    writeln!(out)?;

    writeln!(out, "{}", palette.border.apply_to(Border('╭', '╮')))?;
    writeln!(
        out,
        "{} {} {}",
        palette.border.apply_to('│'),
        palette
            .text
            .apply_to(Padded(view.password.as_str(), FIELD_WIDTH - 2)),
        palette.border.apply_to('│'),
    )?;
    writeln!(out, "{}", palette.border.apply_to(Border('╰', '╯')))?;
    writeln!(out)?;

    writeln!(
        out,
        "{}  {}",
        Padded(&view.length_label, "How Long: 50".width()),
        palette.accent.apply_to(Slider(view.length)),
    )?;
    writeln!(out, "Theme: {}", palette.accent.apply_to(ThemeName(view.theme)))?;

    if let Some(notice) = view.notice {
        writeln!(out)?;
        writeln!(out, "{}", palette.accent.apply_to(notice.message()))?;
    }
    Ok(())
}

struct Border(char, char);

impl Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        for _ in 0..FIELD_WIDTH {
            write!(f, "─")?;
        }
        write!(f, "{}", self.1)
    }
}

struct Padded<'a>(&'a str, usize);

impl Display for Padded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let padding = self.1.saturating_sub(self.0.width());
        write!(f, "{}", self.0)?;
        for _ in 0..padding {
            write!(f, " ")?;
        }
        Ok(())
    }
}

/// A horizontal track with a knob at the current length.
struct Slider(usize);

impl Display for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (min, max) = (*LENGTH_RANGE.start(), *LENGTH_RANGE.end());
        let knob = (self.0.clamp(min, max) - min) * (SLIDER_WIDTH - 1) / (max - min);
        for i in 0..SLIDER_WIDTH {
            write!(f, "{}", if i == knob { '●' } else { '━' })?;
        }
        Ok(())
    }
}

struct ThemeName(Theme);

impl Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}
