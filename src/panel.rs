//! State behind the interactive generator panel, independent of how it gets drawn.
//!
//! A front end owns a [`GeneratorPanel`], feeds it [`PanelEvent`]s as the user acts, and redraws
//! from [`GeneratorPanel::view`] afterwards.

use std::ops::RangeInclusive;

use rand::{CryptoRng, Rng};

use crate::password_generation::PasswordSampler;
use crate::Secret;

/// The lengths the panel's slider can select.
pub const LENGTH_RANGE: RangeInclusive<usize> = 6..=50;
pub const DEFAULT_LENGTH: usize = 12;

pub const TITLE: &str = "🔒 Password Generator";

/// Somewhere to put a copied password.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), anyhow::Error>;
}

impl<C: Clipboard + ?Sized> Clipboard for &mut C {
    fn set_text(&mut self, text: &str) -> Result<(), anyhow::Error> {
        (**self).set_text(text)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PanelEvent {
    /// The slider moved. Values outside [`LENGTH_RANGE`] are clamped.
    LengthChanged(usize),
    Generate,
    /// Copy the displayed password; does nothing if there isn't one yet.
    Copy,
    ToggleTheme,
}

/// A non-blocking confirmation shown to the user after an event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Notice {
    Copied,
    CopyFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Copied => "Your password is Copied!",
            Notice::CopyFailed => "Your password could not be copied.",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("failed to copy the password to the clipboard: {0}")]
    Clipboard(#[source] anyhow::Error),
}

/// Everything a front end needs to draw the panel.
#[derive(Debug)]
pub struct PanelView<'a> {
    pub title: &'static str,
    pub password: &'a Secret,
    pub length: usize,
    pub length_label: String,
    pub theme: Theme,
    pub notice: Option<Notice>,
}

pub struct GeneratorPanel<R, C> {
    sampler: PasswordSampler<R>,
    clipboard: C,
    length: usize,
    password: Secret,
    theme: Theme,
    notice: Option<Notice>,
}

impl<R, C> GeneratorPanel<R, C>
where
    R: Rng + CryptoRng,
    C: Clipboard,
{
    pub fn new(sampler: PasswordSampler<R>, clipboard: C) -> GeneratorPanel<R, C> {
        GeneratorPanel {
            sampler,
            clipboard,
            length: DEFAULT_LENGTH,
            password: Secret::default(),
            theme: Theme::default(),
            notice: None,
        }
    }

    pub fn with_length(mut self, length: usize) -> GeneratorPanel<R, C> {
        self.length = clamp_length(length);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> GeneratorPanel<R, C> {
        self.theme = theme;
        self
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn password(&self) -> &Secret {
        &self.password
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn length_label(&self) -> String {
        format!("How Long: {}", self.length)
    }

    pub fn view(&self) -> PanelView<'_> {
        PanelView {
            title: TITLE,
            password: &self.password,
            length: self.length,
            length_label: self.length_label(),
            theme: self.theme,
            notice: self.notice,
        }
    }

    /// Apply one user action. Returns the notice to show for it, if any.
    ///
    /// A notice only lasts until the next event. A failed copy leaves `Notice::CopyFailed` in the
    /// view before returning the error, and the panel stays usable.
    pub fn handle(&mut self, event: PanelEvent) -> Result<Option<Notice>, PanelError> {
        log::debug!("panel event: {:?}", event);
        self.notice = None;
        match event {
            PanelEvent::LengthChanged(length) => self.length = clamp_length(length),
            PanelEvent::Generate => self.password = self.sampler.generate(self.length),
            PanelEvent::Copy => {
                if self.password.is_empty() {
                    return Ok(None);
                }
                if let Err(err) = self.clipboard.set_text(self.password.as_str()) {
                    self.notice = Some(Notice::CopyFailed);
                    return Err(PanelError::Clipboard(err));
                }
                self.notice = Some(Notice::Copied);
            }
            PanelEvent::ToggleTheme => self.theme = self.theme.toggled(),
        }
        Ok(self.notice)
    }
}

fn clamp_length(length: usize) -> usize {
    length.clamp(*LENGTH_RANGE.start(), *LENGTH_RANGE.end())
}
