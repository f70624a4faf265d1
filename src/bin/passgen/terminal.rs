//! The generator panel, driven from the terminal.

use anyhow::Context;
use console::Term;
use dialoguer::theme::ColorfulTheme;
use rand::{CryptoRng, Rng};

use passgen::panel::LENGTH_RANGE;
use passgen::{Clipboard, GeneratorPanel, PanelError, PanelEvent};

use crate::ProgError;

const ACTIONS: &[&str] = &["Generate", "Copy", "Length", "Theme", "Quit"];

pub(crate) fn run_panel<R, C>(panel: &mut GeneratorPanel<R, C>) -> Result<(), ProgError>
where
    R: Rng + CryptoRng,
    C: Clipboard,
{
    let term = Term::stderr();
    let theme = ColorfulTheme::default();
    let mut selected = 0;
    let mut last_error: Option<String> = None;
    loop {
        term.clear_screen().context("failed to clear the terminal")?;
        crate::render::render_panel(&panel.view(), &term).context("failed to draw the panel")?;
        if let Some(err) = last_error.as_deref() {
            term.write_line(&console::style(err).red().to_string())
                .context("failed to draw the panel")?;
        }
        term.write_line("").context("failed to draw the panel")?;

        let selection = dialoguer::Select::with_theme(&theme)
            .items(ACTIONS)
            .default(selected)
            .interact_on_opt(&term)
            .context("failed to query your selection")?;
        let event = match selection {
            Some(0) => PanelEvent::Generate,
            Some(1) => PanelEvent::Copy,
            Some(2) => PanelEvent::LengthChanged(ask_length(&term, &theme, panel.length())?),
            Some(3) => PanelEvent::ToggleTheme,
            _ => break,
        };
        selected = selection.unwrap_or_default();
        last_error = dispatch(panel, event).map(|err| err.to_string());
    }
    Ok(())
}

/// Hand one event to the panel. Errors are returned for display rather than ending the session.
fn dispatch<R, C>(panel: &mut GeneratorPanel<R, C>, event: PanelEvent) -> Option<PanelError>
where
    R: Rng + CryptoRng,
    C: Clipboard,
{
    match panel.handle(event) {
        Ok(_) => None,
        Err(err) => {
            log::warn!("{}", err);
            Some(err)
        }
    }
}

fn ask_length(term: &Term, theme: &ColorfulTheme, current: usize) -> anyhow::Result<usize> {
    let (min, max) = (*LENGTH_RANGE.start(), *LENGTH_RANGE.end());
    let length = dialoguer::Input::<usize>::with_theme(theme)
        .with_prompt("How Long")
        .default(current)
        .validate_with(move |length: &usize| -> Result<(), String> {
            if LENGTH_RANGE.contains(length) {
                Ok(())
            } else {
                Err(format!("pick a length between {min} and {max}"))
            }
        })
        .interact_text_on(term)
        .context("failed to read the new length")?;
    Ok(length)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use passgen::{Notice, PasswordSampler};

    use super::*;

    struct MissingClipboardTool;

    impl Clipboard for MissingClipboardTool {
        fn set_text(&mut self, _text: &str) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("failed to start `xsel`"))
        }
    }

    #[test]
    fn copy_failure_is_shown_and_session_continues() {
        let mut panel = GeneratorPanel::new(
            PasswordSampler::new(StdRng::seed_from_u64(8)),
            MissingClipboardTool,
        );
        assert!(dispatch(&mut panel, PanelEvent::Generate).is_none());
        let shown = panel.password().clone();

        let err = dispatch(&mut panel, PanelEvent::Copy).unwrap();

        assert!(err.to_string().contains("xsel"));
        assert_eq!(panel.view().notice, Some(Notice::CopyFailed));
        assert_eq!(panel.password(), &shown);
        assert!(dispatch(&mut panel, PanelEvent::ToggleTheme).is_none());
        assert_eq!(panel.view().notice, None);
    }
}
