use std::cell::RefCell;
use std::io::{self, Write};

use crate::render::{ProviderItem, TrailCard};
use crate::{ProvidersDisplay, ProvidersView, TrailsDisplay, TrailsView};

/// Plain-text view for the `search` command.
pub struct TerminalView<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_with(&self, write: impl FnOnce(&mut W) -> io::Result<()>) {
        let mut out = self.out.borrow_mut();
        if let Err(err) = write(&mut *out).and_then(|()| out.flush()) {
            tracing::warn!("terminal write failed: {}", err);
        }
    }
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TrailsView for TerminalView<W> {
    fn render_trails(&self, display: TrailsDisplay) {
        self.write_with(|out| match display {
            TrailsDisplay::Loading => Ok(()),
            TrailsDisplay::Loaded(list) => {
                writeln!(out, "== {} ==", list.count_label)?;
                for card in &list.cards {
                    write_card(out, card)?;
                }
                Ok(())
            }
            TrailsDisplay::Failed {
                message,
                count_label,
            } => {
                writeln!(out, "== {} ==", count_label)?;
                writeln!(out, "! {}", message)
            }
        });
    }
}

impl<W: Write> ProvidersView for TerminalView<W> {
    fn render_providers(&self, display: ProvidersDisplay) {
        self.write_with(|out| match display {
            ProvidersDisplay::Loading => Ok(()),
            ProvidersDisplay::Loaded(items) => {
                writeln!(out, "Data providers")?;
                for item in &items {
                    write_provider(out, item)?;
                }
                writeln!(out)
            }
            ProvidersDisplay::Failed { message } => writeln!(out, "! {}\n", message),
        });
    }
}

fn write_card(out: &mut impl Write, card: &TrailCard) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} ({})", card.name, card.location)?;
    writeln!(
        out,
        "  {} · {} · {}",
        card.distance, card.elevation, card.difficulty
    )?;
    writeln!(out, "  dogs: {} · surface: {}", card.dog_policy, card.surface)?;
    writeln!(out, "  {}: {}", card.provider, card.map_link.href)?;
    if let Some(warning) = &card.warning {
        writeln!(out, "  ! {}", warning)?;
    }
    Ok(())
}

fn write_provider(out: &mut impl Write, item: &ProviderItem) -> io::Result<()> {
    writeln!(out, "- {} [{}]", item.name, item.status)?;
    writeln!(out, "  {}", item.notes)?;
    writeln!(out, "  {}", item.website.href)
}
