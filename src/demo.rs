//! Interactive terminal demo of the tag-search stage.
//!
//! A single-line editor in raw mode. Type freely; `:` opens a tag session
//! and the strip below fills with candidates. While a session is open the
//! digit keys pick strip entries (`0` is the literal element), `F2` toggles
//! the feature flag and `F3` toggles the symbols pack so the searcher
//! lifecycle can be watched live. `Esc` or `Ctrl+c` quits.

use std::io::Write;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, terminal,
};

use quicktag_core::{PackId, SearchConfig};
use quicktag_packs::{PackCatalog, SYMBOLS};

use crate::config::HostConfig;
use crate::events::{InputEvent, SettingKey};
use crate::sink::BufferDocument;
use crate::stage::TagSearchStage;
use crate::words::StaticWordList;

type Stage = TagSearchStage<PackCatalog, BufferDocument, StaticWordList>;

/// Run the demo until the user quits.
pub fn run(host: HostConfig) -> anyhow::Result<()> {
    let catalog = match &host.packs.dir {
        Some(dir) => PackCatalog::with_pack_dir(dir)?,
        None => PackCatalog::builtin(),
    };
    let words = StaticWordList::new(host.words.list.clone());
    let mut stage = TagSearchStage::new(
        host.search.clone(),
        catalog,
        BufferDocument::new(),
        words,
    );

    terminal::enable_raw_mode()?;
    let result = event_loop(&mut stage, host.search);
    terminal::disable_raw_mode()?;
    result
}

fn event_loop(stage: &mut Stage, mut search: SearchConfig) -> anyhow::Result<()> {
    let mut out = std::io::stdout();
    render(&mut out, stage)?;

    loop {
        let Event::Key(key) = event::read()? else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Esc => break,
            KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => break,

            // Digits pick strip entries while a session is open.
            KeyCode::Char(c) if stage.is_search_mode_active() && c.is_ascii_digit() => {
                if let Some(index) = c.to_digit(10) {
                    if let Err(err) = stage.pick(index as usize) {
                        tracing::warn!(%err, "pick rejected");
                    }
                }
            }

            KeyCode::Char(c)
                if key.modifiers == KeyModifiers::NONE
                    || key.modifiers == KeyModifiers::SHIFT =>
            {
                stage.handle_key(InputEvent::Character(c));
            }
            KeyCode::Backspace => stage.handle_key(InputEvent::Delete),
            KeyCode::Enter => stage.handle_key(InputEvent::Character(' ')),

            KeyCode::F(2) => {
                search.tag_search_enabled = !search.tag_search_enabled;
                stage.on_configuration_changed(SettingKey::QuickTagSearch, &search);
            }
            KeyCode::F(3) => {
                toggle_symbols_pack(&mut search);
                stage.on_configuration_changed(SettingKey::ActiveTagPacks, &search);
            }

            _ => {}
        }

        render(&mut out, stage)?;
    }
    Ok(())
}

fn toggle_symbols_pack(search: &mut SearchConfig) {
    let symbols = PackId::from(SYMBOLS);
    if search.enabled_packs.contains(&symbols) {
        search.enabled_packs.retain(|id| *id != symbols);
    } else {
        search.enabled_packs.push(symbols);
    }
}

fn render(out: &mut impl Write, stage: &Stage) -> anyhow::Result<()> {
    execute!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;

    write!(
        out,
        "quicktag demo   [:] tag search   [0-9] pick   [F2] toggle search   [F3] toggle symbols   [Esc] quit\r\n\r\n"
    )?;
    write!(out, "> {}\r\n\r\n", stage.sink().text())?;

    let mode = if stage.is_search_mode_active() { "searching" } else { "idle" };
    let strip = stage.get_suggestions();
    write!(out, "[{mode}] {} suggestion(s)\r\n", strip.len())?;
    for (index, suggestion) in strip.iter().enumerate().take(10) {
        write!(out, "  [{index}] {suggestion}\r\n")?;
    }
    if strip.len() > 10 {
        write!(out, "  ... {} more\r\n", strip.len() - 10)?;
    }

    out.flush()?;
    Ok(())
}
