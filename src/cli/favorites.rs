//! `--favorites` and `--clear-favorites`.

use std::io::Write;

use color_eyre::Result;

use crate::favorites::FavoritesStore;
use crate::ui::NO_IMAGE;

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// Print every saved favorite, one per line.
///
/// ```text
/// FAVORITES (2)
/// ════════════════════════════════════════════════════════════
///   ★ bulbasaur   https://.../1.png
///   ★ mew         (no image)
/// ```
pub fn write_favorites<W: Write>(out: &mut W, store: &FavoritesStore) -> Result<()> {
    let favorites = store.load();
    writeln!(out, "FAVORITES ({})", favorites.len())?;
    writeln!(out, "{}", "═".repeat(LINE_WIDTH))?;
    if favorites.is_empty() {
        writeln!(out, "  (none)")?;
        return Ok(());
    }

    let name_width = favorites
        .iter()
        .map(|item| item.name.chars().count())
        .max()
        .unwrap_or(0);
    for item in &favorites {
        writeln!(
            out,
            "  ★ {:<width$}   {}",
            item.name,
            item.image.as_deref().unwrap_or(NO_IMAGE),
            width = name_width
        )?;
    }
    Ok(())
}

pub fn handle_list_favorites(store: &FavoritesStore) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_favorites(&mut stdout, store)
}

pub fn handle_clear_favorites(store: &FavoritesStore) -> Result<()> {
    let count = store.load().len();
    store.clear()?;
    tracing::info!("Cleared {} favorites", count);
    println!("  ✓ Removed {} favorites", count);
    Ok(())
}
