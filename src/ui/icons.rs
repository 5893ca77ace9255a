//! Shared UI icons with plain-text fallbacks for non-emoji terminals.

use console::Emoji;

pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK]");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR]");
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "*");
pub static GLOBE: Emoji<'_, '_> = Emoji("🌐 ", "");
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "");
pub static USER: Emoji<'_, '_> = Emoji("👤 ", "");
