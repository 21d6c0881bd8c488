//! Shared UI icons and emojis.
//!
//! Plain-text fallbacks are used on terminals without emoji support.

use console::Emoji;

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK]");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR]");
pub static HOURGLASS: Emoji<'_, '_> = Emoji("⏳ ", "[..]");
pub static CIRCLE: Emoji<'_, '_> = Emoji("⭕ ", "[ ]");

// Section headers
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static TROPHY: Emoji<'_, '_> = Emoji("🏆 ", "");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static PERSON: Emoji<'_, '_> = Emoji("👤 ", "");

// Row details
pub static CALENDAR: Emoji<'_, '_> = Emoji("📅 ", "");
pub static STAR: Emoji<'_, '_> = Emoji("⭐ ", "*");
