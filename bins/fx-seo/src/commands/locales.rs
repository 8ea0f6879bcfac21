//! `fx-seo locales` - inspect the locale tables

use flowxtra_core::locale;
use owo_colors::OwoColorize;

pub fn run() -> anyhow::Result<()> {
    println!("{}", "Supported locales".bold());

    for l in locale::supported_locales() {
        let kind = if locale::is_base(l) { "base   " } else { "variant" };
        let chain = locale::fallback_chain(l).join(" -> ");
        println!("  {}  {}  fallback: {}", l.cyan(), kind.dimmed(), chain);
    }

    println!(
        "\n{} base locales, {} variants; content fallback terminates at '{}'",
        locale::BASE_LOCALES.len(),
        locale::VARIANT_LOCALES.len(),
        locale::DEFAULT_LOCALE
    );

    Ok(())
}
