//! Plain-text rendering of the page: navbar, hero, results panel, services grid.

use client_core::PresentationShell;
use client_core::locale::language_name;

use models::{ModelTier, RequestState, TargetLanguage};

use std::fmt::Write;

const RULE: &str = "────────────────────────────────────────────────────────────";
const INPUT_PREVIEW_CHARS: usize = 120;

/// Render the whole page for the current state.
pub fn render(shell: &PresentationShell) -> String {
    let mut out = String::new();
    render_navbar(&mut out, shell);
    render_hero(&mut out, shell);
    render_results(&mut out, shell);
    render_services(&mut out, shell);
    out
}

fn render_navbar(out: &mut String, shell: &PresentationShell) {
    let nav = &shell.strings().nav;
    let _ = writeln!(
        out,
        "{}    {} · {} · {} · {}    [{}]",
        nav.brand, nav.features, nav.pricing, nav.docs, nav.contact, nav.switch_label
    );
    let _ = writeln!(out, "{RULE}");
}

fn render_hero(out: &mut String, shell: &PresentationShell) {
    let strings = shell.strings();
    let hero = &strings.hero;
    let ui = shell.ui_language();

    let _ = writeln!(out, "{}", hero.greeting);
    let _ = writeln!(out, "{}", hero.name);
    let _ = writeln!(out, "{}\n", hero.question);

    let input = shell.input_text();
    if input.is_empty() {
        let _ = writeln!(out, "  > {}", hero.placeholder);
    } else {
        let char_count = input.chars().count();
        let preview: String = input.chars().take(INPUT_PREVIEW_CHARS).collect();
        let ellipsis = if char_count > INPUT_PREVIEW_CHARS { "…" } else { "" };
        let _ = writeln!(out, "  > {preview}{ellipsis} ({char_count})");
    }

    if let Some(file) = shell.attached_file() {
        let _ = writeln!(
            out,
            "  📎 {}: {} ({} bytes)",
            hero.attachment_label, file.name, file.size_bytes
        );
    }

    let _ = writeln!(
        out,
        "  {}: {} ({})   {} {}",
        hero.target_label,
        language_name(ui, shell.target_language()),
        shell.target_language(),
        tier_icon(shell.model_tier()),
        strings.model_tier(shell.model_tier())
    );

    if shell.is_language_dropdown_open() {
        for language in TargetLanguage::ALL {
            let marker = if language == shell.target_language() { "•" } else { " " };
            let _ = writeln!(
                out,
                "     {marker} {:<3} {}",
                language.code(),
                language_name(ui, language)
            );
        }
    }

    if shell.is_model_dropdown_open() {
        for tier in [ModelTier::Standard, ModelTier::Advanced] {
            let marker = if tier == shell.model_tier() { "•" } else { " " };
            let _ = writeln!(
                out,
                "     {marker} {} {}",
                tier_icon(tier),
                strings.model_tier(tier)
            );
        }
    }

    if let Some(notice) = shell.notice_message() {
        let _ = writeln!(out, "  ! {notice}");
    }
    let _ = writeln!(out);
}

fn render_results(out: &mut String, shell: &PresentationShell) {
    let messages = &shell.strings().messages;

    match shell.request_state() {
        RequestState::Idle => return,
        RequestState::InFlight => {
            let _ = writeln!(out, "{RULE}\n{}", messages.translating);
        }
        RequestState::Succeeded(result) => {
            let _ = writeln!(out, "{RULE}\n{}:", messages.result_heading);
            let _ = writeln!(out, "{}\n", result.translated_text);
            let _ = writeln!(
                out,
                "{}: {}%   {}: {}",
                messages.quality_label,
                result.quality_percent(),
                messages.provider_label,
                result.provider
            );
        }
        RequestState::Failed => {
            let _ = writeln!(out, "{RULE}\n✗ {}", messages.translation_failed);
        }
    }

    if let Some(warning) = shell.warning_message() {
        let _ = writeln!(out, "⚠ {warning}");
    }
    let _ = writeln!(out);
}

fn render_services(out: &mut String, shell: &PresentationShell) {
    let _ = writeln!(out, "{RULE}");
    for card in &shell.strings().services {
        let _ = writeln!(out, "  ■ {}\n    {}", card.title, card.description);
    }
}

fn tier_icon(tier: ModelTier) -> &'static str {
    match tier {
        ModelTier::Standard => "⚡",
        ModelTier::Advanced => "✨",
    }
}
