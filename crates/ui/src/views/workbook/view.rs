use std::time::Duration;

use dioxus::document;
use dioxus::prelude::*;

use workbook_core::model::{AudioKey, Cursor, DisplayMode, PAGE_COUNT, page_registry};

use super::audio::{AudioController, use_audio_controller};
use super::pages::PageContent;
use super::print::PrintLayout;
use super::scripts;
use super::stores::use_workbook_stores;
use crate::context::AppContext;
use crate::routes::print_param_enabled;
use crate::vm::{auto_print_should_fire, page_position_label, progress_percent};

/// Layout-settle delay before the automatic print dialog fires.
const AUTO_PRINT_DELAY_MS: u64 = 500;

#[component]
pub fn WorkbookView(print: String) -> Element {
    let ctx = use_context::<AppContext>();
    let _stores = use_workbook_stores(&ctx);
    let mut cursor = use_signal(|| Cursor::new(PAGE_COUNT));
    let audio = use_audio_controller();

    // Both entry paths are one-shot: the launch flag via the context swap,
    // the query parameter by being read only at mount.
    let launch_ctx = ctx.clone();
    let start_in_print =
        use_hook(move || launch_ctx.take_print_on_launch() || print_param_enabled(&print));
    let mut mode = use_signal(move || {
        if start_in_print {
            DisplayMode::Print
        } else {
            DisplayMode::Interactive
        }
    });
    let mut auto_print_pending = use_signal(move || start_in_print);

    // One automatic dialog per print-mode entry, after layout settles.
    // Exiting before the delay clears the flag, which cancels the task's
    // effect without a stray dialog.
    use_effect(move || {
        if mode() == DisplayMode::Print && auto_print_pending() {
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(AUTO_PRINT_DELAY_MS)).await;
                if auto_print_should_fire(*mode.peek(), *auto_print_pending.peek()) {
                    auto_print_pending.set(false);
                    document::eval(scripts::OPEN_PRINT_DIALOG);
                }
            });
        }
    });

    // Stop narration when the view unmounts; no orphaned playback.
    use_drop(move || {
        document::eval(scripts::RELEASE_AUDIO);
    });

    if mode() == DisplayMode::Print {
        return rsx! {
            PrintLayout {
                on_exit: move |()| {
                    auto_print_pending.set(false);
                    mode.set(DisplayMode::Interactive);
                },
            }
        };
    }

    let position = cursor();
    let page = &page_registry()[position.index()];

    rsx! {
        div { class: "workbook",
            header { class: "workbook-header",
                div { class: "brand",
                    div { class: "brand-badge", "G" }
                    span { class: "brand-name", "Get Fundable Fast\u{2122}" }
                }
                div { class: "header-actions",
                    button {
                        r#type: "button",
                        class: "print-toggle",
                        title: "Switch to Print View",
                        onclick: move |_| {
                            mode.set(DisplayMode::Print);
                            auto_print_pending.set(true);
                        },
                        "\u{2399}"
                    }
                    div { class: "position-label", "{page_position_label(&position)}" }
                }
            }

            main { class: "workbook-main",
                div { class: "page-frame",
                    div { class: "page-masthead",
                        h2 { class: "page-title",
                            if !position.is_first() {
                                "{page.title}"
                            }
                        }
                        if let Some(key) = page.audio {
                            AudioPrompt { audio, audio_key: key }
                        }
                    }
                    div { class: "page-body",
                        PageContent { index: position.index(), mode: DisplayMode::Interactive }
                    }
                }
            }

            footer { class: "workbook-footer",
                button {
                    r#type: "button",
                    class: if position.is_first() { "nav-button nav-hidden" } else { "nav-button" },
                    disabled: position.is_first(),
                    onclick: move |_| {
                        cursor.write().prev();
                        document::eval(scripts::SCROLL_TO_TOP);
                    },
                    "\u{2039} Back"
                }
                div { class: "progress-track",
                    div {
                        class: "progress-fill",
                        style: "width: {progress_percent(&position)}%",
                    }
                }
                button {
                    r#type: "button",
                    class: if position.is_last() { "nav-button nav-hidden" } else { "nav-button" },
                    disabled: position.is_last(),
                    onclick: move |_| {
                        cursor.write().next();
                        document::eval(scripts::SCROLL_TO_TOP);
                    },
                    "Next \u{203a}"
                }
            }
        }
    }
}

/// The round "Listen" button shown when the page has narration.
#[component]
fn AudioPrompt(audio: AudioController, audio_key: AudioKey) -> Element {
    let playing = audio.is_playing(audio_key);
    let mut audio = audio;

    rsx! {
        button {
            r#type: "button",
            class: if playing { "audio-prompt audio-prompt-on no-print" } else { "audio-prompt no-print" },
            onclick: move |_| audio.request(audio_key),
            span { class: "audio-glyph",
                if playing {
                    "\u{2759}\u{2759}"
                } else {
                    "\u{25b6}"
                }
            }
            span { class: "audio-label", "Listen" }
        }
    }
}
