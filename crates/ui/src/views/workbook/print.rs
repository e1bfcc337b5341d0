use dioxus::document;
use dioxus::prelude::*;

use workbook_core::model::{DisplayMode, page_registry};

use super::pages::PageContent;
use super::scripts;
use crate::vm::print_page_label;

/// The flattened print flow: every page in registry order, one per printed
/// sheet, with a sticky preview bar that never reaches paper.
#[component]
pub(super) fn PrintLayout(on_exit: EventHandler<()>) -> Element {
    rsx! {
        div { class: "print-root",
            div { class: "print-bar no-print",
                span { class: "print-bar-label", "Print Preview Mode" }
                div { class: "print-bar-actions",
                    button {
                        r#type: "button",
                        class: "print-bar-print",
                        onclick: move |_| {
                            document::eval(scripts::OPEN_PRINT_DIALOG);
                        },
                        "\u{2399} Print"
                    }
                    button {
                        r#type: "button",
                        class: "print-bar-exit",
                        onclick: move |_| on_exit.call(()),
                        "Exit"
                    }
                }
            }

            for (ordinal, page) in page_registry().iter().enumerate() {
                section { key: "{page.id}", class: "print-section",
                    if let Some(label) = print_page_label(ordinal, page.title) {
                        div { class: "print-page-label", "{label}" }
                    }
                    PageContent { index: ordinal, mode: DisplayMode::Print }
                }
            }
        }
    }
}
