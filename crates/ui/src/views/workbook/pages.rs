use dioxus::prelude::*;

use workbook_core::model::{
    ChecklistOption, CopyBlock, DisplayMode, FreeTextPrompt, PageBody, PanelPrompt, Rating,
    ScoreBandCard, page_registry,
};

use super::stores::WorkbookStores;
use crate::vm::total_score_label;

/// Renders one registry page against the current answer/score state.
///
/// Both display modes flow through here; print mode swaps live controls for
/// static placeholders but keeps the saved values visible on paper.
#[component]
pub(super) fn PageContent(index: usize, mode: DisplayMode) -> Element {
    let page = &page_registry()[index];

    match page.body {
        PageBody::Cover {
            heading,
            subheading,
            lede,
        } => rsx! {
            div { class: "cover",
                div { class: "cover-rule no-print" }
                h1 { class: "cover-heading", "{heading}" }
                h2 { class: "cover-subheading", "{subheading}" }
                p { class: "cover-lede", "{lede}" }
            }
        },
        PageBody::StaticCopy { blocks } => rsx! {
            div { class: "copy",
                for (position, block) in blocks.iter().enumerate() {
                    CopyBlockView { key: "{page.id}-{position}", block: *block }
                }
            }
        },
        PageBody::FreeText { intro, prompts } => rsx! {
            div { class: "prompts",
                if let Some(intro) = intro {
                    h3 { class: "prompt-intro", "{intro}" }
                }
                for prompt in prompts {
                    PromptField {
                        key: "{prompt.key}",
                        prompt: *prompt,
                        mode,
                        tall: intro.is_some(),
                    }
                }
            }
        },
        PageBody::DualFreeText { intro, left, right } => rsx! {
            div { class: "dual",
                h3 { class: "dual-intro", "{intro}" }
                div { class: "dual-grid",
                    PanelField { key: "{left.key}", panel: left, mode }
                    PanelField { key: "{right.key}", panel: right, mode }
                }
            }
        },
        PageBody::Checklist { options, follow_up } => rsx! {
            div { class: "checklist",
                div { class: "checklist-options",
                    for option in options {
                        ChecklistRow { key: "{option.key}", option: *option, mode }
                    }
                }
                div { class: "checklist-follow-up",
                    p { class: "follow-up-label", "{follow_up.label}" }
                    OneLineField { field_key: follow_up.key, mode }
                }
            }
        },
        PageBody::ScoreTable { statements, legend } => {
            rsx! { ScoreTableView { statements, legend, mode } }
        }
        PageBody::ScoreBands { cards } => rsx! {
            div { class: "band-grid",
                for card in cards {
                    BandCard { key: "{card.title}", card: *card }
                }
            }
        },
        PageBody::CashFlowMap {
            columns,
            reflection,
        } => rsx! {
            div { class: "map",
                div { class: "map-grid",
                    for column in columns {
                        PanelField { key: "{column.key}", panel: *column, mode }
                    }
                }
                div { class: "map-reflection",
                    p { class: "map-reflection-label", "{reflection.label}" }
                    OneLineField { field_key: reflection.key, mode }
                }
            }
        },
        PageBody::CompareColumns {
            can_title,
            can_items,
            cannot_title,
            cannot_items,
        } => rsx! {
            div { class: "compare",
                div { class: "compare-col compare-can",
                    h3 { span { class: "compare-glyph", "\u{2713}" } " {can_title}" }
                    ul {
                        for item in can_items {
                            li { key: "{item}", "{item}" }
                        }
                    }
                }
                div { class: "compare-col compare-cannot",
                    h3 { span { class: "compare-glyph", "\u{00d7}" } " {cannot_title}" }
                    ul {
                        for item in cannot_items {
                            li { key: "{item}", "{item}" }
                        }
                    }
                }
            }
        },
        PageBody::NextStep {
            heading,
            body,
            note,
            qr_label,
        } => rsx! {
            div { class: "next-step",
                h2 { "{heading}" }
                p { class: "next-step-body", "{body}" }
                p { class: "next-step-note", "{note}" }
                div { class: "qr-frame no-print", span { "{qr_label}" } }
            }
        },
    }
}

#[component]
fn CopyBlockView(block: CopyBlock) -> Element {
    match block {
        CopyBlock::Paragraph(text) => rsx! {
            p { "{text}" }
        },
        CopyBlock::Lead(text) => rsx! {
            p { class: "copy-lead", "{text}" }
        },
        CopyBlock::Quote(text) => rsx! {
            p { class: "copy-quote", "{text}" }
        },
        CopyBlock::Statement(text) => rsx! {
            p { class: "copy-statement", "{text}" }
        },
        CopyBlock::Callout(lines) => rsx! {
            div { class: "copy-callout",
                for (position, line) in lines.iter().enumerate() {
                    p {
                        key: "{line}",
                        class: if position + 1 == lines.len() { "callout-highlight" } else { "" },
                        "{line}"
                    }
                }
            }
        },
    }
}

/// Multi-line prompt. Prints as the saved text without the hint.
#[component]
fn PromptField(prompt: FreeTextPrompt, mode: DisplayMode, tall: bool) -> Element {
    let stores = use_context::<WorkbookStores>();
    let value = stores.answers.read().text(prompt.key).to_string();
    let class = if tall { "prompt-box prompt-box-tall" } else { "prompt-box" };

    rsx! {
        div { class: "prompt",
            if !tall {
                label { class: "prompt-label", "{prompt.label}" }
            }
            if mode == DisplayMode::Print {
                div { class: "print-answer {class}", "{value}" }
            } else {
                textarea {
                    class: "{class}",
                    placeholder: if tall { "{prompt.label}" } else { "Write here..." },
                    value: "{value}",
                    oninput: move |evt| stores.set_text(prompt.key, evt.value()),
                }
            }
        }
    }
}

/// Titled free-text panel used by the dual-choice and cash-flow-map grids.
#[component]
fn PanelField(panel: PanelPrompt, mode: DisplayMode) -> Element {
    let stores = use_context::<WorkbookStores>();
    let value = stores.answers.read().text(panel.key).to_string();

    rsx! {
        div { class: "panel",
            h4 { class: "panel-title", "{panel.title}" }
            if mode == DisplayMode::Print {
                div { class: "print-answer panel-box", "{value}" }
            } else {
                textarea {
                    class: "panel-box",
                    placeholder: "Describe it...",
                    value: "{value}",
                    oninput: move |evt| stores.set_text(panel.key, evt.value()),
                }
            }
        }
    }
}

/// Single-line answer (the follow-up and reflection fields).
#[component]
fn OneLineField(field_key: &'static str, mode: DisplayMode) -> Element {
    let stores = use_context::<WorkbookStores>();
    let value = stores.answers.read().text(field_key).to_string();

    if mode == DisplayMode::Print {
        return rsx! {
            div { class: "print-answer answer-line", "{value}" }
        };
    }
    rsx! {
        input {
            class: "answer-line",
            r#type: "text",
            value: "{value}",
            oninput: move |evt| stores.set_text(field_key, evt.value()),
        }
    }
}

#[component]
fn ChecklistRow(option: ChecklistOption, mode: DisplayMode) -> Element {
    let stores = use_context::<WorkbookStores>();
    let checked = stores.answers.read().flag(option.key);
    let glyph = if checked { "\u{2611}" } else { "\u{2610}" };

    if mode == DisplayMode::Print {
        return rsx! {
            div { class: "checklist-row",
                span { class: "checklist-glyph", "{glyph}" }
                span { class: "checklist-text", "{option.label}" }
            }
        };
    }
    rsx! {
        button {
            r#type: "button",
            class: if checked { "checklist-row checklist-row-on" } else { "checklist-row" },
            onclick: move |_| stores.toggle_flag(option.key),
            span { class: "checklist-glyph", "{glyph}" }
            span { class: "checklist-text", "{option.label}" }
        }
    }
}

#[component]
fn ScoreTableView(
    statements: &'static [&'static str],
    legend: &'static str,
    mode: DisplayMode,
) -> Element {
    let stores = use_context::<WorkbookStores>();
    let scorecard = *stores.scorecard.read();

    rsx! {
        div { class: "score",
            div { class: "score-table",
                div { class: "score-head",
                    div { class: "score-statement", "Statement" }
                    for rating in Rating::ALL {
                        div { class: "score-cell", "{rating.points()}" }
                    }
                }
                for (row, statement) in statements.iter().enumerate() {
                    div { class: "score-row", key: "{statement}",
                        div { class: "score-statement", "{statement}" }
                        for rating in Rating::ALL {
                            div { class: "score-cell",
                                if mode == DisplayMode::Print {
                                    div { class: "score-dot-print" }
                                } else {
                                    ScoreDot { row, rating }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "score-total", "{total_score_label(&scorecard)}" }
            p { class: "score-legend", "{legend}" }
        }
    }
}

#[component]
fn ScoreDot(row: usize, rating: Rating) -> Element {
    let stores = use_context::<WorkbookStores>();
    let selected = stores.scorecard.read().rating(row) == Some(rating);

    rsx! {
        button {
            r#type: "button",
            class: if selected { "score-dot score-dot-on" } else { "score-dot" },
            onclick: move |_| stores.set_rating(row, rating),
            if selected {
                "\u{2713}"
            }
        }
    }
}

#[component]
fn BandCard(card: ScoreBandCard) -> Element {
    rsx! {
        div { class: "band-card",
            span { class: "band-range", "{card.range}" }
            h3 { class: "band-title", "{card.title}" }
            p { class: "band-description", "{card.description}" }
        }
    }
}
