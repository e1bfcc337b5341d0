//! The fixed page sequence. Defined once at startup and never mutated;
//! both the interactive view and the print flow consume this list.

use crate::model::audio::AudioKey;
use crate::model::pages::{
    ChecklistOption, CopyBlock, FreeTextPrompt, PageBody, PageSpec, PanelPrompt, ScoreBandCard,
};

/// Number of pages in the workbook.
pub const PAGE_COUNT: usize = 12;

/// The ordered page descriptors.
#[must_use]
pub fn page_registry() -> &'static [PageSpec] {
    &PAGES
}

static PAGES: [PageSpec; 12] = [
    PageSpec {
        id: "page-1",
        title: "Cover",
        audio: Some(AudioKey::new("cover-welcome")),
        body: PageBody::Cover {
            heading: "Get Fundable Fast\u{2122}",
            subheading: "The Cash Flow Reality Workbook",
            lede: "A diagnostic guide for people who want money to move toward them \
                   instead of away.",
        },
    },
    PageSpec {
        id: "page-2",
        title: "How to Use This Workbook",
        audio: Some(AudioKey::new("how-to-use")),
        body: PageBody::StaticCopy {
            blocks: &[
                CopyBlock::Paragraph("This is not a book to skim."),
                CopyBlock::Paragraph("This is not a worksheet to rush through."),
                CopyBlock::Lead("This workbook works only if you answer honestly."),
                CopyBlock::Paragraph("You do not need perfect numbers."),
                CopyBlock::Paragraph("You do not need accounting software."),
                CopyBlock::Quote("You do need the courage to see what\u{2019}s real."),
                CopyBlock::Callout(&[
                    "Set aside 30\u{2013}45 uninterrupted minutes.",
                    "Answer what you know. Leave blank what you don\u{2019}t.",
                    "What you see here is the starting point, not the verdict.",
                ]),
            ],
        },
    },
    PageSpec {
        id: "page-3",
        title: "The Cash Flow Truth",
        audio: Some(AudioKey::new("cash-flow-truth")),
        body: PageBody::StaticCopy {
            blocks: &[
                CopyBlock::Quote("Money is not a reward."),
                CopyBlock::Quote("Money is not a personality test."),
                CopyBlock::Quote("Money is not proof of worth."),
                CopyBlock::Statement("Money is movement."),
            ],
        },
    },
    PageSpec {
        id: "page-4",
        title: "The Cash Flow Truth (Prompts)",
        audio: None,
        body: PageBody::FreeText {
            intro: None,
            prompts: &[
                FreeTextPrompt {
                    key: "q1",
                    label: "Where does money come from for you right now?",
                },
                FreeTextPrompt {
                    key: "q2",
                    label: "Where does money disappear without a plan?",
                },
                FreeTextPrompt {
                    key: "q3",
                    label: "If you stopped working for 30 days, what would immediately break?",
                },
            ],
        },
    },
    PageSpec {
        id: "page-5",
        title: "Business or Idea? Decide.",
        audio: Some(AudioKey::new("business-or-idea")),
        body: PageBody::DualFreeText {
            intro: "Choose what\u{2019}s most true today:",
            left: PanelPrompt {
                key: "have_business",
                title: "I already have a business.",
            },
            right: PanelPrompt {
                key: "start_business",
                title: "I want to start a business.",
            },
        },
    },
    PageSpec {
        id: "page-6",
        title: "What You Think The Problem Is",
        audio: None,
        body: PageBody::Checklist {
            options: &[
                ChecklistOption {
                    key: "problem_0",
                    label: "Not enough customers",
                },
                ChecklistOption {
                    key: "problem_1",
                    label: "Pricing is too low",
                },
                ChecklistOption {
                    key: "problem_2",
                    label: "Expenses are too high",
                },
                ChecklistOption {
                    key: "problem_3",
                    label: "I'm bad at sales",
                },
                ChecklistOption {
                    key: "problem_4",
                    label: "I don't have capital",
                },
            ],
            follow_up: FreeTextPrompt {
                key: "problem_fix",
                label: "\u{201c}If this one thing were fixed, my financial life would \
                        improve.\u{201d}",
            },
        },
    },
    PageSpec {
        id: "page-7",
        title: "Fundability Reality Check",
        audio: Some(AudioKey::new("fundability-check")),
        body: PageBody::ScoreTable {
            statements: &[
                "I have a separate business bank account.",
                "I know my exact monthly burn rate.",
                "My personal/business finances are separate.",
                "I have a clear revenue model generating cash.",
                "I have financial records for the last 12 months.",
                "I pay myself a consistent salary.",
                "I have a plan for where next month's money comes from.",
                "I can access $5,000 in credit if needed.",
            ],
            legend: "0 = Not in place, 1 = Somewhat, 2 = Fully in place",
        },
    },
    PageSpec {
        id: "page-8",
        title: "What Your Score Means",
        audio: Some(AudioKey::new("score-meaning")),
        body: PageBody::ScoreBands {
            cards: &[
                ScoreBandCard {
                    range: "0\u{2013}5",
                    title: "Invisible to Capital",
                    description: "Lenders cannot see a structure to fund. High risk.",
                },
                ScoreBandCard {
                    range: "6\u{2013}11",
                    title: "Leaking Potential",
                    description: "Money comes in but lacks direction. Moderate risk.",
                },
                ScoreBandCard {
                    range: "12\u{2013}16",
                    title: "Fundable but Unprotected",
                    description: "Good flow, but vulnerable to shocks. Low risk, high opportunity.",
                },
            ],
        },
    },
    PageSpec {
        id: "page-9",
        title: "Your Cash Flow Map",
        audio: Some(AudioKey::new("cash-flow-map")),
        body: PageBody::CashFlowMap {
            columns: &[
                PanelPrompt {
                    key: "map_money_in",
                    title: "Money In",
                },
                PanelPrompt {
                    key: "map_money_out",
                    title: "Money Out",
                },
            ],
            reflection: FreeTextPrompt {
                key: "map_reflection",
                label: "What surprises you?",
            },
        },
    },
    PageSpec {
        id: "page-10",
        title: "The Constraint Question",
        audio: Some(AudioKey::new("constraint-question")),
        body: PageBody::FreeText {
            intro: Some(
                "\u{201c}If $25,000 appeared tomorrow, what would break first?\u{201d}",
            ),
            prompts: &[FreeTextPrompt {
                key: "constraint",
                label: "Write your answer here...",
            }],
        },
    },
    PageSpec {
        id: "page-11",
        title: "What This Workbook Can & Cannot Do",
        audio: None,
        body: PageBody::CompareColumns {
            can_title: "This Workbook",
            can_items: &["Shows patterns", "Reveals blind spots", "Creates awareness"],
            cannot_title: "Does Not",
            cannot_items: &[
                "Design your cash flow system",
                "Prepare you for funding",
                "Fix structural leaks",
            ],
        },
    },
    PageSpec {
        id: "page-12",
        title: "The Next Step",
        audio: Some(AudioKey::new("next-step")),
        body: PageBody::NextStep {
            heading: "From awareness to control.",
            body: "Continue inside the app.",
            note: "If you\u{2019}re not ready to continue today, your answers are saved.",
            qr_label: "QR Code",
        },
    },
];
