use crate::model::audio::AudioKey;

/// How the workbook is being shown.
///
/// Orthogonal to the navigation cursor: print mode renders every page in
/// registry order regardless of where the cursor sits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Interactive,
    Print,
}

/// One free-text field: answer-sheet key plus the prompt shown above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeTextPrompt {
    pub key: &'static str,
    pub label: &'static str,
}

/// A titled free-text panel (the side-by-side card layouts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelPrompt {
    pub key: &'static str,
    pub title: &'static str,
}

/// One togglable statement on the "what you think the problem is" list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// A block of static copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyBlock {
    Paragraph(&'static str),
    /// Visually emphasized line.
    Lead(&'static str),
    /// Pull-quote styled line.
    Quote(&'static str),
    /// Closing oversized statement.
    Statement(&'static str),
    /// Boxed aside, one line per entry; the last line is highlighted.
    Callout(&'static [&'static str]),
}

/// One card on the "what your score means" page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBandCard {
    pub range: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Content for one workbook page, by page kind.
///
/// The registry is data, not closures: every kind renders through a single
/// "given the current answers and scorecard" contract in the UI layer, and
/// the print view walks the same variants with static placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBody {
    /// Title page.
    Cover {
        heading: &'static str,
        subheading: &'static str,
        lede: &'static str,
    },
    /// Static copy only.
    StaticCopy { blocks: &'static [CopyBlock] },
    /// One or more free-text prompts, optionally under a large intro line.
    FreeText {
        intro: Option<&'static str>,
        prompts: &'static [FreeTextPrompt],
    },
    /// Two titled free-text panels side by side.
    DualFreeText {
        intro: &'static str,
        left: PanelPrompt,
        right: PanelPrompt,
    },
    /// Togglable statements plus one single-line follow-up answer.
    Checklist {
        options: &'static [ChecklistOption],
        follow_up: FreeTextPrompt,
    },
    /// The 8-statement scored table. Row order matches scorecard rows.
    ScoreTable {
        statements: &'static [&'static str],
        legend: &'static str,
    },
    /// Score interpretation cards, lowest band first.
    ScoreBands { cards: &'static [ScoreBandCard] },
    /// Money-in / money-out columns plus a one-line reflection.
    CashFlowMap {
        columns: &'static [PanelPrompt],
        reflection: FreeTextPrompt,
    },
    /// Can / cannot comparison columns.
    CompareColumns {
        can_title: &'static str,
        can_items: &'static [&'static str],
        cannot_title: &'static str,
        cannot_items: &'static [&'static str],
    },
    /// Closing page with the QR placeholder.
    NextStep {
        heading: &'static str,
        body: &'static str,
        note: &'static str,
        qr_label: &'static str,
    },
}

/// Immutable descriptor for one page: identity, title, optional narration,
/// and the content body. Ordinal position is the registry index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub audio: Option<AudioKey>,
    pub body: PageBody,
}
