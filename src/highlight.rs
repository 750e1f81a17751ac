//! Cosmetic colouring for the terminal preview.
//!
//! Plain regex passes over already-generated text, no parsing. The text
//! itself is never changed; `paint` only wraps runs in ANSI escapes.

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    // order == priority, later wins on overlap
    Keyword,
    TypeName,
    StringLiteral,
    Comment,
}

impl Category {
    const ALL: [Category; 4] = [
        Category::Keyword,
        Category::TypeName,
        Category::StringLiteral,
        Category::Comment,
    ];

    fn pattern(self) -> &'static Regex {
        static PATTERNS: OnceLock<[Regex; 4]> = OnceLock::new();
        let patterns = PATTERNS.get_or_init(|| {
            [
                Regex::new(
                    r"\b(class|public|private|void|if|else|while|for|return|switch|case|new|import|package|extends|implements|static|final)\b",
                )
                .expect("invalid keyword regex"),
                Regex::new(r"\b(Pose|Path|PathChain|BezierLine|BezierCurve|Follower|Timer|LinearOpMode)\b")
                    .expect("invalid type regex"),
                Regex::new(r#""[^"\n]*""#).expect("invalid string regex"),
                Regex::new(r"//[^\n]*").expect("invalid comment regex"),
            ]
        });
        &patterns[self as usize]
    }

    /// ANSI SGR sequence for the category.
    fn style(self) -> &'static str {
        match self {
            Category::Keyword => colors::BLUE,
            Category::TypeName => colors::TEAL,
            Category::StringLiteral => colors::ORANGE,
            Category::Comment => colors::GREEN_ITALIC,
        }
    }
}

mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BLUE: &str = "\x1b[38;2;86;156;214m"; // #569CD6
    pub const TEAL: &str = "\x1b[38;2;78;201;176m"; // #4EC9B0
    pub const ORANGE: &str = "\x1b[38;2;206;145;120m"; // #CE9178
    pub const GREEN_ITALIC: &str = "\x1b[3;38;2;106;153;85m"; // #6A9955
}

/// A byte range of the input tagged with one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub range: Range<usize>,
    pub category: Category,
}

/// Runs every category's pattern independently and returns all matches,
/// grouped by category in priority order. Spans may overlap.
pub fn highlight(text: &str) -> Vec<Span> {
    Category::ALL
        .iter()
        .flat_map(|&category| {
            category.pattern().find_iter(text).map(move |m| Span {
                range: m.range(),
                category,
            })
        })
        .collect()
}

/// Renders `text` with ANSI colours for `spans`.
pub fn paint(text: &str, spans: &[Span]) -> String {
    // resolve overlaps per byte: highest category wins
    let mut owner: Vec<Option<Category>> = vec![None; text.len()];
    for span in spans {
        for slot in &mut owner[span.range.clone()] {
            if slot.is_none_or(|c| c < span.category) {
                *slot = Some(span.category);
            }
        }
    }

    let mut out = String::with_capacity(text.len() * 2);
    let mut current: Option<Category> = None;
    for (idx, ch) in text.char_indices() {
        let cat = owner[idx];
        if cat != current {
            if current.is_some() {
                out.push_str(colors::RESET);
            }
            if let Some(c) = cat {
                out.push_str(c.style());
            }
            current = cat;
        }
        out.push(ch);
    }
    if current.is_some() {
        out.push_str(colors::RESET);
    }
    out
}
