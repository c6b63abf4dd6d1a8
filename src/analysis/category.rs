use crate::error::CategoryRuleError;
use crate::graph::NodeDefinition;
use ahash::AHashMap;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Coarse semantic bucket a node falls into, derived from its type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Input,
    Output,
    Llm,
    Image,
    Video,
    Audio,
    Text,
    Condition,
    Math,
    Data,
    Agent,
    Transform,
    Other,
}

impl Category {
    /// Every category that can carry patterns, in rule-table order.
    pub const MATCHABLE: [Category; 12] = [
        Category::Input,
        Category::Output,
        Category::Llm,
        Category::Image,
        Category::Video,
        Category::Audio,
        Category::Text,
        Category::Condition,
        Category::Math,
        Category::Data,
        Category::Agent,
        Category::Transform,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Input => "input",
            Category::Output => "output",
            Category::Llm => "llm",
            Category::Image => "image",
            Category::Video => "video",
            Category::Audio => "audio",
            Category::Text => "text",
            Category::Condition => "condition",
            Category::Math => "math",
            Category::Data => "data",
            Category::Agent => "agent",
            Category::Transform => "transform",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Patterns are broad; table order decides overlaps.
const BUILTIN_PATTERNS: [(Category, &[&str]); 12] = [
    (Category::Input, &[r"input", r"constant", r"loader"]),
    (Category::Output, &[r"output", r"preview", r"\bsave"]),
    (
        Category::Llm,
        &[r"llm", r"chat", r"openai", r"anthropic", r"ollama", r"gpt", r"claude", r"gemini"],
    ),
    (
        Category::Image,
        &[r"image", r"flux", r"stable_?diffusion", r"sdxl", r"\bimg", r"photo"],
    ),
    (Category::Video, &[r"video", r"animat", r"\bmovie"]),
    (
        Category::Audio,
        &[r"audio", r"speech", r"\btts\b", r"whisper", r"music", r"sound"],
    ),
    (Category::Text, &[r"text", r"string", r"regex", r"template", r"prompt"]),
    (
        Category::Condition,
        &[r"\bif\b", r"condition", r"switch", r"branch", r"compare"],
    ),
    (
        Category::Math,
        &[r"math", r"\badd\b", r"subtract", r"multiply", r"divide", r"number", r"calculat"],
    ),
    (
        Category::Data,
        &[r"data", r"json", r"csv", r"\blist", r"dict", r"file", r"table"],
    ),
    (Category::Agent, &[r"agent", r"\btools?\b", r"\btask"]),
    (
        Category::Transform,
        &[r"transform", r"convert", r"format", r"\bmap\b", r"filter", r"split", r"merge"],
    ),
];

static DEFAULT_RULES: LazyLock<CategoryRules> = LazyLock::new(|| {
    CategoryRules::builtin().unwrap_or_else(|e| {
        tracing::error!(error = %e, "built-in category rules failed to compile");
        CategoryRules::empty()
    })
});

/// An ordered table of `(category, patterns)` rules. The first category with a
/// matching pattern wins; a type string nothing matches is [`Category::Other`].
#[derive(Debug, Clone)]
pub struct CategoryRules {
    table: Vec<(Category, Vec<Regex>)>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}

impl CategoryRules {
    /// A table with every category present but no patterns.
    pub fn empty() -> Self {
        Self {
            table: Category::MATCHABLE
                .iter()
                .map(|category| (*category, Vec::new()))
                .collect(),
        }
    }

    /// Compiles the built-in rule table. [`CategoryRules::default`] returns a
    /// shared copy of it.
    pub fn builtin() -> Result<Self, CategoryRuleError> {
        let mut rules = Self::empty();
        for (category, patterns) in BUILTIN_PATTERNS {
            rules.push_patterns(category, patterns, false)?;
        }
        Ok(rules)
    }

    /// Registers extra patterns for `category`, checked before the ones it
    /// already has. Category order in the table is unchanged.
    pub fn with_patterns(
        &mut self,
        category: Category,
        patterns: &[&str],
    ) -> Result<(), CategoryRuleError> {
        self.push_patterns(category, patterns, true)
    }

    fn push_patterns(
        &mut self,
        category: Category,
        patterns: &[&str],
        prepend: bool,
    ) -> Result<(), CategoryRuleError> {
        let slot = self
            .table
            .iter_mut()
            .find(|(c, _)| *c == category)
            .map(|(_, regexes)| regexes)
            .ok_or(CategoryRuleError::FallbackCategory(category))?;

        let mut compiled = patterns
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| CategoryRuleError::InvalidPattern {
                        category,
                        pattern: pattern.to_string(),
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if prepend {
            compiled.append(slot);
            *slot = compiled;
        } else {
            slot.append(&mut compiled);
        }
        Ok(())
    }

    /// Classifies a node type string. Total over all strings, including empty.
    pub fn categorize(&self, node_type: &str) -> Category {
        let lowered = node_type.to_lowercase();
        self.table
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| p.is_match(&lowered)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }

    /// Builds the category histogram for a node list. Only categories that
    /// occur appear as keys.
    pub fn count_node_types<'n>(
        &self,
        nodes: impl IntoIterator<Item = &'n NodeDefinition>,
    ) -> AHashMap<Category, usize> {
        let mut counts = AHashMap::new();
        for node in nodes {
            *counts.entry(self.categorize(&node.node_type)).or_insert(0) += 1;
        }
        counts
    }
}

/// Classifies a node type string with the built-in rule table.
pub fn categorize(node_type: &str) -> Category {
    DEFAULT_RULES.categorize(node_type)
}

/// Builds the category histogram with the built-in rule table.
pub fn count_node_types<'n>(
    nodes: impl IntoIterator<Item = &'n NodeDefinition>,
) -> AHashMap<Category, usize> {
    DEFAULT_RULES.count_node_types(nodes)
}
