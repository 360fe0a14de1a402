//! Tag catalog: the single source of truth for the recognized tag grammar.
//!
//! The preprocessor and the scanner both consume the same catalog value (and
//! share the same open-tag matching primitive), so a tag added here is picked
//! up by both sides at once. Catalog construction validates the grammar and
//! fails fast on configuration mistakes; parse calls never fail.

use thiserror::Error;

/// Which piece constructor a tag maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Think,
    Write,
    Rename,
    Delete,
    AddDependency,
    Command,
    AddIntegration,
    CodebaseContext,
    ChatSummary,
    PromptDbConnect,
}

/// Shape of one recognized tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDescriptor {
    pub kind: TagKind,
    /// Tag name as it appears on the wire, e.g. `prestige-write`.
    pub name: String,
    /// Whether the inner text between open and close is meaningful content.
    pub has_body: bool,
    /// Recognized attribute names; anything else inside the open tag is ignored.
    pub attributes: Vec<String>,
    /// Whether the preprocessor may synthetically close a dangling open tag.
    /// False for the chat summary, which must only surface once genuinely
    /// closed in the source text.
    pub auto_close: bool,
}

impl TagDescriptor {
    pub fn new(kind: TagKind, name: &str, has_body: bool, attributes: &[&str]) -> Self {
        Self {
            kind,
            name: name.to_string(),
            has_body,
            attributes: attributes.iter().map(|a| a.to_string()).collect(),
            auto_close: true,
        }
    }

    /// Mark this tag as never synthetically closed by the preprocessor.
    pub fn without_auto_close(mut self) -> Self {
        self.auto_close = false;
        self
    }
}

/// Catalog configuration error. Raised at construction time only; indicates a
/// programming mistake, never bad input text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate tag name `{0}` in catalog")]
    DuplicateTag(String),
    #[error("invalid tag name `{0}`: expected lowercase letters, digits and hyphens, starting with a letter")]
    InvalidTagName(String),
    #[error("invalid attribute name `{attribute}` on tag `{tag}`")]
    InvalidAttribute { tag: String, attribute: String },
    #[error("duplicate attribute `{attribute}` on tag `{tag}`")]
    DuplicateAttribute { tag: String, attribute: String },
}

/// Ordered, validated, immutable set of [`TagDescriptor`]s.
///
/// The catalog is passed into the parser explicitly, so tests and alternate
/// grammars can supply their own instead of relying on a process-wide global.
#[derive(Debug, Clone)]
pub struct TagCatalog {
    tags: Vec<TagDescriptor>,
}

fn valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    name.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

impl TagCatalog {
    /// Validate and build a catalog. Fails fast on duplicate tags, bad tag
    /// names, or duplicate/bad attribute names.
    pub fn new(tags: Vec<TagDescriptor>) -> Result<Self, CatalogError> {
        for (i, tag) in tags.iter().enumerate() {
            if !valid_name(&tag.name) {
                return Err(CatalogError::InvalidTagName(tag.name.clone()));
            }
            if tags[..i].iter().any(|other| other.name == tag.name) {
                return Err(CatalogError::DuplicateTag(tag.name.clone()));
            }
            for (j, attr) in tag.attributes.iter().enumerate() {
                if !valid_name(attr) {
                    return Err(CatalogError::InvalidAttribute {
                        tag: tag.name.clone(),
                        attribute: attr.clone(),
                    });
                }
                if tag.attributes[..j].contains(attr) {
                    return Err(CatalogError::DuplicateAttribute {
                        tag: tag.name.clone(),
                        attribute: attr.clone(),
                    });
                }
            }
        }
        Ok(Self { tags })
    }

    /// The built-in Prestige grammar.
    pub fn prestige() -> Self {
        Self::new(vec![
            TagDescriptor::new(TagKind::Think, "think", true, &[]),
            TagDescriptor::new(TagKind::Write, "prestige-write", true, &["path", "description"]),
            TagDescriptor::new(TagKind::Rename, "prestige-rename", false, &["from", "to"]),
            TagDescriptor::new(TagKind::Delete, "prestige-delete", false, &["path"]),
            TagDescriptor::new(
                TagKind::AddDependency,
                "prestige-add-dependency",
                false,
                &["packages"],
            ),
            TagDescriptor::new(TagKind::Command, "prestige-command", false, &["type"]),
            TagDescriptor::new(
                TagKind::AddIntegration,
                "prestige-add-integration",
                true,
                &["provider"],
            ),
            TagDescriptor::new(
                TagKind::CodebaseContext,
                "prestige-codebase-context",
                true,
                &["type", "template-id", "files", "patterns", "query", "keep"],
            ),
            TagDescriptor::new(TagKind::ChatSummary, "prestige-chat-summary", true, &[])
                .without_auto_close(),
            TagDescriptor::new(TagKind::PromptDbConnect, "prestige-prompt-db-connect", true, &[]),
        ])
        .expect("built-in catalog is valid")
    }

    pub fn tags(&self) -> &[TagDescriptor] {
        &self.tags
    }

    pub fn get(&self, name: &str) -> Option<&TagDescriptor> {
        self.tags.iter().find(|t| t.name == name)
    }
}
