//! Toolbar composition for the embedded editor.

use serde::{Deserialize, Serialize};

/// Tool identifiers understood by the embedded editor's toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolbarItem {
    Heading,
    Bold,
    Italic,
    Strike,
    Divider,
    Hr,
    Quote,
    Ul,
    Ol,
    Task,
    Indent,
    Outdent,
    Table,
    Image,
    Link,
    Code,
    CodeBlock,
}

impl ToolbarItem {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Strike => "strike",
            Self::Divider => "divider",
            Self::Hr => "hr",
            Self::Quote => "quote",
            Self::Ul => "ul",
            Self::Ol => "ol",
            Self::Task => "task",
            Self::Indent => "indent",
            Self::Outdent => "outdent",
            Self::Table => "table",
            Self::Image => "image",
            Self::Link => "link",
            Self::Code => "code",
            Self::CodeBlock => "codeblock",
        }
    }
}

/// Base ordering of the toolbar. The image tool is not part of the base
/// set; it is spliced in only when upload is enabled.
pub const BASE_TOOLBAR: [ToolbarItem; 19] = [
    ToolbarItem::Heading,
    ToolbarItem::Bold,
    ToolbarItem::Italic,
    ToolbarItem::Strike,
    ToolbarItem::Divider,
    ToolbarItem::Hr,
    ToolbarItem::Quote,
    ToolbarItem::Divider,
    ToolbarItem::Ul,
    ToolbarItem::Ol,
    ToolbarItem::Task,
    ToolbarItem::Indent,
    ToolbarItem::Outdent,
    ToolbarItem::Divider,
    ToolbarItem::Table,
    ToolbarItem::Link,
    ToolbarItem::Divider,
    ToolbarItem::Code,
    ToolbarItem::CodeBlock,
];

/// Position the image tool occupies when upload is enabled. A toolbar
/// placement contract (between `table` and `link`), not incidental.
pub const IMAGE_TOOL_INDEX: usize = 15;

/// Composes the toolbar sequence for one bind.
///
/// Overrides replace the base sequence verbatim. In either case the image
/// tool is stripped when upload is disabled: image insertion without an
/// upload hook would dead-end.
pub fn toolbar_items(
    upload_enabled: bool,
    overrides: Option<&[ToolbarItem]>,
) -> Vec<ToolbarItem> {
    let mut items = match overrides {
        Some(sequence) => sequence.to_vec(),
        None => {
            let mut base = BASE_TOOLBAR.to_vec();
            if upload_enabled {
                base.insert(IMAGE_TOOL_INDEX, ToolbarItem::Image);
            }
            base
        }
    };
    if !upload_enabled {
        items.retain(|item| *item != ToolbarItem::Image);
    }
    items
}
