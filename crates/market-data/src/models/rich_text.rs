use serde::{Deserialize, Serialize};

use super::lenient;

/// Rich-text body as stored by the upstream CMS.
///
/// Older records carry a plain string, newer ones an editor tree rooted at `root`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RichText {
    Plain(String),
    Tree(RichTextTree),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RichTextTree {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub root: Option<RichTextNode>,
}

/// One node of the editor tree. Leaves are `text` or `linebreak`; every other
/// kind (root, paragraph, heading, list, listitem, link...) only groups children.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RichTextNode {
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: Option<String>,

    #[serde(default, deserialize_with = "lenient::raw_text")]
    pub text: Option<String>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub children: Vec<RichTextNode>,
}

impl RichTextNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: Some("text".to_string()),
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    pub fn linebreak() -> Self {
        Self {
            kind: Some("linebreak".to_string()),
            ..Self::default()
        }
    }

    pub fn group(kind: &str, children: Vec<RichTextNode>) -> Self {
        Self {
            kind: Some(kind.to_string()),
            text: None,
            children,
        }
    }
}
