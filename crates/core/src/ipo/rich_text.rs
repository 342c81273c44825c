use marketdesk_market_data::{RichText, RichTextNode};

/// Flattens a rich-text description into plain text.
///
/// Depth-first concatenation: `text` leaves contribute their text, `linebreak`
/// contributes `\n`, every other node contributes its children. A missing tree
/// gives an empty string.
pub fn flatten_rich_text(description: Option<&RichText>) -> String {
    match description {
        None => String::new(),
        Some(RichText::Plain(text)) => text.clone(),
        Some(RichText::Tree(tree)) => {
            let mut out = String::new();
            if let Some(root) = &tree.root {
                flatten_node(root, &mut out);
            }
            out
        }
    }
}

fn flatten_node(node: &RichTextNode, out: &mut String) {
    match node.kind.as_deref() {
        Some("linebreak") => out.push('\n'),
        Some("text") => {
            if let Some(text) = &node.text {
                out.push_str(text);
            }
        }
        _ => {
            for child in &node.children {
                flatten_node(child, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketdesk_market_data::RichTextTree;
    use serde_json::json;

    fn tree(children: Vec<RichTextNode>) -> RichText {
        RichText::Tree(RichTextTree {
            root: Some(RichTextNode::group("root", children)),
        })
    }

    #[test]
    fn test_text_and_linebreak() {
        let description = tree(vec![
            RichTextNode::text("A"),
            RichTextNode::linebreak(),
            RichTextNode::text("B"),
        ]);
        assert_eq!(flatten_rich_text(Some(&description)), "A\nB");
    }

    #[test]
    fn test_nested_groups_are_walked_depth_first() {
        let description = tree(vec![
            RichTextNode::group(
                "paragraph",
                vec![RichTextNode::text("Acme makes "), RichTextNode::text("widgets.")],
            ),
            RichTextNode::linebreak(),
            RichTextNode::group(
                "list",
                vec![RichTextNode::group(
                    "listitem",
                    vec![RichTextNode::text("Founded 1998")],
                )],
            ),
        ]);
        assert_eq!(
            flatten_rich_text(Some(&description)),
            "Acme makes widgets.\nFounded 1998"
        );
    }

    #[test]
    fn test_missing_tree_is_empty() {
        assert_eq!(flatten_rich_text(None), "");
        assert_eq!(
            flatten_rich_text(Some(&RichText::Tree(RichTextTree { root: None }))),
            ""
        );
    }

    #[test]
    fn test_plain_description_passes_through() {
        let description = RichText::Plain("Acme makes widgets.".to_string());
        assert_eq!(flatten_rich_text(Some(&description)), "Acme makes widgets.");
    }

    #[test]
    fn test_decoded_upstream_tree() {
        let description: RichText = serde_json::from_value(json!({
            "root": {"children": [
                {"type": "text", "text": "A"},
                {"type": "linebreak"},
                {"type": "text", "text": "B"},
                {"type": "text"},
                {"type": "image", "src": "x.png"}
            ]}
        }))
        .unwrap();
        assert_eq!(flatten_rich_text(Some(&description)), "A\nB");
    }
}
