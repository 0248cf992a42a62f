use crate::traverse::ContextResult;
use crate::types::DepNode;

/// Verbosity flags for [`render`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Attach each node's code snippet.
    pub include_code: bool,

    /// Attach each node's full file text (when the batch supplied it).
    pub include_file_content: bool,

    /// Show label and file only, suppressing snippets and file text.
    pub filenames_only: bool,

    /// Append a trailing section with the full text of every touched file.
    pub include_file_contents: bool,
}

/// Assemble the context report.
///
/// Pure function of result + options; writing the text anywhere is the
/// caller's concern. Section order is fixed: target, parents, children,
/// then optionally the touched-file contents.
#[must_use]
pub fn render(result: &ContextResult, options: &RenderOptions) -> String {
    let mut sections = Vec::new();

    match &result.target {
        Some(target) => sections.push(node_block(
            target,
            &format!("Component/function of interest: {}", target.label),
            options,
        )),
        None => sections.push(format!(
            "Component/function '{}' not found in graph.",
            result.target_label
        )),
    }

    sections.push(relation_section(
        "Parent (calling) components/functions:",
        &result.ancestors,
        options,
    ));
    sections.push(relation_section(
        "Children (called) components/functions:",
        &result.descendants,
        options,
    ));

    if options.include_file_contents {
        let mut section = String::from("Included file contents:");
        for (path, content) in &result.file_contents {
            section.push_str(&format!("\n--- {path} ---\n{content}"));
        }
        sections.push(section);
    }

    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

fn relation_section(header: &str, nodes: &[DepNode], options: &RenderOptions) -> String {
    if nodes.is_empty() {
        return format!("{header}\n(none)");
    }

    let mut ordered: Vec<&DepNode> = nodes.iter().collect();
    ordered.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.file.cmp(&b.file)));

    let blocks: Vec<String> = ordered
        .iter()
        .map(|node| node_block(node, &format!("- {}", node.label), options))
        .collect();
    format!("{header}\n{}", blocks.join("\n"))
}

fn node_block(node: &DepNode, heading: &str, options: &RenderOptions) -> String {
    let mut block = format!("{heading}\n\tFile: {}", node.file);
    if options.filenames_only {
        return block;
    }

    if options.include_code && !node.code.is_empty() {
        block.push_str(&format!("\n\tCode:\n{}", node.code));
    }
    if options.include_file_content {
        if let Some(content) = node.file_content.as_deref() {
            if !content.is_empty() {
                block.push_str(&format!("\n\tFile content:\n{content}"));
            }
        }
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::{BTreeMap, BTreeSet};

    fn node(label: &str, file: &str, code: &str) -> DepNode {
        DepNode::resolved(file, label, code, None)
    }

    fn result_with(ancestors: Vec<DepNode>, descendants: Vec<DepNode>) -> ContextResult {
        let target = node("f", "a.js", "function f() {}");
        let mut touched_files: BTreeSet<String> = BTreeSet::new();
        for n in std::iter::once(&target)
            .chain(&ancestors)
            .chain(&descendants)
        {
            if !n.file.is_empty() {
                touched_files.insert(n.file.clone());
            }
        }
        ContextResult {
            target_label: "f".to_string(),
            target_found: true,
            target: Some(target),
            ancestors,
            descendants,
            touched_files,
            file_contents: BTreeMap::new(),
        }
    }

    #[test]
    fn renders_fixed_section_order_with_none_markers() {
        let report = render(&result_with(vec![], vec![]), &RenderOptions::default());

        assert_eq!(
            report,
            "Component/function of interest: f\n\tFile: a.js\n\n\
             Parent (calling) components/functions:\n(none)\n\n\
             Children (called) components/functions:\n(none)\n"
        );
    }

    #[test]
    fn renders_not_found_notice() {
        let result = ContextResult {
            target_label: "missing".to_string(),
            ..ContextResult::default()
        };
        let report = render(&result, &RenderOptions::default());

        assert!(report.starts_with("Component/function 'missing' not found in graph."));
        assert!(report.contains("Parent (calling) components/functions:\n(none)"));
        assert!(report.contains("Children (called) components/functions:\n(none)"));
    }

    #[test]
    fn sorts_blocks_by_label_then_file() {
        let report = render(
            &result_with(
                vec![
                    node("b", "z.js", ""),
                    node("a", "y.js", ""),
                    node("a", "x.js", ""),
                ],
                vec![],
            ),
            &RenderOptions::default(),
        );

        let a_x = report.find("- a\n\tFile: x.js").unwrap();
        let a_y = report.find("- a\n\tFile: y.js").unwrap();
        let b_z = report.find("- b\n\tFile: z.js").unwrap();
        assert!(a_x < a_y && a_y < b_z);
    }

    #[test]
    fn include_code_attaches_snippets() {
        let report = render(
            &result_with(vec![node("g", "b.js", "function g() {}")], vec![]),
            &RenderOptions {
                include_code: true,
                ..RenderOptions::default()
            },
        );

        assert!(report.contains("Code:\nfunction f() {}"));
        assert!(report.contains("Code:\nfunction g() {}"));
    }

    #[test]
    fn filenames_only_suppresses_all_code_and_content() {
        let mut ancestor = node("g", "b.js", "SNIPPET_TEXT");
        ancestor.file_content = Some("FULL_FILE_TEXT".to_string());

        let report = render(
            &result_with(vec![ancestor], vec![]),
            &RenderOptions {
                include_code: true,
                include_file_content: true,
                filenames_only: true,
                ..RenderOptions::default()
            },
        );

        assert!(!report.contains("SNIPPET_TEXT"));
        assert!(!report.contains("FULL_FILE_TEXT"));
        assert!(report.contains("- g\n\tFile: b.js"));
    }

    #[test]
    fn trailing_file_contents_sorted_by_path() {
        let mut result = result_with(vec![], vec![]);
        result
            .file_contents
            .insert("b.js".to_string(), "content b".to_string());
        result
            .file_contents
            .insert("a.js".to_string(), "content a".to_string());

        let report = render(
            &result,
            &RenderOptions {
                include_file_contents: true,
                ..RenderOptions::default()
            },
        );

        let a = report.find("--- a.js ---\ncontent a").unwrap();
        let b = report.find("--- b.js ---\ncontent b").unwrap();
        assert!(report.contains("Included file contents:"));
        assert!(a < b);
    }

    #[test]
    fn no_trailing_section_without_flag() {
        let report = render(&result_with(vec![], vec![]), &RenderOptions::default());
        assert!(!report.contains("Included file contents:"));
    }
}
