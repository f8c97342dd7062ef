use crate::define_parser;
use crate::model::BoundaryType;
use crate::parser::ParseError;
use std::path::Path;
use tree_sitter::Node;

define_parser!(TS_PARSER, tree_sitter_typescript::LANGUAGE_TYPESCRIPT);
define_parser!(TSX_PARSER, tree_sitter_typescript::LANGUAGE_TSX);

/// A directive is only valid before the first real statement, so the scan
/// gives up after this many lines.
const DIRECTIVE_SCAN_LINES: usize = 10;

/// The four accepted spellings of the client directive.
const CLIENT_DIRECTIVES: [&str; 4] = [
    "'use client'",
    "\"use client\"",
    "'use client';",
    "\"use client\";",
];

/// What a single file contributes to the registry: its boundary and the raw
/// import specifiers in document order.
pub struct Inspection {
    pub boundary: BoundaryType,
    pub imports: Vec<String>,
}

pub struct ComponentParser;

impl ComponentParser {
    pub fn new() -> Self {
        Self
    }

    /// Read one source file and produce its boundary classification and raw
    /// imports. Errors here mean the file is skipped by the caller.
    pub fn inspect(&self, path: &Path) -> Result<Inspection, ParseError> {
        let source = std::fs::read_to_string(path)?;

        Ok(Inspection {
            boundary: classify(&source),
            imports: self.extract_imports(path, &source)?,
        })
    }

    /// Collect the string-literal specifier of every import declaration, in
    /// document order, without deduplication. Computed specifiers are skipped.
    pub fn extract_imports(&self, path: &Path, source: &str) -> Result<Vec<String>, ParseError> {
        // Use the TSX grammar for markup extensions, plain TS for the rest
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let tree = if ext == "tsx" || ext == "jsx" {
            TSX_PARSER.with(|parser| parser.borrow_mut().parse(source, None))
        } else {
            TS_PARSER.with(|parser| parser.borrow_mut().parse(source, None))
        }
        .ok_or_else(|| ParseError::Parse("Failed to parse file".to_string()))?;

        let source_bytes = source.as_bytes();
        let mut imports = Vec::new();

        // Explicit-stack walk in document order; import declarations can sit
        // below the top level (e.g. inside declared modules)
        let mut stack = vec![tree.root_node()];
        while let Some(node) = stack.pop() {
            if node.kind() == "import_statement" {
                if let Some(specifier) = import_specifier(&node, source_bytes) {
                    imports.push(specifier);
                }
                continue;
            }

            let mut cursor = node.walk();
            let children: Vec<Node> = node.children(&mut cursor).collect();
            for child in children.into_iter().rev() {
                stack.push(child);
            }
        }

        Ok(imports)
    }
}

impl Default for ComponentParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a file by its leading directive. Blank lines and comment openers
/// are tolerated before the directive; any other line ends the scan.
pub fn classify(source: &str) -> BoundaryType {
    for line in source.lines().take(DIRECTIVE_SCAN_LINES) {
        let trimmed = line.trim();

        if CLIENT_DIRECTIVES.contains(&trimmed) {
            return BoundaryType::Client;
        }
        if !trimmed.is_empty() && !trimmed.starts_with("//") && !trimmed.starts_with("/*") {
            break;
        }
    }

    BoundaryType::Server
}

fn import_specifier(node: &Node, source_bytes: &[u8]) -> Option<String> {
    let source_node = node.child_by_field_name("source")?;
    if source_node.kind() != "string" {
        return None;
    }

    let text = source_node.utf8_text(source_bytes).ok()?;
    extract_quoted(text)
}

/// Extract the content of a quoted literal, single or double.
fn extract_quoted(text: &str) -> Option<String> {
    let quote = text.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let rest = &text[1..];
    let end = rest.find(quote)?;
    Some(rest[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_all_directive_forms_as_client() {
        for directive in CLIENT_DIRECTIVES {
            let source = format!("{directive}\n\nexport default function C() {{}}\n");
            assert_eq!(
                classify(&source),
                BoundaryType::Client,
                "directive form: {directive}"
            );
        }
    }

    #[test]
    fn classifies_indented_directive_as_client() {
        assert_eq!(classify("   'use client'\n"), BoundaryType::Client);
    }

    #[test]
    fn tolerates_comments_and_blanks_before_directive() {
        let source = "// Copyright notice\n/* header */\n\n'use client';\nexport {};\n";
        assert_eq!(classify(source), BoundaryType::Client);
    }

    #[test]
    fn directive_after_code_is_ignored() {
        let source = "import React from 'react';\n'use client';\n";
        assert_eq!(classify(source), BoundaryType::Server);
    }

    #[test]
    fn directive_past_line_cap_is_ignored() {
        let mut source = "\n".repeat(DIRECTIVE_SCAN_LINES);
        source.push_str("'use client'\n");
        assert_eq!(classify(&source), BoundaryType::Server);
    }

    #[test]
    fn empty_file_is_server() {
        assert_eq!(classify(""), BoundaryType::Server);
    }

    #[test]
    fn plain_component_is_server() {
        let source = "export default function Page() {\n  return null;\n}\n";
        assert_eq!(classify(source), BoundaryType::Server);
    }

    #[test]
    fn use_server_is_not_a_client_directive() {
        assert_eq!(classify("'use server'\n"), BoundaryType::Server);
    }

    #[test]
    fn extracts_imports_in_order_with_duplicates() {
        let parser = ComponentParser::new();
        let source = "import React from 'react';\n\
                      import { useState } from 'react';\n\
                      import styles from './styles.module.css';\n\
                      export default function Component() { return <div />; }\n";

        let imports = parser
            .extract_imports(Path::new("Component.tsx"), source)
            .unwrap();
        assert_eq!(imports, vec!["react", "react", "./styles.module.css"]);
    }

    #[test]
    fn skips_dynamic_imports() {
        let parser = ComponentParser::new();
        let source = "import a from './a';\nconst b = import('./b');\n";

        let imports = parser.extract_imports(Path::new("mod.ts"), source).unwrap();
        assert_eq!(imports, vec!["./a"]);
    }

    #[test]
    fn handles_double_quoted_and_side_effect_imports() {
        let parser = ComponentParser::new();
        let source = "import \"./globals.css\";\nimport type { T } from \"./types\";\n";

        let imports = parser.extract_imports(Path::new("app.ts"), source).unwrap();
        assert_eq!(imports, vec!["./globals.css", "./types"]);
    }

    #[test]
    fn parses_jsx_markup_without_losing_imports() {
        let parser = ComponentParser::new();
        let source = "import Button from './Button';\n\
                      export default function Page() {\n\
                      \x20 return <main><Button label=\"go\" /></main>;\n\
                      }\n";

        let imports = parser.extract_imports(Path::new("Page.jsx"), source).unwrap();
        assert_eq!(imports, vec!["./Button"]);
    }
}
