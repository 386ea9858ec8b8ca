//! Locating the metadata block of a markdown document.

/// Line opening and closing a front-matter block.
const DELIMITER: &str = "---";

/// Return the raw YAML text of the document's leading metadata block.
///
/// The first line must be exactly `---`. Everything up to the next `---`
/// line is returned verbatim, blank lines included. Returns `None` when the
/// document does not open with a block or the block is never closed.
pub fn extract_front_matter(markdown: &str) -> Option<String> {
    let mut lines = markdown.split_inclusive('\n');
    if trim_eol(lines.next()?) != DELIMITER {
        return None;
    }

    let mut yaml = String::new();
    for line in lines {
        if trim_eol(line) == DELIMITER {
            return Some(yaml);
        }
        yaml.push_str(line);
    }
    // Unterminated block
    None
}

fn trim_eol(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
