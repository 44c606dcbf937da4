/// Lexical mode at a line boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexState {
    #[default]
    Code,
    /// Inside a `/* ... */` comment.
    BlockComment,
    /// Inside a `"""` text block.
    TextBlock,
}

/// Result of lexing a single line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineScan {
    /// `{` characters outside comments and literals.
    pub opens: usize,
    /// `}` characters outside comments and literals.
    pub closes: usize,
    /// Net `(` minus `)` outside comments and literals.
    pub paren_delta: isize,
    /// Lexer state at the end of the line.
    pub exit: LexState,
    /// The line with comments removed. Literals are kept verbatim.
    pub code: String,
}

impl LineScan {
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn depth_delta(&self) -> isize {
        self.opens as isize - self.closes as isize
    }
}

const TEXT_BLOCK_DELIM: [char; 3] = ['"', '"', '"'];

/// Lex `text` starting in state `entry`.
///
/// Pure: the same text and entry state always give the same result.
#[must_use]
pub fn scan_line(text: &str, entry: LexState) -> LineScan {
    let chars: Vec<char> = text.chars().collect();
    let mut scan = LineScan {
        exit: entry,
        code: String::with_capacity(text.len()),
        ..LineScan::default()
    };
    let mut i = 0;

    while i < chars.len() {
        i += match scan.exit {
            LexState::BlockComment => step_block_comment(&chars, i, &mut scan),
            LexState::TextBlock => step_text_block(&chars, i, &mut scan),
            LexState::Code => {
                if chars[i] == '/' && chars.get(i + 1) == Some(&'/') {
                    break;
                }
                step_code(&chars, i, &mut scan)
            }
        };
    }

    scan
}

fn step_block_comment(chars: &[char], i: usize, scan: &mut LineScan) -> usize {
    if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
        scan.exit = LexState::Code;
        scan.code.push(' ');
        return 2;
    }
    1
}

fn step_text_block(chars: &[char], i: usize, scan: &mut LineScan) -> usize {
    if chars[i] == '\\' && i + 1 < chars.len() {
        scan.code.extend(&chars[i..i + 2]);
        return 2;
    }
    if chars[i..].starts_with(&TEXT_BLOCK_DELIM) {
        scan.exit = LexState::Code;
        scan.code.push_str("\"\"\"");
        return 3;
    }
    scan.code.push(chars[i]);
    1
}

fn step_code(chars: &[char], i: usize, scan: &mut LineScan) -> usize {
    let c = chars[i];
    if c == '/' && chars.get(i + 1) == Some(&'*') {
        scan.exit = LexState::BlockComment;
        return 2;
    }
    if chars[i..].starts_with(&TEXT_BLOCK_DELIM) {
        scan.exit = LexState::TextBlock;
        scan.code.push_str("\"\"\"");
        return 3;
    }
    if c == '"' || c == '\'' {
        let end = literal_end(chars, i, c);
        scan.code.extend(&chars[i..end]);
        return end - i;
    }
    match c {
        '{' => scan.opens += 1,
        '}' => scan.closes += 1,
        '(' => scan.paren_delta += 1,
        ')' => scan.paren_delta -= 1,
        _ => {}
    }
    scan.code.push(c);
    1
}

/// Index one past the closing quote of the literal starting at `start`.
/// String and char literals cannot span lines, so an unterminated literal
/// ends at the end of the line.
fn literal_end(chars: &[char], start: usize, quote: char) -> usize {
    let mut j = start + 1;
    while j < chars.len() {
        match chars[j] {
            '\\' => j += 2,
            c if c == quote => return j + 1,
            _ => j += 1,
        }
    }
    chars.len()
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
