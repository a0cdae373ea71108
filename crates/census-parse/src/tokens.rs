//! Whitespace tokenizer that keeps byte offsets.

/// A whitespace-delimited token and its byte offset in the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
}

impl Token<'_> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Split on whitespace; no quoting or escaping.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (idx, ch) in line.char_indices() {
        if ch.is_whitespace() {
            if let Some(begin) = start.take() {
                tokens.push(Token {
                    text: &line[begin..idx],
                    start: begin,
                });
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(begin) = start {
        tokens.push(Token {
            text: &line[begin..],
            start: begin,
        });
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_offsets_across_runs_of_whitespace() {
        let tokens = tokenize("A  B\tCD ");
        let texts: Vec<_> = tokens.iter().map(|t| (t.text, t.start)).collect();
        assert_eq!(texts, vec![("A", 0), ("B", 3), ("CD", 5)]);
        assert_eq!(tokens[2].end(), 7);
    }

    #[test]
    fn empty_line_has_no_tokens() {
        assert!(tokenize("   ").is_empty());
    }
}
