//! Splits a raw command line into whitespace-delimited tokens.

/// Characters that separate tokens. The bell character is included for parity
/// with classic tokenizer tables; it never survives into a token.
const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\u{0007}'];

/// Split a line into the ordered sequence of maximal non-whitespace substrings.
///
/// Consecutive delimiters collapse, so the result never contains empty tokens;
/// an empty or all-whitespace line yields an empty vector. No quoting or
/// escaping is interpreted — a quote is an ordinary character.
pub fn split_line(line: &str) -> Vec<String> {
    line.split(|c| DELIMITERS.contains(&c))
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(line: &str) -> Vec<String> {
        split_line(line)
    }

    #[test]
    fn empty_line_yields_no_tokens() {
        assert!(toks("").is_empty());
    }

    #[test]
    fn whitespace_only_line_yields_no_tokens() {
        assert!(toks("   \t \r \u{0007} \n").is_empty());
    }

    #[test]
    fn splits_on_single_spaces() {
        assert_eq!(toks("ls -l /tmp"), vec!["ls", "-l", "/tmp"]);
    }

    #[test]
    fn consecutive_delimiters_collapse() {
        assert_eq!(toks("  echo \t\t hello \r\n"), vec!["echo", "hello"]);
    }

    #[test]
    fn bell_character_is_a_delimiter() {
        assert_eq!(toks("cd\u{0007}/tmp"), vec!["cd", "/tmp"]);
    }

    #[test]
    fn quotes_are_ordinary_characters() {
        assert_eq!(
            toks("echo \"hello world\""),
            vec!["echo", "\"hello", "world\""]
        );
    }

    #[test]
    fn first_token_is_the_command_name() {
        let tokens = toks("  grep foo bar.txt");
        assert_eq!(tokens.first().map(String::as_str), Some("grep"));
    }
}
