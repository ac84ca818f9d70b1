// Display-only quoting for echoing the command about to run. Execution always
// goes through an argument vector; this string never reaches a shell.

/// Join `executable` and `args` into a copy-pasteable POSIX command line.
pub fn format_shell_command(executable: &str, args: &[String]) -> String {
    let mut words = Vec::with_capacity(args.len() + 1);
    words.push(quote_word(executable));
    for arg in args {
        words.push(quote_word(arg));
    }
    words.join(" ")
}

fn quote_word(word: &str) -> String {
    if is_safe_word(word) {
        return word.to_string();
    }
    // Close the quote around embedded single quotes: ' becomes '\''
    format!("'{}'", word.replace('\'', r"'\''"))
}

fn is_safe_word(word: &str) -> bool {
    !word.is_empty()
        && word.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '@' | '%' | '+' | '=' | ':' | ',' | '/' | '-')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn safe_words_stay_bare() {
        assert_eq!(
            format_shell_command("codex", &args(&["--version"])),
            "codex --version"
        );
        assert_eq!(
            format_shell_command("claude", &args(&["--model", "claude-3", "a/b.txt"])),
            "claude --model claude-3 a/b.txt"
        );
    }

    #[test]
    fn unsafe_words_are_single_quoted() {
        assert_eq!(
            format_shell_command("codex", &args(&["--model", "space value", "mix'ed"])),
            r"codex --model 'space value' 'mix'\''ed'"
        );
    }

    #[test]
    fn empty_word_is_quoted() {
        assert_eq!(format_shell_command("codex", &args(&[""])), "codex ''");
    }

    #[test]
    fn no_args_is_just_the_executable() {
        assert_eq!(format_shell_command("gemini", &[]), "gemini");
    }

    #[test]
    fn shell_metacharacters_are_neutralized() {
        assert_eq!(
            format_shell_command("codex", &args(&["$(rm -rf /)", "a;b"])),
            "codex '$(rm -rf /)' 'a;b'"
        );
    }
}
