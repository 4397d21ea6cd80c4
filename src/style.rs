//! Terminal style directives
//!
//! Settings describe styles as `+`-separated token strings, e.g.
//! `"bold+bright+blue"` or `"bold+underline+green"`. Tokens map onto
//! `console` attributes and colors; unknown tokens are skipped with a warning
//! so a typo in a hand-edited settings file never aborts the run.

use console::Style;
use tracing::warn;

/// Parses a `+`-separated directive string into a [`console::Style`]
pub fn parse_style(directive: &str) -> Style {
    let mut style = Style::new();
    for token in directive.split('+') {
        style = match token.trim().to_ascii_lowercase().as_str() {
            "" => style,
            "bold" => style.bold(),
            "dim" => style.dim(),
            "italic" => style.italic(),
            "underline" => style.underlined(),
            "blink" => style.blink(),
            "reverse" => style.reverse(),
            "bright" => style.bright(),
            "black" => style.black(),
            "red" => style.red(),
            "green" => style.green(),
            "yellow" => style.yellow(),
            "blue" => style.blue(),
            "magenta" => style.magenta(),
            "cyan" => style.cyan(),
            "white" => style.white(),
            other => {
                warn!(token = other, "unknown style token");
                style
            }
        };
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Renders `text` with styling forced on, so tests are tty-independent
    fn render(style: &Style, text: &str) -> String {
        style.apply_to(text).force_styling(true).to_string()
    }

    #[test]
    fn test_parsed_style_applies_ansi_codes() {
        let style = parse_style("bold+green");
        let rendered = render(&style, "Kirito");
        assert!(rendered.contains('\u{1b}'), "rendered: {:?}", rendered);
        assert!(rendered.contains("Kirito"));
    }

    #[test]
    fn test_empty_directive_yields_plain_style() {
        let style = parse_style("");
        assert_eq!(render(&style, "plain"), render(&Style::new(), "plain"));
    }

    #[test]
    fn test_unknown_tokens_are_ignored() {
        let with_noise = parse_style("bold+wibble+green");
        let clean = parse_style("bold+green");
        assert_eq!(render(&with_noise, "x"), render(&clean, "x"));
    }

    #[test]
    fn test_tokens_are_case_insensitive_and_trimmed() {
        let mixed = parse_style(" Bold + GREEN ");
        let clean = parse_style("bold+green");
        assert_eq!(render(&mixed, "x"), render(&clean, "x"));
    }

    #[test]
    fn test_default_directives_parse_to_distinct_styles() {
        let head = parse_style("bold+bright+blue");
        let name = parse_style("bold+underline+green");
        assert_ne!(render(&head, "x"), render(&name, "x"));
    }
}
