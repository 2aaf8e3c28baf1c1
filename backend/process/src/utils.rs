use std::sync::LazyLock;

use regex::Regex;

static UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());
static CONTROL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Cc}").unwrap());
static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Division names are proper nouns, so case and punctuation are kept.
pub fn sanitize(input: &str) -> String {
    let s = UNDERSCORES.replace_all(input, " ");
    let s = CONTROL.replace_all(&s, " ");

    SPACES.replace_all(s.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::sanitize;

    #[test]
    fn test_basic() {
        assert_eq!(sanitize("Region_VI"), "Region VI");
        assert_eq!(sanitize("Abilay Norte"), "Abilay Norte");
        assert_eq!(sanitize("Sto. Niño (Pob.)"), "Sto. Niño (Pob.)");
    }

    #[test]
    fn test_leading_trailing_spaces() {
        assert_eq!(sanitize("   Oton   "), "Oton");
        assert_eq!(sanitize("  San   Jose  de  Buenavista "), "San Jose de Buenavista");
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(sanitize("Iloilo\tCity"), "Iloilo City");
        assert_eq!(sanitize("Abilay\r\nSur"), "Abilay Sur");
        assert_eq!(sanitize("\u{0}Cebu"), "Cebu");
    }

    #[test]
    fn test_underscores_and_dashes() {
        assert_eq!(sanitize("Lapu-Lapu_City"), "Lapu-Lapu City");
        assert_eq!(sanitize("_start__end_"), "start end");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("     "), "");
        assert_eq!(sanitize("___"), "");
    }
}
