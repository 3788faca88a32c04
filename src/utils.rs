use once_cell::sync::Lazy;
use regex::Regex;

static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Normalizes text before it is read out by assistive technology: splits
/// camelCase words, collapses whitespace runs and trims the ends.
pub fn format_accessible_text(text: &str) -> String {
    let split = CAMEL_BOUNDARY.replace_all(text, "$1 $2");
    WHITESPACE_RUN.replace_all(&split, " ").trim().to_string()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_camel_case_and_collapses_whitespace() {
        assert_eq!(format_accessible_text("  altoContraste   ativado "), "alto Contraste ativado");
        assert_eq!(format_accessible_text("Tamanho\n\tda fonte"), "Tamanho da fonte");
    }

    #[test]
    fn leaves_plain_sentences_alone() {
        let msg = "Controles de acessibilidade abertos";
        assert_eq!(format_accessible_text(msg), msg);
        assert_eq!(format_accessible_text(""), "");
    }

    #[test]
    fn email_validation() {
        assert!(is_valid_email("contato@acolhemente.com"));
        assert!(!is_valid_email("contato@acolhemente"));
        assert!(!is_valid_email("contato acolhemente@x.com"));
        assert!(!is_valid_email("@acolhemente.com"));
    }
}
