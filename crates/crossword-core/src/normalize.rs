use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize answer or guess text to its canonical comparison form.
///
/// Decomposes accented characters (NFD), drops the combining marks,
/// uppercases, and keeps only `A`-`Z`. Spaces, digits, hyphens and
/// punctuation all vanish, so `"Úna Solá  Salud"` and `"UNA SOLA SALUD"`
/// normalize to the same string.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents() {
        assert_eq!(normalize("ETIOLOGÍA"), "ETIOLOGIA");
        assert_eq!(normalize("CAMBIO CLIMÁTICO"), "CAMBIOCLIMATICO");
        assert_eq!(normalize("FRAGMENTACIÓN DEL HÁBITAT"), "FRAGMENTACIONDELHABITAT");
    }

    #[test]
    fn test_case_and_spacing_insensitive() {
        assert_eq!(normalize("Úna Solá  Salud"), "UNASOLASALUD");
        assert_eq!(normalize("UNA SOLA SALUD"), "UNASOLASALUD");
        assert_eq!(normalize("una sola salud"), "UNASOLASALUD");
    }

    #[test]
    fn test_drops_non_letters() {
        assert_eq!(normalize("covid-19!"), "COVID");
        assert_eq!(normalize("3.1415"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_idempotent() {
        for input in ["Úna Solá  Salud", "zoonosis", "  a-b-c  ", "ñandú"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }
}
