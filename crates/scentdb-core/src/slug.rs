/// Generate a URL-safe slug.
///
/// Text is transliterated to ASCII first (`Chloé` becomes `chloe`). ASCII
/// alphanumerics are lower-cased and kept, quote characters are dropped, and
/// every remaining run of characters becomes a single `-`. Leading and
/// trailing separators are trimmed.
#[must_use]
pub fn slugify(text: &str) -> String {
    deunicode::deunicode_with_tofu(text, "")
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c
            } else if matches!(c, '\'' | '"') {
                '\0'
            } else {
                '-'
            }
        })
        .filter(|&c| c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_simple_name() {
        assert_eq!(slugify("Dolce & Gabbana"), "dolce-gabbana");
    }

    #[test]
    fn slug_drops_apostrophes() {
        assert_eq!(slugify("L'Occitane"), "loccitane");
    }

    #[test]
    fn slug_product_id_suffix() {
        assert_eq!(
            slugify("Light Blue Eau de Toilette 100ml p.1000"),
            "light-blue-eau-de-toilette-100ml-p-1000"
        );
    }

    #[test]
    fn slug_transliterates_accented_letters() {
        assert_eq!(slugify("Chloé"), "chloe");
        assert_eq!(slugify("Lancôme"), "lancome");
        assert_eq!(slugify("Hermès Terre d’Hermès"), "hermes-terre-dhermes");
    }

    #[test]
    fn slug_of_non_latin_name_is_not_empty() {
        let slug = slugify("香水");
        assert!(!slug.is_empty());
        assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c == '-'));
    }

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(slugify("  --Acqua  di   Gio-- "), "acqua-di-gio");
    }

    #[test]
    fn slug_is_stable() {
        assert_eq!(slugify("Jo Malone London"), slugify("Jo Malone London"));
    }
}
