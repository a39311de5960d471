/// Iniciales para el avatar a partir del email.
///
/// Se usa la parte local (antes de `@`), separada por `.`, `_`, `-` o `+`:
/// con dos o más segmentos se toma la primera letra de los dos primeros,
/// con uno solo los dos primeros caracteres. Sin nada utilizable devuelve `"?"`.
pub fn initials_from_email(email: &str) -> String {
    let local = email.trim().split('@').next().unwrap_or_default();
    let segments: Vec<&str> = local
        .split(['.', '_', '-', '+'])
        .filter(|s| !s.is_empty())
        .collect();

    let initials: String = match segments.as_slice() {
        [] => return "?".to_string(),
        [single] => single.chars().take(2).collect(),
        [first, second, ..] => first.chars().take(1).chain(second.chars().take(1)).collect(),
    };
    initials.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_segments() {
        assert_eq!(initials_from_email("alice.martin@acme.io"), "AM");
        assert_eq!(initials_from_email("jean_luc-picard@fleet.org"), "JL");
    }

    #[test]
    fn test_single_segment() {
        assert_eq!(initials_from_email("bruno@silvatech.br"), "BR");
        assert_eq!(initials_from_email("x@y.z"), "X");
    }

    #[test]
    fn test_without_domain() {
        assert_eq!(initials_from_email("emma"), "EM");
    }

    #[test]
    fn test_empty_or_symbols_only() {
        assert_eq!(initials_from_email(""), "?");
        assert_eq!(initials_from_email("   "), "?");
        assert_eq!(initials_from_email("@acme.io"), "?");
        assert_eq!(initials_from_email("..@acme.io"), "?");
    }

    #[test]
    fn test_unicode() {
        assert_eq!(initials_from_email("élodie.ørsted@mail.eu"), "ÉØ");
    }
}
