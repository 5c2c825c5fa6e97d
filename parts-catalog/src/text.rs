//! Small text helpers shared by the description templates.

/// Make sure a sentence ends with terminal punctuation.
pub fn terminate(mut text: String) -> String {
    let trimmed = text.trim_end().len();
    text.truncate(trimmed);
    if !text.ends_with(['.', '!', '?']) {
        text.push('.');
    }
    text
}

/// Append a ` Price: X.` clause when a price is known.
pub fn with_price(text: String, price: Option<&str>) -> String {
    match price.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => format!("{text} Price: {}", terminate(p.to_string())),
        None => text,
    }
}

/// Format whole pesos with thousands separators, e.g. `₱85,750`.
pub fn format_pesos(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    out.push('₱');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Lowercase the first word when it is an ordinary capitalized word.
///
/// Acronyms and brand names (`AMD's`, `ATX`) are left untouched.
pub fn lower_first_word(text: &str) -> String {
    let first_word = text.split_whitespace().next().unwrap_or_default();
    let is_plain = first_word.chars().skip(1).all(|c| !c.is_uppercase());
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_plain => first.to_lowercase().chain(chars).collect(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminate_adds_single_period() {
        assert_eq!(terminate("Works with B760".into()), "Works with B760.");
        assert_eq!(terminate("Check the QVL. ".into()), "Check the QVL.");
    }

    #[test]
    fn price_clause_is_optional() {
        assert_eq!(with_price("A.".into(), Some("₱2,000")), "A. Price: ₱2,000.");
        assert_eq!(with_price("A.".into(), None), "A.");
        assert_eq!(with_price("A.".into(), Some("  ")), "A.");
    }

    #[test]
    fn pesos_are_grouped_by_thousands() {
        assert_eq!(format_pesos(0), "₱0");
        assert_eq!(format_pesos(450), "₱450");
        assert_eq!(format_pesos(7500), "₱7,500");
        assert_eq!(format_pesos(85750), "₱85,750");
        assert_eq!(format_pesos(1234567), "₱1,234,567");
    }

    #[test]
    fn lower_first_word_keeps_acronyms() {
        assert_eq!(lower_first_word("The standard size"), "the standard size");
        assert_eq!(lower_first_word("A socket developed"), "a socket developed");
        assert_eq!(lower_first_word("AMD's latest socket"), "AMD's latest socket");
    }
}
