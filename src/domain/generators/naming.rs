//! Identifier helpers shared by the generators.

/// Lowercase, ASCII-alphanumeric words joined by `-`.
pub fn slugify(raw: &str) -> String {
    words(raw).join("-")
}

/// `about us` / `about-us` -> `AboutUs`.
pub fn pascal_case(raw: &str) -> String {
    words(raw).iter().map(|word| capitalize(word)).collect()
}

/// `use-cart` -> `useCart`.
pub fn camel_case(raw: &str) -> String {
    let mut parts = words(raw).into_iter();
    let mut out = parts.next().unwrap_or_default();
    for word in parts {
        out.push_str(&capitalize(&word));
    }
    out
}

/// Quote a string as a JSON/JS string literal.
pub fn js_string(raw: &str) -> String {
    serde_json::to_string(raw).unwrap_or_else(|_| "\"\"".to_string())
}

fn words(raw: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut previous_lower = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            // Split camelCase boundaries.
            if ch.is_ascii_uppercase() && previous_lower && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            previous_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
            current.push(ch.to_ascii_lowercase());
        } else {
            previous_lower = false;
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
