// Utility functions

pub const STEAM_STORE_BASE_URL: &str = "https://store.steampowered.com/app";
pub const STEAM_IMAGE_BASE_URL: &str = "https://cdn.akamai.steamstatic.com/steam/apps";

/// COP per reference-currency unit. Must match the divisor used when normalizing COL$ prices.
pub const COP_RATE: f64 = 4000.0;

pub fn steam_url(app_id: &str) -> String {
    format!("{}/{}/", STEAM_STORE_BASE_URL, app_id)
}

pub fn steam_image_url(app_id: &str) -> String {
    format!("{}/{}/header.jpg", STEAM_IMAGE_BASE_URL, app_id)
}

/// Display price for the Spanish UI.
pub fn format_price(price: &str) -> String {
    if price == "Free" {
        "Gratis".to_string()
    } else {
        price.to_string()
    }
}

/// Converts a reference-currency value back into whole pesos, grouped with `.` (es-CO).
pub fn format_price_in_cop(value: f64) -> String {
    let pesos = (value * COP_RATE).round().max(0.0) as u64;
    let digits = pesos.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
