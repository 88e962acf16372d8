//! Number formatting for insight text.

/// Fixed number of decimals, rounding halves away from zero.
pub fn fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    // avoid printing "-0.0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", decimals, rounded)
}

/// Like [`fixed`], with a leading `+` for positive values.
pub fn signed_fixed(value: f64, decimals: usize) -> String {
    if value > 0.0 {
        format!("+{}", fixed(value, decimals))
    } else {
        fixed(value, decimals)
    }
}

/// Thousands-grouped number with up to three fraction digits (`1,234.5`).
pub fn grouped(value: f64) -> String {
    let text = fixed(value.abs(), 3);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((&text, ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(text.len() + text.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }

    if value < 0.0 && out.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.insert(0, '-');
    }
    out
}
