/// Format a number the way an English-locale printer shows it: shortest decimal
/// form with comma thousands separators, e.g. `1,234,567.89`, `4.5`, `100`.
pub fn grouped(val: f64) -> String {
    if !val.is_finite() {
        return val.to_string();
    }
    let plain = val.abs().to_string();
    let (int_part, dec_part) = match plain.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (plain.as_str(), None),
    };

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let mut out: String = with_commas.chars().rev().collect();
    if let Some(d) = dec_part {
        out.push('.');
        out.push_str(d);
    }

    if val.is_sign_negative() && val != 0.0 {
        format!("-{out}")
    } else {
        out
    }
}
