use super::super::allocation::Allocation;
use super::Completion;

/// Leading acquired quantity of a credit display string.
///
/// `"95(45)"` reads as 95 acquired with 45 remaining, so only the prefix matching
/// `digits(.digits)?` counts. Blank input and input without a leading number yield `None`.
pub fn extract_number(raw: &str) -> Option<f64> {
    if raw.trim().is_empty() {
        return None;
    }

    let bytes = raw.as_bytes();
    let integer_end = leading_digits(bytes, 0);
    if integer_end == 0 {
        return None;
    }

    let mut end = integer_end;
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = leading_digits(bytes, end + 1);
        if fraction_end > end + 1 {
            end = fraction_end;
        }
    }

    raw[..end].parse::<f64>().ok()
}

/// Lenient float parse over the longest numeric prefix, skipping leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction (`".5"` included), and an
/// optional exponent, or a signed `Infinity`. Returns `None` when no digits lead the string.
pub fn parse_float(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();

    let sign_end = usize::from(matches!(bytes.first(), Some(b'+') | Some(b'-')));
    if text[sign_end..].starts_with("Infinity") {
        return Some(if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    let integer_end = leading_digits(bytes, sign_end);
    let mut literal = text[..integer_end].to_string();
    let mut end = integer_end;

    if bytes.get(end) == Some(&b'.') {
        let fraction_end = leading_digits(bytes, end + 1);
        if fraction_end > end + 1 {
            literal.push_str(&text[end..fraction_end]);
        }
        end = fraction_end;
    }

    if end == sign_end || literal.len() == sign_end {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let signed = matches!(bytes.get(end + 1), Some(b'+') | Some(b'-'));
        let digits_start = end + 1 + usize::from(signed);
        let exponent_end = leading_digits(bytes, digits_start);
        if exponent_end > digits_start {
            literal.push_str(&text[end..exponent_end]);
        }
    }

    literal.parse::<f64>().ok()
}

fn leading_digits(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    end
}

/// Completion verdict for one row. The first matching rule wins:
///
/// 1. a vacant allocation is always satisfied;
/// 2. a `"Y"` value meets a `"Y"` gate;
/// 3. an `"N"` value, or anything but `"Y"` against a gate, fails;
/// 4. a value without a leading number fails;
/// 5. an allocation without a numeric reading is satisfied;
/// 6. otherwise the value must reach the allocation (inclusive).
pub fn calculate_completion(credit_value: &str, allocation: &Allocation) -> Completion {
    if allocation.is_vacant() {
        return Completion::Complete;
    }

    if credit_value == "Y" && allocation.is_gate() {
        return Completion::Complete;
    }

    if credit_value == "N" || allocation.is_gate() {
        return Completion::Incomplete;
    }

    let Some(acquired) = extract_number(credit_value) else {
        return Completion::Incomplete;
    };

    let Some(required) = allocation.as_number() else {
        return Completion::Complete;
    };

    if acquired >= required {
        Completion::Complete
    } else {
        Completion::Incomplete
    }
}
