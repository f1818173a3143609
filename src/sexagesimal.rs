use once_cell::sync::OnceCell;

/// Formats angle (degrees or hours) as `[-]DD:MM:SS[.f]`.
/// `lead_zero` pads integer part to two digits,
/// `sec_decimals` is number of digits after seconds
pub fn value_to_sexagesimal(value: f64, lead_zero: bool, sec_decimals: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let scale = 10_u64.pow(sec_decimals);
    let total = (value.abs() * 3600.0 * scale as f64).round() as u64;
    let sign = if value < 0.0 && total != 0 { "-" } else { "" };

    let int_part = total / (3600 * scale);
    let rest = total % (3600 * scale);
    let minutes = rest / (60 * scale);
    let rest = rest % (60 * scale);
    let seconds = rest / scale;
    let sec_frac = rest % scale;

    let int_str = if lead_zero {
        format!("{:02}", int_part)
    } else {
        int_part.to_string()
    };

    if sec_decimals == 0 {
        format!("{}{}:{:02}:{:02}", sign, int_str, minutes, seconds)
    } else {
        format!(
            "{}{}:{:02}:{:02}.{:0width$}",
            sign, int_str, minutes, seconds, sec_frac,
            width = sec_decimals as usize
        )
    }
}

#[test]
fn test_value_to_sexagesimal() {
    assert_eq!(value_to_sexagesimal(0.0, true, 0), "00:00:00");
    assert_eq!(value_to_sexagesimal(6.0, true, 1), "06:00:00.0");
    assert_eq!(value_to_sexagesimal(6.0, false, 1), "6:00:00.0");
    assert_eq!(value_to_sexagesimal(-10.5, true, 0), "-10:30:00");
    assert_eq!(value_to_sexagesimal(42.508333333333333, true, 0), "42:30:30");
    assert_eq!(value_to_sexagesimal(123.456789, false, 2), "123:27:24.44");
    // rounding carries into minutes and degrees
    assert_eq!(value_to_sexagesimal(29.99999999, true, 1), "30:00:00.0");
    // negative value that rounds to zero has no sign
    assert_eq!(value_to_sexagesimal(-0.0000001, true, 0), "00:00:00");
}

/// Parses `[+-]D[.d]`, `[+-]D:M[.m]` or `[+-]D:M:S[.s]`
pub fn sexagesimal_to_value(text: &str) -> Option<f64> {
    static RE: OnceCell<regex::Regex> = OnceCell::new();
    let re = RE.get_or_init(|| {
        regex::Regex::new(
            r"^([+-]?)(\d+(?:\.\d*)?)(?::(\d+(?:\.\d*)?))?(?::(\d+(?:\.\d*)?))?$"
        ).unwrap()
    });
    let caps = re.captures(text.trim())?;
    let is_neg = &caps[1] == "-";
    let part = |idx: usize| -> f64 {
        caps.get(idx)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0)
    };
    let value = part(2) + part(3) / 60.0 + part(4) / 3600.0;
    Some(if is_neg { -value } else { value })
}

#[test]
fn test_sexagesimal_to_value() {
    assert!(sexagesimal_to_value("").is_none());
    assert!(sexagesimal_to_value("abc").is_none());
    assert!(sexagesimal_to_value("10:xx").is_none());
    assert_eq!(sexagesimal_to_value("42"), Some(42.0));
    assert_eq!(sexagesimal_to_value("-71.25"), Some(-71.25));
    assert_eq!(sexagesimal_to_value("+1:00"), Some(1.0));
    assert_eq!(sexagesimal_to_value("-1:00"), Some(-1.0));
    assert_eq!(sexagesimal_to_value(" 10:30 "), Some(10.5));
    assert!(f64::abs(sexagesimal_to_value("-10:30.3").unwrap() + 10.505) < 1e-12);
    assert_eq!(sexagesimal_to_value("10:30:00"), Some(10.5));
    assert_eq!(sexagesimal_to_value("10:30:30"), Some(10.508333333333333));
    let v = sexagesimal_to_value("-00:30:36.5").unwrap();
    assert!(f64::abs(v + (30.0 / 60.0 + 36.5 / 3600.0)) < 1e-12);
}
