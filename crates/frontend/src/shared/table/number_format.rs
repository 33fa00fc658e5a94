//! Утилиты форматирования чисел для таблиц и виджетов

/// Группирует целую часть по три цифры, разделитель - пробел.
/// Знак минуса не отделяется от первой группы.
fn group_thousands(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    format!("{}{}", sign, grouped)
}

/// Число с разделителем тысяч и заданным числом знаков после точки.
/// Например `1234.567` с двумя знаками -> `"1 234.57"`.
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    match formatted.split_once('.') {
        Some((integer, fraction)) => format!("{}.{}", group_thousands(integer), fraction),
        None => group_thousands(&formatted),
    }
}

/// Денежное значение: два знака после точки, разделитель тысяч.
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Денежное значение с кодом валюты: `"1 234.56 RUB"`.
pub fn format_money_with_currency(value: f64, currency_code: &str) -> String {
    format!("{} {}", format_money(value), currency_code)
}

/// Целое с разделителем тысяч.
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1 234 567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1 234");
    }

    #[test]
    fn test_format_money_with_currency() {
        assert_eq!(format_money_with_currency(98765.4, "RUB"), "98 765.40 RUB");
    }
}
