/// Returns the address only when it looks like one (contains `@`).
pub fn valid_email(value: Option<&str>) -> Option<&str> {
    value.filter(|email| email.contains('@'))
}
