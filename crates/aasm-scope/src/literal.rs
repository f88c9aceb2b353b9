/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */

//! Syntactic checks for the literal forms the DSL knows about.

///True if `expr` is a finite floating point literal, like `5`, `-2.5` or `1e3`.
pub fn is_float(expr: &str) -> bool {
    match expr.parse::<f64>() {
        Ok(value) => value.is_finite(),
        Err(_) => false,
    }
}

///True if `expr` is an integer literal: an optional sign followed by decimal digits. There is no
/// size limit, so most integer literals are also float literals, but not all.
pub fn is_int(expr: &str) -> bool {
    let digits = expr
        .strip_prefix('-')
        .or_else(|| expr.strip_prefix('+'))
        .unwrap_or(expr);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

///True if `expr` is a connection address in the form `local@domain`, optionally
/// followed by `/resource`.
pub fn is_connection(expr: &str) -> bool {
    if expr.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, rest)) = expr.split_once('@') else {
        return false;
    };

    if rest.contains('@') {
        return false;
    }

    let domain = match rest.split_once('/') {
        Some((domain, _resource)) => domain,
        None => rest,
    };

    !local.is_empty() && !domain.is_empty()
}

#[cfg(test)]
mod test {
    use super::{is_connection, is_float, is_int};

    #[test]
    fn floats() {
        assert!(is_float("5"));
        assert!(is_float("5.0"));
        assert!(is_float("-2.5"));
        assert!(is_float("1e3"));
        assert!(!is_float("inf"));
        assert!(!is_float("NaN"));
        assert!(!is_float("x"));
        assert!(!is_float(""));
    }

    #[test]
    fn integers() {
        assert!(is_int("3"));
        assert!(is_int("-3"));
        assert!(!is_int("3.0"));
        assert!(!is_int("1e3"));
        assert!(!is_int("three"));
        assert!(is_int("+7"));
        assert!(!is_int("-"));
        assert!(!is_int(""));
        assert!(!is_int("1 2"));
        //beyond i64
        assert!(is_int("99999999999999999999"));
        assert!(is_int("-123456789012345678901234567890"));
    }

    #[test]
    fn connections() {
        assert!(is_connection("agent@localhost"));
        assert!(is_connection("agent@localhost/home"));
        assert!(!is_connection("agent@"));
        assert!(!is_connection("@localhost"));
        assert!(!is_connection("a@b@c"));
        assert!(!is_connection("agent localhost"));
        assert!(!is_connection("agent @localhost"));
        assert!(!is_connection("5.0"));
    }
}
