// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Identifier helpers for generated Python names.

/// Convert a name to identifier case.
///
/// Every ASCII upper-case letter after the first character gets a `_`
/// inserted before it, and all upper-case letters are lowered. Runs of
/// capitals are split letter by letter (`HTTPServer` -> `h_t_t_p_server`).
pub fn to_identifier_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);

    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// Make a name usable as a Python identifier.
///
/// A leading decimal digit is prefixed with `_` and every `.` becomes `_`.
pub fn sanitise_name(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 1);

    for (i, c) in s.chars().enumerate() {
        if i == 0 && c.is_ascii_digit() {
            result.push('_');
        }
        if c == '.' {
            result.push('_');
        } else {
            result.push(c);
        }
    }

    result
}
