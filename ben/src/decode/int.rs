/// Parses an optionally signed run of ASCII digits.
///
/// Negative values accumulate downwards so that `i64::MIN` is reachable.
pub fn parse_i64(buf: &[u8]) -> Option<i64> {
    let (negative, digits) = match buf.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, buf),
    };

    if digits.is_empty() {
        return None;
    }

    let mut val: i64 = 0;
    for &c in digits {
        if !c.is_ascii_digit() {
            return None;
        }
        let d = i64::from(c - b'0');
        val = val.checked_mul(10)?;
        val = if negative {
            val.checked_sub(d)?
        } else {
            val.checked_add(d)?
        };
    }

    Some(val)
}

/// Parses an unsigned run of ASCII digits.
pub fn parse_usize(buf: &[u8]) -> Option<usize> {
    if buf.is_empty() {
        return None;
    }

    let mut val: usize = 0;
    for &c in buf {
        if !c.is_ascii_digit() {
            return None;
        }
        let d = usize::from(c - b'0');
        val = val.checked_mul(10).and_then(|n| n.checked_add(d))?;
    }

    Some(val)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed() {
        assert_eq!(Some(0), parse_i64(b"0"));
        assert_eq!(Some(42), parse_i64(b"42"));
        assert_eq!(Some(-42), parse_i64(b"-42"));
        assert_eq!(Some(i64::MAX), parse_i64(b"9223372036854775807"));
        assert_eq!(Some(i64::MIN), parse_i64(b"-9223372036854775808"));
    }

    #[test]
    fn signed_overflow() {
        assert_eq!(None, parse_i64(b"9223372036854775808"));
        assert_eq!(None, parse_i64(b"-9223372036854775809"));
    }

    #[test]
    fn signed_garbage() {
        assert_eq!(None, parse_i64(b""));
        assert_eq!(None, parse_i64(b"-"));
        assert_eq!(None, parse_i64(b"1a"));
        assert_eq!(None, parse_i64(b"--1"));
    }

    #[test]
    fn unsigned() {
        assert_eq!(Some(0), parse_usize(b"0"));
        assert_eq!(Some(1234), parse_usize(b"1234"));
        assert_eq!(None, parse_usize(b"-1"));
        assert_eq!(None, parse_usize(b""));
        let too_big = format!("{}", usize::MAX as u128 + 1);
        assert_eq!(None, parse_usize(too_big.as_bytes()));
    }
}
