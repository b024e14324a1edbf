use std::borrow::Cow;

/// Shortens an address for display: `0x1234567890abcdef1234` -> `0x1234…1234`.
///
/// Anything that is not `0x` followed by at least nine alphanumerics comes back
/// untouched.
pub fn truncate_address(address: &str) -> Cow<'_, str> {
    let Some(body) = address.strip_prefix("0x") else {
        return Cow::Borrowed(address);
    };
    if body.len() < 9 || !body.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Cow::Borrowed(address);
    }
    Cow::Owned(format!("0x{}…{}", &body[..4], &body[body.len() - 4..]))
}

/// Routes `tracing` records to the browser console.
#[cfg(target_arch = "wasm32")]
pub fn init_tracing() {
    tracing_wasm::set_as_global_default();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_hex_address() {
        assert_eq!(truncate_address("0x1234567890abcdef1234"), "0x1234…1234");
        assert_eq!(
            truncate_address("0x6B175474E89094C44Da98b954EedeAC495271d0F"),
            "0x6B17…1d0F"
        );
    }

    #[test]
    fn shortest_truncatable() {
        assert_eq!(truncate_address("0x123456789"), "0x1234…6789");
        assert_eq!(truncate_address("0x12345678"), "0x12345678");
    }

    #[test]
    fn malformed_input_is_returned_as_is() {
        for input in ["", "0x", "1234567890abcdef1234", "0x1234-567890abcdef", "0X1234567890abcdef"] {
            assert!(matches!(truncate_address(input), Cow::Borrowed(s) if s == input));
        }
    }
}
