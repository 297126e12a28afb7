//! Property-based tests for address-bar resolution.
//!
//! Whatever the user types, the loaded address starts with an http(s)
//! scheme, and text that already has one is loaded unchanged.

use proptest::prelude::*;
use tmeon::services::address::resolve_address;

fn arb_host_text() -> impl Strategy<Value = String> {
    "[a-z0-9.\\-/:?=&]{0,40}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn resolved_address_has_http_scheme(text in any::<String>()) {
        let address = resolve_address(&text);
        prop_assert!(address.starts_with("http://") || address.starts_with("https://"));
    }

    #[test]
    fn schemeless_text_gets_https_prefix(text in arb_host_text()) {
        prop_assume!(!text.starts_with("http://") && !text.starts_with("https://"));
        prop_assert_eq!(resolve_address(&text), format!("https://{}", text));
    }

    #[test]
    fn http_and_https_pass_through(
        scheme in prop_oneof![Just("http://"), Just("https://")],
        rest in arb_host_text(),
    ) {
        let text = format!("{}{}", scheme, rest);
        prop_assert_eq!(resolve_address(&text), text);
    }

    #[test]
    fn resolving_twice_changes_nothing(text in any::<String>()) {
        let once = resolve_address(&text);
        prop_assert_eq!(resolve_address(&once), once.clone());
    }
}
