//! Property-based tests for the classifier and the form gate.
//!
//! Run with: `cargo test --test proptest_tests`

use comprobante::core::*;
use proptest::prelude::*;

fn options() -> Vec<DocumentOption> {
    vec![DocumentOption::new("1", "DNI"), DocumentOption::new("6", "RUC")]
}

proptest! {
    #[test]
    fn eight_digits_always_dni(s in "[0-9]{8}") {
        prop_assert_eq!(classify(&s), DocumentTypeCategory::NationalId);
    }

    #[test]
    fn eleven_digits_always_ruc(s in "[0-9]{11}") {
        prop_assert_eq!(classify(&s), DocumentTypeCategory::TaxId);
    }

    #[test]
    fn non_digits_ignored(s in "[0-9]{8}", noise in "[ a-zA-Z.-]{0,6}", at in 0usize..9) {
        let at = at.min(s.len());
        let noisy = format!("{}{}{}", &s[..at], noise, &s[at..]);
        prop_assert_eq!(classify(&noisy), DocumentTypeCategory::NationalId);
        prop_assert_eq!(normalize_identifier(&noisy), s);
    }

    #[test]
    fn no_digits_is_unknown(s in "[^0-9]{0,20}") {
        prop_assert_eq!(classify(&s), DocumentTypeCategory::Unknown);
    }

    #[test]
    fn other_lengths_incomplete(
        s in prop_oneof!["[0-9]{1,7}", "[0-9]{9,10}", "[0-9]{12,30}"]
    ) {
        prop_assert_eq!(classify(&s), DocumentTypeCategory::Incomplete);
    }

    #[test]
    fn unrecognized_never_changes_selection(
        s in prop_oneof!["[^0-9]{0,10}", "[0-9]{1,7}", "[0-9]{9,10}", "[0-9]{12,20}"],
        current in proptest::option::of("[1-9]"),
    ) {
        let gate = FormGate::default();
        let out = gate.on_identifier_changed(&s, &options(), current.as_deref());
        prop_assert_eq!(&out.next_selection, &current);
        prop_assert!(!out.notify());
    }

    #[test]
    fn classify_is_total(s in ".*") {
        let _ = classify(&s);
    }

    #[test]
    fn toggle_off_always_clears(
        name in "[A-Za-z ]{0,20}",
        ruc in "[0-9]{0,12}",
        initially in any::<bool>(),
    ) {
        let mut gate = FormGate::new(GateConfig::default(), initially);
        let mut form = FormSnapshot::new(initially);
        form.apply_requirement(&gate.on_invoice_toggle(true));
        form.set("razon_social", name);
        form.set("ruc", ruc);
        let req = gate.on_invoice_toggle(false);
        form.apply_requirement(&req);
        prop_assert!(!req.required);
        prop_assert_eq!(form.value("razon_social"), "");
        prop_assert_eq!(form.value("ruc"), "");
    }
}
