#![no_main]

use comprobante::core::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let category = classify(s);
        let options = [DocumentOption::new("1", "DNI"), DocumentOption::new("6", "RUC")];
        let out = FormGate::default().on_identifier_changed(s, &options, Some("1"));
        assert_eq!(out.category, category);
        if !category.is_recognized() {
            assert_eq!(out.next_selection.as_deref(), Some("1"));
        }
    }
});
