#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Malformed posts are fine, panics are bugs.
        if let Ok(form) = serde_json::from_str::<comprobante::partner::CheckoutForm>(s) {
            let _ = comprobante::partner::prepare_partner(&form);
        }
        if let Ok(snapshot) = serde_json::from_str::<comprobante::core::FormSnapshot>(s) {
            let _ = comprobante::core::FormGate::default().validate(&snapshot);
        }
    }
});
