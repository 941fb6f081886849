use comprobante::partner::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Checkout form to partner ===\n");

    let forms = [
        ("DNI only", r#"{"name":"Juan Pérez","dni":"12345678"}"#),
        (
            "Factura with RUC",
            r#"{"dni":"87654321","ruc":"20987654321","razon_social":"Cliente Mixto SAC","invoice_type_checkbox":"on"}"#,
        ),
        ("RUC without Factura", r#"{"name":"Ana","ruc":"20123456789"}"#),
    ];

    for (label, json) in &forms {
        let form: CheckoutForm = match serde_json::from_str(json) {
            Ok(form) => form,
            Err(e) => {
                println!("  {label}: bad form: {e}");
                continue;
            }
        };
        let partner = prepare_partner(&form);
        println!("  {label}:");
        println!(
            "    name={}, vat={}, invoice_type={}, {}",
            partner.name,
            partner.vat.as_deref().unwrap_or("—"),
            partner.invoice_type,
            partner.document_type.detected_label()
        );
    }

    println!("\n=== RUC prefixes ===\n");

    for ruc in ["10726639361", "20123456789", "30123456789", "2012"] {
        match validate_ruc_prefix(ruc) {
            Ok(kind) => println!("  {ruc} => {kind:?}"),
            Err(e) => println!("  {ruc} => INVALID: {e}"),
        }
    }
}
