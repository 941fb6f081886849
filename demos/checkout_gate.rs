use comprobante::core::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = [
        DocumentOption::new("", "-- Tipo de documento --"),
        DocumentOption::new("1", "DNI"),
        DocumentOption::new("6", "RUC"),
    ];
    let mut gate = FormGate::new(GateConfig::default(), false);

    println!("=== Identifier detection ===\n");

    let mut selection: Option<String> = None;
    for input in ["7266", "72663936", "7266393612", "10-72663936-1", ""] {
        let out = gate.on_identifier_changed(input, &options, selection.as_deref());
        println!(
            "  {input:>15} => {:?}, selection={}, notify={}",
            out.category,
            out.next_selection.as_deref().unwrap_or("—"),
            out.notify()
        );
        if let Some(note) = &out.notification {
            println!("      \"{}\" (until {})", note.message, note.dismiss_at());
        }
        selection = out.next_selection;
    }

    println!("\n=== Boleta / Factura ===\n");

    let mut form = FormSnapshot::new(false)
        .with("name", "Empresa SAC")
        .with("email", "compras@empresa.pe")
        .with("phone", "+51 999 999 999")
        .with("street", "Av. Larco 123")
        .with("city", "Lima");

    form.apply_requirement(&gate.on_invoice_toggle(true));
    form.set("razon_social", "Empresa SAC");
    form.set("ruc", "2012345");
    println!("  mode={}", gate.mode());
    match gate.validate(&form).message() {
        Some(msg) => println!("  INVALID:\n{msg}"),
        None => println!("  valid"),
    }

    form.apply_requirement(&gate.on_invoice_toggle(false));
    println!("  mode={}, ruc='{}'", gate.mode(), form.value("ruc"));
    println!("  valid={}", gate.validate(&form).is_valid());
}
