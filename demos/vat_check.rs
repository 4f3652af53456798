use tracing_subscriber::EnvFilter;
use vatfeld::{CountryRegistry, RegistryError, ValidationOutcome};

fn main() -> Result<(), RegistryError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = CountryRegistry::reference()?;

    // Country search (accent- and case-insensitive)
    println!("=== Country Search ===\n");

    for query in ["croacia", "CROÁCIA", "HR", "es", "atlantis", ""] {
        let hits: Vec<String> = registry.search(query).iter().map(|r| r.label()).collect();
        if hits.is_empty() {
            println!("  {query:?} => no results");
        } else {
            println!("  {query:?} => {}", hits.join(", "));
        }
    }

    // As-you-type validation
    println!("\n=== As-You-Type Validation ===\n");

    let typed = [
        ("PT", "12345678"),    // one digit short
        ("PT", "249888776"),   // valid
        ("PT", "24988877X"),   // letter in a numeric rule
        ("RO", "1"),           // below 2 digits
        ("RO", "12345678901"), // too long
        ("AT", "U1234567"),    // one short
        ("AT", "u12345678"),   // lowercase letter accepted
        ("AT", "X12345678"),   // wrong letter
        ("NL", "123456789B01"),
    ];

    for (code, candidate) in &typed {
        match registry.validate(code, candidate)? {
            ValidationOutcome::Incomplete => println!("  {code} {candidate:<14} => …"),
            ValidationOutcome::Valid => println!("  {code} {candidate:<14} => valid"),
            ValidationOutcome::Invalid(msg) => {
                println!("  {code} {candidate:<14} => INVALID: {msg}")
            }
        }
    }

    // Full VAT numbers with country prefix
    println!("\n=== Prefixed VAT Numbers ===\n");

    for id in ["ATU12345678", "EL123456789", "DE12345678", "XX999999999"] {
        match registry.validate_prefixed(id) {
            Ok((rule, outcome)) => println!("  {id} => {} ({outcome})", rule.display_name()),
            Err(e) => println!("  {id} => {e}"),
        }
    }

    Ok(())
}
