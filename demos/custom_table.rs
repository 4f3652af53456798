use tracing_subscriber::EnvFilter;
use vatfeld::{CountryRegistry, RegistryError};

const TABLE: &str = r#"[
    {
        "code": "CH",
        "display_name": "Schweiz",
        "format_pattern": "E[0-9]{9}",
        "example_value": "E123456789",
        "format_description": "E followed by 9 digits.",
        "message": "Swiss UID numbers look like E123456789."
    },
    {
        "code": "NO",
        "display_name": "Norge",
        "format_pattern": "[0-9]{9}",
        "example_value": "123456789",
        "format_description": "9 digits."
    }
]"#;

fn main() -> Result<(), RegistryError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Custom Rule Table (JSON) ===\n");

    let registry = CountryRegistry::from_json(TABLE)?;
    for rule in &registry {
        let bounds = rule.bounds();
        println!(
            "  {} pattern={} length={}..={} example={}",
            rule.label(),
            rule.format_pattern(),
            bounds.min,
            bounds.max.map_or("∞".to_string(), |m| m.to_string()),
            rule.example_value()
        );
    }

    println!();
    for (code, candidate) in [("CH", "E12345678"), ("CH", "F123456789"), ("NO", "123456789")] {
        println!("  {code} {candidate} => {}", registry.validate(code, candidate)?);
    }

    // Defects are caught at load time
    println!("\n=== Rejected Tables ===\n");

    let broken = [
        r#"[{"code":"CH","display_name":"Schweiz","format_pattern":"E[0-9{9}","example_value":"E123456789","format_description":"-"}]"#,
        r#"[{"code":"CH","display_name":"Schweiz","format_pattern":"E[0-9]{9}","example_value":"123","format_description":"-"}]"#,
        r#"[{"code":"ZZ","display_name":"Nowhere","format_pattern":"[0-9]{9}","example_value":"123456789","format_description":"-"}]"#,
    ];
    for json in broken {
        if let Err(e) = CountryRegistry::from_json(json) {
            println!("  {e}");
        }
    }

    Ok(())
}
