use tracing_subscriber::EnvFilter;
use vatfeld::session::Selection;
use vatfeld::{CountryRegistry, RegistryError, SearchView};

fn show(view: &SearchView<'_>) -> String {
    match view {
        SearchView::Inactive => "(closed)".into(),
        SearchView::NoResults => "No results".into(),
        SearchView::Matches(rules) => rules
            .iter()
            .map(|r| r.label())
            .collect::<Vec<_>>()
            .join(" / "),
    }
}

fn main() -> Result<(), RegistryError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = CountryRegistry::reference()?;
    let mut form = Selection::new(&registry);

    println!("=== Country + VAT Form ===\n");

    for text in ["p", "po", "port"] {
        let view = form.set_search_text(text);
        println!("  country field {text:?}: {}", show(&view));
    }

    form.select("PT")?;
    println!("\n  selected: {}", form.search_text());
    println!("  VAT placeholder: {}", form.example_hint().unwrap_or("-"));

    for typed in ["2", "24988877", "249888776", "24988877X"] {
        if let Some(outcome) = form.set_candidate(typed) {
            println!("  VAT field {typed:?}: {outcome}");
        }
    }

    // typing over the selected country drops it, and the VAT number with it
    let view = form.set_search_text("PT | Portug");
    println!("\n  country field edited: {}", show(&view));
    println!("  selected: {:?}", form.selected().map(|r| r.code()));
    println!("  VAT outcome: {:?}", form.outcome());

    form.blur();
    println!("  after blur: {:?}", form.search_text());

    Ok(())
}
