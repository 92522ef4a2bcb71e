use tracing_subscriber::EnvFilter;
use unit_convert::session::{FormController, MemoryView};
use unit_convert::{ConverterConfig, UnitTable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Optional config path as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => ConverterConfig::from_file(path)?,
        None => ConverterConfig::default(),
    };

    let controller = FormController::new(&config);
    let mut view = MemoryView::new("length");
    controller.initialize(&mut view);

    println!("Categories:");
    for option in UnitTable::builtin().category_options() {
        println!("  {} ({})", option.label, option.value);
    }

    let steps: [(&str, &str, &str, &str); 5] = [
        ("length", "kilometer", "mile", "42.195"),
        ("temperature", "fahrenheit", "celsius", "98.6"),
        ("storage", "gigabyte", "megabyte", "1.5"),
        ("mass", "stevenHawking", "pound", "two"),
        ("money", "euro", "japaneseYen", "250"),
    ];

    for (category, from, to, value) in steps {
        view.select_category(category);
        controller.on_category_change(&mut view);
        view.select_units(from, to);
        view.enter_value(value);
        controller.on_submit(&mut view);
        println!("{}", view.result_text);
    }

    controller.on_reset(&mut view);
    println!("{}", view.result_text);

    Ok(())
}
