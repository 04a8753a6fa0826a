//! Basic usage of the break iterator

use breakiter_api::{create, BreakIteratorBuilder, BreakIteratorOptions, DONE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Factory with an options bag
    println!("=== Method 1: Factory ===");
    let text = "Hello world. This is a test. How are you?";
    let mut sentences = create("en", BreakIteratorOptions::sentence())?;
    sentences.adopt_text(text)?;

    let mut start = sentences.first();
    loop {
        let end = sentences.next();
        if end == DONE {
            break;
        }
        println!(
            "  [{start:>2}, {end:>2}) {:?}",
            &text[start as usize..end as usize]
        );
        start = end;
    }

    // Method 2: Builder, walking words
    println!("\n=== Method 2: Builder ===");
    let mut words = BreakIteratorBuilder::new()
        .locale("en-US")
        .kind("word")
        .build()?;
    words.adopt_text("The quick (\"brown\") fox")?;

    words.first();
    while let Some(segment) = words.current_segment() {
        println!("  {:>2}: {segment:?}", words.current());
        words.next();
    }
    println!("  break type: {}", words.break_type());

    // Method 3: Resolved options
    println!("\n=== Method 3: Resolved options ===");
    let graphemes = create(vec!["fr-CA", "fr"], BreakIteratorOptions::character())?;
    let resolved = graphemes.resolved_options();
    println!("  locale={} type={}", resolved.locale, resolved.kind);

    Ok(())
}
