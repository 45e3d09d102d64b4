//! Plain-text output for plans, patterns, and the catalog.

use duet_core::{Catalog, DatePlan, SuccessPattern};

pub fn print_plans(plans: &[DatePlan]) {
    println!("\nYOUR MONTHLY PLAN\n");
    for plan in plans {
        println!("{} — {}", plan.title, plan.cost);
        println!("  {} | {}", plan.location, plan.tags.join(", "));
        println!("  {}", plan.description);
        if !plan.place_options.is_empty() {
            println!("  Where to go:");
            for venue in plan.place_options.iter().take(3) {
                println!(
                    "    {} {} ({:.1}★, {} reviews) ~${:.0}",
                    venue.price_symbol(),
                    venue.name,
                    venue.rating,
                    venue.review_count,
                    venue.estimated_cost,
                );
            }
        }
        println!();
    }
}

pub fn print_pattern(pattern: &SuccessPattern, total_events: usize) {
    println!("Success pattern from {total_events} events:");
    println!(
        "  preferred price range: ${:.2} - ${:.2}",
        pattern.preferred_price_range.min, pattern.preferred_price_range.max
    );
    println!("  avg successful price:  ${:.2}", pattern.avg_successful_price);
    println!("  success rate:          {:.0}%", pattern.success_rate * 100.0);
    println!(
        "  distribution:          low={} mid={} high={}",
        pattern.price_distribution.low,
        pattern.price_distribution.mid,
        pattern.price_distribution.high
    );
}

pub fn print_catalog(catalog: &Catalog) {
    println!("{} archetypes:\n", catalog.len());
    for a in catalog.archetypes() {
        println!(
            "[{:?}/{:?}] {} — {} ({})",
            a.budget_tier, a.category, a.title, a.location, a.cost
        );
    }
}
