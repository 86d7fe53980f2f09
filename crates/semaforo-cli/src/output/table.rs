use rust_decimal::Decimal;
use semaforo_core::classify::verdict::AnalysisVerdict;
use semaforo_core::directory::Supplier;
use semaforo_core::limits::schema::LimitsDef;
use semaforo_core::record::AnalysisRecord;

pub fn print_verdict(verdict: &AnalysisVerdict, verbose: bool) {
    let micro = &verdict.microbiology;
    println!("Microbiology: {} ({})", micro.level, micro.level.style_key());
    println!("  {}", micro.reason);

    if verbose {
        println!();
        let max_name = micro
            .signals
            .iter()
            .map(|s| s.metric.to_string().len())
            .max()
            .unwrap_or(10);
        for signal in &micro.signals {
            println!(
                "  {:<width$}  {:>15}  -> {}",
                signal.metric.to_string(),
                signal.shown_value,
                signal.level,
                width = max_name
            );
            println!("    {}", signal.reason);
        }
    }

    println!();
    let pest = &verdict.pesticide;
    println!("Pesticide:    {} ({})", pest.level, pest.level.style_key());
    println!("  {}", pest.reason);
}

pub fn print_history(supplier_code: &str, records: &[AnalysisRecord]) {
    if records.is_empty() {
        println!("No previous records for supplier {supplier_code}.");
        return;
    }

    println!(
        "{:<12}  {:<10}  {:>10}  {:>10}  {:>10}  {:<15}  {:<8}  {:<8}",
        "Date", "Pathogen", "Indicator", "Fecal", "Total", "Pesticide", "Micro", "Pest"
    );
    for record in records {
        println!(
            "{:<12}  {:<10}  {:>10}  {:>10}  {:>10}  {:<15}  {:<8}  {:<8}",
            record.date.to_string(),
            record.microbiology.pathogen.to_string(),
            show_count(record.microbiology.indicator_count),
            show_count(record.microbiology.fecal_coliform_count),
            show_count(record.microbiology.total_coliform_count),
            record.pesticide.to_string(),
            record.semaphores.microbiology.to_string(),
            record.semaphores.pesticide.to_string(),
        );
    }
}

pub fn print_suppliers(suppliers: &[Supplier]) {
    let max_name = suppliers
        .iter()
        .map(|s| s.name.as_deref().unwrap_or("N/A").len())
        .max()
        .unwrap_or(10);

    for supplier in suppliers {
        let marker = if supplier.active { "" } else { "  (inactive)" };
        println!(
            "  {:<8}  {:<width$}  {}{}",
            supplier.code,
            supplier.name.as_deref().unwrap_or("N/A"),
            supplier.origin_region.as_deref().unwrap_or("--"),
            marker,
            width = max_name
        );
    }
}

pub fn print_limits(limits: &LimitsDef) {
    println!("{} (version {})\n", limits.name, limits.version);
    if let Some(ref description) = limits.description {
        println!("{description}\n");
    }

    println!(
        "  {:<20}  {:<10}  {:<10}  Unit",
        "Metric", "Advisory", "Critical"
    );
    println!("  {}", "-".repeat(52));
    println!(
        "  {:<20}  {:<10}  {:<10}  cfu/g",
        "indicator organism",
        "-",
        limits.indicator_critical.to_string()
    );
    println!(
        "  {:<20}  {:<10}  {:<10}  cfu/g",
        "fecal coliforms",
        "-",
        limits.fecal_critical.to_string()
    );
    println!(
        "  {:<20}  {:<10}  {:<10}  cfu/g",
        "total coliforms",
        limits.total_advisory.to_string(),
        limits.total_critical.to_string()
    );
}

fn show_count(count: Option<Decimal>) -> String {
    match count {
        Some(v) => v.to_string(),
        None => "N/A".to_string(),
    }
}
