use comfy_table::{ContentArrangement, Table};

pub fn run(ctx: &super::Context, json: bool) -> Result<(), String> {
    let catalog = ctx.catalog()?;

    if json {
        let cards: Vec<_> = catalog.iter().collect();
        let out = serde_json::to_string_pretty(&cards).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Id", "Name", "Arcana", "Keywords"]);

    for (i, card) in catalog.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            card.id.clone(),
            card.name.clone(),
            card.arcana.to_string(),
            card.keywords.join(", "),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", catalog.len());

    Ok(())
}
