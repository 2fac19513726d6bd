use colored::Colorize;
use tarot_draw::fnv1a_32;
use tarot_draw::rng::Mulberry32;

pub fn run(material: &str, count: usize) -> Result<(), String> {
    let seed = fnv1a_32(material);
    println!("  {} {seed}", "seed:".bold());

    let mut rng = Mulberry32::new(seed);
    for i in 0..count {
        println!("  {:>4}  {}", i, rng.next_f64());
    }
    Ok(())
}
