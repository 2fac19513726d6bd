use chrono::Local;
use tarot_draw::share_text;

pub fn run(ctx: &super::Context, name: &str) -> Result<(), String> {
    let mut service = ctx.service()?;
    let draw = service
        .daily(name, &Local::now())
        .map_err(|e| e.to_string())?;
    println!("{}", share_text(&draw));
    Ok(())
}
