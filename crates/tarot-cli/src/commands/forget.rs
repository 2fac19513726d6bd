use chrono::Local;
use tarot_draw::DayKey;

pub fn run(ctx: &super::Context) -> Result<(), String> {
    let mut service = ctx.service()?;
    let day = DayKey::of(&Local::now());
    service.forget_daily(&day).map_err(|e| e.to_string())?;
    println!("  Forgot the reading for {day}.");
    Ok(())
}
