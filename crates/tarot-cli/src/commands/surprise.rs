use chrono::Local;

pub fn run(ctx: &super::Context, name: &str) -> Result<(), String> {
    let mut service = ctx.service()?;
    let draw = service
        .surprise(name, &Local::now())
        .map_err(|e| e.to_string())?;
    super::present(&draw, &ctx.pacing());
    Ok(())
}
