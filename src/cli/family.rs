//! Family message command

use anyhow::Result;

use safeguard::family::build_family_message;
use safeguard::settings::Settings;

use super::AppContext;

pub fn family_command(ctx: &AppContext, text: &str) -> Result<()> {
    let settings = Settings::load(&ctx.store);
    let message = build_family_message(
        text,
        &settings,
        ctx.config.general.family_message_max_chars,
    );

    if message.to.is_empty() {
        println!("To: (no phone set, use `safeguard settings contact NAME PHONE`)");
    } else {
        println!("To: {}", message.to);
    }
    println!("\n{}\n", message.text);
    println!("{}", message.sms_uri());

    Ok(())
}
