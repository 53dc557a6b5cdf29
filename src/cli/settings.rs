//! Settings commands

use anyhow::Result;
use tracing::info;

use safeguard::settings::Settings;

use super::AppContext;

pub fn show_command(ctx: &AppContext) -> Result<()> {
    let settings = Settings::load(&ctx.store);

    println!("Large text:  {}", on_off(settings.large_text));
    println!("Escort mode: {}", on_off(settings.escort_mode));
    println!("Whitelist:   {}", settings.whitelist.join(", "));
    println!("Contacts:");
    for contact in &settings.emergency_contacts {
        let phone = if contact.phone.is_empty() {
            "(no phone)"
        } else {
            contact.phone.as_str()
        };
        println!("  {} {}", contact.name, phone);
    }

    Ok(())
}

pub fn whitelist_add(ctx: &AppContext, entry: &str) -> Result<()> {
    update(ctx, |s| {
        if s.add_whitelist_entry(entry) {
            println!("Added {:?} to whitelist.", entry.trim().to_lowercase());
        } else {
            println!("{:?} is empty or already whitelisted.", entry);
        }
    })
}

pub fn whitelist_remove(ctx: &AppContext, entry: &str) -> Result<()> {
    update(ctx, |s| {
        if s.remove_whitelist_entry(entry) {
            println!("Removed {:?} from whitelist.", entry);
        } else {
            println!("{:?} was not whitelisted.", entry);
        }
    })
}

pub fn whitelist_reset(ctx: &AppContext) -> Result<()> {
    update(ctx, |s| {
        s.reset_whitelist();
        println!("Whitelist reset to {}.", s.whitelist.join(", "));
    })
}

pub fn contact_command(ctx: &AppContext, name: &str, phone: &str) -> Result<()> {
    update(ctx, |s| {
        s.set_primary_contact(name, phone);
        println!("Emergency contact set to {} {}.", name.trim(), phone.trim());
    })
}

pub fn large_text_command(ctx: &AppContext, enabled: bool) -> Result<()> {
    update(ctx, |s| {
        s.large_text = enabled;
        println!("Large text {}.", on_off(enabled));
    })
}

pub fn escort_command(ctx: &AppContext, enabled: bool) -> Result<()> {
    update(ctx, |s| {
        s.escort_mode = enabled;
        println!("Escort mode {}.", on_off(enabled));
    })
}

/// Load, modify and save settings under the store lock
fn update(ctx: &AppContext, f: impl FnOnce(&mut Settings)) -> Result<()> {
    Settings::update(&ctx.store, f)?;
    info!("Saved settings to {}", ctx.store.root().display());
    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
