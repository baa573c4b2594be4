//! Builds a sample alert and module configuration and prints them as JSON.

use opsmgr_config::config::{apply_update, AlertConfiguration, AlertUpdate, ModuleConfiguration};
use opsmgr_config::lifecycle::tracing::setup_tracing;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let mut alert = AlertConfiguration::new()
        .with_string_resource_name("Contoso.App.Service.Stopped.AlertMessage")
        .with_alert_name("Contoso App service stopped")
        .with_alert_description("The Contoso App service on {0} is not running.");
    alert.set_language_pack_id("ENU")?;
    info!(language_pack = ?alert.language_pack_id(), "Alert configured");

    // A two-letter code is refused and the stored id stays as it was.
    let rejected = apply_update(
        &mut alert,
        AlertUpdate {
            language_pack_id: Some("EN".to_string()),
            ..Default::default()
        },
    );
    if let Err(e) = rejected {
        info!(error = %e, language_pack = ?alert.language_pack_id(), "Kept previous language pack");
    }

    let module = ModuleConfiguration::new()
        .with_module_type_name("Microsoft.Windows.TimedScript.PropertyBagProvider")
        .with_configuration("<Config/>")
        .with_member_module_name("DS")
        .with_run_as_mp_name("Microsoft.Windows.Library")
        .with_run_as_name("Domain\\User");
    info!(module_type = ?module.module_type_name(), "Module configured");

    println!("{}", serde_json::to_string_pretty(&alert)?);
    println!("{}", serde_json::to_string_pretty(&module)?);

    info!("Done");
    Ok(())
}
