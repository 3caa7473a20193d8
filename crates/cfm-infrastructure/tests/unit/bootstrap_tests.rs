//! Bootstrap tests

use cfm_application::ports::{ConfigSourceExt, ServiceAssembly, ServiceContext};
use cfm_application::use_cases::AssemblerState;
use cfm_domain::{Result, RuntimeMode};
use cfm_infrastructure::bootstrap;
use cfm_infrastructure::config::ConfigLoader;
use figment::Jail;
use std::sync::{Arc, Mutex};

struct Reader {
    seen: Arc<Mutex<Option<(Option<String>, RuntimeMode)>>>,
}

impl ServiceAssembly for Reader {
    fn name(&self) -> &str {
        "reader"
    }

    fn init(&mut self, ctx: &mut ServiceContext<'_>) -> Result<()> {
        let url = ctx.config().get_string("vault.url");
        *self.seen.lock().expect("lock") = Some((url, ctx.mode()));
        Ok(())
    }
}

#[test]
fn test_bootstrap_wires_config_and_mode() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "cfm.toml",
            "[runtime]\nmode = \"development\"\n\n[vault]\nurl = \"http://vault\"\n",
        )?;

        let mut boot = bootstrap(&ConfigLoader::new(), false)
            .map_err(|e| figment::Error::from(e.to_string()))?;
        assert_eq!(boot.assembler.mode(), RuntimeMode::Development);

        let seen = Arc::new(Mutex::new(None));
        boot.assembler
            .register(Reader {
                seen: Arc::clone(&seen),
            })
            .map_err(|e| figment::Error::from(e.to_string()))?;
        boot.assembler
            .assemble()
            .map_err(|e| figment::Error::from(e.to_string()))?;

        assert_eq!(boot.assembler.state(), AssemblerState::Running);
        assert_eq!(
            seen.lock().expect("lock").clone(),
            Some((Some("http://vault".to_string()), RuntimeMode::Development))
        );
        Ok(())
    });
}
