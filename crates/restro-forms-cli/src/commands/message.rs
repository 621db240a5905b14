use anyhow::{bail, Result};
use restro_forms::validation::{resolve_key, Params};

pub fn execute(reason: &str, params: &[String]) -> Result<()> {
    let mut parsed = Params::new();
    for param in params {
        let Some((name, value)) = param.split_once('=') else {
            bail!("Parameters must look like name=value, got '{}'", param);
        };
        parsed.insert(name.trim().to_string(), value.trim().to_string());
    }

    // Unknown reasons resolve to an empty line
    println!("{}", resolve_key(reason, &parsed));
    Ok(())
}
