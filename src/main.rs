use anyhow::Result;
use devcli::commands::Registry;

fn main() -> Result<()> {
    let registry = Registry::builtin()?;
    let matches = devcli::command(&registry).get_matches();
    devcli::run(&registry, &matches)
}
