use anyhow::{bail, Result};
use std::path::PathBuf;
use vault_triage::VaultTriage;

fn main() -> Result<()> {
    let mut args = std::env::args_os().skip(1);
    let input = match (args.next(), args.next()) {
        (Some(p), None) => PathBuf::from(p),
        _ => bail!("usage: vault-triage <destinyArmor.csv>"),
    };

    let summary = VaultTriage::new().run(&input)?;
    println!(
        "{} items: kept {}, tagged {} as junk -> {}",
        summary.rows,
        summary.kept,
        summary.junked,
        summary.output.display()
    );
    Ok(())
}
