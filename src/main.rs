use anyhow::Result;

fn main() -> Result<()> {
    prestige_cli::run()
}
