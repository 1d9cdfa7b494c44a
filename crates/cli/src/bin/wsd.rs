use anyhow::Result;

fn main() -> Result<()> {
    wsd_cli::main_entry()
}
